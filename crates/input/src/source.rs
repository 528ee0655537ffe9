//! Byte sources with a bounded wait.
//!
//! The engine only ever asks for "the next byte, or nothing within this
//! timeout". [`TerminalInput`] answers that from crossterm key events by
//! re-encoding each key into the bytes a raw-mode terminal would have sent,
//! so the decoder sees one uniform stream.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{CTRL_C, ESC};

/// Longest byte sequence a single key expands to (a UTF-8 char).
pub const MAX_KEY_BYTES: usize = 4;

/// A readable byte stream with a bounded wait
pub trait InputSource {
    /// Wait up to `timeout` for one byte; `Ok(None)` means the wait expired
    fn poll_byte(&mut self, timeout: Duration) -> Result<Option<u8>>;
}

/// Encode a key event as raw terminal bytes
///
/// Keys with no byte form (function keys, modifiers alone) encode to nothing.
pub fn encode_key(key: KeyEvent) -> ArrayVec<u8, MAX_KEY_BYTES> {
    let mut out = ArrayVec::new();
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if c.eq_ignore_ascii_case(&'c') {
                out.push(CTRL_C);
            } else if c.is_ascii_alphabetic() {
                out.push(c.to_ascii_lowercase() as u8 - b'a' + 1);
            }
        }
        KeyCode::Char(c) => {
            let mut utf8 = [0u8; MAX_KEY_BYTES];
            out.extend(c.encode_utf8(&mut utf8).bytes());
        }
        KeyCode::Up => out.extend([ESC, b'[', b'A']),
        KeyCode::Down => out.extend([ESC, b'[', b'B']),
        KeyCode::Right => out.extend([ESC, b'[', b'C']),
        KeyCode::Left => out.extend([ESC, b'[', b'D']),
        KeyCode::Esc => out.push(ESC),
        KeyCode::Enter => out.push(b'\r'),
        KeyCode::Tab => out.push(b'\t'),
        KeyCode::Backspace => out.push(0x7f),
        _ => {}
    }
    out
}

/// Keyboard input from the controlling terminal
///
/// Requires raw mode (see `TerminalGuard` in the term crate).
#[derive(Debug, Default)]
pub struct TerminalInput {
    pending: VecDeque<u8>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for TerminalInput {
    fn poll_byte(&mut self, timeout: Duration) -> Result<Option<u8>> {
        if let Some(byte) = self.pending.pop_front() {
            return Ok(Some(byte));
        }

        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            // Auto-repeat is delivered as repeated presses, like a raw tty would.
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                self.pending.extend(encode_key(key));
                Ok(self.pending.pop_front())
            }
            // Resize, focus and mouse events carry no input bytes.
            _ => Ok(None),
        }
    }
}

/// Replays a fixed script; each `None` entry is an expired wait
///
/// Once the script runs out every poll reports an expired wait.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<u8>>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Option<u8>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Script made only of bytes, with no waits in between
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(Some))
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_byte(&mut self, _timeout: Duration) -> Result<Option<u8>> {
        Ok(self.script.pop_front().flatten())
    }
}
