//! Byte-stream decoder.
//!
//! Turns raw terminal bytes into [`Command`]s. The decoder remembers the last
//! two keys it saw: a byte following `ESC [` is the final byte of an arrow
//! sequence and is looked up as an arrow, everything else is ASCII-lowercased
//! and looked up as a literal key.

use crate::bindings::{ArrowKey, KeyBindings};
use crate::types::{Command, ESC};

/// Stateful byte-to-command decoder
#[derive(Debug, Clone)]
pub struct InputDecoder {
    bindings: KeyBindings,
    /// The two previous keys, oldest first.
    history: [u8; 2],
}

impl InputDecoder {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            history: [0, 0],
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Decode one byte
    pub fn feed(&mut self, byte: u8) -> Option<Command> {
        let in_sequence = self.history == [ESC, b'['];
        let key = if in_sequence {
            byte
        } else {
            byte.to_ascii_lowercase()
        };
        self.history = [self.history[1], key];

        if in_sequence {
            ArrowKey::from_final_byte(key).and_then(|arrow| self.bindings.arrow(arrow))
        } else {
            self.bindings.literal(key)
        }
    }

    /// A poll timed out; any partial escape sequence is abandoned
    pub fn timeout(&mut self) {
        self.history = [0, 0];
    }

    /// Decode a burst of bytes, dropping those that map to nothing
    pub fn decode_all(&mut self, bytes: &[u8]) -> Vec<Command> {
        bytes.iter().filter_map(|&byte| self.feed(byte)).collect()
    }
}

impl Default for InputDecoder {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlayerAction, PlayerId};

    fn p1(action: PlayerAction) -> Command {
        Command::Player(PlayerId::One, action)
    }

    #[test]
    fn test_up_arrow_is_not_literal_a() {
        let mut decoder = InputDecoder::default();
        assert_eq!(decoder.feed(ESC), None);
        assert_eq!(decoder.feed(b'['), None);
        assert_eq!(decoder.feed(b'A'), Some(p1(PlayerAction::Rotate)));

        // The same final byte on its own is the hard-drop key.
        assert_eq!(decoder.feed(b'A'), Some(p1(PlayerAction::HardDrop)));
        assert_eq!(decoder.feed(b'a'), Some(p1(PlayerAction::HardDrop)));
    }

    #[test]
    fn test_lowercase_final_byte_is_still_an_arrow() {
        let mut decoder = InputDecoder::default();
        let commands = decoder.decode_all(&[ESC, b'[', b'a']);
        assert_eq!(commands.as_slice(), &[p1(PlayerAction::Rotate)]);
    }

    #[test]
    fn test_all_arrows() {
        let mut decoder = InputDecoder::default();
        let commands = decoder.decode_all(&[
            ESC, b'[', b'A', ESC, b'[', b'B', ESC, b'[', b'C', ESC, b'[', b'D',
        ]);
        assert_eq!(
            commands.as_slice(),
            &[
                p1(PlayerAction::Rotate),
                p1(PlayerAction::SoftDrop),
                p1(PlayerAction::MoveRight),
                p1(PlayerAction::MoveLeft),
            ]
        );
    }

    #[test]
    fn test_letters_are_case_folded() {
        let mut decoder = InputDecoder::default();
        assert_eq!(decoder.feed(b'D'), Some(p1(PlayerAction::MoveLeft)));
        assert_eq!(decoder.feed(b'Q'), Some(Command::Quit));
        assert_eq!(decoder.feed(b'H'), Some(Command::ToggleHelp));
    }

    #[test]
    fn test_timeout_abandons_partial_sequence() {
        let mut decoder = InputDecoder::default();
        decoder.feed(ESC);
        decoder.feed(b'[');
        decoder.timeout();
        assert_eq!(decoder.feed(b'A'), Some(p1(PlayerAction::HardDrop)));
    }

    #[test]
    fn test_unknown_sequence_final_byte_is_dropped() {
        let mut decoder = InputDecoder::default();
        let commands = decoder.decode_all(&[ESC, b'[', b'5', b'5']);
        // The first '5' ends the sequence; the second is player 2's soft drop.
        assert_eq!(
            commands.as_slice(),
            &[Command::Player(PlayerId::Two, PlayerAction::SoftDrop)]
        );
    }

    #[test]
    fn test_long_burst_keeps_every_command() {
        let mut decoder = InputDecoder::default();
        let commands = decoder.decode_all(&[b'd'; 20]);
        assert_eq!(commands.len(), 20);
        assert!(commands.iter().all(|&c| c == p1(PlayerAction::MoveLeft)));
    }

    #[test]
    fn test_lone_escape_and_bracket_produce_nothing() {
        let mut decoder = InputDecoder::default();
        assert!(decoder.decode_all(&[ESC]).is_empty());
        assert!(decoder.decode_all(&[b'[']).is_empty());
    }
}
