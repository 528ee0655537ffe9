//! GameLoop: the single-threaded scheduler.
//!
//! One iteration waits for input until the earliest gravity deadline. A byte
//! is decoded and applied to the session; an expired wait is a gravity tick
//! for every player whose deadline has passed. Every iteration ends with a
//! redraw.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::core::{Session, SessionStatus, StepOutcome};
use crate::input::{InputDecoder, InputSource};
use crate::term::{SessionView, Surface};
use crate::types::{Command, PlayerAction, PlayerId};

/// What one loop iteration did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The wait expired; one outcome per player that was due
    Gravity(ArrayVec<StepOutcome, 2>),
    /// A player action was applied
    Action {
        player: PlayerId,
        action: PlayerAction,
        outcome: StepOutcome,
    },
    /// Quit or a display toggle
    Meta(Command),
    /// A byte that completed no command (part of a sequence, or unbound)
    Unbound(u8),
}

pub struct GameLoop<I, C, S> {
    session: Session,
    decoder: InputDecoder,
    input: I,
    clock: C,
    surface: S,
    view: SessionView,
}

impl<I: InputSource, C: Clock, S: Surface> GameLoop<I, C, S> {
    pub fn new(session: Session, decoder: InputDecoder, input: I, clock: C, surface: S) -> Self {
        let view = SessionView::new(session.mode());
        Self {
            session,
            decoder,
            input,
            clock,
            surface,
            view,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// How long the next wait may block
    pub fn wait_time(&self) -> Duration {
        let now = self.clock.now_us();
        let wait_us = self
            .session
            .next_deadline_us()
            .map_or(0, |deadline| deadline.saturating_sub(now));
        Duration::from_micros(wait_us)
    }

    /// Run until quit or game over and return how the session ended
    pub fn run(&mut self) -> Result<SessionStatus> {
        self.view.draw(&self.session, &mut self.surface)?;
        while self.session.is_running() {
            self.step()?;
        }
        let status = self.session.status();
        debug!(?status, "game loop finished");
        Ok(status)
    }

    /// One wait, its consequence and a redraw
    pub fn step(&mut self) -> Result<Step> {
        let wait = self.wait_time();
        let step = match self.input.poll_byte(wait)? {
            None => {
                self.decoder.timeout();
                let now = self.clock.now_us();
                let outcomes = self.session.tick(now);
                if !outcomes.is_empty() {
                    trace!(now_us = now, due = outcomes.len(), "gravity");
                }
                Step::Gravity(outcomes)
            }
            Some(byte) => match self.decoder.feed(byte) {
                Some(command) => self.dispatch(command),
                None => Step::Unbound(byte),
            },
        };

        self.view.draw(&self.session, &mut self.surface)?;
        Ok(step)
    }

    /// Apply a decoded command at the current time
    pub fn dispatch(&mut self, command: Command) -> Step {
        trace!(?command, "command");
        match command {
            Command::Quit => self.session.quit(),
            Command::ToggleHelp => self.session.toggle_help(),
            Command::TogglePreview => self.session.toggle_preview(),
            Command::ToggleColor => self.session.toggle_color(),
            Command::Player(player, action) => {
                let now = self.clock.now_us();
                let outcome = self.session.apply_action(player, action, now);
                return Step::Action {
                    player,
                    action,
                    outcome,
                };
            }
        }
        Step::Meta(command)
    }
}
