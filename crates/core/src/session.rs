//! Session module - the complete engine state shared by both players
//!
//! The session owns every piece of mutable game state: the players, the RNG,
//! the gravity interval, the optional classic scoreboard and the display
//! flags. Time is passed in by the caller as microseconds since session start,
//! so the session itself never reads a clock.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::collision::MoveOutcome;
use crate::player::PlayerState;
use crate::rng::SimpleRng;
use crate::scoring::{accelerated_delay, Scoreboard};
use crate::types::{GameMode, PlayerAction, PlayerId, INITIAL_DELAY_US};

/// Session setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub seed: u32,
    pub initial_delay_us: u64,
    /// When true, resetting gravity for one player resets it for every player.
    pub shared_gravity: bool,
    pub flags: DisplayFlags,
}

impl SessionConfig {
    pub fn new(seed: u32) -> Self {
        Self {
            mode: GameMode::Versus,
            seed,
            initial_delay_us: INITIAL_DELAY_US,
            shared_gravity: true,
            flags: DisplayFlags::default(),
        }
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_shared_gravity(mut self, shared: bool) -> Self {
        self.shared_gravity = shared;
        self
    }

    pub fn with_flags(mut self, flags: DisplayFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Presentation toggles; they never affect game rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    pub help_visible: bool,
    pub next_visible: bool,
    pub use_color: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            help_visible: true,
            next_visible: true,
            use_color: true,
        }
    }
}

/// Lifecycle of the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    /// Ended by a quit command
    Quit,
    /// Ended because `loser`'s next piece could not spawn
    GameOver { loser: PlayerId },
}

/// What happened during one lock sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockReport {
    pub player: PlayerId,
    pub lines_cleared: u32,
    /// Rows credited to the opponent (0 when there is no opponent)
    pub lines_sent: u32,
    /// Garbage rows injected into this player's playfield before the spawn
    pub garbage_received: u32,
    pub level_up: bool,
}

/// Result of applying one action or gravity step to a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece moved or rotated
    Moved,
    /// Nothing changed (blocked move, unknown player, session over)
    Ignored,
    /// The piece locked and the next one spawned
    Locked(LockReport),
    /// The piece locked and the next one could not spawn
    GameOver(LockReport),
}

impl StepOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, StepOutcome::GameOver(_))
    }

    pub fn lock_report(&self) -> Option<&LockReport> {
        match self {
            StepOutcome::Locked(report) | StepOutcome::GameOver(report) => Some(report),
            _ => None,
        }
    }
}

/// Complete engine state
#[derive(Debug, Clone)]
pub struct Session {
    players: ArrayVec<PlayerState, 2>,
    rng: SimpleRng,
    mode: GameMode,
    delay_us: u64,
    shared_gravity: bool,
    scoreboard: Option<Scoreboard>,
    flags: DisplayFlags,
    status: SessionStatus,
}

impl Session {
    /// Create a session and spawn each player's first piece
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let mut players = ArrayVec::new();
        for &id in PlayerId::ALL.iter().take(config.mode.player_count()) {
            players.push(PlayerState::new(id, &mut rng));
        }

        info!(
            mode = config.mode.as_str(),
            seed = config.seed,
            players = players.len(),
            "session started"
        );

        Self {
            players,
            rng,
            mode: config.mode,
            delay_us: config.initial_delay_us,
            shared_gravity: config.shared_gravity,
            scoreboard: config.mode.scoring_enabled().then(Scoreboard::new),
            flags: config.flags,
            status: SessionStatus::Running,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Current gravity interval in microseconds
    pub fn delay_us(&self) -> u64 {
        self.delay_us
    }

    pub fn shared_gravity(&self) -> bool {
        self.shared_gravity
    }

    pub fn scoreboard(&self) -> Option<&Scoreboard> {
        self.scoreboard.as_ref()
    }

    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.get(id.index())
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut PlayerState> {
        self.players.get_mut(id.index())
    }

    /// Earliest gravity deadline across all players
    pub fn next_deadline_us(&self) -> Option<u64> {
        self.players
            .iter()
            .map(|p| p.gravity_deadline_us(self.delay_us))
            .min()
    }

    /// Restart the gravity clock at `now_us` for `id` (or for everyone when shared)
    pub fn reset_gravity(&mut self, id: PlayerId, now_us: u64) {
        if self.shared_gravity {
            for player in self.players.iter_mut() {
                player.reset_gravity(now_us);
            }
        } else if let Some(player) = self.player_mut(id) {
            player.reset_gravity(now_us);
        }
    }

    pub fn toggle_help(&mut self) {
        self.flags.help_visible = !self.flags.help_visible;
    }

    pub fn toggle_preview(&mut self) {
        self.flags.next_visible = !self.flags.next_visible;
    }

    pub fn toggle_color(&mut self) {
        self.flags.use_color = !self.flags.use_color;
    }

    /// End the session on user request
    pub fn quit(&mut self) {
        if self.is_running() {
            info!("session quit");
            self.status = SessionStatus::Quit;
        }
    }

    /// Apply a player action at time `now_us`
    pub fn apply_action(&mut self, id: PlayerId, action: PlayerAction, now_us: u64) -> StepOutcome {
        if !self.is_running() || self.player(id).is_none() {
            return StepOutcome::Ignored;
        }

        match action {
            PlayerAction::MoveLeft => self.shift(id, -1, 0, 0),
            PlayerAction::MoveRight => self.shift(id, 1, 0, 0),
            PlayerAction::Rotate => self.shift(id, 0, 0, 1),
            PlayerAction::SoftDrop => {
                self.reset_gravity(id, now_us);
                self.step_down(id)
            }
            PlayerAction::HardDrop => self.hard_drop(id),
        }
    }

    /// Gravity step: every player whose deadline has passed drops one row
    ///
    /// Players are processed in id order; the step stops early if a lock ends
    /// the session.
    pub fn tick(&mut self, now_us: u64) -> ArrayVec<StepOutcome, 2> {
        let mut outcomes = ArrayVec::new();
        if !self.is_running() {
            return outcomes;
        }

        let delay = self.delay_us;
        let due: ArrayVec<PlayerId, 2> = self
            .players
            .iter()
            .filter(|p| p.gravity_deadline_us(delay) <= now_us)
            .map(|p| p.id())
            .collect();

        for id in due {
            if !self.is_running() {
                break;
            }
            self.reset_gravity(id, now_us);
            outcomes.push(self.step_down(id));
        }
        outcomes
    }

    fn shift(&mut self, id: PlayerId, dx: i8, dy: i8, drot: u8) -> StepOutcome {
        let moved = self
            .players
            .get_mut(id.index())
            .map(|player| player.try_move(dx, dy, drot));
        match moved {
            Some(MoveOutcome::Applied) => StepOutcome::Moved,
            _ => StepOutcome::Ignored,
        }
    }

    /// One row down, locking when blocked
    fn step_down(&mut self, id: PlayerId) -> StepOutcome {
        let Some(player) = self.players.get_mut(id.index()) else {
            return StepOutcome::Ignored;
        };
        match player.try_move(0, 1, 0) {
            MoveOutcome::Applied => StepOutcome::Moved,
            MoveOutcome::Blocked | MoveOutcome::Landed => self.lock(id),
        }
    }

    fn hard_drop(&mut self, id: PlayerId) -> StepOutcome {
        loop {
            match self.step_down(id) {
                StepOutcome::Moved => continue,
                outcome => return outcome,
            }
        }
    }

    /// Lock sequence: flatten, clear, attack, receive garbage, spawn
    fn lock(&mut self, id: PlayerId) -> StepOutcome {
        let idx = id.index();
        let cleared = self.players[idx].settle();

        let mut lines_sent = 0;
        let mut level_up = false;
        if cleared > 0 {
            if let Some(opponent) = self.players.get_mut(id.opponent().index()) {
                opponent.attacks_mut().credit(cleared);
                lines_sent = cleared;
            }
            if let Some(board) = self.scoreboard.as_mut() {
                level_up = board.record(cleared);
                if level_up {
                    self.delay_us = accelerated_delay(self.delay_us);
                    info!(level = board.level(), delay_us = self.delay_us, "level up");
                }
            }
        }

        let player = &mut self.players[idx];
        let garbage_received = player.receive_garbage(&mut self.rng);
        let spawned = player.spawn_next(&mut self.rng);

        let report = LockReport {
            player: id,
            lines_cleared: cleared,
            lines_sent,
            garbage_received,
            level_up,
        };
        debug!(
            player = ?id,
            cleared,
            lines_sent,
            garbage_received,
            "piece locked"
        );

        if spawned {
            StepOutcome::Locked(report)
        } else {
            info!(loser = ?id, "spawn blocked, game over");
            self.status = SessionStatus::GameOver { loser: id };
            StepOutcome::GameOver(report)
        }
    }
}
