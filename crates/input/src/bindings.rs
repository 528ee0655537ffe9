//! Key bindings from decoded keys to commands.
//!
//! Each player gets the same set of five actions bound to different keys, and
//! the arrow keys can be routed to one player. Letters are stored lowercase;
//! the decoder folds input before lookup.

use crate::types::{Command, PlayerAction, PlayerId, CTRL_C};

/// Direction keys delivered as `ESC [ <final>` sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    Up,
    Down,
    Right,
    Left,
}

impl ArrowKey {
    /// Map the final byte of an `ESC [` sequence, in either case
    pub fn from_final_byte(byte: u8) -> Option<Self> {
        match byte.to_ascii_uppercase() {
            b'A' => Some(ArrowKey::Up),
            b'B' => Some(ArrowKey::Down),
            b'C' => Some(ArrowKey::Right),
            b'D' => Some(ArrowKey::Left),
            _ => None,
        }
    }

    /// Final byte emitted by terminals for this key
    pub fn final_byte(self) -> u8 {
        match self {
            ArrowKey::Up => b'A',
            ArrowKey::Down => b'B',
            ArrowKey::Right => b'C',
            ArrowKey::Left => b'D',
        }
    }

    /// Action the key stands for
    pub fn action(self) -> PlayerAction {
        match self {
            ArrowKey::Up => PlayerAction::Rotate,
            ArrowKey::Down => PlayerAction::SoftDrop,
            ArrowKey::Right => PlayerAction::MoveRight,
            ArrowKey::Left => PlayerAction::MoveLeft,
        }
    }
}

/// One player's literal keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerKeys {
    pub move_left: u8,
    pub move_right: u8,
    pub rotate: u8,
    pub soft_drop: u8,
    pub hard_drop: u8,
}

impl PlayerKeys {
    /// Player 1 defaults: `d` left, `g` right, `r` rotate, `f` down, `a` drop
    pub const PLAYER_ONE: PlayerKeys = PlayerKeys {
        move_left: b'd',
        move_right: b'g',
        rotate: b'r',
        soft_drop: b'f',
        hard_drop: b'a',
    };

    /// Player 2 defaults on the numeric keypad: `4` `6` `8` `5`, `p` drop
    pub const PLAYER_TWO: PlayerKeys = PlayerKeys {
        move_left: b'4',
        move_right: b'6',
        rotate: b'8',
        soft_drop: b'5',
        hard_drop: b'p',
    };

    pub fn action_for(&self, key: u8) -> Option<PlayerAction> {
        match key {
            k if k == self.move_left => Some(PlayerAction::MoveLeft),
            k if k == self.move_right => Some(PlayerAction::MoveRight),
            k if k == self.rotate => Some(PlayerAction::Rotate),
            k if k == self.soft_drop => Some(PlayerAction::SoftDrop),
            k if k == self.hard_drop => Some(PlayerAction::HardDrop),
            _ => None,
        }
    }
}

/// Complete key map for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub players: [PlayerKeys; 2],
    /// Player who receives arrow-key commands, if any
    pub arrows: Option<PlayerId>,
}

impl KeyBindings {
    pub fn player(&self, id: PlayerId) -> &PlayerKeys {
        &self.players[id.index()]
    }

    /// Look up a single (already case-folded) byte
    ///
    /// Player keys win over the global keys.
    pub fn literal(&self, key: u8) -> Option<Command> {
        for id in PlayerId::ALL {
            if let Some(action) = self.player(id).action_for(key) {
                return Some(Command::Player(id, action));
            }
        }
        match key {
            b'q' | CTRL_C => Some(Command::Quit),
            b'h' => Some(Command::ToggleHelp),
            b'n' => Some(Command::TogglePreview),
            b'c' => Some(Command::ToggleColor),
            _ => None,
        }
    }

    /// Look up an arrow key
    pub fn arrow(&self, key: ArrowKey) -> Option<Command> {
        self.arrows.map(|id| Command::Player(id, key.action()))
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            players: [PlayerKeys::PLAYER_ONE, PlayerKeys::PLAYER_TWO],
            arrows: Some(PlayerId::One),
        }
    }
}
