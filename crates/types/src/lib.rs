//! Shared types module - data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no external dependencies, so it can be
//! used from the core rules, the input decoder and the terminal renderer alike.
//!
//! # Playfield Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (3, 0), i.e. `(PLAYFIELD_W - 4) / 2`
//!
//! # Timing Constants
//!
//! Timing values are in microseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_DELAY_US` | 1_000_000 | Gravity interval at session start |
//! | `DELAY_FACTOR` | 0.8 | Gravity multiplier per level (classic mode) |
//! | `LEVEL_UP` | 20 | Score step per level (classic mode) |
//!
//! # Examples
//!
//! ```
//! use duel_tetris_types::{GameMode, PlayerId, PLAYFIELD_H, PLAYFIELD_W};
//!
//! assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
//! assert_eq!(GameMode::Classic.player_count(), 1);
//!
//! assert_eq!(PLAYFIELD_W, 10);
//! assert_eq!(PLAYFIELD_H, 20);
//! ```

/// Playfield width in cells (10 columns)
pub const PLAYFIELD_W: u8 = 10;

/// Playfield height in cells (20 rows)
pub const PLAYFIELD_H: u8 = 20;

/// Bits used by one column inside a packed playfield row
pub const CELL_BITS: u32 = 3;

/// Mask selecting one column's color code
pub const CELL_MASK: u32 = 0b111;

/// Spawn column of a piece's local origin
pub const SPAWN_X: i8 = (PLAYFIELD_W as i8 - 4) / 2;

/// Spawn row of a piece's local origin
pub const SPAWN_Y: i8 = 0;

/// Gravity interval at session start (1 second per row)
pub const INITIAL_DELAY_US: u64 = 1_000_000;

/// Gravity interval multiplier applied on every level-up
pub const DELAY_FACTOR: f64 = 0.8;

/// Score needed per level before gravity speeds up
pub const LEVEL_UP: u32 = 20;

/// First level of the classic scoreboard
pub const INITIAL_LEVEL: u32 = 1;

/// Color code used for every filled cell of an injected garbage row
pub const GARBAGE_COLOR: u8 = Color::White as u8;

/// Raw escape byte that starts a terminal control sequence
pub const ESC: u8 = 0x1b;

/// Raw byte produced by Ctrl-C in raw terminal mode
pub const CTRL_C: u8 = 0x03;


/// The seven tetromino shapes, in catalog order
///
/// The discriminant is the catalog index, which is also what a random roll
/// selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Line,
    S,
    Z,
    L,
    J,
    T,
}

impl ShapeKind {
    /// All shapes in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Square,
        ShapeKind::Line,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::T,
    ];

    /// Catalog index of the shape
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Terminal palette used for pieces
///
/// The discriminant is the 3-bit code stored in playfield rows; `0` is
/// reserved for "empty" and has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Fuchsia = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// All piece colors, in roll order
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Fuchsia,
        Color::Cyan,
        Color::White,
    ];

    /// Stored color code (1..=7)
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a stored color code; `0` and out-of-range codes yield `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use duel_tetris_types::Color;
    ///
    /// assert_eq!(Color::from_code(3), Some(Color::Yellow));
    /// assert_eq!(Color::from_code(0), None);
    /// assert_eq!(Color::from_code(8), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Yellow),
            4 => Some(Color::Blue),
            5 => Some(Color::Fuchsia),
            6 => Some(Color::Cyan),
            7 => Some(Color::White),
            _ => None,
        }
    }
}

/// Identifies one of the two players sharing the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both players in update order
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Zero-based index into per-player storage
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The other player
    ///
    /// # Examples
    ///
    /// ```
    /// use duel_tetris_types::PlayerId;
    ///
    /// assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
    /// assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
    /// ```
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Human-facing label ("Player 1" / "Player 2")
    pub fn label(self) -> &'static str {
        match self {
            PlayerId::One => "Player 1",
            PlayerId::Two => "Player 2",
        }
    }
}

/// Actions a player can apply to their own piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Advance to the next orientation
    Rotate,
    /// Drop piece one cell down, locking it if blocked
    SoftDrop,
    /// Soft-drop repeatedly until the piece locks
    HardDrop,
}

/// Logical command produced by the input decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// End the session
    Quit,
    /// Show or hide the key help panels
    ToggleHelp,
    /// Show or hide the next-piece previews
    TogglePreview,
    /// Switch colored output on or off
    ToggleColor,
    /// An action scoped to one player
    Player(PlayerId, PlayerAction),
}

/// Session rules
///
/// - **Versus**: two boards, cleared rows attack the opponent, no scoring
/// - **Classic**: one board, cleared rows feed the scoreboard which speeds up gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Versus,
    Classic,
}

impl GameMode {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Versus => "versus",
            GameMode::Classic => "classic",
        }
    }

    /// Number of boards in play
    pub fn player_count(&self) -> usize {
        match self {
            GameMode::Versus => 2,
            GameMode::Classic => 1,
        }
    }

    /// Whether cleared lines feed the scoreboard
    pub fn scoring_enabled(&self) -> bool {
        matches!(self, GameMode::Classic)
    }
}
