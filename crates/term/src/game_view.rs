//! SessionView: draws a `core::Session` onto a [`Surface`].
//!
//! Each board cell is two terminal columns wide. The view overwrites every
//! cell it owns on every frame, so the screen is only cleared on the first
//! frame and when the color setting flips.

use anyhow::Result;

use crate::core::{DisplayFlags, Piece, PlayerState, Scoreboard, Session};
use crate::surface::Surface;
use crate::types::{Color, GameMode, PlayerId, PLAYFIELD_H, PLAYFIELD_W};

pub const FILLED_CELL: &str = "[]";
pub const EMPTY_CELL: &str = " .";
pub const NEXT_EMPTY_CELL: &str = "  ";

const BORDER_COLOR: Color = Color::Yellow;
const HELP_COLOR: Color = Color::Cyan;
const SCORE_COLOR: Color = Color::Green;

/// Width of the help column; hidden help is overwritten with this many spaces.
const HELP_WIDTH: usize = 19;

/// Key help below the "Player N" header line
const HELP_PLAYER_ONE: [&str; 9] = [
    "  Use cursor keys",
    "       or",
    "    r: rotate",
    "d: left,  g: right",
    "    f: down",
    "    a: drop",
    "      q: quit",
    " h: help  n: next",
    "    c: color",
];

const HELP_PLAYER_TWO: [&str; 9] = [
    "  Use numeric pad",
    "",
    "    8: rotate",
    "4: left,  6: right",
    "    5: down",
    "    p: drop",
    "      q: quit",
    " h: help  n: next",
    "    c: color",
];

/// Screen positions for one player's widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLayout {
    pub playfield_x: u16,
    pub playfield_y: u16,
    pub next_x: u16,
    pub next_y: u16,
    pub help_x: u16,
    pub help_y: u16,
}

impl PlayerLayout {
    /// Terminal column of board column `x`
    pub fn cell_x(&self, x: i8) -> u16 {
        self.playfield_x + 2 * x as u16
    }

    pub fn cell_y(&self, y: i8) -> u16 {
        self.playfield_y + y as u16
    }
}

/// Screen positions for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub players: [PlayerLayout; 2],
    pub score_x: u16,
    pub score_y: u16,
}

impl Layout {
    /// Side-by-side boards: player 1 on the left, player 2 on the right
    pub const VERSUS: Layout = Layout {
        players: [
            PlayerLayout {
                playfield_x: 30,
                playfield_y: 1,
                next_x: 14,
                next_y: 11,
                help_x: 1,
                help_y: 1,
            },
            PlayerLayout {
                playfield_x: 120,
                playfield_y: 1,
                next_x: 104,
                next_y: 11,
                help_x: 91,
                help_y: 1,
            },
        ],
        score_x: 1,
        score_y: 2,
    };

    /// One board with the score panel on the left and help on the right
    pub const CLASSIC: Layout = Layout {
        players: [
            PlayerLayout {
                playfield_x: 30,
                playfield_y: 1,
                next_x: 14,
                next_y: 11,
                help_x: 58,
                help_y: 1,
            },
            Layout::VERSUS.players[1],
        ],
        score_x: 1,
        score_y: 2,
    };

    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Versus => Layout::VERSUS,
            GameMode::Classic => Layout::CLASSIC,
        }
    }

    pub fn player(&self, id: PlayerId) -> &PlayerLayout {
        &self.players[id.index()]
    }
}

/// Draws session frames
#[derive(Debug, Clone)]
pub struct SessionView {
    layout: Layout,
    /// Flags the last frame was drawn with; `None` forces a clear.
    drawn: Option<DisplayFlags>,
}

impl SessionView {
    pub fn new(mode: GameMode) -> Self {
        Self::with_layout(Layout::for_mode(mode))
    }

    pub fn with_layout(layout: Layout) -> Self {
        Self {
            layout,
            drawn: None,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Draw one frame and flush it
    pub fn draw<S: Surface>(&mut self, session: &Session, out: &mut S) -> Result<()> {
        let flags = session.flags();
        let full = self
            .drawn
            .map_or(true, |prev| prev.use_color != flags.use_color);

        if full {
            out.reset_style()?;
            out.hide_cursor()?;
            out.clear()?;
        }

        for player in session.players() {
            let layout = *self.layout.player(player.id());
            if full {
                draw_border(out, &layout, flags.use_color)?;
            }
            draw_help(out, &layout, player.id(), flags)?;
            draw_playfield(out, &layout, player, flags.use_color)?;
            draw_piece(out, &layout, player.current(), flags.use_color)?;
            draw_next(out, &layout, player.next(), flags)?;
        }

        if let Some(board) = session.scoreboard() {
            draw_score(out, &self.layout, board, flags.use_color)?;
        }

        out.flush()?;
        self.drawn = Some(flags);
        Ok(())
    }
}

fn paint<S: Surface>(out: &mut S, color: Color, use_color: bool) -> Result<()> {
    if use_color {
        out.set_foreground(color)?;
        out.set_background(color)?;
    }
    Ok(())
}

fn draw_border<S: Surface>(out: &mut S, layout: &PlayerLayout, use_color: bool) -> Result<()> {
    let left = layout.playfield_x - 2;
    let right = layout.playfield_x + 2 * PLAYFIELD_W as u16;
    let bottom = layout.playfield_y + PLAYFIELD_H as u16;

    out.set_bold()?;
    if use_color {
        out.set_foreground(BORDER_COLOR)?;
    }
    for y in layout.playfield_y..=bottom {
        out.write_at(left, y, "<|")?;
        out.write_at(right, y, "|>")?;
    }
    for x in 0..PLAYFIELD_W as i8 {
        out.write_at(layout.cell_x(x), bottom, "==")?;
        out.write_at(layout.cell_x(x), bottom + 1, "\\/")?;
    }
    out.reset_style()
}

fn draw_help<S: Surface>(
    out: &mut S,
    layout: &PlayerLayout,
    id: PlayerId,
    flags: DisplayFlags,
) -> Result<()> {
    let text = match id {
        PlayerId::One => &HELP_PLAYER_ONE,
        PlayerId::Two => &HELP_PLAYER_TWO,
    };
    let visible = flags.help_visible;
    if visible {
        if flags.use_color {
            out.set_foreground(HELP_COLOR)?;
        }
        out.set_bold()?;
    }
    let header = format!("      {}", id.label());
    let lines = std::iter::once(header.as_str()).chain(text.iter().copied());
    for (row, line) in (layout.help_y..).zip(lines) {
        let line = if visible { line } else { "" };
        out.write_at(layout.help_x, row, &format!("{line:<HELP_WIDTH$}"))?;
    }
    out.reset_style()
}

fn draw_playfield<S: Surface>(
    out: &mut S,
    layout: &PlayerLayout,
    player: &PlayerState,
    use_color: bool,
) -> Result<()> {
    let playfield = player.playfield();
    for y in 0..PLAYFIELD_H as i8 {
        for x in 0..PLAYFIELD_W as i8 {
            match playfield.cell(x, y).and_then(Color::from_code) {
                Some(color) => {
                    paint(out, color, use_color)?;
                    out.write_at(layout.cell_x(x), layout.cell_y(y), FILLED_CELL)?;
                    out.reset_style()?;
                }
                None => out.write_at(layout.cell_x(x), layout.cell_y(y), EMPTY_CELL)?,
            }
        }
    }
    Ok(())
}

fn draw_piece<S: Surface>(
    out: &mut S,
    layout: &PlayerLayout,
    piece: &Piece,
    use_color: bool,
) -> Result<()> {
    paint(out, piece.color, use_color)?;
    for (x, y) in piece.cells() {
        if (0..PLAYFIELD_W as i8).contains(&x) && (0..PLAYFIELD_H as i8).contains(&y) {
            out.write_at(layout.cell_x(x), layout.cell_y(y), FILLED_CELL)?;
        }
    }
    out.reset_style()
}

/// The preview box is 4x4 cells; the piece is drawn at its shape offsets.
fn draw_next<S: Surface>(
    out: &mut S,
    layout: &PlayerLayout,
    next: &Piece,
    flags: DisplayFlags,
) -> Result<()> {
    let blank = NEXT_EMPTY_CELL.repeat(4);
    for row in 0..4 {
        out.write_at(layout.next_x, layout.next_y + row, &blank)?;
    }
    if !flags.next_visible {
        return Ok(());
    }

    paint(out, next.color, flags.use_color)?;
    for (dx, dy) in next.shape().offsets(next.orientation) {
        out.write_at(
            layout.next_x + 2 * dx as u16,
            layout.next_y + dy as u16,
            FILLED_CELL,
        )?;
    }
    out.reset_style()
}

fn draw_score<S: Surface>(
    out: &mut S,
    layout: &Layout,
    board: &Scoreboard,
    use_color: bool,
) -> Result<()> {
    if use_color {
        out.set_foreground(SCORE_COLOR)?;
    }
    let lines = [
        format!("Lines completed: {}", board.lines()),
        format!("Level:           {}", board.level()),
        format!("Score:           {}", board.score()),
    ];
    for (row, line) in (layout.score_y..).zip(lines.iter()) {
        out.write_at(layout.score_x, row, line)?;
    }
    out.reset_style()
}
