//! Core types shared across the application.
//!
//! Pure data with no external dependencies: game constants, the piece and
//! action enums, and the render directives the game loop emits toward the
//! console adapter.

/// Playfield dimensions in cells.
pub const FIELD_WIDTH: u8 = 13;
pub const FIELD_HEIGHT: u8 = 20;

/// Loop cadence and gravity (milliseconds).
pub const TICK_MS: u64 = 30;
pub const FALL_DELAY_MS: u64 = 500;

/// How long the game-over banner stays up before the session tears down.
pub const GAME_OVER_HOLD_MS: u64 = 2000;

/// Points per cleared line.
pub const LINE_SCORE: u32 = 100;

/// Minimum terminal size; anything smaller is a fatal startup error.
pub const MIN_TERM_COLS: u16 = 79;
pub const MIN_TERM_ROWS: u16 = 23;

/// One field cell is rendered this many terminal columns wide.
pub const CELL_COLS: u16 = 2;

/// The 7 canonical tetromino shapes, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    S,
    Z,
    T,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Catalog index, 0..=6.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> PieceKind {
        Self::ALL[index % 7]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::O => "O",
            PieceKind::I => "I",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::T => "T",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Cell on the board (`None` = empty, `Some` = locked block of that kind).
pub type Cell = Option<PieceKind>;

/// Player intents, already decoded from raw key events by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    PauseToggle,
    Quit,
}

/// Drawing commands from the game loop to the console adapter.
///
/// Each directive is a pure function of game state and idempotent: replaying
/// one against an already-consistent screen changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderDirective {
    /// Erase the 4 cells of a piece (restores the empty-field texture).
    ClearPiece { cells: [(i8, i8); 4] },
    /// Draw the 4 cells of a piece in its kind's color.
    DrawPiece { cells: [(i8, i8); 4], kind: PieceKind },
    /// Draw or clear one locked grid cell.
    SetCell { x: i8, y: i8, cell: Cell },
    /// Update the score readout.
    Score(u32),
    /// Redraw the next-piece preview frame contents.
    Preview { kind: PieceKind, rotation: u8 },
    /// Show or hide the pause banner above the field.
    PauseBanner { visible: bool },
    /// Show the end-of-game banner.
    GameOverBanner,
}
