//! GameSession: the single aggregate owning all mutable game state.
//!
//! One session = one game. The board, active and next tetromino, score, and
//! pause/game-over flags live here and are mutated only through the session
//! methods; the driver holds the session by `&mut` for the whole loop.

use crate::core::board::Board;
use crate::core::pieces::{next_rotation, ROTATIONS};
use crate::core::place::{can_place, lock_piece, piece_cells};
use crate::core::rng::SimpleRng;
use crate::types::{GameAction, PieceKind, FIELD_HEIGHT, FIELD_WIDTH, LINE_SCORE};

/// A falling (or about-to-fall) piece: shape, rotation state, anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Absolute positions of the 4 blocks.
    pub fn cells(&self) -> [(i8, i8); 4] {
        piece_cells(self.kind, self.rotation, self.x, self.y)
    }
}

/// What a gravity step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallOutcome {
    /// The active piece descended one row.
    Moved,
    /// The piece locked; lines were cleared and the next piece spawned.
    Locked { lines_cleared: u32 },
    /// The piece locked but the fresh spawn collided: game over.
    TopOut,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Tetromino,
    next: Tetromino,
    score: u32,
    paused: bool,
    game_over: bool,
    rng: SimpleRng,
}

impl GameSession {
    /// New session on the default field.
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::new(FIELD_WIDTH, FIELD_HEIGHT), seed)
    }

    /// New session on a caller-supplied board (tests, custom field sizes).
    ///
    /// If the board is already blocked at the first spawn position the
    /// session starts in the game-over state.
    pub fn with_board(board: Board, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = roll_piece(&mut rng, board.width());
        let next = roll_piece(&mut rng, board.width());
        let game_over = !can_place(&board, active.kind, active.rotation, active.x, active.y);
        Self {
            board,
            active,
            next,
            score: 0,
            paused: false,
            game_over,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn next(&self) -> Tetromino {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Flip the pause state; returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.game_over {
            self.paused = !self.paused;
        }
        self.paused
    }

    /// Apply a player movement action. Returns true iff the piece moved.
    ///
    /// Rejected actions are silently ignored; pause and quit are driver
    /// concerns and are no-ops here.
    pub fn apply(&mut self, action: GameAction) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_shift(-1),
            GameAction::MoveRight => self.try_shift(1),
            GameAction::SoftDrop => self.try_descend(),
            GameAction::Rotate => self.try_rotate(),
            GameAction::PauseToggle | GameAction::Quit => false,
        }
    }

    /// Move the active piece sideways if the target placement is feasible.
    fn try_shift(&mut self, dx: i8) -> bool {
        let p = self.active;
        if can_place(&self.board, p.kind, p.rotation, p.x + dx, p.y) {
            self.active.x += dx;
            true
        } else {
            false
        }
    }

    /// Move the active piece one row down if feasible. Never locks; a piece
    /// resting on the floor ignores soft drops and waits for gravity.
    fn try_descend(&mut self) -> bool {
        let p = self.active;
        if can_place(&self.board, p.kind, p.rotation, p.x, p.y + 1) {
            self.active.y += 1;
            true
        } else {
            false
        }
    }

    /// Advance to the next rotation state in place; revert on collision.
    fn try_rotate(&mut self) -> bool {
        let p = self.active;
        let rotation = next_rotation(p.rotation);
        if can_place(&self.board, p.kind, rotation, p.x, p.y) {
            self.active.rotation = rotation;
            true
        } else {
            false
        }
    }

    /// One gravity step: descend, or lock + clear + score + spawn.
    ///
    /// The only terminal condition is [`FallOutcome::TopOut`]; everything
    /// else is a normal transition. Must not be called after game over.
    pub fn fall(&mut self) -> FallOutcome {
        debug_assert!(!self.game_over);
        if self.try_descend() {
            return FallOutcome::Moved;
        }

        let p = self.active;
        lock_piece(&mut self.board, p.kind, p.rotation, p.x, p.y);
        let lines_cleared = self.board.clear_full_rows();
        self.score += lines_cleared * LINE_SCORE;

        // Next becomes active; a fresh next is rolled for the preview.
        self.active = self.next;
        self.next = roll_piece(&mut self.rng, self.board.width());

        let a = self.active;
        if can_place(&self.board, a.kind, a.rotation, a.x, a.y) {
            FallOutcome::Locked { lines_cleared }
        } else {
            self.game_over = true;
            FallOutcome::TopOut
        }
    }
}

/// Roll a spawn: uniform shape, uniform rotation, uniform column such that
/// every variant's 4 blocks start in-bounds. Anchored at the top row.
fn roll_piece(rng: &mut SimpleRng, field_width: u8) -> Tetromino {
    let kind = PieceKind::from_index(rng.next_range(7) as usize);
    let rotation = rng.next_range(ROTATIONS as u32) as u8;
    // The widest variant spans 4 columns.
    let x = rng.next_range(field_width as u32 - 3) as i8;
    Tetromino {
        kind,
        rotation,
        x,
        y: 0,
    }
}
