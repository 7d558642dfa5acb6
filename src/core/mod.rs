//! Game-state engine: board, piece catalog, collision, session.

pub mod board;
pub mod pieces;
pub mod place;
pub mod rng;
pub mod session;

pub use board::Board;
pub use pieces::{shape, BlockOffset, PieceShape, ROTATIONS};
pub use place::{can_place, lock_piece, piece_cells};
pub use rng::SimpleRng;
pub use session::{FallOutcome, GameSession, Tetromino};
