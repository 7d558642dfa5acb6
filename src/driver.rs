//! The game loop: poll input, advance gravity, emit render directives.
//!
//! One iteration = poll (bounded by the tick) → possibly mutate the session
//! → possibly emit directives → repeat. Gravity advances when the monotonic
//! elapsed time since the last gravity reset exceeds the fall delay, which
//! is independent of the poll cadence. There is exactly one thread and one
//! mutator; the session is held by `&mut` for the whole run.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{FallOutcome, GameSession};
use crate::term::Console;
use crate::types::{GameAction, RenderDirective, FALL_DELAY_MS, GAME_OVER_HOLD_MS, TICK_MS};

/// Loop timing knobs. Tests shrink these; the game uses the defaults.
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    pub tick: Duration,
    pub fall_delay: Duration,
    /// How long the game-over banner stays up before the run returns.
    pub game_over_hold: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS),
            fall_delay: Duration::from_millis(FALL_DELAY_MS),
            game_over_hold: Duration::from_millis(GAME_OVER_HOLD_MS),
        }
    }
}

/// Run one session to completion (quit or game over).
pub fn run<C: Console>(console: &mut C, session: &mut GameSession, config: &LoopConfig) -> Result<()> {
    draw_everything(console, session)?;
    console.present()?;

    // A session can be born dead if the board was pre-filled at the spawn.
    if session.game_over() {
        return finish(console, config);
    }

    let mut last_fall = Instant::now();

    loop {
        let mut dirty = false;

        if let Some(action) = console.poll_input(config.tick)? {
            match action {
                GameAction::Quit => return Ok(()),
                GameAction::PauseToggle => {
                    let paused = session.toggle_pause();
                    console.emit(&RenderDirective::PauseBanner { visible: paused })?;
                    if !paused {
                        // No gravity credit accrues while paused.
                        last_fall = Instant::now();
                    }
                    dirty = true;
                }
                GameAction::MoveLeft
                | GameAction::MoveRight
                | GameAction::SoftDrop
                | GameAction::Rotate => {
                    let before = session.active().cells();
                    if session.apply(action) {
                        let piece = session.active();
                        console.emit(&RenderDirective::ClearPiece { cells: before })?;
                        console.emit(&RenderDirective::DrawPiece {
                            cells: piece.cells(),
                            kind: piece.kind,
                        })?;
                        dirty = true;
                    }
                }
            }
        }

        if !session.paused() && last_fall.elapsed() >= config.fall_delay {
            let before = session.active().cells();
            match session.fall() {
                FallOutcome::Moved => {
                    let piece = session.active();
                    console.emit(&RenderDirective::ClearPiece { cells: before })?;
                    console.emit(&RenderDirective::DrawPiece {
                        cells: piece.cells(),
                        kind: piece.kind,
                    })?;
                }
                FallOutcome::Locked { .. } => {
                    // Locking may have compacted rows anywhere; repaint the
                    // field, then the fresh active piece and preview.
                    draw_everything(console, session)?;
                }
                FallOutcome::TopOut => {
                    console.emit(&RenderDirective::Score(session.score()))?;
                    return finish(console, config);
                }
            }
            last_fall = Instant::now();
            dirty = true;
        }

        if dirty {
            console.present()?;
        }
    }
}

/// Full repaint: every grid cell, the active piece, preview, and score.
fn draw_everything<C: Console>(console: &mut C, session: &GameSession) -> Result<()> {
    let board = session.board();
    for y in 0..board.height() as i8 {
        for x in 0..board.width() as i8 {
            let cell = board.get(x, y).unwrap_or(None);
            console.emit(&RenderDirective::SetCell { x, y, cell })?;
        }
    }

    if !session.game_over() {
        let piece = session.active();
        console.emit(&RenderDirective::DrawPiece {
            cells: piece.cells(),
            kind: piece.kind,
        })?;
    }

    let next = session.next();
    console.emit(&RenderDirective::Preview {
        kind: next.kind,
        rotation: next.rotation,
    })?;
    console.emit(&RenderDirective::Score(session.score()))?;
    Ok(())
}

/// Terminal state: show the banner, hold it, and end the session.
fn finish<C: Console>(console: &mut C, config: &LoopConfig) -> Result<()> {
    console.emit(&RenderDirective::GameOverBanner)?;
    console.present()?;
    std::thread::sleep(config.game_over_hold);
    Ok(())
}
