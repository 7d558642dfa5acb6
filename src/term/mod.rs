//! Console boundary: the polymorphic I/O seam between the game loop and a
//! host terminal.
//!
//! The loop only ever polls for decoded actions, emits render directives,
//! and presents; everything platform-specific (raw mode, key codes, ANSI
//! drawing, geometry) lives behind this trait in one adapter per host.

use std::time::Duration;

use anyhow::Result;

use crate::types::{GameAction, RenderDirective};

pub mod tty;

pub use tty::TtyConsole;

pub trait Console {
    /// Wait up to `timeout` for one decoded player action.
    ///
    /// Must never block past the timeout; returning `None` on every tick is
    /// how an idle game keeps its cadence.
    fn poll_input(&mut self, timeout: Duration) -> Result<Option<GameAction>>;

    /// Queue one drawing directive. Takes effect on [`Console::present`].
    fn emit(&mut self, directive: &RenderDirective) -> Result<()>;

    /// Flush queued directives to the host.
    fn present(&mut self) -> Result<()>;
}
