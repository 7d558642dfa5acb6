//! blockfall entrypoint: construct the console adapter, seed a session,
//! run the loop, and always restore the terminal.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use blockfall::core::GameSession;
use blockfall::driver::{run, LoopConfig};
use blockfall::term::TtyConsole;

fn main() -> Result<()> {
    // Geometry is validated before any session exists; too-small terminals
    // fail here with a plain error on stderr.
    let mut console = TtyConsole::new()?;
    console.enter()?;

    let mut session = GameSession::new(time_seed());
    let result = run(&mut console, &mut session, &LoopConfig::default());

    // Restore the terminal on every path, keeping the first error.
    let restored = console.exit();
    result.and(restored)
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}
