//! TtyConsole: crossterm-backed console adapter.
//!
//! Owns everything terminal-specific: raw mode and alternate screen
//! lifecycle, the session geometry derived once from the terminal size, the
//! static chrome (field border, next-piece frame, key legend), and the
//! execution of render directives as queued ANSI commands.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{bail, Result};

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::input::map_key;
use crate::term::Console;
use crate::types::{
    Cell, GameAction, PieceKind, RenderDirective, CELL_COLS, FIELD_HEIGHT, FIELD_WIDTH,
    MIN_TERM_COLS, MIN_TERM_ROWS,
};

/// Next-piece frame interior, in field cells.
const FRAME_CELLS_W: u16 = 4;
const FRAME_CELLS_H: u16 = 4;

const PAUSE_BANNER: &str = "game is paused, press space to continue";

const GAME_OVER_LOGO: [&str; 5] = [
    "   ____                            ___                    ",
    "  / ___|  __ _  _ __ ___    ___   / _ \\ __   __ ___  _ __ ",
    " | |  _  / _` || '_ ` _ \\  / _ \\ | | | |\\ \\ / // _ \\| '__|",
    " | |_| || (_| || | | | | ||  __/ | |_| | \\ V /|  __/| |   ",
    "  \\____| \\__,_||_| |_| |_| \\___|  \\___/   \\_/  \\___||_|   ",
];

/// Screen placement of the field, preview frame, and score readout, derived
/// once from the terminal size and immutable for the session.
#[derive(Debug, Clone, Copy)]
struct Geometry {
    term_w: u16,
    term_h: u16,
    /// Left border column of the field.
    field_x: u16,
    /// Top row of the field.
    field_y: u16,
    /// Top-left of the next-piece frame border.
    frame_x: u16,
    frame_y: u16,
    score_x: u16,
    score_y: u16,
}

impl Geometry {
    fn from_terminal(term_w: u16, term_h: u16) -> Result<Self> {
        if term_w < MIN_TERM_COLS || term_h < MIN_TERM_ROWS {
            bail!(
                "terminal is {term_w}x{term_h}; needs at least {MIN_TERM_COLS}x{MIN_TERM_ROWS}"
            );
        }

        let field_cols = FIELD_WIDTH as u16 * CELL_COLS + 2;
        let field_x = (term_w - field_cols) / 2;
        let field_y = (term_h - FIELD_HEIGHT as u16) / 2;

        let frame_x = field_x + field_cols + 1;
        let frame_y = field_y + 1;
        let frame_h = FRAME_CELLS_H + 2;

        Ok(Self {
            term_w,
            term_h,
            field_x,
            field_y,
            frame_x,
            frame_y,
            score_x: frame_x,
            score_y: frame_y + frame_h + 1,
        })
    }

    /// Screen position of a field cell; `None` for cells above the top.
    fn cell(&self, x: i8, y: i8) -> Option<(u16, u16)> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((
            self.field_x + 1 + x as u16 * CELL_COLS,
            self.field_y + y as u16,
        ))
    }
}

pub struct TtyConsole {
    stdout: io::Stdout,
    geometry: Geometry,
}

impl TtyConsole {
    /// Query the terminal and derive the session geometry.
    ///
    /// Fails fast if the terminal is smaller than the fixed minimum; no
    /// session should be constructed after that.
    pub fn new() -> Result<Self> {
        let (term_w, term_h) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            geometry: Geometry::from_terminal(term_w, term_h)?,
        })
    }

    /// Enter raw mode and draw the static chrome.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.draw_field_chrome()?;
        self.draw_frame_chrome()?;
        self.draw_legend()?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call on every exit path.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Field side borders and the dotted empty interior.
    fn draw_field_chrome(&mut self) -> Result<()> {
        let g = self.geometry;
        let right = g.field_x + FIELD_WIDTH as u16 * CELL_COLS + 1;
        for y in 0..FIELD_HEIGHT as u16 {
            let row = g.field_y + y;
            self.stdout.queue(cursor::MoveTo(g.field_x, row))?;
            self.stdout.queue(Print('|'))?;
            for _ in 0..FIELD_WIDTH {
                self.stdout.queue(Print(".."))?;
            }
            self.stdout.queue(cursor::MoveTo(right, row))?;
            self.stdout.queue(Print('|'))?;
        }
        Ok(())
    }

    /// The next-piece frame with its label.
    fn draw_frame_chrome(&mut self) -> Result<()> {
        let g = self.geometry;
        let w = FRAME_CELLS_W * CELL_COLS + 2;
        let h = FRAME_CELLS_H + 2;

        let label_x = g.frame_x + (w - 4) / 2;
        self.stdout
            .queue(cursor::MoveTo(label_x, g.frame_y.saturating_sub(1)))?;
        self.stdout.queue(Print("Next"))?;

        for dy in 0..h {
            let row = g.frame_y + dy;
            for dx in 0..w {
                let col = g.frame_x + dx;
                let ch = match (dx, dy) {
                    (0, 0) => '┌',
                    (x, 0) if x == w - 1 => '┐',
                    (0, y) if y == h - 1 => '└',
                    (x, y) if x == w - 1 && y == h - 1 => '┘',
                    (x, _) if x == 0 || x == w - 1 => '│',
                    (_, y) if y == 0 || y == h - 1 => '─',
                    _ => ' ',
                };
                self.stdout.queue(cursor::MoveTo(col, row))?;
                self.stdout.queue(Print(ch))?;
            }
        }
        Ok(())
    }

    /// Key legend to the left of the field.
    fn draw_legend(&mut self) -> Result<()> {
        let g = self.geometry;
        let x = g.field_x.saturating_sub(25);
        let lines = [
            "L-arrow or a: left",
            "R-arrow or d: right",
            "D-arrow or s: down",
            "U-arrow or r: rotate",
            "Esc or q: quit",
            "Space: pause",
        ];
        for (i, line) in lines.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(x, g.field_y + i as u16))?;
            self.stdout.queue(Print(line))?;
        }
        Ok(())
    }

    fn draw_cell(&mut self, x: i8, y: i8, cell: Cell) -> Result<()> {
        let Some((col, row)) = self.geometry.cell(x, y) else {
            return Ok(());
        };
        self.stdout.queue(cursor::MoveTo(col, row))?;
        match cell {
            Some(kind) => {
                self.stdout.queue(SetBackgroundColor(piece_color(kind)))?;
                self.stdout.queue(Print("  "))?;
                self.stdout.queue(ResetColor)?;
            }
            None => {
                self.stdout.queue(Print(".."))?;
            }
        }
        Ok(())
    }

    fn draw_preview(&mut self, kind: PieceKind, rotation: u8) -> Result<()> {
        let g = self.geometry;

        // Blank the frame interior so the directive is idempotent.
        for dy in 0..FRAME_CELLS_H {
            self.stdout
                .queue(cursor::MoveTo(g.frame_x + 1, g.frame_y + 1 + dy))?;
            for _ in 0..FRAME_CELLS_W * CELL_COLS {
                self.stdout.queue(Print(' '))?;
            }
        }

        // Nudge small variants toward the frame center.
        let shape = crate::core::shape(kind, rotation);
        let pad_x: i8 = if shape.iter().any(|&(dx, _)| dx > 1) { 0 } else { 1 };
        let pad_y: i8 = if shape.iter().any(|&(_, dy)| dy > 2) { 0 } else { 1 };

        self.stdout.queue(SetBackgroundColor(piece_color(kind)))?;
        for (dx, dy) in shape {
            let col = g.frame_x + 1 + (dx + pad_x) as u16 * CELL_COLS;
            let row = g.frame_y + 1 + (dy + pad_y) as u16;
            self.stdout.queue(cursor::MoveTo(col, row))?;
            self.stdout.queue(Print("  "))?;
        }
        self.stdout.queue(ResetColor)?;
        Ok(())
    }

    fn draw_score(&mut self, score: u32) -> Result<()> {
        let g = self.geometry;
        self.stdout.queue(cursor::MoveTo(g.score_x, g.score_y))?;
        self.stdout.queue(Print("               "))?;
        self.stdout.queue(cursor::MoveTo(g.score_x, g.score_y))?;
        self.stdout.queue(SetForegroundColor(Color::Red))?;
        self.stdout.queue(Print(format!("Score: {score}")))?;
        self.stdout.queue(ResetColor)?;
        Ok(())
    }

    fn draw_pause_banner(&mut self, visible: bool) -> Result<()> {
        let g = self.geometry;
        let x = g.field_x.saturating_sub(5);
        let y = g.field_y.saturating_sub(2);
        self.stdout.queue(cursor::MoveTo(x, y))?;
        if visible {
            self.stdout.queue(Print(PAUSE_BANNER))?;
        } else {
            for _ in 0..PAUSE_BANNER.len() {
                self.stdout.queue(Print(' '))?;
            }
        }
        Ok(())
    }

    fn draw_game_over(&mut self) -> Result<()> {
        let g = self.geometry;
        let logo_w = GAME_OVER_LOGO[0].len() as u16;
        let x = g.term_w.saturating_sub(logo_w) / 2;
        let y = g.term_h.saturating_sub(GAME_OVER_LOGO.len() as u16) / 2;

        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        for (i, line) in GAME_OVER_LOGO.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(x, y + i as u16))?;
            self.stdout.queue(Print(line))?;
        }
        Ok(())
    }
}

impl Console for TtyConsole {
    fn poll_input(&mut self, timeout: Duration) -> Result<Option<GameAction>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(map_key(key));
            }
        }
        Ok(None)
    }

    fn emit(&mut self, directive: &RenderDirective) -> Result<()> {
        match *directive {
            RenderDirective::ClearPiece { cells } => {
                for (x, y) in cells {
                    self.draw_cell(x, y, None)?;
                }
            }
            RenderDirective::DrawPiece { cells, kind } => {
                for (x, y) in cells {
                    self.draw_cell(x, y, Some(kind))?;
                }
            }
            RenderDirective::SetCell { x, y, cell } => self.draw_cell(x, y, cell)?,
            RenderDirective::Score(score) => self.draw_score(score)?,
            RenderDirective::Preview { kind, rotation } => self.draw_preview(kind, rotation)?,
            RenderDirective::PauseBanner { visible } => self.draw_pause_banner(visible)?,
            RenderDirective::GameOverBanner => self.draw_game_over()?,
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::O => Color::DarkRed,
        PieceKind::I => Color::DarkGreen,
        PieceKind::S => Color::DarkYellow,
        PieceKind::Z => Color::DarkBlue,
        PieceKind::T => Color::DarkMagenta,
        PieceKind::J => Color::DarkCyan,
        PieceKind::L => Color::Grey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_centers_the_field() {
        let g = Geometry::from_terminal(80, 24).unwrap();
        let field_cols = FIELD_WIDTH as u16 * CELL_COLS + 2;
        // Centered horizontally within a column.
        assert!(g.field_x >= (80 - field_cols) / 2);
        assert!(g.field_x + field_cols <= 80);
        // Preview frame sits right of the field.
        assert!(g.frame_x > g.field_x + field_cols);
        assert!(g.score_y > g.frame_y);
    }

    #[test]
    fn geometry_rejects_small_terminals() {
        assert!(Geometry::from_terminal(78, 24).is_err());
        assert!(Geometry::from_terminal(80, 22).is_err());
        assert!(Geometry::from_terminal(MIN_TERM_COLS, MIN_TERM_ROWS).is_ok());
    }

    #[test]
    fn cell_mapping_respects_the_pitch() {
        let g = Geometry::from_terminal(100, 30).unwrap();
        let (c0, r0) = g.cell(0, 0).unwrap();
        let (c1, r1) = g.cell(1, 0).unwrap();
        assert_eq!(c1 - c0, CELL_COLS);
        assert_eq!(r0, r1);
        // Cells above the top or outside the field have no screen position.
        assert_eq!(g.cell(0, -1), None);
        assert_eq!(g.cell(FIELD_WIDTH as i8, 0), None);
        assert_eq!(g.cell(0, FIELD_HEIGHT as i8), None);
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        let colors: Vec<Color> = PieceKind::ALL.iter().map(|&k| piece_color(k)).collect();
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }
}
