//! Crossterm-backed terminal output.
//!
//! `enter` flips the terminal into raw mode on the alternate screen and
//! `exit` restores it; `draw` flushes a [`Surface`] with a full redraw,
//! coalescing style escape sequences between neighboring glyphs. A full
//! redraw per frame is plenty for a board this size.

use std::io::{BufWriter, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::term::surface::{Rgb, Style, Surface};

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

pub struct TerminalRenderer {
    out: BufWriter<Stdout>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: BufWriter::new(std::io::stdout()),
            active: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        queue!(self.out, EnterAlternateScreen, Hide)?;
        self.out.flush()?;
        self.active = true;
        Ok(())
    }

    /// Undo `enter`. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            Show,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        disable_raw_mode()?;
        self.active = false;
        Ok(())
    }

    /// Flush a complete frame to the terminal.
    pub fn draw(&mut self, surface: &Surface) -> Result<()> {
        let mut current: Option<Style> = None;

        for y in 0..surface.height() {
            queue!(self.out, MoveTo(0, y))?;
            for x in 0..surface.width() {
                // In-range by construction.
                let Some(glyph) = surface.get(x, y) else {
                    continue;
                };
                if current != Some(glyph.style) {
                    self.apply_style(glyph.style)?;
                    current = Some(glyph.style);
                }
                queue!(self.out, Print(glyph.ch))?;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_color(style.fg)),
            SetBackgroundColor(to_color(style.bg))
        )?;
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        // Best effort; the terminal is unusable otherwise.
        let _ = self.exit();
    }
}
