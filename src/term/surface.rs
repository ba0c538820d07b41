//! In-memory character surface the view draws onto.
//!
//! A `Surface` is a flat grid of styled glyphs. The view composes a whole
//! frame here and the renderer flushes it to the terminal in one pass, so
//! drawing code never interleaves with terminal IO.

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const GRAY: Rgb = Rgb::new(0x80, 0x80, 0x80);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

/// Foreground/background colors plus the two attributes we actually use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            bold: false,
            dim: false,
        }
    }
}

impl Style {
    pub fn fg(color: Rgb) -> Self {
        Self {
            fg: color,
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// One cell of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// Fixed-size glyph grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.index(x, y).map(|i| self.glyphs[i])
    }

    /// Put a glyph; writes outside the surface are silently clipped.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.index(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    /// Reset every cell to the default glyph.
    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::default());
    }

    /// Write a string left-to-right starting at `(x, y)`, clipping at the
    /// right edge.
    pub fn print(&mut self, x: u16, y: u16, text: &str, style: Style) {
        for (offset, ch) in text.chars().enumerate() {
            let Ok(dx) = u16::try_from(offset) else {
                break;
            };
            match x.checked_add(dx) {
                Some(cx) if cx < self.width => self.set(cx, y, Glyph { ch, style }),
                _ => break,
            }
        }
    }

    /// Fill a rectangle with one glyph. Out-of-range portions are clipped.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, glyph: Glyph) {
        for cy in y..y.saturating_add(h).min(self.height) {
            for cx in x..x.saturating_add(w).min(self.width) {
                self.set(cx, cy, glyph);
            }
        }
    }

    /// Row-major glyph slice, for the renderer.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }
}
