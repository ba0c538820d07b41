//! Scene compositor: draws the menu, the playfield and the game-over
//! overlay onto a [`Surface`].
//!
//! Cells are rendered two characters wide so the board reads roughly square
//! in a terminal font. The ghost piece shows where the active piece would
//! land; the side panel carries score, best, level, lines and the next
//! piece preview.

use crate::core::Engine;
use crate::session::Profile;
use crate::term::surface::{Glyph, Rgb, Style, Surface};
use crate::types::PieceKind;

/// Which screen the shell is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Menu,
    Playing,
    GameOver,
}

/// Surface dimensions for a given board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

const PANEL_WIDTH: u16 = 16;
const CELL_WIDTH: u16 = 2;

impl Viewport {
    /// Border, two-column cells, one-column gap, side panel.
    pub fn for_board(cols: usize, rows: usize) -> Self {
        let board_w = 2 + cols as u16 * CELL_WIDTH;
        Self {
            width: board_w + 1 + PANEL_WIDTH,
            height: rows as u16 + 2,
        }
    }
}

pub struct GameView {
    viewport: Viewport,
}

impl GameView {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Compose one full frame.
    pub fn render(&self, engine: &Engine, profile: &Profile, scene: Scene) -> Surface {
        let mut surface = Surface::new(self.viewport.width, self.viewport.height);

        match scene {
            Scene::Menu => self.draw_menu(&mut surface, profile),
            Scene::Playing => {
                self.draw_board(&mut surface, engine);
                self.draw_panel(&mut surface, engine, profile);
            }
            Scene::GameOver => {
                self.draw_board(&mut surface, engine);
                self.draw_panel(&mut surface, engine, profile);
                self.draw_game_over(&mut surface, engine, profile);
            }
        }

        surface
    }

    fn draw_menu(&self, surface: &mut Surface, profile: &Profile) {
        let cx = self.viewport.width / 2;
        let cy = self.viewport.height / 2;
        let title = "N E O N   D R O P";
        let title_x = cx.saturating_sub(title.len() as u16 / 2);
        surface.print(title_x, cy.saturating_sub(3), title, Style::default().bold());

        let best = format!("best {:>8}", profile.best_score);
        surface.print(
            cx.saturating_sub(best.len() as u16 / 2),
            cy.saturating_sub(1),
            &best,
            Style::fg(Rgb::GRAY),
        );

        let hint = "press any key to start";
        surface.print(
            cx.saturating_sub(hint.len() as u16 / 2),
            cy + 1,
            hint,
            Style::default(),
        );
        let quit = "q to quit";
        surface.print(
            cx.saturating_sub(quit.len() as u16 / 2),
            cy + 2,
            quit,
            Style::fg(Rgb::GRAY).dim(),
        );
    }

    fn draw_board(&self, surface: &mut Surface, engine: &Engine) {
        let grid = engine.grid();
        let cols = grid.cols() as u16;
        let rows = grid.rows() as u16;
        let inner_w = cols * CELL_WIDTH;
        let border = Style::fg(Rgb::GRAY);

        // Frame.
        surface.set(0, 0, Glyph { ch: '┌', style: border });
        surface.set(inner_w + 1, 0, Glyph { ch: '┐', style: border });
        surface.set(0, rows + 1, Glyph { ch: '└', style: border });
        surface.set(inner_w + 1, rows + 1, Glyph { ch: '┘', style: border });
        for x in 1..=inner_w {
            surface.set(x, 0, Glyph { ch: '─', style: border });
            surface.set(x, rows + 1, Glyph { ch: '─', style: border });
        }
        for y in 1..=rows {
            surface.set(0, y, Glyph { ch: '│', style: border });
            surface.set(inner_w + 1, y, Glyph { ch: '│', style: border });
        }

        // Settled cells.
        for y in 0..grid.rows() {
            for x in 0..grid.cols() {
                if let Some(Some(kind)) = grid.get(x as i16, y as i16) {
                    self.put_cell(surface, x as i16, y as i16, kind_glyph(kind));
                }
            }
        }

        // Ghost under the active piece, active piece on top.
        if let (Some(active), Some(ghost_y)) = (engine.active(), engine.ghost_y()) {
            if ghost_y != active.y {
                let ghost = Glyph {
                    ch: '░',
                    style: Style::fg(Rgb::new(0x33, 0x33, 0x33)),
                };
                for (mx, my) in active.shape() {
                    self.put_cell(surface, active.x + mx, ghost_y + my, ghost);
                }
            }
            let glyph = kind_glyph(active.kind);
            for (mx, my) in active.shape() {
                self.put_cell(surface, active.x + mx, active.y + my, glyph);
            }
        }
    }

    /// Paint one board cell (two glyphs wide). Rows above the field clip.
    fn put_cell(&self, surface: &mut Surface, x: i16, y: i16, glyph: Glyph) {
        if x < 0 || y < 0 {
            return;
        }
        let sx = 1 + x as u16 * CELL_WIDTH;
        let sy = 1 + y as u16;
        surface.set(sx, sy, glyph);
        surface.set(sx + 1, sy, glyph);
    }

    fn draw_panel(&self, surface: &mut Surface, engine: &Engine, profile: &Profile) {
        let grid = engine.grid();
        let px = 2 + grid.cols() as u16 * CELL_WIDTH + 1;
        let label = Style::fg(Rgb::GRAY);
        let value = Style::default().bold();

        surface.print(px, 1, "SCORE", label);
        surface.print(px, 2, &format!("{:>8}", engine.score()), value);
        surface.print(px, 4, "BEST", label);
        surface.print(
            px,
            5,
            &format!("{:>8}", profile.best_score.max(engine.score())),
            value,
        );
        surface.print(px, 7, "LEVEL", label);
        surface.print(px, 8, &format!("{:>8}", engine.level()), value);
        surface.print(px, 10, "LINES", label);
        surface.print(px, 11, &format!("{:>8}", engine.lines()), value);

        surface.print(px, 13, "NEXT", label);
        self.draw_preview(surface, px, 14, engine.next_kind());

        if profile.muted {
            surface.print(px, 19, "muted", Style::fg(Rgb::GRAY).dim());
        }
    }

    /// Next-piece preview in a 4x2 cell box.
    fn draw_preview(&self, surface: &mut Surface, px: u16, py: u16, kind: PieceKind) {
        let glyph = kind_glyph(kind);
        for (mx, my) in crate::core::pieces::shape(kind, crate::types::Rotation::North) {
            // Shape rows 0 and 1 cover every North orientation except the
            // horizontal I, which sits entirely in row 1.
            let sy = py + my as u16;
            let sx = px + mx as u16 * CELL_WIDTH;
            surface.set(sx, sy, glyph);
            surface.set(sx + 1, sy, glyph);
        }
    }

    fn draw_game_over(&self, surface: &mut Surface, engine: &Engine, profile: &Profile) {
        let grid = engine.grid();
        let board_w = 2 + grid.cols() as u16 * CELL_WIDTH;
        let cx = board_w / 2;
        let cy = self.viewport.height / 2;

        let banner = " GAME OVER ";
        let style = Style::default().bold();
        surface.print(cx.saturating_sub(banner.len() as u16 / 2), cy - 1, banner, style);

        let line = if engine.score() > 0 && engine.score() >= profile.best_score {
            format!(" new best {} ", engine.score())
        } else {
            format!(" score {} ", engine.score())
        };
        surface.print(cx.saturating_sub(line.len() as u16 / 2), cy, &line, Style::default());

        let hint = " r restart / q quit ";
        surface.print(
            cx.saturating_sub(hint.len() as u16 / 2),
            cy + 1,
            hint,
            Style::fg(Rgb::GRAY),
        );
    }
}

fn kind_glyph(kind: PieceKind) -> Glyph {
    Glyph {
        ch: '█',
        style: Style::fg(kind.color().into()),
    }
}
