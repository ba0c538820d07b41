//! The grid simulation engine: the authoritative game-state model.
//!
//! Owns the playfield, the active piece, the piece bag and score/level
//! bookkeeping. Frontends drive it through commands (`try_shift`, `rotate`,
//! `soft_drop`, `hard_drop`) and read it through queries (`grid`, `active`,
//! `ghost_y`, score accessors). Every operation is synchronous, bounded and
//! allocation-free on the hot path.
//!
//! The engine's single failure mode is topping out: a spawn that collides
//! immediately flips the terminal `game_over` flag. Nothing here returns
//! errors or panics for reachable states; after game over every command
//! degrades to a false/zero no-op.

use crate::core::pieces::{shape, spawn_x, PieceShape, KICK_OFFSETS};
use crate::core::scoring::{level_for_lines, line_clear_score};
use crate::core::{Grid, PieceBag};
use crate::types::{PieceKind, Rotation, GRID_COLS, GRID_ROWS};

/// The piece currently falling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Top-left of the bounding box, in grid coordinates.
    pub x: i16,
    pub y: i16,
}

impl ActivePiece {
    /// Mino offsets for the current orientation.
    pub fn shape(&self) -> PieceShape {
        shape(self.kind, self.rotation)
    }
}

/// Outcome of a lock, returned so consumers never have to diff state to
/// notice a line clear or the end of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockResult {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub game_over: bool,
}

/// The falling-block simulation.
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    bag: PieceBag,
    active: Option<ActivePiece>,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
}

impl Engine {
    /// New session on an empty `cols` x `rows` grid; spawns the first piece.
    ///
    /// Panics on non-positive dimensions (programmer error, per `Grid::new`).
    pub fn new(cols: usize, rows: usize, seed: u32) -> Self {
        Self::from_grid(Grid::new(cols, rows), seed)
    }

    /// New session on the standard 10x20 grid.
    pub fn with_defaults(seed: u32) -> Self {
        Self::new(GRID_COLS, GRID_ROWS, seed)
    }

    /// New session over a pre-populated grid.
    ///
    /// Useful for scenario setups; if the settled cells already block the
    /// spawn area the session starts in the game-over state.
    pub fn from_grid(grid: Grid, seed: u32) -> Self {
        let mut engine = Self {
            grid,
            bag: PieceBag::new(seed),
            active: None,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
        };
        engine.spawn();
        engine
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// The kind the next spawn will use.
    pub fn next_kind(&self) -> PieceKind {
        self.bag.peek()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True when any mino of `piece`, displaced by `(dx, dy)`, would leave
    /// the side/bottom bounds or overlap a settled cell.
    ///
    /// Rows above the grid never collide against contents: a freshly spawned
    /// piece may overhang the top edge.
    fn collides(&self, piece: &ActivePiece, dx: i16, dy: i16) -> bool {
        piece.shape().iter().any(|&(mx, my)| {
            let x = piece.x + mx + dx;
            let y = piece.y + my + dy;
            x < 0
                || x >= self.grid.cols() as i16
                || y >= self.grid.rows() as i16
                || (y >= 0 && self.grid.is_occupied(x, y))
        })
    }

    /// Draw the next kind and place it centered at the top.
    ///
    /// Returns false when the spawn position is already blocked; that is the
    /// top-out condition and flips the terminal game-over flag.
    fn spawn(&mut self) -> bool {
        let kind = self.bag.draw();
        let piece = ActivePiece {
            kind,
            rotation: Rotation::North,
            x: spawn_x(kind, self.grid.cols()),
            y: 0,
        };

        if self.collides(&piece, 0, 0) {
            self.active = None;
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Shift the active piece one column left (`-1`) or right (`+1`).
    ///
    /// Returns true iff the piece moved; never changes the row.
    pub fn try_shift(&mut self, dir: i16) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let dir = dir.signum();
        if dir == 0 || self.collides(&active, dir, 0) {
            return false;
        }

        self.active = Some(ActivePiece {
            x: active.x + dir,
            ..active
        });
        true
    }

    /// Rotate the active piece 90 degrees clockwise, wall-kicking if needed.
    ///
    /// The kick offsets are tried in the fixed order `0, +1, -1, +2, -2`;
    /// the first collision-free placement wins. When every kick fails the
    /// rotation is rejected wholesale and nothing changes.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = ActivePiece {
            rotation: active.rotation.rotate_cw(),
            ..active
        };

        for &kick in KICK_OFFSETS.iter() {
            if !self.collides(&rotated, kick, 0) {
                self.active = Some(ActivePiece {
                    x: rotated.x + kick,
                    ..rotated
                });
                return true;
            }
        }

        false
    }

    /// Single-step gravity / soft drop.
    ///
    /// Descends one row when possible (`None`); otherwise runs the lock
    /// sequence and reports its outcome. `None` after game over.
    pub fn soft_drop(&mut self) -> Option<LockResult> {
        if self.game_over {
            return None;
        }
        let Some(active) = self.active else {
            return None;
        };

        if self.collides(&active, 0, 1) {
            return Some(self.lock_active());
        }

        self.active = Some(ActivePiece {
            y: active.y + 1,
            ..active
        });
        None
    }

    /// Drop the active piece to its resting row and lock it.
    ///
    /// Returns the number of cells descended (callers may award points for
    /// them; the engine itself does not) together with the lock outcome.
    /// `None` after game over.
    pub fn hard_drop(&mut self) -> Option<(u32, LockResult)> {
        if self.game_over {
            return None;
        }
        let Some(active) = self.active else {
            return None;
        };

        let mut fell: i16 = 0;
        while !self.collides(&active, 0, fell + 1) {
            fell += 1;
        }
        if fell > 0 {
            self.active = Some(ActivePiece {
                y: active.y + fell,
                ..active
            });
        }

        Some((fell as u32, self.lock_active()))
    }

    /// The row the active piece would rest on if hard-dropped now.
    ///
    /// Pure query for ghost-piece rendering; repeated calls are idempotent.
    pub fn ghost_y(&self) -> Option<i16> {
        let active = self.active?;
        let mut fell: i16 = 0;
        while !self.collides(&active, 0, fell + 1) {
            fell += 1;
        }
        Some(active.y + fell)
    }

    /// Freeze the active piece into the grid, clear lines, update the score
    /// and spawn the next piece.
    fn lock_active(&mut self) -> LockResult {
        let Some(piece) = self.active.take() else {
            return LockResult::default();
        };

        for &(mx, my) in piece.shape().iter() {
            let y = piece.y + my;
            // Minos above the visible field vanish on lock; top-out is
            // detected at the next spawn, not here.
            if y >= 0 {
                self.grid.set(piece.x + mx, y, Some(piece.kind));
            }
        }

        let lines_cleared = self.grid.clear_full_rows().len() as u32;
        let mut score_delta = 0;
        if lines_cleared > 0 {
            // Reward uses the level in effect when the clear happened.
            score_delta = line_clear_score(lines_cleared, self.level);
            self.score += score_delta;
            self.lines += lines_cleared;
            self.level = level_for_lines(self.lines);
        }

        let spawned = self.spawn();

        LockResult {
            lines_cleared,
            score_delta,
            game_over: !spawned,
        }
    }
}
