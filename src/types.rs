//! Core types shared across the application.
//!
//! Pure data types with no external dependencies, usable from the simulation
//! core, the terminal view and the input layer alike.

/// Default playfield width in cells (10 columns).
pub const GRID_COLS: usize = 10;

/// Default playfield height in cells (20 rows, row 0 at the top).
pub const GRID_ROWS: usize = 20;

/// The seven tetromino piece kinds.
///
/// Each kind carries a fixed display color taken from the classic neon
/// palette:
/// - **I**: cyan, **J**: blue, **L**: orange, **O**: yellow,
/// - **S**: green, **T**: purple, **Z**: red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All seven kinds, in canonical order. One full bag.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Display color as 24-bit RGB.
    pub const fn color(self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x00, 0xff, 0xff),
            PieceKind::J => (0x00, 0x00, 0xff),
            PieceKind::L => (0xff, 0xa5, 0x00),
            PieceKind::O => (0xff, 0xff, 0x00),
            PieceKind::S => (0x00, 0xff, 0x00),
            PieceKind::T => (0x80, 0x00, 0x80),
            PieceKind::Z => (0xff, 0x00, 0x00),
        }
    }

    /// Single-letter label for panels and diagnostics.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }
}

/// Orientation of the active piece.
///
/// Stored as an index against fixed per-orientation shape tables rather than
/// a mutated matrix, so four clockwise rotations always restore the spawn
/// shape exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate 90 degrees clockwise.
    pub const fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Table index for shape lookups (N=0, E=1, S=2, W=3).
    pub const fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// A cell on the playfield: empty, or filled by the kind that locked there.
pub type Cell = Option<PieceKind>;

/// Discrete commands a frontend can issue against a running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    ToggleMute,
    Restart,
}
