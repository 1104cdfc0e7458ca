//! Fixed 15x15 grid geometry and bonus-square layout.

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 15;

/// The centre square every opening move must cover.
pub const CENTER: Position = Position::new(7, 7);

/// A board coordinate. Row 0 is the top, column 0 the left edge.
///
/// Positions arriving from clients are not trusted to be on the board;
/// check with `is_on_board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Neighbour at `(row + dr, col + dc)`, if that is still on the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let pos = Self::new(row, col);
        pos.is_on_board().then_some(pos)
    }

    /// The up to four orthogonal neighbours.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// All 225 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position::new(row, col)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Bonus printed on a square. Assigned at board creation, never changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bonus {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// Centre square; scores as a double word.
    Center,
}

impl Bonus {
    /// Multiplier applied to a tile newly placed on this square.
    #[must_use]
    pub const fn letter_multiplier(self) -> i32 {
        match self {
            Bonus::DoubleLetter => 2,
            Bonus::TripleLetter => 3,
            _ => 1,
        }
    }

    /// Multiplier applied to a word that newly covers this square.
    #[must_use]
    pub const fn word_multiplier(self) -> i32 {
        match self {
            Bonus::DoubleWord | Bonus::Center => 2,
            Bonus::TripleWord => 3,
            _ => 1,
        }
    }
}

const TRIPLE_WORD: [(u8, u8); 8] = [
    (0, 0), (0, 7), (0, 14),
    (7, 0), (7, 14),
    (14, 0), (14, 7), (14, 14),
];

const DOUBLE_WORD: [(u8, u8); 16] = [
    (1, 1), (1, 13), (2, 2), (2, 12), (3, 3), (3, 11), (4, 4), (4, 10),
    (10, 4), (10, 10), (11, 3), (11, 11), (12, 2), (12, 12), (13, 1), (13, 13),
];

const TRIPLE_LETTER: [(u8, u8); 12] = [
    (1, 5), (1, 9), (5, 1), (5, 5), (5, 9), (5, 13),
    (9, 1), (9, 5), (9, 9), (9, 13), (13, 5), (13, 9),
];

const DOUBLE_LETTER: [(u8, u8); 24] = [
    (0, 3), (0, 11), (2, 6), (2, 8), (3, 0), (3, 7), (3, 14),
    (6, 2), (6, 6), (6, 8), (6, 12), (7, 3), (7, 11),
    (8, 2), (8, 6), (8, 8), (8, 12), (11, 0), (11, 7), (11, 14),
    (12, 6), (12, 8), (14, 3), (14, 11),
];

const fn mark(
    mut grid: [[Bonus; BOARD_SIZE]; BOARD_SIZE],
    squares: &[(u8, u8)],
    bonus: Bonus,
) -> [[Bonus; BOARD_SIZE]; BOARD_SIZE] {
    let mut i = 0;
    while i < squares.len() {
        let (row, col) = squares[i];
        grid[row as usize][col as usize] = bonus;
        i += 1;
    }
    grid
}

const fn build_layout() -> [[Bonus; BOARD_SIZE]; BOARD_SIZE] {
    let grid = [[Bonus::None; BOARD_SIZE]; BOARD_SIZE];
    let grid = mark(grid, &TRIPLE_WORD, Bonus::TripleWord);
    let grid = mark(grid, &DOUBLE_WORD, Bonus::DoubleWord);
    let grid = mark(grid, &TRIPLE_LETTER, Bonus::TripleLetter);
    let mut grid = mark(grid, &DOUBLE_LETTER, Bonus::DoubleLetter);
    grid[CENTER.row as usize][CENTER.col as usize] = Bonus::Center;
    grid
}

static LAYOUT: [[Bonus; BOARD_SIZE]; BOARD_SIZE] = build_layout();

/// Bonus of a square. Off-board positions have none.
#[must_use]
pub fn bonus_at(pos: Position) -> Bonus {
    if pos.is_on_board() {
        LAYOUT[pos.row as usize][pos.col as usize]
    } else {
        Bonus::None
    }
}
