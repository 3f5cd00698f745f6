use super::{BOARD_SIZE, CELL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Converts a 1d index back to a row/col. Panics if the index is off the board.
    pub fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT, "index {} is off the board", index);
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    /// Converts the row/col to a 1d index
    pub fn as_index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Bit for this cell in a visited mask
    pub fn mask(&self) -> u16 {
        1 << self.as_index()
    }

    /// All the cells of the board in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Position::from_index)
    }

    pub fn is_left_edge(&self) -> bool {
        self.col == 0
    }

    pub fn is_right_edge(&self) -> bool {
        self.col == BOARD_SIZE - 1
    }
}
