use super::util::Position;
use super::{BOARD_SIZE, CELL_COUNT};

const WIDTH: isize = BOARD_SIZE as isize;

/// The eight king moves as offsets on the row-major index
const KING_MOVES: [isize; 8] = [
    -WIDTH - 1,
    -WIDTH,
    -WIDTH + 1,
    -1,
    1,
    WIDTH - 1,
    WIDTH,
    WIDTH + 1,
];
/// Moves that would wrap onto the previous row from the left column
const LEFTWARD_MOVES: [isize; 3] = [-WIDTH - 1, -1, WIDTH - 1];
/// Moves that would wrap onto the next row from the right column
const RIGHTWARD_MOVES: [isize; 3] = [-WIDTH + 1, 1, WIDTH + 1];

/// Neighbouring cells for every position of the grid.
///
/// Only depends on the shape of the board, so one table serves any number of
/// searches over the same solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyTable {
    neighbors: Vec<Vec<Position>>,
}

impl AdjacencyTable {
    pub fn new() -> Self {
        let neighbors = Position::all().map(Self::build_neighbors).collect();
        Self { neighbors }
    }

    pub fn neighbors(&self, pos: Position) -> &[Position] {
        &self.neighbors[pos.as_index()]
    }

    fn build_neighbors(pos: Position) -> Vec<Position> {
        let index = pos.as_index() as isize;
        KING_MOVES
            .iter()
            .copied()
            .filter(|m| !(pos.is_left_edge() && LEFTWARD_MOVES.contains(m)))
            .filter(|m| !(pos.is_right_edge() && RIGHTWARD_MOVES.contains(m)))
            // Off the top or bottom lands outside the index range, so no row check is needed
            .map(|m| index + m)
            .filter(|&target| (0..CELL_COUNT as isize).contains(&target))
            .map(|target| Position::from_index(target as usize))
            .collect()
    }
}

impl Default for AdjacencyTable {
    fn default() -> Self {
        Self::new()
    }
}
