//! Boggle on a 4x4 grid, where a `q` cell always reads as "qu".

pub mod adjacency;
pub mod board;
pub mod dictionary;
pub mod error;
pub mod letter_set;
pub mod results;
pub mod solver;
pub mod util;
mod word_search;

const BOARD_SIZE: usize = 4;
const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Shortest word that counts
const MIN_WORD_LENGTH: usize = 3;
/// Longest word that fits: every cell used once, one of them a `q`
const MAX_WORD_LENGTH: usize = CELL_COUNT + 1;

pub use self::board::BoggleBoard;
pub use self::error::{BoggleError, ResourceKind};
pub use self::results::{OutputFormat, Solution};
pub use self::solver::BoggleSolver;
