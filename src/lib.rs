//! Finds every dictionary word that can be traced on a 4x4 Boggle board.
//!
//! A word is traced by walking between touching cells (diagonals included)
//! without stepping on a cell twice. A `q` cell always reads as `qu`.
//!
//! ```
//! use boggle_solver::boggle::BoggleSolver;
//!
//! let board = "VVVV VVIA VVVV VVVV".parse().unwrap();
//! let solution = BoggleSolver::new(board, ["via", "vivid"]).unwrap().solve();
//! assert_eq!(solution.words, vec!["via"]);
//! ```

pub mod boggle;
pub mod utils;
