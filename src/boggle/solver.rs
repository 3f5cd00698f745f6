use std::time::Instant;

use tracing::{debug, info};

use super::adjacency::AdjacencyTable;
use super::board::BoggleBoard;
use super::dictionary::BoggleDictionary;
use super::error::Result;
use super::results::{FoundWords, Solution};
use super::word_search::WordSearcher;

/// Everything needed to solve one board: the board itself, its neighbour
/// table and the dictionary filtered down to that board.
pub struct BoggleSolver {
    board: BoggleBoard,
    adjacency: AdjacencyTable,
    dictionary: BoggleDictionary,
}

impl BoggleSolver {
    pub fn new<I, S>(board: BoggleBoard, raw_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let dictionary = BoggleDictionary::build(raw_words, &board)?;
        debug!(
            words = dictionary.len(),
            elapsed = ?start.elapsed(),
            "dictionary ready"
        );
        Ok(Self {
            board,
            adjacency: AdjacencyTable::new(),
            dictionary,
        })
    }

    pub fn dictionary(&self) -> &BoggleDictionary {
        &self.dictionary
    }

    /// Solves the board, searching from all cells in parallel
    pub fn solve(&self) -> Solution {
        self.finish(|searcher| searcher.solve())
    }

    /// Solves the board on the calling thread
    pub fn solve_sequential(&self) -> Solution {
        self.finish(|searcher| searcher.solve_sequential())
    }

    fn finish<F>(&self, search: F) -> Solution
    where
        F: FnOnce(&WordSearcher) -> FoundWords,
    {
        let start = Instant::now();
        let searcher = WordSearcher::new(&self.board, &self.dictionary, &self.adjacency);
        let found = search(&searcher);
        let solution = Solution::new(&self.board, found);
        info!(
            board = %solution.board,
            found = solution.count,
            elapsed = ?start.elapsed(),
            "solved board"
        );
        solution
    }
}
