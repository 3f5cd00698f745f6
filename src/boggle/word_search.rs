use rayon::prelude::*;
use tracing::trace;

use super::adjacency::AdjacencyTable;
use super::board::BoggleBoard;
use super::dictionary::{BoggleDictionary, Cursor};
use super::results::FoundWords;
use super::util::Position;
use super::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};

/*
    Depth first search over simple paths on the grid. The dictionary cursor is
    carried down the recursion so every step only feeds the new cell's letters
    into the FST, and a branch stops as soon as its letters prefix no word.
*/

/// Mutable state for one path. Cells are pushed before recursing and popped after.
struct SearchPath {
    /// Cells on the path as a bit mask
    visited: u16,
    /// Letters spelled so far, with `q` already expanded to `qu`
    letters: Vec<u8>,
}

#[derive(Clone, Copy)]
pub struct WordSearcher<'a> {
    board: &'a BoggleBoard,
    dictionary: &'a BoggleDictionary,
    adjacency: &'a AdjacencyTable,
}

impl<'a> WordSearcher<'a> {
    pub fn new(
        board: &'a BoggleBoard,
        dictionary: &'a BoggleDictionary,
        adjacency: &'a AdjacencyTable,
    ) -> Self {
        Self {
            board,
            dictionary,
            adjacency,
        }
    }

    /// Searches from every cell in parallel. Each worker collects into its own
    /// set and the sets are merged at the end.
    pub fn solve(&self) -> FoundWords {
        Position::all()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|start| {
                let mut found = FoundWords::default();
                self.search_from(start, &mut found);
                found
            })
            .reduce(FoundWords::default, FoundWords::merge)
    }

    /// Same as [`WordSearcher::solve`] on the calling thread
    pub fn solve_sequential(&self) -> FoundWords {
        let mut found = FoundWords::default();
        for start in Position::all() {
            self.search_from(start, &mut found);
        }
        found
    }

    /// Collects every word whose path begins at `start`
    pub fn search_from(&self, start: Position, found: &mut FoundWords) {
        let mut path = SearchPath {
            visited: 0,
            // Every cell spelling "qu" is the longest a path can get
            letters: Vec::with_capacity(MAX_WORD_LENGTH * 2),
        };
        let before = found.len();
        self.visit(start, self.dictionary.root(), &mut path, found);
        trace!(
            cell = start.as_index(),
            new_words = found.len() - before,
            "searched start cell"
        );
    }

    fn visit(&self, pos: Position, cursor: Cursor, path: &mut SearchPath, found: &mut FoundWords) {
        let spelling = self.board.spelling(pos);
        // Nothing in the dictionary continues this way
        let cursor = match self.dictionary.advance(cursor, spelling) {
            Some(c) => c,
            None => return,
        };

        path.visited |= pos.mask();
        path.letters.extend_from_slice(spelling);

        if path.letters.len() >= MIN_WORD_LENGTH && self.dictionary.is_match(cursor) {
            found.insert(&path.letters);
        }

        for &next in self.adjacency.neighbors(pos) {
            if path.visited & next.mask() == 0 {
                self.visit(next, cursor, path, found);
            }
        }

        path.letters.truncate(path.letters.len() - spelling.len());
        path.visited &= !pos.mask();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::boggle::CELL_COUNT;

    /// Every string spelled by any simple path on the board, found without
    /// the dictionary or the adjacency table.
    fn all_path_words(board: &BoggleBoard, max_cells: usize) -> BTreeSet<String> {
        fn walk(
            board: &BoggleBoard,
            pos: Position,
            visited: &mut Vec<Position>,
            max_cells: usize,
            out: &mut BTreeSet<String>,
        ) {
            visited.push(pos);
            let word: Vec<u8> = visited.iter().flat_map(|&p| board.spelling(p).to_vec()).collect();
            out.insert(String::from_utf8(word).unwrap());
            if visited.len() < max_cells {
                for next in Position::all() {
                    let touching = (pos.row as isize - next.row as isize).abs() <= 1
                        && (pos.col as isize - next.col as isize).abs() <= 1;
                    if touching && !visited.contains(&next) {
                        walk(board, next, visited, max_cells, out);
                    }
                }
            }
            visited.pop();
        }

        let mut out = BTreeSet::new();
        for start in Position::all() {
            walk(board, start, &mut Vec::new(), max_cells, &mut out);
        }
        out
    }

    fn solve(board: &str, vocab: &[&str]) -> Vec<String> {
        let board: BoggleBoard = board.parse().unwrap();
        let dictionary = BoggleDictionary::build(vocab.iter(), &board).unwrap();
        let adjacency = AdjacencyTable::new();
        WordSearcher::new(&board, &dictionary, &adjacency)
            .solve()
            .into_sorted()
    }

    #[test]
    fn test_only_via() {
        let board = "VVVVVVIAVVVVVVVV";
        assert_eq!(solve(board, &["via", "vivid", "ivy", "avid", "vv", "vi"]), vec!["via"]);
        // "avia" would need the only 'a' twice
        assert_eq!(solve(board, &["via", "iva", "aviv", "avia"]), vec!["aviv", "iva", "via"]);
    }

    #[test]
    fn test_no_words() {
        assert!(solve("xxxxxxxxxxxxxxxx", &["box", "fox", "xi"]).is_empty());
        assert_eq!(solve("xxxxxxxxxxxxxxxx", &["xxx", "box", "xi"]), vec!["xxx"]);
    }

    #[test]
    fn test_cells_are_not_reused() {
        let board = "abzz zzzz zzzz zzzz";
        assert_eq!(solve(board, &["aba", "bab", "abz", "zzz"]), vec!["abz", "zzz"]);
    }

    #[test]
    fn test_no_wrap_across_edges() {
        // d/e, h/i and l/m sit next to each other in memory but not on the grid
        let board = "abcd efgh ijkl mnop";
        let found = solve(board, &["cde", "dcg", "hgl", "lhe", "ponm", "mlk", "hie"]);
        assert_eq!(found, vec!["dcg", "hgl", "ponm"]);
    }

    #[test]
    fn test_q_spells_qu() {
        let board = "qixx txxx xxxx xxxx";
        assert_eq!(solve(board, &["quit", "qit", "qi"]), vec!["quit"]);

        // the 'q' is not next to the 'i', so the 'u' cell has to be walked through
        let board = "quit xxxx xxxx xxxx";
        assert_eq!(solve(board, &["quit", "uit", "quuit"]), vec!["quuit", "uit"]);
    }

    #[test]
    fn test_long_words() {
        // misunderstanding along a snake through the grid
        let found = solve("misurednstangnid", &["misunderstanding", "misunderstand", "under"]);
        assert!(found.contains(&"misunderstanding".to_string()));
        assert!(found.contains(&"misunderstand".to_string()));

        // every cell used, 17 letters thanks to the 'q'
        let word = "quabcefghijklmnop";
        assert_eq!(word.len(), MAX_WORD_LENGTH);
        assert_eq!(solve("qabc hgfe ijkl ponm", &[word]), vec![word]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let board: BoggleBoard = "catsdogsratsbats".parse().unwrap();
        let vocab = [
            "cat", "cats", "dog", "dogs", "rat", "rats", "bat", "bats", "tsar", "star", "stab",
            "oats",
        ];
        let dictionary = BoggleDictionary::build(vocab, &board).unwrap();
        let adjacency = AdjacencyTable::new();
        let searcher = WordSearcher::new(&board, &dictionary, &adjacency);
        let parallel = searcher.solve();
        assert_eq!(parallel, searcher.solve_sequential());
        assert_eq!(parallel.clone().into_sorted(), searcher.solve().into_sorted());
        assert!(parallel.contains("cats"));
    }

    #[test]
    fn test_random_boards_against_brute_force() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        // skewed towards vowels so real paths show up
        let alphabet = b"aaeeiioouqrstlnmdcbp";
        // a word of at most this many letters never needs more cells than that
        let max_len = 5;

        for _ in 0..20 {
            let letters: String = (0..CELL_COUNT)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
                .collect();
            let board: BoggleBoard = letters.parse().unwrap();
            let traceable = all_path_words(&board, max_len);

            // some words that can be spelled on the board, plus random noise
            let mut vocab: Vec<String> = traceable
                .iter()
                .filter(|w| (MIN_WORD_LENGTH..=max_len).contains(&w.len()) && rng.gen_bool(0.5))
                .cloned()
                .collect();
            for _ in 0..300 {
                let len = rng.gen_range(MIN_WORD_LENGTH..=max_len);
                vocab.push(
                    (0..len)
                        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
                        .collect(),
                );
            }

            let dictionary = BoggleDictionary::build(&vocab, &board).unwrap();
            let adjacency = AdjacencyTable::new();
            let found = WordSearcher::new(&board, &dictionary, &adjacency)
                .solve()
                .into_sorted();

            assert!(found.windows(2).all(|w| w[0] < w[1]), "not strictly sorted");

            let expected: Vec<String> = vocab
                .iter()
                .filter(|w| traceable.contains(*w))
                .cloned()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            assert_eq!(found, expected, "board {}", letters);
        }
    }
}
