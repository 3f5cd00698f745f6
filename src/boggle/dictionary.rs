use std::collections::BTreeSet;

use fst::raw::CompiledAddr;
use fst::Set;
use tracing::debug;

use super::board::BoggleBoard;
use super::error::Result;
use super::letter_set::LetterSet;
use super::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};

/// Position inside the dictionary after consuming some prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    addr: CompiledAddr,
}

/// The words that could possibly appear on one board, stored as an FST so
/// prefix queries walk the automaton instead of scanning words.
pub struct BoggleDictionary {
    words: Set<Vec<u8>>,
}

impl BoggleDictionary {
    /// Filters the raw word list down to what the board can spell and indexes it.
    ///
    /// A word survives if it has 3 to 17 letters and every letter shows on the
    /// board. A `q` on the board brings an implicit `u` with it.
    pub fn build<I, S>(raw_words: I, board: &BoggleBoard) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = Self::allowed_letters(board);
        let mut n_raw = 0;

        // fst wants its input sorted and without duplicates
        let entries: BTreeSet<Vec<u8>> = raw_words
            .into_iter()
            .inspect(|_| n_raw += 1)
            .filter_map(|w| {
                let w = w.as_ref().trim().as_bytes();
                Self::admits(&allowed, w).then(|| w.to_vec())
            })
            .collect();

        let words = Set::from_iter(entries)?;
        debug!(
            raw = n_raw,
            kept = words.len(),
            letters = ?allowed,
            "built dictionary index"
        );
        Ok(Self { words })
    }

    fn allowed_letters(board: &BoggleBoard) -> LetterSet {
        let mut allowed = board.letters();
        if allowed.contains(b'q') {
            allowed.insert(b'u');
        }
        allowed
    }

    fn admits(allowed: &LetterSet, word: &[u8]) -> bool {
        (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len()) && allowed.covers(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True if some word in the index starts with `prefix`
    pub fn has_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return !self.is_empty();
        }
        self.advance(self.root(), prefix.as_bytes()).is_some()
    }

    /// True if `word` itself is in the index
    pub fn is_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// All indexed words in sorted order
    pub fn words(&self) -> Vec<String> {
        // Only ascii letters are ever admitted
        self.words
            .stream()
            .into_strs()
            .unwrap_or_default()
    }

    /// Cursor at the empty prefix
    pub fn root(&self) -> Cursor {
        Cursor {
            addr: self.words.as_fst().root().addr(),
        }
    }

    /// Extends the prefix under `cursor` by `letters`. Returns None once no
    /// word in the index starts with the extended prefix.
    pub fn advance(&self, cursor: Cursor, letters: &[u8]) -> Option<Cursor> {
        let fst = self.words.as_fst();
        let mut node = fst.node(cursor.addr);
        for &b in letters {
            let i = node.find_input(b)?;
            node = fst.node(node.transition_addr(i));
        }
        Some(Cursor { addr: node.addr() })
    }

    /// True if the prefix under `cursor` is a complete word
    pub fn is_match(&self, cursor: Cursor) -> bool {
        self.words.as_fst().node(cursor.addr).is_final()
    }
}
