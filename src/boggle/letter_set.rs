use std::fmt;

/// Set of the lowercase ascii letters, one bit per letter
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct LetterSet {
    // bit is one if letter is in it
    accepted: u32,
}

impl LetterSet {
    pub fn empty() -> Self {
        Self { accepted: 0 }
    }

    pub fn contains(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && (self.accepted & Self::bit(letter)) != 0
    }

    /// Inserts a letter. Anything outside `a..=z` is ignored.
    pub fn insert(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.accepted |= Self::bit(letter)
        }
    }

    /// True if every byte of the word is a letter in this set
    pub fn covers(&self, word: &[u8]) -> bool {
        word.iter().all(|&l| self.contains(l))
    }

    pub fn is_empty(&self) -> bool {
        self.accepted == 0
    }

    fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }
}

impl Default for LetterSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::iter::FromIterator<u8> for LetterSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = u8>,
    {
        let mut tmp = Self::default();
        iter.into_iter().for_each(|l| tmp.insert(l));
        tmp
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for l in b'a'..=b'z' {
            if self.contains(l) {
                write!(f, "{}", l as char)?;
            }
        }
        write!(f, "]")
    }
}
