use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use super::error::{BoggleError, Result};
use super::letter_set::LetterSet;
use super::util::Position;
use super::{BOARD_SIZE, CELL_COUNT};

/// A 4x4 grid of lowercase letters stored in row-major order.
///
/// A `q` cell stands for the die face "Qu" and spells two letters during a search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoggleBoard {
    cells: [u8; CELL_COUNT],
}

impl BoggleBoard {
    /// Normalises the raw board text: case is folded and all whitespace is dropped.
    /// What remains must be exactly 16 ascii letters.
    pub fn parse(raw: &str) -> Result<Self> {
        let letters: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        let invalid = || BoggleError::InvalidBoard {
            found: letters.clone(),
        };
        if letters.len() != CELL_COUNT || !letters.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(invalid());
        }

        let mut cells = [0; CELL_COUNT];
        cells.copy_from_slice(letters.as_bytes());
        Ok(Self { cells })
    }

    /// Loads a board from disk. Files ending in `.json` hold a 4x4 array of
    /// one letter strings (a "Qu" face is accepted too), anything else is read as text.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&data)
        } else {
            Self::parse(&data)
        }
    }

    fn from_json(data: &str) -> Result<Self> {
        let raw_board: Vec<Vec<String>> = serde_json::from_str(data)?;
        let invalid = || BoggleError::InvalidBoard {
            found: raw_board.iter().flatten().map(String::as_str).collect(),
        };

        let square = raw_board.len() == BOARD_SIZE
            && raw_board.iter().all(|r| r.len() == BOARD_SIZE);
        if !square {
            return Err(invalid());
        }

        // Each face must stay on its own cell, so it is one letter or "Qu"
        let mut letters = String::with_capacity(CELL_COUNT);
        for face in raw_board.iter().flatten() {
            if face.eq_ignore_ascii_case("qu") {
                letters.push('q');
            } else if face.len() == 1 && face.bytes().all(|b| b.is_ascii_alphabetic()) {
                letters.push_str(face);
            } else {
                return Err(invalid());
            }
        }
        Self::parse(&letters)
    }

    /// The letters a cell contributes to a word. `q` always comes with its `u`.
    pub fn spelling(&self, pos: Position) -> &[u8] {
        let cell = &self.cells[pos.as_index()];
        if *cell == b'q' {
            b"qu"
        } else {
            std::slice::from_ref(cell)
        }
    }

    /// Distinct letters showing on the board
    pub fn letters(&self) -> LetterSet {
        self.cells.iter().copied().collect()
    }

    /// The 16 letters as one string, row by row
    pub fn to_letters(&self) -> String {
        self.cells.iter().map(|&b| b as char).collect()
    }
}

impl FromStr for BoggleBoard {
    type Err = BoggleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BoggleBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            let line: Vec<String> = row.iter().map(|&b| (b as char).to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
