use std::collections::HashSet;
use std::io::Write;

use serde::Serialize;

use super::board::BoggleBoard;
use super::error::Result;

/// Words found so far. A word reachable along several paths is kept once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundWords {
    words: HashSet<String>,
}

impl FoundWords {
    pub fn insert(&mut self, word: &[u8]) {
        // Search buffers only ever hold ascii letters
        if let Ok(word) = std::str::from_utf8(word) {
            if !self.words.contains(word) {
                self.words.insert(word.to_string());
            }
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Folds another worker's words into this one
    pub fn merge(mut self, other: FoundWords) -> Self {
        self.words.extend(other.words);
        self
    }

    /// Consumes the set into alphabetical order
    pub fn into_sorted(self) -> Vec<String> {
        let mut words: Vec<String> = self.words.into_iter().collect();
        words.sort_unstable();
        words
    }
}

/// Output format for a solved board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One word per line
    #[default]
    Text,
    /// A json object with the board, the word count and the words
    Json,
}

/// Sorted words found on one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub board: String,
    pub count: usize,
    pub words: Vec<String>,
}

impl Solution {
    pub fn new(board: &BoggleBoard, found: FoundWords) -> Self {
        let words = found.into_sorted();
        Self {
            board: board.to_letters(),
            count: words.len(),
            words,
        }
    }

    /// Writes the solution out. Text output is every word followed by a newline,
    /// and nothing at all when no word was found.
    pub fn write_to<W: Write>(&self, mut writer: W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => {
                for word in self.words.iter() {
                    writeln!(writer, "{}", word)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, self)?;
                writeln!(writer)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
