use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::boggle::error::Result;
use crate::boggle::{BoggleBoard, BoggleError, OutputFormat, ResourceKind, Solution};

/// Finds an input file. A path that does not exist as given is looked up
/// inside the data directory before giving up.
pub fn resolve_input<P: AsRef<Path>>(
    arg: P,
    data_dir: &Path,
    kind: ResourceKind,
) -> Result<PathBuf> {
    let arg = arg.as_ref();
    if arg.is_file() {
        return Ok(arg.to_path_buf());
    }
    let fallback = data_dir.join(arg);
    if fallback.is_file() {
        debug!(%kind, path = %fallback.display(), "found input in data directory");
        return Ok(fallback);
    }
    Err(BoggleError::MissingResource {
        kind,
        path: arg.to_path_buf(),
    })
}

/// Reads a newline separated word list. Lines that are not valid UTF-8 can
/// never be traced on a board and are skipped.
pub fn read_word_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for (n, line) in reader.split(b'\n').enumerate() {
        let word = match String::from_utf8(line?) {
            Ok(word) => word,
            Err(_) => {
                debug!(line = n + 1, "skipping word that is not valid utf-8");
                continue;
            }
        };
        if word.trim().is_empty() {
            continue;
        }
        words.push(word);
    }
    Ok(words)
}

/// Loads the board named by `arg`: a board file (possibly inside the data
/// directory) or, when no such file exists, the 16 letters themselves.
pub fn load_board(arg: &str, data_dir: &Path) -> Result<BoggleBoard> {
    match resolve_input(arg, data_dir, ResourceKind::Board) {
        Ok(path) => BoggleBoard::from_file(path),
        Err(missing) => BoggleBoard::parse(arg).map_err(|_| missing),
    }
}

/// Writes the solution to a file, replacing anything already there
pub fn write_solution<P: AsRef<Path>>(
    solution: &Solution,
    path: P,
    format: OutputFormat,
) -> Result<()> {
    let file = File::create(path)?;
    solution.write_to(BufWriter::new(file), format)
}
