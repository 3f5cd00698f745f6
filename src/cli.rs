use std::path::PathBuf;

use boggle_solver::boggle::OutputFormat;
use clap::Parser;

/// Finds every dictionary word on a 4x4 Boggle board.
#[derive(Parser, Debug)]
#[command(name = "boggle", version, about = "Solves 4x4 Boggle boards")]
pub(crate) struct Cli {
    /// Newline separated word list. Looked up in the data directory when it is not a path
    /// to a file.
    pub dictionary: PathBuf,

    /// Board file (plain text, or a 4x4 json array when it ends in `.json`), looked up like the
    /// dictionary. When no such file exists the argument itself may be the 16 letters.
    pub board: String,

    /// Where to write the words found. Printed to stdout when omitted.
    pub output: Option<PathBuf>,

    /// Directory searched for inputs given as bare file names.
    #[arg(long, env = "BOGGLE_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Search from one start cell at a time instead of in parallel.
    #[arg(long, default_value_t = false)]
    pub sequential: bool,

    /// Enable debug output. `RUST_LOG` takes precedence when set.
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}
