use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use boggle_solver::boggle::{BoggleSolver, ResourceKind};
use boggle_solver::utils::files;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

mod cli;

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let dict_path =
        files::resolve_input(&cli.dictionary, &cli.data_dir, ResourceKind::Dictionary)?;
    let board = files::load_board(&cli.board, &cli.data_dir)?;
    debug!(dictionary = %dict_path.display(), "loading inputs");

    let start = Instant::now();
    let words = files::read_word_file(&dict_path)
        .with_context(|| format!("failed to read dictionary {}", dict_path.display()))?;
    info!(words = words.len(), elapsed = ?start.elapsed(), "read dictionary");

    let solver = BoggleSolver::new(board, words)?;
    let solution = if cli.sequential {
        solver.solve_sequential()
    } else {
        solver.solve()
    };

    match cli.output {
        Some(path) => files::write_solution(&solution, &path, cli.format)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => solution.write_to(io::stdout().lock(), cli.format)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    run(cli)
}
