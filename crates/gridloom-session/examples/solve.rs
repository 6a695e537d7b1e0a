//! Example demonstrating a solving session from the command line.
//!
//! Pass the puzzle as 81 cells — digits 1-9, with `.`, `_`, or `0` for empty
//! cells; whitespace is ignored:
//!
//! ```sh
//! cargo run --example solve -- \
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! ```
//!
//! Stop after propagation, showing only what the deduction rules pin down:
//!
//! ```sh
//! cargo run --example solve -- --no-search "8..........36......7..9.2..."
//! ```
//!
//! Propagation convergence and search branching are logged via `log`; set
//! `RUST_LOG=debug` (or `trace`) to watch the engine work.

use std::process;

use clap::Parser;
use gridloom_core::DigitGrid;
use gridloom_session::SolveSession;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle text: 81 cells, row by row.
    grid: String,

    /// Stop after propagation instead of falling back to search.
    #[arg(long)]
    no_search: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let puzzle: DigitGrid = match args.grid.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid grid: {err}");
            process::exit(2);
        }
    };

    let mut session = SolveSession::new();
    let outcome = session.load_grid(&puzzle);
    if !outcome.valid {
        eprintln!("puzzle is contradictory");
        process::exit(1);
    }

    let outcome = if outcome.grid.is_complete() || args.no_search {
        outcome
    } else {
        session.force_solve()
    };

    if !outcome.valid {
        eprintln!("no completion exists for this puzzle");
        process::exit(1);
    }
    println!("{}", outcome.grid);
}
