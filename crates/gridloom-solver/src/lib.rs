//! Solving engine for the gridloom Sudoku crates.
//!
//! Two cooperating pieces solve a [`PuzzleGraph`]:
//!
//! - [`Propagator`] applies the two deduction rules — eliminating solved
//!   cells' values from their peers, and isolating digits only one cell of a
//!   constraint can still take — until a full pass changes nothing, then
//!   checks the result for contradictions ([`validity`]).
//! - [`Searcher`] handles puzzles propagation cannot finish: it snapshots the
//!   candidate state, fixes one unsolved cell to one of its candidates,
//!   re-propagates, and recurses, backtracking to the snapshot when a choice
//!   leads to a contradiction.
//!
//! Everything is synchronous and single-threaded; a solve owns its graph for
//! the duration of the call. Search has no internal time bound — a caller
//! that needs bounded latency on adversarial input must enforce it from
//! outside.
//!
//! [`PuzzleGraph`]: gridloom_core::PuzzleGraph
//!
//! # Examples
//!
//! ```
//! use gridloom_core::{DigitGrid, PuzzleGraph};
//! use gridloom_solver::{Propagator, Searcher};
//!
//! let puzzle: DigitGrid = "
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ _1_ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//! "
//! .parse()?;
//!
//! let mut graph = PuzzleGraph::new();
//! graph.load_knowns(&puzzle);
//!
//! // One given leaves propagation nothing more to deduce...
//! Propagator::new().run(&mut graph)?;
//! assert!(!graph.is_complete());
//!
//! // ...but search completes the board.
//! assert!(Searcher::new().solve(&mut graph));
//! assert!(graph.is_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod propagation;
pub mod search;
pub mod validity;

pub use self::{propagation::Propagator, search::Searcher};
