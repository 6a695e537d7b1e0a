//! Solving sessions: the surface a front end drives.
//!
//! A [`SolveSession`] owns one solving engine — constraint graph, propagator,
//! and searcher — together with the grid of currently-known inputs, and
//! exposes the four operations an interactive front end needs:
//!
//! - [`load_grid`](SolveSession::load_grid) — replace the knowns and
//!   propagate
//! - [`update_cell`](SolveSession::update_cell) — edit one cell and
//!   re-propagate from scratch
//! - [`reset`](SolveSession::reset) — back to the all-unknown state
//! - [`force_solve`](SolveSession::force_solve) — backtracking search from
//!   the current state
//!
//! Every solving operation answers with a [`SolveOutcome`]: a single
//! validity flag and the resulting grid. The engine's richer internal
//! diagnostics stay internal on purpose — a display layer needs to know
//! *that* an input is inconsistent, not why.
//!
//! Sessions are plain values with no shared state: construct one per front
//! end (or one per thread), and drop it when done.
//!
//! # Examples
//!
//! ```
//! use gridloom_core::{Digit, Position};
//! use gridloom_session::SolveSession;
//!
//! let mut session = SolveSession::new();
//!
//! // Enter a digit the way a UI would, one cell at a time.
//! let outcome = session.update_cell(Position::new(0, 0), Some(Digit::D5));
//! assert!(outcome.valid);
//!
//! // A clashing entry is reported, not applied destructively: clearing the
//! // cell recovers.
//! let outcome = session.update_cell(Position::new(0, 1), Some(Digit::D5));
//! assert!(!outcome.valid);
//! let outcome = session.update_cell(Position::new(0, 1), None);
//! assert!(outcome.valid);
//! ```

pub mod session;

pub use self::session::{SolveOutcome, SolveSession};
