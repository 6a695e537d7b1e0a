//! Core data model for the gridloom Sudoku engine.
//!
//! This crate defines the types the solving engine operates on:
//!
//! - [`Digit`]: a type-safe Sudoku digit 1-9
//! - [`Position`]: a cell coordinate (row 0-8, column 0-8)
//! - [`CandidateSet`]: the digits a cell can still take
//! - [`DigitGrid`]: a 9×9 grid of known digits, the shape exchanged with
//!   callers (empty cells are `None`)
//! - [`GroupKind`] / [`Group`]: the 27 row, column, and box uniqueness
//!   constraints
//! - [`PuzzleGraph`]: the constraint graph itself — 81 cell variables and
//!   27 constraints in flat arenas, cross-linked by index
//! - [`Contradiction`]: the ways a graph state can be inconsistent
//!
//! The graph's topology is built once and never changes; solving mutates only
//! the per-cell candidate sets. Cross-references between cells and constraints
//! are plain arena indices ([`CellId`], [`GroupId`]), so the naturally cyclic
//! cell↔constraint structure needs no shared ownership.
//!
//! # Examples
//!
//! ```
//! use gridloom_core::{Digit, DigitGrid, Position, PuzzleGraph};
//!
//! let mut graph = PuzzleGraph::new();
//!
//! let mut grid = DigitGrid::new();
//! grid[Position::new(0, 0)] = Some(Digit::D5);
//! graph.load_knowns(&grid);
//!
//! assert_eq!(graph.known_at(Position::new(0, 0)), Some(Digit::D5));
//! assert_eq!(graph.known_at(Position::new(0, 1)), None);
//! ```

pub mod candidate_set;
pub mod digit;
pub mod digit_grid;
pub mod error;
pub mod graph;
pub mod group;
pub mod position;

pub use self::{
    candidate_set::CandidateSet,
    digit::Digit,
    digit_grid::{DigitGrid, GridParseError, GridValueError},
    error::Contradiction,
    graph::{CandidateSnapshot, Cell, PuzzleGraph},
    group::{CELL_COUNT, CellId, GROUP_COUNT, Group, GroupId, GroupKind},
    position::Position,
};
