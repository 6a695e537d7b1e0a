//! Backtracking search for puzzles propagation cannot finish.

use gridloom_core::{Cell, CellId, PuzzleGraph};
use log::trace;

use crate::{propagation::Propagator, validity};

/// Depth-first backtracking search driven by propagation.
///
/// Each activation snapshots the candidate state, picks the first cell in
/// row-major order that still has more than one candidate, and tries that
/// cell's candidates in ascending order: restore the snapshot, force the
/// candidate, propagate to a fixpoint, and either accept (board complete),
/// recurse (board consistent but unfinished), or move on to the next
/// candidate (contradiction). When every candidate fails, the snapshot is
/// restored and the failure propagates up a level.
///
/// The search terminates on every input — each branch level strictly shrinks
/// the set of unsolved cells, so there are at most 81 levels of at most 9
/// choices — but nothing bounds how much of that space a pathological input
/// forces it to visit.
///
/// On failure the graph is left exactly as it was on entry; on success it
/// holds the solved state.
///
/// # Examples
///
/// ```
/// use gridloom_core::PuzzleGraph;
/// use gridloom_solver::Searcher;
///
/// // Search alone can fill a blank board.
/// let mut graph = PuzzleGraph::new();
/// assert!(Searcher::new().solve(&mut graph));
/// assert!(graph.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    propagator: Propagator,
}

impl Searcher {
    /// Creates a searcher with a default [`Propagator`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            propagator: Propagator::new(),
        }
    }

    /// Creates a searcher that re-propagates with the given propagator at
    /// every branch.
    #[must_use]
    pub const fn with_propagator(propagator: Propagator) -> Self {
        Self { propagator }
    }

    /// Searches for a completion of the graph's current state.
    ///
    /// Returns `true` and leaves the graph solved if a consistent completion
    /// exists; returns `false` and restores the graph to its entry state
    /// otherwise. When several completions exist, the first one in the
    /// search order (row-major cells, ascending digits) is kept.
    pub fn solve(&self, graph: &mut PuzzleGraph) -> bool {
        if graph.is_complete() {
            // Nothing to branch on; the board stands or falls as-is.
            return validity::check(graph).is_ok();
        }
        self.branch(graph, 0)
    }

    fn branch(&self, graph: &mut PuzzleGraph, depth: usize) -> bool {
        let snapshot = graph.snapshot();

        let Some(branch) = first_branch_cell(graph) else {
            // Every cell is solved or empty; only a contradictory board gets
            // here, because a completed consistent board is accepted by the
            // caller before recursing.
            trace!("depth {depth}: no cell left to branch on");
            return false;
        };
        let candidates = graph.cell(branch).candidates();
        trace!(
            "depth {depth}: branching on cell {} with {} candidates",
            graph.cell(branch).position(),
            candidates.len(),
        );

        for digit in candidates {
            graph.restore(&snapshot);
            graph.set_known(branch, digit);

            if self.propagator.run(graph).is_err() {
                trace!(
                    "depth {depth}: {digit} at {} contradicts, trying next",
                    graph.cell(branch).position(),
                );
                continue;
            }
            if graph.is_complete() {
                trace!("depth {depth}: {digit} completes the board");
                return true;
            }
            if self.branch(graph, depth + 1) {
                return true;
            }
        }

        trace!("depth {depth}: candidates exhausted, backtracking");
        graph.restore(&snapshot);
        false
    }
}

/// Returns the first cell in row-major order with more than one candidate.
fn first_branch_cell(graph: &PuzzleGraph) -> Option<CellId> {
    graph
        .cells()
        .find(|cell| cell.candidates().len() > 1)
        .map(Cell::id)
}

#[cfg(test)]
mod tests {
    use gridloom_core::{Digit, DigitGrid, Position};

    use super::*;

    fn graph_from(text: &str) -> PuzzleGraph {
        let grid: DigitGrid = text.parse().unwrap();
        let mut graph = PuzzleGraph::new();
        graph.load_knowns(&grid);
        graph
    }

    // A puzzle too hard for the propagation rules alone.
    const HARD_PUZZLE: &str = "
        8__ ___ ___
        __3 6__ ___
        _7_ _9_ 2__
        _5_ __7 ___
        ___ _45 7__
        ___ 1__ _3_
        __1 ___ _68
        __8 5__ _1_
        _9_ ___ 4__
    ";

    const HARD_SOLUTION: &str = "
        812 753 649
        943 682 175
        675 491 283
        154 237 896
        369 845 721
        287 169 534
        521 974 368
        438 526 917
        796 318 452
    ";

    // Columns 0 and 1 squeeze the four top-left cells down to the two
    // digits 1 and 2, which cannot fill four cells of one box.
    const UNSOLVABLE_PUZZLE: &str = "
        ___ ___ ___
        ___ ___ ___
        36_ ___ ___
        47_ ___ ___
        58_ ___ ___
        69_ ___ ___
        73_ ___ ___
        84_ ___ ___
        95_ ___ ___
    ";

    #[test]
    fn blank_board_is_completed() {
        let mut graph = PuzzleGraph::new();
        assert!(Searcher::new().solve(&mut graph));
        assert!(graph.is_complete());
        assert!(validity::check(&graph).is_ok());
    }

    #[test]
    fn hard_puzzle_reaches_its_solution() {
        let mut graph = graph_from(HARD_PUZZLE);
        Propagator::new().run(&mut graph).unwrap();
        assert!(!graph.is_complete(), "puzzle must actually need search");

        assert!(Searcher::new().solve(&mut graph));
        let solution: DigitGrid = HARD_SOLUTION.parse().unwrap();
        assert_eq!(graph.to_digit_grid(), solution);
    }

    #[test]
    fn search_keeps_loaded_givens() {
        let puzzle: DigitGrid = HARD_PUZZLE.parse().unwrap();
        let mut graph = PuzzleGraph::new();
        graph.load_knowns(&puzzle);

        assert!(Searcher::new().solve(&mut graph));
        let solved = graph.to_digit_grid();
        for pos in Position::ALL {
            if puzzle[pos].is_some() {
                assert_eq!(solved[pos], puzzle[pos]);
            }
        }
    }

    #[test]
    fn unsolvable_board_restores_entry_state() {
        let mut graph = graph_from(UNSOLVABLE_PUZZLE);
        Propagator::new()
            .run(&mut graph)
            .expect("locally consistent before search");

        let before_grid = graph.to_digit_grid();
        let before_count = graph.candidate_count();

        assert!(!Searcher::new().solve(&mut graph));
        assert_eq!(graph.to_digit_grid(), before_grid);
        assert_eq!(graph.candidate_count(), before_count);
    }

    #[test]
    fn already_solved_board_is_accepted() {
        let mut graph = graph_from(HARD_SOLUTION);
        assert!(Searcher::new().solve(&mut graph));
        let solution: DigitGrid = HARD_SOLUTION.parse().unwrap();
        assert_eq!(graph.to_digit_grid(), solution);
    }

    #[test]
    fn contradictory_complete_board_is_rejected() {
        let mut graph = graph_from(HARD_SOLUTION);
        // Corrupt one cell into a duplicate.
        graph.set_known(Position::new(0, 0).index(), Digit::D1);
        assert!(!Searcher::new().solve(&mut graph));
    }
}
