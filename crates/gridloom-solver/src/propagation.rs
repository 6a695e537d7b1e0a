//! Candidate propagation to a fixpoint.

use gridloom_core::{CELL_COUNT, Contradiction, Digit, GROUP_COUNT, PuzzleGraph};
use log::debug;

use crate::validity;

/// Runs the two deduction rules over a graph until they stop making
/// progress.
///
/// One pass applies both rules to the whole board:
///
/// 1. **Elimination** — every solved cell's value is removed from the
///    candidates of the other cells in its row, column, and box.
/// 2. **Hidden-single isolation** — for every constraint and digit, if only
///    one member cell still lists the digit, that cell is forced to it, even
///    if it held other candidates.
///
/// Both rules only ever shrink candidate sets, so the total number of
/// candidate flags on the board decreases monotonically; a pass that leaves
/// the total unchanged has reached a fixpoint. A hard pass cap guards
/// against non-termination, though a well-formed board converges long before
/// reaching it (each pass short of the fixpoint removes at least one flag,
/// and there are 729 to begin with).
///
/// # Examples
///
/// ```
/// use gridloom_core::{Digit, DigitGrid, Position, PuzzleGraph};
/// use gridloom_solver::Propagator;
///
/// let mut grid = DigitGrid::new();
/// grid[Position::new(0, 0)] = Some(Digit::D5);
///
/// let mut graph = PuzzleGraph::new();
/// graph.load_knowns(&grid);
/// Propagator::new().run(&mut graph)?;
///
/// // The 5 is gone from every peer of (0, 0).
/// assert!(!graph.candidates_at(Position::new(0, 8)).contains(Digit::D5));
/// assert!(!graph.candidates_at(Position::new(8, 0)).contains(Digit::D5));
/// assert!(!graph.candidates_at(Position::new(2, 2)).contains(Digit::D5));
/// # Ok::<(), gridloom_core::Contradiction>(())
/// ```
#[derive(Debug, Clone)]
pub struct Propagator {
    max_passes: u32,
}

impl Propagator {
    /// Pass cap applied by [`Propagator::new`].
    pub const DEFAULT_MAX_PASSES: u32 = 100;

    /// Creates a propagator with the default pass cap.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_passes: Self::DEFAULT_MAX_PASSES,
        }
    }

    /// Creates a propagator with a custom pass cap.
    #[must_use]
    pub const fn with_max_passes(max_passes: u32) -> Self {
        Self { max_passes }
    }

    /// Propagates to a fixpoint, then checks the result for contradictions.
    ///
    /// The graph is left at the fixpoint state either way; read the outcome
    /// off the graph (e.g. [`PuzzleGraph::to_digit_grid`],
    /// [`PuzzleGraph::is_complete`]).
    ///
    /// # Errors
    ///
    /// Returns the first [`Contradiction`] found in the fixpoint state.
    pub fn run(&self, graph: &mut PuzzleGraph) -> Result<(), Contradiction> {
        let mut previous = graph.candidate_count();
        for pass in 1..=self.max_passes {
            eliminate(graph);
            isolate_hidden_singles(graph);

            let remaining = graph.candidate_count();
            if remaining == previous {
                debug!("propagation fixpoint after {pass} passes, {remaining} candidate flags");
                break;
            }
            debug!("propagation pass {pass}: {remaining} candidate flags remain");
            previous = remaining;
        }
        validity::check(graph)
    }
}

impl Default for Propagator {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes each solved cell's value from the candidates of every other cell
/// sharing one of its three constraints.
///
/// Removing an absent candidate is a no-op, so re-running this over already
/// propagated cells changes nothing.
fn eliminate(graph: &mut PuzzleGraph) {
    for id in 0..CELL_COUNT {
        let Some(digit) = graph.cell(id).known() else {
            continue;
        };
        for gid in graph.cell(id).groups() {
            for member in graph.group(gid).members() {
                if member != id {
                    graph.remove_candidate(member, digit);
                }
            }
        }
    }
}

/// Forces every hidden single: a digit that only one cell of a constraint
/// still lists is assigned to that cell, replacing whatever else the cell
/// had.
fn isolate_hidden_singles(graph: &mut PuzzleGraph) {
    for gid in 0..GROUP_COUNT {
        let members = graph.group(gid).members();
        for digit in Digit::ALL {
            let mut count = 0;
            let mut sole = None;
            for id in members {
                if graph.cell(id).candidates().contains(digit) {
                    count += 1;
                    sole = Some(id);
                }
            }
            if count == 1
                && let Some(id) = sole
            {
                graph.set_known(id, digit);
            }
        }
    }
}
