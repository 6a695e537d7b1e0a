//! Contradiction detection over a graph state.

use gridloom_core::{CandidateSet, Contradiction, Digit, PuzzleGraph};

/// Checks a graph state for contradictions.
///
/// Three conditions make a state contradictory, checked in this order with
/// the first hit reported:
///
/// 1. a cell with an empty candidate set;
/// 2. a constraint whose members hold the same known value twice;
/// 3. a constraint with a digit none of its nine members can still take.
///
/// The returned [`Contradiction`] names the offending cell or constraint for
/// logging; outside the engine only the pass/fail outcome is exposed.
///
/// A partially solved state with none of these problems is *consistent*, not
/// necessarily solvable — search may still run into dead ends downstream.
///
/// # Errors
///
/// Returns the first contradiction found.
///
/// # Examples
///
/// ```
/// use gridloom_core::PuzzleGraph;
/// use gridloom_solver::validity;
///
/// let graph = PuzzleGraph::new();
/// assert!(validity::check(&graph).is_ok());
/// ```
pub fn check(graph: &PuzzleGraph) -> Result<(), Contradiction> {
    for cell in graph.cells() {
        if cell.candidates().is_empty() {
            return Err(Contradiction::EmptyCandidates {
                position: cell.position(),
            });
        }
    }

    for group in graph.groups() {
        let mut known = CandidateSet::EMPTY;
        let mut reachable = CandidateSet::EMPTY;
        for id in group.members() {
            let candidates = graph.cell(id).candidates();
            reachable |= candidates;
            if let Some(digit) = candidates.known() {
                if known.contains(digit) {
                    return Err(Contradiction::DuplicateKnown {
                        kind: group.kind(),
                        index: group.index(),
                        digit,
                    });
                }
                known.insert(digit);
            }
        }
        for digit in Digit::ALL {
            if !reachable.contains(digit) {
                return Err(Contradiction::UnreachableDigit {
                    kind: group.kind(),
                    index: group.index(),
                    digit,
                });
            }
        }
    }

    Ok(())
}
