//! Contradiction reporting for graph states.

use derive_more::{Display, Error};

use crate::{digit::Digit, group::GroupKind, position::Position};

/// A way the candidate state of a [`PuzzleGraph`] can be inconsistent.
///
/// These carry enough detail for diagnostics and logging, but they stay
/// inside the engine: the session boundary reports only whether a state is
/// consistent, never which contradiction was found.
///
/// [`PuzzleGraph`]: crate::PuzzleGraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Contradiction {
    /// A cell has no remaining candidates.
    #[display("cell {position} has no remaining candidates")]
    EmptyCandidates {
        /// The contradictory cell.
        position: Position,
    },
    /// Two cells of one constraint hold the same known value.
    #[display("{kind} {index} contains {digit} more than once")]
    DuplicateKnown {
        /// Kind of the violated constraint.
        kind: GroupKind,
        /// Index of the violated constraint within its kind (0-8).
        index: u8,
        /// The duplicated digit.
        digit: Digit,
    },
    /// No cell of a constraint can take some digit any more.
    #[display("no cell of {kind} {index} can take {digit}")]
    UnreachableDigit {
        /// Kind of the violated constraint.
        kind: GroupKind,
        /// Index of the violated constraint within its kind (0-8).
        index: u8,
        /// The digit with nowhere to go.
        digit: Digit,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_violation() {
        let err = Contradiction::EmptyCandidates {
            position: Position::new(2, 3),
        };
        assert_eq!(err.to_string(), "cell (2, 3) has no remaining candidates");

        let err = Contradiction::DuplicateKnown {
            kind: GroupKind::Row,
            index: 0,
            digit: Digit::D5,
        };
        assert_eq!(err.to_string(), "row 0 contains 5 more than once");

        let err = Contradiction::UnreachableDigit {
            kind: GroupKind::Box,
            index: 8,
            digit: Digit::D1,
        };
        assert_eq!(err.to_string(), "no cell of box 8 can take 1");
    }
}
