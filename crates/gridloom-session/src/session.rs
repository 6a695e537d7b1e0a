//! The request/response contract between the engine and a front end.

use gridloom_core::{Digit, DigitGrid, Position, PuzzleGraph};
use gridloom_solver::{Propagator, Searcher};

/// The answer to every solving request: did the state stay consistent, and
/// what does the board look like now.
///
/// `grid` holds the engine's view after the operation — every cell the
/// engine has pinned down, not just the caller's inputs. Unsolved cells are
/// `None`. When `valid` is `false` the grid reflects the inconsistent state
/// the inputs produced; it is up to the caller to decide which input to take
/// back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// `false` if the inputs contradict each other (or, for
    /// [`force_solve`](SolveSession::force_solve), if no completion exists).
    pub valid: bool,
    /// The board as the engine now sees it.
    pub grid: DigitGrid,
}

/// One solving session: an engine plus the grid of currently-known inputs.
///
/// The session is the only type a front end needs. It owns its
/// [`PuzzleGraph`] and reuses it across operations — the graph is built once
/// per session and only its candidate state changes afterwards.
///
/// A session makes no attempt to distinguish "given" digits from digits the
/// engine deduced; it keeps exactly what it was told via
/// [`load_grid`](SolveSession::load_grid) and
/// [`update_cell`](SolveSession::update_cell), and re-derives everything
/// else from scratch on each request. Front ends that color user entries
/// differently track that themselves.
///
/// # Examples
///
/// ```
/// use gridloom_core::DigitGrid;
/// use gridloom_session::SolveSession;
///
/// let puzzle: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// let mut session = SolveSession::new();
/// let outcome = session.load_grid(&puzzle);
/// assert!(outcome.valid);
/// assert!(outcome.grid.is_complete()); // this one falls to propagation alone
/// # Ok::<(), gridloom_core::GridParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SolveSession {
    graph: PuzzleGraph,
    propagator: Propagator,
    searcher: Searcher,
    knowns: DigitGrid,
}

impl SolveSession {
    /// Creates a session with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: PuzzleGraph::new(),
            propagator: Propagator::new(),
            searcher: Searcher::new(),
            knowns: DigitGrid::new(),
        }
    }

    /// Replaces the session's known inputs with `grid` and propagates to a
    /// fixpoint.
    pub fn load_grid(&mut self, grid: &DigitGrid) -> SolveOutcome {
        self.knowns = grid.clone();
        self.propagate_from_knowns()
    }

    /// Applies a single-cell edit — `Some(digit)` to fill, `None` to clear —
    /// and re-propagates from scratch over all currently-known cells.
    ///
    /// An edit that makes the board inconsistent is kept: the session
    /// reports `valid: false` and waits. The caller decides whether to take
    /// the edit back (another `update_cell` with `None`) or to remove some
    /// other input instead.
    pub fn update_cell(&mut self, pos: Position, digit: Option<Digit>) -> SolveOutcome {
        self.knowns[pos] = digit;
        self.propagate_from_knowns()
    }

    /// Clears all known inputs and returns the board to the all-unknown
    /// state.
    pub fn reset(&mut self) {
        self.knowns = DigitGrid::new();
        self.graph.reset();
    }

    /// Runs backtracking search from the current board state.
    ///
    /// On success the returned grid is the completed board, and the session
    /// keeps it until the next request. On failure — the current inputs
    /// admit no completion — the board state from before the call is
    /// restored and returned with `valid: false`.
    ///
    /// The session's known inputs are not modified either way: a later
    /// [`update_cell`](SolveSession::update_cell) still re-derives the board
    /// from exactly the digits the caller entered.
    pub fn force_solve(&mut self) -> SolveOutcome {
        let valid = self.searcher.solve(&mut self.graph);
        SolveOutcome {
            valid,
            grid: self.graph.to_digit_grid(),
        }
    }

    /// Returns the caller-entered digits the session currently holds.
    #[must_use]
    pub fn known_grid(&self) -> &DigitGrid {
        &self.knowns
    }

    /// Rebuilds the graph from the known inputs and propagates.
    fn propagate_from_knowns(&mut self) -> SolveOutcome {
        self.graph.reset();
        self.graph.load_knowns(&self.knowns);
        let valid = self.propagator.run(&mut self.graph).is_ok();
        SolveOutcome {
            valid,
            grid: self.graph.to_digit_grid(),
        }
    }
}

impl Default for SolveSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use gridloom_core::PuzzleGraph;
    use gridloom_solver::validity;

    use super::*;

    const EASY_PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const EASY_SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

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

    fn grid(text: &str) -> DigitGrid {
        text.parse().unwrap()
    }

    #[test]
    fn easy_puzzle_solves_on_load() {
        let mut session = SolveSession::new();
        let outcome = session.load_grid(&grid(EASY_PUZZLE));
        assert!(outcome.valid);
        assert_eq!(outcome.grid, grid(EASY_SOLUTION));
    }

    #[test]
    fn duplicate_in_row_is_invalid_on_load() {
        let mut session = SolveSession::new();
        let mut puzzle = DigitGrid::new();
        puzzle[Position::new(0, 1)] = Some(Digit::D5);
        puzzle[Position::new(0, 6)] = Some(Digit::D5);
        let outcome = session.load_grid(&puzzle);
        assert!(!outcome.valid);
    }

    #[test]
    fn complete_solution_loads_unchanged() {
        let mut session = SolveSession::new();
        let solution = grid(EASY_SOLUTION);
        let outcome = session.load_grid(&solution);
        assert!(outcome.valid);
        assert_eq!(outcome.grid, solution);
    }

    #[test]
    fn blank_session_force_solve_completes() {
        let mut session = SolveSession::new();
        let outcome = session.force_solve();
        assert!(outcome.valid);
        assert!(outcome.grid.is_complete());

        // The result must satisfy the constraints, not just be full.
        let mut graph = PuzzleGraph::new();
        graph.load_knowns(&outcome.grid);
        assert!(validity::check(&graph).is_ok());
    }

    #[test]
    fn force_solve_finds_unique_completion() {
        let mut session = SolveSession::new();
        let outcome = session.load_grid(&grid(HARD_PUZZLE));
        assert!(outcome.valid);
        assert!(!outcome.grid.is_complete());

        let outcome = session.force_solve();
        assert!(outcome.valid);
        assert_eq!(outcome.grid, grid(HARD_SOLUTION));
    }

    #[test]
    fn force_solve_failure_restores_board() {
        let mut session = SolveSession::new();
        let loaded = session.load_grid(&grid(UNSOLVABLE_PUZZLE));
        assert!(loaded.valid, "inputs look fine until searched");

        let outcome = session.force_solve();
        assert!(!outcome.valid);
        assert_eq!(outcome.grid, loaded.grid);
        assert_eq!(session.known_grid(), &grid(UNSOLVABLE_PUZZLE));
    }

    #[test]
    fn reset_then_load_matches_fresh_session() {
        let mut reused = SolveSession::new();
        reused.load_grid(&grid(HARD_PUZZLE));
        reused.force_solve();
        reused.reset();
        assert_eq!(reused.known_grid(), &DigitGrid::new());
        let outcome_reused = reused.load_grid(&grid(EASY_PUZZLE));

        let mut fresh = SolveSession::new();
        let outcome_fresh = fresh.load_grid(&grid(EASY_PUZZLE));

        assert_eq!(outcome_reused, outcome_fresh);
    }

    #[test]
    fn update_cell_keeps_rejected_edit_until_cleared() {
        let mut session = SolveSession::new();
        session.load_grid(&grid(EASY_PUZZLE));

        // (0, 2) solves to 4; a 9 clashes with the 9 already in the box.
        let pos = Position::new(0, 2);
        let outcome = session.update_cell(pos, Some(Digit::D9));
        assert!(!outcome.valid);
        assert_eq!(session.known_grid()[pos], Some(Digit::D9));

        let outcome = session.update_cell(pos, None);
        assert!(outcome.valid);
        assert_eq!(outcome.grid, grid(EASY_SOLUTION));
    }

    #[test]
    fn update_cell_rederives_from_inputs_only() {
        let mut session = SolveSession::new();
        session.load_grid(&grid(HARD_PUZZLE));
        session.force_solve();

        // Editing after a solve recomputes from the entered digits, not from
        // the solved board: one new given leaves the rest open again.
        let outcome = session.update_cell(Position::new(0, 1), Some(Digit::D1));
        assert!(outcome.valid);
        assert!(!outcome.grid.is_complete());
        assert_eq!(
            session.known_grid()[Position::new(0, 1)],
            Some(Digit::D1)
        );
    }

    #[test]
    fn consecutive_entries_accumulate() {
        let mut session = SolveSession::new();
        let a = session.update_cell(Position::new(0, 0), Some(Digit::D1));
        assert!(a.valid);
        let b = session.update_cell(Position::new(8, 8), Some(Digit::D2));
        assert!(b.valid);
        assert_eq!(session.known_grid().known_count(), 2);
        assert_eq!(b.grid[Position::new(0, 0)], Some(Digit::D1));
        assert_eq!(b.grid[Position::new(8, 8)], Some(Digit::D2));
    }
}
