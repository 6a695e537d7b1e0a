//! The puzzle constraint graph.

use crate::{
    candidate_set::CandidateSet,
    digit::Digit,
    digit_grid::DigitGrid,
    group::{CELL_COUNT, CellId, GROUP_COUNT, Group, GroupId, GroupKind},
    position::Position,
};

/// One cell variable: a position, its candidate set, and the three
/// constraints it belongs to.
///
/// The group references are arena indices into the owning graph, not
/// pointers; a cell is meaningless outside its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    candidates: CandidateSet,
    groups: [GroupId; 3],
}

impl Cell {
    /// Returns the cell's board position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the cell's arena id (equal to its position index).
    #[must_use]
    pub const fn id(&self) -> CellId {
        self.position.index()
    }

    /// Returns the digits this cell can still take.
    #[must_use]
    pub const fn candidates(&self) -> CandidateSet {
        self.candidates
    }

    /// Returns the ids of the row, column, and box constraints containing
    /// this cell, in that order.
    #[must_use]
    pub const fn groups(&self) -> [GroupId; 3] {
        self.groups
    }

    /// Returns the cell's known value, if it is solved.
    #[must_use]
    pub fn known(&self) -> Option<Digit> {
        self.candidates.known()
    }
}

/// A restore point for backtracking: the candidate sets of all 81 cells,
/// copied by value.
///
/// Snapshots deliberately exclude the graph's topology — the links between
/// cells and groups never change, so saving them would only invite aliasing
/// mistakes. Restoring a snapshot into the graph it came from recovers the
/// exact candidate state.
#[derive(Debug, Clone)]
pub struct CandidateSnapshot {
    candidates: [CandidateSet; CELL_COUNT],
}

/// The constraint graph of one 9×9 puzzle.
///
/// Owns all 81 [`Cell`] variables and all 27 [`Group`] constraints in flat
/// arenas, cross-linked by index in both directions. The topology — which
/// cell belongs to which constraints — is fixed at construction; solving
/// only ever rewrites candidate sets, and [`reset`] returns the graph to the
/// all-unknown state without rebuilding anything.
///
/// The graph is a plain single-threaded value. Running two solves at once
/// requires two graphs; the topology could in principle be shared read-only,
/// but candidate mutation is not synchronized.
///
/// [`reset`]: PuzzleGraph::reset
///
/// # Examples
///
/// ```
/// use gridloom_core::{Digit, DigitGrid, Position, PuzzleGraph};
///
/// let mut graph = PuzzleGraph::new();
/// assert_eq!(graph.candidate_count(), 81 * 9);
///
/// let mut grid = DigitGrid::new();
/// grid[Position::new(3, 3)] = Some(Digit::D2);
/// graph.load_knowns(&grid);
/// assert_eq!(graph.known_at(Position::new(3, 3)), Some(Digit::D2));
/// assert_eq!(graph.candidate_count(), 80 * 9 + 1);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGraph {
    cells: [Cell; CELL_COUNT],
    groups: [Group; GROUP_COUNT],
}

impl PuzzleGraph {
    /// Builds the graph and wires its fixed topology: cells in row-major
    /// order, groups ordered rows 0-8, columns 9-17, boxes 18-26.
    ///
    /// Every cell starts with all nine digits possible.
    #[must_use]
    pub fn new() -> Self {
        let cells = Position::ALL.map(|position| Cell {
            position,
            candidates: CandidateSet::FULL,
            groups: [
                usize::from(position.row()),
                9 + usize::from(position.col()),
                18 + usize::from(position.box_index()),
            ],
        });

        let mut groups = [Group::new(GroupKind::Row, 0); GROUP_COUNT];
        for kind in GroupKind::ALL {
            for index in 0..9 {
                let group = Group::new(kind, index);
                groups[group.id()] = group;
            }
        }

        Self { cells, groups }
    }

    /// Resets every candidate set to all nine digits, leaving the topology
    /// untouched.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.candidates = CandidateSet::FULL;
        }
    }

    /// Forces every filled cell of `grid` to the corresponding singleton
    /// candidate set. Empty cells are left as they are — callers rebuilding
    /// from scratch call [`reset`](PuzzleGraph::reset) first.
    pub fn load_knowns(&mut self, grid: &DigitGrid) {
        for cell in &mut self.cells {
            if let Some(digit) = grid[cell.position] {
                cell.candidates = CandidateSet::singleton(digit);
            }
        }
    }

    /// Returns the cell with the given arena id.
    #[must_use]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns the group with the given arena id.
    #[must_use]
    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id]
    }

    /// Returns all 27 groups in arena order.
    #[must_use]
    pub fn groups(&self) -> &[Group; GROUP_COUNT] {
        &self.groups
    }

    /// Returns the candidate set of the cell at `pos`.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> CandidateSet {
        self.cells[pos.index()].candidates
    }

    /// Returns the known value of the cell at `pos`, if it is solved.
    #[must_use]
    pub fn known_at(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()].known()
    }

    /// Forces the cell to the singleton `{digit}`, discarding any other
    /// candidates it still had.
    pub fn set_known(&mut self, id: CellId, digit: Digit) {
        self.cells[id].candidates = CandidateSet::singleton(digit);
    }

    /// Removes `digit` from the cell's candidates, returning `true` if it
    /// was present.
    pub fn remove_candidate(&mut self, id: CellId, digit: Digit) -> bool {
        self.cells[id].candidates.remove(digit)
    }

    /// Returns the grid of known values; unsolved cells are `None`.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for cell in &self.cells {
            grid[cell.position] = cell.known();
        }
        grid
    }

    /// Returns the total number of candidate flags over all 81 cells.
    ///
    /// This is the measure propagation watches for convergence: it can only
    /// shrink, and a full pass that leaves it unchanged has changed nothing.
    #[must_use]
    pub fn candidate_count(&self) -> u32 {
        self.cells.iter().map(|cell| cell.candidates.len()).sum()
    }

    /// Returns `true` if every cell is solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.candidates.is_solved())
    }

    /// Copies the candidate sets of all cells into a restore point.
    #[must_use]
    pub fn snapshot(&self) -> CandidateSnapshot {
        CandidateSnapshot {
            candidates: self.cells.map(|cell| cell.candidates),
        }
    }

    /// Restores the candidate sets captured by [`snapshot`].
    ///
    /// [`snapshot`]: PuzzleGraph::snapshot
    pub fn restore(&mut self, snapshot: &CandidateSnapshot) {
        for (cell, candidates) in self.cells.iter_mut().zip(snapshot.candidates) {
            cell.candidates = candidates;
        }
    }
}

impl Default for PuzzleGraph {
    fn default() -> Self {
        Self::new()
    }
}
