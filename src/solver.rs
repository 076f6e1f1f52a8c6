//! This module contains the logic for solving puzzles by iterative
//! deduction.
//!
//! Most importantly, this module contains the definition of the [Solver],
//! which owns a [Board] and repeatedly scans it with the deduction rules
//! from the [rules] submodule. At most one cell is committed per iteration:
//! after any commit the candidate sets of other cells may have changed, so
//! the scan restarts from the top instead of continuing with stale
//! knowledge.
//!
//! The solver halts in one of two terminal [Outcome]s: [Outcome::Solved]
//! when every cell is filled, or [Outcome::Stuck] when a full scan finds no
//! further deduction. Stuck is a normal report - it means the puzzle cannot
//! be finished by naked and hidden singles alone - and never an error.

pub mod rules;

use crate::board::Board;
use crate::Grid;
use crate::solver::rules::{HiddenSingle, NakedSingle, Rule};

use log::debug;

/// An enumeration of the terminal states of a [Solver]. Note that stuck is
/// relative to the rule set: a stuck puzzle may well have a unique solution
/// which finding would require guessing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {

    /// Indicates that every cell of the grid holds a symbol.
    Solved,

    /// Indicates that the grid is incomplete, but a full scan produced no
    /// further deduction. Solving cannot make progress without guessing,
    /// which this engine deliberately does not do.
    Stuck
}

/// Solves a puzzle by repeated full-grid scans, committing at most one
/// deduced symbol per iteration.
///
/// The solver exclusively owns its [Board] for its lifetime. Progress can be
/// observed between iterations via [Solver::step] and the read accessors,
/// which is how the terminal renderer shows the solve unfolding; [Solver::solve]
/// simply runs [Solver::step] to a terminal outcome. Once halted, further
/// calls are no-ops reporting the same outcome.
pub struct Solver {
    board: Board,
    rules: Vec<Box<dyn Rule>>,
    iteration: usize,
    start_missing: usize,
    last_found: Option<(usize, usize)>,
    outcome: Option<Outcome>
}

impl Solver {

    /// Creates a solver for the given board using the default rules:
    /// [NakedSingle] first, then [HiddenSingle].
    pub fn new(board: Board) -> Solver {
        Solver::with_rules(board,
            vec![Box::new(NakedSingle), Box::new(HiddenSingle)])
    }

    /// Creates a solver for the given board using a custom list of rules.
    /// For each empty cell, the rules are tried in the order they are given
    /// here; the first one to prove a symbol wins the iteration.
    pub fn with_rules(board: Board, rules: Vec<Box<dyn Rule>>) -> Solver {
        let start_missing = board.grid().count_empty();

        Solver {
            board,
            rules,
            iteration: 1,
            start_missing,
            last_found: None,
            outcome: None
        }
    }

    /// Gets a reference to the [Board] this solver operates on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets a reference to the grid in its current state of deduction.
    ///
    /// This is syntactic sugar for `x.board().grid()`.
    pub fn grid(&self) -> &Grid {
        self.board.grid()
    }

    /// Gets the current iteration number, starting at 1. On a puzzle that
    /// was solved by deduction, this equals the number of committed cells,
    /// since every iteration except the last commits exactly one.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Gets the number of empty cells the grid had when this solver was
    /// constructed.
    pub fn start_missing(&self) -> usize {
        self.start_missing
    }

    /// Gets the number of cells that are currently empty.
    pub fn missing(&self) -> usize {
        self.board.grid().count_empty()
    }

    /// Gets the number of symbols this solver has committed so far.
    pub fn found(&self) -> usize {
        self.start_missing - self.missing()
    }

    /// Gets the coordinates `(row, column)` of the cell committed by the
    /// most recent scan, or `None` if no scan has committed yet or the most
    /// recent scan found nothing. Presentation uses this for highlighting.
    pub fn last_found(&self) -> Option<(usize, usize)> {
        self.last_found
    }

    /// Gets the terminal [Outcome], or `None` while the solver can still
    /// make progress.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Indicates whether this solver has halted.
    pub fn is_halted(&self) -> bool {
        self.outcome.is_some()
    }

    /// Performs one iteration: scans the grid in row-major order and commits
    /// the first symbol any rule proves, then checks the halting conditions.
    /// Returns the terminal [Outcome] if the solver has halted (now or
    /// earlier) and `None` if another iteration can make progress. Once
    /// halted, calling this again changes nothing.
    pub fn step(&mut self) -> Option<Outcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        self.last_found = None;
        let size = self.board.size();

        'scan: for row in 0..size {
            for column in 0..size {
                if self.board.grid().get(row, column).unwrap() != 0 {
                    continue;
                }

                for rule in &self.rules {
                    if let Some(value) = rule.deduce(&self.board, row, column) {
                        self.board.grid_mut().set(row, column, value).unwrap();
                        self.last_found = Some((row, column));
                        debug!("iteration {}: committed {} at ({}, {})",
                            self.iteration, value, row, column);
                        break 'scan;
                    }
                }
            }
        }

        if self.board.grid().is_complete() {
            debug!("solved after iteration {}", self.iteration);
            self.outcome = Some(Outcome::Solved);
        }
        else if self.last_found.is_none() {
            debug!("stuck after iteration {}, {} cells unresolved",
                self.iteration, self.missing());
            self.outcome = Some(Outcome::Stuck);
        }
        else {
            self.iteration += 1;
        }

        self.outcome
    }

    /// Runs [Solver::step] until the solver halts and returns the terminal
    /// [Outcome]. Calling this on an already-halted solver performs no
    /// further mutation and reports the same outcome.
    pub fn solve(&mut self) -> Outcome {
        loop {
            if let Some(outcome) = self.step() {
                return outcome;
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::Grid;
    use crate::region::RegionMap;

    fn board(code: &str, size: usize) -> Board {
        let grid = Grid::parse(code).unwrap();
        let regions = RegionMap::boxes(size).unwrap();
        let required = (1..=size as crate::Symbol).collect();
        Board::new(grid, regions, required).unwrap()
    }

    // A solved classic 9x9 grid, used as the base of several scenarios.
    const SOLVED_9X9: &str = "9;\
        7,4,6,2,8,1,3,5,9,\
        9,1,2,5,3,7,8,4,6,\
        8,5,3,4,9,6,1,7,2,\
        3,7,4,1,2,5,6,9,8,\
        6,2,8,7,4,9,5,1,3,\
        5,9,1,3,6,8,7,2,4,\
        1,6,9,8,7,4,2,3,5,\
        2,8,5,9,1,3,4,6,7,\
        4,3,7,6,5,2,9,8,1";

    // The same grid with every 5 removed. The nine empty cells share no
    // row, column or region, so each one sees all eight other symbols and
    // is an immediate naked single.
    const MISSING_FIVES_9X9: &str = "9;\
        7,4,6,2,8,1,3, ,9,\
        9,1,2, ,3,7,8,4,6,\
        8, ,3,4,9,6,1,7,2,\
        3,7,4,1,2, ,6,9,8,\
        6,2,8,7,4,9, ,1,3,\
         ,9,1,3,6,8,7,2,4,\
        1,6,9,8,7,4,2,3, ,\
        2,8, ,9,1,3,4,6,7,\
        4,3,7,6, ,2,9,8,1";

    #[test]
    fn single_missing_cell_solved_in_one_iteration() {
        let mut solver =
            Solver::new(board("4; ,3,4,2,4,2,1,3,2,4,3,1,3,1,2,4", 4));

        assert_eq!(Outcome::Solved, solver.solve());
        assert_eq!(1, solver.iteration());
        assert_eq!(1, solver.found());
        assert_eq!(Some((0, 0)), solver.last_found());
        assert_eq!(1, solver.grid().get(0, 0).unwrap());
        assert!(solver.grid().is_complete());
    }

    #[test]
    fn at_most_one_commit_per_iteration() {
        // Both (0, 0) and (3, 0) are naked singles from the start, but a
        // single step may only fill the first one found.
        let mut solver =
            Solver::new(board("4; ,3,4,2,4,2,1,3,2,4,3,1, ,1,2,4", 4));

        assert_eq!(None, solver.step());
        assert_eq!(Some((0, 0)), solver.last_found());
        assert_eq!(1, solver.missing());
        assert_eq!(2, solver.iteration());

        assert_eq!(Some(Outcome::Solved), solver.step());
        assert_eq!(Some((3, 0)), solver.last_found());
        assert_eq!(3, solver.grid().get(3, 0).unwrap());
        assert_eq!(2, solver.iteration());
        assert_eq!(2, solver.found());
    }

    #[test]
    fn solvable_grid_iterations_match_deduced_cells() {
        let mut solver = Solver::new(board(MISSING_FIVES_9X9, 9));

        assert_eq!(9, solver.start_missing());
        assert_eq!(Outcome::Solved, solver.solve());
        assert_eq!(9, solver.iteration());
        assert_eq!(9, solver.found());
        assert_eq!(0, solver.missing());
        assert_eq!(Grid::parse(SOLVED_9X9).unwrap().cells().iter()
                .map(|c| c.value()).collect::<Vec<_>>(),
            solver.grid().cells().iter()
                .map(|c| c.value()).collect::<Vec<_>>());
    }

    #[test]
    fn sparse_grid_reported_stuck() {
        // A single clue leaves nothing for either rule to prove.
        let mut solver = Solver::new(board(
            "9;1,,,,,,,,,\
            ,,,,,,,,,,,,,,,,,,\
            ,,,,,,,,,,,,,,,,,,\
            ,,,,,,,,,,,,,,,,,,\
            ,,,,,,,,,,,,,,,,,", 9));

        assert_eq!(Outcome::Stuck, solver.solve());
        assert!(!solver.grid().is_complete());
        assert_eq!(1, solver.iteration());
        assert_eq!(0, solver.found());
        assert_eq!(None, solver.last_found());
        assert_eq!(80, solver.missing());
    }

    #[test]
    fn stuck_solver_is_stable_across_calls() {
        let mut solver = Solver::new(board(
            "9;1,,,,,,,,,\
            ,,,,,,,,,,,,,,,,,,\
            ,,,,,,,,,,,,,,,,,,\
            ,,,,,,,,,,,,,,,,,,\
            ,,,,,,,,,,,,,,,,,", 9));

        assert_eq!(Outcome::Stuck, solver.solve());
        let grid_before = solver.grid().clone();
        let iteration_before = solver.iteration();

        assert_eq!(Outcome::Stuck, solver.solve());
        assert_eq!(Some(Outcome::Stuck), solver.step());
        assert_eq!(&grid_before, solver.grid());
        assert_eq!(iteration_before, solver.iteration());
    }

    #[test]
    fn complete_input_solved_immediately_without_commits() {
        let mut solver = Solver::new(board(SOLVED_9X9, 9));

        assert_eq!(0, solver.start_missing());
        assert_eq!(Outcome::Solved, solver.solve());
        assert_eq!(1, solver.iteration());
        assert_eq!(0, solver.found());
        assert_eq!(None, solver.last_found());
    }

    #[test]
    fn solved_solver_is_idempotent() {
        let mut solver = Solver::new(board(MISSING_FIVES_9X9, 9));

        assert_eq!(Outcome::Solved, solver.solve());
        let iteration = solver.iteration();

        assert_eq!(Outcome::Solved, solver.solve());
        assert_eq!(iteration, solver.iteration());
        assert_eq!(9, solver.found());
    }

    #[test]
    fn hidden_single_resolves_what_naked_single_cannot() {
        // No cell of this grid is a naked single. The first cell the scan
        // can decide is (0, 2): it is the only cell of the top-right region
        // that can take a 1, since the 1 in the second row blocks the other
        // empty cells of that region. The solver must fall through to the
        // hidden single rule and commit it.
        let mut solver = Solver::new(board("4; ,,,2, ,1,,, ,,,, ,,,", 4));

        assert_eq!(None, solver.step());
        assert_eq!(Some((0, 2)), solver.last_found());
        assert_eq!(1, solver.grid().get(0, 2).unwrap());
    }

    #[test]
    fn non_box_regions_are_solved_too() {
        // A 2x2 grid has no box layout at all (2 has no integer square
        // root), but a partition into row-shaped regions works fine.
        let grid = Grid::parse("2;1,, ,").unwrap();
        let regions = RegionMap::new(2, vec![
            vec![0, 1],
            vec![2, 3]
        ]).unwrap();
        let mut solver =
            Solver::new(Board::new(grid, regions, vec![1, 2]).unwrap());

        assert_eq!(Outcome::Solved, solver.solve());
        assert_eq!(2, solver.grid().get(0, 1).unwrap());
        assert_eq!(2, solver.grid().get(1, 0).unwrap());
        assert_eq!(1, solver.grid().get(1, 1).unwrap());
    }
}
