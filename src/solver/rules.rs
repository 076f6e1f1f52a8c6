//! This module contains the deduction rules applied by the
//! [Solver](crate::solver::Solver).
//!
//! A rule is a pure function over the board and one empty cell: it either
//! proves a symbol is forced for that cell or makes no claim. Rules never
//! mutate anything; committing a proven symbol is the solver's job. The two
//! rules provided here, [NakedSingle] and [HiddenSingle], are applied in
//! that fixed priority order.

use crate::Symbol;
use crate::board::Board;

/// A trait for deduction rules, which use logical reasoning to prove that a
/// symbol is forced for a single cell.
pub trait Rule {

    /// Examines the empty cell at the given coordinates and returns the
    /// symbol that is provably forced for it, or `None` if this rule cannot
    /// decide the cell in the current grid state. Implementations must not
    /// rely on being called in any particular order and must not mutate the
    /// board.
    fn deduce(&self, board: &Board, row: usize, column: usize)
        -> Option<Symbol>;
}

/// A [Rule] which detects naked singles, that is, cells with exactly one
/// remaining candidate.
///
/// As a small example, take a look at the following grid:
///
/// ```text
/// ╔═══╤═══╦═══╤═══╗
/// ║ X │   ║   │ 2 ║
/// ╟───┼───╫───┼───╢
/// ║   │ 1 ║   │   ║
/// ╠═══╪═══╬═══╪═══╣
/// ║   │   ║   │   ║
/// ╟───┼───╫───┼───╢
/// ║ 3 │   ║   │   ║
/// ╚═══╧═══╩═══╧═══╝
/// ```
///
/// The cell marked with X cannot be a 1 because of the 1 in its region, nor
/// a 2 because of the 2 in its row, and also cannot be a 3 because of the 3
/// in its column. Consequently, it can only be a 4. This rule detects that.
#[derive(Clone)]
pub struct NakedSingle;

impl Rule for NakedSingle {

    fn deduce(&self, board: &Board, row: usize, column: usize)
            -> Option<Symbol> {
        let missing = board.missing_values(row, column).unwrap();

        if missing.len() == 1 {
            missing.iter().next()
        }
        else {
            None
        }
    }
}

/// A [Rule] which detects hidden singles: candidates which no *other* empty
/// cell of the region can take, making this cell the only home for them.
///
/// As a visualization, the cell marked with X in the following example is
/// the only one in its region that can be a 2: the other empty cells of the
/// region all lie in the first row, which already contains a 2.
///
/// ```text
/// ╔═══╤═══╦═══╤═══╗
/// ║   │   ║   │ 2 ║
/// ╟───┼───╫───┼───╢
/// ║ X │ 1 ║   │   ║
/// ╠═══╪═══╬═══╪═══╣
/// ║   │   ║   │   ║
/// ╟───┼───╫───┼───╢
/// ║   │   ║   │   ║
/// ╚═══╧═══╩═══╧═══╝
/// ```
///
/// Whether another cell can take a candidate is decided by its row and
/// column values alone. The candidate is already known to be absent from the
/// shared region, so a region check would be redundant for cells of the same
/// region.
///
/// If exactly one candidate of the examined cell passes the "no other cell
/// can take it" test, that candidate is forced. If none or several pass, no
/// claim is made: several passing candidates for one cell indicate a
/// contradiction elsewhere, and committing any of them would be guesswork.
#[derive(Clone)]
pub struct HiddenSingle;

impl Rule for HiddenSingle {

    fn deduce(&self, board: &Board, row: usize, column: usize)
            -> Option<Symbol> {
        let size = board.size();
        let grid = board.grid();
        let positions = board.regions().region_positions_of(row, column);
        let missing = board.missing_values(row, column).unwrap();
        let mut forced = None;

        for candidate in missing.iter() {
            let mut placeable_elsewhere = false;

            for &position in positions {
                let other_row = position / size;
                let other_column = position % size;

                if other_row == row && other_column == column {
                    continue;
                }

                if grid.get(other_row, other_column).unwrap() != 0 {
                    continue;
                }

                if !grid.row_contains(other_row, candidate).unwrap() &&
                        !grid.col_contains(other_column, candidate).unwrap() {
                    placeable_elsewhere = true;
                    break;
                }
            }

            if !placeable_elsewhere {
                if forced.is_some() {
                    return None;
                }

                forced = Some(candidate);
            }
        }

        forced
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::Grid;
    use crate::region::RegionMap;

    fn board_4x4(code: &str) -> Board {
        let grid = Grid::parse(code).unwrap();
        let regions = RegionMap::boxes(4).unwrap();
        Board::new(grid, regions, vec![1, 2, 3, 4]).unwrap()
    }

    #[test]
    fn naked_single_fires_on_single_candidate() {
        // The doc example: X at (0, 0) sees 1 (region), 2 (row), 3 (column).
        let board = board_4x4("4; ,,,2, ,1,,, ,,,, 3,,,");

        assert_eq!(Some(4), NakedSingle.deduce(&board, 0, 0));
    }

    #[test]
    fn naked_single_ignores_cells_with_several_candidates() {
        let board = board_4x4("4; ,,,2, ,1,,, ,,,, ,,,");

        // (0, 0) can still be 3 or 4.
        assert_eq!(None, NakedSingle.deduce(&board, 0, 0));
    }

    #[test]
    fn naked_single_ignores_cells_without_candidates() {
        // Contradictory input: (0, 0) sees all four symbols.
        let board = board_4x4("4; ,1,,2, ,3,,, 4,,,, ,,,");

        assert_eq!(None, NakedSingle.deduce(&board, 0, 0));
    }

    #[test]
    fn hidden_single_fires_on_only_possible_cell() {
        // The doc example: (1, 0) is the only cell of the top-left region
        // that can take a 2.
        let board = board_4x4("4; ,,,2, ,1,,, ,,,, ,,,");

        assert_eq!(Some(2), HiddenSingle.deduce(&board, 1, 0));
    }

    #[test]
    fn hidden_single_makes_no_claim_when_two_cells_share_candidates() {
        // (2, 0) and (3, 0) both accept exactly {3, 4}: neither is forced.
        let board = board_4x4("4;1,2,,, 2,1,,, ,,,, ,,,");

        assert_eq!(None, HiddenSingle.deduce(&board, 2, 0));
        assert_eq!(None, HiddenSingle.deduce(&board, 3, 0));
    }

    #[test]
    fn hidden_single_makes_no_claim_when_several_candidates_pass() {
        // (0, 0) and (0, 1) are the empty cells of the top-left region,
        // which is missing 3 and 4. The 3 and 4 in the second column block
        // both candidates in (0, 1), so both pass the "no other home" test
        // for (0, 0). Committing either would be guesswork, so the rule
        // must stay silent.
        let board = board_4x4("4; ,,,, 1,2,,, ,3,,, ,4,,");

        assert_eq!(None, HiddenSingle.deduce(&board, 0, 0));
    }
}
