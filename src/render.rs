//! This module contains the colorized terminal presentation of a solve in
//! progress.
//!
//! Rendering is strictly read-only over the [Solver]: it prints the
//! iteration header, then the grid with given clues in bold, deduced digits
//! in green, the most recently found cell highlighted in yellow and empty
//! cells as dots. Box boundaries are marked with extra spacing when the side
//! length has an integer square root, which it always has for supported
//! layouts.

use crate::solver::Solver;

use crossterm::queue;
use crossterm::style::{
    Attribute,
    Color,
    Print,
    ResetColor,
    SetAttribute,
    SetForegroundColor
};

use std::io::{self, Write};

/// Writes the current state of the given solver to `out` and flushes it.
/// One call produces one frame: a header with the iteration number and the
/// missing-value counts, followed by the grid.
///
/// # Errors
///
/// Any I/O error raised by the underlying writer.
pub fn render(out: &mut impl Write, solver: &Solver) -> io::Result<()> {
    let grid = solver.grid();
    let size = grid.size();
    let root = grid.root();
    let width = if size > 9 { 2 } else { 1 };

    queue!(out, Print(format!(
        "iteration {:>3}   missing values {:>3}   started with {:>3}\n\n",
        solver.iteration(), solver.missing(), solver.start_missing())))?;

    for row in 0..size {
        if row != 0 && root > 1 && row % root == 0 {
            queue!(out, Print("\n"))?;
        }

        for column in 0..size {
            if column != 0 {
                if root > 1 && column % root == 0 {
                    queue!(out, Print("  "))?;
                }
                else {
                    queue!(out, Print(" "))?;
                }
            }

            let cell = grid.cell(row, column).unwrap();
            let highlighted = solver.last_found() == Some((row, column));

            if cell.is_empty() {
                queue!(out,
                    SetForegroundColor(Color::DarkGrey),
                    Print(format!("{:>w$}", ".", w = width)),
                    ResetColor)?;
            }
            else if highlighted {
                queue!(out,
                    SetForegroundColor(Color::Yellow),
                    SetAttribute(Attribute::Bold),
                    Print(format!("{:>w$}", cell.value(), w = width)),
                    SetAttribute(Attribute::Reset))?;
            }
            else if cell.is_given() {
                queue!(out,
                    SetAttribute(Attribute::Bold),
                    Print(format!("{:>w$}", cell.value(), w = width)),
                    SetAttribute(Attribute::Reset))?;
            }
            else {
                queue!(out,
                    SetForegroundColor(Color::Green),
                    Print(format!("{:>w$}", cell.value(), w = width)),
                    ResetColor)?;
            }
        }

        queue!(out, Print("\n"))?;
    }

    queue!(out, Print("\n"))?;
    out.flush()
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::Grid;
    use crate::board::Board;
    use crate::region::RegionMap;

    fn solver_4x4(code: &str) -> Solver {
        let grid = Grid::parse(code).unwrap();
        let regions = RegionMap::boxes(4).unwrap();
        Solver::new(Board::new(grid, regions, vec![1, 2, 3, 4]).unwrap())
    }

    #[test]
    fn render_writes_header_and_cells() {
        let solver = solver_4x4("4;1, ,2, , ,3, ,4, , , ,3, ,1, ,2");
        let mut out = Vec::new();

        render(&mut out, &solver).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("iteration   1"));
        assert!(text.contains("missing values   9"));
        assert!(text.contains('1'));
        assert!(text.contains('.'));
    }

    #[test]
    fn render_survives_a_full_solve() {
        let mut solver = solver_4x4("4; ,3,4,2,4,2,1,3,2,4,3,1,3,1,2,4");
        solver.solve();
        let mut out = Vec::new();

        render(&mut out, &solver).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("missing values   0"));
        assert!(!text.contains('.'));
    }
}
