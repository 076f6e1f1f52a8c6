// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a Sudoku engine for shape-partitioned grids. Instead
//! of hard-coding the classic 3x3 boxes, the grid is divided into a
//! configurable set of regions ("shapes"), each holding every required symbol
//! exactly once. Puzzles are solved by iterative logical deduction - naked
//! and hidden singles - never by backtracking search. A puzzle the rules
//! cannot finish is reported as stuck, which is a normal outcome rather than
//! an error.
//!
//! Note in this introduction we will mostly be using 4x4 grids due to their
//! simpler nature. These are divided in 4 2x2 boxes, each with the digits 1
//! to 4, just like each row and column.
//!
//! # Parsing and printing grids
//!
//! See [Grid::parse] for the exact format of a grid code.
//!
//! Codes are a compact way to write grids in tests and examples, while the
//! `Display` implementation pretty-prints a grid for inspection.
//!
//! ```
//! use sudoku_shapes::Grid;
//!
//! let grid = Grid::parse("4;2, ,3, , ,1, , ,1, , ,4, ,2, ,3").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving
//!
//! A [Board](board::Board) couples a grid with a
//! [RegionMap](region::RegionMap) and the required symbols, and a
//! [Solver](solver::Solver) runs the deduction loop on it. At most one cell
//! is committed per iteration, and the solver halts as
//! [Solved](solver::Outcome::Solved) or [Stuck](solver::Outcome::Stuck).
//!
//! ```
//! use sudoku_shapes::Grid;
//! use sudoku_shapes::board::Board;
//! use sudoku_shapes::region::RegionMap;
//! use sudoku_shapes::solver::{Outcome, Solver};
//!
//! let grid = Grid::parse("4; ,3,4,2,4,2,1,3,2,4,3,1,3,1,2,4").unwrap();
//! let regions = RegionMap::boxes(4).unwrap();
//! let board = Board::new(grid, regions, vec![1, 2, 3, 4]).unwrap();
//! let mut solver = Solver::new(board);
//!
//! assert_eq!(Outcome::Solved, solver.solve());
//! assert_eq!(1, solver.iteration());
//! assert_eq!(Some((0, 0)), solver.last_found());
//! ```
//!
//! # Configuration
//!
//! Region layouts and puzzles are ordinarily not written in code but loaded
//! from YAML documents, see the [config] module. The layout document carries
//! `square_size`, `shapes` and `required_numbers`, the puzzle document
//! carries the initial `grid`. Both are validated exhaustively before any
//! solver is constructed.

pub mod board;
pub mod config;
pub mod error;
pub mod region;
pub mod render;
pub mod solver;
pub mod util;

use error::{
    GridParseError,
    GridParseResult,
    SudokuError,
    SudokuResult
};

use std::fmt::{self, Display, Error, Formatter};

/// A single puzzle symbol. `0` denotes an empty cell, the values `1..=size`
/// are the legal symbols of a grid with side length `size`.
pub type Symbol = u8;

/// One cell of a [Grid]: its current [Symbol] and whether it was given in
/// the original puzzle. The given flag is assigned once at grid construction
/// and never changes afterwards; deduction ignores it, only presentation
/// distinguishes given clues from deduced digits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cell {
    value: Symbol,
    given: bool
}

impl Cell {

    fn new(value: Symbol) -> Cell {
        Cell {
            value,
            given: value != 0
        }
    }

    /// Gets the symbol currently held by this cell, where `0` means empty.
    pub fn value(&self) -> Symbol {
        self.value
    }

    /// Indicates whether this cell was filled in the original puzzle input.
    pub fn is_given(&self) -> bool {
        self.given
    }

    /// Indicates whether this cell currently holds no symbol.
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }
}

/// A square grid of [Cell]s with a fixed side length. Cells are stored in
/// row-major order, i.e. the cell at row `r` and column `c` is at the flat
/// position `r * size + c`. The grid never resizes.
///
/// The grid knows nothing about regions; those live in a
/// [RegionMap](region::RegionMap) and are combined with the grid by a
/// [Board](board::Board).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>
}

pub(crate) fn index(row: usize, column: usize, size: usize) -> usize {
    row * size + column
}

fn to_char(value: Symbol) -> char {
    if value == 0 {
        ' '
    }
    else {
        (b'0' + value) as char
    }
}

fn line(grid: &Grid, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let size = grid.size();
    let root = grid.root();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else if root > 1 && x % root == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(grid: &Grid) -> String {
    line(grid, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(grid: &Grid) -> String {
    line(grid, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(grid: &Grid) -> String {
    line(grid, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(grid: &Grid) -> String {
    line(grid, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, y: usize) -> String {
    line(grid, '║', '║', '│', |x| to_char(grid.get(y, x).unwrap()), ' ', '║',
        true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();

        if size > 9 {
            return Err(Error::default());
        }

        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);
        let root = self.root();

        for y in 0..size {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if root > 1 && y % root == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn cell_to_string(cell: &Cell) -> String {
    if cell.is_empty() {
        String::from("")
    }
    else {
        cell.value().to_string()
    }
}

impl Grid {

    /// Creates a new, empty grid with the given side length.
    ///
    /// # Errors
    ///
    /// If `size` is zero. In that case, `SudokuError::InvalidDimensions` is
    /// returned.
    pub fn new(size: usize) -> SudokuResult<Grid> {
        if size == 0 {
            return Err(SudokuError::InvalidDimensions);
        }

        Ok(Grid {
            size,
            cells: vec![Cell::new(0); size * size]
        })
    }

    /// Creates a grid from a square matrix of symbols, where `0` denotes an
    /// empty cell. Every non-zero entry is marked as a given clue. This is
    /// the constructor used for puzzle data loaded from configuration.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidDimensions` if `rows` is empty or any row does
    /// not contain exactly as many entries as there are rows.
    /// * `SudokuError::InvalidNumber` if any entry is greater than the side
    /// length.
    pub fn from_rows(rows: &[Vec<Symbol>]) -> SudokuResult<Grid> {
        let size = rows.len();

        if size == 0 {
            return Err(SudokuError::InvalidDimensions);
        }

        let mut cells = Vec::with_capacity(size * size);

        for row in rows {
            if row.len() != size {
                return Err(SudokuError::InvalidDimensions);
            }

            for &value in row {
                if value as usize > size {
                    return Err(SudokuError::InvalidNumber);
                }

                cells.push(Cell::new(value));
            }
        }

        Ok(Grid {
            size,
            cells
        })
    }

    /// Parses a code encoding a grid. The code has to be of the format
    /// `<size>;<cells>` where `<cells>` is a comma-separated list of entries,
    /// which are either empty or a number. The entries are assigned
    /// left-to-right, top-to-bottom, where each row is completed before the
    /// next one is started. Whitespace in the entries is ignored to allow for
    /// more intuitive formatting. The number of entries must be `size²`.
    /// Non-empty entries become given clues, as in [Grid::from_rows].
    ///
    /// As an example, the code `4;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` will parse
    /// to the following grid:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 1 │   ║ 2 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 3 ║   │ 4 ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║   │ 3 ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 1 ║   │ 2 ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `GridParseError` (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<Grid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(GridParseError::WrongNumberOfParts);
        }

        let size: usize = parts[0].trim().parse()?;

        if size == 0 {
            return Err(GridParseError::InvalidSize);
        }

        let mut grid = Grid::new(size).unwrap();
        let entries: Vec<&str> = parts[1].split(',').collect();

        if entries.len() != size * size {
            return Err(GridParseError::WrongNumberOfCells);
        }

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let value = entry.parse::<Symbol>()?;

            if value == 0 || value as usize > size {
                return Err(GridParseError::InvalidNumber);
            }

            grid.cells[i] = Cell::new(value);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change.
    ///
    /// ```
    /// use sudoku_shapes::Grid;
    ///
    /// let grid = Grid::parse("4;1, ,2, , ,3, ,4, , , ,3, ,1, ,2").unwrap();
    /// let reparsed = Grid::parse(&grid.to_parseable_string()).unwrap();
    /// assert_eq!(grid, reparsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{};", self.size);
        let cells = self.cells.iter()
            .map(cell_to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the side length of this grid. Since grids are always squares,
    /// this is the number of rows as well as the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the integer square root of the side length, or 0 if there is
    /// none. Display uses it to place box separators; the deduction core
    /// never relies on it.
    pub(crate) fn root(&self) -> usize {
        let root = (self.size as f64).sqrt() as usize;

        if root * root == self.size {
            root
        }
        else {
            0
        }
    }

    fn verified_index(&self, row: usize, column: usize)
            -> SudokuResult<usize> {
        if row >= self.size || column >= self.size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(index(row, column, self.size))
        }
    }

    /// Gets the symbol held by the cell at the specified position, where `0`
    /// means empty.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get(&self, row: usize, column: usize) -> SudokuResult<Symbol> {
        let index = self.verified_index(row, column)?;
        Ok(self.cells[index].value())
    }

    /// Gets a reference to the [Cell] at the specified position.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the range `[0, size[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn cell(&self, row: usize, column: usize) -> SudokuResult<&Cell> {
        let index = self.verified_index(row, column)?;
        Ok(&self.cells[index])
    }

    /// Commits a symbol into the currently-empty cell at the specified
    /// position. The cell is *not* marked as given. Overwriting a non-empty
    /// cell is rejected, since the solver must never do that.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, size[`.
    /// * `value`: The symbol to commit. Must be in the range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` if either `row` or `column` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` if `value` is not in the specified
    /// range.
    /// * `SudokuError::CellOccupied` if the cell already holds a symbol.
    pub fn set(&mut self, row: usize, column: usize, value: Symbol)
            -> SudokuResult<()> {
        let index = self.verified_index(row, column)?;

        if value == 0 || value as usize > self.size {
            return Err(SudokuError::InvalidNumber);
        }

        if !self.cells[index].is_empty() {
            return Err(SudokuError::CellOccupied);
        }

        self.cells[index].value = value;
        Ok(())
    }

    /// Gets the `size` symbols of the given row, in column order.
    ///
    /// # Errors
    ///
    /// If `row` is not in the range `[0, size[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn row_values(&self, row: usize) -> SudokuResult<Vec<Symbol>> {
        if row >= self.size {
            return Err(SudokuError::OutOfBounds);
        }

        Ok((0..self.size)
            .map(|column| self.cells[index(row, column, self.size)].value())
            .collect())
    }

    /// Gets the `size` symbols of the given column, in row order.
    ///
    /// # Errors
    ///
    /// If `column` is not in the range `[0, size[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn col_values(&self, column: usize) -> SudokuResult<Vec<Symbol>> {
        if column >= self.size {
            return Err(SudokuError::OutOfBounds);
        }

        Ok((0..self.size)
            .map(|row| self.cells[index(row, column, self.size)].value())
            .collect())
    }

    /// Gets the symbols at the given flat cell positions, in the order the
    /// positions are listed. This is how a [Board](board::Board) reads the
    /// values of a region.
    ///
    /// # Errors
    ///
    /// If any position is not in the range `[0, size²[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn values_at(&self, positions: &[usize]) -> SudokuResult<Vec<Symbol>> {
        positions.iter()
            .map(|&position| self.cells.get(position)
                .map(Cell::value)
                .ok_or(SudokuError::OutOfBounds))
            .collect()
    }

    /// Indicates whether the given row contains the given symbol.
    ///
    /// # Errors
    ///
    /// If `row` is not in the range `[0, size[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn row_contains(&self, row: usize, value: Symbol)
            -> SudokuResult<bool> {
        Ok(self.row_values(row)?.contains(&value))
    }

    /// Indicates whether the given column contains the given symbol.
    ///
    /// # Errors
    ///
    /// If `column` is not in the range `[0, size[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn col_contains(&self, column: usize, value: Symbol)
            -> SudokuResult<bool> {
        Ok(self.col_values(column)?.contains(&value))
    }

    /// Counts the cells which currently hold no symbol.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Indicates whether every cell of this grid holds a symbol. This is the
    /// case if and only if [Grid::count_empty] returns 0.
    pub fn is_complete(&self) -> bool {
        !self.cells.iter().any(|c| c.is_empty())
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
