//! This module contains the [Board], which couples a [Grid] with the
//! [RegionMap] and required symbols it is solved against.
//!
//! The board is where candidate derivation lives: for any empty cell it can
//! compute the set of symbols not yet present in that cell's row, column and
//! region. The deduction rules in [crate::solver::rules] operate purely on
//! this view.

use crate::{Grid, Symbol};
use crate::error::{SudokuError, SudokuResult};
use crate::region::RegionMap;
use crate::util::SymbolSet;

/// A puzzle under deduction: the mutable [Grid] together with the immutable
/// [RegionMap] and the required symbols. One board is exclusively owned by
/// one [Solver](crate::solver::Solver) for its lifetime.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    grid: Grid,
    regions: RegionMap,
    required: Vec<Symbol>
}

impl Board {

    /// Creates a board from its three parts. The required symbols are
    /// expected to have been validated by configuration loading (length,
    /// range and distinctness); this constructor only checks that the
    /// dimensions of the parts agree.
    ///
    /// # Errors
    ///
    /// If the grid side length, the region map size and the number of
    /// required symbols do not all agree. In that case,
    /// `SudokuError::InvalidDimensions` is returned.
    pub fn new(grid: Grid, regions: RegionMap, required: Vec<Symbol>)
            -> SudokuResult<Board> {
        if grid.size() != regions.size() || grid.size() != required.len() {
            return Err(SudokuError::InvalidDimensions);
        }

        Ok(Board {
            grid,
            regions,
            required
        })
    }

    /// Gets the side length of the underlying grid.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Gets a reference to the underlying [Grid].
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Gets a mutable reference to the underlying [Grid].
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Gets a reference to the [RegionMap] this board is solved against.
    pub fn regions(&self) -> &RegionMap {
        &self.regions
    }

    /// Gets the symbols that must appear exactly once in every row, column
    /// and region, in configuration order.
    pub fn required(&self) -> &[Symbol] {
        &self.required
    }

    /// Gets the symbols of the region containing the cell at the given
    /// coordinates, in the region's stored order. The containing region is
    /// resolved by direct lookup in the region map, so irregular layouts
    /// behave the same as boxes.
    ///
    /// # Errors
    ///
    /// If `row` or `column` are not in the range `[0, size[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn region_values(&self, row: usize, column: usize)
            -> SudokuResult<Vec<Symbol>> {
        if row >= self.size() || column >= self.size() {
            return Err(SudokuError::OutOfBounds);
        }

        let positions = self.regions.region_positions_of(row, column);
        self.grid.values_at(positions)
    }

    /// Computes the candidate set for the cell at the given coordinates: the
    /// required symbols minus everything already present in the cell's row,
    /// column and region. Iterating the result yields candidates in
    /// ascending order, which keeps deduction deterministic.
    ///
    /// The cell's own symbol counts like any other, so calling this on a
    /// filled cell yields a set that does not contain its symbol.
    ///
    /// # Errors
    ///
    /// If `row` or `column` are not in the range `[0, size[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn missing_values(&self, row: usize, column: usize)
            -> SudokuResult<SymbolSet> {
        let mut missing = SymbolSet::new(self.size() as Symbol);

        for &symbol in &self.required {
            missing.insert(symbol).unwrap();
        }

        let present = self.grid.row_values(row)?
            .into_iter()
            .chain(self.grid.col_values(column)?)
            .chain(self.region_values(row, column)?);

        for value in present {
            if value != 0 {
                missing.remove(value).unwrap();
            }
        }

        Ok(missing)
    }
}
