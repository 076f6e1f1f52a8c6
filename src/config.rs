//! This module contains the YAML configuration surface of the engine.
//!
//! Two documents describe a puzzle, mirroring the split between the rules of
//! a grid and one concrete instance of it:
//!
//! * The *layout* document carries `square_size`, `shapes` (one list of flat
//!   cell positions per region) and `required_numbers`.
//! * The *puzzle* document carries `grid`, a `square_size` x `square_size`
//!   matrix of symbols where `0` denotes an empty cell.
//!
//! Loading is plain `serde` deserialization; all semantic validation happens
//! in [LayoutConfig::build] and [PuzzleConfig::into_grid], which turn the raw
//! documents into the core types. Validation is exhaustive and fatal: a
//! process with a malformed configuration must stop before solving starts.
//! Configuration is loaded exactly once at startup and handed to the solver
//! by the entry point; there is no global configuration state.

use crate::{Grid, Symbol};
use crate::error::{ConfigError, ConfigResult};
use crate::region::{Region, RegionMap};
use crate::util::SymbolSet;

use serde::Deserialize;

use std::fs::File;
use std::path::Path;

/// The raw layout document: side length, shapes and required symbols.
/// Obtain one with [LayoutConfig::load] and validate it with
/// [LayoutConfig::build].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct LayoutConfig {

    /// The side length of the grid, e.g. 9 for a classic Sudoku.
    pub square_size: usize,

    /// One entry per region, each listing the flat cell positions
    /// (row-major) belonging to it.
    pub shapes: Vec<Region>,

    /// The symbols that must appear exactly once in every row, column and
    /// region.
    pub required_numbers: Vec<Symbol>
}

/// The raw puzzle document: the initial grid.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct PuzzleConfig {

    /// The initial cell values, row by row, where `0` denotes an empty cell.
    pub grid: Vec<Vec<Symbol>>
}

impl LayoutConfig {

    /// Reads a layout document from the YAML file at the given path.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Io` if the file cannot be read.
    /// * `ConfigError::Yaml` if its content is not a valid layout document.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<LayoutConfig> {
        let file = File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }

    /// Validates this document and builds the [RegionMap] and required
    /// symbols from it.
    ///
    /// # Errors
    ///
    /// * `ConfigError::NonSquareSize` if `square_size` is zero or has no
    /// integer square root.
    /// * `ConfigError::WrongRequiredNumbersLength`,
    /// `ConfigError::InvalidRequiredNumber` or
    /// `ConfigError::DuplicateRequiredNumber` if `required_numbers` is not a
    /// list of `square_size` distinct symbols in `[1, square_size]`.
    /// * Any partition error raised by [RegionMap::new] for the shapes.
    pub fn build(self) -> ConfigResult<(RegionMap, Vec<Symbol>)> {
        let size = self.square_size;
        let root = (size as f64).sqrt() as usize;

        if size == 0 || root * root != size {
            return Err(ConfigError::NonSquareSize(size));
        }

        if self.required_numbers.len() != size {
            return Err(ConfigError::WrongRequiredNumbersLength {
                expected: size,
                actual: self.required_numbers.len()
            });
        }

        let mut seen = SymbolSet::new(Symbol::MAX);

        for &number in &self.required_numbers {
            if number == 0 || number as usize > size {
                return Err(ConfigError::InvalidRequiredNumber(number));
            }

            if !seen.insert(number).unwrap() {
                return Err(ConfigError::DuplicateRequiredNumber(number));
            }
        }

        let regions = RegionMap::new(size, self.shapes)?;
        Ok((regions, self.required_numbers))
    }
}

impl PuzzleConfig {

    /// Reads a puzzle document from the YAML file at the given path.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Io` if the file cannot be read.
    /// * `ConfigError::Yaml` if its content is not a valid puzzle document.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<PuzzleConfig> {
        let file = File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }

    /// Validates this document against the given side length and builds the
    /// initial [Grid] from it. Non-zero entries become given clues.
    ///
    /// # Errors
    ///
    /// * `ConfigError::WrongGridHeight` or `ConfigError::WrongGridWidth` if
    /// the matrix is not `size` x `size`.
    /// * `ConfigError::CellValueOutOfRange` if an entry exceeds `size`.
    pub fn into_grid(self, size: usize) -> ConfigResult<Grid> {
        if self.grid.len() != size {
            return Err(ConfigError::WrongGridHeight {
                expected: size,
                actual: self.grid.len()
            });
        }

        for (row_index, row) in self.grid.iter().enumerate() {
            if row.len() != size {
                return Err(ConfigError::WrongGridWidth {
                    row: row_index,
                    expected: size,
                    actual: row.len()
                });
            }

            for (column_index, &value) in row.iter().enumerate() {
                if value as usize > size {
                    return Err(ConfigError::CellValueOutOfRange {
                        row: row_index,
                        column: column_index,
                        value
                    });
                }
            }
        }

        // The matrix is square and in range at this point.
        Ok(Grid::from_rows(&self.grid).unwrap())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const LAYOUT_4X4: &str = "\
square_size: 4
shapes:
  - [0, 1, 4, 5]
  - [2, 3, 6, 7]
  - [8, 9, 12, 13]
  - [10, 11, 14, 15]
required_numbers: [1, 2, 3, 4]
";

    fn layout(yaml: &str) -> LayoutConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn valid_layout_builds() {
        let (regions, required) = layout(LAYOUT_4X4).build().unwrap();

        assert_eq!(4, regions.size());
        assert_eq!(RegionMap::boxes(4).unwrap(), regions);
        assert_eq!(vec![1, 2, 3, 4], required);
    }

    #[test]
    fn non_square_size_rejected() {
        let mut config = layout(LAYOUT_4X4);
        config.square_size = 5;

        assert!(matches!(config.build(),
            Err(ConfigError::NonSquareSize(5))));
    }

    #[test]
    fn required_numbers_length_checked() {
        let mut config = layout(LAYOUT_4X4);
        config.required_numbers = vec![1, 2, 3];

        assert!(matches!(config.build(),
            Err(ConfigError::WrongRequiredNumbersLength {
                expected: 4,
                actual: 3
            })));
    }

    #[test]
    fn required_numbers_range_checked() {
        let mut config = layout(LAYOUT_4X4);
        config.required_numbers = vec![1, 2, 3, 5];

        assert!(matches!(config.build(),
            Err(ConfigError::InvalidRequiredNumber(5))));

        let mut config = layout(LAYOUT_4X4);
        config.required_numbers = vec![0, 2, 3, 4];

        assert!(matches!(config.build(),
            Err(ConfigError::InvalidRequiredNumber(0))));
    }

    #[test]
    fn duplicate_required_numbers_rejected() {
        let mut config = layout(LAYOUT_4X4);
        config.required_numbers = vec![1, 2, 2, 4];

        assert!(matches!(config.build(),
            Err(ConfigError::DuplicateRequiredNumber(2))));
    }

    #[test]
    fn malformed_shapes_rejected() {
        let mut config = layout(LAYOUT_4X4);
        config.shapes[3] = vec![10, 11, 14, 14];

        assert!(matches!(config.build(),
            Err(ConfigError::DuplicatePosition { position: 14 })));
    }

    #[test]
    fn valid_puzzle_builds() {
        let config: PuzzleConfig = serde_yaml::from_str("\
grid:
  - [1, 0, 0, 2]
  - [0, 3, 0, 0]
  - [0, 0, 0, 3]
  - [0, 1, 0, 0]
").unwrap();
        let grid = config.into_grid(4).unwrap();

        assert_eq!(1, grid.get(0, 0).unwrap());
        assert!(grid.cell(0, 0).unwrap().is_given());
        assert!(!grid.cell(0, 1).unwrap().is_given());
        assert_eq!(3, grid.get(1, 1).unwrap());
        assert_eq!(12, grid.count_empty());
    }

    #[test]
    fn puzzle_dimensions_checked() {
        let config = PuzzleConfig {
            grid: vec![vec![0; 4]; 3]
        };

        assert!(matches!(config.into_grid(4),
            Err(ConfigError::WrongGridHeight { expected: 4, actual: 3 })));

        let config = PuzzleConfig {
            grid: vec![
                vec![0; 4],
                vec![0; 5],
                vec![0; 4],
                vec![0; 4]
            ]
        };

        assert!(matches!(config.into_grid(4),
            Err(ConfigError::WrongGridWidth {
                row: 1,
                expected: 4,
                actual: 5
            })));
    }

    #[test]
    fn puzzle_values_checked() {
        let config = PuzzleConfig {
            grid: vec![
                vec![0, 0, 0, 0],
                vec![0, 5, 0, 0],
                vec![0; 4],
                vec![0; 4]
            ]
        };

        assert!(matches!(config.into_grid(4),
            Err(ConfigError::CellValueOutOfRange {
                row: 1,
                column: 1,
                value: 5
            })));
    }

    #[test]
    fn missing_file_reported_as_io_error() {
        let result = LayoutConfig::load("definitely/not/a/real/path.yaml");

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
