//! This module contains some error and result definitions used in this crate.

use crate::Symbol;

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not include errors raised while
/// loading and validating configuration, see [ConfigError] for that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the side length specified for a created grid is invalid.
    /// This is the case if it is zero or if the rows of an input matrix do not
    /// form a square.
    InvalidDimensions,

    /// Indicates that some symbol is invalid for the size of the grid in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidNumber,

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the size.
    OutOfBounds,

    /// An error that is raised whenever it is attempted to write a symbol
    /// into a cell which already holds one. The solver only ever commits into
    /// empty cells, so hitting this indicates a bug in the caller.
    CellOccupied
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a grid code with
/// [Grid::parse](crate::Grid::parse).
#[derive(Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: size and
    /// cells (separated by ';'), so if the code does not contain exactly one
    /// semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the square of the size.
    WrongNumberOfCells,

    /// Indicates that the provided size is invalid (i.e. zero).
    InvalidSize,

    /// Indicates that one of the numbers (size or cell content) could not be
    /// parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid symbol (0 or more than
    /// the grid size).
    InvalidNumber
}

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

/// An enumeration of the errors that can be raised while loading and
/// validating the YAML configuration. All of these are fatal: the process
/// cannot solve anything with a malformed layout or puzzle and must stop with
/// a diagnostic.
#[derive(Debug)]
pub enum ConfigError {

    /// A configuration file could not be read.
    Io(io::Error),

    /// A configuration file could not be deserialized as YAML.
    Yaml(serde_yaml::Error),

    /// The configured side length is zero or has no integer square root.
    /// Grids whose side length cannot be partitioned into square boxes are
    /// not supported.
    NonSquareSize(usize),

    /// The number of configured shapes does not match the side length.
    WrongRegionCount {

        /// The expected number of regions, which equals the side length.
        expected: usize,

        /// The number of shapes actually present in the configuration.
        actual: usize
    },

    /// A configured shape does not contain exactly `size` cell positions.
    WrongRegionSize {

        /// The index of the offending shape in the configuration.
        region: usize,

        /// The expected number of positions, which equals the side length.
        expected: usize,

        /// The number of positions actually present in the shape.
        actual: usize
    },

    /// A configured shape refers to a flat cell position outside the grid.
    PositionOutOfBounds {

        /// The index of the offending shape in the configuration.
        region: usize,

        /// The out-of-bounds flat cell position.
        position: usize
    },

    /// A flat cell position appears in more than one shape, violating the
    /// requirement that the shapes partition the grid.
    DuplicatePosition {

        /// The flat cell position which appears more than once.
        position: usize
    },

    /// The list of required numbers does not have exactly `size` entries.
    WrongRequiredNumbersLength {

        /// The expected number of entries, which equals the side length.
        expected: usize,

        /// The number of entries actually present in the configuration.
        actual: usize
    },

    /// A required number is zero or greater than the side length.
    InvalidRequiredNumber(Symbol),

    /// A required number appears more than once.
    DuplicateRequiredNumber(Symbol),

    /// The puzzle grid does not have exactly `size` rows.
    WrongGridHeight {

        /// The expected number of rows, which equals the side length.
        expected: usize,

        /// The number of rows actually present in the puzzle data.
        actual: usize
    },

    /// A row of the puzzle grid does not have exactly `size` entries.
    WrongGridWidth {

        /// The index of the offending row.
        row: usize,

        /// The expected number of entries, which equals the side length.
        expected: usize,

        /// The number of entries actually present in the row.
        actual: usize
    },

    /// A cell of the puzzle grid holds a value greater than the side length.
    CellValueOutOfRange {

        /// The row of the offending cell.
        row: usize,

        /// The column of the offending cell.
        column: usize,

        /// The out-of-range value.
        value: Symbol
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) =>
                write!(f, "could not read configuration: {}", e),
            ConfigError::Yaml(e) =>
                write!(f, "could not parse configuration: {}", e),
            ConfigError::NonSquareSize(size) =>
                write!(f, "square_size {} has no integer square root", size),
            ConfigError::WrongRegionCount { expected, actual } =>
                write!(f, "expected {} shapes, found {}", expected, actual),
            ConfigError::WrongRegionSize { region, expected, actual } =>
                write!(f, "shape {} has {} positions, expected {}", region,
                    actual, expected),
            ConfigError::PositionOutOfBounds { region, position } =>
                write!(f, "shape {} contains out-of-bounds position {}",
                    region, position),
            ConfigError::DuplicatePosition { position } =>
                write!(f, "position {} belongs to more than one shape",
                    position),
            ConfigError::WrongRequiredNumbersLength { expected, actual } =>
                write!(f, "expected {} required numbers, found {}", expected,
                    actual),
            ConfigError::InvalidRequiredNumber(number) =>
                write!(f, "required number {} is out of range", number),
            ConfigError::DuplicateRequiredNumber(number) =>
                write!(f, "required number {} is listed more than once",
                    number),
            ConfigError::WrongGridHeight { expected, actual } =>
                write!(f, "puzzle grid has {} rows, expected {}", actual,
                    expected),
            ConfigError::WrongGridWidth { row, expected, actual } =>
                write!(f, "puzzle row {} has {} entries, expected {}", row,
                    actual, expected),
            ConfigError::CellValueOutOfRange { row, column, value } =>
                write!(f, "cell ({}, {}) holds {}, which exceeds the grid \
                    size", row, column, value)
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Yaml(e) => Some(e),
            _ => None
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Yaml(e)
    }
}

/// Syntactic sugar for `Result<V, ConfigError>`.
pub type ConfigResult<V> = Result<V, ConfigError>;
