//! This module defines the region map, which describes how a grid is
//! partitioned into shapes.
//!
//! A region is an ordered list of flat cell positions; a [RegionMap] is the
//! complete, validated partition of a grid into such regions. Classic Sudoku
//! boxes are just one possible layout, see [RegionMap::boxes]; irregular
//! ("jigsaw") layouts are expressed the same way. The map is immutable after
//! construction, so the solver can rely on it never changing mid-solve.

use crate::error::{ConfigError, ConfigResult};
use crate::index;

/// An ordered list of flat cell positions forming one shape of the grid.
pub type Region = Vec<usize>;

/// A validated partition of a square grid into regions of equal size.
///
/// Construction enforces the partition invariant: there are exactly `size`
/// regions, each contains exactly `size` in-bounds positions, and every cell
/// position of the grid belongs to exactly one region. A malformed partition
/// is rejected with a [ConfigError] before any solving can start.
///
/// Lookup of the region containing a given cell goes through a reverse index
/// built at construction time. This keeps the map correct for arbitrary
/// layouts instead of assuming the classic box arrangement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegionMap {
    size: usize,
    regions: Vec<Region>,
    region_of: Vec<usize>
}

impl RegionMap {

    /// Creates a region map for a grid with side length `size` from the
    /// given shapes, validating the partition invariant.
    ///
    /// # Arguments
    ///
    /// * `size`: The side length of the grid being partitioned. Each region
    /// must contain exactly this many positions.
    /// * `shapes`: One [Region] per shape, listing the flat cell positions
    /// (row-major, i.e. `row * size + column`) belonging to it.
    ///
    /// # Errors
    ///
    /// * `ConfigError::WrongRegionCount` if there are not exactly `size`
    /// shapes.
    /// * `ConfigError::WrongRegionSize` if a shape does not contain exactly
    /// `size` positions.
    /// * `ConfigError::PositionOutOfBounds` if a shape refers to a position
    /// outside the grid.
    /// * `ConfigError::DuplicatePosition` if a position appears in more than
    /// one shape (or twice in the same shape).
    ///
    /// If all of these checks pass, each of the `size²` distinct positions
    /// has been seen exactly once, so the shapes necessarily cover the whole
    /// grid.
    pub fn new(size: usize, shapes: Vec<Region>) -> ConfigResult<RegionMap> {
        if shapes.len() != size {
            return Err(ConfigError::WrongRegionCount {
                expected: size,
                actual: shapes.len()
            });
        }

        let cell_count = size * size;
        let mut region_of = vec![usize::MAX; cell_count];

        for (region_index, shape) in shapes.iter().enumerate() {
            if shape.len() != size {
                return Err(ConfigError::WrongRegionSize {
                    region: region_index,
                    expected: size,
                    actual: shape.len()
                });
            }

            for &position in shape {
                if position >= cell_count {
                    return Err(ConfigError::PositionOutOfBounds {
                        region: region_index,
                        position
                    });
                }

                if region_of[position] != usize::MAX {
                    return Err(ConfigError::DuplicatePosition { position });
                }

                region_of[position] = region_index;
            }
        }

        Ok(RegionMap {
            size,
            regions: shapes,
            region_of
        })
    }

    /// Creates the classic layout for a grid with side length `size`: a
    /// `√size`x`√size` super-grid of `√size`x`√size` boxes, listed
    /// left-to-right, top-to-bottom.
    ///
    /// # Errors
    ///
    /// If `size` is zero or has no integer square root. In that case,
    /// `ConfigError::NonSquareSize` is returned.
    pub fn boxes(size: usize) -> ConfigResult<RegionMap> {
        let root = (size as f64).sqrt() as usize;

        if size == 0 || root * root != size {
            return Err(ConfigError::NonSquareSize(size));
        }

        let mut shapes = Vec::with_capacity(size);

        for box_row in 0..root {
            for box_column in 0..root {
                let mut shape = Vec::with_capacity(size);

                for row in 0..root {
                    for column in 0..root {
                        shape.push(index(box_row * root + row,
                            box_column * root + column, size));
                    }
                }

                shapes.push(shape);
            }
        }

        RegionMap::new(size, shapes)
    }

    /// Gets the side length of the grid this map partitions, which is also
    /// the number of regions and the number of positions per region.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets a reference to the slice of all regions, in configuration order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Gets the index of the region containing the cell at the given
    /// coordinates. Coordinates must be within the grid; the partition
    /// invariant guarantees that every in-bounds cell has a region.
    ///
    /// # Panics
    ///
    /// If `row` or `column` are outside the grid. Callers are expected to
    /// iterate within bounds.
    pub fn region_index_of(&self, row: usize, column: usize) -> usize {
        self.region_of[index(row, column, self.size)]
    }

    /// Gets the positions of the region containing the cell at the given
    /// coordinates, in the region's stored order. This is a direct lookup in
    /// the map and therefore valid for irregular layouts as well as boxes.
    ///
    /// # Panics
    ///
    /// If `row` or `column` are outside the grid. Callers are expected to
    /// iterate within bounds.
    pub fn region_positions_of(&self, row: usize, column: usize) -> &[usize] {
        &self.regions[self.region_index_of(row, column)]
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn boxes_partition_is_valid() {
        let map = RegionMap::boxes(4).unwrap();

        assert_eq!(4, map.size());
        assert_eq!(4, map.regions().len());
        assert_eq!(&[0, 1, 4, 5], map.regions()[0].as_slice());
        assert_eq!(&[2, 3, 6, 7], map.regions()[1].as_slice());
        assert_eq!(&[8, 9, 12, 13], map.regions()[2].as_slice());
        assert_eq!(&[10, 11, 14, 15], map.regions()[3].as_slice());
    }

    #[test]
    fn boxes_rejects_non_square_size() {
        assert!(matches!(RegionMap::boxes(5),
            Err(ConfigError::NonSquareSize(5))));
        assert!(matches!(RegionMap::boxes(0),
            Err(ConfigError::NonSquareSize(0))));
    }

    #[test]
    fn region_lookup_by_coordinates() {
        let map = RegionMap::boxes(4).unwrap();

        assert_eq!(0, map.region_index_of(0, 0));
        assert_eq!(0, map.region_index_of(1, 1));
        assert_eq!(1, map.region_index_of(0, 2));
        assert_eq!(2, map.region_index_of(3, 1));
        assert_eq!(3, map.region_index_of(2, 2));
        assert_eq!(&[10, 11, 14, 15], map.region_positions_of(3, 3));
    }

    #[test]
    fn irregular_layout_is_accepted() {
        // A 2x2 grid split into two "bent" halves instead of rows or columns.
        let map = RegionMap::new(2, vec![
            vec![0, 3],
            vec![1, 2]
        ]).unwrap();

        assert_eq!(0, map.region_index_of(0, 0));
        assert_eq!(1, map.region_index_of(0, 1));
        assert_eq!(1, map.region_index_of(1, 0));
        assert_eq!(0, map.region_index_of(1, 1));
    }

    #[test]
    fn wrong_region_count_rejected() {
        assert!(matches!(RegionMap::new(2, vec![vec![0, 1]]),
            Err(ConfigError::WrongRegionCount { expected: 2, actual: 1 })));
    }

    #[test]
    fn wrong_region_size_rejected() {
        let result = RegionMap::new(2, vec![
            vec![0, 1, 2],
            vec![3]
        ]);

        assert!(matches!(result,
            Err(ConfigError::WrongRegionSize { region: 0, expected: 2, actual: 3 })));
    }

    #[test]
    fn out_of_bounds_position_rejected() {
        let result = RegionMap::new(2, vec![
            vec![0, 1],
            vec![2, 4]
        ]);

        assert!(matches!(result,
            Err(ConfigError::PositionOutOfBounds { region: 1, position: 4 })));
    }

    #[test]
    fn duplicate_position_rejected() {
        let result = RegionMap::new(2, vec![
            vec![0, 1],
            vec![1, 2]
        ]);

        assert!(matches!(result,
            Err(ConfigError::DuplicatePosition { position: 1 })));
    }
}
