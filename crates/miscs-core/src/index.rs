//! Coordinate codec for square grids.
//!
//! A [`Grid`] of dimension `size` has `size * size` cells. Each cell is addressed
//! either by a [`Coordinate`] `(row, column)` or by a flat index in row-major
//! order (`row * size + column`). The two representations are in one-to-one
//! correspondence; [`Grid::encode`] and [`Grid::decode`] convert between them.
//!
//! [`encode`] and [`decode`] are raw-integer entry points that take signed
//! inputs, so that callers working with offsets (which may step below zero)
//! get an out-of-bounds error instead of a wrapped value.
//!
//! # Examples
//!
//! ```
//! use miscs_core::index::{self, Coordinate, Grid};
//!
//! let grid = Grid::new(9)?;
//! let idx = grid.encode(Coordinate::new(4, 4))?;
//! assert_eq!(idx, 40); // row 4, column 4 -> 4*9 + 4
//! assert_eq!(grid.decode(idx)?, Coordinate::new(4, 4));
//!
//! // Negative coordinates are rejected.
//! assert!(index::encode((0, -1), 9).unwrap_err().is_out_of_bounds());
//! # Ok::<(), index::CodecError>(())
//! ```

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

/// Errors produced by the coordinate codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CodecError {
    /// The coordinate does not lie inside the grid.
    #[display("coordinate ({row}, {column}) is out of bounds for grid size {size}")]
    CoordinateOutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        column: isize,
        /// Grid dimension.
        size: usize,
    },
    /// The flat index is not smaller than `size * size`.
    #[display("index {index} is out of bounds for grid size {size}")]
    IndexOutOfBounds {
        /// Requested index.
        index: isize,
        /// Grid dimension.
        size: usize,
    },
    /// `size * size` does not fit in `usize`.
    #[display("grid size {size} is too large")]
    GridTooLarge {
        /// Grid dimension.
        size: usize,
    },
}

impl CodecError {
    /// Returns `true` for the out-of-bounds conditions (coordinate or index).
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Self::CoordinateOutOfBounds { .. } | Self::IndexOutOfBounds { .. }
        )
    }
}

/// A `(row, column)` cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    /// Row (0-based).
    pub row: usize,
    /// Column (0-based).
    pub column: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.row, coordinate.column)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A square grid of dimension `size`.
///
/// Construction guarantees that `size * size` fits in `usize`, so index
/// arithmetic inside [`encode`](Self::encode) and [`decode`](Self::decode)
/// never overflows. A grid of size 0 is valid and contains no cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
}

impl Grid {
    /// Creates a grid of dimension `size`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::GridTooLarge`] if `size * size` overflows `usize`.
    pub const fn new(size: usize) -> Result<Self, CodecError> {
        if size.checked_mul(size).is_none() {
            return Err(CodecError::GridTooLarge { size });
        }
        Ok(Self { size })
    }

    /// Returns the grid dimension.
    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }

    /// Returns the number of cells (`size * size`).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.size * self.size
    }

    /// Returns `true` if `coordinate` lies inside the grid.
    #[must_use]
    pub const fn contains(self, coordinate: Coordinate) -> bool {
        coordinate.row < self.size && coordinate.column < self.size
    }

    /// Converts a coordinate to its row-major index.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::CoordinateOutOfBounds`] if either component is
    /// not smaller than the grid size.
    ///
    /// # Examples
    ///
    /// ```
    /// use miscs_core::{Coordinate, Grid};
    ///
    /// let grid = Grid::new(9)?;
    /// assert_eq!(grid.encode(Coordinate::new(0, 0))?, 0);
    /// assert_eq!(grid.encode(Coordinate::new(8, 8))?, 80);
    /// assert!(grid.encode(Coordinate::new(9, 0)).is_err());
    /// # Ok::<(), miscs_core::CodecError>(())
    /// ```
    pub fn encode(self, coordinate: Coordinate) -> Result<usize, CodecError> {
        if !self.contains(coordinate) {
            return Err(CodecError::CoordinateOutOfBounds {
                row: saturating_isize(coordinate.row),
                column: saturating_isize(coordinate.column),
                size: self.size,
            });
        }
        Ok(coordinate.row * self.size + coordinate.column)
    }

    /// Converts a row-major index back to its coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::IndexOutOfBounds`] if `index >= size * size`.
    pub fn decode(self, index: usize) -> Result<Coordinate, CodecError> {
        if index >= self.cell_count() {
            return Err(CodecError::IndexOutOfBounds {
                index: saturating_isize(index),
                size: self.size,
            });
        }
        Ok(Coordinate::new(index / self.size, index % self.size))
    }

    /// Returns an iterator over all coordinates in row-major order.
    ///
    /// The `n`-th item is `decode(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use miscs_core::{Coordinate, Grid};
    ///
    /// let grid = Grid::new(2)?;
    /// let all: Vec<_> = grid.coordinates().collect();
    /// assert_eq!(
    ///     all,
    ///     [(0, 0), (0, 1), (1, 0), (1, 1)].map(Coordinate::from)
    /// );
    /// # Ok::<(), miscs_core::CodecError>(())
    /// ```
    #[must_use]
    pub fn coordinates(self) -> Coordinates {
        Coordinates {
            grid: self,
            front: 0,
            back: self.cell_count(),
        }
    }
}

/// Converts `(row, column)` to a flat index in a grid of dimension `size`.
///
/// Negative components are out of bounds.
///
/// # Errors
///
/// Returns [`CodecError::CoordinateOutOfBounds`] unless `0 <= row < size` and
/// `0 <= column < size`, or [`CodecError::GridTooLarge`] if `size * size`
/// overflows.
///
/// # Examples
///
/// ```
/// use miscs_core::{decode, encode};
///
/// assert_eq!(encode((3, 3), 9)?, 30);
/// assert_eq!(decode(30, 9)?, (3, 3));
/// assert!(encode((9, 0), 9).is_err());
/// # Ok::<(), miscs_core::CodecError>(())
/// ```
pub fn encode((row, column): (isize, isize), size: usize) -> Result<usize, CodecError> {
    let grid = Grid::new(size)?;
    let out_of_bounds = CodecError::CoordinateOutOfBounds { row, column, size };
    let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(column)) else {
        return Err(out_of_bounds);
    };
    grid.encode(Coordinate::new(r, c)).map_err(|_| out_of_bounds)
}

/// Converts a flat index to `(row, column)` in a grid of dimension `size`.
///
/// # Errors
///
/// Returns [`CodecError::IndexOutOfBounds`] unless `0 <= index < size * size`,
/// or [`CodecError::GridTooLarge`] if `size * size` overflows.
pub fn decode(index: isize, size: usize) -> Result<(usize, usize), CodecError> {
    let grid = Grid::new(size)?;
    let out_of_bounds = CodecError::IndexOutOfBounds { index, size };
    let i = usize::try_from(index).map_err(|_| out_of_bounds)?;
    grid.decode(i).map(Into::into).map_err(|_| out_of_bounds)
}

fn saturating_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

/// Iterator over all coordinates of a [`Grid`] in row-major order.
///
/// Created by [`Grid::coordinates`].
#[derive(Debug, Clone)]
pub struct Coordinates {
    grid: Grid,
    front: usize,
    back: usize,
}

impl Coordinates {
    #[inline]
    fn item_at(&self, index: usize) -> Coordinate {
        debug_assert!(index < self.grid.cell_count());
        let size = self.grid.size;
        Coordinate::new(index / size, index % size)
    }
}

impl Iterator for Coordinates {
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.item_at(self.front);
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Coordinates {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.item_at(self.back))
    }
}

impl FusedIterator for Coordinates {}
impl ExactSizeIterator for Coordinates {}
