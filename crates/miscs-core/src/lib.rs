//! Pure building blocks for everyday scripting tasks.
//!
//! Nothing in this crate performs I/O or logs; every function is a
//! deterministic transform over its arguments.
//!
//! # Overview
//!
//! 1. **Index arithmetic**
//!    - [`index`]: bijection between `(row, column)` coordinates of an N×N grid
//!      and flat row-major indices ([`Grid`], [`encode`], [`decode`]).
//!    - [`partition`]: splitting slices by chunk size ([`chunks`]) or into a
//!      fixed number of balanced parts ([`partition()`], [`partition_bounds`]).
//!
//! 2. **Small helpers**
//!    - [`ordinal`]: English ordinal numbers (`1st`, `2nd`, `11th`, ...).
//!    - [`suppress`]: replace values below a threshold.
//!    - [`timer`]: cumulative elapsed-time accumulator with a pluggable clock.
//!
//! # Examples
//!
//! ```
//! use miscs_core::{Coordinate, Grid, partition};
//!
//! let grid = Grid::new(9)?;
//! let index = grid.encode(Coordinate::new(3, 3))?;
//! assert_eq!(index, 30);
//! assert_eq!(grid.decode(index)?, Coordinate::new(3, 3));
//!
//! let parts = partition(&[0, 1, 2, 3, 4], 3)?;
//! assert_eq!(parts, [&[0, 1][..], &[2, 3], &[4]]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod index;
pub mod ordinal;
pub mod partition;
pub mod suppress;
pub mod timer;

// Re-export commonly used types
pub use self::{
    index::{CodecError, Coordinate, Grid, decode, encode},
    ordinal::{Ordinal, ordinal_number},
    partition::{PartitionBounds, PartitionError, chunks, partition, partition_bounds},
    suppress::{SuppressError, suppress, suppress_below},
    timer::{Clock, MonotonicClock, Timer},
};
