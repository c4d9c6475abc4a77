//! Splitting slices into consecutive chunks.
//!
//! Two strategies are provided:
//!
//! - [`chunks`] cuts a slice into pieces of a fixed length; the last piece holds
//!   whatever remains.
//! - [`partition`] cuts a slice into a fixed number of pieces whose lengths
//!   differ by at most one, with the longer pieces first.
//!
//! Both return sub-slices borrowed from the input, in order, covering every
//! element exactly once.
//!
//! # Examples
//!
//! ```
//! use miscs_core::partition::{chunks, partition};
//!
//! let seq = [0, 1, 2, 3, 4];
//! assert_eq!(chunks(&seq, 2)?, [&[0, 1][..], &[2, 3], &[4]]);
//! assert_eq!(partition(&seq, 3)?, [&[0, 1][..], &[2, 3], &[4]]);
//! # Ok::<(), miscs_core::PartitionError>(())
//! ```

use std::{iter::FusedIterator, ops::Range};

/// Errors produced by the partitioning functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PartitionError {
    /// A chunk size of zero was requested.
    #[display("chunk size must be at least 1")]
    ZeroChunkSize,
    /// A part count of zero was requested.
    #[display("number of parts must be at least 1")]
    ZeroParts,
}

/// Splits `seq` into consecutive chunks of `chunk_size` elements.
///
/// If `seq.len()` is not a multiple of `chunk_size`, the last chunk holds the
/// remaining `seq.len() % chunk_size` elements. An empty slice yields no chunks.
///
/// # Errors
///
/// Returns [`PartitionError::ZeroChunkSize`] if `chunk_size` is zero.
///
/// # Examples
///
/// ```
/// use miscs_core::chunks;
///
/// assert_eq!(chunks(&[0, 1, 2, 3], 2)?, [&[0, 1][..], &[2, 3]]);
/// assert!(chunks::<u8>(&[], 2)?.is_empty());
/// # Ok::<(), miscs_core::PartitionError>(())
/// ```
pub fn chunks<T>(seq: &[T], chunk_size: usize) -> Result<Vec<&[T]>, PartitionError> {
    if chunk_size == 0 {
        return Err(PartitionError::ZeroChunkSize);
    }
    Ok(seq.chunks(chunk_size).collect())
}

/// Splits `seq` into exactly `n` consecutive parts of balanced length.
///
/// With `base = len / n` and `remainder = len % n`, the first `remainder` parts
/// hold `base + 1` elements and the others hold `base`. When `n` exceeds the
/// length, the trailing parts are empty.
///
/// # Errors
///
/// Returns [`PartitionError::ZeroParts`] if `n` is zero.
///
/// # Examples
///
/// ```
/// use miscs_core::partition;
///
/// assert_eq!(partition(&[0, 1, 2, 3], 2)?, [&[0, 1][..], &[2, 3]]);
/// assert_eq!(partition(&[0, 1, 2, 3], 3)?, [&[0, 1][..], &[2], &[3]]);
/// assert_eq!(partition(&[0, 1], 3)?, [&[0][..], &[1], &[]]);
/// # Ok::<(), miscs_core::PartitionError>(())
/// ```
pub fn partition<T>(seq: &[T], n: usize) -> Result<Vec<&[T]>, PartitionError> {
    let bounds = partition_bounds(seq.len(), n)?;
    Ok(bounds.map(|range| &seq[range]).collect())
}

/// Returns the half-open ranges that [`partition`] slices with.
///
/// The ranges are consecutive, start at 0 and end at `len`.
///
/// # Errors
///
/// Returns [`PartitionError::ZeroParts`] if `n` is zero.
///
/// # Examples
///
/// ```
/// use miscs_core::partition_bounds;
///
/// let bounds: Vec<_> = partition_bounds(10, 3)?.collect();
/// assert_eq!(bounds, [0..4, 4..7, 7..10]);
/// # Ok::<(), miscs_core::PartitionError>(())
/// ```
pub fn partition_bounds(len: usize, n: usize) -> Result<PartitionBounds, PartitionError> {
    if n == 0 {
        return Err(PartitionError::ZeroParts);
    }
    Ok(PartitionBounds {
        base: len / n,
        remainder: len % n,
        cursor: 0,
        remaining: n,
    })
}

/// Iterator over the ranges of a by-count partition.
///
/// Created by [`partition_bounds`].
#[derive(Debug, Clone)]
pub struct PartitionBounds {
    base: usize,
    /// Number of `base + 1` sized parts still to be yielded.
    remainder: usize,
    cursor: usize,
    remaining: usize,
}

impl Iterator for PartitionBounds {
    type Item = Range<usize>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let mut len = self.base;
        if self.remainder > 0 {
            len += 1;
            self.remainder -= 1;
        }
        let start = self.cursor;
        self.cursor += len;
        self.remaining -= 1;
        Some(start..self.cursor)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for PartitionBounds {}
impl ExactSizeIterator for PartitionBounds {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    mod by_size {
        use super::*;

        #[test]
        fn test_divisible_length_gives_full_chunks() {
            let seq: Vec<_> = (0..10).collect();
            assert_eq!(
                chunks(&seq, 2),
                Ok(vec![&[0, 1][..], &[2, 3], &[4, 5], &[6, 7], &[8, 9]])
            );
            assert_eq!(chunks(&[0, 1, 2, 3], 2), Ok(vec![&[0, 1][..], &[2, 3]]));
        }

        #[test]
        fn test_indivisible_length_gives_short_last_chunk() {
            assert_eq!(
                chunks(&[0, 1, 2, 3, 4], 2),
                Ok(vec![&[0, 1][..], &[2, 3], &[4]])
            );
        }

        #[test]
        fn test_chunk_larger_than_input() {
            assert_eq!(chunks(&[0, 1, 2], 5), Ok(vec![&[0, 1, 2][..]]));
        }

        #[test]
        fn test_empty_input() {
            assert_eq!(chunks::<i32>(&[], 3), Ok(vec![]));
        }

        #[test]
        fn test_rejects_zero_chunk_size() {
            assert_eq!(chunks(&[0, 1], 0), Err(PartitionError::ZeroChunkSize));
        }
    }

    mod by_count {
        use super::*;

        #[test]
        fn test_divisible_length() {
            assert_eq!(partition(&[0, 1, 2, 3], 2), Ok(vec![&[0, 1][..], &[2, 3]]));
            let seq: Vec<_> = (0..10).collect();
            assert_eq!(
                partition(&seq, 2),
                Ok(vec![&[0, 1, 2, 3, 4][..], &[5, 6, 7, 8, 9]])
            );
        }

        #[test]
        fn test_remainder_goes_to_leading_parts() {
            assert_eq!(
                partition(&[0, 1, 2, 3], 3),
                Ok(vec![&[0, 1][..], &[2], &[3]])
            );
            assert_eq!(
                partition(&[0, 1, 2, 3, 4], 3),
                Ok(vec![&[0, 1][..], &[2, 3], &[4]])
            );
            let seq: Vec<_> = (0..10).collect();
            assert_eq!(
                partition(&seq, 3),
                Ok(vec![&[0, 1, 2, 3][..], &[4, 5, 6], &[7, 8, 9]])
            );
        }

        #[test]
        fn test_more_parts_than_elements() {
            assert_eq!(
                partition(&[0, 1], 4),
                Ok(vec![&[0][..], &[1], &[], &[]])
            );
            assert_eq!(partition::<i32>(&[], 2), Ok(vec![&[][..], &[]]));
        }

        #[test]
        fn test_single_part_is_whole_input() {
            assert_eq!(partition(&[0, 1, 2], 1), Ok(vec![&[0, 1, 2][..]]));
        }

        #[test]
        fn test_rejects_zero_parts() {
            assert_eq!(partition(&[0, 1], 0), Err(PartitionError::ZeroParts));
            assert!(partition_bounds(0, 0).is_err());
        }

        #[test]
        fn test_bounds_iterator() {
            let mut bounds = partition_bounds(5, 3).unwrap();
            assert_eq!(bounds.len(), 3);
            assert_eq!(bounds.next(), Some(0..2));
            assert_eq!(bounds.len(), 2);
            assert_eq!(bounds.next(), Some(2..4));
            assert_eq!(bounds.next(), Some(4..5));
            assert_eq!(bounds.next(), None);
            assert_eq!(bounds.next(), None);
        }
    }

    proptest! {
        #[test]
        fn prop_chunks_cover_input(seq in prop::collection::vec(any::<u8>(), 0..200), chunk_size in 1usize..20) {
            let parts = chunks(&seq, chunk_size).unwrap();
            prop_assert_eq!(parts.concat(), seq.clone());
            prop_assert_eq!(parts.len(), seq.len().div_ceil(chunk_size));
            if let Some((last, init)) = parts.split_last() {
                prop_assert!(init.iter().all(|part| part.len() == chunk_size));
                prop_assert!((1..=chunk_size).contains(&last.len()));
            }
        }

        #[test]
        fn prop_partition_is_balanced(seq in prop::collection::vec(any::<u8>(), 0..200), n in 1usize..40) {
            let parts = partition(&seq, n).unwrap();
            prop_assert_eq!(parts.len(), n);
            prop_assert_eq!(parts.concat(), seq.clone());
            let lens: Vec<_> = parts.iter().map(|part| part.len()).collect();
            prop_assert!(lens.windows(2).all(|w| w[0] >= w[1]));
            prop_assert!(lens[0] - lens[n - 1] <= 1);
        }
    }
}
