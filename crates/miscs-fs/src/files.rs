//! Opening several files at once.

use std::{io, path::Path};

/// Opens every path in `paths` with `opener`, in order.
///
/// Either all handles are returned or none: on the first error, handles that
/// were already opened are dropped (and thereby closed) and the error is
/// returned. Handles are closed when the returned vector is dropped.
///
/// A single path can be passed as a one-element array.
///
/// # Errors
///
/// Returns the first error produced by `opener`.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
///
/// use miscs_fs::open_all;
///
/// let inputs = open_all(["a.txt", "b.txt"], File::open)?;
/// assert_eq!(inputs.len(), 2);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn open_all<I, F, T>(paths: I, opener: F) -> io::Result<Vec<T>>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
    F: FnMut(I::Item) -> io::Result<T>,
{
    paths.into_iter().map(opener).collect()
}
