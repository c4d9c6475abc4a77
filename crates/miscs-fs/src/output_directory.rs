//! Output directory bound to a scope.
//!
//! [`OutputDirectory::open`] reuses the directory if it already exists and
//! creates it (with all parents) otherwise. The returned guard must be
//! [finished](OutputDirectory::finish) for the scope to count as successful.
//! Dropping the guard unfinished (an early return through `?`, or a panic)
//! counts as a failure: a directory that was created by this guard is then
//! removed again when [`OutputDirectoryOptions::delete_on_failure`] is set.
//! A reused directory is never removed.
//!
//! [`OutputDirectory::scope`] wraps this in a closure so that finishing is
//! automatic on `Ok`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Options for [`OutputDirectory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputDirectoryOptions {
    /// Remove a newly created directory when the scope fails.
    pub delete_on_failure: bool,
}

/// An output directory guard.
#[derive(Debug)]
pub struct OutputDirectory {
    path: PathBuf,
    is_reusing: bool,
    delete_on_failure: bool,
    finished: bool,
}

impl OutputDirectory {
    /// Opens the output directory at `path`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` exists but is not a directory, or if it
    /// cannot be inspected or created.
    pub fn open<P>(path: P, options: OutputDirectoryOptions) -> io::Result<Self>
    where
        P: Into<PathBuf>,
    {
        let path = path.into();
        let is_reusing = match fs::metadata(&path) {
            Ok(metadata) if metadata.is_dir() => true,
            Ok(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("'{}' exists and is not a directory", path.display()),
                ));
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => false,
            Err(err) => return Err(err),
        };

        if is_reusing {
            log::info!("Reuse existing directory '{}'", path.display());
        } else {
            fs::create_dir_all(&path)?;
            log::info!("Create new directory '{}'", path.display());
        }

        Ok(Self {
            path,
            is_reusing,
            delete_on_failure: options.delete_on_failure,
            finished: false,
        })
    }

    /// Runs `f` with the output directory at `path`.
    ///
    /// The scope succeeds if `f` returns `Ok`. On `Err` (or a panic inside
    /// `f`) the directory is handled as described in the
    /// [module documentation](self), and the error is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the error of [`open`](Self::open) converted into `E`, or the
    /// error returned by `f`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use miscs_fs::{OutputDirectory, OutputDirectoryOptions};
    ///
    /// let report = OutputDirectory::scope("results", OutputDirectoryOptions::default(), |out| {
    ///     std::fs::write(out.join("report.txt"), "done")?;
    ///     Ok::<_, std::io::Error>(out.join("report.txt"))
    /// })?;
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn scope<P, F, T, E>(path: P, options: OutputDirectoryOptions, f: F) -> Result<T, E>
    where
        P: Into<PathBuf>,
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<io::Error>,
    {
        let dir = Self::open(path, options)?;
        let value = f(&dir)?;
        dir.finish();
        Ok(value)
    }

    /// Returns the directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the directory existed before it was opened.
    #[must_use]
    pub fn is_reusing(&self) -> bool {
        self.is_reusing
    }

    /// Returns `relative` resolved inside the directory.
    #[must_use]
    pub fn join<P>(&self, relative: P) -> PathBuf
    where
        P: AsRef<Path>,
    {
        self.path.join(relative)
    }

    /// Marks the scope as successful and releases the guard.
    pub fn finish(mut self) {
        self.finished = true;
    }

    fn discard(&self) {
        if self.is_reusing || !self.delete_on_failure {
            return;
        }
        log::error!(
            "Caught failure. Delete output directory '{}'",
            self.path.display()
        );
        if let Err(err) = fs::remove_dir_all(&self.path) {
            log::warn!(
                "Failed to delete output directory '{}': {err}",
                self.path.display()
            );
        }
    }
}

impl Drop for OutputDirectory {
    fn drop(&mut self) {
        if !self.finished {
            self.discard();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use super::*;

    const DELETE: OutputDirectoryOptions = OutputDirectoryOptions {
        delete_on_failure: true,
    };
    const KEEP: OutputDirectoryOptions = OutputDirectoryOptions {
        delete_on_failure: false,
    };

    fn failing(out: &OutputDirectory) -> io::Result<()> {
        fs::write(out.join("partial"), b"x")?;
        Err(io::Error::other("boom"))
    }

    #[test]
    fn test_creates_missing_directory() {
        let root = tempfile::tempdir().expect("Create temp dir");
        let path = root.path().join("a/b/out");
        let out = OutputDirectory::open(&path, KEEP).unwrap();
        assert!(!out.is_reusing());
        assert!(path.is_dir());
        assert_eq!(out.path(), path);
        assert_eq!(out.join("x.txt"), path.join("x.txt"));
        out.finish();
        assert!(path.is_dir());
    }

    #[test]
    fn test_reuses_existing_directory() {
        let root = tempfile::tempdir().expect("Create temp dir");
        let out = OutputDirectory::open(root.path(), KEEP).unwrap();
        assert!(out.is_reusing());
    }

    #[test]
    fn test_rejects_regular_file() {
        let root = tempfile::tempdir().expect("Create temp dir");
        let path = root.path().join("file");
        fs::write(&path, b"").unwrap();
        let err = OutputDirectory::open(&path, KEEP).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotADirectory);
    }

    #[test]
    fn test_scope_success_keeps_directory() {
        let root = tempfile::tempdir().expect("Create temp dir");
        let path = root.path().join("out");
        let written = OutputDirectory::scope(&path, DELETE, |out| {
            fs::write(out.join("result"), b"ok")?;
            Ok::<_, io::Error>(out.join("result"))
        })
        .unwrap();
        assert_eq!(fs::read(written).unwrap(), b"ok");
    }

    #[test]
    fn test_scope_failure_deletes_new_directory() {
        let root = tempfile::tempdir().expect("Create temp dir");
        let path = root.path().join("out");
        let err = OutputDirectory::scope(&path, DELETE, failing).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert!(!path.exists());
    }

    #[test]
    fn test_scope_failure_keeps_directory_without_option() {
        let root = tempfile::tempdir().expect("Create temp dir");
        let path = root.path().join("out");
        OutputDirectory::scope(&path, KEEP, failing).unwrap_err();
        assert!(path.join("partial").exists());
    }

    #[test]
    fn test_scope_failure_never_deletes_reused_directory() {
        let root = tempfile::tempdir().expect("Create temp dir");
        OutputDirectory::scope(root.path(), DELETE, failing).unwrap_err();
        assert!(root.path().join("partial").exists());
    }

    #[test]
    fn test_panic_deletes_new_directory() {
        let root = tempfile::tempdir().expect("Create temp dir");
        let path = root.path().join("out");
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _out = OutputDirectory::open(&path, DELETE).unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_unfinished_guard_counts_as_failure() {
        let root = tempfile::tempdir().expect("Create temp dir");
        let path = root.path().join("out");
        drop(OutputDirectory::open(&path, DELETE).unwrap());
        assert!(!path.exists());
    }
}
