//! Recursive file listing.
//!
//! [`file_tree`] walks a directory tree and yields the paths of all files whose
//! name satisfies a predicate. Every file of a directory is yielded before any
//! of its subdirectories is entered. Symbolic links to directories are listed
//! neither as files nor followed; symbolic links to anything else count as
//! files.
//!
//! Errors while reading a directory are yielded as `Err` items and the walk
//! continues with the next directory.

use std::{
    collections::VecDeque,
    ffi::OsStr,
    fs::{self, DirEntry, ReadDir},
    io,
    iter::FusedIterator,
    path::{Path, PathBuf},
};

/// Returns `true` if the final extension of `path` equals `ext`.
///
/// `ext` may be given with or without the leading dot. A path without an
/// extension has the empty extension.
///
/// # Examples
///
/// ```
/// use miscs_fs::has_ext;
///
/// assert!(has_ext("notes.txt", "txt"));
/// assert!(has_ext("notes.txt", ".txt"));
/// assert!(has_ext("archive.tar.gz", "gz"));
/// assert!(!has_ext("archive.tar.gz", "tar.gz"));
/// assert!(has_ext("Makefile", ""));
/// ```
#[must_use]
pub fn has_ext<P>(path: P, ext: &str) -> bool
where
    P: AsRef<Path>,
{
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    path.as_ref().extension().unwrap_or_default() == OsStr::new(ext)
}

/// Returns an iterator over every file below `root` whose name satisfies `pred`.
///
/// `pred` receives the file name only (not the full path).
///
/// # Examples
///
/// ```no_run
/// use miscs_fs::file_tree;
///
/// for path in file_tree("src", |name| !name.to_string_lossy().starts_with('.')) {
///     println!("{}", path?.display());
/// }
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn file_tree<P, F>(root: P, pred: F) -> FileTree<F>
where
    P: Into<PathBuf>,
    F: FnMut(&Path) -> bool,
{
    FileTree {
        pending: VecDeque::from([root.into()]),
        current: None,
        pred,
    }
}

/// Returns an iterator over every file below `root` whose extension is one of
/// `exts`.
///
/// See [`has_ext`] for how extensions are matched.
pub fn file_tree_ext<P, I>(root: P, exts: I) -> FileTree<impl FnMut(&Path) -> bool>
where
    P: Into<PathBuf>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let exts = exts
        .into_iter()
        .map(|ext| ext.as_ref().to_owned())
        .collect::<Vec<_>>();
    file_tree(root, move |name| exts.iter().any(|ext| has_ext(name, ext)))
}

/// Iterator over the files of a directory tree.
///
/// Created by [`file_tree`] and [`file_tree_ext`].
#[derive(Debug)]
pub struct FileTree<F> {
    /// Directories discovered but not yet opened.
    pending: VecDeque<PathBuf>,
    current: Option<ReadDir>,
    pred: F,
}

enum Visit {
    File(PathBuf),
    Skip,
}

impl<F> FileTree<F>
where
    F: FnMut(&Path) -> bool,
{
    fn visit(&mut self, entry: &DirEntry) -> io::Result<Visit> {
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            self.pending.push_back(path);
            return Ok(Visit::Skip);
        }
        if file_type.is_symlink() && fs::metadata(&path).is_ok_and(|m| m.is_dir()) {
            log::debug!("not following directory link '{}'", path.display());
            return Ok(Visit::Skip);
        }
        if (self.pred)(Path::new(&entry.file_name())) {
            Ok(Visit::File(path))
        } else {
            Ok(Visit::Skip)
        }
    }
}

impl<F> Iterator for FileTree<F>
where
    F: FnMut(&Path) -> bool,
{
    type Item = io::Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current.is_none() {
                let path = self.pending.pop_front()?;
                match fs::read_dir(&path) {
                    Ok(dir) => self.current = Some(dir),
                    Err(err) => {
                        log::debug!("cannot read directory '{}': {err}", path.display());
                        return Some(Err(err));
                    }
                }
            }
            let next = self.current.as_mut().and_then(Iterator::next);
            let entry = match next {
                Some(Ok(entry)) => entry,
                Some(Err(err)) => return Some(Err(err)),
                None => {
                    self.current = None;
                    continue;
                }
            };
            match self.visit(&entry) {
                Ok(Visit::File(path)) => return Some(Ok(path)),
                Ok(Visit::Skip) => {}
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

impl<F> FusedIterator for FileTree<F> where F: FnMut(&Path) -> bool {}
