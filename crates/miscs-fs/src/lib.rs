//! Filesystem helpers for scripts that read a tree of inputs and write into an
//! output directory.
//!
//! - [`file_tree`]: recursive file listing filtered by name or extension.
//! - [`output_directory`]: an output directory tied to a scope, removed again
//!   on failure if requested.
//! - [`files`]: opening a batch of files at once.
//!
//! Diagnostics go through the [`log`] facade.
//!
//! # Examples
//!
//! ```no_run
//! use miscs_fs::{OutputDirectory, OutputDirectoryOptions, file_tree_ext};
//!
//! let options = OutputDirectoryOptions { delete_on_failure: true };
//! OutputDirectory::scope("out", options, |out| {
//!     for path in file_tree_ext("data", ["csv", "tsv"]) {
//!         let path = path?;
//!         std::fs::copy(&path, out.join(path.file_name().unwrap_or_default()))?;
//!     }
//!     Ok::<_, std::io::Error>(())
//! })?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod file_tree;
pub mod files;
pub mod output_directory;

pub use self::{
    file_tree::{FileTree, file_tree, file_tree_ext, has_ext},
    files::open_all,
    output_directory::{OutputDirectory, OutputDirectoryOptions},
};
