//! Example listing files by extension and writing the listing to an output
//! directory.
//!
//! This example shows how to:
//! - Walk a directory tree filtered by extension
//! - Time the walk
//! - Write results into an output directory that is removed again on failure
//!
//! # Usage
//!
//! ```sh
//! RUST_LOG=info cargo run --example find_files -- --root crates --ext rs
//! ```
//!
//! Multiple extensions can be given (with or without the leading dot):
//!
//! ```sh
//! cargo run --example find_files -- --root . --ext toml --ext .md --out listing
//! ```

use std::{
    fs::File,
    io::{self, BufWriter, Write as _},
    path::PathBuf,
    process,
};

use clap::Parser;
use miscs_core::{Timer, chunks};
use miscs_fs::{OutputDirectory, OutputDirectoryOptions, file_tree_ext};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory to search.
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Extension to match. Repeatable.
    #[arg(short, long = "ext", value_name = "EXT", num_args = 1.., required = true)]
    exts: Vec<String>,

    /// Directory to write `files.txt` into.
    #[arg(long, value_name = "DIR", default_value = "find-files-out")]
    out: PathBuf,

    /// Keep the output directory even if writing fails.
    #[arg(long)]
    keep_on_failure: bool,

    /// Number of paths per line in the listing.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    per_line: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("find_files: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> io::Result<()> {
    let mut timer = Timer::new();
    let paths = timer.time(|| {
        file_tree_ext(&args.root, &args.exts)
            .filter_map(|path| match path {
                Ok(path) => Some(path),
                Err(err) => {
                    log::warn!("skipping unreadable entry: {err}");
                    None
                }
            })
            .collect::<Vec<_>>()
    });
    log::info!("found {} files in {timer} seconds", paths.len());

    let lines = chunks(&paths, args.per_line)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let options = OutputDirectoryOptions {
        delete_on_failure: !args.keep_on_failure,
    };
    let listing = OutputDirectory::scope(&args.out, options, |out| {
        let listing = out.join("files.txt");
        let mut writer = BufWriter::new(File::create(&listing)?);
        for line in lines {
            let line = line
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>();
            writeln!(writer, "{}", line.join("\t"))?;
        }
        writer.flush()?;
        Ok::<_, io::Error>(listing)
    })?;

    println!("{} files listed in {}", paths.len(), listing.display());
    Ok(())
}
