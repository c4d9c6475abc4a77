//! Example splitting a workload into parts and processing them in parallel.
//!
//! This example shows how to:
//! - Split a sequence by chunk size or into a fixed number of parts
//! - Process the parts in parallel
//! - Map flat indices back to grid coordinates
//!
//! # Usage
//!
//! ```sh
//! cargo run --example divide -- --len 10 --parts 3
//! ```
//!
//! Split by chunk size instead of part count:
//!
//! ```sh
//! cargo run --example divide -- --len 10 --parts 4 --strategy size
//! ```
//!
//! Print the grid coordinates of each element for a 4x4 grid:
//!
//! ```sh
//! cargo run --example divide -- --len 16 --parts 3 --grid 4
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use miscs_core::{Grid, Ordinal, chunks, partition};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Exactly `--parts` balanced parts.
    Count,
    /// Parts of `--parts` elements each.
    Size,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of elements in the workload.
    #[arg(long, value_name = "LEN", default_value_t = 10)]
    len: usize,

    /// Part count (count strategy) or part size (size strategy).
    #[arg(short, long, value_name = "N", default_value_t = 3)]
    parts: usize,

    /// How to split the workload.
    #[arg(long, value_name = "STRATEGY", default_value = "count")]
    strategy: Strategy,

    /// Print elements as coordinates of a grid of this size.
    #[arg(long, value_name = "SIZE")]
    grid: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let seq = (0..args.len).collect::<Vec<_>>();

    let split = match args.strategy {
        Strategy::Count => partition(&seq, args.parts),
        Strategy::Size => chunks(&seq, args.parts),
    };
    let parts = match split {
        Ok(parts) => parts,
        Err(err) => {
            eprintln!("Cannot split the workload: {err}");
            process::exit(2);
        }
    };

    let grid = match args.grid.map(Grid::new).transpose() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Invalid grid: {err}");
            process::exit(2);
        }
    };

    let sums = parts
        .par_iter()
        .map(|part| part.iter().sum::<usize>())
        .collect::<Vec<_>>();

    for (n, (part, sum)) in (1..).zip(parts.iter().zip(&sums)) {
        println!("{} part ({} elements, sum {sum}):", Ordinal(n), part.len());
        match grid {
            Some(grid) => {
                let coordinates = part
                    .iter()
                    .map(|&index| grid.decode(index).map(|c| c.to_string()))
                    .collect::<Result<Vec<_>, _>>();
                match coordinates {
                    Ok(coordinates) => println!("  {}", coordinates.join(" ")),
                    Err(err) => {
                        eprintln!("{err}");
                        process::exit(1);
                    }
                }
            }
            None => println!("  {part:?}"),
        }
    }
    println!("total: {}", sums.iter().sum::<usize>());
}
