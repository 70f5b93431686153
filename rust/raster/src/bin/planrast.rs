// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: Convert floor-plan container files into raster PNGs
//!
//! Accepts either one container file or a directory of them. Directory
//! mode converts every `.json` file independently and prints a summary;
//! one bad file never stops the rest.
//!
//! Usage:
//!   planrast <input.json | input_dir> [options]

use planrast_raster::{batch_convert, convert, RenderStyle};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let input = PathBuf::from(&args[1]);

    let mut output: Option<PathBuf> = None;
    let mut image_size: u32 = 256;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                i += 1;
                output = Some(PathBuf::from(&args[i]));
            }
            "--size" => {
                i += 1;
                image_size = args[i].parse().expect("Invalid size value");
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let style = RenderStyle::with_size(image_size);

    if input.is_dir() {
        run_batch(&input, output, &style);
    } else {
        run_single(&input, output, &style);
    }
}

fn run_single(input: &Path, output: Option<PathBuf>, style: &RenderStyle) {
    let output = output.unwrap_or_else(|| input.with_extension("png"));

    if let Err(e) = convert(input, &output, style) {
        eprintln!("Error converting {}: {}", input.display(), e);
        std::process::exit(1);
    }
    println!("Saved: {}", output.display());
}

fn run_batch(input: &Path, output: Option<PathBuf>, style: &RenderStyle) {
    let output = output.unwrap_or_else(|| PathBuf::from("floorplan_pngs"));

    let report = match batch_convert(input, &output, style) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error scanning {}: {}", input.display(), e);
            std::process::exit(1);
        }
    };

    for failure in &report.failures {
        eprintln!("Error with {}: {}", failure.input.display(), failure.error);
    }
    println!(
        "Converted {} of {} files into {}",
        report.converted,
        report.total(),
        output.display()
    );

    if report.converted == 0 && report.failed > 0 {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("planrast - floor-plan container to PNG converter");
    println!();
    println!("Usage:");
    println!("  planrast <input.json> [--output out.png] [--size N]");
    println!("  planrast <input_dir> [--output out_dir] [--size N]");
    println!();
    println!("Options:");
    println!("  --output <path>   Output file (single mode) or directory (batch mode)");
    println!("  --size <pixels>   Square canvas side length (default: 256)");
}
