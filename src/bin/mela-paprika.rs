//! Command-line interface for the Mela → Paprika converter.
//! This binary is a thin shell: it gathers `.melarecipe` files, hands the raw
//! bytes to the conversion engine and writes the resulting bundle.
//!
//! Usage:
//!   mela-paprika `<inputs>`... [-o `<output>`]    - Convert files and/or directories
//!   mela-paprika recipes/ -o dinner.paprikarecipes

use clap::{Arg, Command};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use mela_paprika::convert::{convert_batch, InputFile, Outcome};

/// Extension of Mela export files.
const MELA_EXTENSION: &str = "melarecipe";

fn main() {
    let matches = Command::new("mela-paprika")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts Mela recipe exports into a Paprika import bundle")
        .arg_required_else_help(true)
        .arg(
            Arg::new("inputs")
                .help("Paths to .melarecipe files, or directories containing them")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Path of the .paprikarecipes bundle to write")
                .default_value("recipes.paprikarecipes"),
        )
        .arg(
            Arg::new("max-total-size")
                .long("max-total-size")
                .value_name("MB")
                .help("Reject batches whose combined input size exceeds this many megabytes")
                .value_parser(clap::value_parser!(u64))
                .default_value("500"),
        )
        .get_matches();

    let inputs: Vec<&String> = matches.get_many::<String>("inputs").unwrap().collect();
    let output = matches.get_one::<String>("output").unwrap();
    let max_total_mb = *matches.get_one::<u64>("max-total-size").unwrap();

    let paths = collect_input_paths(&inputs);
    if paths.is_empty() {
        eprintln!("No .melarecipe files found in the given paths");
        process::exit(1);
    }

    let (files, read_failures) = read_files(&paths);

    let total_bytes: usize = files.iter().map(|f| f.contents.len()).sum();
    let max_total_bytes = max_total_mb.saturating_mul(1024 * 1024);
    if total_bytes as u64 > max_total_bytes {
        eprintln!(
            "Combined input size {} bytes exceeds the {max_total_mb} MB limit; \
             raise --max-total-size or convert fewer files at once",
            total_bytes
        );
        process::exit(1);
    }

    let result = convert_batch(&files).unwrap_or_else(|e| {
        eprintln!("Conversion failed: {e}");
        process::exit(1);
    });

    let mut failures = read_failures;
    for outcome in &result.outcomes {
        match outcome {
            Outcome::Converted {
                filename,
                entry,
                warnings,
            } => {
                println!("converted: {filename} -> {entry}");
                for warning in warnings {
                    println!("  note: {warning}");
                }
            }
            Outcome::Failed { filename, error } => {
                eprintln!("failed: {filename}: {error}");
                failures += 1;
            }
        }
    }

    if result.converted() == 0 {
        eprintln!("No recipes were successfully converted");
        process::exit(1);
    }

    if let Err(e) = fs::write(output, &result.archive) {
        eprintln!("Failed to write '{output}': {e}");
        process::exit(1);
    }
    println!(
        "wrote {output} ({} recipe(s), {} failure(s))",
        result.converted(),
        failures
    );

    if failures > 0 {
        process::exit(1);
    }
}

/// Expand the given paths into a list of `.melarecipe` files.
///
/// Directories are scanned one level deep; anything without the expected
/// extension is skipped. Scan order is sorted so runs are reproducible.
fn collect_input_paths(inputs: &[&String]) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for input in inputs {
        let path = Path::new(input);
        if path.is_dir() {
            let mut found: Vec<PathBuf> = match fs::read_dir(path) {
                Ok(entries) => entries
                    .filter_map(|entry| entry.ok())
                    .map(|entry| entry.path())
                    .filter(|p| is_mela_file(p))
                    .collect(),
                Err(e) => {
                    eprintln!("Cannot read directory '{input}': {e}");
                    process::exit(1);
                }
            };
            found.sort();
            paths.extend(found);
        } else if is_mela_file(path) {
            paths.push(path.to_path_buf());
        } else {
            eprintln!("Skipping '{input}': not a .{MELA_EXTENSION} file");
        }
    }

    paths
}

fn is_mela_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MELA_EXTENSION))
}

/// Read each file into memory, reporting unreadable ones without giving up
/// on the rest. Returns the loaded inputs and the failure count.
fn read_files(paths: &[PathBuf]) -> (Vec<InputFile>, usize) {
    let mut files = Vec::with_capacity(paths.len());
    let mut failures = 0;

    for path in paths {
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match fs::read(path) {
            Ok(contents) => files.push(InputFile::new(display_name, contents)),
            Err(e) => {
                eprintln!("failed: {display_name}: cannot read file: {e}");
                failures += 1;
            }
        }
    }

    (files, failures)
}
