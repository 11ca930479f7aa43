//! gridcalc - evaluate a tab-separated table of cell formulas.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use gridcalc_core::Document;

fn print_usage() {
    eprintln!("Usage: gridcalc [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Reads a table of cell formulas (first line: height and width, then");
    eprintln!("one tab-separated row per line), evaluates every formula and prints");
    eprintln!("the computed table. Malformed cells print as #<message>.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                 Table to evaluate (default: stdin)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <FILE>    Write the computed table to FILE (default: stdout)");
    eprintln!("  -h, --help             Print help");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut input_file: Option<PathBuf> = None;
    let mut output_file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    std::process::exit(1);
                }
                output_file = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if input_file.is_none() {
                    input_file = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    // Warnings go to stderr; the computed table is the only stdout output.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(input_file, output_file) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(input_file: Option<PathBuf>, output_file: Option<PathBuf>) -> anyhow::Result<()> {
    let mut document = match &input_file {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            Document::from_reader(file)?
        }
        None => Document::from_reader(io::stdin().lock())?,
    };

    document.evaluate();

    match &output_file {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
            document.write_to(BufWriter::new(file))?;
        }
        None => document.write_to(io::stdout().lock())?,
    }

    Ok(())
}
