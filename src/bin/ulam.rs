//! ulam - generate Ulam-type sequences U(1,n)
//!
//! Usage: ulam [n] [X] [output-path]
//!
//! Generates every term of U(1,n) up to the inclusive bound X. With an
//! output path, terms are streamed one per line during the run; without
//! one, the whole sequence is printed at the end.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use ulam::{create_output_file, BuilderConfig, LineSink, SequenceBuilder};

const VERSION: &str = env!("CARGO_PKG_VERSION");

struct CliArgs {
    config: BuilderConfig,
    output: Option<PathBuf>,
    with_addends: bool,
}

/// Parse command line arguments.
///
/// Usage: ulam [OPTIONS] [n] [X] [output-path]
///
/// Options:
///   -a, --addends       Emit each term's smaller addend after the term
///   -b, --brute-force   Test every candidate by brute force (validation mode)
///   -h, --help          Show help and exit
///   -v, --version       Show version and exit
fn parse_args(args: &[String]) -> CliArgs {
    let mut config = BuilderConfig::default();
    let mut output = None;
    let mut with_addends = false;
    let mut positional = 0;

    for arg in args {
        match arg.as_str() {
            "-a" | "--addends" => with_addends = true,
            "-b" | "--brute-force" => config.brute_force_only = true,
            "-h" | "--help" => {
                println!("ulam v{} - Ulam-type sequence generator", VERSION);
                println!();
                println!("Usage: ulam [OPTIONS] [n] [X] [output-path]");
                println!();
                println!("Arguments:");
                println!("  n             Second seed term of U(1,n) (default 2)");
                println!("  X             Inclusive upper bound on candidates (default 13)");
                println!("  output-path   Stream terms to this file, one per line");
                println!();
                println!("Options:");
                println!("  -a, --addends       Emit each term's smaller addend after the term");
                println!("  -b, --brute-force   Test every candidate by brute force");
                println!("  -h, --help          Show this help message");
                println!("  -v, --version       Show version");
                println!();
                println!("Examples:");
                println!("  ulam                  Print U(1,2) up to 13");
                println!("  ulam 2 1000           Print U(1,2) up to 1000");
                println!("  ulam 3 5000 out.txt   Stream U(1,3) up to 5000 into out.txt");
                std::process::exit(0);
            }
            "-v" | "--version" => {
                println!("ulam v{}", VERSION);
                std::process::exit(0);
            }
            _ if arg.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", arg);
                eprintln!("Try 'ulam --help' for usage information");
                std::process::exit(1);
            }
            _ => {
                match positional {
                    0 => config.n = parse_int(arg, "n"),
                    1 => config.limit = parse_int(arg, "X"),
                    2 => output = Some(PathBuf::from(arg)),
                    _ => {
                        eprintln!("Error: Unexpected argument '{}'", arg);
                        std::process::exit(1);
                    }
                }
                positional += 1;
            }
        }
    }

    CliArgs {
        config,
        output,
        with_addends,
    }
}

fn parse_int(arg: &str, name: &str) -> u64 {
    match arg.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Error: {} must be an integer, got '{}'", name, arg);
            std::process::exit(1);
        }
    }
}

fn run(args: &CliArgs) -> io::Result<()> {
    let mut builder = SequenceBuilder::new(args.config);

    let summary = match &args.output {
        Some(path) => {
            let file = create_output_file(path)?;
            let mut sink = LineSink::new(BufWriter::new(file), args.with_addends);
            let summary = builder.run_with_sink(&mut sink)?;
            sink.flush()?;
            summary
        }
        None => {
            let summary = builder.run();
            println!("{:?}", builder.terms());
            summary
        }
    };

    let mut out = io::stdout();
    writeln!(out, "low_range entries: {}", summary.low_entries)?;
    writeln!(out, "high_range entries: {}", summary.high_entries)?;
    writeln!(out, "sequence length: {}", summary.terms)?;
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
