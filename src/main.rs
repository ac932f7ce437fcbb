// src/main.rs
//
// markdown2html — CLI wrapper around the library.
//
// Usage: markdown2html <input.md> <output.html>
//   - missing arguments   : usage on stderr, exit 1
//   - input not a file    : "Missing <path>" on stderr, exit 1
//   - read/write failures : message on stderr, exit 1
//
// CLI flags:
//   -v, --verbose : raise log level (repeatable: info, debug, trace)
//   --stdout      : print the HTML instead of writing the output file

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use markdown2html::{convert_str, Error, Result};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, level_filters::LevelFilter};

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Write the HTML to standard output instead of the output file
    #[arg(long, action = ArgAction::SetTrue)]
    stdout: bool,

    /// Markdown input file
    input: PathBuf,

    /// HTML output file
    #[arg(required_unless_present = "stdout")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version: clap prints them and exits 0.
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => return fail(Error::MissingArguments),
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn fail(e: Error) -> ExitCode {
    eprintln!("{e}");
    // Every error code fits in a byte.
    ExitCode::from(e.exit_code() as u8)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.input.is_file() {
        return Err(Error::InputNotFound {
            path: cli.input.clone(),
        });
    }

    let src = fs::read_to_string(&cli.input).map_err(|source| Error::InputRead {
        path: cli.input.clone(),
        source,
    })?;
    info!(path = %cli.input.display(), bytes = src.len(), "read input");

    let html = convert_str(&src);

    match (&cli.output, cli.stdout) {
        (Some(path), false) => {
            fs::write(path, html).map_err(|source| Error::OutputWrite {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "wrote output");
        }
        (path, _) => {
            let mut out = io::stdout().lock();
            writeln!(out, "{html}").map_err(|source| Error::OutputWrite {
                path: path.clone().unwrap_or_else(|| PathBuf::from("<stdout>")),
                source,
            })?;
        }
    }
    Ok(())
}
