//! Command-line interface for blockdoc
//! This binary generates documentation-comment templates for the declaration
//! at a given line of a source file.
//!
//! Usage:
//!   blockdoc comment `<path>` --line `<n>`                     - Print a doc-comment template
//!   blockdoc mark `<path>` --line `<n>`                        - Print a MARK comment
//!   blockdoc describe `<path>` --line `<n>` [--format `<fmt>`] - Dump the parsed declaration

use blockdoc::{generate_block_comment, generate_mark_comment, parse_declaration};
use clap::{Arg, ArgMatches, Command};
use std::fmt;

/// Errors surfaced by the CLI layer; the library itself never fails.
#[derive(Debug)]
enum CliError {
    Read(String, std::io::Error),
    LineOutOfRange { line: usize, count: usize },
    NoDeclaration { line: usize },
    UnknownFormat(String),
    Serialize(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Read(path, err) => write!(f, "Cannot read '{}': {}", path, err),
            CliError::LineOutOfRange { line, count } => {
                write!(f, "Line {} is out of range (file has {} lines)", line, count)
            }
            CliError::NoDeclaration { line } => {
                write!(f, "No content at or after line {}", line)
            }
            CliError::UnknownFormat(format) => {
                write!(f, "Unknown format '{}' (expected 'json' or 'yaml')", format)
            }
            CliError::Serialize(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

fn main() {
    let matches = Command::new("blockdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates documentation-comment templates for source declarations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("comment")
                .about("Print a documentation-comment template for the declaration at a line")
                .arg(path_arg())
                .arg(line_arg()),
        )
        .subcommand(
            Command::new("mark")
                .about("Print a MARK comment for the container at a line")
                .arg(path_arg())
                .arg(line_arg()),
        )
        .subcommand(
            Command::new("describe")
                .about("Print the parsed declaration as structured data")
                .arg(path_arg())
                .arg(line_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'yaml')")
                        .default_value("json"),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("comment", sub)) => run_comment(sub),
        Some(("mark", sub)) => run_mark(sub),
        Some(("describe", sub)) => run_describe(sub),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the source file")
        .required(true)
        .index(1)
}

fn line_arg() -> Arg {
    Arg::new("line")
        .long("line")
        .short('l')
        .help("1-based line number of the declaration")
        .required(true)
        .value_parser(clap::value_parser!(usize))
}

/// Read the file and convert the 1-based CLI line to a 0-based cursor line.
fn load(sub: &ArgMatches) -> Result<(Vec<String>, usize), CliError> {
    let path = sub.get_one::<String>("path").unwrap();
    let line = *sub.get_one::<usize>("line").unwrap();
    let text =
        std::fs::read_to_string(path).map_err(|e| CliError::Read(path.clone(), e))?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    if line == 0 || line > lines.len() {
        return Err(CliError::LineOutOfRange {
            line,
            count: lines.len(),
        });
    }
    Ok((lines, line - 1))
}

fn run_comment(sub: &ArgMatches) -> Result<(), CliError> {
    let (lines, cursor) = load(sub)?;
    for line in generate_block_comment(&lines, cursor) {
        println!("{}", line);
    }
    Ok(())
}

fn run_mark(sub: &ArgMatches) -> Result<(), CliError> {
    let (lines, cursor) = load(sub)?;
    for line in generate_mark_comment(&lines, cursor) {
        println!("{}", line);
    }
    Ok(())
}

fn run_describe(sub: &ArgMatches) -> Result<(), CliError> {
    let (lines, cursor) = load(sub)?;
    let declaration = parse_declaration(&lines, cursor).ok_or(CliError::NoDeclaration {
        line: cursor + 1,
    })?;

    let format = sub.get_one::<String>("format").unwrap();
    match format.as_str() {
        "json" => {
            let output = serde_json::to_string_pretty(&declaration)
                .map_err(|e| CliError::Serialize(e.to_string()))?;
            println!("{}", output);
        }
        "yaml" => {
            let output = serde_yaml::to_string(&declaration)
                .map_err(|e| CliError::Serialize(e.to_string()))?;
            print!("{}", output);
        }
        other => return Err(CliError::UnknownFormat(other.to_string())),
    }
    Ok(())
}
