//! CLI module for the KPL compiler front end
//!
//! ## Commands
//!
//! - `check <file>` - Scan and parse a program (also the default when only a file is given)
//! - `lex <file>` - Print every token in trace form
//! - `parse <file>` - Print the tokens the parser consumed
//! - `symbols <file>` - Print the declared symbol tree
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::KPLC_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Front end for the KPL teaching language
#[derive(Parser, Debug)]
#[command(name = "kplc")]
#[command(version = KPLC_VERSION)]
#[command(about = "Scanner, parser and symbol table for the KPL teaching language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Render diagnostics as plain text instead of an annotated report
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan and parse a program
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print every token in trace form
    Lex {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a program and print the tokens it consumed
    Parse {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a program and print its symbol table
    Symbols {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let style = if cli.plain {
        commands::Style::Plain
    } else {
        commands::Style::Fancy
    };

    match cli.command {
        Some(Command::Check { file }) => commands::check_file(&file, style),
        Some(Command::Lex { file }) => commands::lex_file(&file, style),
        Some(Command::Parse { file }) => commands::parse_file(&file, style),
        Some(Command::Symbols { file }) => commands::symbols_file(&file, style),
        None => match cli.file {
            Some(file) => commands::check_file(&file, style),
            None => Err(CliError::failure("Usage: kplc [check|lex|parse|symbols] <FILE>")),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
