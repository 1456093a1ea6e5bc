//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use miette::{NamedSource, Report};

use crate::compiler::{self, Compilation, CompileFailure};
use crate::config::CompilerConfig;
use crate::frontend::{diagnostics, lexer};

use super::{CliError, CliResult, ExitCode};

/// How diagnostics are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// miette's annotated report
    Fancy,
    /// The plain caret excerpt from [`diagnostics::format_error`]
    Plain,
}

/// Scan and parse a file, reporting success.
pub fn check_file(path: &Path, style: Style) -> CliResult<ExitCode> {
    compile_file(path, &CompilerConfig::default(), style)?;
    println!("✓ {} parsed", path.display());
    Ok(ExitCode::SUCCESS)
}

/// Tokenize a file and print every token.
pub fn lex_file(path: &Path, style: Style) -> CliResult<ExitCode> {
    let source = compiler::read_source(path, &CompilerConfig::default())
        .map_err(|failure| CliError::failure(format!("Error: {}", failure)))?;
    let tokens = lexer::lex(&source).map_err(|err| report(path, &source, err, style))?;

    for token in &tokens {
        println!("{}", token);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and print the tokens the parser consumed.
pub fn parse_file(path: &Path, style: Style) -> CliResult<ExitCode> {
    let config = CompilerConfig::default().with_record_tokens(true);
    let compilation = compile_file(path, &config, style)?;

    for token in &compilation.tokens {
        println!("{}", token);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and print its symbol table.
pub fn symbols_file(path: &Path, style: Style) -> CliResult<ExitCode> {
    let compilation = compile_file(path, &CompilerConfig::default(), style)?;
    print!("{}", compilation.symbols.dump());
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Helpers
// ============================================================================

fn compile_file(path: &Path, config: &CompilerConfig, style: Style) -> CliResult<Compilation> {
    compiler::compile_with(path, config).map_err(|failure| match failure {
        CompileFailure::Compile { text, error, .. } => report(path, &text, error, style),
        other => CliError::failure(format!("Error: {}", other)),
    })
}

/// Turn a compile error into exactly one rendered diagnostic.
fn report(path: &Path, source: &str, error: diagnostics::CompileError, style: Style) -> CliError {
    let name = path.display().to_string();
    let message = match style {
        Style::Plain => diagnostics::format_error(&name, source, &error),
        Style::Fancy => {
            let report = Report::new(error).with_source_code(NamedSource::new(name, source.to_string()));
            format!("{:?}", report)
        }
    };
    CliError::failure(message.trim_end())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("kplc-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_check_file_success() {
        let path = temp_file("ok.kpl", "program P; begin end.");
        assert_eq!(check_file(&path, Style::Plain).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_check_file_plain_diagnostic() {
        let path = temp_file("bad.kpl", "program P begin end.");
        let err = check_file(&path, Style::Plain).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("syntax error: Missing ';'"));
        assert!(err.message.contains("bad.kpl:1:11"));
    }

    #[test]
    fn test_check_file_fancy_diagnostic() {
        let path = temp_file("fancy.kpl", "program P; begin 5 end.");
        let err = check_file(&path, Style::Fancy).unwrap_err();
        assert!(err.message.contains("Invalid statement!"));
    }

    #[test]
    fn test_lex_file_reports_lexical_errors() {
        let path = temp_file("lex.kpl", "program P; (* never closed");
        let err = lex_file(&path, Style::Plain).unwrap_err();
        assert!(err.message.contains("End of comment expected!"));
    }

    #[test]
    fn test_symbols_and_parse_commands() {
        let path = temp_file("sym.kpl", "program P; var x : integer; begin x := 1 end.");
        assert_eq!(symbols_file(&path, Style::Plain).unwrap(), ExitCode::SUCCESS);
        assert_eq!(parse_file(&path, Style::Plain).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_missing_file() {
        let err = check_file(Path::new("no/such/file.kpl"), Style::Plain).unwrap_err();
        assert!(err.message.starts_with("Error: cannot read"));
    }

    #[test]
    fn test_lex_missing_file_uses_shared_reader() {
        let err = lex_file(Path::new("definitely/not/here.kpl"), Style::Plain).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("Error: cannot read 'definitely/not/here.kpl'"));
    }
}
