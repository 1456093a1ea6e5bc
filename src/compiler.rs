//! Compile driver
//!
//! Runs the front-end pipeline (read, scan, parse) over one KPL source and returns what the parser built.
//! The CLI, the integration tests and the fuzz target all go through here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::CompilerConfig;
use crate::frontend::parser::Parser;
use crate::frontend::symbols::SymbolTable;
use kpl_syntax::diagnostics::{CompileError, format_error};
use kpl_syntax::lexer::{Scanner, Token};

/// The result of a successful compile.
#[derive(Debug)]
pub struct Compilation {
    /// Declarations of the program, plus the built-ins.
    pub symbols: SymbolTable,
    /// Consumed tokens, when [`CompilerConfig::record_tokens`] is set.
    pub tokens: Vec<Token>,
}

/// Why a compile of a file failed.
#[derive(Debug, thiserror::Error)]
pub enum CompileFailure {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is {size} bytes, larger than the {limit} byte limit", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// The source was read but does not compile. The text is kept so the error can be rendered against it.
    #[error("{error}")]
    Compile {
        path: PathBuf,
        text: String,
        #[source]
        error: CompileError,
    },
}

impl CompileFailure {
    /// The compile error, when the failure came from the front end rather than the file system.
    pub fn compile_error(&self) -> Option<&CompileError> {
        match self {
            CompileFailure::Compile { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Render the failure as plain text, with a caret excerpt for compile errors.
    pub fn render_plain(&self) -> String {
        match self {
            CompileFailure::Compile { path, text, error } => format_error(&path.display().to_string(), text, error),
            other => other.to_string(),
        }
    }
}

/// Read a KPL source file, refusing files over [`CompilerConfig::max_source_size`].
///
/// ## Errors
/// - [`CompileFailure::Io`] if the file cannot be inspected or read
/// - [`CompileFailure::TooLarge`] if it exceeds the configured limit
pub fn read_source(path: impl AsRef<Path>, config: &CompilerConfig) -> Result<String, CompileFailure> {
    let path = path.as_ref();
    let io_err = |source| CompileFailure::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io_err)?.len();
    if size > config.max_source_size {
        tracing::debug!(size, limit = config.max_source_size, "source file rejected");
        return Err(CompileFailure::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: config.max_source_size,
        });
    }

    fs::read_to_string(path).map_err(io_err)
}

/// Compile a KPL file with the default configuration.
///
/// ## Errors
/// See [`compile_with`].
pub fn compile(path: impl AsRef<Path>) -> Result<Compilation, CompileFailure> {
    compile_with(path, &CompilerConfig::default())
}

/// Compile a KPL file.
///
/// ## Errors
/// - [`CompileFailure::Io`] if the file cannot be inspected or read
/// - [`CompileFailure::TooLarge`] if it exceeds [`CompilerConfig::max_source_size`]
/// - [`CompileFailure::Compile`] for the first lexical, syntax or symbol error
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn compile_with(path: impl AsRef<Path>, config: &CompilerConfig) -> Result<Compilation, CompileFailure> {
    let path = path.as_ref();
    let text = read_source(path, config)?;
    match compile_source(&text, config) {
        Ok(compilation) => Ok(compilation),
        Err(error) => Err(CompileFailure::Compile {
            path: path.to_path_buf(),
            text,
            error,
        }),
    }
}

/// Compile KPL source text held in memory.
///
/// ## Errors
/// Returns the first lexical, syntax or symbol error.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn compile_source(source: &str, config: &CompilerConfig) -> Result<Compilation, CompileError> {
    let parsed = Parser::new(Scanner::new(source))
        .and_then(|parser| parser.record_tokens(config.record_tokens).parse());

    match parsed {
        Ok(parsed) => {
            tracing::info!(objects = parsed.symbols.object_count(), "compiled");
            Ok(Compilation {
                symbols: parsed.symbols,
                tokens: parsed.tokens,
            })
        }
        Err(err) => {
            tracing::debug!(error = %err, kind = %err.kind(), "compile failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kpl_syntax::diagnostics::ErrorCode;

    const HELLO: &str = "program Hello; begin call WRITEI(42); call WRITELN end.";

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("kplc-compiler-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_compile_source_ok() {
        let compilation = compile_source(HELLO, &CompilerConfig::default()).unwrap();
        assert_eq!(compilation.symbols.dump(), "Program Hello\n");
        assert!(compilation.tokens.is_empty());
    }

    #[test]
    fn test_compile_source_records_tokens() {
        let config = CompilerConfig::new().with_record_tokens(true);
        let compilation = compile_source(HELLO, &config).unwrap();
        assert_eq!(compilation.tokens.len(), 14);
        assert_eq!(compilation.tokens[0].to_string(), "1-1:KW_PROGRAM");
    }

    #[test]
    fn test_compile_source_error() {
        let err = compile_source("program P begin end.", &CompilerConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "1-11:Missing ';'");
    }

    #[test]
    fn test_compile_file() {
        let path = temp_file("hello.kpl", HELLO);
        assert!(compile(&path).is_ok());
    }

    #[test]
    fn test_compile_missing_file() {
        let err = compile("definitely/not/here.kpl").unwrap_err();
        assert!(matches!(err, CompileFailure::Io { .. }));
        assert!(err.compile_error().is_none());
    }

    #[test]
    fn test_compile_too_large() {
        let path = temp_file("large.kpl", HELLO);
        let config = CompilerConfig::new().with_max_source_size(8);
        let err = compile_with(&path, &config).unwrap_err();
        assert!(matches!(err, CompileFailure::TooLarge { limit: 8, .. }));
    }

    #[test]
    fn test_compile_failure_keeps_text() {
        let path = temp_file("broken.kpl", "program P;\nbegin 5 end.");
        let err = compile(&path).unwrap_err();
        assert_eq!(err.compile_error().map(|e| &e.code), Some(&ErrorCode::InvalidStatement));
        let rendered = err.render_plain();
        assert!(rendered.contains("begin 5 end."));
        assert!(rendered.contains("Invalid statement!"));
    }

    #[test]
    fn test_read_source_returns_text() {
        let path = temp_file("read.kpl", HELLO);
        assert_eq!(read_source(&path, &CompilerConfig::default()).unwrap(), HELLO);
    }

    #[test]
    fn test_read_source_applies_size_limit() {
        let path = temp_file("read-large.kpl", HELLO);
        let config = CompilerConfig::new().with_max_source_size(8);
        let err = read_source(&path, &config).unwrap_err();
        assert!(matches!(err, CompileFailure::TooLarge { limit: 8, .. }));
        assert!(err.to_string().ends_with("larger than the 8 byte limit"));
    }
}
