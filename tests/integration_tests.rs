//! Integration tests for the KPL compiler front end

use std::fs;
use std::path::{Path, PathBuf};

use kpl_core::lang::punctuation::PunctuationId;
use kplc::compiler::{self, CompileFailure};
use kplc::config::CompilerConfig;
use kplc::diagnostics::{ErrorCode, ErrorKind};
use kplc::frontend::lexer::TokenKind;
use kplc::frontend::symbols::ObjectKind;

fn fixtures(dir: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(dir);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "kpl"))
        .collect();
    paths.sort();
    paths
}

/// The expected diagnostic of an invalid fixture, from its `(* expect: ... *)` first line.
fn expected_diagnostic(source: &str) -> &str {
    source
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("(* expect: "))
        .and_then(|rest| rest.strip_suffix(" *)"))
        .unwrap_or_else(|| panic!("fixture is missing its expect line:\n{}", source))
}

/// Test that all valid fixtures compile successfully
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty());

    for path in paths {
        let result = compiler::compile(&path);
        assert!(
            result.is_ok(),
            "Expected {} to compile successfully, got: {}",
            path.display(),
            result.unwrap_err()
        );
    }
}

/// Test that invalid fixtures fail with exactly the diagnostic they announce
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty());

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let expected = expected_diagnostic(&source);
        match compiler::compile(&path) {
            Ok(_) => panic!("Expected {} to fail", path.display()),
            Err(failure) => assert_eq!(failure.to_string(), expected, "in {}", path.display()),
        }
    }
}

/// Every token up to and including the final `.` is consumed
#[test]
fn test_valid_fixtures_consume_every_token() {
    let config = CompilerConfig::new().with_record_tokens(true);
    for path in fixtures("valid") {
        let source = fs::read_to_string(&path).unwrap();
        let scanned = kplc::lexer::lex(&source).unwrap();
        let compilation = compiler::compile_with(&path, &config).unwrap();

        assert_eq!(compilation.tokens.len(), scanned.len() - 1, "in {}", path.display());
        assert_eq!(
            compilation.tokens.last().map(|t| t.kind),
            Some(TokenKind::Punctuation(PunctuationId::Period))
        );
    }
}

#[test]
fn test_empty_program_declares_only_builtins() {
    let compilation = compiler::compile_source("program P; begin end.", &CompilerConfig::default()).unwrap();
    let symbols = &compilation.symbols;

    assert_eq!(symbols.globals().len(), 5);
    let program = symbols.program().and_then(|id| symbols.get(id)).unwrap();
    assert!(matches!(program.kind, ObjectKind::Program(_)));
    let scope = program.scope().unwrap();
    assert!(symbols.scope(scope).unwrap().objects.is_empty());
}

#[test]
fn test_missing_semicolon_is_reported_at_begin() {
    let err = compiler::compile_source("program P begin end.", &CompilerConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert!(matches!(err.code, ErrorCode::MissingToken(_)));
    assert_eq!(err.to_string(), "1-11:Missing ';'");
}

#[test]
fn test_missing_semicolon_between_constants_is_reported_at_the_next_name() {
    let err =
        compiler::compile_source("program P; const c = 5 x = 2; begin end.", &CompilerConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "1-24:Missing ';'");
}

#[test]
fn test_io_failure() {
    let failure = compiler::compile("tests/fixtures/does_not_exist.kpl").unwrap_err();
    assert!(matches!(failure, CompileFailure::Io { .. }));
}

#[test]
fn test_symbol_dump_of_hanoi() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/valid/example3.kpl");
    let compilation = compiler::compile(&path).unwrap();
    let dump = compilation.symbols.dump();

    assert!(dump.starts_with("Program EXAMPLE3\n"));
    assert!(dump.contains("    Const NEG = -10\n"));
    assert!(dump.contains("    Const STAR = '*'\n"));
    assert!(dump.contains("    Type GRID = Arr(10,Arr(10,Int))\n"));
    assert!(dump.contains("        Param VAR A : Int\n"));
    assert!(dump.contains("        Var TMP : Int\n"));
}
