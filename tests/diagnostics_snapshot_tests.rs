//! Snapshot tests for rendered diagnostics and symbol-table dumps
//!
//! Run with: `cargo test --test diagnostics_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use kplc::compiler::compile_source;
use kplc::config::CompilerConfig;
use kplc::diagnostics::format_error;

/// Compile `source` and render its error as `p.kpl` would show it.
fn render(source: &str) -> String {
    let err = compile_source(source, &CompilerConfig::default()).expect_err("expected a compile error");
    format_error("p.kpl", source, &err)
}

fn dump_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/valid/{}.kpl", env!("CARGO_MANIFEST_DIR"), name);
    let source = fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path));
    compile_source(&source, &CompilerConfig::default())
        .expect("fixture should compile")
        .symbols
        .dump()
}

#[test]
fn test_missing_token_diagnostic() {
    insta::assert_snapshot!(render("program P begin end."), @r"
    syntax error: Missing ';'
      --> p.kpl:1:11
        |
      1 | program P begin end.
        |           ^^^^^
      = note: found keyword BEGIN
    ");
}

#[test]
fn test_lexical_diagnostic() {
    insta::assert_snapshot!(render("program ThisNameIsWayTooLong;"), @r"
    lexical error: Identification too long!
      --> p.kpl:1:9
        |
      1 | program ThisNameIsWayTooLong;
        |         ^^^^^^^^^^^^^^^^^^^^
      = note: identifiers are limited to 15 characters
    ");
}

#[test]
fn test_symbol_diagnostic_on_a_later_line() {
    insta::assert_snapshot!(render("program P;\nvar x : integer;\n    x : char;\nbegin end."), @r"
    symbol error: Duplicate identifier 'x'!
      --> p.kpl:3:5
        |
      3 |     x : char;
        |     ^
    ");
}

#[test]
fn test_factorial_symbols() {
    insta::assert_snapshot!(dump_fixture("example2"), @r"
    Program EXAMPLE2
        Var N : Int
        Function F : Int
            Param N : Int
    ");
}

#[test]
fn test_hanoi_symbols() {
    insta::assert_snapshot!(dump_fixture("example3"), @r"
    Program EXAMPLE3
        Const MAX = 10
        Const NEG = -10
        Const STAR = '*'
        Type VECTOR = Arr(10,Int)
        Type GRID = Arr(10,Arr(10,Int))
        Var I : Int
        Var V : Arr(10,Int)
        Var G : Arr(10,Arr(10,Int))
        Var C : Char
        Procedure HANOI
            Param N : Int
            Param S : Int
            Param Z : Int
            Param Y : Int
        Procedure SWAP
            Param VAR A : Int
            Param VAR B : Int
            Var TMP : Int
    ");
}
