//! Tests that run the `kplc` binary and inspect what reaches the terminal.

use std::path::PathBuf;
use std::process::{Command, Output};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("kplc-bin-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Run the binary with the default log filter.
fn run_kplc(args: &[&str], file: &PathBuf) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kplc"))
        .args(args)
        .arg(file)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_syntax_error_prints_one_diagnostic() {
    let path = temp_file("missing-semicolon.kpl", "program P begin end.");
    let output = run_kplc(&["--plain"], &path);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(stderr.matches("syntax error:").count(), 1, "{}", stderr);
    assert!(stderr.contains("Missing ';'"), "{}", stderr);
    assert!(!stderr.contains("WARN"), "{}", stderr);
}

#[test]
fn test_fancy_diagnostic_has_no_log_lines() {
    let path = temp_file("bad-statement.kpl", "program P;\nbegin 5 end.");
    let output = run_kplc(&["check"], &path);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert_eq!(stderr.matches("kpl::syntax").count(), 1, "{}", stderr);
    assert!(stderr.contains("Invalid statement!"), "{}", stderr);
    assert!(!stderr.contains("WARN"), "{}", stderr);
    assert!(!stderr.contains("compile failed"), "{}", stderr);
}

#[test]
fn test_success_keeps_stderr_empty() {
    let path = temp_file("ok.kpl", "program P; begin end.");
    let output = run_kplc(&[], &path);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("parsed"));
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}
