#![forbid(unsafe_code)]
//! KPL Compiler Front End
//!
//! KPL is a small Pascal-like teaching language. This crate provides its front end: the type and constant-value
//! models, the symbol table, the recursive-descent parser, a compile driver, and the `kplc` CLI. The scanner and
//! diagnostics live in `kpl_syntax`; the language vocabulary lives in `kpl_core`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a compiler bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod cli;
pub mod compiler;
pub mod config;
pub mod frontend;
pub mod version;

pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::symbols;
pub use frontend::types;

pub use compiler::{Compilation, CompileFailure, compile, compile_source, read_source};
pub use config::CompilerConfig;
