//! KPL Compiler Frontend
//!
//! This module contains all frontend components:
//! - `lexer`: the KPL scanner and token model
//! - `parser`: recursive-descent parsing into the symbol table
//! - `types`: the type model and constant values
//! - `symbols`: objects, scopes and the symbol table
//! - `diagnostics`: error catalog and rendering

// Lexical components are provided by the shared kpl_syntax crate.
pub use kpl_syntax::{diagnostics, lexer, source, span};

// Compiler-specific pieces remain local.
pub mod parser;
pub mod symbols;
pub mod types;
