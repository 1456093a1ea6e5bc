//! KPL language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators,
//! punctuation, and the built-in routines every program can call.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The scanner/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   token traces, symbol table seeding).
//!
//! ## Examples
//! ```rust
//! use kpl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("begin"), Some(KeywordId::Begin));
//! assert_eq!(keywords::as_str(KeywordId::Begin), "BEGIN");
//! ```

pub mod builtins;
pub mod keywords;
pub mod operators;
pub mod punctuation;
