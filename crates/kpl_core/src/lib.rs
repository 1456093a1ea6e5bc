//! Canonical language vocabulary for the KPL compiler front end.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that both the scanner and the
//! symbol table agree on: reserved words, operators, punctuation and the built-in I/O routines.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no compiler-specific types.
//! - Callers work with stable IDs (e.g. `KeywordId`) and look up spellings/metadata through registry tables.

pub mod lang;
