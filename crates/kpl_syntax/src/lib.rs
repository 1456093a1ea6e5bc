//! Shared syntax layer for KPL: source positions, tokens, the scanner, and diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the compiler front end, the CLI, and fuzzing.
//!
//! ## Notes
//! - This crate is intentionally “lexical-only”: it does not parse, resolve names, or build symbol tables.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `kpl_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use kpl_syntax::lexer::{self, TokenKind};
//!
//! let tokens = lexer::lex("PROGRAM p; BEGIN END.").unwrap();
//! assert_eq!(tokens.len(), 7);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod source;
pub mod span;
pub mod token_helpers;
