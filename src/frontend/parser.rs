//! Recursive-descent parser for KPL
//!
//! A predictive LL(1) parser: every nonterminal is one method that looks at the single lookahead token to
//! pick its production. Declarations are entered into the session [`SymbolTable`] as they are recognised.
//! The first error is fatal and unwinds to [`Parser::parse`].
//!
//! ## Examples
//!
//! ```rust
//! use kplc::frontend::parser;
//!
//! let parsed = parser::parse("PROGRAM p; VAR x : INTEGER; BEGIN x := 1 END.").unwrap();
//! assert!(parsed.symbols.dump().contains("Var x : Int"));
//! ```

use crate::frontend::symbols::{Object, ObjectId, ObjectKind, ParamMode, ScopeId, SymbolError, SymbolTable};
use crate::frontend::types::{ConstantValue, Type};
use kpl_core::lang::keywords::KeywordId;
use kpl_core::lang::operators::OperatorId;
use kpl_core::lang::punctuation::PunctuationId;
use kpl_syntax::diagnostics::{CompileError, ErrorCode};
use kpl_syntax::lexer::{Scanner, Token, TokenKind};
use kpl_syntax::source::{TokenSource, TokenStream};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
