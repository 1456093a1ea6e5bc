//! Diagnostics and error reporting for KPL.
//!
//! Every error the front end can raise is a variant of [`ErrorCode`]; a [`CompileError`] pins a code to a source
//! location. Two renderings are available:
//! - `Display` on [`CompileError`] gives the terse `line-column:message` form of the classic KPL reporter.
//! - [`format_error`] gives a multi-line report with the offending source line and a caret.
//!
//! [`CompileError`] also implements [`miette::Diagnostic`], so callers can hand it to a `miette` report handler.

use std::fmt;

use thiserror::Error;

use crate::lexer::{Token, TokenKind};
use crate::span::{Position, Span};

/// Error catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorCode {
    // Lexical
    #[error("End of comment expected!")]
    EndOfComment,
    #[error("Identification too long!")]
    IdentTooLong,
    #[error("Invalid const char!")]
    InvalidCharConstant,
    #[error("Invalid symbol!")]
    InvalidSymbol,
    #[error("Number too large!")]
    NumberTooLarge,

    // Syntax
    #[error("Missing {0}")]
    MissingToken(TokenKind),
    #[error("Invalid constant!")]
    InvalidConstant,
    #[error("Invalid type!")]
    InvalidType,
    #[error("Invalid basic type!")]
    InvalidBasicType,
    #[error("Invalid parameter!")]
    InvalidParameter,
    #[error("Invalid statement!")]
    InvalidStatement,
    #[error("Invalid arguments!")]
    InvalidArguments,
    #[error("Invalid comparator!")]
    InvalidComparator,
    #[error("Invalid expression!")]
    InvalidExpression,
    #[error("Invalid term!")]
    InvalidTerm,
    #[error("Invalid factor!")]
    InvalidFactor,

    // Symbol
    #[error("Duplicate identifier '{0}'!")]
    DuplicateIdent(String),
    #[error("Undeclared constant '{0}'!")]
    UndeclaredConstant(String),
    #[error("Undeclared type '{0}'!")]
    UndeclaredType(String),
    #[error("Type inconsistency!")]
    TypeInconsistency,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ErrorCode {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::EndOfComment
            | ErrorCode::IdentTooLong
            | ErrorCode::InvalidCharConstant
            | ErrorCode::InvalidSymbol
            | ErrorCode::NumberTooLarge => ErrorKind::Lexical,
            ErrorCode::DuplicateIdent(_)
            | ErrorCode::UndeclaredConstant(_)
            | ErrorCode::UndeclaredType(_)
            | ErrorCode::TypeInconsistency
            | ErrorCode::Internal(_) => ErrorKind::Symbol,
            _ => ErrorKind::Syntax,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Symbol,
}

impl ErrorKind {
    /// Diagnostic code shown by `miette` reports.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Lexical => "kpl::lexical",
            ErrorKind::Syntax => "kpl::syntax",
            ErrorKind::Symbol => "kpl::symbol",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Symbol => write!(f, "symbol error"),
        }
    }
}

/// A compile-time error with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{position}:{code}")]
pub struct CompileError {
    pub code: ErrorCode,
    pub position: Position,
    pub span: Span,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(code: ErrorCode, position: Position, span: Span) -> Self {
        Self {
            code,
            position,
            span,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn lexical(code: ErrorCode, position: Position, span: Span) -> Self {
        debug_assert_eq!(code.kind(), ErrorKind::Lexical);
        Self::new(code, position, span)
    }

    /// A syntax error reported at `token`.
    pub fn syntax(code: ErrorCode, token: &Token) -> Self {
        Self::new(code, token.position, token.span)
    }

    /// "Missing <expected>" reported at the lookahead that failed to match.
    pub fn missing_token(expected: TokenKind, found: &Token) -> Self {
        Self::syntax(ErrorCode::MissingToken(expected), found).with_note(format!("found {}", found.kind))
    }

    /// A symbol error reported at `token`.
    pub fn symbol(code: ErrorCode, token: &Token) -> Self {
        Self::new(code, token.position, token.span)
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

impl miette::Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind().code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() && self.notes.is_empty() {
            return None;
        }
        let lines: Vec<&str> = self.notes.iter().chain(self.hints.iter()).map(String::as_str).collect();
        Some(Box::new(lines.join("\n")))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        let label = miette::LabeledSpan::at(self.span, self.code.to_string());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Render an error with source context as a plain (uncoloured) multi-line report.
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let (line_num, col_num, line_text) = get_line_info(source, error.span.start);
    let gutter = " ".repeat(line_num.to_string().len());

    let mut out = String::new();
    out.push_str(&format!("{}: {}\n", error.kind(), error.code));
    out.push_str(&format!("  --> {}:{}:{}\n", file_name, line_num, col_num));
    out.push_str(&format!("  {} |\n", gutter));
    out.push_str(&format!("  {} | {}\n", line_num, line_text));

    let line_rest = line_text.len().saturating_sub(col_num - 1);
    let underline_len = error.span.len().min(line_rest).max(1);
    out.push_str(&format!(
        "  {} | {}{}\n",
        gutter,
        " ".repeat(col_num - 1),
        "^".repeat(underline_len)
    ));

    for note in &error.notes {
        out.push_str(&format!("  = note: {}\n", note));
    }
    for hint in &error.hints {
        out.push_str(&format!("  = hint: {}\n", hint));
    }
    out
}

/// Line number, column number and line text for a byte offset.
fn get_line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = source[line_start..line_end].trim_end_matches('\r');
    let col_num = source[line_start..offset].chars().count() + 1;

    (line_num, col_num, line_text)
}
