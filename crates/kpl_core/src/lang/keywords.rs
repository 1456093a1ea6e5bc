//! Define the reserved keyword vocabulary for the KPL language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings
//! and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive**: `begin`, `Begin` and `BEGIN` are the same keyword.
//! - Canonical spellings are upper case, matching how KPL listings and token traces print them.
//!
//! ## Examples
//! ```rust
//! use kpl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::from_str("While"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "WHILE");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Program structure
    Program,
    Begin,
    End,

    // Declarations
    Const,
    Type,
    Var,
    Function,
    Procedure,

    // Types
    Integer,
    Char,
    Array,
    Of,

    // Statements
    Call,
    If,
    Then,
    Else,
    While,
    Do,
    For,
    To,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Structure,
    Declaration,
    Type,
    Statement,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Program structure
    info(KeywordId::Program, "PROGRAM", KeywordCategory::Structure),
    info(KeywordId::Begin, "BEGIN", KeywordCategory::Structure),
    info(KeywordId::End, "END", KeywordCategory::Structure),
    // Declarations
    info(KeywordId::Const, "CONST", KeywordCategory::Declaration),
    info(KeywordId::Type, "TYPE", KeywordCategory::Declaration),
    info(KeywordId::Var, "VAR", KeywordCategory::Declaration),
    info(KeywordId::Function, "FUNCTION", KeywordCategory::Declaration),
    info(KeywordId::Procedure, "PROCEDURE", KeywordCategory::Declaration),
    // Types
    info(KeywordId::Integer, "INTEGER", KeywordCategory::Type),
    info(KeywordId::Char, "CHAR", KeywordCategory::Type),
    info(KeywordId::Array, "ARRAY", KeywordCategory::Type),
    info(KeywordId::Of, "OF", KeywordCategory::Type),
    // Statements
    info(KeywordId::Call, "CALL", KeywordCategory::Statement),
    info(KeywordId::If, "IF", KeywordCategory::Statement),
    info(KeywordId::Then, "THEN", KeywordCategory::Statement),
    info(KeywordId::Else, "ELSE", KeywordCategory::Statement),
    info(KeywordId::While, "WHILE", KeywordCategory::Statement),
    info(KeywordId::Do, "DO", KeywordCategory::Statement),
    info(KeywordId::For, "FOR", KeywordCategory::Statement),
    info(KeywordId::To, "TO", KeywordCategory::Statement),
];

/// Canonical (upper-case) spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Lookup by spelling.
///
/// ## Parameters
/// - `s`: Candidate keyword spelling, in any letter case.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS
        .iter()
        .find(|k| k.canonical.eq_ignore_ascii_case(s))
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
