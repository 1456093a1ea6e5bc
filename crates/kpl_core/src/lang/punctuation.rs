//! Punctuation vocabulary.
//!
//! This module defines the separators and delimiters used by the KPL grammar.
//!
//! ## Notes
//! - Lookup via [`from_str`] accepts the canonical spelling and any alias.
//! - Array selectors are spelled `(.` and `.)` in classic KPL; `[` and `]` are accepted as aliases.
//!
//! ## Examples
//! ```rust
//! use kpl_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("(."), Some(PunctuationId::LSel));
//! assert_eq!(punctuation::from_str("["), Some(PunctuationId::LSel));
//! assert_eq!(punctuation::as_str(PunctuationId::RSel), ".)");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Semicolon,
    Colon,
    Period,
    Comma,
    LParen,
    RParen,
    /// Opening array selector `(.`
    LSel,
    /// Closing array selector `.)`
    RSel,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub trace_name: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Semicolon, ";", &[], "SB_SEMICOLON"),
    info(PunctuationId::Colon, ":", &[], "SB_COLON"),
    info(PunctuationId::Period, ".", &[], "SB_PERIOD"),
    info(PunctuationId::Comma, ",", &[], "SB_COMMA"),
    info(PunctuationId::LParen, "(", &[], "SB_LPAR"),
    info(PunctuationId::RParen, ")", &[], "SB_RPAR"),
    info(PunctuationId::LSel, "(.", &["["], "SB_LSEL"),
    info(PunctuationId::RSel, ".)", &["]"], "SB_RSEL"),
];

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Aliases.
pub fn aliases(id: PunctuationId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Name used in token traces (e.g. `SB_SEMICOLON`).
pub fn trace_name(id: PunctuationId) -> &'static str {
    info_for(id).trace_name
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("INVARIANT: every PunctuationId has a registry entry")
}

/// Lookup by spelling (canonical or alias).
pub fn from_str(s: &str) -> Option<PunctuationId> {
    if let Some(p) = PUNCTUATION.iter().find(|p| p.canonical == s) {
        return Some(p.id);
    }
    PUNCTUATION
        .iter()
        .find(|p| {
            let aliases: &[&str] = p.aliases;
            aliases.contains(&s)
        })
        .map(|p| p.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    trace_name: &'static str,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        aliases,
        trace_name,
    }
}
