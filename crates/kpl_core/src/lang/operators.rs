//! Operator vocabulary.
//!
//! Defines the arithmetic, relational and assignment operators of KPL together with the
//! classic symbol names used in token traces (`SB_PLUS`, `SB_ASSIGN`, ...).
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact.
//! - KPL has no operator precedence table: precedence is encoded in the grammar
//!   (expression → term → factor). The [`OperatorCategory`] tells which grammar level uses an operator.
//!
//! ## Examples
//! ```rust
//! use kpl_core::lang::operators::{self, OperatorCategory, OperatorId};
//!
//! assert_eq!(operators::from_str(":="), Some(OperatorId::Assign));
//! assert_eq!(operators::category(OperatorId::Le), OperatorCategory::Relational);
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Plus,
    Minus,
    Times,
    Slash,
    Eq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
    Assign,
}

/// Grammar level an operator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    /// `+` and `-`, between terms (also unary sign on an expression or constant).
    Additive,
    /// `*` and `/`, between factors.
    Multiplicative,
    /// Comparators used in conditions.
    Relational,
    /// `:=`.
    Assignment,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub trace_name: &'static str,
    pub category: OperatorCategory,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    info(OperatorId::Plus, "+", "SB_PLUS", OperatorCategory::Additive),
    info(OperatorId::Minus, "-", "SB_MINUS", OperatorCategory::Additive),
    info(OperatorId::Times, "*", "SB_TIMES", OperatorCategory::Multiplicative),
    info(OperatorId::Slash, "/", "SB_SLASH", OperatorCategory::Multiplicative),
    info(OperatorId::Eq, "=", "SB_EQ", OperatorCategory::Relational),
    info(OperatorId::Neq, "!=", "SB_NEQ", OperatorCategory::Relational),
    info(OperatorId::Lt, "<", "SB_LT", OperatorCategory::Relational),
    info(OperatorId::Le, "<=", "SB_LE", OperatorCategory::Relational),
    info(OperatorId::Gt, ">", "SB_GT", OperatorCategory::Relational),
    info(OperatorId::Ge, ">=", "SB_GE", OperatorCategory::Relational),
    info(OperatorId::Assign, ":=", "SB_ASSIGN", OperatorCategory::Assignment),
];

/// Source spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Name used in token traces (e.g. `SB_PLUS`).
pub fn trace_name(id: OperatorId) -> &'static str {
    info_for(id).trace_name
}

/// Grammar category.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Return `true` for the comparators accepted in a condition.
pub fn is_relational(id: OperatorId) -> bool {
    category(id) == OperatorCategory::Relational
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == s).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: OperatorId,
    spelling: &'static str,
    trace_name: &'static str,
    category: OperatorCategory,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        trace_name,
        category,
    }
}
