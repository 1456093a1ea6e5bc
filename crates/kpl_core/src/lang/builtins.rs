//! Built-in routine vocabulary.
//!
//! This module defines the I/O routines every KPL program can call without declaring them.
//! The symbol table seeds its global declaration list from [`BUILTINS`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: built-in names are upper case.
//! - Signatures use [`BasicTypeId`] because built-ins only ever take or return `INTEGER`/`CHAR`.
//!
//! ## Examples
//! ```rust
//! use kpl_core::lang::builtins::{self, BasicTypeId, BuiltinId};
//!
//! assert_eq!(builtins::from_str("WRITEI"), Some(BuiltinId::WriteI));
//! assert_eq!(builtins::info_for(BuiltinId::ReadC).returns, Some(BasicTypeId::Char));
//! ```

/// Stable identifier for a built-in routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinId {
    ReadC,
    ReadI,
    WriteI,
    WriteC,
    WriteLn,
}

/// The basic types a built-in signature can mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicTypeId {
    Integer,
    Char,
}

/// A value parameter of a built-in routine.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinParam {
    pub name: &'static str,
    pub ty: BasicTypeId,
}

/// Metadata for a built-in routine.
///
/// ## Notes
/// - `returns` is `Some` for functions and `None` for procedures.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinInfo {
    pub id: BuiltinId,
    pub name: &'static str,
    pub params: &'static [BuiltinParam],
    pub returns: Option<BasicTypeId>,
    pub description: &'static str,
}

impl BuiltinInfo {
    /// Return `true` if this built-in returns a value.
    pub fn is_function(&self) -> bool {
        self.returns.is_some()
    }
}

/// Registry of all built-in routines, in declaration order.
pub const BUILTINS: &[BuiltinInfo] = &[
    BuiltinInfo {
        id: BuiltinId::ReadC,
        name: "READC",
        params: &[],
        returns: Some(BasicTypeId::Char),
        description: "Read one character from standard input.",
    },
    BuiltinInfo {
        id: BuiltinId::ReadI,
        name: "READI",
        params: &[],
        returns: Some(BasicTypeId::Integer),
        description: "Read one integer from standard input.",
    },
    BuiltinInfo {
        id: BuiltinId::WriteI,
        name: "WRITEI",
        params: &[BuiltinParam {
            name: "i",
            ty: BasicTypeId::Integer,
        }],
        returns: None,
        description: "Write an integer to standard output.",
    },
    BuiltinInfo {
        id: BuiltinId::WriteC,
        name: "WRITEC",
        params: &[BuiltinParam {
            name: "ch",
            ty: BasicTypeId::Char,
        }],
        returns: None,
        description: "Write a character to standard output.",
    },
    BuiltinInfo {
        id: BuiltinId::WriteLn,
        name: "WRITELN",
        params: &[],
        returns: None,
        description: "Write a line break to standard output.",
    },
];

/// Routine name.
pub fn as_str(id: BuiltinId) -> &'static str {
    info_for(id).name
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: BuiltinId) -> &'static BuiltinInfo {
    BUILTINS
        .iter()
        .find(|b| b.id == id)
        .expect("INVARIANT: every BuiltinId has a registry entry")
}

/// Lookup by name.
pub fn from_str(s: &str) -> Option<BuiltinId> {
    BUILTINS.iter().find(|b| b.name == s).map(|b| b.id)
}
