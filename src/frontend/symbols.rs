//! Symbol table and scope management for KPL
//!
//! Tracks every declared object (program, constants, types, variables, routines, parameters) in an arena.
//! Objects and scopes are addressed by index; the links a scope keeps to its owner and to its enclosing
//! scope, and the link a parameter keeps to its routine, are plain indices that own nothing.
//!
//! ## Notes
//! - Built-in I/O routines live in a flat global list outside the scope tree and are found last by
//!   [`SymbolTable::lookup`].
//! - There is no active scope until the program scope is entered.

use std::fmt::Write as _;

use thiserror::Error;

use crate::frontend::types::{ConstantValue, Type};
use kpl_core::lang::builtins::{self, BuiltinInfo};

/// Index of an object in the symbol table arena.
pub type ObjectId = usize;

/// Index of a scope in the symbol table arena.
pub type ScopeId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("no scope is active")]
    NoActiveScope,
    #[error("'{name}' is already declared in this scope")]
    Duplicate { name: String },
    #[error("'{name}' is not a function or procedure")]
    NotARoutine { name: String },
    #[error("scope #{0} does not exist")]
    UnknownScope(ScopeId),
    #[error("object #{0} does not exist")]
    UnknownObject(ObjectId),
}

/// Symbol table managing all declared objects
#[derive(Debug, Default)]
pub struct SymbolTable {
    objects: Vec<Object>,
    scopes: Vec<Scope>,
    globals: Vec<ObjectId>,
    program: Option<ObjectId>,
    current_scope: Option<ScopeId>,
}

impl SymbolTable {
    /// Create a table seeded with the built-in routines.
    pub fn new() -> Self {
        let mut table = Self::default();
        table.add_builtins();
        table
    }

    fn add_builtins(&mut self) {
        for info in builtins::BUILTINS {
            let routine = self.create_builtin(info);
            let Some(scope) = self.get(routine).and_then(Object::scope) else {
                continue;
            };
            for param in info.params {
                let id = self.create_parameter(param.name, ParamMode::ByValue, Some(param.ty.into()), routine);
                if let Some(routine_scope) = self.scopes.get_mut(scope) {
                    routine_scope.objects.push(id);
                }
                if let Some(params) = self.params_mut(routine) {
                    params.push(id);
                }
            }
            self.globals.push(routine);
        }
    }

    fn create_builtin(&mut self, info: &BuiltinInfo) -> ObjectId {
        match info.returns {
            Some(ret) => {
                let id = self.create_function(info.name);
                self.set_return_type(id, ret.into());
                id
            }
            None => self.create_procedure(info.name),
        }
    }

    // ========================================================================
    // Object construction
    // ========================================================================

    fn alloc_object(&mut self, name: impl Into<String>, kind: ObjectKind) -> ObjectId {
        let id = self.objects.len();
        self.objects.push(Object {
            name: name.into(),
            kind,
        });
        id
    }

    fn alloc_scope(&mut self, owner: ObjectId, outer: Option<ScopeId>) -> ScopeId {
        let id = self.scopes.len();
        self.scopes.push(Scope {
            objects: Vec::new(),
            owner,
            outer,
        });
        id
    }

    /// Create the program object and its top-level scope, and make it the root of the table.
    pub fn create_program(&mut self, name: impl Into<String>) -> ObjectId {
        let id = self.objects.len();
        let scope = self.alloc_scope(id, None);
        self.alloc_object(name, ObjectKind::Program(ProgramInfo { scope }));
        self.program = Some(id);
        id
    }

    pub fn create_constant(&mut self, name: impl Into<String>, value: ConstantValue) -> ObjectId {
        self.alloc_object(name, ObjectKind::Constant(ConstantInfo { value: Some(value) }))
    }

    pub fn create_type(&mut self, name: impl Into<String>, actual: Type) -> ObjectId {
        self.alloc_object(name, ObjectKind::Type(TypeInfo { actual: Some(actual) }))
    }

    pub fn create_variable(&mut self, name: impl Into<String>, ty: Type) -> ObjectId {
        self.alloc_object(
            name,
            ObjectKind::Variable(VariableInfo {
                ty: Some(ty),
                scope: None,
            }),
        )
    }

    /// Create a function whose scope is nested in the current scope. The return type is set later with
    /// [`SymbolTable::set_return_type`], once the signature has been parsed.
    pub fn create_function(&mut self, name: impl Into<String>) -> ObjectId {
        let id = self.objects.len();
        let scope = self.alloc_scope(id, self.current_scope);
        self.alloc_object(
            name,
            ObjectKind::Function(FunctionInfo {
                params: Vec::new(),
                return_type: None,
                scope,
            }),
        )
    }

    pub fn create_procedure(&mut self, name: impl Into<String>) -> ObjectId {
        let id = self.objects.len();
        let scope = self.alloc_scope(id, self.current_scope);
        self.alloc_object(
            name,
            ObjectKind::Procedure(ProcedureInfo {
                params: Vec::new(),
                scope,
            }),
        )
    }

    pub fn create_parameter(
        &mut self,
        name: impl Into<String>,
        mode: ParamMode,
        ty: Option<Type>,
        owner: ObjectId,
    ) -> ObjectId {
        self.alloc_object(name, ObjectKind::Parameter(ParameterInfo { mode, ty, owner }))
    }

    /// Set the return type of a function. Has no effect on other objects.
    pub fn set_return_type(&mut self, function: ObjectId, ty: Type) {
        if let Some(Object {
            kind: ObjectKind::Function(info),
            ..
        }) = self.objects.get_mut(function)
        {
            info.return_type = Some(ty);
        }
    }

    fn params_mut(&mut self, routine: ObjectId) -> Option<&mut Vec<ObjectId>> {
        match &mut self.objects.get_mut(routine)?.kind {
            ObjectKind::Function(info) => Some(&mut info.params),
            ObjectKind::Procedure(info) => Some(&mut info.params),
            _ => None,
        }
    }

    // ========================================================================
    // Scopes and declarations
    // ========================================================================

    /// Make `scope` the active scope.
    ///
    /// ## Errors
    /// [`SymbolError::UnknownScope`] if the table has no such scope; the active scope is left unchanged.
    pub fn enter_scope(&mut self, scope: ScopeId) -> Result<(), SymbolError> {
        if scope >= self.scopes.len() {
            return Err(SymbolError::UnknownScope(scope));
        }
        self.current_scope = Some(scope);
        Ok(())
    }

    /// Return to the scope enclosing the active one.
    pub fn exit_scope(&mut self) -> Result<(), SymbolError> {
        let current = self.current_scope.ok_or(SymbolError::NoActiveScope)?;
        let scope = self.scopes.get(current).ok_or(SymbolError::UnknownScope(current))?;
        self.current_scope = scope.outer;
        Ok(())
    }

    /// Append `object` to the active scope.
    ///
    /// ## Errors
    /// - [`SymbolError::NoActiveScope`] if no scope is active.
    /// - [`SymbolError::Duplicate`] if the active scope already declares the name.
    /// - [`SymbolError::NotARoutine`] if `object` is a parameter whose owner is not a function or procedure.
    /// - [`SymbolError::UnknownObject`] if the table has no such object.
    ///
    /// ## Notes
    /// - A parameter is also appended to its owning routine's parameter list.
    pub fn declare(&mut self, object: ObjectId) -> Result<(), SymbolError> {
        let scope = self.current_scope.ok_or(SymbolError::NoActiveScope)?;
        let obj = self.objects.get(object).ok_or(SymbolError::UnknownObject(object))?;
        if scope >= self.scopes.len() {
            return Err(SymbolError::UnknownScope(scope));
        }
        let owner = match &obj.kind {
            ObjectKind::Parameter(param) => Some(param.owner),
            _ => None,
        };

        if self.find_in_scope(scope, &obj.name).is_some() {
            return Err(SymbolError::Duplicate { name: obj.name.clone() });
        }

        if let Some(owner) = owner {
            let name = self.objects.get(owner).map(|o| o.name.clone()).unwrap_or_default();
            self.params_mut(owner)
                .ok_or(SymbolError::NotARoutine { name })?
                .push(object);
        }

        if let Some(active) = self.scopes.get_mut(scope) {
            active.objects.push(object);
        }
        Ok(())
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// First object in `list` named exactly `name`.
    pub fn find(&self, list: &[ObjectId], name: &str) -> Option<ObjectId> {
        list.iter()
            .copied()
            .find(|&id| self.objects.get(id).is_some_and(|o| o.name == name))
    }

    /// Look up a name among the objects declared directly in `scope`.
    pub fn find_in_scope(&self, scope: ScopeId, name: &str) -> Option<ObjectId> {
        self.find(&self.scopes.get(scope)?.objects, name)
    }

    /// Look up a name from the active scope outwards, then among the built-ins.
    pub fn lookup(&self, name: &str) -> Option<ObjectId> {
        let mut scope = self.current_scope;
        while let Some(idx) = scope {
            if let Some(id) = self.find_in_scope(idx, name) {
                return Some(id);
            }
            scope = self.scopes.get(idx).and_then(|s| s.outer);
        }
        self.find(&self.globals, name)
    }

    /// Look up a name in the active scope only.
    pub fn lookup_local(&self, name: &str) -> Option<ObjectId> {
        self.find_in_scope(self.current_scope?, name)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id)
    }

    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id)
    }

    pub fn current_scope(&self) -> Option<ScopeId> {
        self.current_scope
    }

    pub fn program(&self) -> Option<ObjectId> {
        self.program
    }

    pub fn globals(&self) -> &[ObjectId] {
        &self.globals
    }

    /// Parameters of a function or procedure, in declaration order.
    pub fn params(&self, routine: ObjectId) -> &[ObjectId] {
        match self.get(routine).map(|o| &o.kind) {
            Some(ObjectKind::Function(info)) => &info.params,
            Some(ObjectKind::Procedure(info)) => &info.params,
            _ => &[],
        }
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.scopes.is_empty() && self.globals.is_empty() && self.program.is_none()
    }

    /// Release the program, the built-ins, and everything they own.
    pub fn teardown(&mut self) {
        self.objects.clear();
        self.scopes.clear();
        self.globals.clear();
        self.program = None;
        self.current_scope = None;
    }

    // ========================================================================
    // Debug rendering
    // ========================================================================

    /// Render the program and every nested scope, one object per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        if let Some(program) = self.program {
            self.dump_object(&mut out, program, 0);
        }
        out
    }

    fn dump_object(&self, out: &mut String, id: ObjectId, depth: usize) {
        let Some(obj) = self.get(id) else {
            return;
        };
        let _ = writeln!(out, "{}{}", "    ".repeat(depth), self.describe(obj));
        if let Some(scope) = obj.scope().and_then(|s| self.scope(s)) {
            for &child in &scope.objects {
                self.dump_object(out, child, depth + 1);
            }
        }
    }

    fn describe(&self, obj: &Object) -> String {
        let name = &obj.name;
        match &obj.kind {
            ObjectKind::Program(_) => format!("Program {}", name),
            ObjectKind::Constant(info) => match &info.value {
                Some(value) => format!("Const {} = {}", name, value),
                None => format!("Const {}", name),
            },
            ObjectKind::Type(info) => match &info.actual {
                Some(ty) => format!("Type {} = {}", name, ty),
                None => format!("Type {}", name),
            },
            ObjectKind::Variable(info) => match &info.ty {
                Some(ty) => format!("Var {} : {}", name, ty),
                None => format!("Var {}", name),
            },
            ObjectKind::Function(info) => match &info.return_type {
                Some(ty) => format!("Function {} : {}", name, ty),
                None => format!("Function {}", name),
            },
            ObjectKind::Procedure(_) => format!("Procedure {}", name),
            ObjectKind::Parameter(info) => {
                let mode = match info.mode {
                    ParamMode::ByValue => "",
                    ParamMode::ByReference => "VAR ",
                };
                match &info.ty {
                    Some(ty) => format!("Param {}{} : {}", mode, name, ty),
                    None => format!("Param {}{}", mode, name),
                }
            }
        }
    }
}

/// A lexical scope: the objects declared directly in it, in declaration order.
#[derive(Debug, Clone)]
pub struct Scope {
    pub objects: Vec<ObjectId>,
    /// The program or routine this scope belongs to.
    pub owner: ObjectId,
    /// The lexically enclosing scope, `None` for the program scope and built-in routine scopes.
    pub outer: Option<ScopeId>,
}

/// A declared entity.
#[derive(Debug, Clone)]
pub struct Object {
    pub name: String,
    pub kind: ObjectKind,
}

impl Object {
    /// The nested scope owned by this object, if any.
    pub fn scope(&self) -> Option<ScopeId> {
        match &self.kind {
            ObjectKind::Program(info) => Some(info.scope),
            ObjectKind::Function(info) => Some(info.scope),
            ObjectKind::Procedure(info) => Some(info.scope),
            ObjectKind::Variable(info) => info.scope,
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            ObjectKind::Program(_) => "program",
            ObjectKind::Constant(_) => "constant",
            ObjectKind::Type(_) => "type",
            ObjectKind::Variable(_) => "variable",
            ObjectKind::Function(_) => "function",
            ObjectKind::Procedure(_) => "procedure",
            ObjectKind::Parameter(_) => "parameter",
        }
    }
}

/// Kind of object, with its kind-specific payload
#[derive(Debug, Clone)]
pub enum ObjectKind {
    Program(ProgramInfo),
    Constant(ConstantInfo),
    Type(TypeInfo),
    Variable(VariableInfo),
    Function(FunctionInfo),
    Procedure(ProcedureInfo),
    Parameter(ParameterInfo),
}

#[derive(Debug, Clone)]
pub struct ProgramInfo {
    pub scope: ScopeId,
}

#[derive(Debug, Clone)]
pub struct ConstantInfo {
    pub value: Option<ConstantValue>,
}

#[derive(Debug, Clone)]
pub struct TypeInfo {
    pub actual: Option<Type>,
}

#[derive(Debug, Clone)]
pub struct VariableInfo {
    pub ty: Option<Type>,
    /// Never populated by the current grammar.
    pub scope: Option<ScopeId>,
}

#[derive(Debug, Clone)]
pub struct FunctionInfo {
    pub params: Vec<ObjectId>,
    pub return_type: Option<Type>,
    pub scope: ScopeId,
}

#[derive(Debug, Clone)]
pub struct ProcedureInfo {
    pub params: Vec<ObjectId>,
    pub scope: ScopeId,
}

#[derive(Debug, Clone)]
pub struct ParameterInfo {
    pub mode: ParamMode,
    pub ty: Option<Type>,
    /// The function or procedure this parameter belongs to.
    pub owner: ObjectId,
}

/// How an argument is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    ByValue,
    ByReference,
}
