//! Provider extraction
//!
//! A provider is a top-level, non-member function returning exactly one
//! value (optionally paired with the built-in error type). The result must
//! be a named type, a pointer to one, or an interface; a bare built-in
//! error is never a provider result. Declarations that do not fit are
//! skipped silently; they are ordinary functions, not errors.

use rivet_frontend::{FunctionDecl, SourceModule, TypeInfo, TypeRef, TypeShape, Workspace};

use crate::error::{ScanError, ScanResult};

/// A discovered provider function
#[derive(Debug, Clone)]
pub struct ProviderSpec {
    /// Module path of the declaring module
    pub module_path: String,
    /// Local name of the declaring module
    pub module_name: String,
    /// Function name
    pub name: String,
    /// Result type (may be unresolved; checked downstream)
    pub result: TypeRef,
    /// Whether the function also returns the built-in error
    pub may_fail: bool,
    /// Parameter types, in order (may be unresolved; checked downstream)
    pub params: Vec<TypeRef>,
    /// `file:line:column` of the declaration
    pub position: String,
}

/// Collect provider functions from a workspace.
pub fn collect_providers(ws: &Workspace) -> ScanResult<Vec<ProviderSpec>> {
    if ws.modules.is_empty() {
        return Err(ScanError::NoModules);
    }

    let mut out = Vec::new();
    for module in &ws.modules {
        for function in &module.functions {
            if let Some(spec) = collect_function(module, function) {
                out.push(spec);
            }
        }
    }

    tracing::debug!(providers = out.len(), "collected providers");
    Ok(out)
}

fn collect_function(module: &SourceModule, function: &FunctionDecl) -> Option<ProviderSpec> {
    if function.method || function.name.is_empty() {
        return None;
    }

    let (result, may_fail) = match function.results.as_slice() {
        [result] => (result, false),
        [result, TypeRef::Resolved(second)] if second.is_builtin_error() => (result, true),
        _ => return None,
    };

    // Unresolved results stay in: missing type information is a hard
    // per-item error raised during conversion, not a silent skip.
    if let Some(info) = result.info() {
        if !eligible_result(info) {
            return None;
        }
    }

    Some(ProviderSpec {
        module_path: module.path.clone(),
        module_name: module.name.clone(),
        name: function.name.clone(),
        result: result.clone(),
        may_fail,
        params: function.params.clone(),
        position: function.position.clone(),
    })
}

fn eligible_result(info: &TypeInfo) -> bool {
    if info.is_builtin_error() {
        return false;
    }
    matches!(
        info.shape,
        TypeShape::Named | TypeShape::Pointer | TypeShape::Interface
    )
}
