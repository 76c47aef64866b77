//! Container extraction
//!
//! A container is a record type with at least one `inject`-marked field.
//! Fields without the marker are invisible to resolution; blank (`_`)
//! fields are kept only when marked, in which case they act as
//! directive-driven overrides rather than struct members.

use rivet_frontend::{FieldDecl, RecordDecl, SourceModule, TypeRef, Workspace};

use crate::error::{ScanError, ScanResult};
use crate::tags::{self, Directive};

/// The blank field placeholder
pub const BLANK_FIELD: &str = "_";

/// A discovered container record
#[derive(Debug, Clone)]
pub struct ContainerSpec {
    /// Module path of the declaring module
    pub module_path: String,
    /// Local name of the declaring module
    pub module_name: String,
    /// Record name
    pub name: String,
    /// `file:line:column` of the record
    pub position: String,
    /// Marked fields, in declaration order
    pub fields: Vec<FieldSpec>,
}

impl ContainerSpec {
    /// Qualified `module.Name` form for diagnostics
    pub fn qualified_name(&self) -> String {
        if self.module_path.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.module_path, self.name)
        }
    }
}

/// A marked field within a container
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name; anonymous fields use their type expression, the blank
    /// placeholder stays `_`
    pub name: String,
    /// Source spelling of the field type
    pub type_expr: String,
    /// Resolved field type (checked downstream)
    pub ty: TypeRef,
    /// Parsed injection directive
    pub directive: Directive,
    /// `file:line:column` of the field
    pub position: String,
}

/// Collect container records from a workspace.
///
/// Per-field tag errors are collected across all modules and reported
/// together rather than aborting on the first one.
pub fn collect_containers(ws: &Workspace) -> ScanResult<Vec<ContainerSpec>> {
    if ws.modules.is_empty() {
        return Err(ScanError::NoModules);
    }

    let mut out = Vec::new();
    let mut errors = Vec::new();

    for module in &ws.modules {
        for record in &module.records {
            match collect_record(module, record) {
                Ok(Some(spec)) => out.push(spec),
                Ok(None) => {}
                Err(mut errs) => errors.append(&mut errs),
            }
        }
    }

    if !errors.is_empty() {
        return Err(ScanError::multiple(errors));
    }

    tracing::debug!(containers = out.len(), "collected containers");
    Ok(out)
}

fn collect_record(
    module: &SourceModule,
    record: &RecordDecl,
) -> Result<Option<ContainerSpec>, Vec<ScanError>> {
    let mut fields = Vec::new();
    let mut errors = Vec::new();

    for field in &record.fields {
        match collect_field(field) {
            Ok(Some(spec)) => fields.push(spec),
            Ok(None) => {}
            Err(err) => errors.push(err),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    if fields.is_empty() {
        // Not a container; records opt in via marked fields.
        return Ok(None);
    }

    Ok(Some(ContainerSpec {
        module_path: module.path.clone(),
        module_name: module.name.clone(),
        name: record.name.clone(),
        position: record.position.clone(),
        fields,
    }))
}

fn collect_field(field: &FieldDecl) -> Result<Option<FieldSpec>, ScanError> {
    let tag = match &field.tag {
        Some(tag) => tag,
        None => return Ok(None),
    };
    let value = match tags::lookup(tag, "inject") {
        Some(value) => value.unwrap_or_default(),
        None => return Ok(None),
    };

    let directive = tags::parse_directive(&value).map_err(|source| ScanError::InvalidTag {
        position: field.position.clone(),
        source,
    })?;

    // Anonymous fields take their type expression as their name so they can
    // still carry overrides.
    let name = match &field.name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => field.type_expr.clone(),
    };

    Ok(Some(FieldSpec {
        name,
        type_expr: field.type_expr.clone(),
        ty: field.ty.clone(),
        directive,
        position: field.position.clone(),
    }))
}
