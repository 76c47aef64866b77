//! Conversion from extracted specs into the resolution model
//!
//! This is where "unresolved type" stops being a marker and becomes a hard
//! per-item error. Errors are collected across all items of one spec and
//! joined, so a single report covers everything that is wrong.

use rivet_scan::{ContainerSpec, ProviderSpec};

use crate::error::{ResolveError, ResolveResult};
use crate::model::{Container, ContainerField, FieldName, Provider};

/// Convert a scanned container into a resolution-ready [`Container`].
pub fn convert_container(spec: &ContainerSpec) -> ResolveResult<Container> {
    let mut fields = Vec::new();
    let mut errors = Vec::new();

    for field in &spec.fields {
        let ty = match field.ty.key() {
            Some(key) => key.clone(),
            None => {
                errors.push(ResolveError::MissingTypeInfo {
                    position: field.position.clone(),
                    what: format!("field {}", field.name),
                });
                continue;
            }
        };

        let name = if field.name == "_" {
            FieldName::Blank
        } else {
            FieldName::Named(field.name.clone())
        };

        fields.push(ContainerField {
            name,
            ty,
            directive: field.directive.clone(),
            position: field.position.clone(),
        });
    }

    if !errors.is_empty() {
        return Err(ResolveError::multiple(errors));
    }

    Ok(Container {
        module_path: spec.module_path.clone(),
        module_name: spec.module_name.clone(),
        name: spec.name.clone(),
        position: spec.position.clone(),
        fields,
    })
}

/// Convert scanned providers into resolution-ready [`Provider`]s.
pub fn convert_providers(specs: &[ProviderSpec]) -> ResolveResult<Vec<Provider>> {
    let mut out = Vec::new();
    let mut errors = Vec::new();

    for spec in specs {
        let result = match spec.result.key() {
            Some(key) => key.clone(),
            None => {
                errors.push(ResolveError::MissingTypeInfo {
                    position: spec.position.clone(),
                    what: format!("provider {}", spec.name),
                });
                continue;
            }
        };

        let mut params = Vec::with_capacity(spec.params.len());
        let mut params_ok = true;
        for (i, param) in spec.params.iter().enumerate() {
            match param.key() {
                Some(key) => params.push(key.clone()),
                None => {
                    errors.push(ResolveError::MissingTypeInfo {
                        position: spec.position.clone(),
                        what: format!("parameter {} of provider {}", i + 1, spec.name),
                    });
                    params_ok = false;
                }
            }
        }
        if !params_ok {
            continue;
        }

        out.push(Provider {
            module_path: spec.module_path.clone(),
            module_name: spec.module_name.clone(),
            name: spec.name.clone(),
            result,
            params,
            may_fail: spec.may_fail,
            position: spec.position.clone(),
        });
    }

    if !errors.is_empty() {
        return Err(ResolveError::multiple(errors));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rivet_frontend::{TypeInfo, TypeKey, TypeRef, TypeShape};
    use rivet_scan::{Directive, FieldSpec};

    fn resolved(key: &str) -> TypeRef {
        TypeRef::Resolved(TypeInfo {
            key: TypeKey::from(key),
            shape: TypeShape::Named,
        })
    }

    fn field_spec(name: &str, ty: TypeRef) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            type_expr: "pkg.T".to_string(),
            ty,
            directive: Directive::ByType,
            position: "app/main.go:4:2".to_string(),
        }
    }

    #[test]
    fn test_convert_container_maps_blank_fields() {
        let spec = ContainerSpec {
            module_path: "app".to_string(),
            module_name: "main".to_string(),
            name: "Container".to_string(),
            position: "app/main.go:3:1".to_string(),
            fields: vec![
                field_spec("_", resolved("app/config.Config")),
                field_spec("Service", resolved("app/service.User")),
            ],
        };

        let container = convert_container(&spec).unwrap();
        assert!(container.fields[0].name.is_blank());
        assert_eq!(
            container.fields[1].name,
            FieldName::Named("Service".to_string())
        );
    }

    #[test]
    fn test_convert_container_missing_type_info() {
        let spec = ContainerSpec {
            module_path: "app".to_string(),
            module_name: "main".to_string(),
            name: "Container".to_string(),
            position: "app/main.go:3:1".to_string(),
            fields: vec![
                field_spec("A", TypeRef::Unresolved),
                field_spec("B", TypeRef::Unresolved),
            ],
        };

        let err = convert_container(&spec).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("type information is missing for field A"));
        assert!(rendered.contains("type information is missing for field B"));
        assert!(rendered.contains("app/main.go:4:2"));
    }

    #[test]
    fn test_convert_providers_missing_param_type() {
        let spec = ProviderSpec {
            module_path: "app/service".to_string(),
            module_name: "service".to_string(),
            name: "NewUser".to_string(),
            result: resolved("app/service.User"),
            may_fail: false,
            params: vec![TypeRef::Unresolved],
            position: "app/service/user.go:9:1".to_string(),
        };

        let err = convert_providers(&[spec]).unwrap_err();
        assert!(err
            .to_string()
            .contains("parameter 1 of provider NewUser"));
    }
}
