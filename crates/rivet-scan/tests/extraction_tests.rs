//! Extraction behavior over hand-built workspaces

use rivet_frontend::{
    FieldDecl, FunctionDecl, RecordDecl, SourceModule, TypeInfo, TypeKey, TypeRef, TypeShape,
    Workspace,
};
use rivet_scan::{collect_containers, collect_providers, Directive, ScanError};

fn named(key: &str) -> TypeRef {
    TypeRef::Resolved(TypeInfo {
        key: TypeKey::from(key),
        shape: TypeShape::Named,
    })
}

fn interface(key: &str) -> TypeRef {
    TypeRef::Resolved(TypeInfo {
        key: TypeKey::from(key),
        shape: TypeShape::Interface,
    })
}

fn builtin_error() -> TypeRef {
    TypeRef::Resolved(TypeInfo {
        key: TypeKey::from("error"),
        shape: TypeShape::Builtin,
    })
}

fn field(name: Option<&str>, type_expr: &str, ty: TypeRef, tag: Option<&str>) -> FieldDecl {
    FieldDecl {
        name: name.map(str::to_string),
        type_expr: type_expr.to_string(),
        ty,
        tag: tag.map(str::to_string),
        position: "app/main.go:10:2".to_string(),
    }
}

fn module_with_record(fields: Vec<FieldDecl>) -> Workspace {
    Workspace {
        modules: vec![SourceModule {
            path: "app".to_string(),
            name: "app".to_string(),
            functions: vec![],
            records: vec![RecordDecl {
                name: "Container".to_string(),
                fields,
                position: "app/main.go:8:1".to_string(),
            }],
        }],
    }
}

fn module_with_functions(functions: Vec<FunctionDecl>) -> Workspace {
    Workspace {
        modules: vec![SourceModule {
            path: "app/infra".to_string(),
            name: "infra".to_string(),
            functions,
            records: vec![],
        }],
    }
}

#[test]
fn test_unmarked_fields_are_invisible() {
    let ws = module_with_record(vec![
        field(Some("Database"), "infra.Database", named("app/infra.Database"), None),
        field(
            Some("Service"),
            "service.User",
            interface("app/service.User"),
            Some(r#"inject:"""#),
        ),
    ]);

    let containers = collect_containers(&ws).unwrap();
    assert_eq!(containers.len(), 1);
    assert_eq!(containers[0].fields.len(), 1);
    assert_eq!(containers[0].fields[0].name, "Service");
    assert_eq!(containers[0].fields[0].directive, Directive::ByType);
}

#[test]
fn test_record_without_marked_fields_is_not_a_container() {
    let ws = module_with_record(vec![field(
        Some("Database"),
        "infra.Database",
        named("app/infra.Database"),
        Some(r#"json:"database""#),
    )]);

    let containers = collect_containers(&ws).unwrap();
    assert!(containers.is_empty());
}

#[test]
fn test_marker_only_tag_without_value() {
    let ws = module_with_record(vec![field(
        Some("Service"),
        "service.User",
        interface("app/service.User"),
        Some("inject"),
    )]);

    let containers = collect_containers(&ws).unwrap();
    assert_eq!(containers[0].fields[0].directive, Directive::ByType);
}

#[test]
fn test_anonymous_field_uses_type_expression_as_name() {
    let ws = module_with_record(vec![
        field(
            None,
            "config.DatabaseConfig",
            named("app/config.DatabaseConfig"),
            Some(r#"inject:"provider:NewWriterDatabaseConfig""#),
        ),
        field(
            Some("Service"),
            "service.User",
            interface("app/service.User"),
            Some(r#"inject:"""#),
        ),
    ]);

    let containers = collect_containers(&ws).unwrap();
    let first = &containers[0].fields[0];
    assert_eq!(first.name, "config.DatabaseConfig");
    assert_eq!(
        first.directive,
        Directive::ByName("NewWriterDatabaseConfig".to_string())
    );
}

#[test]
fn test_blank_field_kept_only_when_marked() {
    let ws = module_with_record(vec![
        field(Some("_"), "infra.Database", named("app/infra.Database"), None),
        field(
            Some("_"),
            "config.DatabaseConfig",
            named("app/config.DatabaseConfig"),
            Some(r#"inject:"provider:NewWriterDatabaseConfig""#),
        ),
        field(
            Some("Service"),
            "service.User",
            interface("app/service.User"),
            Some(r#"inject:"""#),
        ),
    ]);

    let containers = collect_containers(&ws).unwrap();
    let names: Vec<&str> = containers[0].fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["_", "Service"]);
}

#[test]
fn test_tag_errors_are_collected_across_fields() {
    let ws = module_with_record(vec![
        field(
            Some("A"),
            "pkg.A",
            named("app/pkg.A"),
            Some(r#"inject:"scope:singleton""#),
        ),
        field(
            Some("B"),
            "pkg.B",
            named("app/pkg.B"),
            Some(r#"inject:"provider:""#),
        ),
    ]);

    let err = collect_containers(&ws).unwrap_err();
    match err {
        ScanError::Multiple(errs) => assert_eq!(errs.len(), 2),
        other => panic!("expected aggregated errors, got: {other}"),
    }
    // Both messages carry positions for navigation.
    let rendered = collect_containers(&ws).unwrap_err().to_string();
    assert!(rendered.contains("app/main.go:10:2"));
    assert!(rendered.contains("unknown directive key"));
    assert!(rendered.contains("provider requires a value"));
}

#[test]
fn test_empty_workspace_is_an_error() {
    let ws = Workspace { modules: vec![] };
    assert!(matches!(collect_containers(&ws), Err(ScanError::NoModules)));
    assert!(matches!(collect_providers(&ws), Err(ScanError::NoModules)));
}

fn function(name: &str, method: bool, params: Vec<TypeRef>, results: Vec<TypeRef>) -> FunctionDecl {
    FunctionDecl {
        name: name.to_string(),
        method,
        params,
        results,
        position: "app/infra/database.go:5:1".to_string(),
    }
}

#[test]
fn test_provider_eligibility() {
    let ws = module_with_functions(vec![
        // Eligible: one named result.
        function("NewDatabase", false, vec![], vec![named("app/infra.*Database")]),
        // Eligible: interface result.
        function("NewUser", false, vec![named("app/infra.*Database")], vec![interface("app/service.User")]),
        // Eligible: value + error pair.
        function("NewConfig", false, vec![], vec![named("app/config.Config"), builtin_error()]),
        // Not eligible: method.
        function("Close", true, vec![], vec![named("app/infra.*Database")]),
        // Not eligible: no results.
        function("Run", false, vec![], vec![]),
        // Not eligible: two non-error results.
        function("Pair", false, vec![], vec![named("app/pkg.A"), named("app/pkg.B")]),
        // Not eligible: bare built-in error.
        function("Validate", false, vec![], vec![builtin_error()]),
        // Not eligible: unsupported result shape.
        function(
            "NewList",
            false,
            vec![],
            vec![TypeRef::Resolved(TypeInfo {
                key: TypeKey::from("[]string"),
                shape: TypeShape::Other,
            })],
        ),
    ]);

    let providers = collect_providers(&ws).unwrap();
    let names: Vec<&str> = providers.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["NewDatabase", "NewUser", "NewConfig"]);

    let config = providers.iter().find(|p| p.name == "NewConfig").unwrap();
    assert!(config.may_fail);
    let database = providers.iter().find(|p| p.name == "NewDatabase").unwrap();
    assert!(!database.may_fail);
}

#[test]
fn test_unresolved_result_is_recorded_not_skipped() {
    let ws = module_with_functions(vec![function(
        "NewMystery",
        false,
        vec![],
        vec![TypeRef::Unresolved],
    )]);

    let providers = collect_providers(&ws).unwrap();
    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0].result, TypeRef::Unresolved);
}

#[test]
fn test_params_recorded_in_order() {
    let ws = module_with_functions(vec![function(
        "NewService",
        false,
        vec![named("app/pkg.A"), named("app/pkg.B")],
        vec![named("app/pkg.Service")],
    )]);

    let providers = collect_providers(&ws).unwrap();
    let keys: Vec<&str> = providers[0]
        .params
        .iter()
        .map(|p| p.key().unwrap().as_str())
        .collect();
    assert_eq!(keys, vec!["app/pkg.A", "app/pkg.B"]);
}
