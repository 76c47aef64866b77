//! Blank-field overrides wired through the whole pipeline
//!
//! A container declares two candidate config constructors and uses a blank
//! field directive to pick the reader variant for every consumer.

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use rivet_cli::commands::generate;

fn named(key: &str) -> serde_json::Value {
    json!({"kind": "resolved", "type": {"key": key, "shape": "named"}})
}

fn pointer(key: &str) -> serde_json::Value {
    json!({"kind": "resolved", "type": {"key": key, "shape": "pointer"}})
}

fn interface(key: &str) -> serde_json::Value {
    json!({"kind": "resolved", "type": {"key": key, "shape": "interface"}})
}

#[test]
fn test_override_selects_reader_config_everywhere() {
    let dir = TempDir::new().unwrap();
    let app_dir = dir.path().join("app");
    fs::create_dir_all(&app_dir).unwrap();
    let app = app_dir.display().to_string();

    let modules = json!([
        {
            "path": "example/config",
            "name": "config",
            "functions": [
                {
                    "name": "NewWriterDatabaseConfig",
                    "method": false,
                    "params": [],
                    "results": [named("example/config.DatabaseConfig")],
                    "position": "example/config/database_config.go:5:1",
                },
                {
                    "name": "NewReaderDatabaseConfig",
                    "method": false,
                    "params": [],
                    "results": [named("example/config.DatabaseConfig")],
                    "position": "example/config/database_config.go:11:1",
                },
            ],
        },
        {
            "path": "example/infra",
            "name": "infra",
            "functions": [{
                "name": "NewDatabase",
                "method": false,
                "params": [named("example/config.DatabaseConfig")],
                "results": [pointer("*example/infra.Database")],
                "position": "example/infra/database.go:9:1",
            }],
        },
        {
            "path": "example/service",
            "name": "service",
            "functions": [{
                "name": "NewUser",
                "method": false,
                "params": [pointer("*example/infra.Database")],
                "results": [interface("example/service.User")],
                "position": "example/service/user_service.go:27:1",
            }],
        },
        {
            "path": "example/app",
            "name": "main",
            "records": [{
                "name": "Container",
                "position": format!("{app}/main.go:8:1"),
                "fields": [
                    {
                        "name": "_",
                        "type_expr": "config.DatabaseConfig",
                        "ty": named("example/config.DatabaseConfig"),
                        "tag": "inject:\"provider:config.NewReaderDatabaseConfig\"",
                        "position": format!("{app}/main.go:9:2"),
                    },
                    {
                        "name": "UserService",
                        "type_expr": "service.User",
                        "ty": interface("example/service.User"),
                        "tag": "inject:\"\"",
                        "position": format!("{app}/main.go:10:2"),
                    },
                ],
            }],
        },
    ]);

    let snapshot = dir.path().join("snapshot.json");
    fs::write(&snapshot, serde_json::to_vec(&json!({ "modules": modules })).unwrap()).unwrap();

    generate::run("rivet_gen.go", &[snapshot]).unwrap();

    let generated = fs::read_to_string(app_dir.join("rivet_gen.go")).unwrap();
    assert!(generated.contains("v0 := config.NewReaderDatabaseConfig()"));
    assert!(generated.contains("v1 := infra.NewDatabase(v0)"));
    assert!(generated.contains("v2 := service.NewUser(v1)"));
    assert!(generated.contains("UserService: v2,"));
    assert!(!generated.contains("NewWriterDatabaseConfig"));
    // The blank field contributes the override but never a struct member.
    assert!(!generated.contains("_:"));
}
