//! Integration tests for the CLI commands.

use std::fs;
use std::path::PathBuf;

use cube_cli::cli::{CheckArgs, DimensionsArgs, OutputFormatArg};
use cube_cli::commands::{run_check, run_dimensions, types_table};
use cube_cli::config::Config;
use cube_model::CanonicalType;
use tempfile::TempDir;

const MODELS: &str = r#"{
  "orders": [
    {"name": "id", "description": "", "data_type": "NUMBER(38,0)", "tags": ["primary_key"], "meta": {}},
    {"name": "created_at", "description": "Created timestamp", "data_type": "TIMESTAMP_NTZ", "tags": [], "meta": {}}
  ],
  "regions": [
    {"name": "code", "data_type": null, "meta": null},
    {"name": "shape", "data_type": "POLYGON"},
    {"name": "area", "data_type": "HUGEINT"}
  ]
}"#;

fn write_models(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("models.json");
    fs::write(&path, MODELS).unwrap();
    path
}

fn dimensions_args(file: PathBuf, model: &str, column: Option<&str>) -> DimensionsArgs {
    DimensionsArgs {
        file,
        model: model.to_string(),
        column: column.map(str::to_string),
        indent: None,
        format: OutputFormatArg::Yaml,
    }
}

#[test]
fn dimensions_for_single_column_uses_config_indent() {
    let dir = TempDir::new().unwrap();
    let args = dimensions_args(write_models(&dir), "orders", Some("id"));
    let text = run_dimensions(&args, &Config::default()).unwrap();
    assert_eq!(
        text,
        "name: id\n        sql: id\n        type: number\n        primary_key: true"
    );
}

#[test]
fn dimensions_indent_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let mut args = dimensions_args(write_models(&dir), "orders", Some("created_at"));
    args.indent = Some(2);
    let text = run_dimensions(&args, &Config::default()).unwrap();
    assert_eq!(
        text,
        "name: created_at\n  description: Created timestamp\n  sql: created_at\n  type: time"
    );
}

#[test]
fn dimensions_as_json() {
    let dir = TempDir::new().unwrap();
    let mut args = dimensions_args(write_models(&dir), "orders", None);
    args.format = OutputFormatArg::Json;
    let text = run_dimensions(&args, &Config::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"name": "id", "sql": "id", "type": "number", "primary_key": true},
            {"name": "created_at", "description": "Created timestamp", "sql": "created_at", "type": "time"}
        ])
    );
}

#[test]
fn dimensions_unknown_model_and_column() {
    let dir = TempDir::new().unwrap();
    let file = write_models(&dir);

    let err = run_dimensions(&dimensions_args(file.clone(), "users", None), &Config::default())
        .unwrap_err();
    assert!(err.to_string().contains("available: orders, regions"));

    let err = run_dimensions(
        &dimensions_args(file, "orders", Some("missing")),
        &Config::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("no column 'missing'"));
}

#[test]
fn dimensions_fail_on_unknown_type() {
    let dir = TempDir::new().unwrap();
    let args = dimensions_args(write_models(&dir), "regions", None);
    let err = run_dimensions(&args, &Config::default()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("regions.shape: POLYGON"));
    assert!(message.contains("regions.area: HUGEINT"));
}

#[test]
fn check_aggregates_errors_across_models() {
    let dir = TempDir::new().unwrap();
    let args = CheckArgs {
        file: write_models(&dir),
    };
    let result = run_check(&args, &Config::default()).unwrap();
    assert_eq!(result.models.len(), 2);
    assert_eq!(result.models[0].model, "orders");
    assert!(result.models[0].errors.is_empty());
    assert_eq!(result.models[1].columns, 3);
    assert_eq!(result.error_count(), 2);
    assert!(result.has_errors());
}

#[test]
fn check_with_config_overrides() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("cube-dbt.toml");
    fs::write(
        &config_path,
        "[render]\nindent = 4\n\n[types]\npolygon = \"geo\"\nhugeint = \"number\"\n",
    )
    .unwrap();
    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.render.indent, 4);
    assert_eq!(
        config.type_mappings.resolve("Polygon"),
        Some(CanonicalType::Geo)
    );

    let args = CheckArgs {
        file: write_models(&dir),
    };
    let result = run_check(&args, &config).unwrap();
    assert!(!result.has_errors());
}

#[test]
fn null_meta_does_not_fail_the_file() {
    let dir = TempDir::new().unwrap();
    let mut args = dimensions_args(write_models(&dir), "regions", Some("code"));
    args.indent = Some(0);
    let text = run_dimensions(&args, &Config::default()).unwrap();
    assert_eq!(text, "name: code\nsql: code\ntype: string");
}

#[test]
fn missing_column_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let args = CheckArgs {
        file: dir.path().join("nope.json"),
    };
    let err = run_check(&args, &Config::default()).unwrap_err();
    assert!(format!("{err:#}").contains("nope.json"));
}

#[test]
fn types_table_lists_overrides_first() {
    let mut config = Config::default();
    config.type_mappings.insert("hugeint", CanonicalType::Number);
    let rendered = types_table(&config).to_string();
    let hugeint = rendered.find("hugeint").unwrap();
    let varchar = rendered.find("varchar").unwrap();
    assert!(hugeint < varchar);
    assert!(rendered.contains("geography"));
    assert!(rendered.contains("Source"));
}

#[test]
fn types_table_without_overrides_has_no_source_column() {
    let rendered = types_table(&Config::default()).to_string();
    assert!(rendered.contains("varchar"));
    assert!(!rendered.contains("Source"));
    assert!(!rendered.contains("built-in"));
}
