//! Schema and object file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use modelcheck_validator::{ModelSchema, Validator, ValidatorConfig, Value};

/// Top level of a schema file: model name to field rules.
pub type SchemaFile = IndexMap<String, ModelSchema>;

/// Reads a schema file. `.yaml` and `.yml` files are parsed as YAML,
/// everything else as JSON.
pub fn load_schema_file(path: &Path) -> Result<SchemaFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))?;

    let models = if is_yaml(path) {
        serde_yaml::from_str(&text).with_context(|| format!("invalid YAML schema in {}", path.display()))?
    } else {
        serde_json::from_str(&text).with_context(|| format!("invalid JSON schema in {}", path.display()))?
    };
    Ok(models)
}

/// Reads a JSON object file. `{"$date": "<RFC 3339>"}` becomes a date.
pub fn load_object(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read object file {}", path.display()))?;
    let json: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))?;
    Ok(Value::from(json))
}

/// Creates a validator with every model of `models` registered.
pub fn build_validator(models: SchemaFile, config: ValidatorConfig) -> Validator {
    let mut validator = Validator::with_config(config);
    for (name, schema) in models {
        tracing::debug!(model = %name, fields = schema.len(), "registering model");
        validator.register_model(name, schema);
    }
    validator
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
