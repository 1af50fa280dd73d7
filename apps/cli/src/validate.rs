//! `modelcheck validate`: validate object files against one model.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use modelcheck_validator::{LengthMode, ValidatorConfig, Validity};
use serde::Serialize;

use crate::exit;
use crate::load::{build_validator, load_object, load_schema_file};

/// Arguments for `modelcheck validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema file mapping model names to field rules (JSON or YAML).
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Model to validate against.
    #[arg(short, long)]
    pub model: String,

    /// JSON files holding the objects to validate.
    #[arg(required = true)]
    pub objects: Vec<PathBuf>,

    /// Print a JSON report instead of one line per file.
    #[arg(long)]
    pub json: bool,

    /// Measure string lengths in UTF-8 bytes instead of characters.
    #[arg(long)]
    pub count_bytes: bool,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    model: &'a str,
    results: Vec<FileResult>,
}

#[derive(Debug, Serialize)]
struct FileResult {
    file: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl FileResult {
    fn new(file: String, validity: &Validity) -> Self {
        let mut result = Self {
            file,
            status: "valid",
            field: None,
            rule: None,
            code: None,
            message: None,
        };
        match validity {
            Validity::Valid => {}
            Validity::Invalid(violation) => {
                result.status = "invalid";
                result.field = Some(violation.field.clone());
                result.rule = Some(violation.rule.clone());
            }
            Validity::Indeterminate(diagnostic) => {
                result.status = "indeterminate";
                result.code = Some(diagnostic.code());
                result.message = Some(diagnostic.to_string());
            }
        }
        result
    }
}

/// Runs `modelcheck validate`, writing the report to `out`.
///
/// Returns [`exit::INVALID`] if any object is invalid, otherwise
/// [`exit::INDETERMINATE`] if any could not be validated.
pub fn run_validate(args: &ValidateArgs, out: &mut dyn Write) -> Result<u8> {
    let config = ValidatorConfig {
        length_mode: if args.count_bytes {
            LengthMode::Bytes
        } else {
            LengthMode::Chars
        },
        ..ValidatorConfig::default()
    };
    let validator = build_validator(load_schema_file(&args.schema)?, config);

    let mut outcomes = Vec::with_capacity(args.objects.len());
    for path in &args.objects {
        let object = load_object(path)?;
        let validity = validator.validate(&args.model, &object);
        tracing::debug!(file = %path.display(), result = %validity, "validated object");
        outcomes.push((path.display().to_string(), validity));
    }

    if args.json {
        let report = Report {
            model: &args.model,
            results: outcomes
                .iter()
                .map(|(file, validity)| FileResult::new(file.clone(), validity))
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        for (file, validity) in &outcomes {
            writeln!(out, "{file}: {validity}")?;
        }
    }

    Ok(exit_code(outcomes.iter().map(|(_, validity)| validity)))
}

fn exit_code<'a>(outcomes: impl Iterator<Item = &'a Validity> + Clone) -> u8 {
    if outcomes.clone().any(Validity::is_invalid) {
        exit::INVALID
    } else if outcomes.into_iter().any(Validity::is_indeterminate) {
        exit::INDETERMINATE
    } else {
        exit::OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelcheck_validator::{Diagnostic, Violation};
    use pretty_assertions::assert_eq;

    fn invalid() -> Validity {
        Validity::Invalid(Violation {
            field: "counter".into(),
            rule: "max".into(),
        })
    }

    fn indeterminate() -> Validity {
        Validity::Indeterminate(Diagnostic::UnknownModel { model: "x".into() })
    }

    #[test]
    fn invalid_outranks_indeterminate() {
        assert_eq!(exit_code([Validity::Valid].iter()), exit::OK);
        assert_eq!(exit_code([Validity::Valid, indeterminate()].iter()), exit::INDETERMINATE);
        assert_eq!(exit_code([indeterminate(), invalid()].iter()), exit::INVALID);
    }

    #[test]
    fn json_result_fields() {
        let result = FileResult::new("a.json".into(), &invalid());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"file": "a.json", "status": "invalid", "field": "counter", "rule": "max"})
        );

        let result = FileResult::new("b.json".into(), &indeterminate());
        assert_eq!(serde_json::to_value(&result).unwrap()["code"], "unknown_model");
    }
}
