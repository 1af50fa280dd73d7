//! `modelcheck check-schema`: list models and the rules no checker handles.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use modelcheck_validator::Validator;

use crate::exit;
use crate::load::load_schema_file;

/// Arguments for `modelcheck check-schema`.
#[derive(Args, Debug)]
pub struct CheckSchemaArgs {
    /// Schema file mapping model names to field rules (JSON or YAML).
    #[arg(short, long)]
    pub schema: PathBuf,
}

/// Runs `modelcheck check-schema`, writing one line per model followed by
/// its findings.
///
/// Returns [`exit::INVALID`] if any model uses an unknown rule or type.
pub fn run_check_schema(args: &CheckSchemaArgs, out: &mut dyn Write) -> Result<u8> {
    let models = load_schema_file(&args.schema)?;
    let validator = Validator::new();

    let mut findings = 0;
    for (name, schema) in &models {
        let found = validator.audit(schema);
        writeln!(out, "{name}: {} field(s)", schema.len())?;
        for diagnostic in &found {
            writeln!(out, "  {}: {diagnostic}", diagnostic.code())?;
        }
        findings += found.len();
    }

    if findings == 0 {
        writeln!(out, "ok: {} model(s)", models.len())?;
        Ok(exit::OK)
    } else {
        writeln!(out, "{findings} finding(s)")?;
        Ok(exit::INVALID)
    }
}
