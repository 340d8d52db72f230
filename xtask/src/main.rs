//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use emailfmt_types::{CheckId, Outcome};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(PathBuf::from)
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(emailfmt_types::EmailfmtReportV1)
}

fn generate_validation_schema() -> schemars::Schema {
    schema_for!(emailfmt_types::ValidationReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(emailfmt_settings::EmailfmtConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "emailfmt.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "emailfmt.validation.v1.json",
            generate: generate_validation_schema,
        },
        SchemaSpec {
            filename: "emailfmt.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Validate every golden report under tests/fixtures against the generated report schema.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema()).context("serialize schema")?;
    let compiled = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {}", e))?;

    let mut checked = 0;
    let mut errors = Vec::new();

    let dir = fixtures_dir();
    for entry in fs::read_dir(&dir).with_context(|| format!("read {}", dir.display()))? {
        let fixture_dir = entry?.path();
        let golden = fixture_dir.join("expected.report.json");
        if !golden.exists() {
            continue;
        }
        let name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let text = fs::read_to_string(&golden)
            .with_context(|| format!("Failed to read {}", golden.display()))?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", golden.display()))?;

        for err in compiled.iter_errors(&value) {
            errors.push(format!("fixture '{}': {}", name, err));
        }
        checked += 1;
    }

    if !errors.is_empty() {
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance failed with {} errors", errors.len());
    }
    if checked == 0 {
        bail!("No golden reports found under {}", dir.display());
    }

    println!("✓ {} golden reports conform to emailfmt.report.v1", checked);
    Ok(())
}

/// Every check has an explanation, and its examples actually fail and pass.
fn explain_coverage() -> anyhow::Result<()> {
    let mut errors = Vec::new();

    for id in CheckId::ALL {
        let Some(exp) = emailfmt_types::explain::lookup_explanation(id.as_str()) else {
            errors.push(format!("Check id '{}' has no explanation", id));
            continue;
        };
        if exp.title.is_empty() || exp.description.is_empty() || exp.remediation.is_empty() {
            errors.push(format!("Check id '{}' has an empty explanation field", id));
        }

        let before = emailfmt_domain::validate(exp.examples.before);
        if before.outcome(id) != Outcome::Fail {
            errors.push(format!(
                "Check id '{}': invalid example {:?} does not fail the check",
                id, exp.examples.before
            ));
        }
        let after = emailfmt_domain::validate(exp.examples.after);
        if !after.is_valid() {
            errors.push(format!(
                "Check id '{}': valid example {:?} is rejected: {:?}",
                id,
                exp.examples.after,
                after.error_messages()
            ));
        }
    }

    if errors.is_empty() {
        println!("✓ {} check ids have explanations", CheckId::ALL.len());
        println!("✓ every example pair fails and passes as documented");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate golden reports against the report schema");
    eprintln!("  explain-coverage  Validate every check id has a working explanation");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            println!("{}", emailfmt_types::SCHEMA_REPORT_V1);
            println!("{}", emailfmt_settings::SCHEMA_CONFIG_V1);
            for spec in schema_specs() {
                println!("{}", spec.filename);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
