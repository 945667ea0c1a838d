//! Human-readable and JSON rendering of analyses.

use std::fmt::Write;

use nfcheck_core::dependency::{all_superkeys, subset_minimal_keys};
use nfcheck_core::schema::display::Braced;
use nfcheck_core::{Analysis, AttributeSet, NormalForm, Schema};

const RULE: &str = "***********************************";

/// Extra facts shown with `--verbose`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    pub superkeys: usize,
    /// Subset-minimal keys that are not candidate keys because a smaller key
    /// exists.
    pub excluded_keys: Vec<AttributeSet<String>>,
}

impl Diagnostics {
    #[must_use]
    pub fn new(schema: &Schema<String>, analysis: &Analysis<String>) -> Self {
        let excluded_keys = subset_minimal_keys(schema)
            .into_iter()
            .filter(|key| !analysis.candidate_keys.contains(key))
            .collect();
        Self {
            superkeys: all_superkeys(schema).len(),
            excluded_keys,
        }
    }
}

/// Name to show for a relation; unnamed relations are numbered from 1.
#[must_use]
pub fn relation_label(name: &str, index: usize) -> String {
    if name.is_empty() {
        format!("relation #{}", index + 1)
    } else {
        name.to_string()
    }
}

/// Render the text report for one relation.
#[must_use]
pub fn render_text(
    label: &str,
    schema: &Schema<String>,
    analysis: &Analysis<String>,
    diagnostics: Option<&Diagnostics>,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}\n\tTable Name {label}\n{RULE}");

    let _ = writeln!(out, "Attributes:\n\t{}", Braced(schema.attributes()));
    let _ = writeln!(out, "Functional dependencies:");
    if schema.dependencies().is_empty() {
        let _ = writeln!(out, "\t(none)");
    }
    for fd in schema.dependencies() {
        let _ = writeln!(out, "\t{fd}");
    }
    out.push('\n');

    let _ = writeln!(out, "Candidate keys:");
    for key in &analysis.candidate_keys {
        let _ = writeln!(out, "\t{}", Braced(key));
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "Prime attributes:\n\t{}\n",
        Braced(&analysis.prime_attributes)
    );
    let _ = writeln!(
        out,
        "Non-prime attributes:\n\t{}\n",
        Braced(&analysis.non_prime_attributes)
    );

    if let Some(diagnostics) = diagnostics {
        let _ = writeln!(out, "Superkeys: {}", diagnostics.superkeys);
        for key in &diagnostics.excluded_keys {
            let _ = writeln!(
                out,
                "note: {} is a minimal key but larger than the candidate keys; \
                 its attributes are not counted as prime",
                Braced(key)
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "The relation is assumed to be in 1NF.\n");

    for level in NormalForm::ALL {
        let _ = writeln!(out, "{level} status:");
        match analysis.verdict(level).violation() {
            None => {
                let _ = writeln!(out, "\tThe relation is in {level}");
            }
            Some(violation) => {
                let _ = writeln!(out, "\t{violation}");
            }
        }
    }

    let highest = analysis
        .highest_normal_form()
        .map_or_else(|| "1NF".to_string(), |level| level.to_string());
    let _ = writeln!(out, "\nHighest normal form: {highest}");

    out
}

/// Render the JSON report for one analyzed relation.
#[must_use]
pub fn render_json(
    file: &str,
    label: &str,
    analysis: &Analysis<String>,
    diagnostics: Option<&Diagnostics>,
) -> serde_json::Value {
    let mut value = serde_json::json!({
        "file": file,
        "relation": label,
        "ok": true,
        "highest_normal_form": analysis.highest_normal_form(),
        "analysis": analysis,
    });
    if let Some(diagnostics) = diagnostics {
        value["superkeys"] = serde_json::json!(diagnostics.superkeys);
        value["excluded_keys"] = serde_json::json!(diagnostics.excluded_keys);
    }
    value
}

/// Render the JSON report for a relation that could not be analyzed.
#[must_use]
pub fn render_json_error(file: &str, label: &str, error: &str) -> serde_json::Value {
    serde_json::json!({
        "file": file,
        "relation": label,
        "ok": false,
        "error": error,
    })
}
