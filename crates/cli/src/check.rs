//! Per-relation analysis of one schema document.

use nfcheck_core::{Analysis, Schema};
use nfcheck_parser::parse_document;

use crate::report::{self, Diagnostics};

/// What happened to one relation of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationOutcome {
    Analyzed {
        label: String,
        schema: Schema<String>,
        analysis: Analysis<String>,
        diagnostics: Option<Diagnostics>,
    },
    /// Syntax or validation error; the relation was skipped.
    Invalid {
        label: String,
        line: usize,
        error: String,
    },
}

impl RelationOutcome {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Analyzed { label, .. } | Self::Invalid { label, .. } => label,
        }
    }
}

/// Parse `text` and analyze every relation that parses and validates.
///
/// A broken relation yields [`RelationOutcome::Invalid`] and does not stop
/// the relations after it.
#[must_use]
pub fn check_document(text: &str, verbose: bool) -> Vec<RelationOutcome> {
    parse_document(text)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let relation = match entry {
                Ok(relation) => relation,
                Err(e) => {
                    return RelationOutcome::Invalid {
                        label: report::relation_label("", index),
                        line: e.line,
                        error: e.to_string(),
                    };
                }
            };

            let label = report::relation_label(&relation.name, index);
            match relation.to_schema() {
                Ok(schema) => {
                    let analysis = schema.analyze();
                    let diagnostics = verbose.then(|| Diagnostics::new(&schema, &analysis));
                    RelationOutcome::Analyzed {
                        label,
                        schema,
                        analysis,
                        diagnostics,
                    }
                }
                Err(e) => RelationOutcome::Invalid {
                    label,
                    line: relation.line,
                    error: e.to_string(),
                },
            }
        })
        .collect()
}
