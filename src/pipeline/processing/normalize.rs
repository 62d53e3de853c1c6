use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::severity::map_severity;
use crate::domain::RiskRecord;

/// Namespace prefixed onto every generated identifier
pub const ID_NAMESPACE: &str = "qube";

fn default_summary_key() -> String {
    "Summary".to_string()
}

fn default_description_key() -> String {
    "Description".to_string()
}

fn default_category_key() -> String {
    "Risk Category".to_string()
}

fn default_severity_key() -> String {
    "Risk Severity".to_string()
}

fn default_likelihood_key() -> String {
    "Likelihood".to_string()
}

/// Which raw key supplies each canonical field for one legacy source.
///
/// Sources differ only in vocabulary; adding a source means supplying a
/// new mapping in its registry config, not new code. The defaults match
/// the common legacy export shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMap {
    #[serde(default = "default_summary_key")]
    pub summary: String,
    #[serde(default = "default_description_key")]
    pub description: String,
    #[serde(default = "default_category_key")]
    pub category: String,
    #[serde(default = "default_severity_key")]
    pub severity: String,
    #[serde(default = "default_likelihood_key")]
    pub likelihood: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            summary: default_summary_key(),
            description: default_description_key(),
            category: default_category_key(),
            severity: default_severity_key(),
            likelihood: default_likelihood_key(),
        }
    }
}

impl FieldMap {
    fn get_str<'a>(record: &'a Value, key: &str, default: &'a str) -> &'a str {
        record.get(key).and_then(Value::as_str).unwrap_or(default)
    }

    /// The dedup key. Absent summaries degrade to the empty string.
    pub fn summary_of<'a>(&self, record: &'a Value) -> &'a str {
        Self::get_str(record, &self.summary, "")
    }

    pub fn description_of<'a>(&self, record: &'a Value) -> &'a str {
        Self::get_str(record, &self.description, "")
    }

    pub fn category_of<'a>(&self, record: &'a Value) -> &'a str {
        Self::get_str(record, &self.category, "")
    }

    /// Raw severity label, defaulted before mapping onto the canonical scale.
    pub fn severity_of<'a>(&self, record: &'a Value) -> &'a str {
        Self::get_str(record, &self.severity, "Moderate")
    }

    /// Likelihood is free text and stays verbatim; it is never severity-mapped.
    pub fn likelihood_of<'a>(&self, record: &'a Value) -> &'a str {
        Self::get_str(record, &self.likelihood, "Possible")
    }
}

/// Convert one raw legacy record into the canonical catalog shape.
///
/// Pure and total: missing fields degrade to defaults rather than erroring.
/// `ordinal` is the record's 1-based position in its source's input order
/// and is assigned before dedup, so dropped duplicates leave gaps in the
/// surviving id sequence.
pub fn normalize(raw: &Value, fields: &FieldMap, tag: &str, ordinal: usize) -> RiskRecord {
    RiskRecord {
        id: format!("{}-{}-{:04}", ID_NAMESPACE, tag, ordinal),
        name: fields.summary_of(raw).to_string(),
        description: fields.description_of(raw).to_string(),
        taxonomy_id: taxonomy_id(tag),
        tag: tag.to_string(),
        risk_category: fields.category_of(raw).to_string(),
        severity: map_severity(fields.severity_of(raw)),
        likelihood: fields.likelihood_of(raw).to_string(),
    }
}

/// Taxonomy identifier for a legacy source tag
pub fn taxonomy_id(tag: &str) -> String {
    format!("{}-legacy-{}", ID_NAMESPACE, tag)
}
