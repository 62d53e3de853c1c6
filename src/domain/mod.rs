use serde::{Deserialize, Serialize};

/// Canonical severity scale for merged risk records
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One risk entry in the merged catalog shape.
///
/// The `id` is globally unique for a run and encodes the source tag and
/// the record's 1-based position in that source's input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub taxonomy_id: String,
    pub tag: String,
    pub risk_category: String,
    pub severity: Severity,
    pub likelihood: String,
}

/// Identity of one imported taxonomy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaxonomyDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// On-disk bundle shape: one taxonomy descriptor plus its accepted records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaxonomyBundle {
    pub taxonomies: Vec<TaxonomyDescriptor>,
    pub risks: Vec<RiskRecord>,
}

impl TaxonomyBundle {
    pub fn new(descriptor: TaxonomyDescriptor, risks: Vec<RiskRecord>) -> Self {
        Self {
            taxonomies: vec![descriptor],
            risks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_record_serializes_camel_case() {
        let record = RiskRecord {
            id: "qube-ibm-0001".to_string(),
            name: "Prompt Injection".to_string(),
            description: "Adversarial instructions embedded in input".to_string(),
            taxonomy_id: "qube-legacy-ibm".to_string(),
            tag: "ibm".to_string(),
            risk_category: "Security".to_string(),
            severity: Severity::High,
            likelihood: "Likely".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["taxonomyId"], "qube-legacy-ibm");
        assert_eq!(json["riskCategory"], "Security");
        assert_eq!(json["severity"], "High");
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Critical.to_string(), "Critical");
        assert_eq!(Severity::Low.as_str(), "Low");
    }
}
