use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::Severity;

/// Legacy severity vocabulary mapped onto the canonical scale
static LEGACY_SEVERITY_MAP: Lazy<HashMap<&'static str, Severity>> = Lazy::new(|| {
    HashMap::from([
        ("Catastrophic", Severity::Critical),
        ("Major", Severity::High),
        ("Moderate", Severity::Medium),
        ("Minor", Severity::Low),
        ("Negligible", Severity::Low),
    ])
});

/// Map a legacy severity label onto the canonical scale.
///
/// Total: any label outside the table, including the empty string, falls
/// back to Medium. Lookup is case-sensitive, matching the legacy exports.
pub fn map_severity(raw: &str) -> Severity {
    LEGACY_SEVERITY_MAP
        .get(raw)
        .copied()
        .unwrap_or(Severity::Medium)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_map_to_canonical_scale() {
        assert_eq!(map_severity("Catastrophic"), Severity::Critical);
        assert_eq!(map_severity("Major"), Severity::High);
        assert_eq!(map_severity("Moderate"), Severity::Medium);
        assert_eq!(map_severity("Minor"), Severity::Low);
        assert_eq!(map_severity("Negligible"), Severity::Low);
    }

    #[test]
    fn test_unknown_labels_default_to_medium() {
        assert_eq!(map_severity("Severe"), Severity::Medium);
        assert_eq!(map_severity("catastrophic"), Severity::Medium);
        assert_eq!(map_severity("??"), Severity::Medium);
    }

    #[test]
    fn test_empty_label_defaults_to_medium() {
        assert_eq!(map_severity(""), Severity::Medium);
    }
}
