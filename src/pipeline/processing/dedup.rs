use std::collections::HashSet;

use super::similarity::similarity;

/// Similarity score at or above which two names count as near-duplicates
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Accumulating index of every name already present in the merged catalog.
///
/// Iteration follows insertion order (catalog seed order, then acceptance
/// order), so duplicate reports are stable within a run. Exact repeats
/// are stored once.
#[derive(Debug, Clone, Default)]
pub struct KnownNames {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl KnownNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from the names already present in the catalog.
    pub fn seed<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut known = Self::new();
        for name in names {
            known.insert(&name);
        }
        known
    }

    /// Insert a name; returns false when it was already present verbatim.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Near-duplicate detection of candidate names against the known set.
///
/// Scans every known name per candidate; no blocking index. Catalogs stay
/// in the hundreds-to-thousands range, where the O(n * m) scan is fine.
pub struct DedupEngine {
    threshold: f64,
}

impl DedupEngine {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Return the first known name scoring at or above the threshold.
    ///
    /// First-match-wins over the set's iteration order. Which match gets
    /// reported only affects diagnostics; the duplicate decision is the
    /// same whichever qualifying name is hit first.
    pub fn find_duplicate<'a>(&self, name: &str, known: &'a KnownNames) -> Option<&'a str> {
        known
            .iter()
            .find(|existing| similarity(name, existing) >= self.threshold)
    }

    pub fn is_duplicate(&self, name: &str, known: &KnownNames) -> bool {
        self.find_duplicate(name, known).is_some()
    }
}

impl Default for DedupEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(names: &[&str]) -> KnownNames {
        KnownNames::seed(names.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_exact_name_is_duplicate() {
        let engine = DedupEngine::new();
        let names = known(&["Data Poisoning", "Model Inversion"]);
        assert_eq!(
            engine.find_duplicate("Model Inversion", &names),
            Some("Model Inversion")
        );
    }

    #[test]
    fn test_case_variant_is_duplicate() {
        let engine = DedupEngine::new();
        let names = known(&["Data Poisoning"]);
        assert!(engine.is_duplicate("data poisoning", &names));
    }

    #[test]
    fn test_dissimilar_name_is_not_duplicate() {
        let engine = DedupEngine::new();
        let names = known(&["Data Poisoning"]);
        assert_eq!(engine.find_duplicate("Reward Hacking", &names), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // similarity("abcd", "abcz") == 2 * 3 / 8 == 0.75
        let names = known(&["abcd"]);
        assert!(DedupEngine::with_threshold(0.75).is_duplicate("abcz", &names));
        assert!(!DedupEngine::with_threshold(0.7501).is_duplicate("abcz", &names));
    }

    #[test]
    fn test_first_match_wins_in_insertion_order() {
        let engine = DedupEngine::new();
        let names = known(&["Prompt Injections", "Prompt Injection"]);
        // Both qualify; the earlier-inserted name is reported.
        assert_eq!(
            engine.find_duplicate("Prompt Injection", &names),
            Some("Prompt Injections")
        );
    }

    #[test]
    fn test_empty_names_dedup_against_each_other() {
        let engine = DedupEngine::new();
        let names = known(&[""]);
        assert!(engine.is_duplicate("", &names));
        assert!(!engine.is_duplicate("Data Poisoning", &names));
    }

    #[test]
    fn test_insert_ignores_exact_repeats() {
        let mut names = KnownNames::new();
        assert!(names.insert("Data Poisoning"));
        assert!(!names.insert("Data Poisoning"));
        assert_eq!(names.len(), 1);
        // A different casing is a distinct entry; near-duplicate
        // classification happens at lookup time, not insert time.
        assert!(names.insert("data poisoning"));
        assert_eq!(names.len(), 2);
    }
}
