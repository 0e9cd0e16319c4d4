// src/sources.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display metadata for a job portal badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBadge {
    pub name: String,
    pub color: String,
    pub text_color: String,
}

impl SourceBadge {
    fn new(name: &str, color: &str, text_color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            text_color: text_color.to_string(),
        }
    }
}

/// Immutable lookup table from portal keys to display badges.
///
/// Built once at startup and injected wherever badges are resolved, so tests
/// can substitute their own table. Lookups never fail: keys absent from the
/// table resolve to a generic "Other" badge.
#[derive(Debug, Clone)]
pub struct SourceCatalog {
    entries: HashMap<String, SourceBadge>,
    fallback: SourceBadge,
}

impl SourceCatalog {
    pub fn new(entries: HashMap<String, SourceBadge>, fallback: SourceBadge) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, badge)| (key.to_uppercase(), badge))
            .collect();
        Self { entries, fallback }
    }

    /// Resolve a portal key to its badge. `None` and unknown keys both get
    /// the fallback badge.
    pub fn badge(&self, key: Option<&str>) -> &SourceBadge {
        key.and_then(|k| self.entries.get(&k.to_uppercase()))
            .unwrap_or(&self.fallback)
    }

    /// Display names of all known portals, sorted, for filter dropdowns.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.values().map(|b| b.name.clone()).collect();
        names.sort();
        names
    }
}

impl Default for SourceCatalog {
    fn default() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "LINKEDIN".to_string(),
            SourceBadge::new("LinkedIn", "#0a66c2", "#ffffff"),
        );
        entries.insert(
            "GETONBRD".to_string(),
            SourceBadge::new("Get on Board", "#2f3542", "#ffffff"),
        );
        entries.insert(
            "TRABAJANDO".to_string(),
            SourceBadge::new("Trabajando.com", "#e17055", "#ffffff"),
        );
        entries.insert(
            "COMPUTRABAJO".to_string(),
            SourceBadge::new("CompuTrabajo", "#00549f", "#ffffff"),
        );
        entries.insert(
            "CHILETRABAJOS".to_string(),
            SourceBadge::new("Chiletrabajos", "#0984e3", "#ffffff"),
        );
        entries.insert(
            "SISTEMA".to_string(),
            SourceBadge::new("Sistema", "#636e72", "#ffffff"),
        );
        Self::new(entries, SourceBadge::new("Other", "#b2bec3", "#2d3436"))
    }
}

/// Known posting categories, used to populate the category filter.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Planner",
    "Product Manager",
    "CPFR",
    "Demand Planning",
    "Supply Chain",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_key_case_insensitively() {
        let catalog = SourceCatalog::default();
        assert_eq!(catalog.badge(Some("LINKEDIN")).name, "LinkedIn");
        assert_eq!(catalog.badge(Some("linkedin")).name, "LinkedIn");
    }

    #[test]
    fn unknown_or_missing_key_gets_fallback() {
        let catalog = SourceCatalog::default();
        assert_eq!(catalog.badge(Some("MYSTERYBOARD")).name, "Other");
        assert_eq!(catalog.badge(None).name, "Other");
    }

    #[test]
    fn names_lists_known_portals_sorted() {
        let names = SourceCatalog::default().names();
        assert!(names.contains(&"LinkedIn".to_string()));
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn custom_table_can_be_injected() {
        let mut entries = HashMap::new();
        entries.insert(
            "TEST".to_string(),
            SourceBadge::new("Test Portal", "#000000", "#ffffff"),
        );
        let catalog = SourceCatalog::new(entries, SourceBadge::new("N/A", "#fff", "#000"));
        assert_eq!(catalog.badge(Some("test")).name, "Test Portal");
        assert_eq!(catalog.badge(Some("OTHER")).name, "N/A");
    }
}
