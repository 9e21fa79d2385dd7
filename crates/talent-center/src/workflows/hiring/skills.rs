use serde::{Deserialize, Serialize};

/// Identity used to deduplicate skills: lowercase with whitespace runs folded into `-`.
pub fn skill_key(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Ordered, deduplicated list of skill labels.
///
/// Two labels with the same [`skill_key`] are the same skill; the casing of the first
/// insertion is the one kept for display. Labels outside the role catalog are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
    labels: Vec<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a label, returning `false` when it is blank or already present.
    pub fn insert(&mut self, label: &str) -> bool {
        let trimmed = label.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.labels.push(trimmed.to_string());
        true
    }

    pub fn remove(&mut self, label: &str) -> bool {
        let key = skill_key(label);
        let before = self.labels.len();
        self.labels.retain(|existing| skill_key(existing) != key);
        self.labels.len() != before
    }

    pub fn contains(&self, label: &str) -> bool {
        let key = skill_key(label);
        self.labels.iter().any(|existing| skill_key(existing) == key)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for label in iter {
            set.insert(label.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(value: SkillSet) -> Self {
        value.labels
    }
}

/// Skill picker state for the role step.
///
/// Mirrors the chip interactions offered to the client: toggling suggested skills,
/// typing custom ones, removing chips and taking every suggestion at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSelection {
    selected: SkillSet,
}

impl SkillSelection {
    pub fn from_existing(skills: Option<&SkillSet>) -> Self {
        Self {
            selected: skills.cloned().unwrap_or_default(),
        }
    }

    /// Selects the skill when absent, deselects it otherwise.
    pub fn toggle(&mut self, label: &str) {
        if !self.selected.remove(label) {
            self.selected.insert(label);
        }
    }

    /// Adds free text typed by the client. Blank input and duplicates are ignored.
    pub fn add_custom(&mut self, label: &str) -> bool {
        self.selected.insert(label)
    }

    pub fn remove(&mut self, label: &str) -> bool {
        self.selected.remove(label)
    }

    /// Replaces the selection with every suggested skill for the role.
    pub fn select_all(&mut self, suggestions: &[&str]) {
        self.selected = suggestions.iter().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn selected(&self) -> &SkillSet {
        &self.selected
    }

    /// Skills to store, or `None` when nothing is selected.
    pub fn into_submission(self) -> Option<SkillSet> {
        if self.selected.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_case_and_whitespace() {
        assert_eq!(skill_key("  Machine   Learning "), "machine-learning");
        assert_eq!(skill_key("machine learning"), skill_key("MACHINE LEARNING"));
        assert_ne!(skill_key("MachineLearning"), skill_key("Machine Learning"));
    }

    #[test]
    fn keeps_casing_of_first_insertion() {
        let mut set = SkillSet::new();
        assert!(set.insert("PostgreSQL"));
        assert!(!set.insert("postgresql"));
        assert!(!set.insert("  POSTGRESQL  "));
        assert_eq!(set.labels(), ["PostgreSQL".to_string()]);
    }

    #[test]
    fn deserializing_deduplicates_entries() {
        let set: SkillSet =
            serde_json::from_str(r#"["Rust", "rust", "Kafka", " Rust "]"#).expect("parses");
        assert_eq!(set.labels(), ["Rust".to_string(), "Kafka".to_string()]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = SkillSelection::default();
        selection.toggle("Node.js");
        assert!(selection.selected().contains("node.js"));
        selection.toggle("NODE.JS");
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn custom_skills_ignore_blank_and_duplicates() {
        let mut selection = SkillSelection::default();
        assert!(selection.add_custom("  Terraform "));
        assert!(!selection.add_custom("terraform"));
        assert!(!selection.add_custom("   "));
        assert_eq!(selection.selected().labels(), ["Terraform".to_string()]);
    }

    #[test]
    fn select_all_replaces_previous_choices() {
        let mut selection = SkillSelection::default();
        selection.add_custom("Cobol");
        selection.select_all(&["Go", "gRPC"]);
        assert_eq!(
            selection.selected().labels(),
            ["Go".to_string(), "gRPC".to_string()]
        );
    }

    #[test]
    fn empty_selection_submits_nothing() {
        assert!(SkillSelection::default().into_submission().is_none());
    }
}
