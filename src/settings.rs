//! Per-cycle settings snapshot supplied by the host application.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::labels;

/// Language used to phrase announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en", alias = "en-US")]
    English,
    #[serde(rename = "pt", alias = "pt-BR")]
    Portuguese,
}

/// How much an announcement says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionMode {
    /// Label and horizontal position
    #[default]
    Short,
    /// Label, position, distance and confidence
    Detailed,
}

/// Immutable snapshot of user-facing thresholds for one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Minimum track confidence for an announcement
    pub min_score: f32,
    /// Minimum gap between any two announcements
    pub global_cooldown_ms: u64,
    /// Minimum gap between two announcements of the same label
    pub per_label_cooldown_ms: u64,
    pub language: Language,
    pub description_mode: DescriptionMode,
    /// Labels in descending announcement priority
    pub priority_order: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_score: 0.5,
            global_cooldown_ms: 3000,
            per_label_cooldown_ms: 7000,
            language: Language::English,
            description_mode: DescriptionMode::Short,
            priority_order: [
                "person",
                "car",
                "bus",
                "truck",
                "motorcycle",
                "bicycle",
                "traffic light",
                "stop sign",
                "dog",
                "cat",
                "stairs",
                "chair",
                "bench",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl Settings {
    /// Parse a JSON settings document, canonicalize its labels and validate it.
    ///
    /// Missing keys take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.priority_order = settings
            .priority_order
            .iter()
            .map(|label| labels::normalize(label))
            .collect();
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min_score.is_finite() || !(0.0..=1.0).contains(&self.min_score) {
            return Err(EngineError::InvalidSettings(format!(
                "minScore must be within [0, 1], got {}",
                self.min_score
            )));
        }

        let mut seen = HashSet::new();
        for label in &self.priority_order {
            if label.trim().is_empty() {
                return Err(EngineError::InvalidSettings(
                    "priorityOrder contains an empty label".to_string(),
                ));
            }
            if !seen.insert(label.as_str()) {
                return Err(EngineError::InvalidSettings(format!(
                    "priorityOrder lists '{}' more than once",
                    label
                )));
            }
        }

        Ok(())
    }

    /// Position of `label` in the priority order, if listed.
    pub fn priority_rank(&self, label: &str) -> Option<usize> {
        self.priority_order.iter().position(|l| l == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.min_score, 0.5);
        assert_eq!(settings.global_cooldown_ms, 3000);
        assert_eq!(settings.per_label_cooldown_ms, 7000);
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.description_mode, DescriptionMode::Short);
        assert_eq!(settings.priority_rank("person"), Some(0));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let settings = Settings::from_json(
            r#"{"minScore": 0.6, "language": "pt-BR", "descriptionMode": "detailed"}"#,
        )
        .unwrap();
        assert_eq!(settings.min_score, 0.6);
        assert_eq!(settings.language, Language::Portuguese);
        assert_eq!(settings.description_mode, DescriptionMode::Detailed);
        assert_eq!(settings.global_cooldown_ms, 3000);
    }

    #[test]
    fn test_from_json_normalizes_priority_labels() {
        let settings =
            Settings::from_json(r#"{"priorityOrder": ["cellphone", "people"]}"#).unwrap();
        assert_eq!(settings.priority_order, vec!["cell phone", "person"]);
        assert_eq!(settings.priority_rank("unlisted"), None);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            Settings::from_json(r#"{"minScore": 1.5}"#),
            Err(EngineError::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"priorityOrder": ["phone", "cell phone"]}"#),
            Err(EngineError::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"priorityOrder": [" "]}"#),
            Err(EngineError::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"language": "xx"}"#),
            Err(EngineError::Parse(_))
        ));
    }
}
