use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::filter;

const BUNDLED_SITE_CONFIG: &str = include_str!("../config/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config needs at least one non-blank typing phrase")]
    NoTypingPhrases,
    #[error("WhatsApp number {0:?} must be country code and digits only")]
    InvalidWhatsAppNumber(String),
    #[error("navigation entry {0:?} has an empty section id")]
    EmptyNavId(String),
    #[error("project {0:?} has an empty category")]
    EmptyCategory(String),
    #[error("project {0:?} uses the reserved category `all`")]
    ReservedCategory(String),
    #[error("filter {0:?} matches no project category")]
    UnknownFilter(String),
    #[error("filter value {0:?} is listed more than once")]
    DuplicateFilter(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// Page content and the few runtime knobs, bundled at compile time.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub owner: String,
    pub greeting: String,
    pub tagline: String,
    pub typing_phrases: Vec<String>,
    pub nav: Vec<NavEntry>,
    pub about: Vec<String>,
    pub stats: Vec<Stat>,
    pub skill_groups: Vec<SkillGroup>,
    pub filters: Vec<FilterOption>,
    pub projects: Vec<Project>,
    pub contact: ContactDetails,
    pub whatsapp_number: String,
    pub footer: String,
    #[serde(default)]
    pub log_level: LogLevel,
}

impl SiteConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_SITE_CONFIG)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.typing_phrases.iter().all(|phrase| phrase.trim().is_empty()) {
            return Err(ConfigError::NoTypingPhrases);
        }

        let number = &self.whatsapp_number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidWhatsAppNumber(number.clone()));
        }

        if let Some(entry) = self.nav.iter().find(|entry| entry.id.trim().is_empty()) {
            return Err(ConfigError::EmptyNavId(entry.label.clone()));
        }

        let mut categories = HashSet::new();
        for project in &self.projects {
            if project.category.trim().is_empty() {
                return Err(ConfigError::EmptyCategory(project.title.clone()));
            }
            if project.category == filter::ALL {
                return Err(ConfigError::ReservedCategory(project.title.clone()));
            }
            categories.insert(project.category.as_str());
        }

        if let Some(unknown) = self
            .filters
            .iter()
            .find(|option| option.value != filter::ALL && !categories.contains(option.value.as_str()))
        {
            return Err(ConfigError::UnknownFilter(unknown.value.clone()));
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = self
            .filters
            .iter()
            .find(|option| !seen.insert(option.value.as_str()))
        {
            return Err(ConfigError::DuplicateFilter(duplicate.value.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bundled_json() -> serde_json::Value {
        serde_json::from_str(BUNDLED_SITE_CONFIG).expect("bundled config is JSON")
    }

    fn load_modified(edit: impl FnOnce(&mut serde_json::Value)) -> Result<SiteConfig, ConfigError> {
        let mut value = bundled_json();
        edit(&mut value);
        SiteConfig::from_json(&value.to_string())
    }

    #[test]
    fn bundled_config_is_valid() {
        let config = SiteConfig::load().expect("bundled config loads");

        assert!(!config.typing_phrases.is_empty());
        assert!(config.filters.iter().any(|option| option.value == filter::ALL));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn log_level_defaults_to_info_when_missing() {
        let config = load_modified(|value| {
            value.as_object_mut().expect("object").remove("logLevel");
        })
        .expect("still valid");

        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn rejects_missing_typing_phrases() {
        let result = load_modified(|value| value["typingPhrases"] = serde_json::json!(["  "]));
        assert!(matches!(result, Err(ConfigError::NoTypingPhrases)));
    }

    #[test]
    fn rejects_formatted_whatsapp_numbers() {
        let result = load_modified(|value| value["whatsappNumber"] = serde_json::json!("+91 70206"));
        assert!(matches!(result, Err(ConfigError::InvalidWhatsAppNumber(_))));
    }

    #[test]
    fn rejects_filters_without_projects() {
        let result = load_modified(|value| {
            value["filters"]
                .as_array_mut()
                .expect("array")
                .push(serde_json::json!({ "label": "Games", "value": "games" }));
        });
        assert!(matches!(result, Err(ConfigError::UnknownFilter(value)) if value == "games"));
    }

    #[test]
    fn rejects_repeated_filter_values() {
        let result = load_modified(|value| {
            value["filters"]
                .as_array_mut()
                .expect("array")
                .push(serde_json::json!({ "label": "Backend again", "value": "backend" }));
        });
        assert!(matches!(result, Err(ConfigError::DuplicateFilter(value)) if value == "backend"));
    }

    #[test]
    fn rejects_reserved_category() {
        let result = load_modified(|value| value["projects"][0]["category"] = serde_json::json!("all"));
        assert!(matches!(result, Err(ConfigError::ReservedCategory(_))));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let result = load_modified(|value| value["logLevel"] = serde_json::json!("trace"));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
