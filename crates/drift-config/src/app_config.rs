//! Application configuration
//!
//! Configuration loaded from `.drift-editor.toml`.

use drift_slash_menu::{BackspacePolicy, SlashMenuConfig, TriggerPosition};
use serde::{Deserialize, Serialize};

/// Where typing the trigger character opens the slash menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerPlacement {
    /// Anywhere, including mid-word
    #[default]
    Anywhere,
    /// Only at the start of a block or after whitespace
    WordStart,
}

/// How Backspace interacts with the slash menu query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackspaceMode {
    /// Backspace only edits the document
    #[default]
    Retain,
    /// Backspace also trims the query and closes the menu once the trigger is gone
    Track,
}

/// Application configuration loaded from .drift-editor.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Character that opens the slash menu
    #[serde(default = "default_trigger_char")]
    pub trigger_char: char,

    #[serde(default)]
    pub trigger_position: TriggerPlacement,

    #[serde(default)]
    pub backspace: BackspaceMode,

    /// Message shown when an image command asks for a URL
    #[serde(default = "default_image_prompt")]
    pub image_prompt: String,

    /// Maximum number of list rows visible in the slash menu
    #[serde(default = "default_menu_height")]
    pub menu_height: u16,
}

fn default_trigger_char() -> char {
    '/'
}

fn default_image_prompt() -> String {
    "Enter image URL:".to_string()
}

fn default_menu_height() -> u16 {
    12
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            trigger_char: default_trigger_char(),
            trigger_position: TriggerPlacement::default(),
            backspace: BackspaceMode::default(),
            image_prompt: default_image_prompt(),
            menu_height: default_menu_height(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config file content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Slash menu settings derived from this config
    pub fn slash_menu_config(&self) -> SlashMenuConfig {
        SlashMenuConfig {
            trigger: self.trigger_char,
            trigger_position: self.trigger_position.into(),
            backspace: self.backspace.into(),
            image_prompt: self.image_prompt.clone(),
        }
    }
}

impl From<TriggerPlacement> for TriggerPosition {
    fn from(placement: TriggerPlacement) -> Self {
        match placement {
            TriggerPlacement::Anywhere => TriggerPosition::Anywhere,
            TriggerPlacement::WordStart => TriggerPosition::WordStart,
        }
    }
}

impl From<BackspaceMode> for BackspacePolicy {
    fn from(mode: BackspaceMode) -> Self {
        match mode {
            BackspaceMode::Retain => BackspacePolicy::Retain,
            BackspaceMode::Track => BackspacePolicy::Track,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.trigger_char, '/');
        assert_eq!(config.trigger_position, TriggerPlacement::Anywhere);
        assert_eq!(config.backspace, BackspaceMode::Retain);
        assert_eq!(config.image_prompt, "Enter image URL:");
        assert_eq!(config.menu_height, 12);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            trigger_char = ";"
            trigger_position = "word_start"
            backspace = "track"
            menu_height = 8
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.trigger_char, ';');
        assert_eq!(config.trigger_position, TriggerPlacement::WordStart);
        assert_eq!(config.backspace, BackspaceMode::Track);
        assert_eq!(config.menu_height, 8);
        // image_prompt should use default
        assert_eq!(config.image_prompt, "Enter image URL:");
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_rejects_unknown_policy() {
        assert!(AppConfig::parse(r#"backspace = "sometimes""#).is_err());
    }

    #[test]
    fn test_slash_menu_config() {
        let config = AppConfig {
            trigger_char: '\\',
            trigger_position: TriggerPlacement::WordStart,
            backspace: BackspaceMode::Track,
            image_prompt: "Image?".to_string(),
            menu_height: 5,
        };
        let menu = config.slash_menu_config();
        assert_eq!(menu.trigger, '\\');
        assert_eq!(menu.trigger_position, TriggerPosition::WordStart);
        assert_eq!(menu.backspace, BackspacePolicy::Track);
        assert_eq!(menu.image_prompt, "Image?");
    }
}
