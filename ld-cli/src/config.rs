//! Session configuration loading
//!
//! Session metadata (driver, vehicle, venue, event fields) defaults to
//! the converter's historical constants and can be overridden per run
//! from a TOML file.

use anyhow::{Context, Result};
use ld_encoder::types::{EventInfo, SessionMetadata};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Session metadata overrides (loaded from session.toml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_driver")]
    pub driver: String,
    #[serde(default = "default_vehicle")]
    pub vehicle: String,
    #[serde(default = "default_venue")]
    pub venue: String,
    #[serde(default = "default_comment")]
    pub comment: String,
    #[serde(default)]
    pub event: EventConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default = "default_event_name")]
    pub name: String,
    #[serde(default = "default_session_label")]
    pub session: String,
    /// Free-text event comment; when empty, a channel-count line is
    /// generated at run time.
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub venue_pos: u16,
}

fn default_driver() -> String {
    "Driver".to_string()
}

fn default_vehicle() -> String {
    "Vehicle".to_string()
}

fn default_venue() -> String {
    "Track".to_string()
}

fn default_comment() -> String {
    "All Channels".to_string()
}

fn default_event_name() -> String {
    "Full Data Session".to_string()
}

fn default_session_label() -> String {
    "All Channels".to_string()
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            name: default_event_name(),
            session: default_session_label(),
            comment: String::new(),
            venue_pos: 0,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            driver: default_driver(),
            vehicle: default_vehicle(),
            venue: default_venue(),
            comment: default_comment(),
            event: EventConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Capture session metadata for a run over `channel_count` channels.
    pub fn metadata(&self, channel_count: usize) -> SessionMetadata {
        let event_comment = if self.event.comment.is_empty() {
            format!("All {} channels", channel_count)
        } else {
            self.event.comment.clone()
        };
        SessionMetadata::now(
            &self.driver,
            &self.vehicle,
            &self.venue,
            &self.comment,
            EventInfo {
                name: self.event.name.clone(),
                session: self.event.session.clone(),
                comment: event_comment,
                venue_pos: self.event.venue_pos,
            },
        )
    }
}

/// Load a session configuration from a TOML file
pub fn load_config(path: &Path) -> Result<SessionConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: SessionConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            driver = "A. Driver"
            venue = "Test Circuit"

            [event]
            name = "Shakedown"
        "#;

        let config: SessionConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.driver, "A. Driver");
        assert_eq!(config.venue, "Test Circuit");
        // Unspecified fields fall back per field
        assert_eq!(config.vehicle, "Vehicle");
        assert_eq!(config.event.name, "Shakedown");
        assert_eq!(config.event.venue_pos, 0);
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: SessionConfig = toml::from_str("").unwrap();
        assert_eq!(config.driver, "Driver");
        assert_eq!(config.vehicle, "Vehicle");
        assert_eq!(config.venue, "Track");
        assert_eq!(config.event.name, "Full Data Session");
    }

    #[test]
    fn test_metadata_generates_channel_count_comment() {
        let config = SessionConfig::default();
        let meta = config.metadata(58);
        assert_eq!(meta.event.comment, "All 58 channels");

        let mut custom = SessionConfig::default();
        custom.event.comment = "Custom".to_string();
        assert_eq!(custom.metadata(58).event.comment, "Custom");
    }
}
