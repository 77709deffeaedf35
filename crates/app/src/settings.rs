//! Settings for the demo binary. Read from `settings.toml` (optional) with
//! `SPLITEXPENSE_*` environment overrides.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: AppSection,
    pub demo: Demo,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSection::default(),
            demo: Demo::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppSection {
    pub level: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Accounts used by the demo session walkthrough.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Demo {
    pub user: String,
    pub password: String,
    pub friends: Vec<String>,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            user: "alice@example.com".to_string(),
            password: "demo".to_string(),
            friends: vec![
                "bob@example.com".to_string(),
                "carol@example.com".to_string(),
            ],
        }
    }
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("SPLITEXPENSE").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
