//! User settings for registrar-cli
//!
//! Manages application preferences, including the administrator credential
//! pair checked first during authentication. The pair is injected through
//! configuration rather than hardcoded at the comparison site; the defaults
//! reproduce the stock `admin`/`admin123` login.

use serde::{Deserialize, Serialize};

use super::paths::RegistrarPaths;
use crate::error::RegistrarError;

/// The superuser credential pair
///
/// Checked by exact string match before any record lookup happens during
/// authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    /// Login identifier for the administrator
    pub id: String,
    /// Administrator password (plain; the admin account is configuration,
    /// not a stored record)
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            id: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

/// User settings for registrar-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Administrator credentials
    #[serde(default)]
    pub admin: AdminCredentials,

    /// Whether initial setup has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            admin: AdminCredentials::default(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &RegistrarPaths) -> Result<Self, RegistrarError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| RegistrarError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                RegistrarError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RegistrarPaths) -> Result<(), RegistrarError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| RegistrarError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| RegistrarError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.admin.id, "admin");
        assert_eq!(settings.admin.password, "admin123");
        assert!(!settings.setup_completed);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RegistrarPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.admin.id = "registrar".to_string();
        settings.setup_completed = true;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.admin.id, "registrar");
        assert!(loaded.setup_completed);
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings.admin, deserialized.admin);
    }
}
