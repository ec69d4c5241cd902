//! Path management for registrar-cli
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `REGISTRAR_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/registrar-cli` or `~/.config/registrar-cli`
//! 3. Windows: `%APPDATA%\registrar-cli`

use std::path::PathBuf;

use crate::error::RegistrarError;

/// Manages all paths used by registrar-cli
#[derive(Debug, Clone)]
pub struct RegistrarPaths {
    /// Base directory for all registrar-cli data
    base_dir: PathBuf,
}

impl RegistrarPaths {
    /// Create a new RegistrarPaths instance
    ///
    /// Path resolution:
    /// 1. `REGISTRAR_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/registrar-cli` or `~/.config/registrar-cli`
    /// 3. Windows: `%APPDATA%\registrar-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RegistrarError> {
        let base_dir = if let Ok(custom) = std::env::var("REGISTRAR_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RegistrarPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/registrar-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/registrar-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to students.csv
    pub fn students_file(&self) -> PathBuf {
        self.data_dir().join("students.csv")
    }

    /// Get the path to courses.csv (the course catalog)
    pub fn courses_file(&self) -> PathBuf {
        self.data_dir().join("courses.csv")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), RegistrarError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RegistrarError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| RegistrarError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if registrar-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RegistrarError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| RegistrarError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("registrar-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RegistrarError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RegistrarError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("registrar-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RegistrarPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RegistrarPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RegistrarPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.students_file(),
            temp_dir.path().join("data").join("students.csv")
        );
        assert_eq!(
            paths.courses_file(),
            temp_dir.path().join("data").join("courses.csv")
        );
    }

    #[test]
    fn test_not_initialized_without_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RegistrarPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert!(!paths.is_initialized());
    }
}
