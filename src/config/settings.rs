//! Configuration settings for the simulator

use crate::session::{MAX_TICKS_PER_SECOND, MIN_TICKS_PER_SECOND};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub ticks_per_second: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub save_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: 100,
                height: 80,
            },
            simulation: SimulationConfig {
                ticks_per_second: MIN_TICKS_PER_SECOND,
            },
            storage: StorageConfig {
                save_file: PathBuf::from("world.json"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }

        if !(MIN_TICKS_PER_SECOND..=MAX_TICKS_PER_SECOND)
            .contains(&self.simulation.ticks_per_second)
        {
            anyhow::bail!(
                "Tick rate must be between {} and {}, got {}",
                MIN_TICKS_PER_SECOND,
                MAX_TICKS_PER_SECOND,
                self.simulation.ticks_per_second
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(ticks_per_second) = cli_overrides.ticks_per_second {
            self.simulation.ticks_per_second = ticks_per_second;
        }
        if let Some(ref save_file) = cli_overrides.save_file {
            self.storage.save_file = save_file.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub ticks_per_second: Option<u32>,
    pub save_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.grid.width, 100);
        assert_eq!(settings.grid.height, 80);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.grid.width = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.ticks_per_second = 25;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.ticks_per_second = 9;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.grid.width = 42;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.grid.width, 42);
        assert_eq!(loaded.grid.height, settings.grid.height);
        assert_eq!(loaded.storage.save_file, settings.storage.save_file);
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            width: Some(30),
            height: None,
            ticks_per_second: Some(24),
            save_file: Some(PathBuf::from("other.json")),
        };
        settings.merge_with_cli(&overrides);
        assert_eq!(settings.grid.width, 30);
        assert_eq!(settings.grid.height, 80);
        assert_eq!(settings.simulation.ticks_per_second, 24);
        assert_eq!(settings.storage.save_file, PathBuf::from("other.json"));
    }
}
