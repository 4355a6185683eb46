use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Chance that a spawned tile is a 2 rather than a 4
    pub two_probability: f64,
    /// Seed for tile spawning. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 4,
            grid_height: 4,
            two_probability: 0.8,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Same configuration with a fixed spawn seed
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Read a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Reject settings the engine cannot play with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width >= 1 && self.grid_height >= 1,
            "grid must be at least 1x1, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            (0.0..=1.0).contains(&self.two_probability),
            "two_probability must be within [0, 1], got {}",
            self.two_probability
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 4);
        assert_eq!(config.grid_height, 4);
        assert_eq!(config.two_probability, 0.8);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(6, 5).with_seed(9);
        assert_eq!(config.grid_width, 6);
        assert_eq!(config.grid_height, 5);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(GameConfig::new(0, 4).validate().is_err());
        assert!(GameConfig::new(4, 0).validate().is_err());
        assert!(GameConfig::new(1, 1).validate().is_ok());

        let config = GameConfig {
            two_probability: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            two_probability: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "grid_width = 5\nseed = 11").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.grid_width, 5);
        assert_eq!(config.grid_height, 4);
        assert_eq!(config.two_probability, 0.8);
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn test_load_reports_bad_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "grid_width = \"wide\"").unwrap();
        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        let missing = Path::new("/definitely/not/here.toml");
        assert!(GameConfig::load(missing).is_err());
    }
}
