use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Columns rendered at once in the viewport
    pub visible_column_count: usize,

    /// Preload window size relative to the visible count
    pub preload_multiplier: usize,

    /// Floor for estimated column widths, in pixels
    pub min_column_width_px: f64,

    /// Pixels per character when estimating widths from cell content
    pub char_to_pixel_factor: f64,

    /// Lookahead margin on the right scroll bound, as a multiple of the
    /// viewport width (must be > 1 to shift before the user hits the edge)
    pub scroll_slack_multiplier: f64,

    /// Minimum interval between processed scroll samples
    pub scroll_event_throttle_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Literal prefix of column names; the remainder is the column ordinal
    pub column_name_prefix: String,

    /// Rows kept in the sample, header included
    pub sample_row_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            source: SourceConfig::default(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            visible_column_count: 5,
            preload_multiplier: 3,
            min_column_width_px: 200.0,
            char_to_pixel_factor: 8.0,
            scroll_slack_multiplier: 1.2,
            scroll_event_throttle_ms: 50,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            column_name_prefix: "field_".to_string(),
            sample_row_count: 50,
        }
    }
}

impl GridConfig {
    /// Total columns in the preload window.
    pub fn preload_window(&self) -> usize {
        self.visible_column_count.max(1) * self.preload_multiplier.max(1)
    }
}

impl Config {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            // Create default config if it doesn't exist
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("wide-grid").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.grid.visible_column_count, 5);
        assert_eq!(config.grid.preload_multiplier, 3);
        assert_eq!(config.grid.preload_window(), 15);
        assert_eq!(config.grid.min_column_width_px, 200.0);
        assert_eq!(config.source.column_name_prefix, "field_");
        assert_eq!(config.source.sample_row_count, 50);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [grid]
            visible_column_count = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.grid.visible_column_count, 8);
        assert_eq!(config.grid.preload_multiplier, 3);
        assert_eq!(config.source.column_name_prefix, "field_");
    }
}
