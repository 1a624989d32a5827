//! Glide configuration system
//!
//! This crate provides centralized configuration management for the demo
//! and plot surface, loading settings from `glide.toml` as an alternative
//! to environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for Glide
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlideConfig {
    /// Demo driver settings
    pub demo: DemoConfig,
    /// Plot sink settings
    pub plot: PlotConfig,
}

/// Demo driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Easing curves to render, by snake_case name (e.g. "elastic_out").
    /// `None` renders the whole catalog.
    pub curves: Option<Vec<String>>,
    /// Directory the curve PNGs are written to (default "plots")
    pub out_dir: Option<PathBuf>,
}

/// Plot sink configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Background color as 0xRRGGBB (alpha is forced opaque by the canvas)
    pub background: u32,
    /// Curve color as 0xRRGGBB
    pub foreground: u32,
    /// Tick count each rendered curve is swept over
    pub sweep_ticks: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            curves: None,
            out_dir: None,
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            background: 0x20_2830,
            foreground: 0x4f_c3f7,
            sweep_ticks: 240,
        }
    }
}

impl GlideConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the glide.toml configuration file
    ///
    /// # Returns
    /// * `Ok(GlideConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (glide.toml in the
    /// current directory) or return default configuration if file doesn't
    /// exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("glide.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(curves) = std::env::var("GLIDE_CURVES") {
            self.demo.curves = Some(
                curves
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect(),
            );
        }
        if let Ok(dir) = std::env::var("GLIDE_OUT_DIR") {
            self.demo.out_dir = Some(PathBuf::from(dir));
        }
        if let Ok(val) = std::env::var("GLIDE_PLOT_WIDTH") {
            if let Ok(width) = val.parse::<u32>() {
                self.plot.width = width;
            }
        }
        if let Ok(val) = std::env::var("GLIDE_PLOT_HEIGHT") {
            if let Ok(height) = val.parse::<u32>() {
                self.plot.height = height;
            }
        }
        if let Ok(val) = std::env::var("GLIDE_SWEEP_TICKS") {
            if let Ok(ticks) = val.parse::<u32>() {
                self.plot.sweep_ticks = ticks;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from glide.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlideConfig::default();
        assert_eq!(config.plot.width, 256);
        assert_eq!(config.plot.height, 256);
        assert_eq!(config.plot.sweep_ticks, 240);
        assert!(config.demo.curves.is_none());
        assert!(config.demo.out_dir.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GlideConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: GlideConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.plot.width, config.plot.width);
        assert_eq!(parsed.plot.background, config.plot.background);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: GlideConfig = toml::from_str(
            r#"
            [plot]
            width = 640
            "#,
        )
        .unwrap();
        assert_eq!(parsed.plot.width, 640);
        assert_eq!(parsed.plot.height, 256);
        assert!(parsed.demo.curves.is_none());
    }

    #[test]
    fn test_load_or_default() {
        // Should not panic even if glide.toml doesn't exist
        let config = GlideConfig::load_or_default();
        assert_eq!(config.plot.sweep_ticks, 240);
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("GLIDE_CURVES", "linear, elastic_out");
            std::env::set_var("GLIDE_PLOT_WIDTH", "512");
        }

        let mut config = GlideConfig::default();
        config.merge_with_env();

        assert_eq!(
            config.demo.curves.as_deref(),
            Some(&["linear".to_string(), "elastic_out".to_string()][..])
        );
        assert_eq!(config.plot.width, 512);

        unsafe {
            std::env::remove_var("GLIDE_CURVES");
            std::env::remove_var("GLIDE_PLOT_WIDTH");
        }
    }
}
