use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_PATHS: [&str; 2] = [".slidedeck/config.json", "slidedeck.config.json"];

/// Presenter settings. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PresenterConfig {
    pub swipe_threshold_px: f64,
    pub cell_width_px: f64,
    pub tick_rate_ms: u64,
    pub entrance_effect_ms: u64,
    pub show_clock: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: 50.0,
            cell_width_px: 8.0,
            tick_rate_ms: 50,
            entrance_effect_ms: 800,
            show_clock: true,
            log_path: None,
        }
    }
}

/// A usable swipe threshold is a finite, non-negative pixel distance.
pub fn valid_swipe_threshold(px: f64) -> bool {
    px.is_finite() && px >= 0.0
}

impl PresenterConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("parsing config {}", path.display()))?;
        if !valid_swipe_threshold(config.swipe_threshold_px) {
            bail!(
                "invalid swipe_threshold_px {} in {}",
                config.swipe_threshold_px,
                path.display()
            );
        }
        Ok(config)
    }

    /// Load from the first config file found under `base`, falling back to
    /// defaults.
    pub fn load_with_fallback(base: &Path) -> Self {
        for rel in CONFIG_PATHS {
            let path = base.join(rel);
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {e:#}", path.display());
                }
            }
        }

        tracing::info!("Using default configuration");
        Self::default()
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("SLIDEDECK_SWIPE_THRESHOLD") {
            match raw.parse::<f64>() {
                Ok(px) if valid_swipe_threshold(px) => self.swipe_threshold_px = px,
                _ => tracing::warn!("Ignoring invalid SLIDEDECK_SWIPE_THRESHOLD={raw}"),
            }
        }

        if let Some(path) = lookup("SLIDEDECK_LOG_PATH") {
            self.log_path = Some(PathBuf::from(path));
        }
    }
}
