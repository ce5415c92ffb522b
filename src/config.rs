use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::format::TRUNCATION_MARKER;
use crate::input::InputTimings;
use crate::sort::SortStrategy;
use crate::ui::DisplayOptions;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub cpu_window_ms: u64,
    pub idle_timeout_ms: u64,
    pub sort_timeout_ms: u64,
    pub default_sort: String,
    pub sort_reversed: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            cpu_window_ms: 500,
            idle_timeout_ms: 500,
            sort_timeout_ms: 200,
            default_sort: "none".to_string(),
            sort_reversed: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub gauge_divisor: u16,
    pub min_name_len: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            gauge_divisor: 4,
            min_name_len: 10,
        }
    }
}

impl Config {
    pub fn input_timings(&self) -> InputTimings {
        InputTimings {
            idle: Duration::from_millis(self.general.idle_timeout_ms),
            sort_window: Duration::from_millis(self.general.sort_timeout_ms),
            cpu_window: Duration::from_millis(self.general.cpu_window_ms),
        }
    }

    pub fn initial_sort(&self) -> Option<SortStrategy> {
        SortStrategy::from_str_config(
            &self.general.default_sort,
            Duration::from_millis(self.general.cpu_window_ms),
        )
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            gauge_divisor: self.display.gauge_divisor.max(1),
            min_name_len: self.display.min_name_len.max(TRUNCATION_MARKER.len()),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("procdash").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "invalid config, using defaults");
            Config::default()
        }),
        Err(_) => Config::default(),
    }
}
