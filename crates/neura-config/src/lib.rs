//! Configuration for the neura showcase.
//!
//! Settings live in `config.toml` under the platform configuration directory.
//! Every field is optional; missing values fall back to the defaults.

mod error;

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use neura_core::{AnimationSpeed, ColorTheme};
use neura_effects::{CounterConfig, NetworkConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::{ConfigError, ConfigResult};

const CONFIG_FILE: &str = "config.toml";

/// Project directories for neura, if the platform has any.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("agency", "neura", "neura")
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ColorTheme,
    pub speed: AnimationSpeed,
    /// Target frames per second.
    pub fps: u32,
    /// Minimum level written to the log file.
    pub log_level: String,
    pub network: NetworkConfig,
    pub counter: CounterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            speed: AnimationSpeed::default(),
            fps: 60,
            log_level: "info".to_string(),
            network: NetworkConfig::default(),
            counter: CounterConfig::default(),
        }
    }
}

impl Config {
    /// Path of the config file on this platform.
    pub fn path() -> ConfigResult<PathBuf> {
        project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the platform config file, or defaults when it does not exist.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to the platform config file, creating its directory.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_toml_string()?).map_err(io_err)
    }

    /// Reject values the animations cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.fps == 0 {
            return Err(ConfigError::invalid("fps must be greater than zero"));
        }
        let net = &self.network;
        for (name, (min, max)) in [
            ("radius", net.radius),
            ("drift_secs", net.drift_secs),
            ("pulse_secs", net.pulse_secs),
            ("opacity", net.opacity),
        ] {
            if !(min.is_finite() && max.is_finite()) || min < 0.0 || min > max {
                return Err(ConfigError::invalid(format!(
                    "network.{name} must be an ordered non-negative pair, got [{min}, {max}]"
                )));
            }
        }
        for (name, (_, max)) in [("drift_secs", net.drift_secs), ("pulse_secs", net.pulse_secs)] {
            if max <= 0.0 {
                return Err(ConfigError::invalid(format!(
                    "network.{name} must allow a positive duration, got at most {max}"
                )));
            }
        }
        if net.opacity.1 > 1.0 || !(0.0..=1.0).contains(&net.initial_opacity) {
            return Err(ConfigError::invalid("network opacity must lie within [0, 1]"));
        }
        if net.pulse_delay_secs < 0.0 || net.transition_secs < 0.0 {
            return Err(ConfigError::invalid("network durations must not be negative"));
        }
        if net.links > 0 && net.distinct_endpoints && net.nodes < 2 {
            return Err(ConfigError::invalid(
                "network.distinct_endpoints needs at least two nodes",
            ));
        }
        let counter = &self.counter;
        if !(counter.threshold > 0.0 && counter.threshold <= 1.0) {
            return Err(ConfigError::invalid("counter.threshold must lie within (0, 1]"));
        }
        if counter.duration_secs < 0.0 {
            return Err(ConfigError::invalid("counter.duration_secs must not be negative"));
        }
        Ok(())
    }
}
