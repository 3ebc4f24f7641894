mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::SplitPolicy;
use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for dispmode.
///
/// Loaded from `~/.config/dispmode/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How OS color depths are read into video modes.
    pub modes: ModesConfig,
    /// Behaviour of `dispmode set`.
    pub fullscreen: FullscreenConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Video mode interpretation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModesConfig {
    /// Where spare bits go when a depth doesn't split evenly.
    pub split: SplitPolicy,
}

/// Fullscreen switch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FullscreenConfig {
    /// Seconds a switched mode is held before the default is restored.
    pub hold_seconds: u64,
}

impl Default for FullscreenConfig {
    fn default() -> Self {
        Self { hold_seconds: 10 }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    pub fn validate(&mut self) {
        self.fullscreen.hold_seconds = self.fullscreen.hold_seconds.clamp(1, 600);
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 1024);
    }
}

#[cfg(test)]
mod tests;
