//! Host runner configuration.
//!
//! Layered with figment: built-in defaults, then the TOML file, then
//! `BURSTSHELL_*` environment variables (`BURSTSHELL_CAMERA__FRAMES=5`).

use std::path::Path;

use burstshell::camera::BurstSettings;
use burstshell::config::shell::PROMPT;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::utils::HostResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Printed before each line in script mode and before each read in
    /// interactive mode.
    pub prompt: String,
    /// Echo script lines next to their replies.
    pub echo: bool,
    pub camera: CameraConfig,
}

/// Initial burst settings of the simulated camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub enable: bool,
    pub fast: bool,
    pub frames: u16,
    pub interval_ms: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            prompt: PROMPT.to_string(),
            echo: true,
            camera: CameraConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        let settings = BurstSettings::default();
        Self {
            enable: settings.enable,
            fast: settings.fast,
            frames: settings.frames,
            interval_ms: settings.interval_ms,
        }
    }
}

impl CameraConfig {
    pub fn settings(&self) -> BurstSettings {
        BurstSettings {
            // fast implies enable, same as `burst fast`
            enable: self.enable || self.fast,
            fast: self.fast,
            frames: self.frames.max(1),
            interval_ms: self.interval_ms,
        }
    }
}

impl HostConfig {
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(HostConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("BURSTSHELL_").split("__"))
    }

    pub fn load(path: &Path) -> HostResult<Self> {
        Ok(Self::figment(path).extract()?)
    }
}
