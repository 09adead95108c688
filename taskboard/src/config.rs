//! Taskboard configuration using Figment
//!
//! Sources are merged in precedence order (later sources override earlier
//! ones):
//! 1. Default values
//! 2. `taskboard.toml`, `taskboard.yaml`, `taskboard.json` in the config directory
//! 3. Environment variables prefixed with `TASKBOARD_`, nested keys split on `__`
//!    (e.g. `TASKBOARD_STORAGE__KEY=board`)

use crate::error::Result;
use crate::persistence::DEFAULT_KEY;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base name of configuration files
pub const CONFIG_FILE_STEM: &str = "taskboard";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskboardConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub drag: DragConfig,
}

/// Where the board snapshot lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for file storage
    pub dir: PathBuf,
    /// Slot key of the snapshot
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".taskboard"),
            key: DEFAULT_KEY.to_string(),
        }
    }
}

/// Drag session behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Put a task back where its drag started when the drag is aborted.
    ///
    /// Off by default: a transfer made while hovering another column stays
    /// committed even if the drag never ends in a drop.
    #[serde(default)]
    pub restore_on_abort: bool,
}

impl TaskboardConfig {
    /// Build the figment for a configuration directory
    pub fn figment(config_dir: impl AsRef<Path>) -> Figment {
        let dir = config_dir.as_ref();
        debug!(dir = %dir.display(), "building taskboard configuration");

        Figment::new()
            .merge(Serialized::defaults(TaskboardConfig::default()))
            .merge(Toml::file(dir.join(format!("{CONFIG_FILE_STEM}.toml"))))
            .merge(Yaml::file(dir.join(format!("{CONFIG_FILE_STEM}.yaml"))))
            .merge(Json::file(dir.join(format!("{CONFIG_FILE_STEM}.json"))))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load configuration from defaults, files in `config_dir` and the environment
    pub fn load(config_dir: impl AsRef<Path>) -> Result<Self> {
        let config: Self = Self::figment(config_dir).extract()?;
        debug!(?config, "loaded taskboard configuration");
        Ok(config)
    }
}
