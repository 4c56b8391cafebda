use std::path::{Path, PathBuf};

use anyhow::Context;
use log::LevelFilter;
use rpgym_domain::{ReadError, Resource};
use rpgym_storage::{Directory, Embedded, ReadResource};
use serde::{Deserialize, Serialize};

pub const ENV_RESOURCE_DIR: &str = "RPGYM_RESOURCE_DIR";
pub const ENV_LOG_LEVEL: &str = "RPGYM_LOG_LEVEL";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub resources: ResourceLocation,
    #[serde(with = "LevelFilterDef")]
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resources: ResourceLocation::Embedded,
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON object. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let object = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(json)?;
        serde_json::from_value(serde_json::Value::Object(object))
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("failed to parse settings from {}", path.display()))
    }

    /// Override settings by the process environment.
    pub fn with_env(self) -> anyhow::Result<Self> {
        self.with_vars(|key| std::env::var(key).ok())
    }

    fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        if let Some(dir) = var(ENV_RESOURCE_DIR) {
            self.resources = ResourceLocation::Directory(dir.into());
        }
        if let Some(level) = var(ENV_LOG_LEVEL) {
            self.log_level = level
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid {ENV_LOG_LEVEL} \"{level}\""))?;
        }
        Ok(self)
    }
}

/// Where the catalogs are read from.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceLocation {
    #[default]
    Embedded,
    Directory(PathBuf),
}

impl ReadResource for ResourceLocation {
    async fn read_resource(&self, resource: Resource) -> Result<Vec<u8>, ReadError> {
        match self {
            ResourceLocation::Embedded => Embedded.read_resource(resource).await,
            ResourceLocation::Directory(path) => {
                Directory::new(path.clone()).read_resource(resource).await
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "LevelFilter", rename_all = "lowercase")]
enum LevelFilterDef {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
