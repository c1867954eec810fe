use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::catalog::DEFAULT_DOCUMENT_KEY;
use crate::storage::StorageConfig;

const ENV_PREFIX: &str = "PROPERTY_SERVICE";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("PROPERTY_SERVICE_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Resolve the storage configuration and the key of the properties document.
    pub fn data_runtime(&self) -> Result<(StorageConfig, String)> {
        self.data.to_runtime()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// Directory holding the document. Defaults to the directory of the
    /// running executable.
    pub root_path: Option<String>,
    pub file_name: String,
}

impl DataSection {
    pub fn to_runtime(&self) -> Result<(StorageConfig, String)> {
        let file_name = self.file_name.trim();
        if file_name.is_empty() {
            bail!("data.file_name must be specified");
        }

        let mut components = Path::new(file_name).components();
        let is_plain_name = matches!(
            (components.next(), components.next()),
            (Some(std::path::Component::Normal(_)), None)
        );
        if !is_plain_name {
            bail!("data.file_name must be a plain file name, got '{}'", file_name);
        }

        let root_path = match self.root_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => path.to_string(),
            _ => executable_dir()?.display().to_string(),
        };

        Ok((StorageConfig::Local { root_path }, file_name.to_string()))
    }
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            root_path: None,
            file_name: DEFAULT_DOCUMENT_KEY.to_string(),
        }
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("running executable has no parent directory")
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
