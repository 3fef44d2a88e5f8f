//! [`Config`]-related definitions.

use std::path::PathBuf;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::infra::storage;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: Server,

    /// Uploaded images storage configuration.
    #[serde(default)]
    pub storage: Storage,

    /// Catalog configuration.
    #[serde(default)]
    pub catalog: Catalog,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("127.0.0.1".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(5000)]
    pub port: u16,

    /// Maximum size (in bytes) of a request body, limiting the total size
    /// of the images uploaded at once.
    #[default(16 * 1024 * 1024)]
    pub max_upload_size: usize,
}

/// Uploaded images storage configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Storage {
    /// Directory to store the uploaded images in.
    #[default(PathBuf::from("static/uploads"))]
    pub dir: PathBuf,

    /// URL path prefix the uploaded images are served under.
    #[default("/static/uploads".to_owned())]
    pub url_prefix: String,
}

impl From<Storage> for storage::fs::Config {
    fn from(value: Storage) -> Self {
        let Storage { dir, url_prefix } = value;
        Self { dir, url_prefix }
    }
}

/// Catalog configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Catalog {
    /// Indicator whether the catalog should be filled with sample listings
    /// on startup.
    #[default(true)]
    pub seed: bool,

    /// URL of the image shown for listings without any images.
    #[default("https://via.placeholder.com/400x250?text=No+Image".to_owned())]
    pub placeholder_image: String,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::{fs, path::Path};

    use super::Config;

    #[test]
    fn defaults_without_file() {
        let conf = Config::new("definitely/missing/config.toml").unwrap();

        assert_eq!(conf.server.host, "127.0.0.1");
        assert_eq!(conf.server.port, 5000);
        assert_eq!(conf.storage.dir, Path::new("static/uploads"));
        assert_eq!(conf.storage.url_prefix, "/static/uploads");
        assert!(conf.catalog.seed);
        assert_eq!(tracing::Level::from(conf.log.level), tracing::Level::INFO);
    }

    #[test]
    fn loads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[server]\nport = 8081\n\n\
             [catalog]\nseed = false\n\n\
             [log]\nlevel = \"DEBUG\"\n",
        )
        .unwrap();

        let conf = Config::new(path.to_str().unwrap()).unwrap();

        assert_eq!(conf.server.port, 8081);
        assert_eq!(conf.server.host, "127.0.0.1");
        assert!(!conf.catalog.seed);
        assert_eq!(
            tracing::Level::from(conf.log.level),
            tracing::Level::DEBUG,
        );
    }
}
