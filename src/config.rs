use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    catalog::CatalogKind,
    error::{Result, TrackerError},
};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("snapshots")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub catalog: CatalogKind,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

impl TrackerConfig {
    pub fn from_yaml_str(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<TrackerConfig> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path).map_err(|source| TrackerError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        TrackerConfig::from_yaml_str(&data)
            .map_err(|source| TrackerError::ConfigParse { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = TrackerConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.catalog, CatalogKind::StateCapitals);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.export.dir, PathBuf::from("snapshots"));
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = TrackerConfig::from_yaml_str(
            "catalog: metros\nserver:\n  port: 9000\nlogging:\n  level: debug\n",
        )
        .unwrap();
        assert_eq!(config.catalog, CatalogKind::Metros);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn unknown_catalog_is_rejected() {
        assert!(TrackerConfig::from_yaml_str("catalog: villages\n").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let loader = ConfigLoader::new(std::env::temp_dir());
        let err = loader.load("aqi-tracker-missing.yaml").unwrap_err();
        assert!(matches!(err, TrackerError::ConfigRead { .. }));
        assert!(err.to_string().contains("aqi-tracker-missing.yaml"));
    }
}
