//! Configuration file support
//!
//! Loads server configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{ConversionConfig, LimitsConfig, ServerConfig};
use crate::error::{Result, ServerError};

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Server settings
    pub server: ServerSettings,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
    /// Limits settings
    pub limits: Option<LimitsSettings>,
    /// Conversion settings
    pub conversion: Option<ConversionSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS
    pub cors_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsSettings {
    /// Maximum request body size in MB
    pub max_request_size_mb: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionSettings {
    /// Fallback download name
    pub default_output_name: Option<String>,
    /// Maximum sanitized name length
    pub max_output_name_len: Option<usize>,
    /// Phrase pattern size limit in MB
    pub pattern_size_limit_mb: Option<usize>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        let limits = LimitsConfig::default();
        let conversion = ConversionConfig::default();

        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 3000,
                cors_enabled: Some(true),
            },
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some("pretty".to_string()),
            }),
            limits: Some(LimitsSettings {
                max_request_size_mb: Some(limits.max_request_size_mb),
            }),
            conversion: Some(ConversionSettings {
                default_output_name: Some(conversion.default_output_name),
                max_output_name_len: Some(conversion.max_output_name_len),
                pattern_size_limit_mb: Some(conversion.pattern_size_limit_mb),
            }),
        }
    }

    /// Convert to ServerConfig, filling unset values with defaults
    pub fn into_server_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        let (log_level, log_format) = match self.logging {
            Some(l) => (l.level, l.format.unwrap_or(defaults.log_format)),
            None => (defaults.log_level, defaults.log_format),
        };
        let conversion = self.conversion.map(|c| ConversionConfig {
            default_output_name: c
                .default_output_name
                .unwrap_or(defaults.conversion.default_output_name.clone()),
            max_output_name_len: c
                .max_output_name_len
                .unwrap_or(defaults.conversion.max_output_name_len),
            pattern_size_limit_mb: c
                .pattern_size_limit_mb
                .unwrap_or(defaults.conversion.pattern_size_limit_mb),
        });

        ServerConfig {
            host: self.server.host,
            port: self.server.port,
            cors_enabled: self.server.cors_enabled.unwrap_or(true),
            log_level,
            log_format,
            limits: LimitsConfig {
                max_request_size_mb: self
                    .limits
                    .and_then(|l| l.max_request_size_mb)
                    .unwrap_or(defaults.limits.max_request_size_mb),
            },
            conversion: conversion.unwrap_or(defaults.conversion),
        }
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    ConfigFile::default_config().to_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default_config();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.limits.as_ref().and_then(|l| l.max_request_size_mb),
            Some(10)
        );
    }

    #[test]
    fn test_config_file_roundtrip() {
        let config = ConfigFile::default_config();

        let mut temp_file = NamedTempFile::new().unwrap();
        let content = toml::to_string_pretty(&config).unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let loaded = ConfigFile::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.server.port, config.server.port);
        assert_eq!(loaded.server.host, config.server.host);
    }

    #[test]
    fn test_minimal_file_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"127.0.0.1\"\nport = 8080\n")
            .unwrap();

        let config = ConfigFile::from_file(temp_file.path())
            .unwrap()
            .into_server_config();
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
        assert!(config.cors_enabled);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.limits.max_request_size_mb, 10);
        assert_eq!(config.conversion.default_output_name, "subtitles");
    }

    #[test]
    fn test_partial_sections() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[server]\nhost = \"0.0.0.0\"\nport = 3000\ncors_enabled = false\n\n\
                  [logging]\nlevel = \"debug\"\nformat = \"json\"\n\n\
                  [conversion]\ndefault_output_name = \"captions\"\n",
            )
            .unwrap();

        let config = ConfigFile::from_file(temp_file.path())
            .unwrap()
            .into_server_config();
        assert!(!config.cors_enabled);
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs());
        assert_eq!(config.conversion.default_output_name, "captions");
        assert_eq!(config.conversion.max_output_name_len, 100);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"this is not toml = = =").unwrap();

        let err = ConfigFile::from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn test_generate_default_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        generate_default_config(&path).unwrap();

        assert!(path.exists());
        let loaded = ConfigFile::from_file(&path).unwrap();
        assert_eq!(loaded.server.port, 3000);
    }
}
