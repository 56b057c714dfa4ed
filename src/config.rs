//! Server configuration

use serde::{Deserialize, Serialize};

/// Request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum request body size in megabytes
    pub max_request_size_mb: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_request_size_mb: 10,
        }
    }
}

impl LimitsConfig {
    /// Get maximum request body size in bytes
    pub fn max_request_size_bytes(&self) -> usize {
        self.max_request_size_mb * 1024 * 1024
    }
}

/// Conversion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// File name stem used when the request has no usable `outputName`
    pub default_output_name: String,

    /// Maximum length of the sanitized file name stem
    pub max_output_name_len: usize,

    /// Size limit for the compiled phrase pattern in megabytes
    pub pattern_size_limit_mb: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            default_output_name: "subtitles".to_string(),
            max_output_name_len: 100,
            pattern_size_limit_mb: 32,
        }
    }
}

impl ConversionConfig {
    /// Get the phrase pattern size limit in bytes
    pub fn pattern_size_limit_bytes(&self) -> usize {
        self.pattern_size_limit_mb * 1024 * 1024
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Enable CORS
    pub cors_enabled: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format (pretty, json)
    pub log_format: String,

    /// Request limits
    pub limits: LimitsConfig,

    /// Conversion settings
    pub conversion: ConversionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_enabled: true,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            limits: LimitsConfig::default(),
            conversion: ConversionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Tracing filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> String {
        format!(
            "sbv_vtt_server={level},sbv_vtt_lib={level},tower_http={level}",
            level = self.log_level
        )
    }

    /// Whether logs should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
