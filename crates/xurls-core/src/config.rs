use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::dissect::Mode;
use crate::format::Template;

/// Default number of concurrent workers.
pub const DEFAULT_CONCURRENCY: usize = 30;

/// Scheme assumed for schemeless input such as `example.com/path`.
pub const DEFAULT_SCHEME: &str = "http";

/// Global defaults loaded from `~/.config/xurls/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct XurlsConfig {
    /// Number of worker tasks draining the input queue.
    pub concurrency: usize,
    /// Scheme applied to input that carries none.
    pub default_scheme: String,
    /// Emit each distinct value only once per invocation.
    pub unique: bool,
    /// Bound of the raw-input queue. 0 means "same as concurrency".
    pub channel_capacity: usize,
}

impl Default for XurlsConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            default_scheme: DEFAULT_SCHEME.to_string(),
            unique: false,
            channel_capacity: 0,
        }
    }
}

impl XurlsConfig {
    /// Effective queue bound between the input producer and the workers.
    pub fn queue_capacity(&self) -> usize {
        if self.channel_capacity == 0 {
            self.concurrency.max(1)
        } else {
            self.channel_capacity
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("xurls")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<XurlsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = XurlsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: XurlsConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Invalid invocation, detected before any input is read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown mode: {0}")]
    UnknownMode(String),
    #[error("mode argument is required")]
    MissingMode,
    #[error("format mode requires a format string")]
    MissingFormat,
    #[error("concurrency must be at least 1")]
    NoWorkers,
    #[error("invalid {what} pattern: {source}")]
    InvalidPattern {
        what: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Everything a `parse` run needs, resolved once up front.
#[derive(Debug, Clone)]
pub struct DissectSettings {
    pub mode: Mode,
    pub template: Template,
    pub workers: usize,
    pub unique: bool,
    pub default_scheme: String,
    pub queue_capacity: usize,
}

impl DissectSettings {
    /// Validate the mode and format string against `cfg`.
    ///
    /// `format` is only required for [`Mode::Format`]; other modes ignore it.
    pub fn new(mode: &str, format: Option<&str>, cfg: &XurlsConfig) -> Result<Self, ConfigError> {
        if mode.is_empty() {
            return Err(ConfigError::MissingMode);
        }
        let mode: Mode = mode.parse()?;
        let template = match (mode, format) {
            (Mode::Format, None) => return Err(ConfigError::MissingFormat),
            (_, Some(f)) => Template::compile(f),
            (_, None) => Template::default(),
        };
        if cfg.concurrency == 0 {
            return Err(ConfigError::NoWorkers);
        }
        Ok(Self {
            mode,
            template,
            workers: cfg.concurrency,
            unique: cfg.unique,
            default_scheme: cfg.default_scheme.clone(),
            queue_capacity: cfg.queue_capacity(),
        })
    }
}

/// Options for free-text URL discovery.
#[derive(Debug, Clone, Default)]
pub struct DiscoverSettings {
    pub with_scheme: bool,
    pub scheme_pattern: Option<String>,
    pub with_host: bool,
    pub host_pattern: Option<String>,
    pub workers: usize,
    pub unique: bool,
    pub queue_capacity: usize,
}

impl DiscoverSettings {
    pub fn new(cfg: &XurlsConfig) -> Result<Self, ConfigError> {
        if cfg.concurrency == 0 {
            return Err(ConfigError::NoWorkers);
        }
        Ok(Self {
            workers: cfg.concurrency,
            unique: cfg.unique,
            queue_capacity: cfg.queue_capacity(),
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = XurlsConfig::default();
        assert_eq!(cfg.concurrency, 30);
        assert_eq!(cfg.default_scheme, "http");
        assert!(!cfg.unique);
        assert_eq!(cfg.queue_capacity(), 30);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = XurlsConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: XurlsConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.concurrency, cfg.concurrency);
        assert_eq!(parsed.default_scheme, cfg.default_scheme);
    }

    #[test]
    fn config_toml_partial_file_keeps_other_defaults() {
        let cfg: XurlsConfig = toml::from_str("unique = true").unwrap();
        assert!(cfg.unique);
        assert_eq!(cfg.concurrency, DEFAULT_CONCURRENCY);
        assert_eq!(cfg.default_scheme, DEFAULT_SCHEME);
        assert_eq!(cfg.channel_capacity, 0);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            concurrency = 4
            default_scheme = "https"
            channel_capacity = 128
        "#;
        let cfg: XurlsConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.concurrency, 4);
        assert_eq!(cfg.default_scheme, "https");
        assert!(!cfg.unique);
        assert_eq!(cfg.queue_capacity(), 128);
    }

    #[test]
    fn dissect_settings_unknown_mode() {
        let err = DissectSettings::new("hosts", None, &XurlsConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownMode(ref m) if m == "hosts"));
        assert_eq!(err.to_string(), "unknown mode: hosts");
    }

    #[test]
    fn dissect_settings_missing_mode() {
        let err = DissectSettings::new("", None, &XurlsConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingMode));
    }

    #[test]
    fn dissect_settings_format_requires_template() {
        let cfg = XurlsConfig::default();
        assert!(matches!(
            DissectSettings::new("format", None, &cfg),
            Err(ConfigError::MissingFormat)
        ));
        assert!(DissectSettings::new("format", Some(""), &cfg).is_ok());
        assert!(DissectSettings::new("domains", None, &cfg).is_ok());
    }

    #[test]
    fn dissect_settings_rejects_zero_workers() {
        let cfg = XurlsConfig {
            concurrency: 0,
            ..XurlsConfig::default()
        };
        assert!(matches!(
            DissectSettings::new("paths", None, &cfg),
            Err(ConfigError::NoWorkers)
        ));
        assert!(matches!(DiscoverSettings::new(&cfg), Err(ConfigError::NoWorkers)));
    }
}
