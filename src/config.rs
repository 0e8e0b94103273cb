//! Application configuration.
//!
//! Configuration is loaded from a TOML file at:
//! 1. `$PARCELSHELL_CONFIG` (environment variable)
//! 2. `~/.config/parcelshell/config.toml` (Linux/macOS)
//!    `%APPDATA%\parcelshell\config.toml` (Windows)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General behavior settings.
    pub general: GeneralConfig,
    /// Interactive shell settings.
    pub shell: ShellConfig,
    /// Column widths for the parcel table.
    pub display: DisplayConfig,
}

/// General behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub log_level: String,
    /// Override directory for the log file.
    pub cache_dir: Option<PathBuf>,
    /// Interface language ("en", "es"). Falls back to the system locale.
    pub lang: Option<String>,
}

/// How listings are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, human-readable columns.
    Table,
    /// One JSON object per parcel, one per line.
    Json,
}

/// Interactive shell settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Start the session with the three demo parcels.
    pub seed_examples: bool,
    /// Status used when the operator leaves the status prompt empty.
    pub default_status: String,
    /// Listing format.
    pub output: OutputFormat,
}

/// Column widths for the parcel table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Id column width.
    pub id_width: usize,
    /// Sender and receiver column width.
    pub name_width: usize,
    /// Status column width.
    pub status_width: usize,
}

// ── Default implementations ─────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            cache_dir: None,
            lang: None,
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            seed_examples: true,
            default_status: "Pending".to_string(),
            output: OutputFormat::Table,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            id_width: 10,
            name_width: 20,
            status_width: 12,
        }
    }
}

// ── Load / save ─────────────────────────────────────────────────

/// Load configuration, searching standard locations.
///
/// Returns the default configuration if no file is found or on parse error.
pub fn load_config() -> Config {
    match config_file_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Config::default(),
    }
}

/// Load configuration from an explicit file, falling back to defaults.
pub fn load_config_from(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(cfg) => {
                tracing::info!(path = %path.display(), "Loaded config");
                cfg
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to parse config, using defaults"
                );
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to read config file, using defaults"
            );
            Config::default()
        }
    }
}

/// Save configuration to the standard location.
pub fn save_config(config: &Config) -> anyhow::Result<()> {
    let path = config_file_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config file path"))?;
    save_config_to(config, &path)
}

/// Save configuration to an explicit file, creating parent directories.
pub fn save_config_to(config: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    tracing::info!(path = %path.display(), "Saved config");
    Ok(())
}

/// Determine the config file path (checking env var first, then standard dirs).
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var("PARCELSHELL_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|d| d.join("parcelshell").join("config.toml"))
}

/// Return the directory that holds the log file.
pub fn cache_dir(config: &Config) -> PathBuf {
    if let Some(ref dir) = config.general.cache_dir {
        return dir.clone();
    }
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parcelshell")
}

/// Return the log file path.
pub fn log_file_path(config: &Config) -> PathBuf {
    cache_dir(config).join("parcelshell.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.general.log_level, "warn");
        assert!(cfg.shell.seed_examples);
        assert_eq!(cfg.shell.default_status, "Pending");
        assert_eq!(cfg.shell.output, OutputFormat::Table);
        assert_eq!(cfg.display.name_width, 20);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let partial = r#"
[shell]
seed_examples = false
output = "json"

[display]
id_width = 6
"#;
        let cfg: Config = toml::from_str(partial).expect("parse partial");
        assert!(!cfg.shell.seed_examples);
        assert_eq!(cfg.shell.output, OutputFormat::Json);
        assert_eq!(cfg.display.id_width, 6);
        // Other fields use defaults
        assert_eq!(cfg.shell.default_status, "Pending");
        assert_eq!(cfg.display.status_width, 12);
        assert_eq!(cfg.general.log_level, "warn");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.general.lang = Some("es".to_string());
        cfg.shell.default_status = "In Transit".to_string();
        save_config_to(&cfg, &path).expect("save");

        let loaded = load_config_from(&path);
        assert_eq!(loaded.general.lang.as_deref(), Some("es"));
        assert_eq!(loaded.shell.default_status, "In Transit");
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[shell\nseed_examples = maybe").expect("write");
        let cfg = load_config_from(&path);
        assert!(cfg.shell.seed_examples);
    }

    #[test]
    fn test_log_file_path_honours_cache_dir() {
        let mut cfg = Config::default();
        cfg.general.cache_dir = Some(PathBuf::from("/tmp/parcels"));
        assert_eq!(
            log_file_path(&cfg),
            PathBuf::from("/tmp/parcels/parcelshell.log")
        );
    }
}
