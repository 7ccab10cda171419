//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.bioeval/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::content::{Language, ModuleId};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BioevalConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub language: Option<Language>,
    pub start_module: Option<ModuleId>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExportConfig {
    pub dir: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub language: Language,
    pub start_module: ModuleId,
    pub export_dir: PathBuf,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.bioeval/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".bioeval").join("config.toml"))
}

/// Load config from `~/.bioeval/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BioevalConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BioevalConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BioevalConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BioevalConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: BioevalConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Bioeval Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# language = "en"                    # "en" or "zh"
# start_module = "overview"          # overview, rag, qa, tool-calling, deep-research

# [export]
# dir = "/home/me/reports"           # Where CSV reports are written
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars
/// → CLI.
///
/// CLI values are `None` when the flag wasn't given.
pub fn resolve(
    config: &BioevalConfig,
    cli_language: Option<Language>,
    cli_module: Option<ModuleId>,
    cli_export_dir: Option<PathBuf>,
) -> ResolvedConfig {
    // Language: CLI → env → config → default
    let language = cli_language
        .or_else(|| env_value("BIOEVAL_LANGUAGE"))
        .or(config.general.language)
        .unwrap_or_default();

    // Start module: CLI → env → config → default
    let start_module = cli_module
        .or_else(|| env_value("BIOEVAL_MODULE"))
        .or(config.general.start_module)
        .unwrap_or_default();

    // Export dir: CLI → env → config → download dir → cwd
    let export_dir = cli_export_dir
        .or_else(|| std::env::var("BIOEVAL_EXPORT_DIR").ok().map(PathBuf::from))
        .or_else(|| config.export.dir.clone().map(PathBuf::from))
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    ResolvedConfig {
        language,
        start_module,
        export_dir,
    }
}

/// Reads an env var and parses it with the same names clap accepts.
/// Unparseable values are dropped with a warning rather than aborting.
fn env_value<T: ValueEnum>(var: &str) -> Option<T> {
    let raw = std::env::var(var).ok()?;
    match T::from_str(&raw, true) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unrecognized {} value: {:?}", var, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = BioevalConfig::default();
        assert!(config.general.language.is_none());
        assert!(config.general.start_module.is_none());
        assert!(config.export.dir.is_none());
    }

    #[test]
    fn resolve_uses_defaults_when_empty() {
        let config = BioevalConfig::default();
        let resolved = resolve(&config, None, None, None);
        assert_eq!(resolved.language, Language::En);
        assert_eq!(resolved.start_module, ModuleId::Overview);
    }

    #[test]
    fn resolve_config_values_override_defaults() {
        let config = BioevalConfig {
            general: GeneralConfig {
                language: Some(Language::Zh),
                start_module: Some(ModuleId::Rag),
            },
            export: ExportConfig {
                dir: Some("/tmp/reports".to_string()),
            },
        };
        let resolved = resolve(&config, None, None, None);
        assert_eq!(resolved.language, Language::Zh);
        assert_eq!(resolved.start_module, ModuleId::Rag);
        assert_eq!(resolved.export_dir, PathBuf::from("/tmp/reports"));
    }

    #[test]
    fn resolve_cli_flags_win() {
        let config = BioevalConfig {
            general: GeneralConfig {
                language: Some(Language::Zh),
                start_module: Some(ModuleId::Rag),
            },
            export: ExportConfig {
                dir: Some("/tmp/from-config".to_string()),
            },
        };
        let resolved = resolve(
            &config,
            Some(Language::En),
            Some(ModuleId::DeepResearch),
            Some(PathBuf::from("/tmp/from-cli")),
        );
        assert_eq!(resolved.language, Language::En);
        assert_eq!(resolved.start_module, ModuleId::DeepResearch);
        assert_eq!(resolved.export_dir, PathBuf::from("/tmp/from-cli"));
    }

    #[test]
    fn toml_round_trip() {
        let toml_str = r#"
[general]
language = "zh"
start_module = "tool-calling"

[export]
dir = "/data/reports"
"#;
        let config: BioevalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.language, Some(Language::Zh));
        assert_eq!(config.general.start_module, Some(ModuleId::ToolCalling));
        assert_eq!(config.export.dir.as_deref(), Some("/data/reports"));
    }

    #[test]
    fn sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
language = "zh"
"#;
        let config: BioevalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.language, Some(Language::Zh));
        assert!(config.general.start_module.is_none());
        assert!(config.export.dir.is_none());
    }
}
