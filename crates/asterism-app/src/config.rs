//! RON configuration for the asterism binary.
//!
//! Loaded from `--config PATH`, or else `~/.config/asterism/config.ron`.
//! Every field is optional; CLI flags override whatever the file says.
//!
//! Example config.ron:
//! ```ron
//! (
//!     duration_secs: 0.8,
//!     frame_rate: 30,
//!     reveal: BreadthFirst,
//!     renderer: Terminal,
//!     fallback_color: "c0c0ff",
//! )
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use asterism_graph::RevealMode;
use serde::{Deserialize, Serialize};

/// Where draw requests go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum RendererKind {
    /// Stars and growing lines drawn in the terminal.
    #[default]
    Terminal,
    /// Draw requests emitted as tracing events.
    Log,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seconds for one line to grow.
    pub duration_secs: f32,
    pub frame_rate: u32,
    pub reveal: RevealMode,
    pub renderer: RendererKind,
    /// Hex color for stars whose own color does not decode.
    pub fallback_color: String,
    /// Seconds to keep the finished constellation on screen.
    pub hold_secs: f32,
    /// Log file used while the terminal renderer owns stdout.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.0,
            frame_rate: 60,
            reveal: RevealMode::BreadthFirst,
            renderer: RendererKind::Terminal,
            fallback_color: "ffffff".into(),
            hold_secs: 2.0,
            log_file: None,
        }
    }
}

/// How the config was obtained, reported once logging is up.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
    /// The default file exists but could not be used.
    Fallback { path: PathBuf, error: String },
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigSource::Defaults => tracing::info!("No config file, using defaults"),
            ConfigSource::Fallback { path, error } => {
                tracing::warn!("Failed to load config from {:?}: {}", path, error);
                tracing::warn!("Falling back to default config");
            }
        }
    }
}

/// Default config path (~/.config/asterism/config.ron).
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("asterism").join("config.ron"))
}

/// Parse config text.
pub fn parse_config(text: &str) -> Result<AppConfig, ron::error::SpannedError> {
    ron::from_str(text)
}

fn load_config_from_file(path: &Path) -> Result<AppConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config = parse_config(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Load the config.
///
/// An explicit path must load. The default path falls back to defaults on
/// any problem.
pub fn load_config(explicit: Option<&Path>) -> Result<(AppConfig, ConfigSource)> {
    if let Some(path) = explicit {
        let config = load_config_from_file(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    let Some(path) = config_file_path() else {
        return Ok((AppConfig::default(), ConfigSource::Defaults));
    };
    if !path.exists() {
        return Ok((AppConfig::default(), ConfigSource::Defaults));
    }

    match load_config_from_file(&path) {
        Ok(config) => Ok((config, ConfigSource::File(path))),
        Err(e) => Ok((AppConfig::default(), ConfigSource::Fallback { path, error: format!("{e:#}") })),
    }
}
