use std::path::Path;

use anyhow::{Context, Result};
use ascii_effect::EffectOptions;
use serde::Deserialize;

/// Contents of an effect configuration file.
///
/// ```toml
/// [effect]
/// resolution = 0.2
/// color = true
/// density = "medium"
///
/// [display]
/// width = 1280
/// height = 720
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub effect: EffectOptions,
    pub display: DisplayConfig,
}

/// Display size in device pixels; unset sides fall back to the input image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {:?}", path))?;
    parse_config(&content).with_context(|| format!("failed to parse config {:?}", path))
}

pub fn parse_config(content: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(content)?)
}
