use std::fmt;

use serde::{Deserialize, Serialize};

/// User configuration, read from `.rangesum.toml` or
/// `~/.config/rangesum/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RangesumConfig {
    /// Sort collected numbers ascending before printing them.
    #[serde(default)]
    pub sort_collected: Option<bool>,

    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl RangesumConfig {
    pub fn sort_collected(&self) -> bool {
        self.sort_collected == Some(true)
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}
