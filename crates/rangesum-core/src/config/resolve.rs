use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::RangesumConfig;

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG: &str = ".rangesum.toml";

/// Config file looked up under the home directory.
pub const GLOBAL_CONFIG: &str = ".config/rangesum/config.toml";

/// Locations searched for a config file, in priority order:
/// 1. `.rangesum.toml` in the working directory
/// 2. `~/.config/rangesum/config.toml`
///
/// First existing file wins. Returns `None` when neither exists.
pub fn find_config_file(cwd: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let local = cwd.join(LOCAL_CONFIG);
    if local.is_file() {
        return Some(local);
    }
    home.map(|h| h.join(GLOBAL_CONFIG)).filter(|p| p.is_file())
}

/// Read and parse one config file.
pub fn load_config(path: &Path) -> Result<RangesumConfig> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: RangesumConfig =
        toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Platform-aware home directory lookup.
pub fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}
