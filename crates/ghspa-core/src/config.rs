use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shim configuration, injected into each load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShimConfig {
    /// Site is served as a project sub-path (`user.github.io/<repo>/`) rather
    /// than from the domain root. The first path segment is then kept out of
    /// the encoded path and put back on decode.
    pub project_pages: bool,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            project_pages: true,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn config_path() -> Result<std::path::PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ghspa")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_or_init() -> Result<ShimConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ShimConfig::default();
        write_default(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<ShimConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: ShimConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &ShimConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_project_pages() {
        assert!(ShimConfig::default().project_pages);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ShimConfig {
            project_pages: false,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ShimConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_missing_key_uses_default() {
        let cfg: ShimConfig = toml::from_str("").unwrap();
        assert!(cfg.project_pages);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "project_pages = false\n").unwrap();
        assert!(!load_from(&path).unwrap().project_pages);
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "project_pages = \"yes\"\n").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid config"));
    }

    #[test]
    fn write_default_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        write_default(&path, &ShimConfig::default()).unwrap();
        assert_eq!(load_from(&path).unwrap(), ShimConfig::default());
    }
}
