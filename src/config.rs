use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub filters: FiltersConfig,
}

#[derive(Debug, Deserialize)]
pub struct FiltersConfig {
    /// Directories searched by `--list`.
    #[serde(default)]
    pub dirs: Vec<PathBuf>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Config {
    /// Values given on the command line replace the config's; empty ones leave it alone.
    pub fn apply_cli(&mut self, dirs: &[PathBuf], extensions: &[String]) {
        if !dirs.is_empty() {
            self.filters.dirs = dirs.to_vec();
        }
        if !extensions.is_empty() {
            self.filters.extensions = extensions.to_vec();
        }
    }
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            dirs: Vec::new(),
            extensions: default_extensions(),
        }
    }
}

pub fn default_extensions() -> Vec<String> {
    ["comp", "glsl", "hlsl", "frag"].map(String::from).to_vec()
}

/// `filterscript.toml` in the working directory, then `~/.config/filterscript/config.toml`,
/// then the platform config directory.
pub fn find_config() -> Option<PathBuf> {
    let local = PathBuf::from("filterscript.toml");
    if local.exists() {
        return Some(local);
    }
    if let Some(home) = dirs::home_dir() {
        let xdg = home.join(".config").join("filterscript").join("config.toml");
        if xdg.exists() {
            return Some(xdg);
        }
    }
    if let Some(config_dir) = dirs::config_dir() {
        let platform = config_dir.join("filterscript").join("config.toml");
        if platform.exists() {
            return Some(platform);
        }
    }
    None
}

pub fn load_config(path: &Path) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    parse_config(&content)
}

fn parse_config(content: &str) -> Option<Config> {
    match toml::from_str(content) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("Invalid config: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert!(cfg.filters.dirs.is_empty());
        assert_eq!(cfg.filters.extensions, default_extensions());
    }

    #[test]
    fn reads_filter_section() {
        let cfg = parse_config("[filters]\ndirs = [\"shaders\", \"/opt/filters\"]\n").unwrap();
        assert_eq!(
            cfg.filters.dirs,
            vec![PathBuf::from("shaders"), PathBuf::from("/opt/filters")]
        );
        assert_eq!(cfg.filters.extensions.len(), 4);
    }

    #[test]
    fn cli_values_override_only_when_given() {
        let mut cfg = parse_config("[filters]\ndirs = [\"shaders\"]\nextensions = [\"fx\"]\n").unwrap();
        cfg.apply_cli(&[], &[]);
        assert_eq!(cfg.filters.dirs, vec![PathBuf::from("shaders")]);
        assert_eq!(cfg.filters.extensions, vec!["fx".to_string()]);

        cfg.apply_cli(&[PathBuf::from("mine")], &["comp".to_string()]);
        assert_eq!(cfg.filters.dirs, vec![PathBuf::from("mine")]);
        assert_eq!(cfg.filters.extensions, vec!["comp".to_string()]);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(parse_config("[filters\n").is_none());
        assert!(parse_config("[filters]\ndirs = 3\n").is_none());
    }
}
