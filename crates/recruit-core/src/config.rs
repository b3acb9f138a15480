use std::env;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::{debug, info, warn};

const CONFIG_ENV_VAR: &str = "RECRUIT_CONFIG";
const CONFIG_FILE: &str = "recruit.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ANSI color in tables and the calendar; also gated on stdout being a
    /// terminal.
    pub color: bool,

    /// IANA timezone name for "today" computations; RECRUIT_TIMEZONE
    /// overrides it.
    pub timezone: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            timezone: None,
        }
    }
}

impl Config {
    /// Resolution order: explicit `--config` path, the RECRUIT_CONFIG
    /// environment variable, then `<config dir>/recruit/recruit.toml`.
    /// An explicitly named file must exist; the discovered default may not.
    #[tracing::instrument(skip(override_path))]
    pub fn load(override_path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = override_path {
            info!(config = %path.display(), "loading config");
            return Self::load_file(path);
        }

        if let Ok(raw) = env::var(CONFIG_ENV_VAR) {
            let path = Path::new(&raw);
            info!(config = %path.display(), "loading config from environment");
            return Self::load_file(path);
        }

        if let Some(dir) = dirs::config_dir() {
            let path = dir.join("recruit").join(CONFIG_FILE);
            if path.exists() {
                info!(config = %path.display(), "loading config");
                return Self::load_file(&path);
            }
        }

        warn!("no config file found; using defaults");
        Ok(Self::default())
    }

    fn load_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed reading {}", path.display()))?;
        let cfg: Config = toml::from_str(&raw)
            .with_context(|| format!("failed parsing {}", path.display()))?;

        debug!(color = cfg.color, timezone = ?cfg.timezone, "loaded config");
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: Config = toml::from_str("").expect("parse");
        assert!(cfg.color);
        assert!(cfg.timezone.is_none());
    }

    #[test]
    fn fields_parse_from_toml() {
        let cfg: Config = toml::from_str("color = false\ntimezone = \"America/New_York\"")
            .expect("parse");
        assert!(!cfg.color);
        assert_eq!(cfg.timezone.as_deref(), Some("America/New_York"));
    }
}
