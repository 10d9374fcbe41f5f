use serde::Deserialize;
use std::{fs, io, path::PathBuf};

use crate::{
    ids::{ClockIds, IdGenerator, SequentialIds},
    locale::Locale,
};

fn default_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_slot() -> String {
    "mediciones_sanquinta".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_slot")]
    pub slot: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            slot: default_slot(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Clock,
    Sequential,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Clock => Box::new(ClockIds::default()),
            Self::Sequential => Box::new(SequentialIds::default()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryConfig {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub ids: IdStrategy,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub entry: EntryConfig,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        use std::env;

        let path = env::var("READINGS_CONFIG").unwrap_or_else(|_| "readings-config.toml".to_string());
        match fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path, "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!("failed to read config {path}: {e}")),
        }
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let cfg: AppConfig = toml::from_str(contents)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();

        assert_eq!(cfg.storage.dir, PathBuf::from("data"));
        assert_eq!(cfg.storage.slot, "mediciones_sanquinta");
        assert_eq!(cfg.entry.locale, Locale::Es);
        assert_eq!(cfg.entry.ids, IdStrategy::Clock);
    }

    #[test]
    fn parses_all_sections() {
        let cfg = AppConfig::from_toml(
            r#"
            [storage]
            dir = "/var/lib/mediciones"
            slot = "lecturas"

            [entry]
            locale = "en"
            ids = "sequential"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.storage.dir, PathBuf::from("/var/lib/mediciones"));
        assert_eq!(cfg.storage.slot, "lecturas");
        assert_eq!(cfg.entry.locale, Locale::En);
        assert_eq!(cfg.entry.ids, IdStrategy::Sequential);
    }

    #[test]
    fn rejects_unknown_locale() {
        assert!(AppConfig::from_toml("[entry]\nlocale = \"fr\"\n").is_err());
    }
}
