//! Configuration layer: defaults, then an optional toml file pointed to by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment overrides. Each resolved
//! value remembers where it came from so `cfg` can report it.

use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub starting_stack: u64,
    pub small_blind: u64,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

impl ValueSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueSource::Default => "default",
            ValueSource::File => "file",
            ValueSource::Env => "env",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 2,
            starting_stack: 20_000,
            small_blind: 50,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "io: {e}"),
            ConfigError::Parse(e) => write!(f, "parse: {e}"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    players: Option<usize>,
    starting_stack: Option<u64>,
    small_blind: Option<u64>,
    seed: Option<u64>,
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HOLDEM_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        apply_file(&mut cfg, &mut sources, f);
    }

    apply_env(&mut cfg, &mut sources);
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn apply_file(cfg: &mut Config, sources: &mut ConfigSources, f: FileConfig) {
    if let Some(v) = f.players {
        cfg.players = v;
        sources.players = ValueSource::File;
    }
    if let Some(v) = f.starting_stack {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::File;
    }
    if let Some(v) = f.small_blind {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::File;
    }
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::File;
    }
}

fn apply_env(cfg: &mut Config, sources: &mut ConfigSources) {
    if let Some(v) = env_u64("HOLDEM_PLAYERS") {
        cfg.players = v as usize;
        sources.players = ValueSource::Env;
    }
    if let Some(v) = env_u64("HOLDEM_STARTING_STACK") {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(v) = env_u64("HOLDEM_SMALL_BLIND") {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_u64("HOLDEM_SEED") {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert_eq!(cfg.players, 2);
        assert_eq!(cfg.starting_stack, 20_000);
        assert_eq!(cfg.small_blind, 50);
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let f: FileConfig = toml::from_str("players = 3\nsmall_blind = 100\n").unwrap();
        let mut cfg = Config::default();
        let mut sources = ConfigSources::default();
        apply_file(&mut cfg, &mut sources, f);
        assert_eq!(cfg.players, 3);
        assert_eq!(cfg.small_blind, 100);
        assert_eq!(cfg.starting_stack, 20_000);
        assert_eq!(sources.players.as_str(), "file");
        assert_eq!(sources.starting_stack.as_str(), "default");
    }
}
