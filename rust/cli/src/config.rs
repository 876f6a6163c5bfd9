//! Layered table configuration: defaults, then a TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fs;

use holdem_ai::PlayerStyleConfig;
use holdem_engine::engine::MAX_PLAYERS;
use holdem_engine::odds::DEFAULT_EQUITY_ITERATIONS;
use holdem_engine::player::Chips;

pub const ENV_CONFIG: &str = "HOLDEM_CONFIG";
pub const ENV_SEED: &str = "HOLDEM_SEED";
pub const ENV_STACK: &str = "HOLDEM_STACK";
pub const ENV_SMALL_BLIND: &str = "HOLDEM_SMALL_BLIND";
pub const ENV_BIG_BLIND: &str = "HOLDEM_BIG_BLIND";
pub const ENV_OPPONENTS: &str = "HOLDEM_OPPONENTS";
pub const ENV_EQUITY_ITERATIONS: &str = "HOLDEM_EQUITY_ITERATIONS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub seed: Option<u64>,
    /// Style ids, one per opponent seat.
    pub opponents: Vec<String>,
    pub equity_iterations: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
    pub opponents: ValueSource,
    pub equity_iterations: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
            opponents: ValueSource::Default,
            equity_iterations: ValueSource::Default,
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
            starting_stack: 100.0,
            small_blind: 0.5,
            big_blind: 1.0,
            seed: None,
            opponents: vec!["tag".into(), "lag".into(), "station".into()],
            equity_iterations: DEFAULT_EQUITY_ITERATIONS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
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
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.opponents {
            cfg.opponents = v;
            sources.opponents = ValueSource::File;
        }
        if let Some(v) = f.equity_iterations {
            cfg.equity_iterations = v;
            sources.equity_iterations = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var(ENV_STACK)
        && !stack.is_empty()
    {
        cfg.starting_stack = parse_chips("starting_stack", &stack)?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(sb) = std::env::var(ENV_SMALL_BLIND)
        && !sb.is_empty()
    {
        cfg.small_blind = parse_chips("small_blind", &sb)?;
        sources.small_blind = ValueSource::Env;
    }
    if let Ok(bb) = std::env::var(ENV_BIG_BLIND)
        && !bb.is_empty()
    {
        cfg.big_blind = parse_chips("big_blind", &bb)?;
        sources.big_blind = ValueSource::Env;
    }
    if let Ok(list) = std::env::var(ENV_OPPONENTS)
        && !list.is_empty()
    {
        cfg.opponents = parse_list(&list);
        sources.opponents = ValueSource::Env;
    }
    if let Ok(iters) = std::env::var(ENV_EQUITY_ITERATIONS)
        && !iters.is_empty()
    {
        cfg.equity_iterations = iters.parse().map_err(|_| {
            ConfigError::Invalid(format!("Invalid equity_iterations: {}", iters))
        })?;
        sources.equity_iterations = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<Chips>,
    #[serde(default)]
    small_blind: Option<Chips>,
    #[serde(default)]
    big_blind: Option<Chips>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    opponents: Option<Vec<String>>,
    #[serde(default)]
    equity_iterations: Option<usize>,
}

fn parse_chips(field: &str, s: &str) -> Result<Chips, ConfigError> {
    s.trim()
        .parse::<Chips>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::Invalid(format!("Invalid {}: {}", field, s)))
}

fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|item| item.trim().to_ascii_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack <= 0.0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if cfg.small_blind <= 0.0 || cfg.small_blind > cfg.big_blind {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: blinds must satisfy 0 < small_blind <= big_blind, got {}/{}",
            cfg.small_blind, cfg.big_blind
        )));
    }
    let max_opponents = MAX_PLAYERS - 1;
    if cfg.opponents.is_empty() || cfg.opponents.len() > max_opponents {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: opponents must list 1-{} styles, got {}",
            max_opponents,
            cfg.opponents.len()
        )));
    }
    for id in &cfg.opponents {
        PlayerStyleConfig::preset(id)
            .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    }
    if cfg.equity_iterations == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: equity_iterations must be >=1".into(),
        ));
    }
    Ok(())
}
