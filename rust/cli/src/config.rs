use std::fs;

use boardrank_engine::strength::{
    FLOP_DIVISOR, RIVER_DIVISOR, Scoring, StreetDivisors, TURN_DIVISOR,
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "BOARDRANK_CONFIG";

/// Which strength formula an analysis uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrengthMode {
    /// Position within the field, rescaled to 0-100
    Relative,
    /// Hands beaten over a fixed per-street divisor
    Street,
}

/// How the ranked field is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// One line per tier in starting-hand notation
    Condensed,
    /// One line per hole combination
    Full,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisSettings {
    pub strength: StrengthMode,
    pub flop_divisor: u32,
    pub turn_divisor: u32,
    pub river_divisor: u32,
    pub seed: Option<u64>,
    pub view: View,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            strength: StrengthMode::Relative,
            flop_divisor: FLOP_DIVISOR,
            turn_divisor: TURN_DIVISOR,
            river_divisor: RIVER_DIVISOR,
            seed: None,
            view: View::Condensed,
        }
    }
}

impl AnalysisSettings {
    pub fn scoring(&self) -> Scoring {
        match self.strength {
            StrengthMode::Relative => Scoring::RelativePosition,
            StrengthMode::Street => Scoring::StreetNormalized(StreetDivisors {
                flop: self.flop_divisor,
                turn: self.turn_divisor,
                river: self.river_divisor,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct SettingSources {
    pub strength: ValueSource,
    pub flop_divisor: ValueSource,
    pub turn_divisor: ValueSource,
    pub river_divisor: ValueSource,
    pub seed: ValueSource,
    pub view: ValueSource,
}

impl Default for SettingSources {
    fn default() -> Self {
        Self {
            strength: ValueSource::Default,
            flop_divisor: ValueSource::Default,
            turn_divisor: ValueSource::Default,
            river_divisor: ValueSource::Default,
            seed: ValueSource::Default,
            view: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsResolved {
    pub settings: AnalysisSettings,
    pub sources: SettingSources,
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves settings: defaults, then the TOML file named by `BOARDRANK_CONFIG`,
/// then `BOARDRANK_*` variables. `lookup` stands in for the environment.
pub fn load_with_sources_from<F>(lookup: F) -> Result<SettingsResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = AnalysisSettings::default();
    let mut sources = SettingSources::default();

    if let Some(path) = lookup(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileSettings = toml::from_str(&s)?;
        if let Some(v) = f.strength {
            cfg.strength = v;
            sources.strength = ValueSource::File;
        }
        if let Some(v) = f.flop_divisor {
            cfg.flop_divisor = v;
            sources.flop_divisor = ValueSource::File;
        }
        if let Some(v) = f.turn_divisor {
            cfg.turn_divisor = v;
            sources.turn_divisor = ValueSource::File;
        }
        if let Some(v) = f.river_divisor {
            cfg.river_divisor = v;
            sources.river_divisor = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.view {
            cfg.view = v;
            sources.view = ValueSource::File;
        }
    }

    if let Some(v) = env_value(&lookup, "BOARDRANK_STRENGTH") {
        cfg.strength = StrengthMode::from_str(&v, true)
            .map_err(|_| ConfigError::Invalid(format!("Invalid strength: {}", v)))?;
        sources.strength = ValueSource::Env;
    }
    if let Some(v) = env_value(&lookup, "BOARDRANK_FLOP_DIVISOR") {
        cfg.flop_divisor = parse_number(&v, "flop_divisor")?;
        sources.flop_divisor = ValueSource::Env;
    }
    if let Some(v) = env_value(&lookup, "BOARDRANK_TURN_DIVISOR") {
        cfg.turn_divisor = parse_number(&v, "turn_divisor")?;
        sources.turn_divisor = ValueSource::Env;
    }
    if let Some(v) = env_value(&lookup, "BOARDRANK_RIVER_DIVISOR") {
        cfg.river_divisor = parse_number(&v, "river_divisor")?;
        sources.river_divisor = ValueSource::Env;
    }
    if let Some(v) = env_value(&lookup, "BOARDRANK_SEED") {
        cfg.seed = Some(parse_number(&v, "seed")?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value(&lookup, "BOARDRANK_VIEW") {
        cfg.view = View::from_str(&v, true)
            .map_err(|_| ConfigError::Invalid(format!("Invalid view: {}", v)))?;
        sources.view = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(SettingsResolved {
        settings: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    #[serde(default)]
    strength: Option<StrengthMode>,
    #[serde(default)]
    flop_divisor: Option<u32>,
    #[serde(default)]
    turn_divisor: Option<u32>,
    #[serde(default)]
    river_divisor: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    view: Option<View>,
}

fn env_value<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(v: &str, name: &str) -> Result<T, ConfigError> {
    v.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", name, v)))
}

fn validate(cfg: &AnalysisSettings) -> Result<(), ConfigError> {
    for (name, value) in [
        ("flop_divisor", cfg.flop_divisor),
        ("turn_divisor", cfg.turn_divisor),
        ("river_divisor", cfg.river_divisor),
    ] {
        if value == 0 {
            return Err(ConfigError::Invalid(format!(
                "Invalid configuration: {} must be >0",
                name
            )));
        }
    }
    Ok(())
}
