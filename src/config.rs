use crate::models::Difficulty;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_EASY_SECONDS: u32 = 15;
pub const DEFAULT_NORMAL_SECONDS: u32 = 10;
pub const DEFAULT_HARD_SECONDS: u32 = 7;
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 2000;
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_LOG_FILE: &str = "quiz_debug.log";

pub const ENV_EASY_SECONDS: &str = "QUIZ_EASY_SECONDS";
pub const ENV_NORMAL_SECONDS: &str = "QUIZ_NORMAL_SECONDS";
pub const ENV_HARD_SECONDS: &str = "QUIZ_HARD_SECONDS";
pub const ENV_REVEAL_MS: &str = "QUIZ_REVEAL_MS";
pub const ENV_BANK_FILE: &str = "QUIZ_BANK_FILE";
pub const ENV_LOG_FILE: &str = "QUIZ_LOG_FILE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub easy_seconds: u32,
    pub normal_seconds: u32,
    pub hard_seconds: u32,
    pub reveal_delay: Duration,
    pub tick_interval: Duration,
    pub bank_file: Option<PathBuf>,
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            easy_seconds: DEFAULT_EASY_SECONDS,
            normal_seconds: DEFAULT_NORMAL_SECONDS,
            hard_seconds: DEFAULT_HARD_SECONDS,
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
            tick_interval: TICK_INTERVAL,
            bank_file: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl GameConfig {
    /// Seconds on the clock for each question at `difficulty`.
    pub fn time_budget(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy_seconds,
            Difficulty::Normal => self.normal_seconds,
            Difficulty::Hard => self.hard_seconds,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let positive = |key: &'static str, default: u64| -> Result<u64, ConfigError> {
            match lookup(key) {
                None => Ok(default),
                Some(value) => match value.trim().parse::<u64>() {
                    Ok(n) if n > 0 => Ok(n),
                    _ => Err(ConfigError::InvalidNumber { key, value }),
                },
            }
        };
        let seconds = |key: &'static str, default: u32| -> Result<u32, ConfigError> {
            let n = positive(key, default as u64)?;
            u32::try_from(n).map_err(|_| ConfigError::InvalidNumber {
                key,
                value: n.to_string(),
            })
        };

        Ok(Self {
            easy_seconds: seconds(ENV_EASY_SECONDS, defaults.easy_seconds)?,
            normal_seconds: seconds(ENV_NORMAL_SECONDS, defaults.normal_seconds)?,
            hard_seconds: seconds(ENV_HARD_SECONDS, defaults.hard_seconds)?,
            reveal_delay: Duration::from_millis(positive(
                ENV_REVEAL_MS,
                DEFAULT_REVEAL_DELAY_MS,
            )?),
            tick_interval: defaults.tick_interval,
            bank_file: lookup(ENV_BANK_FILE)
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            log_file: lookup(ENV_LOG_FILE)
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
        })
    }
}
