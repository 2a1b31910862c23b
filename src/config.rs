use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_WINDOW: usize = 25;
pub const DEFAULT_WINDOW_STEP: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub window: usize,
    pub window_step: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let snapshot_path = env::var("LEAGUE_INSIGHTS_SNAPSHOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_snapshot_path());

        let window = parse_count("LEAGUE_INSIGHTS_WINDOW", env::var("LEAGUE_INSIGHTS_WINDOW").ok(), DEFAULT_WINDOW)?;
        let window_step = parse_count(
            "LEAGUE_INSIGHTS_WINDOW_STEP",
            env::var("LEAGUE_INSIGHTS_WINDOW_STEP").ok(),
            DEFAULT_WINDOW_STEP,
        )?;

        Ok(Config {
            snapshot_path,
            window,
            window_step,
        })
    }

    pub fn default_snapshot_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".league_insights")
            .join("snapshot.json")
    }
}

fn parse_count(name: &str, raw: Option<String>, default: usize) -> Result<usize, AppError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| {
            AppError::ConfigError(format!("{} must be a non-negative integer, got {:?}", name, value))
        }),
    }
}
