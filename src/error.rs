use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error on {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Player {puuid} not found in match {match_id}")]
    PlayerNotInMatch { puuid: String, match_id: String },

    #[error("No matches found in {0}")]
    NoMatches(String),
}
