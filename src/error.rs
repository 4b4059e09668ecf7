use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Riot API rejected the key (check RIOT_API_KEY, dev keys expire every 24h)")]
    Unauthorized,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Unexpected data shape: {0}")]
    DataShape(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid date range: start is after end")]
    InvalidDateRange,

    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    /// Maps a non-2xx status to an error. `what` names the resource for 404s.
    pub fn from_status(status: u16, what: &str) -> Self {
        match status {
            401 | 403 => AppError::Unauthorized,
            404 => AppError::NotFound(what.to_string()),
            429 => AppError::RateLimited,
            s => AppError::Upstream(format!("{} returned HTTP {}", what, s)),
        }
    }
}
