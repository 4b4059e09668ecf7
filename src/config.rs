use crate::error::AppError;
use std::env;
use std::time::Duration;

const DEFAULT_REGION: &str = "euw1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            AppError::ConfigError(
                "RIOT_API_KEY not found in environment or .env file".to_string(),
            )
        })?;

        let region = env::var("RIOT_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        let timeout = parse_timeout(env::var("RIOT_TIMEOUT_SECS").ok().as_deref())?;

        Ok(Config {
            api_key,
            region,
            timeout,
        })
    }

    /// Regional route used by the account and match endpoints.
    pub fn regional_routing(&self) -> &'static str {
        regional_routing(&self.region)
    }
}

pub fn regional_routing(region: &str) -> &'static str {
    match region.to_ascii_lowercase().as_str() {
        "na1" | "br1" | "la1" | "la2" | "americas" => "americas",
        "euw1" | "eun1" | "tr1" | "ru" | "me1" | "europe" => "europe",
        "kr" | "jp1" | "asia" => "asia",
        "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" | "sea" => "sea",
        _ => "europe",
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<Duration, AppError> {
    match raw {
        None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        Some(s) => s
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| AppError::ConfigError(format!("RIOT_TIMEOUT_SECS is not a number: {}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_platforms_to_regional_routes() {
        assert_eq!(regional_routing("euw1"), "europe");
        assert_eq!(regional_routing("NA1"), "americas");
        assert_eq!(regional_routing("kr"), "asia");
        assert_eq!(regional_routing("vn2"), "sea");
        assert_eq!(regional_routing("americas"), "americas");
        assert_eq!(regional_routing("unknown"), "europe");
    }

    #[test]
    fn timeout_defaults_and_validates() {
        assert_eq!(parse_timeout(None).unwrap(), Duration::from_secs(10));
        assert_eq!(parse_timeout(Some(" 3 ")).unwrap(), Duration::from_secs(3));
        assert!(matches!(parse_timeout(Some("soon")), Err(AppError::ConfigError(_))));
    }
}
