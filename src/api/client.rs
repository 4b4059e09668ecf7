use crate::config::Config;
use crate::display::output::display_warning;
use crate::error::AppError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints::{self, MatchIdQuery};
use super::models::*;
use super::MatchSource;

// Per-second quota of personal/dev keys. The 2-minute quota is left to the
// 429 / Retry-After path.
const REQUESTS_PER_SECOND: NonZeroU32 = match NonZeroU32::new(20) {
    Some(n) => n,
    None => panic!("rate must be nonzero"),
};
const MAX_RETRIES: u32 = 3;
const USER_AGENT: &str = concat!("quick_match/", env!("CARGO_PKG_VERSION"));

pub struct RiotApiClient {
    config: Config,
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build();
        let rate_limiter = RateLimiter::direct(Quota::per_second(REQUESTS_PER_SECOND));
        RiotApiClient {
            config,
            agent,
            rate_limiter,
        }
    }

    fn throttle(&self) {
        let clock = DefaultClock::default();
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(clock.now()));
        }
    }

    /// GET `url` and return the body. `what` names the resource in errors.
    /// Static data hosts are called without the API key.
    fn execute_request(&self, url: &str, what: &str, authenticated: bool) -> Result<String, AppError> {
        let mut retry_count = 0;

        loop {
            if authenticated {
                self.throttle();
            }

            let mut request = self.agent.get(url);
            if authenticated {
                request = request.set("X-Riot-Token", &self.config.api_key);
            }

            match request.call() {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map_err(|e| AppError::Upstream(format!("{}: {}", what, e)));
                }
                Err(ureq::Error::Status(429, resp)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait = retry_after(resp.header("Retry-After"))
                        .unwrap_or_else(|| Duration::from_millis(2000 * (retry_count + 1) as u64));
                    display_warning(&format!(
                        "Rate limited, waiting {}ms before retry...",
                        wait.as_millis()
                    ));
                    thread::sleep(wait);
                    retry_count += 1;
                }
                Err(ureq::Error::Status(code, _)) => {
                    return Err(AppError::from_status(code, what));
                }
                Err(ureq::Error::Transport(t)) => {
                    return Err(AppError::Upstream(format!("{}: {}", what, t)));
                }
            }
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str, authenticated: bool) -> Result<T, AppError> {
        let body = self.execute_request(url, what, authenticated)?;
        decode(&body, what)
    }

    pub fn get_latest_version(&self) -> Result<String, AppError> {
        let versions: Vec<String> = self.get_json(&endpoints::versions_url(), "version list", false)?;
        versions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::DataShape("version list is empty".to_string()))
    }

    pub fn get_champions(&self, version: &str) -> Result<ChampionDirectory, AppError> {
        let raw: DataDragonChampions =
            self.get_json(&endpoints::champions_url(version), "champion data", false)?;
        ChampionDirectory::from_data_dragon(raw)
    }
}

impl MatchSource for RiotApiClient {
    fn get_account(&self, game_name: &str, tag_line: &str) -> Result<AccountDto, AppError> {
        let url = endpoints::account_url(self.config.regional_routing(), game_name, tag_line);
        self.get_json(&url, &format!("account {}#{}", game_name, tag_line), true)
    }

    fn get_match_ids(&self, puuid: &str, query: &MatchIdQuery) -> Result<Vec<String>, AppError> {
        let url = endpoints::match_ids_url(self.config.regional_routing(), puuid, query);
        self.get_json(&url, "match list", true)
    }

    fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        let url = endpoints::match_url(self.config.regional_routing(), match_id);
        self.get_json(&url, &format!("match {}", match_id), true)
    }
}

fn decode<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::DataShape(format!("{}: {}", what, e)))
}

fn retry_after(header: Option<&str>) -> Option<Duration> {
    header
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_retry_after_seconds() {
        assert_eq!(retry_after(Some("3")), Some(Duration::from_secs(3)));
        assert_eq!(retry_after(Some(" 10 ")), Some(Duration::from_secs(10)));
        assert_eq!(retry_after(Some("Wed, 21 Oct 2015 07:28:00 GMT")), None);
        assert_eq!(retry_after(None), None);
    }

    #[test]
    fn decode_reports_shape_errors() {
        let ids: Vec<String> = decode(r#"["EUW1_1", "EUW1_2"]"#, "match list").unwrap();
        assert_eq!(ids, vec!["EUW1_1", "EUW1_2"]);

        match decode::<AccountDto>(r#"{"gameName": "x"}"#, "account x#y") {
            Err(AppError::DataShape(msg)) => assert!(msg.starts_with("account x#y")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn sample_match_decodes() {
        let m: MatchDto = decode(crate::api::models::fixtures::SAMPLE_MATCH, "match").unwrap();
        assert_eq!(m.metadata.match_id, "EUW1_7000000001");
        assert_eq!(m.info.participants.len(), 10);
        assert_eq!(m.info.teams[1].bans.len(), 5);
    }
}
