pub mod client;
pub mod endpoints;
pub mod models;

use crate::error::AppError;
use endpoints::MatchIdQuery;
use models::{AccountDto, MatchDto};

/// The account and match lookups a report needs.
pub trait MatchSource {
    fn get_account(&self, game_name: &str, tag_line: &str) -> Result<AccountDto, AppError>;
    fn get_match_ids(&self, puuid: &str, query: &MatchIdQuery) -> Result<Vec<String>, AppError>;
    fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError>;
}
