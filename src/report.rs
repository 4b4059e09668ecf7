use crate::analysis::ratios::{compute_ratios, MatchRatios};
use crate::analysis::summary::{summarize, MatchSummary};
use crate::api::endpoints::MatchIdQuery;
use crate::api::models::{AccountDto, ChampionDirectory};
use crate::api::MatchSource;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AnalyzedMatch {
    pub summary: MatchSummary,
    pub ratios: MatchRatios,
}

/// One entry per requested match. A failed match keeps its slot so the
/// page shows what went wrong instead of silently dropping it.
#[derive(Debug)]
pub struct MatchCard {
    pub match_id: String,
    pub outcome: Result<AnalyzedMatch, AppError>,
}

#[derive(Debug)]
pub struct Report {
    pub account: AccountDto,
    pub cards: Vec<MatchCard>,
}

impl Report {
    pub fn analyzed(&self) -> impl Iterator<Item = &AnalyzedMatch> {
        self.cards.iter().filter_map(|c| c.outcome.as_ref().ok())
    }

    pub fn failures(&self) -> usize {
        self.cards.iter().filter(|c| c.outcome.is_err()).count()
    }
}

/// Most recent first, never more than `query.count`. Fewer is fine.
pub fn fetch_match_ids<S: MatchSource>(
    source: &S,
    puuid: &str,
    query: &MatchIdQuery,
) -> Result<Vec<String>, AppError> {
    let mut ids = source.get_match_ids(puuid, query)?;
    ids.truncate(query.count);
    Ok(ids)
}

pub fn analyze_match<S: MatchSource>(
    source: &S,
    match_id: &str,
    puuid: &str,
    champions: &ChampionDirectory,
) -> Result<AnalyzedMatch, AppError> {
    let match_data = source.get_match(match_id)?;
    let summary = summarize(&match_data, puuid, champions)?;
    let ratios = compute_ratios(&summary);
    Ok(AnalyzedMatch { summary, ratios })
}

/// Fetches and analyzes every match in order. `on_card` runs after each one.
pub fn build_report<S: MatchSource>(
    source: &S,
    account: AccountDto,
    match_ids: &[String],
    champions: &ChampionDirectory,
    mut on_card: impl FnMut(&MatchCard),
) -> Report {
    let mut cards = Vec::with_capacity(match_ids.len());
    for match_id in match_ids {
        let card = MatchCard {
            match_id: match_id.clone(),
            outcome: analyze_match(source, match_id, &account.puuid, champions),
        };
        on_card(&card);
        cards.push(card);
    }
    Report { account, cards }
}
