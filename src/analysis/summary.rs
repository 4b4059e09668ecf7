use crate::api::models::{ChampionDirectory, ChampionRef, MatchDto, ParticipantDto, TeamDto};
use crate::error::AppError;
use chrono::{DateTime, Utc};

pub const TEAM_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub fn from_team_id(team_id: i32) -> Option<Side> {
        match team_id {
            100 => Some(Side::Blue),
            200 => Some(Side::Red),
            _ => None,
        }
    }

    pub fn team_id(self) -> i32 {
        match self {
            Side::Blue => 100,
            Side::Red => 200,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Blue => "blue",
            Side::Red => "red",
        }
    }
}

/// One participant. Name, champion and stats live together so they can't
/// drift out of alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSlot {
    pub name: String,
    pub champion: ChampionRef,
    pub gold_earned: u64,
    pub damage_to_champions: u64,
    pub is_searched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSheet {
    pub side: Side,
    pub win: bool,
    /// Participant order, always `TEAM_SIZE` long.
    pub players: Vec<PlayerSlot>,
    /// Order as returned by the API. `None` is a skipped ban.
    pub bans: Vec<Option<ChampionRef>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub match_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub duration_secs: i64,
    pub blue: TeamSheet,
    pub red: TeamSheet,
    pub player_side: Side,
    pub win: bool,
}

impl MatchSummary {
    pub fn team(&self, side: Side) -> &TeamSheet {
        match side {
            Side::Blue => &self.blue,
            Side::Red => &self.red,
        }
    }
}

/// Summarizes one match from the point of view of the player `puuid`.
pub fn summarize(
    match_data: &MatchDto,
    puuid: &str,
    champions: &ChampionDirectory,
) -> Result<MatchSummary, AppError> {
    let match_id = &match_data.metadata.match_id;
    let info = &match_data.info;

    let searched = info
        .participants
        .iter()
        .find(|p| p.puuid == puuid)
        .ok_or_else(|| AppError::NotFound(format!("searched player in match {}", match_id)))?;
    let player_side = side_of(searched, match_id)?;

    let mut blue_players = Vec::with_capacity(TEAM_SIZE);
    let mut red_players = Vec::with_capacity(TEAM_SIZE);
    for participant in &info.participants {
        let slot = PlayerSlot {
            name: participant.display_name().to_string(),
            champion: pick_champion(participant, champions),
            gold_earned: participant.gold_earned,
            damage_to_champions: participant.total_damage_dealt_to_champions,
            is_searched: participant.puuid == puuid,
        };
        match side_of(participant, match_id)? {
            Side::Blue => blue_players.push(slot),
            Side::Red => red_players.push(slot),
        }
    }

    let blue = team_sheet(Side::Blue, blue_players, &info.teams, champions, match_id)?;
    let red = team_sheet(Side::Red, red_players, &info.teams, champions, match_id)?;
    let win = match player_side {
        Side::Blue => blue.win,
        Side::Red => red.win,
    };

    Ok(MatchSummary {
        match_id: match_id.clone(),
        created_at: creation_time(info.game_creation),
        duration_secs: info.game_duration,
        blue,
        red,
        player_side,
        win,
    })
}

fn side_of(participant: &ParticipantDto, match_id: &str) -> Result<Side, AppError> {
    Side::from_team_id(participant.team_id).ok_or_else(|| {
        AppError::DataShape(format!(
            "match {}: unknown teamId {}",
            match_id, participant.team_id
        ))
    })
}

fn team_sheet(
    side: Side,
    players: Vec<PlayerSlot>,
    teams: &[TeamDto],
    champions: &ChampionDirectory,
    match_id: &str,
) -> Result<TeamSheet, AppError> {
    if players.len() != TEAM_SIZE {
        return Err(AppError::DataShape(format!(
            "match {}: {} side has {} participants, expected {}",
            match_id,
            side.label(),
            players.len(),
            TEAM_SIZE
        )));
    }

    let team = teams
        .iter()
        .find(|t| t.team_id == side.team_id())
        .ok_or_else(|| {
            AppError::DataShape(format!("match {}: no team entry for {} side", match_id, side.label()))
        })?;

    let bans = team
        .bans
        .iter()
        .map(|ban| champions.get(ban.champion_id).cloned())
        .collect();

    Ok(TeamSheet {
        side,
        win: team.win,
        players,
        bans,
    })
}

// championName in match-v5 is already the URL-safe id; the directory adds
// the display name.
fn pick_champion(participant: &ParticipantDto, champions: &ChampionDirectory) -> ChampionRef {
    champions
        .get(participant.champion_id)
        .cloned()
        .unwrap_or_else(|| ChampionRef {
            id: participant.champion_name.clone(),
            name: participant.champion_name.clone(),
        })
}

fn creation_time(millis: i64) -> Option<DateTime<Utc>> {
    if millis <= 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}
