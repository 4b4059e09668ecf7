use crate::error::AppError;
use serde::Deserialize;
use std::collections::HashMap;

// Account V1 response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
}

// Match V5 response
#[derive(Debug, Clone, Deserialize)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Milliseconds since the epoch.
    #[serde(default)]
    pub game_creation: i64,
    /// Seconds.
    #[serde(default)]
    pub game_duration: i64,
    pub participants: Vec<ParticipantDto>,
    #[serde(default)]
    pub teams: Vec<TeamDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_id: i64,
    pub champion_name: String,
    pub team_id: i32,
    #[serde(default)]
    pub riot_id_game_name: String,
    #[serde(default)]
    pub summoner_name: String,
    #[serde(default)]
    pub gold_earned: u64,
    #[serde(default)]
    pub total_damage_dealt_to_champions: u64,
}

impl ParticipantDto {
    pub fn display_name(&self) -> &str {
        if self.riot_id_game_name.is_empty() {
            &self.summoner_name
        } else {
            &self.riot_id_game_name
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub team_id: i32,
    pub win: bool,
    #[serde(default)]
    pub bans: Vec<BanDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BanDto {
    pub champion_id: i64,
}

// Data Dragon champion.json
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub id: String,
    pub name: String,
    pub key: String,
}

/// A champion as shown to the user: `id` is the URL-safe identifier
/// ("MissFortune"), `name` the display name ("Miss Fortune").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionRef {
    pub id: String,
    pub name: String,
}

/// Numeric champion key to champion, built once per run from Data Dragon.
#[derive(Debug, Clone, Default)]
pub struct ChampionDirectory {
    by_key: HashMap<i64, ChampionRef>,
}

impl ChampionDirectory {
    pub fn from_data_dragon(raw: DataDragonChampions) -> Result<Self, AppError> {
        let mut by_key = HashMap::with_capacity(raw.data.len());
        for info in raw.data.into_values() {
            let key = info.key.parse::<i64>().map_err(|_| {
                AppError::DataShape(format!("champion {} has non-numeric key {:?}", info.id, info.key))
            })?;
            by_key.insert(
                key,
                ChampionRef {
                    id: info.id,
                    name: info.name,
                },
            );
        }
        Ok(ChampionDirectory { by_key })
    }

    pub fn get(&self, key: i64) -> Option<&ChampionRef> {
        self.by_key.get(&key)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }
}
