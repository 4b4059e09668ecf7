// Endpoint URL builders for the Riot API and the static data hosts.

pub const DATA_DRAGON: &str = "https://ddragon.leagueoflegends.com";
pub const COMMUNITY_DRAGON: &str = "https://raw.communitydragon.org/latest/game/assets/characters";

/// Query for the match-ids-by-puuid endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchIdQuery {
    pub count: usize,
    pub match_type: String,
    /// Epoch seconds, inclusive.
    pub start_time: Option<i64>,
    /// Epoch seconds, exclusive.
    pub end_time: Option<i64>,
}

impl MatchIdQuery {
    pub fn new(count: usize) -> Self {
        MatchIdQuery {
            count,
            match_type: "tourney".to_string(),
            start_time: None,
            end_time: None,
        }
    }
}

pub fn account_url(routing: &str, game_name: &str, tag_line: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/riot/account/v1/accounts/by-riot-id/{}/{}",
        routing,
        urlencoding::encode(game_name),
        urlencoding::encode(tag_line)
    )
}

pub fn match_ids_url(routing: &str, puuid: &str, query: &MatchIdQuery) -> String {
    let mut url = format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/by-puuid/{}/ids?type={}&start=0&count={}",
        routing,
        urlencoding::encode(puuid),
        urlencoding::encode(&query.match_type),
        query.count
    );
    if let Some(start) = query.start_time {
        url.push_str(&format!("&startTime={}", start));
    }
    if let Some(end) = query.end_time {
        url.push_str(&format!("&endTime={}", end));
    }
    url
}

pub fn match_url(routing: &str, match_id: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/{}",
        routing,
        urlencoding::encode(match_id)
    )
}

pub fn versions_url() -> String {
    format!("{}/api/versions.json", DATA_DRAGON)
}

pub fn champions_url(version: &str) -> String {
    format!("{}/cdn/{}/data/en_US/champion.json", DATA_DRAGON, version)
}

pub fn champion_square_url(version: &str, champion_id: &str) -> String {
    format!("{}/cdn/{}/img/champion/{}.png", DATA_DRAGON, version, champion_id)
}

/// Circular HUD icons, most likely first. Skin-specific variants exist for a
/// handful of champions whose default asset is not `_circle_0`.
pub fn champion_circle_candidates(champion_id: &str) -> Vec<String> {
    let c = champion_id.to_lowercase();
    [
        format!("{c}_circle_0.png"),
        format!("{c}_circle.png"),
        format!("{c}_circle_0.{c}.png"),
        format!("{c}_circle_0.domina.png"),
        format!("{c}_circle_1.png"),
    ]
    .into_iter()
    .map(|file| format!("{}/{}/hud/{}", COMMUNITY_DRAGON, c, file))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_url_encodes_segments() {
        assert_eq!(
            account_url("europe", "SCL Kallesyn", "EUW"),
            "https://europe.api.riotgames.com/riot/account/v1/accounts/by-riot-id/SCL%20Kallesyn/EUW"
        );
    }

    #[test]
    fn match_ids_url_includes_optional_window() {
        let mut query = MatchIdQuery::new(20);
        assert_eq!(
            match_ids_url("europe", "abc", &query),
            "https://europe.api.riotgames.com/lol/match/v5/matches/by-puuid/abc/ids?type=tourney&start=0&count=20"
        );

        query.start_time = Some(100);
        query.end_time = Some(200);
        assert!(match_ids_url("europe", "abc", &query).ends_with("&count=20&startTime=100&endTime=200"));
    }

    #[test]
    fn circle_candidates_are_lowercase_and_ordered() {
        let urls = champion_circle_candidates("MissFortune");
        assert_eq!(urls.len(), 5);
        assert_eq!(
            urls[0],
            "https://raw.communitydragon.org/latest/game/assets/characters/missfortune/hud/missfortune_circle_0.png"
        );
        assert!(urls[2].ends_with("missfortune_circle_0.missfortune.png"));
        assert!(urls[4].ends_with("missfortune_circle_1.png"));
    }

    #[test]
    fn static_urls() {
        assert_eq!(
            champions_url("15.1.1"),
            "https://ddragon.leagueoflegends.com/cdn/15.1.1/data/en_US/champion.json"
        );
        assert_eq!(
            champion_square_url("15.1.1", "Velkoz"),
            "https://ddragon.leagueoflegends.com/cdn/15.1.1/img/champion/Velkoz.png"
        );
    }
}
