use crate::api::endpoints;
use crate::cache::IconCache;
use std::collections::HashMap;
use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// First circular icon that answers the probe. `None` when every candidate
/// is dead or unreachable.
pub fn find_circle_icon(champion_id: &str, mut probe: impl FnMut(&str) -> bool) -> Option<String> {
    endpoints::champion_circle_candidates(champion_id)
        .into_iter()
        .find(|url| probe(url))
}

pub struct IconResolver {
    version: String,
    agent: Option<ureq::Agent>,
    memo: HashMap<String, String>,
    store: Option<IconCache>,
}

impl IconResolver {
    /// `probe = false` skips the HEAD requests and uses portraits directly.
    pub fn new(version: &str, probe: bool, store: Option<IconCache>) -> Self {
        let agent = probe.then(|| ureq::AgentBuilder::new().timeout(PROBE_TIMEOUT).build());
        IconResolver {
            version: version.to_string(),
            agent,
            memo: HashMap::new(),
            store,
        }
    }

    pub fn icon_url(&mut self, champion_id: &str) -> String {
        let agent = self.agent.clone();
        self.lookup(champion_id, agent.as_ref().map(|a| move |u: &str| head_ok(a, u)))
    }

    /// Only a confirmed circle icon is written to the store; the portrait
    /// fallback lives in the per-run memo so a bad network run is not pinned.
    fn lookup<P: FnMut(&str) -> bool>(&mut self, champion_id: &str, probe: Option<P>) -> String {
        if let Some(url) = self.memo.get(champion_id) {
            return url.clone();
        }

        let stored = self
            .store
            .as_ref()
            .and_then(|s| s.get(champion_id))
            .map(str::to_string);

        let url = match stored {
            Some(stored) => stored,
            None => match probe.and_then(|p| find_circle_icon(champion_id, p)) {
                Some(url) => {
                    if let Some(store) = self.store.as_mut() {
                        store.insert(champion_id, &url);
                    }
                    url
                }
                None => endpoints::champion_square_url(&self.version, champion_id),
            },
        };

        self.memo.insert(champion_id.to_string(), url.clone());
        url
    }

    pub fn into_store(self) -> Option<IconCache> {
        self.store
    }
}

fn head_ok(agent: &ureq::Agent, url: &str) -> bool {
    matches!(agent.head(url).call(), Ok(resp) if resp.status() == 200)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_live_candidate_wins() {
        let mut probed = Vec::new();
        let url = find_circle_icon("Mel", |u| {
            probed.push(u.to_string());
            u.ends_with("mel_circle.png")
        })
        .unwrap();
        assert!(url.ends_with("/mel/hud/mel_circle.png"));
        assert_eq!(probed.len(), 2);
    }

    #[test]
    fn no_live_candidate_is_none() {
        assert_eq!(find_circle_icon("Velkoz", |_| false), None);
    }

    #[test]
    fn dead_probes_fall_back_without_touching_store() {
        let mut resolver = IconResolver::new("15.1.1", false, Some(IconCache::default()));
        let url = resolver.lookup("Ahri", Some(|_: &str| false));
        assert_eq!(url, "https://ddragon.leagueoflegends.com/cdn/15.1.1/img/champion/Ahri.png");
        assert_eq!(resolver.icon_url("Ahri"), url);

        let store = resolver.into_store().unwrap();
        assert!(store.icons.is_empty());
        assert_eq!(store.get("Ahri"), None);
    }

    #[test]
    fn live_circle_icon_is_stored() {
        let mut resolver = IconResolver::new("15.1.1", false, Some(IconCache::default()));
        let url = resolver.lookup("Ahri", Some(|u: &str| u.ends_with("ahri_circle_0.png")));
        assert!(url.ends_with("/ahri/hud/ahri_circle_0.png"));

        let store = resolver.into_store().unwrap();
        assert_eq!(store.get("Ahri"), Some(url.as_str()));
    }

    #[test]
    fn without_probing_uses_portrait_and_memoizes() {
        let mut resolver = IconResolver::new("15.1.1", false, None);
        let first = resolver.icon_url("Ahri");
        assert_eq!(first, "https://ddragon.leagueoflegends.com/cdn/15.1.1/img/champion/Ahri.png");
        assert_eq!(resolver.icon_url("Ahri"), first);
        assert_eq!(resolver.memo.len(), 1);
    }

    #[test]
    fn stored_entries_skip_probing() {
        let mut store = IconCache::default();
        store.insert("Jinx", "https://example.invalid/jinx.png");
        let mut resolver = IconResolver::new("15.1.1", false, Some(store));
        assert_eq!(resolver.icon_url("Jinx"), "https://example.invalid/jinx.png");
    }
}
