use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Duration, Utc};
use crate::error::AppError;

/// Resolved icon URLs older than this are probed again.
pub const ICON_MAX_AGE_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CachedIcon {
    pub url: String,
    pub cached_at: DateTime<Utc>,
}

/// On-disk memo of champion id -> icon URL, shared across runs.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct IconCache {
    pub icons: HashMap<String, CachedIcon>,
}

impl IconCache {
    pub fn get_cache_path() -> PathBuf {
        let cache_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".quick_match");

        let _ = fs::create_dir_all(&cache_dir);

        cache_dir.join("icons.json")
    }

    pub fn load() -> Result<Self, AppError> {
        Self::load_from(&Self::get_cache_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                AppError::DataShape(format!("Failed to parse icon cache: {}", e))
            }),
            // Cache doesn't exist yet
            Err(_) => Ok(IconCache::default()),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_cache_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            AppError::DataShape(format!("Failed to serialize icon cache: {}", e))
        })?;

        fs::write(path, json).map_err(|e| {
            AppError::Io(format!("Failed to write icon cache {}: {}", path.display(), e))
        })
    }

    /// Fresh entry for `champion_id`, if any.
    pub fn get(&self, champion_id: &str) -> Option<&str> {
        self.icons
            .get(champion_id)
            .filter(|icon| !is_stale(icon.cached_at, Utc::now()))
            .map(|icon| icon.url.as_str())
    }

    pub fn insert(&mut self, champion_id: &str, url: &str) {
        self.icons.insert(
            champion_id.to_string(),
            CachedIcon {
                url: url.to_string(),
                cached_at: Utc::now(),
            },
        );
    }

    pub fn prune_stale(&mut self) {
        let now = Utc::now();
        self.icons.retain(|_, icon| !is_stale(icon.cached_at, now));
    }
}

fn is_stale(cached_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(cached_at) > Duration::days(ICON_MAX_AGE_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("quick_match_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn round_trips_through_disk() {
        let path = temp_path("icons_roundtrip");
        let mut cache = IconCache::default();
        cache.insert("Ahri", "https://example.invalid/ahri.png");
        cache.save_to(&path).unwrap();

        let loaded = IconCache::load_from(&path).unwrap();
        assert_eq!(loaded.get("Ahri"), Some("https://example.invalid/ahri.png"));
        assert_eq!(loaded.get("Jinx"), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_empty_cache() {
        let cache = IconCache::load_from(&temp_path("icons_missing")).unwrap();
        assert!(cache.icons.is_empty());
    }

    #[test]
    fn stale_entries_are_ignored_and_pruned() {
        let mut cache = IconCache::default();
        cache.insert("Vi", "fresh");
        cache.icons.insert(
            "Ashe".to_string(),
            CachedIcon {
                url: "old".to_string(),
                cached_at: Utc::now() - Duration::days(ICON_MAX_AGE_DAYS + 1),
            },
        );

        assert_eq!(cache.get("Vi"), Some("fresh"));
        assert_eq!(cache.get("Ashe"), None);

        cache.prune_stale();
        assert_eq!(cache.icons.len(), 1);
    }
}
