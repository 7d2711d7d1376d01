use std::fs::{rename, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::Settings;
use crate::session::{MatchHistory, MatchHistoryRecord, Sport};

use super::error::StoreError;
use super::STORE_VERSION;

/// On-disk encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreFormat {
    Json,
    Binary,
}

impl StoreFormat {
    /// `.json` files are JSON; anything else is bincode.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StoreFormat::Json,
            _ => StoreFormat::Binary,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppStore {
    /// Save format version
    pub version: u32,
    /// Sport selected on the home screen
    pub current_sport: Sport,
    pub settings: Settings,
    pub history: MatchHistory,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: STORE_VERSION,
            current_sport: Sport::default(),
            settings: Settings::default(),
            history: MatchHistory::new(),
        }
    }

    pub fn set_current_sport(&mut self, sport: Sport) {
        self.current_sport = sport;
    }

    /// Add a finished match when auto-save is on. Returns whether it was kept.
    pub fn record_match(&mut self, record: MatchHistoryRecord) -> bool {
        if !self.settings.auto_save_matches {
            debug!(id = %record.id, "auto-save off; match not recorded");
            return false;
        }
        info!(id = %record.id, sport = %record.sport, result = %record.result, "match saved to history");
        self.history.add(record);
        true
    }

    pub fn clear_history(&mut self) {
        info!(cleared = self.history.len(), "match history cleared");
        self.history.clear();
    }

    // === Encoding ===

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Self::from_json_bytes(json.as_bytes())
    }

    /// Parse a JSON save straight from disk bytes; invalid UTF-8 is an error.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        let store: Self = serde_json::from_slice(bytes)?;
        store.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        let store: Self = bincode::deserialize(bytes)?;
        store.check_version()
    }

    fn check_version(self) -> Result<Self, StoreError> {
        if self.version > STORE_VERSION {
            return Err(StoreError::VersionMismatch {
                found: self.version,
                expected: STORE_VERSION,
            });
        }
        Ok(self)
    }

    // === Files ===

    /// Write atomically: a temp file next to `path`, then rename.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = match StoreFormat::from_path(path) {
            StoreFormat::Json => self.to_json()?.into_bytes(),
            StoreFormat::Binary => self.to_bytes()?,
        };

        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;
            file.sync_all()?;
        }
        rename(&temp_path, path)?;

        debug!(bytes = data.len(), path = %path.display(), "store saved");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let mut data = Vec::new();
        File::open(path)?.read_to_end(&mut data)?;

        let store = match StoreFormat::from_path(path) {
            StoreFormat::Json => Self::from_json_bytes(&data)?,
            StoreFormat::Binary => Self::from_bytes(&data)?,
        };

        debug!(bytes = data.len(), path = %path.display(), "store loaded");
        Ok(store)
    }

    /// Load `path`, or start fresh when it does not exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self, StoreError> {
        match Self::load(path) {
            Err(StoreError::FileNotFound { .. }) => Ok(Self::new()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatchFormat, Side, SideMap};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn record(id: &str) -> MatchHistoryRecord {
        MatchHistoryRecord {
            id: id.to_string(),
            sport: Sport::Badminton,
            date: Utc.with_ymd_and_hms(2024, 3, 9, 18, 30, 0).unwrap(),
            duration_secs: 1800,
            names: SideMap::from_pair("Ana".to_string(), "Ben".to_string()),
            result: "21-18, 19-21, 21-16".to_string(),
            winner: Side::One,
            total_points: Some(SideMap::from_pair(61, 55)),
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let mut store = AppStore::new();
        store.set_current_sport(Sport::Squash);
        store.settings = store.settings.with_squash_format(MatchFormat::BestOf5);
        store.record_match(record("a"));

        let json = store.to_json().unwrap();
        assert!(json.contains("\"squash\""));
        assert_eq!(AppStore::from_json(&json).unwrap(), store);
    }

    #[test]
    fn test_binary_roundtrip() {
        let mut store = AppStore::new();
        store.record_match(record("a"));
        store.record_match(record("b"));

        let bytes = store.to_bytes().unwrap();
        let loaded = AppStore::from_bytes(&bytes).unwrap();
        assert_eq!(loaded.history.latest().unwrap().id, "b");
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_newer_version_rejected() {
        let mut store = AppStore::new();
        store.version = STORE_VERSION + 1;
        let json = serde_json::to_string(&store).unwrap();

        let result = AppStore::from_json(&json);
        assert!(matches!(result, Err(StoreError::VersionMismatch { .. })));
    }

    #[test]
    fn test_auto_save_off() {
        let mut store = AppStore::new();
        store.settings.auto_save_matches = false;
        assert!(!store.record_match(record("a")));
        assert!(store.history.is_empty());
    }

    #[test]
    fn test_save_load_files() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = AppStore::new();
        store.record_match(record("a"));

        for name in ["store.json", "store.dat"] {
            let path = temp_dir.path().join(name);
            store.save(&path).unwrap();
            assert!(!path.with_extension("tmp").exists());
            assert_eq!(AppStore::load(&path).unwrap(), store);
        }
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        assert!(matches!(AppStore::load(&path), Err(StoreError::FileNotFound { .. })));
        assert_eq!(AppStore::load_or_default(&path).unwrap(), AppStore::new());
    }

    #[test]
    fn test_invalid_utf8_json_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut store = AppStore::new();
        store.record_match(record("a"));
        let mut data = store.to_json().unwrap().into_bytes();
        let name_at = data.windows(3).position(|w| w == b"Ana").unwrap();
        data[name_at] = 0xFF;
        std::fs::write(&path, &data).unwrap();

        let err = AppStore::load(&path).unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_clear_history() {
        let mut store = AppStore::new();
        store.record_match(record("a"));
        store.clear_history();
        assert!(store.history.is_empty());
    }
}
