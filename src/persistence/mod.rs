//! High score persistence
//!
//! One named integer key, `"highScore"`, default 0 when absent. The store is
//! a capability the controller fires into at most once per run; I/O failures
//! are logged and swallowed, never surfaced to the sim.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Key under which the high score is persisted
pub const HIGH_SCORE_KEY: &str = "highScore";

/// Storage capability for the single persisted integer
pub trait ScoreStore {
    /// Load the saved high score, 0 if none
    fn load_high_score(&mut self) -> u32;
    /// Persist a new high score
    fn save_high_score(&mut self, score: u32);
}

/// Prefs-style JSON file store: a flat object of named integer keys
#[derive(Debug)]
pub struct PrefsFile {
    path: PathBuf,
}

impl PrefsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(path: &Path) -> io::Result<BTreeMap<String, u32>> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(io::Error::other)
    }

    fn write_map(path: &Path, map: &BTreeMap<String, u32>) -> io::Result<()> {
        let json = serde_json::to_string(map).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

impl ScoreStore for PrefsFile {
    fn load_high_score(&mut self) -> u32 {
        match Self::read_map(&self.path) {
            Ok(map) => map.get(HIGH_SCORE_KEY).copied().unwrap_or(0),
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                log::warn!("Failed to read prefs {:?}: {} - using 0", self.path, e);
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32) {
        let mut map = Self::read_map(&self.path).unwrap_or_default();
        map.insert(HIGH_SCORE_KEY.to_string(), score);
        match Self::write_map(&self.path, &map) {
            Ok(()) => log::info!("High score saved: {}", score),
            Err(e) => log::warn!("Failed to write prefs {:?}: {}", self.path, e),
        }
    }
}

/// In-memory store for headless hosts and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Currently stored value
    pub high_score: u32,
    /// Number of times `save_high_score` has been called
    pub save_count: usize,
}

impl MemoryStore {
    pub fn new(high_score: u32) -> Self {
        Self {
            high_score,
            save_count: 0,
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load_high_score(&mut self) -> u32 {
        self.high_score
    }

    fn save_high_score(&mut self, score: u32) {
        self.high_score = score;
        self.save_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load_high_score(), 0);
        store.save_high_score(12);
        assert_eq!(store.load_high_score(), 12);
        assert_eq!(store.save_count, 1);
    }

    #[test]
    fn test_prefs_file_missing_defaults_to_zero() {
        let mut store = PrefsFile::new("/definitely/not/a/real/prefs/path.json");
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn test_prefs_file_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("triangle_dash_prefs_test_{}.json", std::process::id()));
        let _ = fs::remove_file(&path);

        let mut store = PrefsFile::new(&path);
        assert_eq!(store.load_high_score(), 0);
        store.save_high_score(7);
        assert_eq!(store.load_high_score(), 7);

        // Key layout on disk is a flat named-integer object
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"highScore\":7"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_prefs_file_corrupt_defaults_to_zero() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!(
            "triangle_dash_prefs_corrupt_{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json at all").unwrap();

        let mut store = PrefsFile::new(&path);
        assert_eq!(store.load_high_score(), 0);

        let _ = fs::remove_file(&path);
    }
}
