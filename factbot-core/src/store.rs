//! Fact history persistence.
//!
//! The delivered-fact history lives in a single JSON document
//! (`{"facts": [...]}`) that is rewritten wholesale on every update. Only
//! the most recent [`MAX_FACTS`] entries are retained.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Maximum number of facts retained in history.
pub const MAX_FACTS: usize = 100;

/// Errors from fact store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of the history file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FactFile {
    facts: Vec<String>,
}

/// Bounded, file-backed history of delivered facts.
///
/// Updates are whole-file read-modify-write and are not safe under
/// concurrent writers. Callers must serialize `load`/`append` sequences;
/// the bot does this by owning its generator behind a single mutex.
#[derive(Debug, Clone)]
pub struct FactStore {
    path: PathBuf,
}

impl FactStore {
    /// Create a store backed by the given file path. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current history in insertion order.
    ///
    /// If the backing file does not exist yet, an empty history is written
    /// out first and then returned.
    pub async fn load(&self) -> Result<Vec<String>, StoreError> {
        if !fs::try_exists(&self.path).await? {
            self.write(&FactFile::default()).await?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).await?;
        let file: FactFile = serde_json::from_str(&content)?;
        Ok(file.facts)
    }

    /// Append a fact, keeping only the most recent [`MAX_FACTS`] entries.
    pub async fn append(&self, fact: &str) -> Result<(), StoreError> {
        let mut facts = self.load().await?;
        facts.push(fact.to_string());
        if facts.len() > MAX_FACTS {
            facts.drain(..facts.len() - MAX_FACTS);
        }
        self.write(&FactFile { facts }).await
    }

    async fn write(&self, file: &FactFile) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FactStore {
        FactStore::new(dir.path().join("facts.json"))
    }

    #[tokio::test]
    async fn test_load_creates_empty_history() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&dir);

        let facts = store.load().await.expect("Load should succeed");

        assert!(facts.is_empty());
        assert!(store.path().exists());

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"facts\""));
    }

    #[tokio::test]
    async fn test_append_and_load_roundtrip() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&dir);

        store.append("The sky is blue.").await.unwrap();
        store.append("Honey never spoils.").await.unwrap();

        let facts = store.load().await.unwrap();
        assert_eq!(facts, vec!["The sky is blue.", "Honey never spoils."]);
    }

    #[tokio::test]
    async fn test_history_never_exceeds_cap() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&dir);

        for i in 0..MAX_FACTS + 5 {
            store.append(&format!("Fact {i}")).await.unwrap();
            let facts = store.load().await.unwrap();
            assert!(facts.len() <= MAX_FACTS);
        }

        let facts = store.load().await.unwrap();
        assert_eq!(facts.len(), MAX_FACTS);
        assert_eq!(facts.first().unwrap(), "Fact 5");
        assert_eq!(facts.last().unwrap(), &format!("Fact {}", MAX_FACTS + 4));
    }

    #[tokio::test]
    async fn test_full_history_evicts_single_oldest() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&dir);

        for i in 0..MAX_FACTS {
            store.append(&format!("Fact {i}")).await.unwrap();
        }

        store.append("One more").await.unwrap();

        let facts = store.load().await.unwrap();
        assert_eq!(facts.len(), MAX_FACTS);
        assert_eq!(facts.first().unwrap(), "Fact 1");
        assert_eq!(facts.last().unwrap(), "One more");
    }

    #[tokio::test]
    async fn test_existing_file_is_read_back() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("facts.json");
        std::fs::write(&path, r#"{"facts": ["Bananas are berries."]}"#).unwrap();

        let store = FactStore::new(&path);
        let facts = store.load().await.unwrap();
        assert_eq!(facts, vec!["Bananas are berries."]);
    }
}
