//! History of generation results.
//!
//! Each successful generation is stored with the request that produced it.
//! Entries are kept newest first and the list is bounded.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use zhizhu3d_core::constants::DEFAULT_HISTORY_LIMIT;
use zhizhu3d_core::{GenerationRequest, GenerationResult};

/// One stored generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub request: GenerationRequest,
    pub result: GenerationResult,
}

impl HistoryEntry {
    pub fn new(request: GenerationRequest, result: GenerationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            request,
            result,
        }
    }
}

/// Bounded, newest-first list of generation results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultHistory {
    max_entries: usize,
    entries: Vec<HistoryEntry>,
}

impl ResultHistory {
    /// Creates an empty history keeping at most `max_entries` (at least one).
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries: max_entries.max(1),
            entries: Vec::new(),
        }
    }

    /// Records a result, evicting the oldest entries past the bound.
    pub fn push(&mut self, request: GenerationRequest, result: GenerationResult) -> Uuid {
        let entry = HistoryEntry::new(request, result);
        let id = entry.id;
        self.entries.insert(0, entry);
        self.entries.truncate(self.max_entries);
        id
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Changes the bound, dropping the oldest entries if needed.
    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.max_entries = max_entries.max(1);
        self.entries.truncate(self.max_entries);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Loads a history file. A missing file yields an empty history.
    ///
    /// The stored entries are trimmed to `max_entries`.
    pub fn load(path: impl AsRef<Path>, max_entries: usize) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new(max_entries));
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read history file {}", path.display()))?;
        let entries: Vec<HistoryEntry> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse history file {}", path.display()))?;

        let mut history = Self::new(max_entries);
        history.entries = entries;
        history.entries.truncate(history.max_entries);
        Ok(history)
    }

    /// Saves the entries as a JSON array, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create history directory {}", parent.display())
                })?;
            }
        }
        let json =
            serde_json::to_string_pretty(&self.entries).context("Failed to serialize history")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write history file {}", path.display()))?;
        Ok(())
    }
}

impl Default for ResultHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
