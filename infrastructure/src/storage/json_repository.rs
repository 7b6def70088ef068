//! One pretty-printed JSON file per conversation: `<dir>/<id>.json`.

use chatline_application::ports::conversation_repository::{ConversationRepository, StorageError};
use chatline_domain::{ConversationHistory, ConversationId};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

const EXTENSION: &str = "json";

/// File-backed [`ConversationRepository`]
///
/// Writes go to a temporary file that is then renamed over the target, so
/// a crash mid-save never leaves a half-written conversation behind.
pub struct JsonConversationRepository {
    dir: PathBuf,
    // Serializes id allocation so two saves never pick the same new id.
    allocation: Mutex<()>,
}

impl JsonConversationRepository {
    /// Repository rooted at `dir`; the directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            allocation: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: ConversationId) -> PathBuf {
        self.dir.join(format!("{}.{}", id.to_digits(), EXTENSION))
    }

    fn write_atomic(&self, id: ConversationId, history: &ConversationHistory) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(id);
        let tmp = path.with_extension("json.tmp");
        let text = serde_json::to_string_pretty(history).map_err(|e| StorageError::Corrupt {
            id,
            reason: e.to_string(),
        })?;
        std::fs::write(&tmp, text)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl ConversationRepository for JsonConversationRepository {
    fn save(&self, history: &ConversationHistory) -> Result<ConversationId, StorageError> {
        let _guard = self.allocation.lock().unwrap_or_else(|e| e.into_inner());

        let id = match history.id() {
            Some(id) => id,
            None => self
                .list_ids()?
                .last()
                .map(|last| last.next())
                .unwrap_or(ConversationId::FIRST),
        };

        let mut stored = history.clone();
        stored.set_id(id);
        self.write_atomic(id, &stored)?;

        debug!("Saved conversation {} ({} messages)", id, stored.len());
        Ok(id)
    }

    fn load(&self, id: ConversationId) -> Result<ConversationHistory, StorageError> {
        let text = match std::fs::read_to_string(self.path_for(id)) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StorageError::NotFound(id)),
            Err(e) => return Err(e.into()),
        };

        let mut history: ConversationHistory =
            serde_json::from_str(&text).map_err(|e| StorageError::Corrupt {
                id,
                reason: e.to_string(),
            })?;

        // The file name is authoritative
        if history.id() != Some(id) {
            warn!("Conversation file {} carries id {:?}", id, history.id());
            history.set_id(id);
        }

        Ok(history)
    }

    fn list_ids(&self) -> Result<BTreeSet<ConversationId>, StorageError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = BTreeSet::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && let Ok(id) = ConversationId::from_digits(stem)
            {
                ids.insert(id);
            }
        }
        Ok(ids)
    }
}
