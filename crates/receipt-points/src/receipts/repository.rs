use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::domain::{ReceiptId, ScoreRecord};

/// Storage abstraction so the service can be exercised against any backing store.
///
/// Implementations must insert atomically: a second insert for the same identifier fails
/// with [`RepositoryError::Conflict`] and leaves the first record untouched.
pub trait ScoreRepository: Send + Sync {
    fn insert(&self, record: ScoreRecord) -> Result<ScoreRecord, RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime score store shared between request handlers.
#[derive(Debug, Default, Clone)]
pub struct InMemoryScoreRepository {
    records: Arc<Mutex<HashMap<ReceiptId, ScoreRecord>>>,
}

impl InMemoryScoreRepository {
    /// Number of stored records.
    pub fn count(&self) -> Result<usize, RepositoryError> {
        let guard = self.records.lock().map_err(|_| poisoned())?;
        Ok(guard.len())
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Unavailable("score store lock poisoned".to_string())
}

impl ScoreRepository for InMemoryScoreRepository {
    fn insert(&self, record: ScoreRecord) -> Result<ScoreRecord, RepositoryError> {
        let mut guard = self.records.lock().map_err(|_| poisoned())?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        let guard = self.records.lock().map_err(|_| poisoned())?;
        Ok(guard.get(id).cloned())
    }
}
