//! Process-local implementation of the URL repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock};
use tracing::error;

use crate::domain::entities::{Allocation, UrlEntry};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Forward map and reverse index, always updated together.
///
/// `urls[id]` is the canonical URL allocated to `id`, so the identifiers in
/// use are exactly `0..urls.len()`.
#[derive(Debug, Default)]
struct Table {
    ids: HashMap<String, u64>,
    urls: Vec<String>,
}

/// In-memory lookup table from canonical URL to sequential identifier.
///
/// Entries are never evicted and are lost when the process exits. A single
/// `RwLock` guards both directions of the mapping, so a reader can never see
/// an identifier whose URL is not yet committed. Lookups of known URLs only
/// take the read lock.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    table: RwLock<Table>,
}

impl InMemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    error!("Lookup table lock poisoned");
    AppError::internal(
        "Lookup table unavailable",
        json!({ "reason": "lock poisoned" }),
    )
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn get_or_allocate(&self, canonical_url: &str) -> Result<Allocation, AppError> {
        {
            let table = self.table.read().map_err(poisoned)?;
            if let Some(&id) = table.ids.get(canonical_url) {
                return Ok(Allocation::Existing(UrlEntry::new(
                    id,
                    canonical_url.to_string(),
                )));
            }
        }

        let mut guard = self.table.write().map_err(poisoned)?;
        let table = &mut *guard;
        let next_id = table.urls.len() as u64;

        // Another writer may have won the race between the two locks.
        match table.ids.entry(canonical_url.to_string()) {
            Entry::Occupied(occupied) => Ok(Allocation::Existing(UrlEntry::new(
                *occupied.get(),
                canonical_url.to_string(),
            ))),
            Entry::Vacant(vacant) => {
                vacant.insert(next_id);
                table.urls.push(canonical_url.to_string());
                Ok(Allocation::Created(UrlEntry::new(
                    next_id,
                    canonical_url.to_string(),
                )))
            }
        }
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<String>, AppError> {
        let table = self.table.read().map_err(poisoned)?;

        Ok(usize::try_from(id)
            .ok()
            .and_then(|index| table.urls.get(index))
            .cloned())
    }

    async fn count(&self) -> Result<u64, AppError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.urls.len() as u64)
    }
}
