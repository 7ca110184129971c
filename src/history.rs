use crate::data_models::SearchRecord;
use crate::error::Result;
use crate::storage::KeyValueStore;

pub const HISTORY_KEY: &str = "searchHistory";
pub const HISTORY_LIMIT: usize = 5;

/// Rolling list of recent searches, newest first, mirrored into a store.
pub struct SearchHistory<S: KeyValueStore> {
    store: S,
    records: Vec<SearchRecord>,
}

impl<S: KeyValueStore> SearchHistory<S> {
    /// Read the stored list. A missing or unreadable value starts empty.
    pub fn load(store: S) -> Result<Self> {
        let mut records = match store.get(HISTORY_KEY)? {
            Some(raw) => serde_json::from_str::<Vec<SearchRecord>>(&raw).unwrap_or_else(|e| {
                log::warn!("discarding unreadable {HISTORY_KEY} value: {e}");
                Vec::new()
            }),
            None => Vec::new(),
        };
        records.truncate(HISTORY_LIMIT);
        Ok(Self { store, records })
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prepend a record, evicting the oldest past the limit, and persist.
    pub fn push(&mut self, record: SearchRecord) -> Result<()> {
        self.records.insert(0, record); // newest first
        self.records.truncate(HISTORY_LIMIT);
        let raw = serde_json::to_string(&self.records)?;
        self.store.set(HISTORY_KEY, raw)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.records.clear();
        self.store.remove(HISTORY_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
