// Explicitly owned session state: the parsed-table cache and the
// last-selection-wins result slots fed by concurrent projector calls.
use crate::config::Vocabulary;
use crate::dataset::Dataset;
use crate::error::Result;
use chrono::{DateTime, Local};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Holds at most one parsed snapshot of the source file.
pub struct DataCache {
    path: PathBuf,
    vocabulary: Vocabulary,
    snapshot: Option<Arc<Dataset>>,
    loaded_at: Option<DateTime<Local>>,
}

impl DataCache {
    pub fn new(path: impl Into<PathBuf>, vocabulary: Vocabulary) -> Self {
        Self {
            path: path.into(),
            vocabulary,
            snapshot: None,
            loaded_at: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the cached snapshot, loading it on first access.
    pub fn get(&mut self) -> Result<Arc<Dataset>> {
        if let Some(ds) = &self.snapshot {
            return Ok(Arc::clone(ds));
        }
        self.reload()
    }

    pub fn invalidate(&mut self) {
        if self.snapshot.take().is_some() {
            debug!("Dropped cached snapshot of {}", self.path.display());
        }
        self.loaded_at = None;
    }

    /// Replace the snapshot wholesale. On failure the cache is left empty;
    /// the previous snapshot is never mixed with a partial reload.
    pub fn reload(&mut self) -> Result<Arc<Dataset>> {
        self.invalidate();
        let ds = Arc::new(Dataset::load(&self.path, self.vocabulary.clone())?);
        let now = Local::now();
        info!(
            "Cached {} observations from {} at {}",
            ds.index().len(),
            self.path.display(),
            now.format("%Y-%m-%d %H:%M:%S")
        );
        self.snapshot = Some(Arc::clone(&ds));
        self.loaded_at = Some(now);
        Ok(ds)
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }
}

/// Sequence number handed out when a selection is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

struct SlotState<T> {
    issued: u64,
    value: Option<T>,
}

/// Result slot for one view. Only the answer to the most recently issued
/// request is kept; answers that arrive for superseded requests are dropped.
pub struct SelectionSlot<T> {
    name: &'static str,
    state: Mutex<SlotState<T>>,
}

impl<T> SelectionSlot<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(SlotState {
                issued: 0,
                value: None,
            }),
        }
    }

    /// Register a new request, superseding every earlier one.
    pub fn issue(&self) -> Ticket {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        st.issued += 1;
        Ticket(st.issued)
    }

    /// Store `value` if `ticket` is still the newest request. Returns
    /// whether the value was accepted.
    pub fn deliver(&self, ticket: Ticket, value: T) -> bool {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if ticket.0 != st.issued {
            debug!(
                "{}: discarding stale result #{} (latest #{})",
                self.name, ticket.0, st.issued
            );
            return false;
        }
        st.value = Some(value);
        true
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        let st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        ticket.0 == st.issued
    }

    pub fn current(&self) -> Option<T>
    where
        T: Clone,
    {
        let st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        st.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_delivery_is_discarded() {
        let slot: SelectionSlot<&str> = SelectionSlot::new("age");
        let first = slot.issue();
        let second = slot.issue();
        assert!(slot.deliver(second, "FJ"));
        assert!(!slot.deliver(first, "TO"));
        assert_eq!(slot.current(), Some("FJ"));
        assert!(!slot.is_current(first));
        assert!(second > first);
    }

    #[test]
    fn missing_file_leaves_cache_empty() {
        let mut cache = DataCache::new("/nonexistent/extract.csv", Vocabulary::default());
        assert!(cache.get().is_err());
        assert!(!cache.is_loaded());
        assert!(cache.loaded_at().is_none());
    }
}
