use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::{PersistenceError, SummaryPersistence};
use crate::model::SummaryKey;

/// Default flags for the five sample books.
pub fn sample_summary_flags() -> HashMap<String, bool> {
    [
        ("클린 코드", "로버트 C. 마틴", true),
        ("이펙티브 자바", "조슈아 블로크", false),
        ("스위프트 프로그래밍", "야곰", true),
        ("디자인 패턴", "GoF", false),
        ("리팩토링", "마틴 파울러", true),
    ]
    .into_iter()
    .map(|(title, author, expanded)| (SummaryKey::new(title, author).to_string(), expanded))
    .collect()
}

/// In-memory summary store.
///
/// Counts loads and saves so tests can assert how effects used the port.
#[derive(Default)]
pub struct MemorySummaryStore {
    storage: Mutex<HashMap<String, bool>>,
    load_count: AtomicUsize,
    save_count: AtomicUsize,
}

impl MemorySummaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with [`sample_summary_flags`].
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        store.replace(sample_summary_flags());
        store
    }

    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> HashMap<String, bool> {
        self.storage.lock().clone()
    }

    pub fn replace(&self, data: HashMap<String, bool>) {
        *self.storage.lock() = data;
    }

    pub fn clear(&self) {
        self.storage.lock().clear();
    }

    /// Clear storage and counters.
    pub fn reset(&self) {
        self.clear();
        self.load_count.store(0, Ordering::SeqCst);
        self.save_count.store(0, Ordering::SeqCst);
    }
}

impl SummaryPersistence for MemorySummaryStore {
    fn load_summary_expanded(&self, title: &str, author: &str) -> Result<bool, PersistenceError> {
        self.load_count.fetch_add(1, Ordering::SeqCst);
        let key = SummaryKey::new(title, author);
        Ok(self.storage.lock().get(key.as_str()).copied().unwrap_or(false))
    }

    fn save_summary_expanded(
        &self,
        expanded: bool,
        title: &str,
        author: &str,
    ) -> Result<(), PersistenceError> {
        self.save_count.fetch_add(1, Ordering::SeqCst);
        let key = SummaryKey::new(title, author);
        self.storage.lock().insert(key.to_string(), expanded);
        Ok(())
    }
}
