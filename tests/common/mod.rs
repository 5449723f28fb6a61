//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bookseries::model::Book;
use bookseries::persistence::MemorySummaryStore;
use bookseries::repository::{default_books, MockBookListRepository};
use bookseries::runtime::{Environment, Store};
use bookseries::ui::book_list::BookListState;
use bookseries::ui::coordinator::CoordinatorIntent;
use bookseries::ui::mvi::Reducer;
use bookseries::ui::root::{AppReducer, AppState};
use tempfile::TempDir;

/// Mock ports plus handles to inspect them after the store has run.
pub struct TestHarness {
    pub repository: Arc<MockBookListRepository>,
    pub persistence: Arc<MemorySummaryStore>,
    pub store: Store<AppReducer>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_persistence(MemorySummaryStore::new())
    }

    pub fn with_persistence(persistence: MemorySummaryStore) -> Self {
        let repository = Arc::new(MockBookListRepository::new());
        let persistence = Arc::new(persistence);
        let env = Environment::new(repository.clone(), persistence.clone());
        Self {
            repository,
            persistence,
            store: Store::new(AppState::default(), env),
        }
    }

    pub fn send(&mut self, intent: CoordinatorIntent) -> usize {
        self.store.send(intent.into())
    }

    /// Run until idle, failing the test if effects hang.
    pub async fn settle(&mut self) {
        tokio::time::timeout(Duration::from_secs(5), self.store.run_until_idle())
            .await
            .expect("store did not become idle");
    }

    pub fn book_list(&self) -> &BookListState {
        &self
            .store
            .state()
            .book_coordinator()
            .expect("book coordinator active")
            .book_list
    }
}

/// Run `reducer` over `intents` starting from default state, discarding effects.
pub fn reduce_all<R: Reducer>(intents: Vec<R::Intent>) -> R::State {
    intents
        .into_iter()
        .fold(R::State::default(), |state, intent| R::reduce(state, intent).0)
}

pub fn sample_books() -> Vec<Book> {
    default_books()
}

pub fn book(title: &str, author: &str) -> Book {
    Book {
        title: title.to_string(),
        author: author.to_string(),
        pages: 100,
        release_date: "2020-01-01".to_string(),
        dedication: None,
        summary: format!("{title} summary"),
        wiki: String::new(),
        chapters: vec!["One".to_string()],
        image: String::new(),
    }
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
