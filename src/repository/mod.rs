//! Book catalog retrieval.
//!
//! The state machines only see [`BookListRepository`]; the concrete sources
//! are the JSON catalog ([`JsonBookListRepository`]) and the fixed sample
//! list ([`MockBookListRepository`]). Both produce identical `Book` fields.

mod json;
mod mock;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Book;

pub use json::{parse_catalog, CatalogSource, JsonBookListRepository, BUNDLED_CATALOG};
pub use mock::{default_books, MockBookListRepository, MockFailure};

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Mock repository failure: {0}")]
    Mock(MockFailure),
}

/// Source of the ordered book list.
#[async_trait]
pub trait BookListRepository: Send + Sync {
    /// Returns every book in catalog order.
    async fn get_book_list(&self) -> Result<Vec<Book>, RepositoryError>;
}
