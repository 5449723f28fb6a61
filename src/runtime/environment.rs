use std::sync::Arc;

use crate::config::{CatalogKind, Config, ConfigError, PersistenceBackend};
use crate::persistence::{FileSummaryStore, MemorySummaryStore, SummaryPersistence};
use crate::repository::{
    BookListRepository, CatalogSource, JsonBookListRepository, MockBookListRepository,
};

/// Dependencies handed to every effect.
///
/// Cheap to clone; the ports are shared behind `Arc`.
#[derive(Clone)]
pub struct Environment {
    pub book_list: Arc<dyn BookListRepository>,
    pub summary_persistence: Arc<dyn SummaryPersistence>,
}

impl Environment {
    pub fn new(
        book_list: Arc<dyn BookListRepository>,
        summary_persistence: Arc<dyn SummaryPersistence>,
    ) -> Self {
        Self {
            book_list,
            summary_persistence,
        }
    }

    /// Sample catalog with pre-seeded in-memory summary flags.
    pub fn mock() -> Self {
        Self::new(
            Arc::new(MockBookListRepository::new()),
            Arc::new(MemorySummaryStore::with_sample_data()),
        )
    }

    /// Build the ports described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let book_list: Arc<dyn BookListRepository> = match config.catalog.source {
            CatalogKind::Bundled => Arc::new(JsonBookListRepository::bundled()),
            CatalogKind::Mock => Arc::new(MockBookListRepository::new()),
            CatalogKind::File => {
                let path = config.catalog.path.clone().ok_or_else(|| {
                    ConfigError::ValidationError {
                        message: "catalog.path is required when catalog.source = \"file\""
                            .to_string(),
                    }
                })?;
                Arc::new(JsonBookListRepository::new(CatalogSource::File(path)))
            }
        };

        let summary_persistence: Arc<dyn SummaryPersistence> = match config.persistence.backend {
            PersistenceBackend::Memory => Arc::new(MemorySummaryStore::new()),
            PersistenceBackend::File => {
                let path = config
                    .persistence
                    .path
                    .clone()
                    .unwrap_or_else(FileSummaryStore::default_path);
                Arc::new(FileSummaryStore::new(path))
            }
        };

        Ok(Self::new(book_list, summary_persistence))
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish_non_exhaustive()
    }
}
