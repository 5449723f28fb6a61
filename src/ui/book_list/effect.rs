//! Effects requested by the book list reducer.

use std::sync::Arc;

use super::intent::{BookListError, BookListInnerIntent, BookListIntent};
use crate::model::SummaryKey;
use crate::runtime::{Effect, EffectFuture, Environment, IntentSender};

#[derive(Debug, Clone, PartialEq)]
pub enum BookListEffect {
    /// Load the whole catalog from the repository.
    FetchBooks,

    /// Persist one book's summary flag. Fire-and-forget.
    SaveSummaryExpanded {
        title: String,
        author: String,
        expanded: bool,
    },

    /// Read one book's summary flag and report it as `SummaryStateLoaded`.
    LoadSummaryExpanded { title: String, author: String },
}

impl Effect for BookListEffect {
    type Intent = BookListIntent;

    fn run(self, env: Environment, send: IntentSender<BookListIntent>) -> EffectFuture {
        Box::pin(async move {
            match self {
                BookListEffect::FetchBooks => {
                    let result = env
                        .book_list
                        .get_book_list()
                        .await
                        .map_err(|err| BookListError::Encoding(err.to_string()));
                    send.send(BookListInnerIntent::BookListResponse(result).into());
                }

                BookListEffect::SaveSummaryExpanded {
                    title,
                    author,
                    expanded,
                } => {
                    let store = Arc::clone(&env.summary_persistence);
                    let result = tokio::task::spawn_blocking(move || {
                        store.save_summary_expanded(expanded, &title, &author)
                    })
                    .await;
                    match result {
                        Ok(Ok(())) => {}
                        Ok(Err(err)) => {
                            tracing::warn!(error = %err, "Failed to save summary state");
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "Summary save task failed");
                        }
                    }
                }

                BookListEffect::LoadSummaryExpanded { title, author } => {
                    let key = SummaryKey::new(&title, &author);
                    let store = Arc::clone(&env.summary_persistence);
                    let result = tokio::task::spawn_blocking(move || {
                        store.load_summary_expanded(&title, &author)
                    })
                    .await;
                    let is_expanded = match result {
                        Ok(Ok(expanded)) => expanded,
                        Ok(Err(err)) => {
                            tracing::warn!(key = %key, error = %err, "Failed to load summary state");
                            false
                        }
                        Err(err) => {
                            tracing::warn!(key = %key, error = %err, "Summary load task failed");
                            false
                        }
                    };
                    send.send(BookListInnerIntent::SummaryStateLoaded { key, is_expanded }.into());
                }
            }
        })
    }
}
