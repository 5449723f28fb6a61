//! JSON catalog repository.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use super::{BookListRepository, RepositoryError};
use crate::model::text::normalized_ymd;
use crate::model::Book;

/// Catalog compiled into the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../resources/book_list.json");

/// Where the live repository reads its catalog from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
}

/// Repository backed by a `{"data": [{"attributes": {...}}]}` document.
#[derive(Debug, Clone)]
pub struct JsonBookListRepository {
    source: CatalogSource,
}

impl JsonBookListRepository {
    pub fn new(source: CatalogSource) -> Self {
        Self { source }
    }

    pub fn bundled() -> Self {
        Self::new(CatalogSource::Bundled)
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }
}

#[async_trait]
impl BookListRepository for JsonBookListRepository {
    async fn get_book_list(&self) -> Result<Vec<Book>, RepositoryError> {
        match &self.source {
            CatalogSource::Bundled => parse_catalog(BUNDLED_CATALOG),
            CatalogSource::File(path) => {
                let content =
                    tokio::fs::read_to_string(path)
                        .await
                        .map_err(|e| RepositoryError::Io {
                            path: path.clone(),
                            source: e,
                        })?;
                let books = parse_catalog(&content)?;
                tracing::debug!(path = %path.display(), count = books.len(), "Loaded catalog");
                Ok(books)
            }
        }
    }
}

/// Parse a catalog document into books, preserving entry order.
pub fn parse_catalog(content: &str) -> Result<Vec<Book>, RepositoryError> {
    let catalog: CatalogDto = serde_json::from_str(content)?;
    Ok(catalog
        .data
        .into_iter()
        .map(|entry| entry.attributes.into_book())
        .collect())
}

#[derive(Deserialize)]
struct CatalogDto {
    data: Vec<EntryDto>,
}

#[derive(Deserialize)]
struct EntryDto {
    attributes: AttributesDto,
}

#[derive(Deserialize)]
struct ChapterDto {
    title: String,
}

#[derive(Deserialize)]
struct AttributesDto {
    title: String,
    author: String,
    pages: u32,
    #[serde(default)]
    dedication: Option<String>,
    summary: String,
    wiki: String,
    image: String,
    chapters: Vec<ChapterDto>,

    // Release date aliases. Outer `Option` tracks presence of the key,
    // inner tracks `null`.
    #[serde(default, deserialize_with = "present")]
    release_date: Option<Option<String>>,
    #[serde(default, rename = "releaseDate", deserialize_with = "present")]
    release_date_camel: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    released_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    reasle_date: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl AttributesDto {
    /// First alias whose key is present wins, even when its value is `null`.
    fn release_date(&mut self) -> Option<String> {
        [
            self.release_date.take(),
            self.release_date_camel.take(),
            self.released_date.take(),
            self.reasle_date.take(),
        ]
        .into_iter()
        .flatten()
        .next()
        .flatten()
    }

    fn into_book(mut self) -> Book {
        let release_date = self
            .release_date()
            .map(|raw| normalized_ymd(&raw))
            .unwrap_or_default();

        Book {
            title: self.title,
            author: self.author,
            pages: self.pages,
            release_date,
            dedication: self.dedication,
            summary: self.summary,
            wiki: self.wiki,
            chapters: self.chapters.into_iter().map(|c| c.title).collect(),
            image: self.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date_fields: &str) -> String {
        format!(
            r#"{{"data": [{{"attributes": {{
                "title": "Sample", "author": "Someone", "pages": 10,
                "summary": "s", "wiki": "w", "image": "i.jpg",
                "chapters": [{{"title": "One"}}, {{"title": "Two"}}]
                {date_fields}
            }}}}]}}"#
        )
    }

    #[test]
    fn parses_attributes_in_order() {
        let books = parse_catalog(&entry(r#", "release_date": "1997-6-26""#)).unwrap();
        assert_eq!(books.len(), 1);
        let book = &books[0];
        assert_eq!(book.title, "Sample");
        assert_eq!(book.pages, 10);
        assert_eq!(book.chapters, vec!["One", "Two"]);
        assert_eq!(book.release_date, "1997-06-26");
        assert_eq!(book.dedication, None);
    }

    #[test]
    fn release_date_alias_priority() {
        let books = parse_catalog(&entry(
            r#", "reasle_date": "2001-1-1", "releaseDate": "2000-2-2""#,
        ))
        .unwrap();
        assert_eq!(books[0].release_date, "2000-02-02");

        let books = parse_catalog(&entry(r#", "reasle_date": "2001-1-1""#)).unwrap();
        assert_eq!(books[0].release_date, "2001-01-01");

        let books = parse_catalog(&entry(
            r#", "release_date": "1999-12-31", "released_date": "2001-1-1""#,
        ))
        .unwrap();
        assert_eq!(books[0].release_date, "1999-12-31");
    }

    #[test]
    fn present_null_alias_stops_the_search() {
        let books = parse_catalog(&entry(
            r#", "release_date": null, "releaseDate": "2000-2-2""#,
        ))
        .unwrap();
        assert_eq!(books[0].release_date, "");
    }

    #[test]
    fn missing_release_date_is_empty() {
        let books = parse_catalog(&entry("")).unwrap();
        assert_eq!(books[0].release_date, "");
    }

    #[test]
    fn missing_required_field_is_parse_error() {
        let result = parse_catalog(r#"{"data": [{"attributes": {"title": "x"}}]}"#);
        assert!(matches!(result, Err(RepositoryError::Parse(_))));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let repo = JsonBookListRepository::new(CatalogSource::File(
            "/nonexistent/bookseries/catalog.json".into(),
        ));
        let result = repo.get_book_list().await;
        assert!(matches!(result, Err(RepositoryError::Io { .. })));
    }
}
