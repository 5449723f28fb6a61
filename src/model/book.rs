//! Book value object.

/// A single book of the series.
///
/// Immutable once constructed; equality compares every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub pages: u32,
    /// Release date normalized to `yyyy-MM-dd`, empty when the catalog has none.
    pub release_date: String,
    pub dedication: Option<String>,
    pub summary: String,
    pub wiki: String,
    /// Chapter titles in reading order.
    pub chapters: Vec<String>,
    /// Image asset identifier (e.g. `clean_code.jpg`).
    pub image: String,
}

impl Book {
    /// Key under which this book's summary expansion flag is stored.
    pub fn summary_key(&self) -> super::SummaryKey {
        super::SummaryKey::new(&self.title, &self.author)
    }
}
