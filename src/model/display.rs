use super::Book;

/// Everything a book detail screen needs for the selected book.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDisplayData {
    pub book: Book,
    /// 1-based position of the book in the series.
    pub series_number: usize,
    pub total_series: usize,
    pub is_summary_expanded: bool,
}
