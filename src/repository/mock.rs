//! Fixed in-memory catalog used as the default repository and in tests.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{BookListRepository, RepositoryError};
use crate::model::Book;

/// Failure the mock can be told to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    Network,
    Parse,
    NotFound,
}

impl fmt::Display for MockFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MockFailure::Network => write!(f, "network error"),
            MockFailure::Parse => write!(f, "parse error"),
            MockFailure::NotFound => write!(f, "not found"),
        }
    }
}

struct MockInner {
    books: Vec<Book>,
    failure: Option<MockFailure>,
}

/// Repository returning a fixed list of five books.
pub struct MockBookListRepository {
    inner: Mutex<MockInner>,
    call_count: AtomicUsize,
}

impl MockBookListRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MockInner {
                books: default_books(),
                failure: None,
            }),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Mock that fails every call with `failure`.
    pub fn failing(failure: MockFailure) -> Self {
        let repo = Self::new();
        repo.set_failure(Some(failure));
        repo
    }

    pub fn set_books(&self, books: Vec<Book>) {
        self.inner.lock().books = books;
    }

    /// `Some` makes subsequent calls fail; `None` restores success.
    pub fn set_failure(&self, failure: Option<MockFailure>) {
        self.inner.lock().failure = failure;
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.books = default_books();
        inner.failure = None;
        self.call_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockBookListRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookListRepository for MockBookListRepository {
    async fn get_book_list(&self) -> Result<Vec<Book>, RepositoryError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let inner = self.inner.lock();
        match inner.failure {
            Some(failure) => Err(RepositoryError::Mock(failure)),
            None => Ok(inner.books.clone()),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn book(
    title: &str,
    author: &str,
    pages: u32,
    image: &str,
    release_date: &str,
    dedication: &str,
    summary: &str,
    wiki: &str,
    chapters: &[&str],
) -> Book {
    Book {
        title: title.to_string(),
        author: author.to_string(),
        pages,
        release_date: release_date.to_string(),
        dedication: Some(dedication.to_string()),
        summary: summary.to_string(),
        wiki: wiki.to_string(),
        chapters: chapters.iter().map(|c| c.to_string()).collect(),
        image: image.to_string(),
    }
}

/// The five sample books, in series order.
pub fn default_books() -> Vec<Book> {
    vec![
        book(
            "클린 코드",
            "로버트 C. 마틴",
            464,
            "clean_code.jpg",
            "2013-12-24",
            "프로그래밍 장인들에게",
            "애자일 소프트웨어 장인 정신",
            "https://ko.wikipedia.org/wiki/클린_코드",
            &["깨끗한 코드", "의미 있는 이름", "함수", "주석", "형식 맞추기"],
        ),
        book(
            "이펙티브 자바",
            "조슈아 블로크",
            416,
            "effective_java.jpg",
            "2018-10-26",
            "자바 개발자들을 위하여",
            "자바 플랫폼 모범 사례 78가지",
            "https://ko.wikipedia.org/wiki/이펙티브_자바",
            &["객체 생성과 파괴", "모든 객체의 공통 메서드", "클래스와 인터페이스"],
        ),
        book(
            "스위프트 프로그래밍",
            "야곰",
            792,
            "swift_programming.jpg",
            "2019-10-10",
            "스위프트를 사랑하는 모든 개발자들에게",
            "Swift 5를 다루는 기본서의 바이블",
            "https://ko.wikipedia.org/wiki/스위프트_(프로그래밍_언어)",
            &["스위프트 기초", "데이터 타입", "연산자", "흐름 제어", "함수"],
        ),
        book(
            "디자인 패턴",
            "GoF",
            395,
            "design_patterns.jpg",
            "1994-10-31",
            "객체지향 설계를 위하여",
            "재사용 가능한 객체지향 소프트웨어의 핵심 요소",
            "https://ko.wikipedia.org/wiki/디자인_패턴",
            &["생성 패턴", "구조 패턴", "행위 패턴"],
        ),
        book(
            "리팩토링",
            "마틴 파울러",
            418,
            "refactoring.jpg",
            "2018-11-23",
            "코드 품질 향상을 위하여",
            "기존 코드를 안전하게 개선하는 방법",
            "https://ko.wikipedia.org/wiki/리팩토링",
            &["리팩토링 원칙", "코드에서 나는 악취", "테스트 구축"],
        ),
    ]
}
