mod common;

use bookseries::config::{CatalogKind, Config, PersistenceBackend};
use bookseries::repository::{
    BookListRepository, CatalogSource, JsonBookListRepository, MockBookListRepository,
    MockFailure, RepositoryError,
};
use bookseries::runtime::Environment;

const CATALOG: &str = r#"{
  "data": [
    { "attributes": {
        "title": "First", "author": "One", "pages": 10,
        "releaseDate": "2001-2-3", "released_date": "1999-01-01",
        "summary": "s", "wiki": "w", "image": "i",
        "chapters": [{ "title": "c1" }, { "title": "c2" }]
    } },
    { "attributes": {
        "title": "Second", "author": "Two", "pages": 20, "dedication": "For you",
        "summary": "s", "wiki": "w", "image": "i", "chapters": []
    } }
  ]
}"#;

#[tokio::test]
async fn file_catalog_is_read_in_order() {
    let (_dir, path) = common::temp_file("books.json", CATALOG);
    let repository = JsonBookListRepository::new(CatalogSource::File(path.clone()));
    assert_eq!(repository.source(), &CatalogSource::File(path));

    let books = repository.get_book_list().await.unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title, "First");
    assert_eq!(books[0].release_date, "2001-02-03");
    assert_eq!(books[0].chapters, vec!["c1", "c2"]);
    assert_eq!(books[1].release_date, "");
    assert_eq!(books[1].dedication.as_deref(), Some("For you"));
}

#[tokio::test]
async fn malformed_catalog_is_a_parse_error() {
    let (_dir, path) = common::temp_file("books.json", "{ \"data\": [ { } ] }");
    let repository = JsonBookListRepository::new(CatalogSource::File(path));

    let err = repository.get_book_list().await.unwrap_err();
    assert!(matches!(err, RepositoryError::Parse(_)));
}

#[tokio::test]
async fn bundled_catalog_has_five_books() {
    let repository = JsonBookListRepository::bundled();
    assert_eq!(repository.source(), &CatalogSource::Bundled);
    let books = repository.get_book_list().await.unwrap();
    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["클린 코드", "이펙티브 자바", "스위프트 프로그래밍", "디자인 패턴", "리팩토링"]
    );
}

#[tokio::test]
async fn mock_failure_and_reset() {
    let repository = MockBookListRepository::failing(MockFailure::Parse);
    let err = repository.get_book_list().await.unwrap_err();
    assert!(matches!(err, RepositoryError::Mock(MockFailure::Parse)));

    repository.reset();
    assert_eq!(repository.call_count(), 0);
    assert_eq!(repository.get_book_list().await.unwrap().len(), 5);

    repository.set_books(vec![common::book("Only", "Me")]);
    assert_eq!(repository.get_book_list().await.unwrap().len(), 1);
    assert_eq!(repository.call_count(), 2);
}

#[tokio::test]
async fn environment_from_config_uses_file_catalog() {
    let (dir, path) = common::temp_file("books.json", CATALOG);
    let mut config = Config::default();
    config.catalog.source = CatalogKind::File;
    config.catalog.path = Some(path);
    config.persistence.backend = PersistenceBackend::File;
    config.persistence.path = Some(dir.path().join("summary_state.toml"));

    let env = Environment::from_config(&config).unwrap();
    let books = env.book_list.get_book_list().await.unwrap();
    assert_eq!(books.len(), 2);

    env.summary_persistence
        .save_summary_expanded(true, "First", "One")
        .unwrap();
    assert!(dir.path().join("summary_state.toml").exists());
}

#[test]
fn environment_rejects_file_catalog_without_path() {
    let mut config = Config::default();
    config.catalog.source = CatalogKind::File;
    assert!(Environment::from_config(&config).is_err());
}
