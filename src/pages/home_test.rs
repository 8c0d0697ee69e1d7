use super::*;
use crate::net::types::Author;

fn article(json: serde_json::Value) -> Article {
    serde_json::from_value(json).unwrap()
}

#[test]
fn search_query_resets_to_first_page() {
    let current = ArticleQuery { page: 4, size: 20, keyword: None };
    assert_eq!(search_query(&current, "  rust "), ArticleQuery { page: 1, size: 20, keyword: Some("rust".to_owned()) });
}

#[test]
fn blank_search_clears_keyword() {
    let current = ArticleQuery { page: 2, size: 10, keyword: Some("old".to_owned()) };
    assert_eq!(search_query(&current, "   ").keyword, None);
}

#[test]
fn page_query_keeps_filter_and_clamps() {
    let current = ArticleQuery { page: 1, size: 10, keyword: Some("rust".to_owned()) };
    assert_eq!(page_query(&current, 3), ArticleQuery { page: 3, ..current.clone() });
    assert_eq!(page_query(&current, 0).page, 1);
}

#[test]
fn author_name_falls_back_when_missing() {
    let mut a = article(serde_json::json!({ "id": 1, "title": "T" }));
    assert_eq!(author_name(&a), "anonymous");

    a.user = Some(Author { id: 2, username: "ada".to_owned(), avatar: String::new() });
    assert_eq!(author_name(&a), "ada");
}
