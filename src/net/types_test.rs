use super::*;

#[test]
fn envelope_success_code() {
    let ok: Envelope<serde_json::Value> = serde_json::from_str(r#"{"code":200,"msg":"ok","data":{"a":1}}"#).unwrap();
    assert!(ok.is_success());

    let denied: Envelope<serde_json::Value> = serde_json::from_str(r#"{"code":403,"msg":"no permission"}"#).unwrap();
    assert!(!denied.is_success());
    assert_eq!(denied.msg, "no permission");
    assert!(denied.data.is_null());
}

#[test]
fn envelope_requires_code() {
    assert!(serde_json::from_str::<Envelope<serde_json::Value>>(r#"{"msg":"hi"}"#).is_err());
}

#[test]
fn user_info_accepts_orm_id_and_float_numbers() {
    let info: UserInfo = serde_json::from_str(r#"{"ID":7.0,"username":"ada","avatar":""}"#).unwrap();
    assert_eq!(info.id, 7);
    assert_eq!(info.username, "ada");
    assert_eq!(info.role, "");
}

#[test]
fn user_info_rejects_fractional_id() {
    assert!(serde_json::from_str::<UserInfo>(r#"{"id":1.5}"#).is_err());
    assert!(serde_json::from_str::<UserInfo>(r#"{"id":-3}"#).is_err());
}

#[test]
fn login_data_maps_to_user_info() {
    let data: LoginData =
        serde_json::from_str(r#"{"token":"jwt","id":3,"username":"ada","avatar":"a.png"}"#).unwrap();
    assert_eq!(data.user_info(), UserInfo {
        id: 3,
        username: "ada".to_owned(),
        avatar: "a.png".to_owned(),
        role: String::new(),
    });
}

#[test]
fn article_decodes_orm_shape() {
    let raw = r#"{
        "ID": 12,
        "CreatedAt": "2024-03-01T10:00:00Z",
        "UpdatedAt": "2024-03-02T10:00:00Z",
        "DeletedAt": null,
        "title": "Hello",
        "content": "Body",
        "cover_img": "",
        "category_id": 2,
        "user_id": 3,
        "view_count": 41,
        "is_publish": true,
        "category": {"ID": 2, "name": "rust"},
        "user": {"ID": 3, "username": "ada", "avatar": ""}
    }"#;
    let article: Article = serde_json::from_str(raw).unwrap();
    assert_eq!(article.id, 12);
    assert_eq!(article.created_at.as_deref(), Some("2024-03-01T10:00:00Z"));
    assert_eq!(article.view_count, 41);
    assert_eq!(article.category.as_ref().map(|c| c.name.as_str()), Some("rust"));
    assert_eq!(article.user.as_ref().map(|u| u.id), Some(3));
}

#[test]
fn article_draft_from_article_copies_editable_fields() {
    let article: Article = serde_json::from_str(
        r#"{"id":5,"title":"T","content":"C","cover_img":"c.png","category_id":4,"is_publish":false}"#,
    )
    .unwrap();
    let draft = ArticleDraft::from(&article);
    assert_eq!(draft, ArticleDraft {
        title: "T".to_owned(),
        content: "C".to_owned(),
        category_id: 4,
        cover_img: "c.png".to_owned(),
        is_publish: false,
    });
}

#[test]
fn article_query_pairs_skip_blank_keyword() {
    let query = ArticleQuery { keyword: Some("   ".to_owned()), ..ArticleQuery::default() };
    assert_eq!(query.to_pairs(), vec![
        ("page".to_owned(), "1".to_owned()),
        ("size".to_owned(), "10".to_owned()),
    ]);

    let query = ArticleQuery { page: 0, size: 5, keyword: Some(" rust ".to_owned()) };
    assert_eq!(query.to_pairs(), vec![
        ("page".to_owned(), "1".to_owned()),
        ("size".to_owned(), "5".to_owned()),
        ("keyword".to_owned(), "rust".to_owned()),
    ]);
}

#[test]
fn article_page_counts() {
    let page: ArticlePage = serde_json::from_str(r#"{"list":[],"total":21,"page":2,"size":10}"#).unwrap();
    assert_eq!(page.page_count(), 3);
    assert!(page.has_next());

    let last = ArticlePage { page: 3, ..page.clone() };
    assert!(!last.has_next());

    let empty = ArticlePage::default();
    assert_eq!(empty.page_count(), 1);
}

#[test]
fn api_error_display_uses_server_message() {
    let err = ApiError::Api { code: 403, msg: "no permission".to_owned() };
    assert_eq!(err.to_string(), "no permission");
    assert_eq!(ApiError::Http { status: 502 }.to_string(), "server error: status 502");
}
