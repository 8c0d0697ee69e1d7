use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::testing::{Harness, ok_body};
use crate::net::transport::TransportError;
use crate::net::types::UserInfo;
use crate::state::session::TOKEN_KEY;

fn ada() -> UserInfo {
    UserInfo { id: 1, username: "ada".to_owned(), ..UserInfo::default() }
}

// =============================================================
// Request stage
// =============================================================

#[test]
fn prepare_prefixes_api_base() {
    let h = Harness::new();
    let request = h.pipeline.prepare(HttpRequest::get("/user/info"));
    assert_eq!(request.path, "/api/v1/user/info");
}

#[test]
fn attaches_bearer_after_set_user() {
    let h = Harness::new();
    h.session.set_user("tok-1", ada());
    h.transport.reply(200, ok_body(json!(null)));

    let _: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::get("/user/info")));

    assert_eq!(h.transport.last_request().header(AUTHORIZATION), Some("Bearer tok-1"));
}

#[test]
fn omits_authorization_when_signed_out() {
    let h = Harness::new();
    h.transport.reply(200, ok_body(json!(null)));

    let _: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::get("/article/list")));

    assert_eq!(h.transport.last_request().header(AUTHORIZATION), None);
}

#[test]
fn omits_authorization_after_clear_user() {
    let h = Harness::new();
    h.session.set_user("tok-2", ada());
    h.session.clear_user();
    h.transport.reply(200, ok_body(json!(null)));

    let _: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::get("/article/list")));

    assert_eq!(h.transport.last_request().header(AUTHORIZATION), None);
    assert!(!h.storage.contains(TOKEN_KEY));
}

// =============================================================
// Envelope handling
// =============================================================

#[test]
fn success_envelope_resolves_with_data() {
    let h = Harness::new();
    h.transport.reply(200, ok_body(json!({ "id": 4, "username": "ada" })));

    let info: UserInfo = block_on(h.pipeline.send(HttpRequest::get("/user/info"))).unwrap();

    assert_eq!(info.id, 4);
    assert!(h.errors().is_empty());
}

#[test]
fn failure_envelope_notifies_server_message() {
    let h = Harness::new();
    h.transport.reply(200, json!({ "code": 403, "msg": "no permission", "data": null }));

    let result: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::delete("/article/3")));

    assert_eq!(result, Err(ApiError::Api { code: 403, msg: "no permission".to_owned() }));
    assert_eq!(h.errors(), vec!["no permission".to_owned()]);
}

#[test]
fn failure_envelope_without_message_uses_default() {
    let h = Harness::new();
    h.transport.reply(200, json!({ "code": 500, "msg": "", "data": null }));

    let result: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::get("/article/list")));

    assert!(matches!(result, Err(ApiError::Api { code: 500, .. })));
    assert_eq!(h.errors(), vec![DEFAULT_FAILURE_MESSAGE.to_owned()]);
}

#[test]
fn failure_envelope_on_error_status_still_surfaces_message() {
    let h = Harness::new();
    h.transport.reply(400, json!({ "code": 400, "msg": "title required", "data": null }));

    let result: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::post("/article")));

    assert_eq!(result, Err(ApiError::Api { code: 400, msg: "title required".to_owned() }));
    assert_eq!(h.errors(), vec!["title required".to_owned()]);
}

#[test]
fn error_status_without_envelope_is_generic() {
    let h = Harness::new();
    h.transport.reply_raw(502, "<html>bad gateway</html>");

    let result: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::get("/article/list")));

    assert_eq!(result, Err(ApiError::Http { status: 502 }));
    assert_eq!(h.errors(), vec![SERVER_ERROR_MESSAGE.to_owned()]);
}

#[test]
fn success_status_with_mismatched_data_is_decode_error() {
    let h = Harness::new();
    h.transport.reply(200, ok_body(json!("not a user")));

    let result: Result<UserInfo, _> = block_on(h.pipeline.send(HttpRequest::get("/user/info")));

    assert!(matches!(result, Err(ApiError::Decode(_))));
    assert_eq!(h.errors(), vec![SERVER_ERROR_MESSAGE.to_owned()]);
}

#[test]
fn transport_failure_notifies_and_returns_error() {
    let h = Harness::new();
    h.transport.fail(TransportError::Timeout(5000));

    let result: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::get("/article/list")));

    assert_eq!(result, Err(ApiError::Timeout(5000)));
    assert_eq!(h.errors(), vec!["request timed out after 5000 ms".to_owned()]);
    assert_eq!(h.transport.sent.borrow().len(), 1);
}

// =============================================================
// Unauthorized
// =============================================================

#[test]
fn unauthorized_clears_session_and_prompts() {
    let h = Harness::new();
    h.session.set_user("stale", ada());
    h.notifier.accept.set(true);
    h.transport.reply(401, json!({ "code": 401, "msg": "token expired", "data": null }));

    let result: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::get("/user/info")));

    assert_eq!(result, Err(ApiError::Unauthorized));
    assert_eq!(h.session.token(), "");
    assert!(!h.storage.contains(TOKEN_KEY));
    assert_eq!(h.notifier.confirms.get(), 1);
    assert_eq!(*h.navigator.visited.borrow(), vec!["/login".to_owned()]);
    assert!(h.errors().is_empty());
}

#[test]
fn declined_prompt_stays_on_page() {
    let h = Harness::new();
    h.session.set_user("stale", ada());
    h.transport.reply_raw(401, "");

    let _: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::get("/user/info")));

    assert_eq!(h.notifier.confirms.get(), 1);
    assert!(h.navigator.visited.borrow().is_empty());
    assert!(!h.session.is_authenticated());
}

#[test]
fn concurrent_unauthorized_prompts_once() {
    let h = Harness::new();
    h.session.set_user("stale", ada());
    h.notifier.accept.set(true);
    for _ in 0..3 {
        h.transport.reply_raw(401, "");
    }

    let calls = futures::future::join_all((0..3).map(|i| {
        let pipeline = h.pipeline.clone();
        async move { pipeline.send::<serde_json::Value>(HttpRequest::get(format!("/article/{i}"))).await }
    }));
    let results = block_on(calls);

    assert!(results.iter().all(|r| *r == Err(ApiError::Unauthorized)));
    assert_eq!(h.notifier.confirms.get(), 1);
    assert_eq!(h.navigator.visited.borrow().len(), 1);
}

#[test]
fn prompt_rearms_after_next_sign_in() {
    let h = Harness::new();
    h.session.set_user("first", ada());
    h.transport.reply_raw(401, "");
    let _: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::get("/user/info")));

    h.session.set_user("second", ada());
    h.transport.reply_raw(401, "");
    let _: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::get("/user/info")));

    assert_eq!(h.notifier.confirms.get(), 2);
}

#[test]
fn unauthenticated_401_surfaces_server_reason() {
    let h = Harness::new();
    h.notifier.accept.set(true);
    for _ in 0..2 {
        h.transport.reply(401, json!({ "code": 401, "msg": "wrong password", "data": null }));
    }

    let rejected = ApiError::Api { code: 401, msg: "wrong password".to_owned() };
    for _ in 0..2 {
        let result: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::post("/user/login")));
        assert_eq!(result, Err(rejected.clone()));
    }

    assert_eq!(h.errors(), vec!["wrong password".to_owned(), "wrong password".to_owned()]);
    assert_eq!(h.notifier.confirms.get(), 0);
    assert!(h.navigator.visited.borrow().is_empty());
}

#[test]
fn unauthenticated_401_without_envelope_is_generic() {
    let h = Harness::new();
    h.transport.reply_raw(401, "");

    let result: Result<serde_json::Value, _> = block_on(h.pipeline.send(HttpRequest::post("/user/login")));

    assert_eq!(result, Err(ApiError::Http { status: 401 }));
    assert_eq!(h.errors(), vec![SERVER_ERROR_MESSAGE.to_owned()]);
    assert_eq!(h.notifier.confirms.get(), 0);
}
