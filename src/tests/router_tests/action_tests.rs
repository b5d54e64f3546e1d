use crate::app_state::AppState;
use crate::router::handle;
use crate::tests::utils::{app, location, make_db, request, ScriptedTours};
use http::Method;
use url::Url;

#[test]
fn add_listing_redirects_to_form() {
    let app = app(make_db("action_add"), ScriptedTours::failing(500));
    let resp = handle(request(Method::POST, "/dashboard/add-listing", None), &app).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/add-edit-listing");
}

#[test]
fn assistant_redirects_to_chat() {
    let app = app(make_db("action_chat"), ScriptedTours::ok(Vec::new()));
    let resp = handle(request(Method::POST, "/dashboard/assistant", None), &app).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/chat");
}

#[test]
fn listing_card_redirects_to_detail() {
    let app = app(make_db("action_view"), ScriptedTours::ok(Vec::new()));
    let resp = handle(request(Method::GET, "/dashboard/listings/17", None), &app).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/listing/17");
}

#[test]
fn bad_listing_id_is_bad_request() {
    let app = app(make_db("action_bad_id"), ScriptedTours::ok(Vec::new()));
    let err = handle(request(Method::GET, "/dashboard/listings/abc", None), &app)
        .err()
        .expect("request should fail");
    assert_eq!(err.status(), 400);
}

#[test]
fn actions_resolve_against_frontend_base() {
    let base = Url::parse("https://app.example.com/").unwrap();
    let app = AppState::new(
        make_db("action_base"),
        ScriptedTours::ok(Vec::new()),
        Some(base),
    );
    let resp = handle(request(Method::POST, "/dashboard/add-listing", None), &app).unwrap();

    assert_eq!(location(&resp), "https://app.example.com/add-edit-listing");
}

#[test]
fn frontend_base_path_is_kept() {
    let base = Url::parse("https://app.example.com/portal").unwrap();
    let app = AppState::new(
        make_db("action_base_path"),
        ScriptedTours::ok(Vec::new()),
        Some(base),
    );
    let resp = handle(request(Method::GET, "/dashboard/listings/5", None), &app).unwrap();

    assert_eq!(location(&resp), "https://app.example.com/portal/listing/5");
}

#[test]
fn actions_require_post() {
    let app = app(make_db("action_get"), ScriptedTours::ok(Vec::new()));
    let err = handle(request(Method::GET, "/dashboard/add-listing", None), &app)
        .err()
        .expect("request should fail");
    assert_eq!(err.status(), 404);
}
