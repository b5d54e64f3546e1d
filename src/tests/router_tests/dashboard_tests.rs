// src/tests/router_tests/dashboard_tests.rs

use crate::router::handle;
use crate::tests::utils::{
    app, body_string, location, make_db, request, seed_listing, seed_session, seed_user,
    ScriptedTours,
};
use http::Method;

#[test]
fn root_redirects_to_dashboard() {
    let app = app(make_db("root"), ScriptedTours::ok(Vec::new()));

    let resp = handle(request(Method::GET, "/", None), &app).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/dashboard");
}

#[test]
fn dashboard_shows_seller_and_listings() {
    let db = make_db("dashboard_seller");
    let seller = seed_user(&db, "seller@example.com");
    seed_listing(&db, seller, "Craftsman bungalow", Some(1_250_000));
    seed_listing(&db, seller, "Lot on 5th", None);
    let token = seed_session(&db, seller, 3600);

    let app = app(db, ScriptedTours::ok(Vec::new()));
    let resp = handle(request(Method::GET, "/dashboard", Some(&token)), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Welcome back, seller@example.com"));
    assert!(body.contains("Your Active Listings (2)"));
    assert!(body.contains("Craftsman bungalow"));
    assert!(body.contains("Price: $1,250,000"));
    assert!(body.contains("Address: 12 Elm St, Provo, UT, 84601"));
    // Tours load after the page is shown.
    assert!(body.contains("Loading upcoming tours..."));
}

#[test]
fn dashboard_only_lists_own_listings() {
    let db = make_db("dashboard_own");
    let seller = seed_user(&db, "a@example.com");
    let other = seed_user(&db, "b@example.com");
    seed_listing(&db, other, "Not mine", Some(10));
    let token = seed_session(&db, seller, 3600);

    let app = app(db, ScriptedTours::ok(Vec::new()));
    let body = body_string(handle(request(Method::GET, "/dashboard", Some(&token)), &app).unwrap());

    assert!(body.contains("Your Active Listings (0)"));
    assert!(!body.contains("Not mine"));
    assert!(body.contains("created any listings yet"));
}

#[test]
fn expired_session_renders_anonymous_dashboard() {
    let db = make_db("dashboard_expired");
    let seller = seed_user(&db, "late@example.com");
    seed_listing(&db, seller, "Hidden", Some(1));
    let token = seed_session(&db, seller, -60);

    let app = app(db, ScriptedTours::ok(Vec::new()));
    let body = body_string(handle(request(Method::GET, "/dashboard", Some(&token)), &app).unwrap());

    assert!(!body.contains("Welcome back"));
    assert!(body.contains("Your Active Listings (0)"));
}

#[test]
fn page_render_does_not_fetch_tours() {
    let tours = ScriptedTours::ok(Vec::new());
    let app = app(make_db("dashboard_no_fetch"), tours.clone());

    handle(request(Method::GET, "/dashboard", None), &app).unwrap();

    // Connected (cheap), but the page itself never activates the panel.
    assert_eq!(tours.tokens(), vec![None]);
}

#[test]
fn unknown_route_is_not_found() {
    let app = app(make_db("dashboard_404"), ScriptedTours::ok(Vec::new()));
    let err = handle(request(Method::GET, "/nope", None), &app)
        .err()
        .expect("request should fail");
    assert_eq!(err.status(), 404);
}
