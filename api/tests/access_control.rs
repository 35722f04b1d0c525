mod helper;

use axum::http::{header, Method, StatusCode};
use kernel::model::role::Role;
use serde_json::json;

use helper::{body_json, TestApp};

#[tokio::test]
async fn requests_without_a_cookie_are_rejected() {
    let app = TestApp::new();

    let res = app.get("/my-bookings/guest@example.com", None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(res).await;
    assert_eq!(body["message"], "unauthorized access");
}

#[tokio::test]
async fn tampered_token_is_rejected() {
    let app = TestApp::new();

    let res = app
        .get("/my-bookings/guest@example.com", Some("token=not-a-jwt"))
        .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn role_mismatch_is_reported_as_unauthorized() {
    let app = TestApp::new();
    app.seed_user("Guest Gina", "gina@example.com", Role::Guest);
    let cookie = app.session_for("gina@example.com");

    // 管理者専用
    let res = app.get("/users", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // ホスト専用
    let res = app
        .send_json(
            Method::POST,
            "/room",
            json!({
                "title": "Sea View Cabin",
                "location": "Okinawa",
                "category": "Cabin",
                "price": 120.0,
                "guests": 2,
                "bedrooms": 1,
                "bathrooms": 1,
                "description": "A cabin by the sea",
                "image": "https://img.example.com/cabin.jpg",
                "hostName": "Gina"
            }),
            Some(&cookie),
        )
        .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_can_list_users() {
    let app = TestApp::new();
    app.seed_user("Admin Ann", "ann@example.com", Role::Admin);
    app.seed_user("Guest Gina", "gina@example.com", Role::Guest);
    let cookie = app.session_for("ann@example.com");

    let res = app.get("/users", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn jwt_issues_an_http_only_session_cookie() {
    let app = TestApp::new();

    let res = app
        .send_json(
            Method::POST,
            "/jwt",
            json!({"email": "gina@example.com"}),
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let set_cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));

    let body = body_json(res).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn issued_cookie_grants_access() {
    let app = TestApp::new();
    app.seed_user("Guest Gina", "gina@example.com", Role::Guest);

    let res = app
        .send_json(
            Method::POST,
            "/jwt",
            json!({"email": "gina@example.com"}),
            None,
        )
        .await;
    let set_cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let res = app
        .get("/my-bookings/gina@example.com", Some(&cookie))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn invalid_email_cannot_get_a_token() {
    let app = TestApp::new();

    let res = app
        .send_json(Method::POST, "/jwt", json!({"email": "not-an-email"}), None)
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_expires_the_cookie() {
    let app = TestApp::new();

    let res = app.get("/logout", None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let set_cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn health_endpoints_answer() {
    let app = TestApp::new();

    let res = app.get("/health", None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.get("/health/db", None).await;
    assert_eq!(res.status(), StatusCode::OK);
}
