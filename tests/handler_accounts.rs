mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_register_user() {
    let server = common::create_test_server();

    let response = server
        .post("/api/user/users/add")
        .json(&json!({ "email": "lan@example.com", "name": "Lan", "password": "x" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Đăng ký người dùng thành công!");
    assert_eq!(json["userId"], format!("USER{}", common::NOW));
    assert_eq!(json["userDetails"]["email"], "lan@example.com");
    assert_eq!(json["userDetails"]["name"], "Lan");
    assert_eq!(
        json["userDetails"]["registeredAt"].as_str().unwrap().len(),
        19
    );
}

#[tokio::test]
async fn test_register_user_defaults() {
    let server = common::create_test_server();

    let response = server.post("/api/user/users/add").json(&json!({})).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["userDetails"]["email"], "");
    assert_eq!(json["userDetails"]["name"], "");
}

#[tokio::test]
async fn test_login_as_admin() {
    let server = common::create_test_server();

    let response = server
        .post("/api/user/auth/login")
        .json(&json!({
            "email": common::ADMIN_EMAIL,
            "password": common::ADMIN_PASSWORD
        }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Đăng nhập thành công!");
    assert_eq!(json["token"], format!("mock_jwt_token_{}", common::NOW));
    assert_eq!(json["userId"], "ADMIN_001");
    assert_eq!(json["email"], common::ADMIN_EMAIL);
    assert_eq!(json["fullName"], "Administrator");
    assert_eq!(json["name"], "Administrator");
    assert_eq!(json["roles"], json!(["ADMIN"]));
    assert_eq!(json["user"]["role"], "admin");
    assert_eq!(json["user"]["userId"], "ADMIN_001");
    assert_eq!(json["user"]["email"], common::ADMIN_EMAIL);
    assert_eq!(json["user"]["loginTime"].as_str().unwrap().len(), 19);
}

#[tokio::test]
async fn test_login_as_regular_user() {
    let server = common::create_test_server();

    let response = server
        .post("/api/user/auth/login")
        .json(&json!({ "email": "lan.nguyen@example.com", "password": "whatever" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["userId"], format!("USER_{}", common::NOW));
    assert_eq!(json["name"], "lan.nguyen");
    assert_eq!(json["fullName"], "lan.nguyen");
    assert_eq!(json["roles"], json!(["User"]));
    assert_eq!(json["user"]["role"], "user");
}

#[tokio::test]
async fn test_login_with_wrong_admin_password_is_regular_user() {
    let server = common::create_test_server();

    let response = server
        .post("/api/user/auth/login")
        .json(&json!({ "email": common::ADMIN_EMAIL, "password": "nope" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["roles"], json!(["User"]));
    assert_eq!(json["name"], "admin");
}

#[tokio::test]
async fn test_login_without_email() {
    let server = common::create_test_server();

    let response = server.post("/api/user/auth/login").json(&json!({})).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["name"], "Demo User");
    assert_eq!(json["email"], "");
}

#[tokio::test]
async fn test_login_rejects_malformed_json() {
    let server = common::create_test_server();

    let response = server.post("/api/user/auth/login").text("{").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Invalid JSON data");
}

#[tokio::test]
async fn test_register_user_echoes_values_as_sent() {
    let server = common::create_test_server();

    let response = server
        .post("/api/user/users/add")
        .json(&json!({ "email": null, "name": 12 }))
        .await;

    response.assert_status_ok();
    let details = &response.json::<Value>()["userDetails"];
    assert!(details["email"].is_null());
    assert_eq!(details["name"], 12);
}

#[tokio::test]
async fn test_login_with_non_string_email() {
    let server = common::create_test_server();

    let response = server
        .post("/api/user/auth/login")
        .json(&json!({ "email": 42, "password": common::ADMIN_PASSWORD }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["name"], "Demo User");
    assert_eq!(json["email"], 42);
    assert_eq!(json["user"]["email"], 42);
    assert_eq!(json["roles"], json!(["User"]));
}
