use super::*;
use crate::net::test_helpers::{VALID_TOKEN, client, slow_profile_handler, spawn_backend};
use axum::Router;
use axum::routing::get;
use std::time::Duration;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn endpoint_appends_path_to_base() {
    assert_eq!(endpoint("http://h/api", LOGIN_PATH), "http://h/api/auth/login");
    assert_eq!(endpoint("http://h/api", PROFILE_PATH), "http://h/api/auth/profile");
}

#[test]
fn new_uses_normalized_config_base() {
    let client = ApiClient::new(&ApiConfig::new("http://admin.example.test/api/")).unwrap();
    assert_eq!(client.base_url(), "http://admin.example.test/api");
    assert_eq!(client.bearer_token(), None);
}

#[test]
fn debug_redacts_bearer_token() {
    let mut client = ApiClient::new(&ApiConfig::default()).unwrap();
    client.set_bearer_token(Some("secret-token".into()));
    let printed = format!("{client:?}");
    assert!(!printed.contains("secret-token"));
    assert!(printed.contains("<redacted>"));
}

// =============================================================
// Operations
// =============================================================

#[tokio::test]
async fn login_with_valid_credentials_returns_token_and_role() {
    let client = client().await;
    let resp = client.login(&LoginRequest::new("admin", "123456")).await.unwrap();
    assert!(!resp.token.is_empty());
    assert_eq!(resp.user.role.name, "admin");
    assert_eq!(resp.user.nickname, "Administrator");
}

#[tokio::test]
async fn login_with_invalid_credentials_rejects_with_status_unchanged() {
    let client = client().await;
    let err = client.login(&LoginRequest::new("admin", "wrong")).await.unwrap_err();
    match &err {
        ApiError::Status { status, body } => {
            assert_eq!(*status, 401);
            let parsed: Value = serde_json::from_str(body).unwrap();
            assert_eq!(parsed["error"], "密码错误");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(err.remote_message().as_deref(), Some("登录失败"));
}

#[tokio::test]
async fn login_with_empty_token_is_rejected() {
    let client = client().await;
    let err = client.login(&LoginRequest::new("blank", "x")).await.unwrap_err();
    assert!(matches!(err, ApiError::EmptyToken));
}

#[tokio::test]
async fn profile_without_token_is_unauthorized() {
    let client = client().await;
    let err = client.get_profile().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn profile_with_bearer_returns_user() {
    let mut client = client().await;
    client.set_bearer_token(Some(VALID_TOKEN.to_owned()));
    let user = client.get_profile().await.unwrap();
    assert_eq!(user.username, "admin");
    assert_eq!(user.role.id, 1);
}

#[tokio::test]
async fn logout_acknowledges_with_message() {
    let mut client = client().await;
    client.set_bearer_token(Some(VALID_TOKEN.to_owned()));
    let ack = client.logout().await.unwrap();
    assert_eq!(ack, Ack { code: 200, message: "登出成功".to_owned() });
}

#[tokio::test]
async fn register_acknowledges_new_user() {
    let client = client().await;
    let ack = client
        .register(&RegisterRequest::new("carol", "pw", "carol@example.com"))
        .await
        .unwrap();
    assert_eq!(ack.code, 200);
    assert_eq!(ack.message, "注册成功");
}

#[tokio::test]
async fn register_conflict_propagates_status() {
    let client = client().await;
    let err = client
        .register(&RegisterRequest::new("admin", "pw", "a@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.remote_message().as_deref(), Some("用户名已存在"));
}

#[tokio::test]
async fn unknown_route_is_status_error() {
    let base = spawn_backend(Router::new()).await;
    let client = ApiClient::new(&ApiConfig::new(base)).unwrap();
    let err = client.logout().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

// =============================================================
// Transport failures
// =============================================================

#[tokio::test]
async fn slow_backend_times_out() {
    let base = spawn_backend(Router::new().route("/api/auth/profile", get(slow_profile_handler))).await;
    let config = ApiConfig::new(base).with_timeout(Duration::from_millis(50));
    let client = ApiClient::new(&config).unwrap();
    let err = client.get_profile().await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&ApiConfig::new(format!("http://{addr}/api"))).unwrap();
    let err = client.login(&LoginRequest::new("admin", "123456")).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(!err.is_timeout());
}
