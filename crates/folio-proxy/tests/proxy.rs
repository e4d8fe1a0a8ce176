//! End-to-end runs of the admin client through the proxy against a mock BFF.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, RawQuery},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use folio::api::{BodyState, parse_cookie};
use folio::api::native::MemoryCookies;
use folio::data::SkillDraft;
use folio::id::Id;
use folio::{AdminClient, ClientConfig};
use folio_proxy::{AppState, ProxyConfig};
use serde_json::{Value, json};
use tokio::net::TcpListener;

const TOKEN: &str = "tok123";
const SESSION: &str = "abc";

fn with_cookie(status: StatusCode, cookie: &str, body: Value) -> Response {
    let mut response = (status, Json(body)).into_response();
    if let Ok(value) = HeaderValue::from_str(cookie) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}

fn cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    parse_cookie(raw, name)
}

fn csrf_ok(headers: &HeaderMap) -> bool {
    let sent = headers.get("x-csrftoken").and_then(|v| v.to_str().ok());
    matches!((sent, cookie(headers, "csrftoken")), (Some(sent), Some(jar)) if sent == jar)
}

fn csrf_failure() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "errors": ["CSRF verification failed."] })),
    )
        .into_response()
}

fn mock_bff() -> Router {
    Router::new()
        .route(
            "/api/admin/csrf",
            get(|| async {
                with_cookie(
                    StatusCode::OK,
                    &format!("csrftoken={TOKEN}; Path=/; SameSite=Lax"),
                    json!({ "csrfToken": TOKEN }),
                )
            }),
        )
        .route(
            "/api/admin/login",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                if !csrf_ok(&headers) {
                    return csrf_failure();
                }
                if body["password"] != "hunter2" {
                    return (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "errors": ["Invalid credentials."] })),
                    )
                        .into_response();
                }
                with_cookie(
                    StatusCode::OK,
                    &format!("sessionid={SESSION}; Path=/; HttpOnly"),
                    json!({
                        "authenticated": true,
                        "user": { "id": 1, "username": body["username"], "isStaff": true }
                    }),
                )
            }),
        )
        .route(
            "/api/admin/session",
            get(|headers: HeaderMap| async move {
                if cookie(&headers, "sessionid").as_deref() == Some(SESSION) {
                    Json(json!({ "authenticated": true, "user": { "username": "ada" } }))
                } else {
                    Json(json!({ "authenticated": false }))
                }
            }),
        )
        .route(
            "/api/admin/skills",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                if !csrf_ok(&headers) {
                    return csrf_failure();
                }
                let skill = json!({ "id": 7, "name": body["name"], "order": body["order"] });
                (StatusCode::CREATED, Json(json!({ "skill": skill }))).into_response()
            }),
        )
        .route(
            "/api/admin/skills/{id}",
            delete(|Path(id): Path<i64>| async move {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "errors": [format!("Skill {id} not found.")] })),
                )
            }),
        )
        .route(
            "/api/admin/stats",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<h1>Server Error</h1>") }),
        )
        .route(
            "/api/admin/appointments",
            get(|RawQuery(query): RawQuery| async move {
                match query.as_deref() {
                    Some("limit=5") => (StatusCode::OK, Json(json!({ "appointments": [] }))),
                    _ => (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "errors": ["limit was not forwarded"] })),
                    ),
                }
            }),
        )
}

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

fn proxy_config(bff: SocketAddr, base_path: &str) -> ProxyConfig {
    ProxyConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        bff_base_url: format!("http://{bff}"),
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
        base_path: base_path.to_string(),
    }
}

async fn spawn_proxy(config: ProxyConfig) -> SocketAddr {
    let state = Arc::new(AppState::new(config).unwrap());
    serve(folio_proxy::router(state)).await
}

/// Proxy in front of a fresh mock BFF, plus a relative-routing client.
async fn setup() -> (AdminClient, MemoryCookies, SocketAddr) {
    let bff = serve(mock_bff()).await;
    let proxy = spawn_proxy(proxy_config(bff, "")).await;
    let cookies = MemoryCookies::new();
    let client = AdminClient::native(
        ClientConfig::relative(),
        Some(format!("http://{proxy}")),
        cookies.clone(),
    );
    (client, cookies, proxy)
}

#[tokio::test]
async fn login_flow_through_the_proxy() {
    let (client, cookies, _) = setup().await;

    let session = client.fetch_session().await;
    assert!(session.ok);
    assert!(!session.data.unwrap().authenticated);

    assert_eq!(client.get_csrf_token().await.as_deref(), Some(TOKEN));
    assert!(!cookies.is_empty());

    let login = client.login_admin("ada", "hunter2").await;
    assert!(login.ok, "{:?}", login.errors);
    assert_eq!(login.data.unwrap().user.unwrap().username, "ada");

    let session = client.fetch_session().await.data.unwrap();
    assert!(session.authenticated);
    assert_eq!(session.user.unwrap().username, "ada");
}

#[tokio::test]
async fn wrong_password_surfaces_the_bff_error() {
    let (client, _, _) = setup().await;
    client.get_csrf_token().await;

    let login = client.login_admin("ada", "nope").await;
    assert!(!login.ok);
    assert_eq!(login.status, 401);
    assert_eq!(login.first_error(), Some("Invalid credentials."));
}

#[tokio::test]
async fn mutation_without_csrf_cookie_is_rejected() {
    let (client, _, _) = setup().await;

    let login = client.login_admin("ada", "hunter2").await;
    assert_eq!(login.status, 403);
    assert_eq!(login.first_error(), Some("CSRF verification failed."));
}

#[tokio::test]
async fn create_then_delete_missing_skill() {
    let (client, _, _) = setup().await;
    client.get_csrf_token().await;

    let created = client
        .create_skill(&SkillDraft {
            name: "Rust".to_string(),
            order: 3,
        })
        .await;
    assert!(created.ok);
    assert_eq!(created.status, 201);
    let skill = created.data.unwrap().skill;
    assert_eq!(skill.id, Id::new(7));
    assert_eq!(skill.name, "Rust");
    assert_eq!(skill.order, 3);

    let deleted = client.delete_skill(Id::new(99)).await;
    assert!(!deleted.ok);
    assert_eq!(deleted.status, 404);
    assert!(deleted.data.is_none());
    assert_eq!(deleted.first_error(), Some("Skill 99 not found."));
}

#[tokio::test]
async fn non_json_error_page_is_tolerated() {
    let (client, _, _) = setup().await;

    let stats = client.fetch_stats().await;
    assert!(!stats.ok);
    assert_eq!(stats.status, 500);
    assert!(stats.data.is_none());
    assert!(stats.errors.is_none());
    assert!(matches!(stats.body, BodyState::Malformed(_)));
    assert_eq!(stats.first_error_or("Failed to load stats."), "Failed to load stats.");
}

#[tokio::test]
async fn query_strings_are_forwarded() {
    let (client, _, _) = setup().await;

    let appointments = client.fetch_appointments(Some(5)).await;
    assert!(appointments.ok, "{:?}", appointments.errors);
    assert!(appointments.data.unwrap().appointments.is_empty());
}

#[tokio::test]
async fn unreachable_bff_yields_bad_gateway() {
    let proxy = spawn_proxy(proxy_config(closed_addr().await, "")).await;
    let client = AdminClient::native(
        ClientConfig::relative(),
        Some(format!("http://{proxy}")),
        MemoryCookies::new(),
    );

    let session = client.fetch_session().await;
    assert!(!session.ok);
    assert_eq!(session.status, 502);
    assert!(session.first_error().unwrap().contains("unreachable"));
}

#[tokio::test]
async fn unreachable_api_yields_status_zero() {
    let addr = closed_addr().await;
    let client = AdminClient::native(
        ClientConfig::new(format!("http://{addr}")),
        None,
        MemoryCookies::new(),
    );

    let session = client.fetch_session().await;
    assert!(!session.ok);
    assert_eq!(session.status, 0);
    assert!(session.data.is_none());
    assert!(
        session
            .first_error()
            .unwrap()
            .starts_with(&format!("Unable to reach the admin API at http://{addr}"))
    );
}

#[tokio::test]
async fn health_reports_upstream() {
    let (_, _, proxy) = setup().await;

    let response = reqwest::get(format!("http://{proxy}/healthz")).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["upstream"].as_str().unwrap().starts_with("http://127.0.0.1:"));
    assert!(body["startedAt"].is_string());
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let (_, _, proxy) = setup().await;

    let response = reqwest::get(format!("http://{proxy}/dashboard/content/skills"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("folio-admin-shell"));
}

#[tokio::test]
async fn base_path_mounts_everything() {
    let bff = serve(mock_bff()).await;
    let proxy = spawn_proxy(proxy_config(bff, "/admin")).await;

    let health = reqwest::get(format!("http://{proxy}/admin/healthz")).await.unwrap();
    assert_eq!(health.status(), 200);

    let client = AdminClient::native(
        ClientConfig::new(format!("http://{proxy}/admin")),
        None,
        MemoryCookies::new(),
    );
    let session = client.fetch_session().await;
    assert!(session.ok, "{:?}", session.errors);
}

#[tokio::test]
async fn console_config_follows_the_mount_point() {
    let bff = serve(mock_bff()).await;
    let proxy = spawn_proxy(proxy_config(bff, "/admin")).await;
    let origin = Some(format!("http://{proxy}"));

    // Same inputs the console build sees: no BFF origin, mounted at `/admin/`.
    let config = ClientConfig::from_values(None, Some("/admin/"));
    assert!(config.is_relative());
    let client = AdminClient::native(config, origin.clone(), MemoryCookies::new());
    let session = client.fetch_session().await;
    assert!(session.ok, "{:?}", session.errors);

    let unmounted = AdminClient::native(ClientConfig::relative(), origin, MemoryCookies::new());
    let session = unmounted.fetch_session().await;
    assert!(!session.ok);
    assert_eq!(session.status, 404);
}
