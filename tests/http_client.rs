#![allow(clippy::unwrap_used)]
//! `GlossaryClient` against an in-process fake of the DeepL API.

use assert_cmd::Command;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use predicates::prelude::*;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use deepl_glossary::compare::{Comparator, TestCase, Verdict};
use deepl_glossary::deepl::{
    ClientConfig, DeleteOutcome, GlossaryApi, GlossaryClient, GlossaryError, GlossarySpec,
    TranslateRequest,
};
use deepl_glossary::terms::TermSet;

const KEY: &str = "test-key:fx";

const DEFAULTS: &[(&str, &str)] = &[
    ("the", "这个"),
    ("agent", "代理"),
    ("learns", "学习"),
    ("a", "一个"),
    ("policy", "政策"),
];

#[derive(Default)]
struct Account {
    glossaries: Vec<(Value, String)>,
    next_id: usize,
}

type Shared = Arc<Mutex<Account>>;

fn message(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("DeepL-Auth-Key {KEY}"))
}

async fn create_glossary(
    State(account): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return message(StatusCode::FORBIDDEN, "Forbidden");
    }
    if body["entries_format"] != "tsv" {
        return message(StatusCode::BAD_REQUEST, "Unsupported entries format");
    }

    let mut account = account.lock().unwrap();
    if !account.glossaries.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "message": "Too many glossaries",
                "detail": "limit of 1 glossary reached"
            })),
        )
            .into_response();
    }

    let entries = body["entries"].as_str().unwrap_or_default().to_string();
    account.next_id += 1;
    let record = json!({
        "glossary_id": format!("g-{}", account.next_id),
        "name": body["name"],
        "ready": true,
        "source_lang": body["source_lang"],
        "target_lang": body["target_lang"],
        "creation_time": "2024-01-01T00:00:00.000000Z",
        "entry_count": entries.lines().count(),
    });
    account.glossaries.push((record.clone(), entries));
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn list_glossaries(State(account): State<Shared>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return message(StatusCode::FORBIDDEN, "Forbidden");
    }
    let account = account.lock().unwrap();
    let records: Vec<&Value> = account.glossaries.iter().map(|(r, _)| r).collect();
    Json(json!({ "glossaries": records })).into_response()
}

fn find(account: &Account, id: &str) -> Option<(Value, String)> {
    account
        .glossaries
        .iter()
        .find(|(r, _)| r["glossary_id"] == id)
        .cloned()
}

async fn get_glossary(State(account): State<Shared>, Path(id): Path<String>) -> Response {
    match find(&account.lock().unwrap(), &id) {
        Some((record, _)) => Json(record).into_response(),
        None => message(StatusCode::NOT_FOUND, "Glossary not found"),
    }
}

async fn delete_glossary(State(account): State<Shared>, Path(id): Path<String>) -> Response {
    let mut account = account.lock().unwrap();
    let before = account.glossaries.len();
    account.glossaries.retain(|(r, _)| r["glossary_id"] != id.as_str());
    if account.glossaries.len() < before {
        StatusCode::NO_CONTENT.into_response()
    } else {
        message(StatusCode::NOT_FOUND, "Glossary not found")
    }
}

async fn glossary_entries(
    State(account): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let accept = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok());
    if accept != Some("text/tab-separated-values") {
        return message(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported Accept header");
    }
    match find(&account.lock().unwrap(), &id) {
        Some((_, entries)) => (
            [(header::CONTENT_TYPE, "text/tab-separated-values")],
            entries,
        )
            .into_response(),
        None => message(StatusCode::NOT_FOUND, "Glossary not found"),
    }
}

/// Word-by-word translation: glossary entries first, then a fixed dictionary.
async fn translate(State(account): State<Shared>, Json(body): Json<Value>) -> Response {
    if body["source_lang"] != "EN" || body["target_lang"] != "ZH" {
        return message(StatusCode::BAD_REQUEST, "Value for 'target_lang' not supported.");
    }

    let glossary = match body["glossary_id"].as_str() {
        Some(id) => match find(&account.lock().unwrap(), id) {
            Some((_, entries)) => Some(deepl_glossary::terms::deserialize(&entries)),
            None => return message(StatusCode::NOT_FOUND, "Glossary not found"),
        },
        None => None,
    };

    let text = body["text"][0].as_str().unwrap_or_default();
    let translated: Vec<String> = text
        .split_whitespace()
        .map(|word| {
            let key = word.to_lowercase();
            glossary
                .as_ref()
                .and_then(|g| g.get(&key).map(str::to_string))
                .or_else(|| {
                    DEFAULTS
                        .iter()
                        .find(|(s, _)| *s == key)
                        .map(|(_, t)| (*t).to_string())
                })
                .unwrap_or_else(|| word.to_string())
        })
        .collect();

    Json(json!({
        "translations": [{ "detected_source_language": "EN", "text": translated.join(" ") }]
    }))
    .into_response()
}

fn fake_deepl() -> Router {
    Router::new()
        .route("/v2/glossaries", post(create_glossary).get(list_glossaries))
        .route(
            "/v2/glossaries/:id",
            get(get_glossary).delete(delete_glossary),
        )
        .route("/v2/glossaries/:id/entries", get(glossary_entries))
        .route("/v2/translate", post(translate))
        .with_state(Shared::default())
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_with_key(endpoint: &str, api_key: &str) -> GlossaryClient {
    GlossaryClient::new(&ClientConfig {
        endpoint: endpoint.to_string(),
        api_key: api_key.to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn client(endpoint: &str) -> GlossaryClient {
    client_with_key(endpoint, KEY)
}

fn spec() -> GlossarySpec {
    GlossarySpec {
        name: "Academic_AI_Terms".to_string(),
        source_lang: "en".to_string(),
        target_lang: "zh".to_string(),
    }
}

fn terms() -> TermSet {
    [("agent", "agent"), ("policy", "策略")].into_iter().collect()
}

#[tokio::test]
async fn test_list_with_no_glossaries_is_empty() {
    let endpoint = spawn(fake_deepl()).await;

    let records = client(&endpoint).list().await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_glossary_round_trip() {
    let endpoint = spawn(fake_deepl()).await;
    let client = client(&endpoint);

    let created = client.create(&spec(), &terms()).await.unwrap();
    assert_eq!(created.name, "Academic_AI_Terms");
    assert_eq!(created.entry_count, 2);

    let listed = client.list().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(client.get(&created.glossary_id).await.unwrap(), created);
    assert_eq!(
        client.get_entries(&created.glossary_id).await.unwrap(),
        terms()
    );

    assert_eq!(
        client.delete(&created.glossary_id).await.unwrap(),
        DeleteOutcome::Deleted
    );
    assert_eq!(
        client.delete(&created.glossary_id).await.unwrap(),
        DeleteOutcome::AlreadyGone
    );
}

#[tokio::test]
async fn test_entries_of_unknown_glossary_not_found() {
    let endpoint = spawn(fake_deepl()).await;

    let err = client(&endpoint).get_entries("nope").await.unwrap_err();

    assert!(matches!(err, GlossaryError::NotFound(ref id) if id == "nope"));
}

#[tokio::test]
async fn test_get_unknown_glossary_not_found() {
    let endpoint = spawn(fake_deepl()).await;

    let err = client(&endpoint).get("nope").await.unwrap_err();

    assert!(matches!(err, GlossaryError::NotFound(_)));
}

#[tokio::test]
async fn test_wrong_key_is_auth_error() {
    let endpoint = spawn(fake_deepl()).await;

    let err = client_with_key(&endpoint, "wrong").list().await.unwrap_err();

    assert!(matches!(err, GlossaryError::Auth { status: 403, .. }));
}

#[tokio::test]
async fn test_second_glossary_is_quota_exceeded() {
    let endpoint = spawn(fake_deepl()).await;
    let client = client(&endpoint);

    client.create(&spec(), &terms()).await.unwrap();
    let err = client.create(&spec(), &terms()).await.unwrap_err();

    match err {
        GlossaryError::QuotaExceeded { message } => {
            assert!(message.contains("Too many glossaries"));
        }
        other => panic!("expected quota error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_quota_status_code() {
    let app = Router::new().route(
        "/v2/glossaries",
        post(|| async { message(StatusCode::from_u16(456).unwrap(), "Quota exceeded") }),
    );
    let endpoint = spawn(app).await;

    let err = client(&endpoint)
        .create(&spec(), &terms())
        .await
        .unwrap_err();

    assert!(matches!(err, GlossaryError::QuotaExceeded { .. }));
}

#[tokio::test]
async fn test_rejected_entries_are_validation_error() {
    let app = Router::new().route(
        "/v2/glossaries",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Invalid glossary entries provided",
                    "detail": "Key with the index 1 duplicates key with the index 0"
                })),
            )
        }),
    );
    let endpoint = spawn(app).await;

    let err = client(&endpoint)
        .create(&spec(), &terms())
        .await
        .unwrap_err();

    match err {
        GlossaryError::Validation { message } => {
            assert!(message.contains("duplicates key"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_term_set_rejected_before_request() {
    let err = client("http://127.0.0.1:9")
        .create(&spec(), &TermSet::new())
        .await
        .unwrap_err();

    assert!(matches!(err, GlossaryError::Validation { .. }));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let app = Router::new().route("/v2/glossaries", get(|| async { "not json" }));
    let endpoint = spawn(app).await;

    let err = client(&endpoint).list().await.unwrap_err();

    assert!(matches!(err, GlossaryError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_closed_port_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}")).list().await.unwrap_err();

    assert!(matches!(err, GlossaryError::Network(_)));
}

#[tokio::test]
async fn test_translate_with_unknown_glossary_fails() {
    let endpoint = spawn(fake_deepl()).await;

    let err = client(&endpoint)
        .translate(&TranslateRequest {
            text: "a policy",
            source_lang: "en",
            target_lang: "zh",
            glossary_id: Some("nope"),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, GlossaryError::Translation { status: 404, .. }));
}

#[tokio::test]
async fn test_policy_comparison_over_http() {
    let endpoint = spawn(fake_deepl()).await;
    let client = client(&endpoint);
    let created = client.create(&spec(), &terms()).await.unwrap();

    let comparator = Comparator::new(&client, "en", "zh");
    let case = TestCase::new("The agent learns a policy", &["agent", "策略"], &["agent"], "policy");
    let result = comparator.compare(&case, &created.glossary_id).await.unwrap();

    assert!(result.has_difference);
    assert_eq!(result.found_terms(), ["agent", "策略"]);
    assert_eq!(result.with_glossary, "这个 agent 学习 一个 策略");
    assert_eq!(result.verdict, Verdict::Passed);
}

#[tokio::test]
async fn test_cli_test_command_against_fake_server() {
    let endpoint = spawn(fake_deepl()).await;
    client(&endpoint)
        .create(&spec(), &TermSet::builtin())
        .await
        .unwrap();

    let config_home = tempfile::TempDir::new().unwrap();
    let config_path = config_home.path().to_path_buf();

    tokio::task::spawn_blocking(move || {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("deepl-glossary").unwrap();
        cmd.args(["--endpoint", endpoint.as_str(), "test"])
            .env("DEEPL_API_KEY", KEY)
            .env("XDG_CONFIG_HOME", &config_path)
            .env("NO_COLOR", "1")
            .assert()
            .success()
            .stdout(predicate::str::contains("Test 1/6"))
            .stdout(predicate::str::contains("Summary"));
    })
    .await
    .unwrap();
}
