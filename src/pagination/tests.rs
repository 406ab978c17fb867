//! Tests for the pagination engine

use super::*;
use crate::error::Error;
use crate::http::{Client, ClientConfig};
use crate::params::Params;
use crate::resources::Sim;
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> Client {
    Client::with_config(
        ClientConfig::builder()
            .base_url(base_url)
            .credentials("AC0000000000000000000000000000aa", "token")
            .build(),
    )
    .unwrap()
}

fn sim_json(i: usize) -> Value {
    json!({
        "sid": format!("HS00000000000000000000000000{i:04}"),
        "unique_name": null,
        "account_sid": "AC0000000000000000000000000000aa",
        "iccid": format!("8988307000012345{i:04}"),
        "status": "active",
        "fleet_sid": null,
        "date_created": "2025-01-12T09:30:00Z",
        "date_updated": "2025-01-12T09:30:00Z",
        "url": format!("https://supersim.example.com/v1/Sims/HS00000000000000000000000000{i:04}")
    })
}

fn page_body(records: Vec<Value>, page_size: u32, next_page_url: Option<&str>) -> Value {
    json!({
        "meta": {
            "first_page_url": "https://supersim.example.com/v1/Sims?PageSize=5&Page=0",
            "key": "sims",
            "next_page_url": next_page_url,
            "page": 0,
            "page_size": page_size,
            "previous_page_url": null,
            "url": "https://supersim.example.com/v1/Sims?PageSize=5&Page=0"
        },
        "sims": records
    })
}

// ============================================================================
// Cursor state
// ============================================================================

#[test]
fn test_cursor_predicates() {
    assert!(Cursor::Start.is_start());
    assert!(!Cursor::Start.has_more());

    let cursor = Cursor::HasMore("https://example.com/next".to_string());
    assert!(cursor.has_more());
    assert!(!cursor.is_exhausted());

    assert!(Cursor::Exhausted.is_exhausted());
    assert!(!Cursor::Exhausted.is_start());
}

#[test]
fn test_page_meta_empty_next_url_is_terminal() {
    let meta: PageMeta = serde_json::from_value(json!({
        "first_page_url": "https://example.com/Sims?Page=0",
        "key": "sims",
        "next_page_url": "",
        "page": 0,
        "page_size": 50,
        "previous_page_url": null,
        "url": "https://example.com/Sims?Page=0"
    }))
    .unwrap();
    assert_eq!(meta.next_url(), None);
}

// ============================================================================
// Envelope decoding
// ============================================================================

#[test]
fn test_page_decode_preserves_record_order() {
    let body = page_body(vec![sim_json(3), sim_json(1), sim_json(2)], 5, None);
    let page = Page::<Sim>::from_value(body).unwrap();

    let sids: Vec<_> = page.records.iter().map(|s| s.sid.as_str()).collect();
    assert_eq!(
        sids,
        vec![
            "HS000000000000000000000000000003",
            "HS000000000000000000000000000001",
            "HS000000000000000000000000000002"
        ]
    );
}

#[test]
fn test_page_decode_missing_meta() {
    let err = Page::<Sim>::from_value(json!({ "sims": [] })).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("meta"));
}

#[test]
fn test_page_decode_missing_page_size() {
    let body = json!({
        "meta": {
            "first_page_url": "https://example.com/Sims?Page=0",
            "key": "sims",
            "next_page_url": null,
            "page": 0,
            "previous_page_url": null,
            "url": "https://example.com/Sims?Page=0"
        },
        "sims": []
    });
    let err = Page::<Sim>::from_value(body).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("page meta"));
}

#[test]
fn test_page_decode_missing_resource_array() {
    let body = json!({
        "meta": {
            "first_page_url": "https://example.com/Sims?Page=0",
            "key": "sims",
            "next_page_url": null,
            "page": 0,
            "page_size": 50,
            "previous_page_url": null,
            "url": "https://example.com/Sims?Page=0"
        }
    });
    let err = Page::<Sim>::from_value(body).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("sims"));
}

#[test]
fn test_page_decode_malformed_record() {
    let body = page_body(vec![json!({"sid": "HS123"})], 5, None);
    let err = Page::<Sim>::from_value(body).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("record 0"));
}

// ============================================================================
// Traversal
// ============================================================================

#[tokio::test]
async fn test_first_fetch_applies_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Sims"))
        .and(query_param("Status", "active"))
        .and(query_param("Fleet", "HF123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_body(vec![sim_json(1)], 50, None)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let mut iter = client
        .sims()
        .iter(Params::new().set("Status", "active").set("Fleet", "HF123"));

    assert!(iter.cursor().is_start());
    let page = iter.next_page().await.unwrap();
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn test_single_terminal_page() {
    // 5 records, server page size 5: one page, no continuation.
    let mock_server = MockServer::start().await;

    let records: Vec<_> = (1..=5).map(sim_json).collect();
    Mock::given(method("GET"))
        .and(path("/Sims"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(records, 5, None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let mut iter = client.sims().iter(Params::new());

    let page = iter.next_page().await.unwrap();
    assert_eq!(page.meta.page_size, 5);
    assert_eq!(page.len(), 5);
    assert!(page.is_terminal());
    assert!(iter.cursor().is_exhausted());

    // Exhaustion is an explicit sentinel, not a silent re-fetch of page 1.
    let err = iter.next_page().await.unwrap_err();
    assert!(matches!(err, Error::NoMorePages));
}

#[tokio::test]
async fn test_two_page_traversal_follows_continuation_verbatim() {
    // 8 records, server page size 5: 5 on the first page, 3 on the second.
    let mock_server = MockServer::start().await;
    let continuation = format!("{}/SimsContinue?PageToken=PAHS42", mock_server.uri());

    let first: Vec<_> = (1..=5).map(sim_json).collect();
    Mock::given(method("GET"))
        .and(path("/Sims"))
        .and(query_param("Status", "active"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_body(first, 5, Some(&continuation))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // The continuation lives on a different path and carries no Status
    // filter: reaching it proves the URL was used verbatim and the original
    // filters were not reapplied.
    let second: Vec<_> = (6..=8).map(sim_json).collect();
    Mock::given(method("GET"))
        .and(path("/SimsContinue"))
        .and(query_param("PageToken", "PAHS42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(second, 5, None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let mut iter = client.sims().iter(Params::new().set("Status", "active"));

    let page = iter.next_page().await.unwrap();
    assert_eq!(page.len(), 5);
    assert!(!page.is_terminal());
    assert_eq!(iter.cursor(), &Cursor::HasMore(continuation));

    let page = iter.next_page().await.unwrap();
    assert_eq!(page.len(), 3);
    assert!(page.is_terminal());
    assert!(iter.cursor().is_exhausted());
}

#[tokio::test]
async fn test_transport_failure_preserves_cursor() {
    let mock_server = MockServer::start().await;
    let continuation = format!("{}/SimsContinue?PageToken=PAHS42", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/Sims"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(vec![sim_json(1)], 5, Some(&continuation))),
        )
        .mount(&mock_server)
        .await;

    // The continuation fails once, then succeeds.
    Mock::given(method("GET"))
        .and(path("/SimsContinue"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/SimsContinue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![sim_json(2)], 5, None)))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let mut iter = client.sims().iter(Params::new());

    iter.next_page().await.unwrap();
    assert_eq!(iter.cursor(), &Cursor::HasMore(continuation.clone()));

    // Failed fetch: cursor keeps its position for retry.
    let err = iter.next_page().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(iter.cursor(), &Cursor::HasMore(continuation));

    // Retrying the same logical call succeeds without skipping a window.
    let page = iter.next_page().await.unwrap();
    assert_eq!(page.records[0].sid, "HS000000000000000000000000000002");
    assert!(iter.cursor().is_exhausted());
}

#[tokio::test]
async fn test_decode_failure_preserves_cursor() {
    let mock_server = MockServer::start().await;

    // First response is not a page envelope at all.
    Mock::given(method("GET"))
        .and(path("/Sims"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sims": [] })))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Sims"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![sim_json(1)], 5, None)))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let mut iter = client.sims().iter(Params::new());

    let err = iter.next_page().await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(iter.cursor().is_start());

    let page = iter.next_page().await.unwrap();
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn test_empty_page_is_terminal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Sims"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![], 50, None)))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let mut iter = client.sims().iter(Params::new());

    let page = iter.next_page().await.unwrap();
    assert!(page.is_empty());
    assert!(page.is_terminal());
    assert!(iter.cursor().is_exhausted());
}

#[tokio::test]
async fn test_into_stream_flattens_pages() {
    let mock_server = MockServer::start().await;
    let continuation = format!("{}/SimsContinue?PageToken=PAHS42", mock_server.uri());

    let first: Vec<_> = (1..=5).map(sim_json).collect();
    Mock::given(method("GET"))
        .and(path("/Sims"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_body(first, 5, Some(&continuation))),
        )
        .mount(&mock_server)
        .await;

    let second: Vec<_> = (6..=8).map(sim_json).collect();
    Mock::given(method("GET"))
        .and(path("/SimsContinue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(second, 5, None)))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let sims: Vec<Sim> = client
        .sims()
        .iter(Params::new())
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(sims.len(), 8);
    assert_eq!(sims[0].sid, "HS000000000000000000000000000001");
    assert_eq!(sims[7].sid, "HS000000000000000000000000000008");
}

#[tokio::test]
async fn test_page_convenience_fetches_one_window() {
    let mock_server = MockServer::start().await;
    let continuation = format!("{}/SimsContinue?PageToken=PAHS42", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/Sims"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(vec![sim_json(1)], 5, Some(&continuation))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client.sims().page(Params::new()).await.unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.meta.next_url(), Some(continuation.as_str()));
}
