//! Integration tests for the resource sub-clients.

use futures_util::TryStreamExt;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use morisawa_fonts_webfont::prelude::*;

fn sdk(server: &MockServer) -> MorisawaFontsWebFont {
    MorisawaFontsWebFont::builder()
        .api_token("test-token")
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

fn month(s: &str) -> YearMonth {
    s.parse().expect("valid month")
}

// ─── Domains ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_domains_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/domains"))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": ["1.example.com", "2.example.com"],
            "meta": { "has_next": true, "next_cursor": "cursor1", "project_id": "project" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/domains"))
        .and(query_param("cursor", "cursor1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": ["3.example.com"],
            "meta": { "has_next": false, "project_id": "project" }
        })))
        .mount(&server)
        .await;

    let items: Vec<_> = sdk(&server)
        .domains()
        .list(PagerInput::new().limit(2), None)
        .into_items()
        .try_collect()
        .await
        .unwrap();

    let values: Vec<&str> = items.iter().map(|i| i.value.as_str()).collect();
    assert_eq!(values, ["1.example.com", "2.example.com", "3.example.com"]);
    assert!(items.iter().all(|i| i.meta.project_id == "project"));
    assert_eq!(items[0].meta.page.next_cursor(), Some("cursor1"));
    assert_eq!(items[2].meta.page, PageInfo::Last);
}

#[tokio::test]
async fn test_domains_add() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domains"))
        .and(body_json(json!({ "domains": ["example.com", "example.org"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domains": ["example.com", "example.org"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = sdk(&server)
        .domains()
        .add(&["example.com", "example.org"], None)
        .await
        .unwrap();

    assert_eq!(result.domains, ["example.com", "example.org"]);
}

#[tokio::test]
async fn test_domains_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/domains"))
        .and(body_json(json!({ "domains": ["example.com"] })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let domains = vec!["example.com".to_string()];
    sdk(&server).domains().delete(&domains, None).await.unwrap();
}

#[tokio::test]
async fn test_domains_list_with_call_options() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/domains"))
        .and(header("authorization", "Bearer other-project"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [],
            "meta": { "has_next": false, "project_id": "other" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ClientOptions::new().api_token("other-project");
    let mut pager = sdk(&server).domains().list(PagerInput::new(), Some(options));
    let page = pager.next_page().await.unwrap();

    assert_eq!(page.meta.project_id, "other");
    assert!(!pager.has_next_page());
}

// ─── Stats ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_pv_get() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/pv"))
        .and(query_param("from", "2025-08"))
        .and(query_param("to", "2025-09"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pv": { "total": 4200 },
            "meta": { "project_id": "project", "from": "2025-08", "to": "2025-09" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let input = PvInput::new().from(month("2025-08")).to(month("2025-09"));
    let result = sdk(&server).stats().pv().get(input, None).await.unwrap();

    assert_eq!(result.pv.total, 4200);
    assert_eq!(result.meta.project_id, "project");
    assert_eq!(result.meta.to, "2025-09");
}

#[tokio::test]
async fn test_pv_domains_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/pv/domains"))
        .and(query_param("from", "2025-08"))
        .and(query_param("to", "2025-09"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [
                { "domain": "1.example.com", "value": 100 },
                { "domain": "2.example.com", "value": 200 }
            ],
            "meta": {
                "has_next": true, "next_cursor": "cursor1",
                "project_id": "project", "from": "2025-08", "to": "2025-09"
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/pv/domains"))
        .and(query_param("from", "2025-08"))
        .and(query_param("to", "2025-09"))
        .and(query_param("cursor", "cursor1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [
                { "domain": "3.example.com", "value": 300 },
                { "domain": "4.example.com", "value": 400 }
            ],
            "meta": {
                "has_next": false,
                "project_id": "project", "from": "2025-08", "to": "2025-09"
            }
        })))
        .mount(&server)
        .await;

    let input = PvDomainsInput::new()
        .from(month("2025-08"))
        .to(month("2025-09"));
    let mut pager = sdk(&server).stats().pv().domains().list(input, None);
    let items = pager.collect_items().await.unwrap();

    assert_eq!(items.len(), 4);
    for (i, item) in items.iter().enumerate() {
        let n = i as u64 + 1;
        assert_eq!(
            item.value,
            DomainPv {
                domain: format!("{n}.example.com"),
                value: n * 100,
            }
        );
        assert_eq!(item.meta.page.has_next(), n <= 2);
        assert_eq!(item.meta.from, "2025-08");
        assert_eq!(item.meta.to, "2025-09");
    }
}

#[tokio::test]
async fn test_pv_domains_filter_by_domain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/pv/domains"))
        .and(query_param("domain", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{ "domain": "example.com", "value": 7 }],
            "meta": { "has_next": false, "project_id": "p", "from": "2025-01", "to": "2025-01" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let input = PvDomainsInput::new().domain("example.com");
    let mut pager = sdk(&server).stats().pv().domains().list(input, None);
    let page = pager.next_page().await.unwrap();

    assert_eq!(page.result[0].value, 7);
}

#[tokio::test]
async fn test_api_errors_reach_resource_callers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domains"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "invalid domain" })),
        )
        .mount(&server)
        .await;

    let err = sdk(&server)
        .domains()
        .add(&["not a domain"], None)
        .await
        .unwrap_err();

    let api = err.as_api().expect("should be an API error");
    assert_eq!(api.status(), 422);
    assert!(api.message().ends_with(": invalid domain"));
}
