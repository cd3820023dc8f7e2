//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end over real HTTP.

use spider_sense::config::{Config, UserAgentConfig};
use spider_sense::crawler::{start_crawl, CrawlOutcome, CrawlRequest, Crawler};
use spider_sense::output::{format_markdown_report, write_markdown_report};
use spider_sense::report::Report;
use spider_sense::{ConfigError, SpiderError, ValidationError};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with a fixed user agent and short timeout
fn create_test_config(timeout_secs: u64) -> Config {
    let mut config = Config::default();
    config.crawler.timeout_secs = timeout_secs;
    config.user_agent = UserAgentConfig {
        crawler_name: "TestBot".to_string(),
        crawler_version: "1.0.0".to_string(),
        contact_url: None,
        contact_email: None,
    };
    config
}

async fn mount_page(server: &MockServer, route: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn run_crawl(config: &Config, seed: &str, depth: u32) -> (CrawlOutcome, Report) {
    let crawler = Crawler::from_config(config).expect("Failed to build crawler");
    let request = CrawlRequest::new(seed, depth).expect("Invalid request");
    let report = Report::new();
    let outcome = crawler
        .crawl(&request, &CancellationToken::new(), &report)
        .await;
    (outcome, report)
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        200,
        format!(
            r#"<html><head><title>Home</title></head><body>
            Write to hello@shop.example.com
            <a href="{}/team">Team</a>
            <a href="/contact">Contact</a>
            <a href="https://elsewhere.example.org/">Partner</a>
            </body></html>"#,
            base_url
        ),
    )
    .await;

    mount_page(
        &mock_server,
        "/team",
        200,
        r#"<html><body>ceo@shop.example.com <a href="/">Home</a></body></html>"#.to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/contact",
        200,
        r#"<html><body>Call +44 20 7946 0958 or hello@shop.example.com</body></html>"#
            .to_string(),
    )
    .await;

    let config = create_test_config(5);
    let (outcome, report) = run_crawl(&config, &format!("{}/", base_url), 3).await;

    let snapshot = report.snapshot();
    assert_eq!(outcome, CrawlOutcome::Completed);
    assert_eq!(
        snapshot.visited,
        vec![
            format!("{}/", base_url),
            format!("{}/team", base_url),
            format!("{}/contact", base_url),
        ]
    );
    assert_eq!(
        snapshot.emails,
        vec!["hello@shop.example.com", "ceo@shop.example.com"]
    );
    assert_eq!(snapshot.phones, vec!["+44 20 7946 0958"]);
    assert!(snapshot.failures.is_empty());

    // Each page fetched exactly once, despite the link back to the home page
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_sends_identifying_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestBot/1.0.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("agent@example.com"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(5);
    let (_, report) = run_crawl(&config, &format!("{}/", mock_server.uri()), 1).await;

    assert_eq!(report.snapshot().emails, vec!["agent@example.com"]);
}

#[tokio::test]
async fn test_error_status_pages_are_scanned() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        200,
        r#"<a href="/missing">Missing</a><a href="/crash">Crash</a>"#.to_string(),
    )
    .await;
    mount_page(
        &mock_server,
        "/missing",
        404,
        "Not found. Report to webmaster@example.com".to_string(),
    )
    .await;
    mount_page(
        &mock_server,
        "/crash",
        500,
        "Support line 0800 123 4567".to_string(),
    )
    .await;

    let config = create_test_config(5);
    let (_, report) = run_crawl(&config, &format!("{}/", base_url), 2).await;

    let snapshot = report.snapshot();
    assert_eq!(snapshot.pages_visited, 3);
    assert_eq!(snapshot.emails, vec!["webmaster@example.com"]);
    assert_eq!(snapshot.phones, vec!["0800 123 4567"]);
    assert!(snapshot.failures.is_empty());
}

#[tokio::test]
async fn test_timeout_only_ends_its_branch() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        200,
        r#"<a href="/slow">Slow</a><a href="/fast">Fast</a>"#.to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late@example.com")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/fast", 200, "fast@example.com".to_string()).await;

    let config = create_test_config(1);
    let (outcome, report) = run_crawl(&config, &format!("{}/", base_url), 2).await;

    let snapshot = report.snapshot();
    assert_eq!(outcome, CrawlOutcome::Completed);
    assert_eq!(snapshot.emails, vec!["fast@example.com"]);
    assert_eq!(snapshot.failures.len(), 1);
    assert_eq!(snapshot.failures[0].url, format!("{}/slow", base_url));
}

#[tokio::test]
async fn test_unreachable_seed_still_produces_report() {
    // Nothing listens on the discard port
    let config = create_test_config(1);
    let (outcome, report) = run_crawl(&config, "http://127.0.0.1:9/", 3).await;

    let snapshot = report.snapshot();
    assert_eq!(outcome, CrawlOutcome::Completed);
    assert_eq!(snapshot.pages_visited, 1);
    assert_eq!(snapshot.failures.len(), 1);
    assert!(!snapshot.has_findings());
}

#[tokio::test]
async fn test_depth_zero_sends_no_requests() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", 200, "x@example.com".to_string()).await;

    let config = create_test_config(5);
    let session = start_crawl(&config, &format!("{}/", mock_server.uri()), "0").unwrap();
    let summary = session.wait().await.unwrap();

    assert_eq!(summary.outcome, CrawlOutcome::Completed);
    assert_eq!(summary.report.pages_visited, 0);
    assert!(!summary.report.has_findings());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_start_crawl_rejects_bad_input() {
    let config = create_test_config(5);

    let result = start_crawl(&config, "example.com", "2");
    assert!(matches!(
        result,
        Err(SpiderError::Validation(ValidationError::InvalidScheme(_)))
    ));

    let result = start_crawl(&config, "https://example.com/", "-3");
    assert!(matches!(
        result,
        Err(SpiderError::Validation(ValidationError::NegativeDepth(-3)))
    ));

    let result = start_crawl(&config, "https://example.com/", "lots");
    assert!(matches!(
        result,
        Err(SpiderError::Validation(ValidationError::InvalidDepth(_)))
    ));
}

#[tokio::test]
async fn test_start_crawl_revalidates_overridden_timeout() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", 200, "x@example.com".to_string()).await;

    // Loaded from defaults, then overridden the way the CLI does it
    let mut config = create_test_config(5);
    config.crawler.timeout_secs = 0;

    let result = start_crawl(&config, &format!("{}/", mock_server.uri()), "1");
    assert!(matches!(
        result,
        Err(SpiderError::Config(ConfigError::Validation(_)))
    ));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_stop_before_first_fetch() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", 200, "x@example.com".to_string()).await;

    let config = create_test_config(5);
    let crawler = Crawler::from_config(&config).unwrap();
    let request = CrawlRequest::new(&format!("{}/", mock_server.uri()), 2).unwrap();
    let report = Report::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let outcome = crawler.crawl(&request, &cancel, &report).await;

    assert_eq!(outcome, CrawlOutcome::Cancelled);
    assert_eq!(report.pages_visited(), 0);
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_markdown_export_after_crawl() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        200,
        "sales@example.com / 555-010-9999".to_string(),
    )
    .await;

    let config = create_test_config(5);
    let session = start_crawl(&config, &format!("{}/", mock_server.uri()), "1").unwrap();
    let summary = session.wait().await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.md");
    write_markdown_report(&summary.report, &report_path).unwrap();

    let written = std::fs::read_to_string(&report_path).unwrap();
    assert_eq!(written, format_markdown_report(&summary.report));
    assert!(written.contains("- **Total Pages Visited**: 1\n"));
    assert!(written.contains("- sales@example.com\n"));
    assert!(written.contains("- 555-010-9999\n"));
}
