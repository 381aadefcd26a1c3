//! Integration tests for the crawler
//!
//! These tests use wiremock to stand in for the staff directory and drive
//! the HTTP transport through full crawls.

use pes_faculty::config::{Config, UserAgentConfig};
use pes_faculty::crawler::crawl;
use pes_faculty::{FacultyCrawler, FacultyError, FacultyQuery};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pes_faculty=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.directory.base_url = base_url.to_string();
    config.crawler.request_timeout_secs = 5;
    config.user_agent = UserAgentConfig {
        crawler_name: "TestBot".to_string(),
        crawler_version: "1.0.0".to_string(),
        contact_url: "https://example.com/contact".to_string(),
        contact_email: "test@example.com".to_string(),
    };
    config
}

fn listing_page(base_url: &str, ids: &[&str], next: Option<(&str, u32)>) -> String {
    let entries: String = ids
        .iter()
        .map(|id| {
            format!(
                r#"<div class="staff-profile">
                    <a class="geodir-category-img_item" href="{}/{}/"><img src="/img/{}.jpg"></a>
                </div>"#,
                base_url, id, id
            )
        })
        .collect();
    let next_link = next
        .map(|(listing, page)| {
            format!(
                r#"<a class="nextposts-link" href="{}{}?page={}">Next</a>"#,
                base_url, listing, page
            )
        })
        .unwrap_or_default();
    format!(
        "<html><head><title>Staff</title></head><body>{}{}</body></html>",
        entries, next_link
    )
}

fn profile_page(name: &str, designation: &str, email: &str) -> String {
    format!(
        r#"<html><body>
        <h4>{name}</h4>
        <h5>{designation}</h5>
        <ul>
          <li class="contat-card"><p>Computer Science</p></li>
          <li class="contat-card"><p>RR Campus</p></li>
        </ul>
        <a href="mailto:{email}">{email}</a>
        <h3>Education</h3>
        <ul class="ul-item-left"><li><p>Ph.D</p></li></ul>
        </body></html>"#
    )
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_listing_page(server: &MockServer, route: &str, page: u32, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("page", page.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_two_page_listing_end_to_end() {
    init_tracing();
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let listing = "/rr/atoz/computer-science";

    mount_listing_page(
        &mock_server,
        listing,
        1,
        listing_page(&base_url, &["f100", "f101"], Some((listing, 2))),
    )
    .await;
    mount_listing_page(&mock_server, listing, 2, listing_page(&base_url, &["f102"], None)).await;

    let crawler = FacultyCrawler::new(create_test_config(&base_url)).expect("crawler");

    let urls = crawler.plan(Some("rr"), Some("cse")).expect("plan");
    assert_eq!(urls.len(), 1);
    assert!(urls[0].ends_with("/rr/atoz/computer-science"));

    let ids = crawler.paginate(&urls[0]).await;
    assert_eq!(ids, vec!["f100", "f101", "f102"]);
}

#[tokio::test]
async fn test_full_crawl_with_designation_filter() {
    init_tracing();
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let listing = "/hn/atoz/mechanical";

    mount_listing_page(
        &mock_server,
        listing,
        1,
        listing_page(&base_url, &["m1", "m2"], Some((listing, 2))),
    )
    .await;
    mount_listing_page(&mock_server, listing, 2, listing_page(&base_url, &["m3"], None)).await;
    mount_html(
        &mock_server,
        "/m1",
        profile_page("Kiran", "Professor, Head", "kiran@pes.edu"),
    )
    .await;
    mount_html(
        &mock_server,
        "/m2",
        profile_page("Latha", "Associate Professor", "latha@pes.edu"),
    )
    .await;
    mount_html(
        &mock_server,
        "/m3",
        profile_page("Mohan", "Professor", "mohan@pes.edu"),
    )
    .await;

    let crawler = FacultyCrawler::new(create_test_config(&base_url)).expect("crawler");
    let query = FacultyQuery::new()
        .campus("hn")
        .department("me")
        .designation("Professor");
    let professors = crawler.run(&query).await.expect("crawl failed");

    let names: Vec<&str> = professors.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Kiran", "Mohan"]);

    let kiran = &professors[0];
    assert_eq!(kiran.designation, vec!["Professor", "Head"]);
    assert_eq!(kiran.email.as_deref(), Some("kiran@pes.edu"));
    assert_eq!(kiran.department.as_deref(), Some("Computer Science"));
    assert_eq!(kiran.campus.as_deref(), Some("RR Campus"));
    assert_eq!(kiran.education, vec!["Ph.D"]);
}

#[tokio::test]
async fn test_first_page_failure_yields_nothing() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ec/atoz/law"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crawler = FacultyCrawler::new(create_test_config(&mock_server.uri())).expect("crawler");
    let ids = crawler
        .paginate(&format!("{}/ec/atoz/law", mock_server.uri()))
        .await;
    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_extract_missing_profile_is_fetch_error() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let crawler = FacultyCrawler::new(create_test_config(&mock_server.uri())).expect("crawler");
    match crawler.extract("missing").await {
        Err(FacultyError::Fetch { url, .. }) => {
            assert_eq!(url, format!("{}/missing", mock_server.uri()));
        }
        other => panic!("expected fetch error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_by_name() {
    init_tracing();
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/atoz/list/"))
        .and(query_param("search", "john doe"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
            <div class="col-md-3 left-padding-0"><a class="chat-contacts-item" href="{0}/s1/">John Doe</a></div>
            <div class="col-md-3 left-padding-0"><a class="chat-contacts-item" href="{0}/s2/">John Doel</a></div>
            </body></html>"#,
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_html(&mock_server, "/s1", profile_page("John Doe", "Professor", "jd@pes.edu")).await;
    Mock::given(method("GET"))
        .and(path("/s2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let crawler = FacultyCrawler::new(create_test_config(&base_url)).expect("crawler");
    let professors = crawler
        .run(&FacultyQuery::new().name("john doe"))
        .await
        .expect("search failed");

    assert_eq!(professors.len(), 1);
    assert_eq!(professors[0].name, "John Doe");
}

#[tokio::test]
async fn test_requests_carry_user_agent() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ua1"))
        .and(header(
            "user-agent",
            "TestBot/1.0.0 (+https://example.com/contact; test@example.com)",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(profile_page("Uma", "Lecturer", "uma@pes.edu")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let crawler = FacultyCrawler::new(create_test_config(&mock_server.uri())).expect("crawler");
    let professor = crawler.extract("ua1").await.expect("extract failed");
    assert_eq!(professor.designation, vec!["Lecturer"]);
}

#[tokio::test]
async fn test_crawl_entry_point() {
    init_tracing();
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let listing = "/ec/atoz/psychology";

    mount_listing_page(&mock_server, listing, 1, listing_page(&base_url, &["y1"], None)).await;
    mount_html(&mock_server, "/y1", profile_page("Yamini", "Lecturer", "yamini@pes.edu")).await;

    let professors = crawl(
        create_test_config(&base_url),
        &FacultyQuery::new().campus("ec").department("psy"),
    )
    .await
    .expect("crawl failed");
    assert_eq!(professors.len(), 1);
    assert_eq!(professors[0].email.as_deref(), Some("yamini@pes.edu"));
}

#[tokio::test]
async fn test_crawl_rejects_invalid_config() {
    let mut config = Config::default();
    config.crawler.max_pages_per_listing = 0;

    let result = crawl(config, &FacultyQuery::new()).await;
    assert!(matches!(result, Err(FacultyError::Config(_))));
}
