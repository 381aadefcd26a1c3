//! In-memory transport and page builders for unit tests

use crate::crawler::fetcher::{FetchResult, Transport};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned responses by exact URL; unknown URLs answer 404
#[derive(Default)]
pub struct StubTransport {
    responses: HashMap<String, FetchResult>,
    requests: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            FetchResult::Success {
                status_code: 200,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn status(mut self, url: &str, status_code: u16) -> Self {
        self.responses
            .insert(url.to_string(), FetchResult::HttpError { status_code });
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> FetchResult {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .unwrap_or(FetchResult::HttpError { status_code: 404 })
    }
}

/// A listing page with one entry per id and an optional next link
pub fn listing_html(ids: &[&str], next_page: Option<u32>) -> String {
    let entries: String = ids
        .iter()
        .map(|id| {
            format!(
                r#"<div class="staff-profile"><a class="geodir-category-img_item" href="https://staff.pes.edu/{}/">x</a></div>"#,
                id
            )
        })
        .collect();
    let next = next_page
        .map(|n| format!(r#"<a class="nextposts-link" href="https://staff.pes.edu/atoz?page={}">Next</a>"#, n))
        .unwrap_or_default();
    format!("<html><body>{}{}</body></html>", entries, next)
}

/// A profile page carrying only a name and designation heading
pub fn profile_html(name: &str, designation: &str) -> String {
    format!(
        "<html><body><h4>{}</h4><h5>{}</h5></body></html>",
        name, designation
    )
}

/// A search result page with one card per id
pub fn search_html(ids: &[&str]) -> String {
    let cards: String = ids
        .iter()
        .map(|id| {
            format!(
                r#"<div class="col-md-3 left-padding-0"><a class="chat-contacts-item" href="https://staff.pes.edu/{}/">x</a></div>"#,
                id
            )
        })
        .collect();
    format!("<html><body>{}</body></html>", cards)
}
