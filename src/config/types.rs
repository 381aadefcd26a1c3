use serde::Deserialize;

/// Main configuration structure for the faculty crawler
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Where the staff directory lives
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Scheme and host every URL template is rooted at
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Domain a profile link must mention to count as the email address
    #[serde(rename = "email-domain", default = "default_email_domain")]
    pub email_domain: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            email_domain: default_email_domain(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Upper bound on pages walked for a single listing URL
    #[serde(rename = "max-pages-per-listing", default = "default_max_pages")]
    pub max_pages_per_listing: u32,

    /// Drop identifiers already seen earlier in the same crawl
    #[serde(default)]
    pub deduplicate: bool,

    /// Fail the whole crawl on the first profile that cannot be extracted
    #[serde(rename = "abort-on-profile-error", default)]
    pub abort_on_profile_error: bool,

    /// Total time allowed for one request (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Time allowed to establish a connection (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages_per_listing: default_max_pages(),
            deduplicate: false,
            abort_on_profile_error: false,
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "PesFacultyCrawler".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/pes-faculty".to_string(),
            contact_email: "maintainers@example.com".to_string(),
        }
    }
}

fn default_base_url() -> String {
    "https://staff.pes.edu".to_string()
}

fn default_email_domain() -> String {
    "pes.edu".to_string()
}

fn default_max_pages() -> u32 {
    500
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}
