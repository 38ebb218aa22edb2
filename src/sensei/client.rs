// HTTP client for jlptsensei.com.
// Handles the domain allow-list, request headers, and status checking.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use url::Url;

use crate::error::{NotesError, Result};

pub const SENSEI_BASE_URL: &str = "https://jlptsensei.com";
pub const ALLOWED_DOMAINS: [&str; 2] = ["jlptsensei.com", "www.jlptsensei.com"];

const CLIENT_USER_AGENT: &str = concat!("jlpt-notes/", env!("CARGO_PKG_VERSION"));

/// Site client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct SenseiClient {
    client: Client,
    allowed_domains: Vec<String>,
}

impl SenseiClient {
    /// Create a client that only visits the given hosts.
    pub fn new(allowed_domains: Vec<String>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(NotesError::Http)?;

        Ok(Self {
            client,
            allowed_domains,
        })
    }

    /// Create a client restricted to the public site.
    pub fn with_defaults(timeout: Duration) -> Result<Self> {
        Self::new(
            ALLOWED_DOMAINS.iter().map(|d| d.to_string()).collect(),
            timeout,
        )
    }

    /// Whether `url` points at an allowed host.
    pub fn is_allowed(&self, url: &Url) -> bool {
        match url.host_str() {
            Some(host) => self
                .allowed_domains
                .iter()
                .any(|d| d.eq_ignore_ascii_case(host)),
            None => false,
        }
    }

    /// Fetch a page and return its body as text.
    pub async fn get_html(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|e| NotesError::invalid_url(url, e))?;
        if !self.is_allowed(&parsed) {
            return Err(NotesError::DisallowedDomain(url.to_string()));
        }

        let response = self.client.get(parsed).send().await?;
        let response = check_response(response)?;
        Ok(response.text().await?)
    }
}

/// Check response status and convert errors.
fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::NOT_FOUND => Err(NotesError::NotFound(response.url().to_string())),
        status => Err(NotesError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        }),
    }
}
