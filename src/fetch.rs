use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

/// Anything that can hand back the rendered HTML of a wiki page or one of its
/// sub-sections.
pub trait PageSource {
    fn fetch_html(&self, page: &str, section: Option<u32>) -> Result<String>;
}

/// Build a MediaWiki `action=parse` URL for `page`, optionally narrowed to one
/// sub-section.
pub fn request_url(api_base: &str, page: &str, section: Option<u32>) -> String {
    let mut url = format!("{api_base}?action=parse&page={page}&format=json");
    if let Some(n) = section {
        url.push_str(&format!("&section={n}"));
    }
    url
}

#[derive(Debug, Deserialize)]
struct ParseEnvelope {
    parse: ParseBody,
}

#[derive(Debug, Deserialize)]
struct ParseBody {
    text: ParseText,
}

#[derive(Debug, Deserialize)]
struct ParseText {
    #[serde(rename = "*")]
    html: String,
}

/// Pull `parse.text.*` out of an `action=parse` JSON response body.
pub fn html_from_envelope(body: &str) -> Result<String> {
    let env: ParseEnvelope = serde_json::from_str(body)?;
    Ok(env.parse.text.html)
}

/// Blocking client for the wiki's parse API. One underlying connection pool is
/// reused for every request.
#[derive(Debug, Clone)]
pub struct WikiClient {
    http: Client,
    api_base: String,
}

impl WikiClient {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(WikiClient {
            http,
            api_base: config.api_base.clone(),
        })
    }
}

impl PageSource for WikiClient {
    fn fetch_html(&self, page: &str, section: Option<u32>) -> Result<String> {
        let url = request_url(&self.api_base, page, section);
        debug!(%url, "GET");

        let res = self.http.get(&url).send()?;
        let status = res.status();
        if status != StatusCode::OK {
            return Err(ScrapeError::Fetch {
                status: status.as_u16(),
                url,
            });
        }

        let body = res.text()?;
        html_from_envelope(&body)
    }
}
