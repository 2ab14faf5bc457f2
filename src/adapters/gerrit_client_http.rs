//! Gerrit REST client implementation using reqwest.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use url::Url;

use crate::domain::AppError;
use crate::ports::GerritRestApi;

/// Gerrit prepends `)]}'` to every JSON response to defeat script inclusion.
const XSSI_PREFIX_LEN: usize = 4;

/// HTTP client for the Gerrit REST API.
#[derive(Debug, Clone)]
pub struct HttpGerritClient {
    client: Client,
}

impl HttpGerritClient {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(concat!("grr/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Api {
                query: String::new(),
                details: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

impl GerritRestApi for HttpGerritClient {
    fn get(&self, base_url: &Url, query: &str) -> Result<Value, AppError> {
        let api_error = |details: String| AppError::Api { query: query.to_string(), details };

        let url = base_url.join(query).map_err(|e| api_error(format!("invalid URL: {}", e)))?;
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| api_error(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(api_error(format!("HTTP {}: {}", status.as_u16(), error_text.trim())));
        }

        let body =
            response.bytes().map_err(|e| api_error(format!("Failed to read response: {}", e)))?;
        parse_prefixed_json(&body)
    }
}

/// Drop the anti-XSSI prefix and parse what remains.
fn parse_prefixed_json(body: &[u8]) -> Result<Value, AppError> {
    let payload = body.get(XSSI_PREFIX_LEN..).ok_or(AppError::ResponseTooShort {
        expected: XSSI_PREFIX_LEN,
        actual: body.len(),
    })?;
    Ok(serde_json::from_slice(payload)?)
}
