use std::sync::Mutex;

use serde_json::Value;
use url::Url;

use crate::domain::AppError;
use crate::ports::GerritRestApi;

/// Returns a canned payload and records the requested URLs.
#[derive(Default)]
pub struct FakeGerritApi {
    pub response: Value,
    pub requests: Mutex<Vec<String>>,
}

impl FakeGerritApi {
    pub fn new(response: Value) -> Self {
        Self { response, requests: Mutex::new(Vec::new()) }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl GerritRestApi for FakeGerritApi {
    fn get(&self, base_url: &Url, query: &str) -> Result<Value, AppError> {
        let url = base_url.join(query).map_err(|e| AppError::Api {
            query: query.to_string(),
            details: e.to_string(),
        })?;
        self.requests.lock().unwrap().push(url.to_string());
        Ok(self.response.clone())
    }
}
