use serde_json::Value;
use url::Url;

use crate::domain::AppError;

/// Read-only access to Gerrit's REST API.
pub trait GerritRestApi {
    /// GET `query` relative to `base_url` and return the JSON payload with the
    /// anti-XSSI prefix removed.
    fn get(&self, base_url: &Url, query: &str) -> Result<Value, AppError>;
}
