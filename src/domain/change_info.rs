use std::collections::HashMap;

use serde::Deserialize;

use super::{AppError, FetchDescriptor};

/// Fetch scheme used for changes looked up over REST.
pub const ANONYMOUS_HTTP: &str = "anonymous http";

/// Subset of Gerrit's `ChangeInfo` returned by `changes/<id>?o=CURRENT_REVISION`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeInfo {
    pub current_revision: String,
    #[serde(default)]
    pub revisions: HashMap<String, RevisionInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RevisionInfo {
    #[serde(default)]
    pub fetch: HashMap<String, FetchInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchInfo {
    pub url: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
}

impl ChangeInfo {
    /// Fetch location of the current revision for the given scheme.
    pub fn current_fetch(&self, change: &str, scheme: &str) -> Result<FetchDescriptor, AppError> {
        let revision = self.revisions.get(&self.current_revision).ok_or_else(|| {
            AppError::RevisionMissing {
                change: change.to_string(),
                revision: self.current_revision.clone(),
            }
        })?;
        let fetch = revision.fetch.get(scheme).ok_or_else(|| AppError::FetchSchemeMissing {
            change: change.to_string(),
            scheme: scheme.to_string(),
        })?;

        Ok(FetchDescriptor { url: fetch.url.clone(), ref_name: fetch.ref_name.clone() })
    }
}
