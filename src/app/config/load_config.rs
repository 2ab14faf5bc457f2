//! `.gitreview` loading from the working directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppError, GerritConfig};

/// Read and parse `.gitreview` at `path`.
pub fn load_gitreview(path: &Path) -> Result<GerritConfig, AppError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(AppError::GitReviewMissing(path.display().to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    GerritConfig::parse(&content)
}
