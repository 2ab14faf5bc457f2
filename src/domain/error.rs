use std::io;

use thiserror::Error;

/// Library-wide error type for grr operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No .gitreview file at the expected location.
    #[error("No .gitreview file found at {0}")]
    GitReviewMissing(String),

    /// The .gitreview file is not valid INI.
    #[error("Malformed .gitreview: {0}")]
    IniParse(#[from] ini::ParseError),

    /// Required section absent from .gitreview.
    #[error("Section [{0}] not found in .gitreview")]
    ConfigSectionMissing(String),

    /// Required key absent from the [gerrit] section.
    #[error("Key '{key}' not found in section [{section}] of .gitreview")]
    ConfigKeyMissing { section: String, key: String },

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Non-git external tool failed.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// REST request failed at the transport or HTTP level.
    #[error("API request '{query}' failed: {details}")]
    Api { query: String, details: String },

    /// REST response body shorter than the anti-XSSI prefix.
    #[error("API response too short: expected at least {expected} bytes, got {actual}")]
    ResponseTooShort { expected: usize, actual: usize },

    /// REST response is not valid JSON after stripping the prefix.
    #[error("Failed to parse API response: {0}")]
    Json(#[from] serde_json::Error),

    /// The change's current revision is not listed in its revisions.
    #[error("Change {change} has no revision entry for {revision}")]
    RevisionMissing { change: String, revision: String },

    /// The current revision offers no fetch info for the requested scheme.
    #[error("Change {change} has no '{scheme}' fetch info")]
    FetchSchemeMissing { change: String, scheme: String },

    /// A git config key is set, but to an empty string.
    #[error("git config {key} is set but empty")]
    EmptyConfigValue { key: String },

    /// Interactive input failed or was aborted.
    #[error("Failed to read {what}: {details}")]
    Prompt { what: String, details: String },

    /// Action requires an argument that was not given.
    #[error("'{action}' requires a {argument} argument")]
    MissingArgument { action: String, argument: String },

    /// Action received more arguments than it accepts.
    #[error("Unexpected argument '{argument}' for '{action}'")]
    UnexpectedArgument { action: String, argument: String },
}

impl AppError {
    pub fn git<C: Into<String>, D: Into<String>>(command: C, details: D) -> Self {
        AppError::GitError { command: command.into(), details: details.into() }
    }
}
