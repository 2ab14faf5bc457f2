use ini::Ini;
use url::Url;

use super::AppError;

/// Project-local config file read from the working directory.
pub const GITREVIEW_FILE: &str = ".gitreview";

const GERRIT_SECTION: &str = "gerrit";

/// The `[gerrit]` section of `.gitreview`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GerritConfig {
    pub host: String,
    pub port: String,
    pub project: String,
}

impl GerritConfig {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let ini = Ini::load_from_str(content)?;
        let section = ini
            .section(Some(GERRIT_SECTION))
            .ok_or_else(|| AppError::ConfigSectionMissing(GERRIT_SECTION.to_string()))?;

        let required = |key: &str| {
            section.get(key).map(|value| value.trim().to_string()).ok_or_else(|| {
                AppError::ConfigKeyMissing {
                    section: GERRIT_SECTION.to_string(),
                    key: key.to_string(),
                }
            })
        };

        Ok(Self { host: required("host")?, port: required("port")?, project: required("project")? })
    }

    /// Project name as served over HTTP, without a trailing `.git`.
    pub fn project_name(&self) -> &str {
        self.project.strip_suffix(".git").unwrap_or(&self.project)
    }

    /// `ssh://<username>@<host>:<port>/<project>`
    pub fn ssh_remote_url(&self, username: &str) -> String {
        format!("ssh://{}@{}:{}/{}", username, self.host, self.port, self.project)
    }

    /// `<username>@<host>:hooks/commit-msg`, the scp source of the hook.
    pub fn commit_msg_hook_source(&self, username: &str) -> String {
        format!("{}@{}:hooks/commit-msg", username, self.host)
    }

    /// `https://<host>/r/<project>`
    pub fn anonymous_fetch_url(&self) -> String {
        format!("https://{}/r/{}", self.host, self.project_name())
    }

    /// Base URL that REST queries are joined onto.
    pub fn rest_base_url(&self) -> Result<Url, AppError> {
        Url::parse(&format!("https://{}/r/", self.host)).map_err(|e| AppError::Api {
            query: String::new(),
            details: format!("invalid host '{}': {}", self.host, e),
        })
    }
}
