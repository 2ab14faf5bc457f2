use std::cell::OnceCell;
use std::fmt::Display;
use std::path::PathBuf;

use serde_json::Value;

use crate::app::config::load_gitreview;
use crate::domain::{AppError, GITREVIEW_FILE, GerritConfig, USERNAME_CONFIG_KEY};
use crate::ports::{GerritRestApi, Git, SecureCopy, UsernamePrompt};

/// Application context holding dependencies for command execution.
///
/// The `.gitreview` config and the Gerrit username are resolved on first use
/// and cached for the lifetime of the context.
pub struct AppContext<G: Git, S: SecureCopy, A: GerritRestApi, P: UsernamePrompt> {
    root: PathBuf,
    debug: bool,
    git: G,
    scp: S,
    api: A,
    prompt: P,
    config: OnceCell<GerritConfig>,
    username: OnceCell<String>,
}

impl<G: Git, S: SecureCopy, A: GerritRestApi, P: UsernamePrompt> AppContext<G, S, A, P> {
    /// Create a new application context rooted at the repository working directory.
    pub fn new(root: PathBuf, git: G, scp: S, api: A, prompt: P) -> Self {
        Self {
            root,
            debug: false,
            git,
            scp,
            api,
            prompt,
            config: OnceCell::new(),
            username: OnceCell::new(),
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn scp(&self) -> &S {
        &self.scp
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Print `message` when running with `--debug`.
    pub fn debug(&self, message: impl Display) {
        if self.debug {
            println!("{}", message);
        }
    }

    /// The `[gerrit]` section of `.gitreview`, parsed on first access.
    pub fn config(&self) -> Result<&GerritConfig, AppError> {
        if let Some(config) = self.config.get() {
            return Ok(config);
        }

        self.debug("Parsing .gitreview file...");
        let config = load_gitreview(&self.root.join(GITREVIEW_FILE))?;
        Ok(self.config.get_or_init(|| config))
    }

    /// Gerrit username from git config, asking for and storing it when unset.
    ///
    /// A stored value is never overwritten, not even an empty one.
    pub fn username(&self) -> Result<&str, AppError> {
        if let Some(username) = self.username.get() {
            return Ok(username.as_str());
        }

        let username = match self.git.config_get(USERNAME_CONFIG_KEY)? {
            Some(stored) if stored.is_empty() => {
                return Err(AppError::EmptyConfigValue { key: USERNAME_CONFIG_KEY.into() });
            }
            Some(stored) => stored,
            None => {
                let entered = self.prompt.ask_username()?;
                if entered.is_empty() {
                    return Err(AppError::Prompt {
                        what: "gerrit username".into(),
                        details: "username must not be empty".into(),
                    });
                }
                self.git.config_set(USERNAME_CONFIG_KEY, &entered)?;
                entered
            }
        };

        Ok(self.username.get_or_init(|| username).as_str())
    }

    /// GET `https://<host>/r/<query>` and return the decoded JSON.
    pub fn rest_api(&self, query: &str) -> Result<Value, AppError> {
        self.debug(format!("Making API request to: {}", query));
        let base_url = self.config()?.rest_base_url()?;
        self.api.get(&base_url, query)
    }
}
