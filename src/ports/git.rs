use crate::domain::AppError;

pub trait Git {
    /// Names of configured remotes, one per entry.
    fn remotes(&self) -> Result<Vec<String>, AppError>;

    /// Add a named remote.
    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError>;

    /// Read a key from the local git config. `None` if the key is unset.
    fn config_get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Write a key to the local git config.
    fn config_set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Fetch from a remote name or URL, optionally a single ref.
    fn fetch(&self, source: &str, refspec: Option<&str>) -> Result<(), AppError>;

    /// Check out a revision (detaching HEAD for remote-tracking refs).
    fn checkout(&self, revision: &str, quiet: bool) -> Result<(), AppError>;

    /// Push a refspec to a remote.
    fn push(&self, remote: &str, refspec: &str) -> Result<(), AppError>;
}
