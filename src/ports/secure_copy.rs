use std::path::Path;

use crate::domain::AppError;

/// Copies a file from a remote host over SSH.
pub trait SecureCopy {
    /// Copy `source` (`user@host:path`) to the local `destination` using `port`.
    fn copy_from_remote(
        &self,
        port: &str,
        source: &str,
        destination: &Path,
    ) -> Result<(), AppError>;
}
