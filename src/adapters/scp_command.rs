use std::path::{Path, PathBuf};

use super::process::{spawn_reporting, stderr_details};
use crate::domain::AppError;
use crate::ports::SecureCopy;

#[derive(Debug, Clone)]
pub struct ScpCommandAdapter {
    root: PathBuf,
    echo: bool,
}

impl ScpCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root, echo: false }
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}

fn scp_args(port: &str, source: &str, destination: &str) -> Vec<String> {
    vec![format!("-P{}", port), source.to_string(), destination.to_string()]
}

impl SecureCopy for ScpCommandAdapter {
    fn copy_from_remote(
        &self,
        port: &str,
        source: &str,
        destination: &Path,
    ) -> Result<(), AppError> {
        let destination = destination.to_str().ok_or_else(|| AppError::ExternalToolError {
            tool: "scp".into(),
            error: format!("destination path is not valid UTF-8: {}", destination.display()),
        })?;
        let args = scp_args(port, source, destination);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let output = spawn_reporting("scp", &args, &self.root, self.echo).map_err(|e| {
            AppError::ExternalToolError {
                tool: "scp".into(),
                error: format!("Failed to execute scp: {}", e),
            }
        })?;

        if !output.status.success() {
            return Err(AppError::ExternalToolError {
                tool: "scp".into(),
                error: format!("scp {} failed: {}", args.join(" "), stderr_details(&output)),
            });
        }

        Ok(())
    }
}
