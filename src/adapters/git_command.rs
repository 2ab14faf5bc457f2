use std::path::PathBuf;
use std::process::Output;

use super::process::{spawn, spawn_reporting, stderr_details};
use crate::domain::AppError;
use crate::ports::Git;

/// `git config` exits with this status when the key is not set.
const CONFIG_KEY_MISSING: i32 = 1;

#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
    echo: bool,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root, echo: false }
    }

    /// Echo each git command line to stdout before running it.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    fn run_output(&self, args: &[&str]) -> Result<Output, AppError> {
        spawn("git", args, &self.root, self.echo)
            .map_err(|e| AppError::git(format!("git {}", args.join(" ")), e.to_string()))
    }

    /// Run a query whose stdout is parsed.
    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let output = self.run_output(args)?;
        check_status(args, &output)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run a repository-changing command, letting git report on stderr as it goes.
    fn run_reporting(&self, args: &[&str]) -> Result<(), AppError> {
        let output = spawn_reporting("git", args, &self.root, self.echo)
            .map_err(|e| AppError::git(format!("git {}", args.join(" ")), e.to_string()))?;
        check_status(args, &output)
    }
}

fn check_status(args: &[&str], output: &Output) -> Result<(), AppError> {
    if output.status.success() {
        Ok(())
    } else {
        Err(AppError::git(format!("git {}", args.join(" ")), stderr_details(output)))
    }
}

impl Git for GitCommandAdapter {
    fn remotes(&self) -> Result<Vec<String>, AppError> {
        let output = self.run(&["remote"])?;
        Ok(output.lines().map(|line| line.trim().to_string()).filter(|l| !l.is_empty()).collect())
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError> {
        self.run_reporting(&["remote", "add", name, url])
    }

    fn config_get(&self, key: &str) -> Result<Option<String>, AppError> {
        let args = ["config", key];
        let output = self.run_output(&args)?;

        if output.status.success() {
            return Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()));
        }
        if output.status.code() == Some(CONFIG_KEY_MISSING) {
            return Ok(None);
        }

        Err(AppError::git(format!("git {}", args.join(" ")), stderr_details(&output)))
    }

    fn config_set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.run(&["config", key, value])?;
        Ok(())
    }

    fn fetch(&self, source: &str, refspec: Option<&str>) -> Result<(), AppError> {
        match refspec {
            Some(refspec) => self.run_reporting(&["fetch", source, refspec]),
            None => self.run_reporting(&["fetch", source]),
        }
    }

    fn checkout(&self, revision: &str, quiet: bool) -> Result<(), AppError> {
        let args = if quiet { vec!["checkout", revision, "-q"] } else { vec!["checkout", revision] };
        self.run_reporting(&args)
    }

    fn push(&self, remote: &str, refspec: &str) -> Result<(), AppError> {
        self.run_reporting(&["push", remote, refspec])
    }
}
