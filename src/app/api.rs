//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{DialoguerPrompt, GitCommandAdapter, HttpGerritClient, ScpCommandAdapter};
use crate::app::{AppContext, commands};
use crate::domain::{Action, AppError};

pub use crate::domain::{FetchDescriptor, GerritConfig};

type LiveContext =
    AppContext<GitCommandAdapter, ScpCommandAdapter, HttpGerritClient, DialoguerPrompt>;

/// Create an `AppContext` backed by `git`, `scp` and HTTP for the given directory.
fn create_context(root: PathBuf, debug: bool) -> Result<LiveContext, AppError> {
    let git = GitCommandAdapter::new(root.clone()).with_echo(debug);
    let scp = ScpCommandAdapter::new(root.clone()).with_echo(debug);
    let api = HttpGerritClient::new()?;

    Ok(AppContext::new(root, git, scp, api, DialoguerPrompt::new()).with_debug(debug))
}

fn current_context(debug: bool) -> Result<LiveContext, AppError> {
    create_context(std::env::current_dir()?, debug)
}

/// Resolve positional arguments to an action and run it in the current directory.
///
/// With `debug`, the action and every external command are echoed to stdout.
pub fn run<S: AsRef<str>>(args: &[S], debug: bool) -> Result<(), AppError> {
    let action = Action::from_args(args)?;
    let ctx = current_context(debug)?;

    let (token, rest) = match args.split_first() {
        Some((first, rest)) => (first.as_ref(), rest),
        None => ("review", args),
    };
    let rest: Vec<&str> = rest.iter().map(|arg| arg.as_ref()).collect();
    ctx.debug(format!("action: {}, args: {}", token, rest.join(" ")));

    commands::execute(&ctx, &action)
}

/// Configure the `gerrit` remote. Returns `false` if it was already present.
pub fn init(debug: bool) -> Result<bool, AppError> {
    commands::init::execute(&current_context(debug)?)
}

/// Fetch a change (`<change>` or `<change>:<patchset>`) and check it out.
pub fn fetch(changeset: &str, debug: bool) -> Result<FetchDescriptor, AppError> {
    commands::fetch::execute(&current_context(debug)?, changeset)
}

/// Fetch `origin` and check out `origin/<branch>`.
pub fn pull(branch: &str, debug: bool) -> Result<(), AppError> {
    commands::pull::execute(&current_context(debug)?, branch)
}

/// Check out `origin/<branch>`.
pub fn checkout(branch: &str, debug: bool) -> Result<(), AppError> {
    commands::checkout::execute(&current_context(debug)?, branch)
}

/// Push `HEAD` to `refs/for/<branch>` on the `gerrit` remote.
pub fn review(branch: &str, debug: bool) -> Result<(), AppError> {
    commands::review::execute(&current_context(debug)?, branch)
}

/// Parse the `.gitreview` in the current directory.
pub fn config() -> Result<GerritConfig, AppError> {
    current_context(false)?.config().cloned()
}
