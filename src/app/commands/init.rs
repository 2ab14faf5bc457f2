//! Gerrit remote and commit-msg hook setup.

use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, DEFAULT_BRANCH, GERRIT_REMOTE, ORIGIN_REMOTE};
use crate::ports::{GerritRestApi, Git, SecureCopy, UsernamePrompt};

/// Local destination of the hook, relative to the repository root.
pub const COMMIT_MSG_HOOK: &str = ".git/hooks/commit-msg";

/// Add the `gerrit` remote, install the commit-msg hook and detach onto
/// `origin/master`.
///
/// Returns `false` without touching anything when a `gerrit` remote exists.
pub fn execute<G, S, A, P>(ctx: &AppContext<G, S, A, P>) -> Result<bool, AppError>
where
    G: Git,
    S: SecureCopy,
    A: GerritRestApi,
    P: UsernamePrompt,
{
    let remotes = ctx.git().remotes()?;
    if remotes.iter().any(|remote| remote == GERRIT_REMOTE) {
        return Ok(false);
    }

    let username = ctx.username()?;
    let config = ctx.config()?;

    ctx.git().add_remote(GERRIT_REMOTE, &config.ssh_remote_url(username))?;
    println!("Added gerrit remote");

    ctx.scp().copy_from_remote(
        &config.port,
        &config.commit_msg_hook_source(username),
        Path::new(COMMIT_MSG_HOOK),
    )?;
    println!("Installed commit-msg hook");

    ctx.git().checkout(&format!("{}/{}", ORIGIN_REMOTE, DEFAULT_BRANCH), true)?;
    Ok(true)
}
