use crate::app::AppContext;
use crate::domain::{AppError, ORIGIN_REMOTE};
use crate::ports::{GerritRestApi, Git, SecureCopy, UsernamePrompt};

/// Check out `origin/<branch>` without fetching.
pub fn execute<G, S, A, P>(ctx: &AppContext<G, S, A, P>, branch: &str) -> Result<(), AppError>
where
    G: Git,
    S: SecureCopy,
    A: GerritRestApi,
    P: UsernamePrompt,
{
    ctx.git().checkout(&format!("{}/{}", ORIGIN_REMOTE, branch), false)
}
