use super::checkout;
use crate::app::AppContext;
use crate::domain::{AppError, ORIGIN_REMOTE};
use crate::ports::{GerritRestApi, Git, SecureCopy, UsernamePrompt};

/// Fetch `origin` and check out `origin/<branch>`.
pub fn execute<G, S, A, P>(ctx: &AppContext<G, S, A, P>, branch: &str) -> Result<(), AppError>
where
    G: Git,
    S: SecureCopy,
    A: GerritRestApi,
    P: UsernamePrompt,
{
    ctx.git().fetch(ORIGIN_REMOTE, None)?;
    checkout::execute(ctx, branch)
}
