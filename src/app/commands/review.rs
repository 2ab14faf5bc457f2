use super::init;
use crate::app::AppContext;
use crate::domain::{AppError, GERRIT_REMOTE};
use crate::ports::{GerritRestApi, Git, SecureCopy, UsernamePrompt};

/// Ensure the `gerrit` remote exists, then push `HEAD` for review on `branch`.
pub fn execute<G, S, A, P>(ctx: &AppContext<G, S, A, P>, branch: &str) -> Result<(), AppError>
where
    G: Git,
    S: SecureCopy,
    A: GerritRestApi,
    P: UsernamePrompt,
{
    init::execute(ctx)?;
    ctx.git().push(GERRIT_REMOTE, &format!("HEAD:refs/for/{}", branch))
}
