pub mod checkout;
pub mod fetch;
pub mod init;
pub mod pull;
pub mod review;

use crate::app::AppContext;
use crate::domain::{Action, AppError};
use crate::ports::{GerritRestApi, Git, SecureCopy, UsernamePrompt};

/// Run a resolved action against the context.
pub fn execute<G, S, A, P>(ctx: &AppContext<G, S, A, P>, action: &Action) -> Result<(), AppError>
where
    G: Git,
    S: SecureCopy,
    A: GerritRestApi,
    P: UsernamePrompt,
{
    match action {
        Action::Init => {
            if !init::execute(ctx)? {
                println!("gerrit remote already configured");
            }
        }
        Action::Fetch { changeset } => {
            fetch::execute(ctx, changeset)?;
        }
        Action::Pull { branch } => pull::execute(ctx, branch)?,
        Action::Checkout { branch } => checkout::execute(ctx, branch)?,
        Action::Review { branch } => review::execute(ctx, branch)?,
    }
    Ok(())
}
