//! Fetch and check out a pending change.

use crate::app::AppContext;
use crate::domain::{ANONYMOUS_HTTP, AppError, ChangeInfo, Changeset, FetchDescriptor, change_ref};
use crate::ports::{GerritRestApi, Git, SecureCopy, UsernamePrompt};

/// Fetch `changeset` (`<change>` or `<change>:<patchset>`) and check out `FETCH_HEAD`.
///
/// A bare change resolves its current revision over REST; an explicit
/// patchset is fetched from the project's anonymous HTTP URL without a lookup.
pub fn execute<G, S, A, P>(
    ctx: &AppContext<G, S, A, P>,
    changeset: &str,
) -> Result<FetchDescriptor, AppError>
where
    G: Git,
    S: SecureCopy,
    A: GerritRestApi,
    P: UsernamePrompt,
{
    let fetch = resolve(ctx, &Changeset::parse(changeset))?;

    ctx.git().fetch(&fetch.url, Some(&fetch.ref_name))?;
    ctx.git().checkout("FETCH_HEAD", false)?;
    Ok(fetch)
}

fn resolve<G, S, A, P>(
    ctx: &AppContext<G, S, A, P>,
    changeset: &Changeset,
) -> Result<FetchDescriptor, AppError>
where
    G: Git,
    S: SecureCopy,
    A: GerritRestApi,
    P: UsernamePrompt,
{
    match changeset {
        Changeset::Patchset { change, patchset } => Ok(FetchDescriptor {
            url: ctx.config()?.anonymous_fetch_url(),
            ref_name: change_ref(change, patchset),
        }),
        Changeset::Change(change) => {
            let response = ctx.rest_api(&format!("changes/{}?o=CURRENT_REVISION", change))?;
            let info: ChangeInfo = serde_json::from_value(response)?;
            info.current_fetch(change, ANONYMOUS_HTTP)
        }
    }
}
