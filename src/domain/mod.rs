pub mod action;
pub mod change_info;
pub mod changeset;
pub mod error;
pub mod gerrit_config;

pub use action::{Action, DEFAULT_BRANCH};
pub use change_info::{ANONYMOUS_HTTP, ChangeInfo};
pub use changeset::{Changeset, FetchDescriptor, change_ref};
pub use error::AppError;
pub use gerrit_config::{GITREVIEW_FILE, GerritConfig};

/// Remote that reviews are pushed to.
pub const GERRIT_REMOTE: &str = "gerrit";

/// Upstream remote that `pull` and `checkout` track.
pub const ORIGIN_REMOTE: &str = "origin";

/// Local git config key holding the Gerrit username.
pub const USERNAME_CONFIG_KEY: &str = "gitreview.username";
