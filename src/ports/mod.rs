mod gerrit_api;
mod git;
mod secure_copy;
mod username_prompt;

pub use gerrit_api::GerritRestApi;
pub use git::Git;
pub use secure_copy::SecureCopy;
pub use username_prompt::UsernamePrompt;
