pub mod dialoguer_prompt;
pub mod gerrit_client_http;
pub mod git_command;
mod process;
pub mod scp_command;

pub use dialoguer_prompt::DialoguerPrompt;
pub use gerrit_client_http::HttpGerritClient;
pub use git_command::GitCommandAdapter;
pub use scp_command::ScpCommandAdapter;
