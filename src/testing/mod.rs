mod fake_gerrit_api;
mod fake_prompt;
mod fake_secure_copy;
mod harness;

pub use fake_gerrit_api::FakeGerritApi;
pub use fake_git::FakeGit;
pub use fake_prompt::FakePrompt;
pub use fake_secure_copy::FakeSecureCopy;
pub use harness::TestHarness;
