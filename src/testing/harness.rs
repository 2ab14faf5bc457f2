use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;

use super::{FakeGerritApi, FakeGit, FakePrompt, FakeSecureCopy};
use crate::app::AppContext;

pub const GITREVIEW: &str =
    "[gerrit]\nhost=gerrit.example.org\nport=29418\nproject=mediawiki/core.git\n";

pub type FakeContext = AppContext<FakeGit, FakeSecureCopy, FakeGerritApi, FakePrompt>;

/// An `AppContext` wired to fakes, rooted in a temporary directory.
pub struct TestHarness {
    dir: TempDir,
    pub ctx: FakeContext,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder {
            git: FakeGit::new(),
            gitreview: Some(GITREVIEW.to_string()),
            prompt_answer: "carol".to_string(),
            api_response: Value::Null,
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

pub struct TestHarnessBuilder {
    git: FakeGit,
    gitreview: Option<String>,
    prompt_answer: String,
    api_response: Value,
}

impl TestHarnessBuilder {
    pub fn git(mut self, git: FakeGit) -> Self {
        self.git = git;
        self
    }

    pub fn gitreview(mut self, content: &str) -> Self {
        self.gitreview = Some(content.to_string());
        self
    }

    pub fn without_gitreview(mut self) -> Self {
        self.gitreview = None;
        self
    }

    pub fn prompt_answer(mut self, answer: &str) -> Self {
        self.prompt_answer = answer.to_string();
        self
    }

    pub fn api_response(mut self, response: Value) -> Self {
        self.api_response = response;
        self
    }

    pub fn build(self) -> TestHarness {
        let dir = TempDir::new().expect("Failed to create temp directory");
        if let Some(content) = &self.gitreview {
            fs::write(dir.path().join(".gitreview"), content).expect("Failed to write .gitreview");
        }

        let ctx = AppContext::new(
            dir.path().to_path_buf(),
            self.git,
            FakeSecureCopy::default(),
            FakeGerritApi::new(self.api_response),
            FakePrompt::answering(&self.prompt_answer),
        );

        TestHarness { dir, ctx }
    }
}
