//! Shared testing harness for `grr` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_repository::{commit_file, git, init_bare_repo, init_repo};

pub(crate) const GITREVIEW: &str =
    "[gerrit]\nhost=gerrit.invalid\nport=29418\nproject=test/project.git\n";

/// Testing harness providing a work repository whose `origin` is a local bare repository.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a work repository with one commit pushed to `origin/master`.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let ctx = Self { root, work_dir };
        init_repo(&ctx.work_dir, ctx.home());
        init_bare_repo(&ctx.origin_dir(), ctx.home());

        commit_file(&ctx.work_dir, ctx.home(), "README", "initial\n");
        ctx.git(&["remote", "add", "origin", path_str(&ctx.origin_dir())]);
        ctx.git(&["push", "origin", "master"]);
        ctx
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the repository used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn origin_dir(&self) -> PathBuf {
        self.root.path().join("origin.git")
    }

    pub(crate) fn gerrit_dir(&self) -> PathBuf {
        self.root.path().join("gerrit.git")
    }

    /// Build a command for invoking the compiled `grr` binary in the work repository.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("grr").expect("Failed to locate grr binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_TERMINAL_PROMPT", "0");
        cmd
    }

    /// Run git in the work repository.
    pub(crate) fn git(&self, args: &[&str]) -> String {
        git(&self.work_dir, self.home(), args)
    }

    pub(crate) fn head(&self) -> String {
        self.git(&["rev-parse", "HEAD"])
    }

    pub(crate) fn commit(&self, name: &str, content: &str) -> String {
        commit_file(&self.work_dir, self.home(), name, content)
    }

    pub(crate) fn write_gitreview(&self) {
        fs::write(self.work_dir.join(".gitreview"), GITREVIEW).expect("Failed to write .gitreview");
    }

    /// Point a `gerrit` remote at a local bare repository so reviews push offline.
    pub(crate) fn add_gerrit_remote(&self) {
        init_bare_repo(&self.gerrit_dir(), self.home());
        self.git(&["remote", "add", "gerrit", path_str(&self.gerrit_dir())]);
    }

    /// Resolve a ref in the gerrit bare repository.
    pub(crate) fn gerrit_ref(&self, name: &str) -> String {
        git(&self.gerrit_dir(), self.home(), &["rev-parse", name])
    }

    /// Commit to `origin/master` from a separate clone, leaving the work repository behind.
    pub(crate) fn advance_origin(&self, name: &str) -> String {
        let other = self.root.path().join("other");
        git(self.root.path(), self.home(), &["clone", path_str(&self.origin_dir()), "other"]);
        super::git_repository::configure_user(&other, self.home());
        let sha = commit_file(&other, self.home(), name, "upstream\n");
        git(&other, self.home(), &["push", "origin", "master"]);
        sha
    }
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is valid UTF-8")
}
