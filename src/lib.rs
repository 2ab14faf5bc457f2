//! grr: a command-line utility to work with Gerrit.
//!
//! Wraps `git`, `scp` and the Gerrit REST API to configure a review remote,
//! fetch pending changes, push reviews and sync with upstream branches.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{checkout, config, fetch, init, pull, review, run};
pub use domain::{Action, AppError, Changeset, FetchDescriptor, GerritConfig};
