//! Shared test utilities for historian-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Locate payload fixtures shared with the client crate.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.

use assert_cmd::Command;
use std::path::PathBuf;

/// Returns a hermetic `historian-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `HISTORIAN_*` variables from the host do not leak into the run.
pub fn historian_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("historian-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("HISTORIAN_OUTPUT")
        .env_remove("HISTORIAN_LOG_FORMAT")
        .env_remove("HISTORIAN_LOG_LEVEL")
        .env_remove("RUST_LOG");

    cmd
}

/// Absolute path of a fixture under `crates/client/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../client/fixtures")
        .join(relative)
}
