#![allow(dead_code)]

use std::process::{Command, Output};

/// Harness running the built `folio-tui` binary with arguments.
pub struct CliHarness;

impl CliHarness {
    /// Build the release binary once and return a harness for it.
    pub fn build() -> Self {
        let status = Command::new("cargo")
            .args(["build", "--release", "--quiet"])
            .status()
            .expect("Failed to build");
        assert!(status.success(), "Build failed");
        Self
    }

    /// Run the binary with `args` and return its output.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new("./target/release/folio-tui")
            .args(args)
            .output()
            .expect("Failed to run folio-tui")
    }

    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "folio-tui {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}
