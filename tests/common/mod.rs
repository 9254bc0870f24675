//! Shared testing utilities for sentry-shell CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment with a configuration file pointing at a fake service.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    conf_path: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an environment with an empty configuration file.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let conf_path = root.path().join("sentry-site.toml");
        fs::write(&conf_path, "").expect("Failed to write configuration file");
        Self { root, conf_path }
    }

    /// Create an environment whose configuration targets `server`.
    pub fn for_server(server: &mockito::ServerGuard) -> Self {
        let ctx = Self::new();
        let host_with_port = server.host_with_port();
        let (address, port) =
            host_with_port.rsplit_once(':').expect("mock server address has a port");
        ctx.write_config(&format!(
            r#"[sentry.service.client.server]
rpc-address = "{}"
rpc-port = {}
rpc-connection-timeout = 5000
"#,
            address, port
        ));
        ctx
    }

    /// Replace the configuration file content.
    pub fn write_config(&self, content: &str) {
        fs::write(&self.conf_path, content).expect("Failed to write configuration file");
    }

    /// Append raw TOML to the configuration file.
    pub fn append_config(&self, content: &str) {
        let mut existing = fs::read_to_string(&self.conf_path).unwrap_or_default();
        existing.push_str(content);
        self.write_config(&existing);
    }

    pub fn conf_path(&self) -> &Path {
        &self.conf_path
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled `sentry-shell` binary for a component type.
    pub fn cli(&self, component: &str) -> Command {
        let mut cmd =
            Command::cargo_bin("sentry-shell").expect("Failed to locate sentry-shell binary");
        cmd.current_dir(self.root())
            .env("HADOOP_USER_NAME", "alice")
            .env_remove("SENTRY_SHELL_LOG")
            .arg("-t")
            .arg(component)
            .arg("--conf")
            .arg(&self.conf_path);
        cmd
    }
}

/// JSON body of a successful service response.
#[allow(dead_code)]
pub fn ok_body() -> String {
    r#"{"status": {"value": 0, "message": ""}}"#.to_string()
}
