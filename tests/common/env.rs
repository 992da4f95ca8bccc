//! Test environment builder for isolated sample-client testing.
//!
//! Provides `TestEnv` - temp directories for the working directory and HOME,
//! plus helpers to run the CLI with a clean environment.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Variables that would leak the developer's setup into a test run
const SCRUBBED_VARS: &[&str] = &[
    "SAMPLE_CLIENT_SERVER_ADDRESS",
    "SAMPLE_CLIENT_TIMEOUT_SECS",
    "SAMPLE_CLIENT_CREDENTIALS_CONFIG",
    "SAMPLE_CLIENT_LOG",
    "HTTP_PROXY",
    "HTTPS_PROXY",
    "ALL_PROXY",
    "http_proxy",
    "https_proxy",
    "all_proxy",
];

/// Result of running a sample-client command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Directory the CLI runs in
    pub work_dir: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: tempfile::tempdir().expect("Failed to create work dir"),
            home_dir: tempfile::tempdir().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_sample-client")),
        }
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Directory the Docker config lives in (`$DOCKER_CONFIG`)
    pub fn docker_config_dir(&self) -> PathBuf {
        self.home_path(".docker")
    }

    /// Write `config.json` into the Docker config directory
    pub fn write_docker_config(&self, content: &str) {
        let dir = self.docker_config_dir();
        std::fs::create_dir_all(&dir).expect("Failed to create docker config dir");
        std::fs::write(dir.join("config.json"), content).expect("Failed to write docker config");
    }

    /// Write a file relative to the working directory and return its path
    pub fn write_work_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command();
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to execute sample-client");
        output_to_result(output)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.work_dir.path())
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_path(".config"))
            .env("DOCKER_CONFIG", self.docker_config_dir());
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Address of a port nothing listens on
pub fn closed_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    addr.to_string()
}

pub fn assert_absolute(path: &str) {
    assert!(Path::new(path).is_absolute(), "expected absolute path, got {}", path);
}
