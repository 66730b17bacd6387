//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for driving the jobtag CLI.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the jobtag binary.
///
/// Config discovery and logging are neutralized so the ambient
/// environment cannot leak into a spec.
pub fn jobtag_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("jobtag"));
    cmd.env_remove("JOBTAG_CONFIG").env_remove("JOBTAG_LOG");
    cmd
}

/// Builder for `jobtag classify`.
pub fn classify() -> CmdBuilder<Text> {
    CmdBuilder::new("classify")
}

/// Builder for `jobtag match`.
pub fn matcher() -> CmdBuilder<Text> {
    CmdBuilder::new("match")
}

/// Builder for `jobtag process`.
pub fn process() -> CmdBuilder<Text> {
    CmdBuilder::new("process")
}

/// Builder for `jobtag summary`.
pub fn summary() -> CmdBuilder<Text> {
    CmdBuilder::new("summary")
}

/// Builder for `jobtag tags`.
pub fn tags() -> CmdBuilder<Text> {
    CmdBuilder::new("tags")
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// High-level subcommand builder for fluent test assertions
pub struct CmdBuilder<Mode = Text> {
    subcommand: &'static str,
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl CmdBuilder<Text> {
    fn new(subcommand: &'static str) -> Self {
        Self {
            subcommand,
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
            _mode: PhantomData,
        }
    }

    pub fn json(self) -> CmdBuilder<Json> {
        CmdBuilder {
            subcommand: self.subcommand,
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            stdin: self.stdin,
            _mode: PhantomData,
        }
    }

    pub fn passes(self) -> RunAssert {
        run_passes(self.command())
    }

    pub fn fails(self) -> RunAssert {
        run_fails(self.command())
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }
}

#[allow(dead_code)]
impl CmdBuilder<Json> {
    /// Run and parse stdout as a single JSON document.
    pub fn passes(self) -> serde_json::Value {
        let output = run_passes(self.command());
        serde_json::from_slice(&output.output.stdout).expect("valid JSON")
    }

    /// Run and parse stdout as JSON Lines.
    pub fn passes_lines(self) -> Vec<serde_json::Value> {
        let output = run_passes(self.command());
        String::from_utf8_lossy(&output.output.stdout)
            .lines()
            .map(|line| serde_json::from_str(line).expect("valid JSON line"))
            .collect()
    }

    /// Run expecting `code`, then parse stdout as JSON.
    pub fn exits(self, code: i32) -> serde_json::Value {
        let output = run_exits(self.command(), code);
        serde_json::from_slice(&output.output.stdout).expect("valid JSON")
    }
}

#[allow(dead_code)]
impl<Mode: 'static> CmdBuilder<Mode> {
    /// Set working directory to a named fixture
    pub fn on(mut self, fixture_name: &str) -> Self {
        self.dir = Some(fixture(fixture_name));
        self
    }

    /// Set working directory (alternative to fixture)
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Feed stdin
    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    fn command(self) -> PreparedCommand {
        let is_json = std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>();
        let mut cmd = jobtag_cmd();
        cmd.arg(self.subcommand);

        if is_json {
            cmd.args(["-o", "json"]);
        }

        cmd.args(&self.args);

        // Without an explicit directory, run somewhere with no jobtag.toml.
        let scratch = match self.dir {
            Some(dir) => {
                cmd.current_dir(dir);
                None
            }
            None => {
                let project = Project::empty();
                cmd.current_dir(project.path());
                Some(project)
            }
        };

        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        PreparedCommand {
            cmd,
            stdin: self.stdin,
            _scratch: scratch,
        }
    }
}

/// Command plus the stdin it should receive.
pub struct PreparedCommand {
    cmd: Command,
    stdin: Option<String>,
    _scratch: Option<Project>,
}

impl PreparedCommand {
    fn output(mut self) -> std::process::Output {
        let Some(input) = self.stdin else {
            return self
                .cmd
                .stdin(Stdio::null())
                .output()
                .expect("command should run");
        };
        let mut child = self
            .cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("command should spawn");
        {
            use std::io::Write;
            let mut pipe = child.stdin.take().expect("stdin is piped");
            pipe.write_all(input.as_bytes()).expect("write stdin");
        }
        child.wait_with_output().expect("command should run")
    }
}

fn run_passes(cmd: PreparedCommand) -> RunAssert {
    let output = cmd.output();
    assert!(
        output.status.success(),
        "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

fn run_fails(cmd: PreparedCommand) -> RunAssert {
    let output = cmd.output();
    assert!(
        !output.status.success(),
        "expected command to fail, but it passed\nstdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    RunAssert { output }
}

fn run_exits(cmd: PreparedCommand, code: i32) -> RunAssert {
    let output = cmd.output();
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Result of a command run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stderr equals expected (with diff on failure)
    pub fn stderr_eq(self, expected: &str) -> Self {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        similar_asserts::assert_eq!(stderr, expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    ///
    /// ```ignore
    /// .stdout_has("Backend")  // contains
    /// .stdout_has(predicates::str::is_match(r"^category:").unwrap())
    /// ```
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    ///
    /// ```ignore
    /// .stdout_lacks("\x1b[")  // doesn't contain
    /// ```
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

/// Get path to a test fixture (file or directory)
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Path to the shared postings fixture as a string argument
pub fn postings_fixture() -> &'static str {
    static PATH: OnceLock<String> = OnceLock::new();
    PATH.get_or_init(|| fixture("postings.jsonl").display().to_string())
}

// =============================================================================
// Project
// =============================================================================

/// Temporary project directory with helper methods.
///
/// Every project is a git root, so config discovery never walks past it.
/// Writing config adds the `version = 1` prefix.
///
/// # Examples
///
/// ```ignore
/// let temp = Project::empty();
/// temp.config("[filter]\nkeywords = [\"rust\"]");
/// process().pwd(temp.path()).args(&["postings.jsonl"]).passes();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with only a `.git` marker
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Project root path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `jobtag.toml` with the version prefix
    pub fn config(&self, body: &str) {
        self.file("jobtag.toml", &format!("version = 1\n{}\n", body));
    }

    /// Write `jobtag.toml` verbatim
    pub fn raw_config(&self, content: &str) {
        self.file("jobtag.toml", content);
    }

    /// Write a file, creating parent directories
    pub fn file(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
}
