use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

use parsify_testkit::{fixture_path, target_dir};

static PARSIFY_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_arg(name: &str) -> String {
	path_arg(&fixture_path(name))
}

pub(crate) fn path_arg(path: &Path) -> String {
	path.to_string_lossy().into_owned()
}

pub(crate) fn run_parsify(args: &[&str]) -> Output {
	Command::new(parsify_bin()).args(args).env_remove("RUST_LOG").output().expect("parsify command executes")
}

/// Stdout of a command that must succeed.
pub(crate) fn run_parsify_ok(args: &[&str]) -> String {
	let output = run_parsify(args);
	assert!(
		output.status.success(),
		"parsify {args:?} failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8_lossy(&output.stdout).into_owned()
}

pub(crate) fn run_parsify_json(args: &[&str]) -> serde_json::Value {
	let stdout = run_parsify_ok(args);
	serde_json::from_str(&stdout).unwrap_or_else(|err| panic!("stdout is not json ({err}): {stdout}"))
}

/// Stderr of a command that must fail with exit status 1 and print nothing on stdout.
pub(crate) fn run_parsify_err(args: &[&str]) -> String {
	let output = run_parsify(args);
	let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
	assert_eq!(output.status.code(), Some(1), "parsify {args:?} should fail, stderr: {stderr}");
	assert!(output.stdout.is_empty(), "failed command wrote stdout: {}", String::from_utf8_lossy(&output.stdout));
	assert!(stderr.starts_with("error: "), "stderr: {stderr}");
	stderr
}

fn parsify_bin() -> &'static PathBuf {
	PARSIFY_BIN.get_or_init(|| match option_env!("CARGO_BIN_EXE_parsify") {
		Some(path) => PathBuf::from(path),
		None => build_parsify_bin(),
	})
}

fn build_parsify_bin() -> PathBuf {
	let status = Command::new(env!("CARGO"))
		.current_dir(env!("CARGO_MANIFEST_DIR"))
		.args(["build", "--quiet", "--bin", "parsify"])
		.status()
		.expect("cargo build executes");
	let bin = target_dir().join("debug").join(format!("parsify{}", std::env::consts::EXE_SUFFIX));
	assert!(status.success(), "failed to build parsify binary at {}", bin.display());
	bin
}
