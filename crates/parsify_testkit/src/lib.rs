//! Fixture and scratch-file helpers shared by the parsify test suites.

use std::path::{Path, PathBuf};

/// Workspace root: the nearest ancestor of this crate holding a `fixtures/` directory.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	let root = manifest_dir
		.ancestors()
		.find(|dir| dir.join("fixtures").is_dir())
		.unwrap_or(manifest_dir);
	root.canonicalize().unwrap_or_else(|_| root.to_path_buf())
}

/// Path of a JSON document or step plan under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Fixture contents, panicking with the path on failure.
pub fn fixture_bytes(name: &str) -> Vec<u8> {
	let path = fixture_path(name);
	std::fs::read(&path).unwrap_or_else(|err| panic!("fixture {} unreadable: {err}", path.display()))
}

/// Fixture contents wrapped in a single zstd frame.
pub fn fixture_zstd(name: &str) -> Vec<u8> {
	zstd::encode_all(fixture_bytes(name).as_slice(), 3).unwrap_or_else(|err| panic!("fixture {name} does not compress: {err}"))
}

/// Write `bytes` to a per-process scratch file under the target directory and return its path.
///
/// Used to hand generated inputs, such as compressed fixtures, to the CLI.
pub fn write_scratch(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = target_dir().join("parsify-scratch").join(std::process::id().to_string());
	std::fs::create_dir_all(&dir).unwrap_or_else(|err| panic!("scratch dir {} not created: {err}", dir.display()));

	let path = dir.join(name);
	std::fs::write(&path, bytes).unwrap_or_else(|err| panic!("scratch file {} not written: {err}", path.display()));
	path
}

/// Cargo target directory, honoring `CARGO_TARGET_DIR`.
pub fn target_dir() -> PathBuf {
	match std::env::var_os("CARGO_TARGET_DIR") {
		Some(dir) => PathBuf::from(dir),
		None => workspace_root().join("target"),
	}
}
