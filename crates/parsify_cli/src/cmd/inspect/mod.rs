use std::path::PathBuf;

use parsify::json::{ParsifyError, TreePath};

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{decode_file, emit_json};

#[derive(clap::Args)]
pub struct Args {
	/// JSON document to inspect, plain or zstd-compressed.
	pub input: PathBuf,
	/// Dotted path to descend into first, e.g. `result.transactions[0]`.
	#[arg(long = "path")]
	pub path_expr: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Decode a document, optionally narrow it along a path, and describe the node.
pub fn run(args: Args) -> parsify::json::Result<()> {
	let Args { input, path_expr, json } = args;

	let decoded = decode_file(&input)?;
	let mut cursor = decoded.tree;

	if let Some(path_expr) = &path_expr {
		let path = TreePath::parse(path_expr)?;
		if let Err(stop) = cursor.descend_path(&path) {
			return Err(ParsifyError::PathNotFound {
				path: path_expr.clone(),
				segment: stop.step_index + 1,
				found: stop.found,
			});
		}
	}

	let mut keys: Option<Vec<String>> = cursor.object_keys().map(|keys| keys.into_iter().map(str::to_owned).collect());
	if let Some(keys) = &mut keys {
		keys.sort_unstable();
	}

	if json {
		let payload = InspectJson {
			input: input.display().to_string(),
			compression: decoded.compression.as_str().to_owned(),
			path: path_expr,
			kind: cursor.kind().as_str().to_owned(),
			len: cursor.array_len(),
			keys,
			value: cursor.to_json(),
		};
		return emit_json(&payload);
	}

	println!("input: {}", input.display());
	println!("compression: {}", decoded.compression.as_str());
	if let Some(path_expr) = &path_expr {
		println!("path: {path_expr}");
	}
	println!("kind: {}", cursor.kind());
	if let Some(len) = cursor.array_len() {
		println!("len: {len}");
	}
	if let Some(keys) = &keys {
		println!("keys: {}", keys.join(", "));
	}
	if let Some(value) = cursor.value() {
		println!("value:");
		print_value(value, PrintOptions::default());
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InspectJson {
	input: String,
	compression: String,
	path: Option<String>,
	kind: String,
	len: Option<usize>,
	keys: Option<Vec<String>>,
	value: Option<serde_json::Value>,
}
