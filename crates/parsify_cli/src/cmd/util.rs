use std::fs::File;
use std::path::Path;

use parsify::json::{DecodeOptions, Decoded, Result, decode_reader};

/// Open and decode a JSON input file, plain or zstd-compressed.
pub(crate) fn decode_file(path: &Path) -> Result<Decoded> {
	let file = File::open(path)?;
	decode_reader(file, &DecodeOptions::default())
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let rendered = serde_json::to_string_pretty(payload)?;
	println!("{rendered}");
	Ok(())
}
