use std::io::{self, BufReader, Read};

use tracing::trace;

use crate::json::compression::decode_zstd;
use crate::json::{Compression, Result, TreeValue, Value, ZSTD_MAGIC};

const DEFAULT_MAX_DECOMPRESSED_BYTES: usize = 256 * 1024 * 1024;

/// Input handling limits for the JSON decoder boundary.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
	/// Accept zstd-framed input and decompress it before parsing.
	pub allow_zstd: bool,
	/// Upper bound on decompressed bytes for zstd input.
	pub max_decompressed_bytes: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			allow_zstd: true,
			max_decompressed_bytes: DEFAULT_MAX_DECOMPRESSED_BYTES,
		}
	}
}

/// Decoded document together with the compression it arrived in.
#[derive(Debug, Clone)]
pub struct Decoded {
	/// Compression detected on the input.
	pub compression: Compression,
	/// Root of the decoded tree.
	pub tree: TreeValue,
}

/// Decode one JSON document from a byte buffer.
pub fn decode_bytes(bytes: &[u8], options: &DecodeOptions) -> Result<Decoded> {
	let compression = detect(bytes, options);
	let tree = match compression {
		Compression::None => parse_slice(bytes)?,
		Compression::Zstd => parse_slice(&decode_zstd(bytes, options.max_decompressed_bytes)?)?,
	};
	trace!(compression = compression.as_str(), kind = %tree.kind(), "decoded buffer");
	Ok(Decoded { compression, tree })
}

/// Decode one JSON document from a byte stream.
///
/// A failure reading the first bytes surfaces as [`ParsifyError::Io`](crate::json::ParsifyError::Io); later read
/// failures come back through the JSON decoder or the zstd decoder like any other malformed input.
pub fn decode_reader(mut reader: impl Read, options: &DecodeOptions) -> Result<Decoded> {
	let mut head = [0_u8; ZSTD_MAGIC.len()];
	let filled = read_head(&mut reader, &mut head)?;
	let compression = detect(&head[..filled], options);
	let reader = BufReader::new((&head[..filled]).chain(reader));
	let tree = match compression {
		Compression::None => parse_reader(reader)?,
		Compression::Zstd => parse_slice(&decode_zstd(reader, options.max_decompressed_bytes)?)?,
	};
	trace!(compression = compression.as_str(), kind = %tree.kind(), "decoded stream");
	Ok(Decoded { compression, tree })
}

// Keep reading until the magic fits or the stream ends.
fn read_head(reader: &mut impl Read, head: &mut [u8]) -> io::Result<usize> {
	let mut filled = 0;
	while filled < head.len() {
		match reader.read(&mut head[filled..]) {
			Ok(0) => break,
			Ok(read) => filled += read,
			Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
			Err(err) => return Err(err),
		}
	}
	Ok(filled)
}

fn detect(head: &[u8], options: &DecodeOptions) -> Compression {
	if options.allow_zstd { Compression::detect(head) } else { Compression::None }
}

fn parse_slice(bytes: &[u8]) -> Result<TreeValue> {
	let json: serde_json::Value = serde_json::from_slice(bytes)?;
	Ok(TreeValue::new(Value::from_json(json)))
}

fn parse_reader(reader: impl Read) -> Result<TreeValue> {
	let json: serde_json::Value = serde_json::from_reader(reader)?;
	Ok(TreeValue::new(Value::from_json(json)))
}

impl TreeValue {
	/// Decode a JSON document from a byte buffer with default options.
	pub fn from_slice(bytes: &[u8]) -> Result<Self> {
		decode_bytes(bytes, &DecodeOptions::default()).map(|decoded| decoded.tree)
	}

	/// Decode a JSON document from a byte stream with default options.
	pub fn from_reader(reader: impl Read) -> Result<Self> {
		decode_reader(reader, &DecodeOptions::default()).map(|decoded| decoded.tree)
	}
}

#[cfg(test)]
mod tests;
