use std::io::Read;

use crate::json::{ParsifyError, Result};

/// zstd frame magic.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Plain JSON text.
	None,
	/// zstd-compressed JSON text.
	Zstd,
}

impl Compression {
	/// Detect compression from the leading bytes of an input.
	pub fn detect(head: &[u8]) -> Self {
		if head.starts_with(&ZSTD_MAGIC) { Self::Zstd } else { Self::None }
	}

	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Decompress a zstd stream, refusing to produce more than `limit` bytes.
///
/// Corrupt frames and read failures inside the frame are reported as [`ParsifyError::Decompress`].
pub(crate) fn decode_zstd(raw: impl Read, limit: usize) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw).map_err(ParsifyError::Decompress)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf).map_err(ParsifyError::Decompress)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(ParsifyError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}
