use thiserror::Error;

use crate::json::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ParsifyError>;

/// Errors produced while decoding input and running step sequences.
#[derive(Debug, Error)]
pub enum ParsifyError {
	/// Malformed input text, forwarded from the JSON decoder.
	#[error(transparent)]
	Decode(#[from] serde_json::Error),
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// zstd frame was corrupt or its bytes could not be read.
	#[error("zstd: {0}")]
	Decompress(#[source] std::io::Error),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Engine was run without a cursor.
	#[error("{header}: no data to parse")]
	NoData {
		/// Header of the failing run.
		header: String,
	},
	/// A step named a function missing from the registry.
	#[error("{header} step {step}: unknown step function: '{name}'")]
	UnknownStep {
		/// Header of the failing run.
		header: String,
		/// 1-based position of the offending step.
		step: usize,
		/// Step name that failed lookup.
		name: String,
	},
	/// A step function rejected the data at the cursor.
	#[error("{header} step {step}: {message}")]
	Step {
		/// Header of the failing run.
		header: String,
		/// 1-based position of the failing step.
		step: usize,
		/// Step-specific description.
		message: String,
	},
	/// Step plan document could not be read.
	#[error("invalid step plan: {0}")]
	Plan(#[source] serde_json::Error),
	/// Path expression syntax is invalid.
	#[error("invalid path: {path}")]
	InvalidPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Path expression did not resolve against the tree.
	#[error("path {path} not found: segment {segment} reached {found}")]
	PathNotFound {
		/// Original user-provided path string.
		path: String,
		/// 1-based segment that failed.
		segment: usize,
		/// Kind of the node the failing segment was applied to.
		found: Kind,
	},
}

impl ParsifyError {
	/// 1-based step position for engine failures, `None` for everything else.
	pub fn step(&self) -> Option<usize> {
		match self {
			Self::UnknownStep { step, .. } | Self::Step { step, .. } => Some(*step),
			_ => None,
		}
	}
}
