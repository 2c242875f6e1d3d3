use std::fmt;

use crate::json::{Kind, ParsifyError, Result, TreeValue};

/// One segment of a tree path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select an object property.
	Key(String),
	/// Select an array element by zero-based index.
	Index(usize),
}

/// Parsed tree path such as `result.transactions[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

/// Where and why a path descent stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStop {
	/// Zero-based index of the step that could not be applied.
	pub step_index: usize,
	/// Kind of the node the step was applied to.
	pub found: Kind,
}

impl TreePath {
	/// Parse dotted key syntax with optional `[index]` selectors.
	///
	/// Keys may hold any characters other than `.`, `[` and `]`. A path may
	/// open with an index selector.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || ParsifyError::InvalidPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && !matches!(bytes[idx], b'.' | b'[' | b']') {
				idx += 1;
			}

			if idx > start {
				steps.push(PathStep::Key(input[start..idx].to_owned()));
			} else if !(start == 0 && bytes[idx] == b'[') {
				return Err(invalid());
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}

				let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self { steps })
	}
}

impl fmt::Display for TreePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Key(key) if idx == 0 => write!(f, "{key}")?,
				PathStep::Key(key) => write!(f, ".{key}")?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

impl TreeValue {
	/// Descend through every step of `path`.
	///
	/// On a stop the receiver stays at the last node reached.
	pub fn descend_path(&mut self, path: &TreePath) -> std::result::Result<(), PathStop> {
		for (step_index, step) in path.steps.iter().enumerate() {
			let found = self.kind();
			let moved = match step {
				PathStep::Key(key) => self.object_descend(key),
				PathStep::Index(index) => self.array_descend(*index),
			};
			if !moved {
				return Err(PathStop { step_index, found });
			}
		}
		Ok(())
	}
}
