use std::io::Read;

use tracing::debug;

use crate::json::{DecodeOptions, ParsifyError, Result, Step, StepRegistry, TreeValue, decode_bytes, decode_reader};

/// Execution context for one step sequence.
///
/// The engine owns its cursor. Steps run in order against the registry and the
/// first failure ends the run; the cursor is left wherever the steps that did
/// run put it.
#[derive(Debug)]
pub struct StepEngine<'a> {
	header: String,
	cursor: TreeValue,
	steps: Vec<Step<'a>>,
	step_index: usize,
	registry: StepRegistry,
	decode: DecodeOptions,
}

impl<'a> StepEngine<'a> {
	/// Build an engine whose registry is the built-ins overlaid with `extra`.
	pub fn new(header: impl Into<String>, steps: Vec<Step<'a>>, extra: StepRegistry, initial: TreeValue) -> Self {
		let mut registry = StepRegistry::builtin();
		registry.extend(extra);

		Self {
			header: header.into(),
			cursor: initial,
			steps,
			step_index: 0,
			registry,
			decode: DecodeOptions::default(),
		}
	}

	/// Replace the options used by the decoding entry points.
	pub fn with_decode_options(mut self, decode: DecodeOptions) -> Self {
		self.decode = decode;
		self
	}

	/// Run every step in order, stopping at the first failure.
	pub fn run(&mut self) -> Result<()> {
		if self.cursor.is_absent() {
			debug!(header = %self.header, "run without data");
			return Err(ParsifyError::NoData { header: self.header.clone() });
		}

		let steps = std::mem::take(&mut self.steps);
		let outcome = self.run_steps(&steps);
		self.steps = steps;
		outcome
	}

	fn run_steps(&mut self, steps: &[Step<'a>]) -> Result<()> {
		for (offset, step) in steps.iter().enumerate() {
			self.step_index = offset + 1;

			let Some(function) = self.registry.get(&step.name) else {
				debug!(header = %self.header, step = self.step_index, name = %step.name, "unknown step function");
				return Err(ParsifyError::UnknownStep {
					header: self.header.clone(),
					step: self.step_index,
					name: step.name.clone(),
				});
			};

			debug!(header = %self.header, step = self.step_index, name = %step.name, parameter = %step.parameter, "running step");
			if let Err(err) = function.call(step, self) {
				debug!(error = %err, "step failed");
				return Err(err);
			}
		}

		Ok(())
	}

	/// Decode a byte stream into a fresh cursor, then [`run`](Self::run).
	pub fn run_over_reader(&mut self, reader: impl Read) -> Result<()> {
		self.cursor = decode_reader(reader, &self.decode)?.tree;
		self.run()
	}

	/// Decode a byte buffer into a fresh cursor, then [`run`](Self::run).
	pub fn run_over_bytes(&mut self, bytes: &[u8]) -> Result<()> {
		self.cursor = decode_bytes(bytes, &self.decode)?.tree;
		self.run()
	}

	/// Error for the current step, shaped `<header> step <n>: <message>`.
	pub fn fail(&self, message: impl Into<String>) -> ParsifyError {
		ParsifyError::Step {
			header: self.header.clone(),
			step: self.step_index,
			message: message.into(),
		}
	}

	/// Diagnostic header of this run.
	pub fn header(&self) -> &str {
		&self.header
	}

	/// 1-based index of the step running or last attempted; 0 before any run.
	pub fn step_index(&self) -> usize {
		self.step_index
	}

	/// Current cursor.
	pub fn cursor(&self) -> &TreeValue {
		&self.cursor
	}

	/// Current cursor, for step functions that narrow it.
	pub fn cursor_mut(&mut self) -> &mut TreeValue {
		&mut self.cursor
	}

	/// Point the engine at a different tree.
	pub fn set_cursor(&mut self, cursor: TreeValue) {
		self.cursor = cursor;
	}

	/// Consume the engine, keeping its cursor.
	pub fn into_cursor(self) -> TreeValue {
		self.cursor
	}

	/// Replace the step list for a subsequent run over the same cursor.
	pub fn set_steps(&mut self, steps: Vec<Step<'a>>) {
		self.steps = steps;
		self.step_index = 0;
	}

	/// Effective step registry.
	pub fn registry(&self) -> &StepRegistry {
		&self.registry
	}
}
