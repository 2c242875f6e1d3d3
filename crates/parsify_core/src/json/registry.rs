use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::json::builtin::builtin_functions;
use crate::json::{Result, Step, StepEngine};

/// Executable behavior bound to a step name.
///
/// Implementations read the step and the engine cursor, may narrow the cursor,
/// and report failures through [`StepEngine::fail`].
pub trait StepFunction {
	/// Run the step against the engine.
	fn call(&self, step: &Step<'_>, engine: &mut StepEngine<'_>) -> Result<()>;
}

impl<F> StepFunction for F
where
	F: Fn(&Step<'_>, &mut StepEngine<'_>) -> Result<()>,
{
	fn call(&self, step: &Step<'_>, engine: &mut StepEngine<'_>) -> Result<()> {
		self(step, engine)
	}
}

/// Shared handle to a registered step function.
pub type SharedStepFunction = Arc<dyn StepFunction + Send + Sync>;

/// Mapping from step name to step function.
#[derive(Clone, Default)]
pub struct StepRegistry {
	functions: HashMap<String, SharedStepFunction>,
}

impl StepRegistry {
	/// Empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry holding only the built-in vocabulary.
	pub fn builtin() -> Self {
		let mut registry = Self::new();
		for (name, function) in builtin_functions() {
			registry.register_shared(name, function);
		}
		registry
	}

	/// Bind `function` to `name`, replacing any previous binding.
	pub fn register<F>(&mut self, name: impl Into<String>, function: F) -> &mut Self
	where
		F: Fn(&Step<'_>, &mut StepEngine<'_>) -> Result<()> + Send + Sync + 'static,
	{
		self.register_shared(name, Arc::new(function))
	}

	/// Builder form of [`StepRegistry::register`].
	pub fn with<F>(mut self, name: impl Into<String>, function: F) -> Self
	where
		F: Fn(&Step<'_>, &mut StepEngine<'_>) -> Result<()> + Send + Sync + 'static,
	{
		self.register(name, function);
		self
	}

	/// Bind an already shared step function to `name`.
	pub fn register_shared(&mut self, name: impl Into<String>, function: SharedStepFunction) -> &mut Self {
		self.functions.insert(name.into(), function);
		self
	}

	/// Overlay `other` on top of this registry; entries in `other` win.
	pub fn extend(&mut self, other: StepRegistry) {
		for (name, function) in other.functions {
			if self.functions.contains_key(&name) {
				trace!(name = %name, "step function shadowed");
			}
			self.functions.insert(name, function);
		}
	}

	/// Look up the function bound to `name`.
	pub fn get(&self, name: &str) -> Option<SharedStepFunction> {
		self.functions.get(name).cloned()
	}

	/// Whether `name` is bound.
	pub fn contains(&self, name: &str) -> bool {
		self.functions.contains_key(name)
	}

	/// Bound names in sorted order.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Number of bound names.
	pub fn len(&self) -> usize {
		self.functions.len()
	}

	/// Whether no names are bound.
	pub fn is_empty(&self) -> bool {
		self.functions.is_empty()
	}
}

impl fmt::Debug for StepRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StepRegistry").field("names", &self.names()).finish()
	}
}
