use std::cell::Cell;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::json::{Literal, ParsifyError, Result, Step, StepEngine, StepRegistry, Store, TreeValue};

/// Serialized step sequence with its diagnostic header.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepPlan {
	/// Header used in error messages.
	pub header: String,
	/// Steps in execution order.
	#[serde(default)]
	pub steps: Vec<PlannedStep>,
}

/// One serialized step.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannedStep {
	/// Step function name.
	pub step: String,
	/// Step parameter, usually an object key.
	#[serde(default)]
	pub parameter: String,
	/// Comparison value.
	#[serde(default)]
	pub value: Option<Literal>,
	/// Name of the output slot the step writes into.
	#[serde(default)]
	pub store: Option<String>,
}

impl StepPlan {
	/// Parse a plan from JSON bytes.
	pub fn from_slice(bytes: &[u8]) -> Result<Self> {
		serde_json::from_slice(bytes).map_err(ParsifyError::Plan)
	}

	/// Parse a plan from a JSON byte stream.
	pub fn from_reader(reader: impl Read) -> Result<Self> {
		serde_json::from_reader(reader).map_err(ParsifyError::Plan)
	}

	/// Read and parse a plan file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let file = File::open(path)?;
		Self::from_reader(BufReader::new(file))
	}

	/// Bind the planned steps to slots in `outputs`.
	///
	/// A store name missing from `outputs` leaves that step without a store.
	pub fn steps<'a>(&self, outputs: &'a PlanOutputs) -> Vec<Step<'a>> {
		self.steps
			.iter()
			.map(|planned| Step {
				name: planned.step.clone(),
				parameter: planned.parameter.clone(),
				value: planned.value.clone(),
				store: planned.store.as_deref().and_then(|name| outputs.store(name)),
			})
			.collect()
	}

	/// Engine over `initial` running this plan, with `extra` step functions.
	pub fn engine<'a>(&self, outputs: &'a PlanOutputs, extra: StepRegistry, initial: TreeValue) -> StepEngine<'a> {
		StepEngine::new(self.header.clone(), self.steps(outputs), extra, initial)
	}
}

/// Named unsigned integer slots filled by a plan run.
#[derive(Debug, Default)]
pub struct PlanOutputs {
	slots: BTreeMap<String, Cell<Option<u64>>>,
}

impl PlanOutputs {
	/// One empty slot per distinct store name in `plan`.
	pub fn for_plan(plan: &StepPlan) -> Self {
		let slots = plan
			.steps
			.iter()
			.filter_map(|planned| planned.store.clone())
			.map(|name| (name, Cell::new(None)))
			.collect();
		Self { slots }
	}

	/// Write handle for the slot called `name`.
	pub fn store(&self, name: &str) -> Option<Store<'_>> {
		self.slots.get(name).map(Store::OptionU64)
	}

	/// Value written to `name`, if any.
	pub fn get(&self, name: &str) -> Option<u64> {
		self.slots.get(name).and_then(Cell::get)
	}

	/// Written slots in name order.
	pub fn values(&self) -> Vec<(&str, u64)> {
		self.slots
			.iter()
			.filter_map(|(name, slot)| slot.get().map(|value| (name.as_str(), value)))
			.collect()
	}
}
