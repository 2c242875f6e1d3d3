use std::collections::BTreeMap;
use std::fs::File;
use std::path::PathBuf;

use parsify::json::{PlanOutputs, StepPlan, StepRegistry, TreeValue};
use tracing::info;

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// JSON document to validate, plain or zstd-compressed.
	pub input: PathBuf,
	/// Step plan file.
	#[arg(long)]
	pub plan: PathBuf,
	/// Override the plan header used in error messages.
	#[arg(long)]
	pub header: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Run a step plan over a JSON document and print the stored outputs.
pub fn run(args: Args) -> parsify::json::Result<()> {
	let Args { input, plan, header, json } = args;

	let mut plan = StepPlan::open(&plan)?;
	if let Some(header) = header {
		plan.header = header;
	}

	let outputs = PlanOutputs::for_plan(&plan);
	let mut engine = plan.engine(&outputs, StepRegistry::new(), TreeValue::absent());
	engine.run_over_reader(File::open(&input)?)?;
	info!(header = %plan.header, steps = plan.steps.len(), "plan completed");

	if json {
		let payload = RunJson {
			input: input.display().to_string(),
			header: plan.header.clone(),
			steps: plan.steps.len(),
			outputs: outputs.values().into_iter().map(|(name, value)| (name.to_owned(), value)).collect(),
		};
		return emit_json(&payload);
	}

	println!("input: {}", input.display());
	println!("header: {}", plan.header);
	println!("steps: {}", plan.steps.len());
	for (name, value) in outputs.values() {
		println!("{name} = {value} (0x{value:x})");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct RunJson {
	input: String,
	header: String,
	steps: usize,
	outputs: BTreeMap<String, u64>,
}
