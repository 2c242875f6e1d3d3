use std::sync::Arc;

use crate::json::{Result, SharedStepFunction, Step, StepEngine};

/// Compare a string property of the cursor object with the step value.
pub const VERIFY_STRING_PROPERTY: &str = "VerifyStringProperty";
/// Compare a numeric property of the cursor object with the step value.
pub const VERIFY_NUMBER_PROPERTY: &str = "VerifyNumberProperty";
/// Narrow the cursor to a property of the cursor object.
pub const ENTER_KEY: &str = "EnterKey";
/// Copy a numeric-string property of the cursor object into the step store.
pub const STORE_NUMBER: &str = "StoreNumber";

pub(crate) fn builtin_functions() -> [(&'static str, SharedStepFunction); 4] {
	[
		(VERIFY_STRING_PROPERTY, Arc::new(verify_string_property) as SharedStepFunction),
		(VERIFY_NUMBER_PROPERTY, Arc::new(verify_number_property) as SharedStepFunction),
		(ENTER_KEY, Arc::new(enter_key) as SharedStepFunction),
		(STORE_NUMBER, Arc::new(store_number) as SharedStepFunction),
	]
}

fn verify_string_property(step: &Step<'_>, engine: &mut StepEngine<'_>) -> Result<()> {
	let actual = engine.cursor().get_string_property(&step.parameter);
	let expected = step.value.as_ref().and_then(|value| value.as_str());
	match (actual, expected) {
		(Some(actual), Some(expected)) if actual == expected => Ok(()),
		_ => Err(engine.fail(format!("bad value for {}", step.parameter))),
	}
}

fn verify_number_property(step: &Step<'_>, engine: &mut StepEngine<'_>) -> Result<()> {
	let actual = engine.cursor().get_number_property(&step.parameter);
	let expected = step.value.as_ref().and_then(|value| value.as_number());
	match (actual, expected) {
		(Some(actual), Some(expected)) if actual == expected => Ok(()),
		_ => Err(engine.fail(format!("bad value for {}", step.parameter))),
	}
}

fn enter_key(step: &Step<'_>, engine: &mut StepEngine<'_>) -> Result<()> {
	if engine.cursor_mut().object_descend(&step.parameter) {
		return Ok(());
	}
	Err(engine.fail(format!("key not found: '{}'", step.parameter)))
}

fn store_number(step: &Step<'_>, engine: &mut StepEngine<'_>) -> Result<()> {
	let number = engine.cursor().get_numeric_string_property(&step.parameter);
	let stored = match (number, step.store) {
		(Some(number), Some(store)) => store.put_u64(number),
		_ => false,
	};
	if stored {
		return Ok(());
	}
	Err(engine.fail(format!("failed to store number: '{}'", step.parameter)))
}
