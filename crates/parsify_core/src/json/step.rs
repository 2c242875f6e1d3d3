use std::cell::{Cell, RefCell};

use serde::Deserialize;

use crate::json::builtin::{ENTER_KEY, STORE_NUMBER, VERIFY_NUMBER_PROPERTY, VERIFY_STRING_PROPERTY};

/// Literal comparison value carried by a step.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Literal {
	/// Explicit `null`.
	Null,
	/// Boolean literal.
	Bool(bool),
	/// Numeric literal.
	Number(f64),
	/// String literal.
	String(String),
}

impl Literal {
	/// String payload, if this is a string literal.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}

	/// Numeric payload, if this is a numeric literal.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Self::Number(n) => Some(*n),
			_ => None,
		}
	}

	/// Boolean payload, if this is a boolean literal.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}
}

impl From<&str> for Literal {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for Literal {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<f64> for Literal {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<bool> for Literal {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

/// Typed write target a step function may fill in.
#[derive(Debug, Clone, Copy)]
pub enum Store<'a> {
	/// Unsigned integer slot.
	U64(&'a Cell<u64>),
	/// Unsigned integer slot that records whether it was written.
	OptionU64(&'a Cell<Option<u64>>),
	/// Floating point slot.
	F64(&'a Cell<f64>),
	/// Boolean slot.
	Bool(&'a Cell<bool>),
	/// String slot.
	String(&'a RefCell<String>),
}

impl Store<'_> {
	/// Write an unsigned integer; `false` when the slot holds another type.
	pub fn put_u64(&self, value: u64) -> bool {
		match self {
			Self::U64(slot) => slot.set(value),
			Self::OptionU64(slot) => slot.set(Some(value)),
			_ => return false,
		}
		true
	}

	/// Write a float; `false` when the slot holds another type.
	pub fn put_f64(&self, value: f64) -> bool {
		let Self::F64(slot) = self else {
			return false;
		};
		slot.set(value);
		true
	}

	/// Write a boolean; `false` when the slot holds another type.
	pub fn put_bool(&self, value: bool) -> bool {
		let Self::Bool(slot) = self else {
			return false;
		};
		slot.set(value);
		true
	}

	/// Write a string; `false` when the slot holds another type.
	pub fn put_string(&self, value: &str) -> bool {
		let Self::String(slot) = self else {
			return false;
		};
		value.clone_into(&mut slot.borrow_mut());
		true
	}
}

/// One instruction in a step sequence.
#[derive(Debug, Clone)]
pub struct Step<'a> {
	/// Registry key of the step function to run.
	pub name: String,
	/// Step-specific argument, usually an object key.
	pub parameter: String,
	/// Optional comparison value.
	pub value: Option<Literal>,
	/// Optional output slot.
	pub store: Option<Store<'a>>,
}

impl<'a> Step<'a> {
	/// Step with a name and parameter, no value, no store.
	pub fn new(name: impl Into<String>, parameter: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			parameter: parameter.into(),
			value: None,
			store: None,
		}
	}

	/// Attach a comparison value.
	pub fn with_value(mut self, value: impl Into<Literal>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Attach an output slot.
	pub fn with_store(mut self, store: Store<'a>) -> Self {
		self.store = Some(store);
		self
	}

	/// `VerifyStringProperty` step.
	pub fn verify_string(key: impl Into<String>, expected: impl Into<String>) -> Self {
		Self::new(VERIFY_STRING_PROPERTY, key).with_value(Literal::String(expected.into()))
	}

	/// `VerifyNumberProperty` step.
	pub fn verify_number(key: impl Into<String>, expected: f64) -> Self {
		Self::new(VERIFY_NUMBER_PROPERTY, key).with_value(expected)
	}

	/// `EnterKey` step.
	pub fn enter_key(key: impl Into<String>) -> Self {
		Self::new(ENTER_KEY, key)
	}

	/// `StoreNumber` step writing into `slot`.
	pub fn store_number(key: impl Into<String>, slot: &'a Cell<u64>) -> Self {
		Self::new(STORE_NUMBER, key).with_store(Store::U64(slot))
	}
}
