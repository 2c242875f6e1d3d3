use std::collections::HashMap;
use std::fmt;

use crate::json::{Kind, Value};

/// Reference to one node of a decoded tree.
///
/// A `TreeValue` is either absent or holds exactly one [`Value`]. Peeking at a
/// child yields an independent copy and leaves the receiver alone; descending
/// replaces the receiver's node with the child and discards the parent view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeValue {
	value: Option<Value>,
}

impl TreeValue {
	/// Create a reference holding `value`.
	pub fn new(value: Value) -> Self {
		Self { value: Some(value) }
	}

	/// Create an absent reference.
	pub fn absent() -> Self {
		Self { value: None }
	}

	/// Borrow the held node, if any.
	pub fn value(&self) -> Option<&Value> {
		self.value.as_ref()
	}

	/// Whether the reference holds no data.
	pub fn is_absent(&self) -> bool {
		self.value.is_none()
	}

	/// Type tag of the held node.
	pub fn kind(&self) -> Kind {
		match &self.value {
			None => Kind::Absent,
			Some(Value::Null) => Kind::Null,
			Some(Value::Bool(_)) => Kind::Boolean,
			Some(Value::Number(_)) => Kind::Number,
			Some(Value::String(_)) => Kind::String,
			Some(Value::Array(_)) => Kind::Array,
			Some(Value::Object(_)) => Kind::Object,
		}
	}

	/// True only for a present, explicit `null`.
	pub fn is_null(&self) -> bool {
		matches!(self.value, Some(Value::Null))
	}

	/// Boolean leaf, if that is what is held.
	pub fn as_bool(&self) -> Option<bool> {
		match self.value {
			Some(Value::Bool(b)) => Some(b),
			_ => None,
		}
	}

	/// Numeric leaf, if that is what is held.
	pub fn as_number(&self) -> Option<f64> {
		match self.value {
			Some(Value::Number(n)) => Some(n),
			_ => None,
		}
	}

	/// String leaf, if that is what is held.
	pub fn as_str(&self) -> Option<&str> {
		match &self.value {
			Some(Value::String(s)) => Some(s),
			_ => None,
		}
	}

	pub(crate) fn array(&self) -> Option<&[Value]> {
		match &self.value {
			Some(Value::Array(items)) => Some(items),
			_ => None,
		}
	}

	pub(crate) fn object(&self) -> Option<&HashMap<String, Value>> {
		match &self.value {
			Some(Value::Object(map)) => Some(map),
			_ => None,
		}
	}

	/// Element count of a held array.
	pub fn array_len(&self) -> Option<usize> {
		self.array().map(<[Value]>::len)
	}

	/// Copy of the element at `index`.
	///
	/// Wrong kind and out-of-range both yield `None`.
	pub fn array_peek(&self, index: usize) -> Option<TreeValue> {
		self.array()?.get(index).cloned().map(Self::new)
	}

	/// Narrow the receiver to the element at `index`.
	///
	/// Returns `false` and leaves the receiver untouched when the element does
	/// not exist.
	pub fn array_descend(&mut self, index: usize) -> bool {
		let Some(Value::Array(items)) = &mut self.value else {
			return false;
		};
		if index >= items.len() {
			return false;
		}

		let item = items.swap_remove(index);
		self.value = Some(item);
		true
	}

	/// Keys of a held object, in no particular order.
	pub fn object_keys(&self) -> Option<Vec<&str>> {
		self.object().map(|map| map.keys().map(String::as_str).collect())
	}

	/// Copy of the property value at `key`.
	pub fn object_peek(&self, key: &str) -> Option<TreeValue> {
		self.object()?.get(key).cloned().map(Self::new)
	}

	/// Narrow the receiver to the property value at `key`.
	///
	/// Returns `false` and leaves the receiver untouched when the property does
	/// not exist.
	pub fn object_descend(&mut self, key: &str) -> bool {
		let Some(Value::Object(map)) = &mut self.value else {
			return false;
		};
		let Some(item) = map.remove(key) else {
			return false;
		};

		self.value = Some(item);
		true
	}

	/// Convert the held node into a `serde_json` tree.
	pub fn to_json(&self) -> Option<serde_json::Value> {
		self.value.as_ref().map(Value::to_json)
	}
}

impl From<Value> for TreeValue {
	fn from(value: Value) -> Self {
		Self::new(value)
	}
}

impl From<serde_json::Value> for TreeValue {
	fn from(value: serde_json::Value) -> Self {
		Self::new(Value::from_json(value))
	}
}

impl fmt::Display for TreeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.to_json() {
			Some(json) => write!(f, "json: {} {json}", self.kind()),
			None => f.write_str("json: absent"),
		}
	}
}
