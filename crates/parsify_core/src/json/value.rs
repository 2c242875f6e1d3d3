use std::collections::HashMap;

/// Decoded JSON node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit `null`.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Numeric scalar, always held as a double.
	Number(f64),
	/// String scalar.
	String(String),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// Keyed mapping; key order carries no meaning.
	Object(HashMap<String, Value>),
}

impl Value {
	/// Convert a `serde_json` tree, collapsing every number to `f64`.
	pub fn from_json(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(b) => Self::Bool(b),
			serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
			serde_json::Value::String(s) => Self::String(s),
			serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Self::from_json).collect()),
			serde_json::Value::Object(map) => Self::Object(map.into_iter().map(|(k, v)| (k, Self::from_json(v))).collect()),
		}
	}

	/// Convert back into a `serde_json` tree. Non-finite numbers become `null`.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Self::Null => serde_json::Value::Null,
			Self::Bool(b) => serde_json::Value::Bool(*b),
			Self::Number(n) => serde_json::Number::from_f64(*n).map_or(serde_json::Value::Null, serde_json::Value::Number),
			Self::String(s) => serde_json::Value::String(s.clone()),
			Self::Array(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
			Self::Object(map) => serde_json::Value::Object(map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect()),
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		Self::from_json(value)
	}
}
