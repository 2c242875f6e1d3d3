use std::fmt;

/// Type tag of the node a [`TreeValue`](crate::json::TreeValue) currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// No data at all, distinct from explicit `null`.
	Absent,
	/// Explicit `null`.
	Null,
	/// Boolean scalar.
	Boolean,
	/// Numeric scalar.
	Number,
	/// String scalar.
	String,
	/// Ordered sequence.
	Array,
	/// Keyed mapping.
	Object,
}

impl Kind {
	/// Render the kind as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Absent => "absent",
			Self::Null => "null",
			Self::Boolean => "boolean",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
