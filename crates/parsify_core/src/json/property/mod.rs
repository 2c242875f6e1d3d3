use crate::json::{TreeValue, Value};

impl TreeValue {
	fn property(&self, key: &str) -> Option<&Value> {
		self.object()?.get(key)
	}

	/// String property of a held object.
	pub fn get_string_property(&self, key: &str) -> Option<&str> {
		match self.property(key)? {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	/// Numeric property of a held object.
	pub fn get_number_property(&self, key: &str) -> Option<f64> {
		match self.property(key)? {
			Value::Number(n) => Some(*n),
			_ => None,
		}
	}

	/// Boolean property of a held object.
	pub fn get_bool_property(&self, key: &str) -> Option<bool> {
		match self.property(key)? {
			Value::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// String property of a held object, parsed as an unsigned integer literal.
	///
	/// Typical inputs are hex quantities such as `"0x66b15f"`. See
	/// [`parse_unsigned_literal`] for the accepted syntax.
	pub fn get_numeric_string_property(&self, key: &str) -> Option<u64> {
		parse_unsigned_literal(self.get_string_property(key)?)
	}
}

/// Parse an unsigned 64-bit integer, picking the radix from its prefix.
///
/// `0x`/`0X` selects hex, `0o`/`0O` and a bare leading `0` select octal,
/// `0b`/`0B` selects binary, anything else is decimal. Underscores may separate
/// digits, or follow a prefix. Signs, empty digit runs, and overflow are
/// rejected.
pub fn parse_unsigned_literal(input: &str) -> Option<u64> {
	let bytes = input.as_bytes();
	let (radix, digits, prefixed) = match bytes {
		[b'0', b'x' | b'X', ..] => (16, &input[2..], true),
		[b'0', b'o' | b'O', ..] => (8, &input[2..], true),
		[b'0', b'b' | b'B', ..] => (2, &input[2..], true),
		[b'0', _, ..] => (8, &input[1..], true),
		_ => (10, input, false),
	};

	let mut cleaned = String::with_capacity(digits.len());
	for (idx, group) in digits.split('_').enumerate() {
		if group.is_empty() && !(idx == 0 && prefixed) {
			return None;
		}
		cleaned.push_str(group);
	}

	if cleaned.is_empty() || !cleaned.chars().all(|ch| ch.is_digit(radix)) {
		return None;
	}

	u64::from_str_radix(&cleaned, radix).ok()
}
