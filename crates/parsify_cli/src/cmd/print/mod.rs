use parsify::json::Value;

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of properties printed for a single object.
	pub max_keys_per_object: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/objects.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_keys_per_object: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Render one decoded value tree as indented lines.
///
/// Object keys are printed in sorted order.
pub fn render_value(value: &Value, options: PrintOptions) -> Vec<String> {
	let mut lines = Vec::new();
	render_into(&mut lines, value, 0, 0, options);
	lines
}

/// Print one decoded value tree.
pub fn print_value(value: &Value, options: PrintOptions) {
	for line in render_value(value, options) {
		println!("{line}");
	}
}

fn render_into(lines: &mut Vec<String>, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				lines.push(format!("{pad}[... {} items]", items.len()));
				return;
			}
			lines.push(format!("{pad}["));
			for item in items.iter().take(options.max_array_items) {
				render_into(lines, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				lines.push(format!("{pad}  ... {} more", items.len() - options.max_array_items));
			}
			lines.push(format!("{pad}]"));
		}
		Value::Object(map) => {
			if depth >= options.max_print_depth {
				lines.push(format!("{pad}{{ ... {} keys }}", map.len()));
				return;
			}
			let mut keys: Vec<&String> = map.keys().collect();
			keys.sort_unstable();

			lines.push(format!("{pad}{{"));
			for key in keys.iter().take(options.max_keys_per_object) {
				let item = &map[*key];
				if matches!(item, Value::Object(_) | Value::Array(_)) {
					lines.push(format!("{pad}  {key} ="));
					render_into(lines, item, indent + 4, depth + 1, options);
				} else {
					lines.push(format!("{pad}  {key} = {}", render_leaf(item, options)));
				}
			}
			if keys.len() > options.max_keys_per_object {
				lines.push(format!("{pad}  ... {} more keys", keys.len() - options.max_keys_per_object));
			}
			lines.push(format!("{pad}}}"));
		}
		leaf => lines.push(format!("{pad}{}", render_leaf(leaf, options))),
	}
}

fn render_leaf(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::Null => "null".to_owned(),
		Value::Bool(v) => v.to_string(),
		Value::Number(v) => v.to_string(),
		Value::String(v) => format!("\"{}\"", truncate(v, options.max_string_len)),
		Value::Array(items) => format!("[{} items]", items.len()),
		Value::Object(map) => format!("{{{} keys}}", map.len()),
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
