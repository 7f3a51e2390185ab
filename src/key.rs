/* src/key.rs */

//!
//! Store-key derivation from data-file base names.

/// How a file's base name becomes a template-data key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyStyle {
	/// Use the base name verbatim.
	Verbatim,
	/// Normalize to a lowerCamelCase identifier: `my-data` → `myData`.
	#[default]
	LowerCamel,
}

impl KeyStyle {
	/// Derive a store key from a base name (extension already stripped).
	pub fn apply(&self, name: &str) -> String {
		match self {
			KeyStyle::Verbatim => name.to_string(),
			KeyStyle::LowerCamel => lower_camel(name),
		}
	}
}

/// Separators (`-`, `_`, `.`, spaces) are dropped and the character after
/// each is uppercased; the first emitted character is lowercased; everything
/// else keeps its case.
fn lower_camel(name: &str) -> String {
	let mut out = String::with_capacity(name.len());
	let mut upper_next = false;
	for ch in name.chars() {
		if matches!(ch, '-' | '_' | '.' | ' ') {
			// A leading separator does not capitalize the first character.
			upper_next = !out.is_empty();
			continue;
		}
		if upper_next {
			out.extend(ch.to_uppercase());
			upper_next = false;
		} else if out.is_empty() {
			out.extend(ch.to_lowercase());
		} else {
			out.push(ch);
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_verbatim_keeps_name() {
		assert_eq!(KeyStyle::Verbatim.apply("my-data"), "my-data");
		assert_eq!(KeyStyle::Verbatim.apply("Config"), "Config");
	}

	#[test]
	fn test_lower_camel_hyphens() {
		let style = KeyStyle::LowerCamel;
		assert_eq!(style.apply("my-data"), "myData");
		assert_eq!(style.apply("site-nav-links"), "siteNavLinks");
	}

	#[test]
	fn test_lower_camel_other_separators() {
		let style = KeyStyle::LowerCamel;
		assert_eq!(style.apply("foo_bar"), "fooBar");
		assert_eq!(style.apply("app.settings"), "appSettings");
		assert_eq!(style.apply("a b"), "aB");
	}

	#[test]
	fn test_lower_camel_first_character() {
		let style = KeyStyle::LowerCamel;
		assert_eq!(style.apply("Config"), "config");
		assert_eq!(style.apply("already"), "already");
		// Leading separator is dropped without capitalizing.
		assert_eq!(style.apply("-foo"), "foo");
	}

	#[test]
	fn test_lower_camel_digits_pass_through() {
		let style = KeyStyle::LowerCamel;
		assert_eq!(style.apply("top10"), "top10");
		assert_eq!(style.apply("my-2nd-list"), "my2ndList");
	}

	#[test]
	fn test_empty_name() {
		assert_eq!(KeyStyle::LowerCamel.apply(""), "");
	}
}
