/* src/format/mod.rs */

use std::path::Path;

use crate::error::LoadError;
use crate::store::Value;

mod json;
pub use json::Json;

mod yaml;
pub use yaml::Yaml;

#[cfg(feature = "script")]
mod script;
#[cfg(feature = "script")]
pub use script::{Interpreter, Script};

/// Abstract format that turns one data file into a template value.
pub trait Format {
	/// Extensions (without the dot) this format claims.
	fn extensions(&self) -> &'static [&'static str];

	/// Read or evaluate the file at `path` into a value.
	fn load(&self, path: &Path) -> Result<Value, LoadError>;
}

/// An enum wrapper for all recognized formats, enabling dispatch by file
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyFormat {
	Yaml,
	Json,
	#[cfg(feature = "script")]
	Js,
	#[cfg(feature = "script")]
	Coffee,
}

impl AnyFormat {
	/// Maps a file extension to its format. Unrecognized extensions return
	/// `None` and the scan ignores the entry.
	pub fn from_extension(ext: &str) -> Option<Self> {
		match ext {
			"yaml" | "yml" => Some(Self::Yaml),
			"json" => Some(Self::Json),
			#[cfg(feature = "script")]
			"js" => Some(Self::Js),
			#[cfg(feature = "script")]
			"coffee" => Some(Self::Coffee),
			_ => None,
		}
	}
}

impl Format for AnyFormat {
	fn extensions(&self) -> &'static [&'static str] {
		match self {
			Self::Yaml => Yaml.extensions(),
			Self::Json => Json.extensions(),
			#[cfg(feature = "script")]
			Self::Js => Script::new(Interpreter::Node).extensions(),
			#[cfg(feature = "script")]
			Self::Coffee => Script::new(Interpreter::Coffee).extensions(),
		}
	}

	fn load(&self, path: &Path) -> Result<Value, LoadError> {
		match self {
			Self::Yaml => Yaml.load(path),
			Self::Json => Json.load(path),
			#[cfg(feature = "script")]
			Self::Js => Script::new(Interpreter::Node).load(path),
			#[cfg(feature = "script")]
			Self::Coffee => Script::new(Interpreter::Coffee).load(path),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_extension_dispatch() {
		assert_eq!(AnyFormat::from_extension("yaml"), Some(AnyFormat::Yaml));
		assert_eq!(AnyFormat::from_extension("yml"), Some(AnyFormat::Yaml));
		assert_eq!(AnyFormat::from_extension("json"), Some(AnyFormat::Json));
		assert_eq!(AnyFormat::from_extension("txt"), None);
		assert_eq!(AnyFormat::from_extension(""), None);
		// Dispatch is case-sensitive, like the extensions themselves.
		assert_eq!(AnyFormat::from_extension("YAML"), None);
	}

	#[cfg(feature = "script")]
	#[test]
	fn test_script_extension_dispatch() {
		assert_eq!(AnyFormat::from_extension("js"), Some(AnyFormat::Js));
		assert_eq!(AnyFormat::from_extension("coffee"), Some(AnyFormat::Coffee));
	}

	#[test]
	fn test_claimed_extensions() {
		assert_eq!(AnyFormat::Yaml.extensions(), ["yaml", "yml"]);
		assert_eq!(AnyFormat::Json.extensions(), ["json"]);
	}
}
