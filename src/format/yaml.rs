/* src/format/yaml.rs */

use std::path::Path;

use crate::error::LoadError;
use crate::store::Value;

use super::Format;

/// YAML data files, parsed with `serde_yaml`.
pub struct Yaml;

impl Format for Yaml {
	fn extensions(&self) -> &'static [&'static str] {
		&["yaml", "yml"]
	}

	fn load(&self, path: &Path) -> Result<Value, LoadError> {
		let bytes = std::fs::read(path)?;
		serde_yaml::from_slice(&bytes).map_err(|e| LoadError::parse(path, e))
	}
}
