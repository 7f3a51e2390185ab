/* src/format/json.rs */

use std::path::Path;

use crate::error::LoadError;
use crate::store::Value;

use super::Format;

/// JSON data files, parsed with `serde_json`.
pub struct Json;

impl Format for Json {
	fn extensions(&self) -> &'static [&'static str] {
		&["json"]
	}

	fn load(&self, path: &Path) -> Result<Value, LoadError> {
		let bytes = std::fs::read(path)?;
		serde_json::from_slice(&bytes).map_err(|e| LoadError::parse(path, e))
	}
}
