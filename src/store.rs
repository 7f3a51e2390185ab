/* src/store.rs */

use std::collections::HashMap;

use serde::Serialize;

pub use serde_json::Value;

/// The host-owned template data mapping.
///
/// The loader only inserts or overwrites entries; it never removes them and
/// never inspects an existing value before overwriting it. The host hands
/// the whole store to its rendering layer, so it serializes transparently
/// as a plain JSON object.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct TemplateData {
	inner: HashMap<String, Value>,
}

impl TemplateData {
	/// Creates a new empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or overwrites an entry, returning the previous value if any.
	pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
		self.inner.insert(key.into(), value)
	}

	/// Gets a value by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.inner.get(key)
	}

	/// True if the store holds an entry for `key`.
	pub fn contains_key(&self, key: &str) -> bool {
		self.inner.contains_key(key)
	}

	/// Returns all keys, in arbitrary order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.inner.keys().map(String::as_str)
	}

	/// Iterates over entries, in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.inner.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// True if the store has no entries.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}
