/* src/cache.rs */

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// Per-loader skip cache: file path → last-observed mtime in milliseconds.
///
/// Created empty when the loader is built and never cleared; entries for
/// deleted files go stale but are harmless. A file deleted and recreated
/// with an identical timestamp is treated as unchanged; timestamp equality
/// is the only staleness signal.
#[derive(Debug, Default)]
pub struct MtimeCache {
	inner: HashMap<PathBuf, u128>,
}

impl MtimeCache {
	/// Creates a new empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// True if the cache holds exactly this mtime for this path.
	pub fn is_current(&self, path: &Path, mtime_ms: u128) -> bool {
		self.inner.get(path) == Some(&mtime_ms)
	}

	/// Records the observed mtime, replacing any previous value.
	pub fn record(&mut self, path: PathBuf, mtime_ms: u128) {
		self.inner.insert(path, mtime_ms);
	}

	/// Number of distinct paths ever observed.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// True if no path has been observed yet.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

/// Modification time of `path` in milliseconds since the epoch.
///
/// Pre-epoch timestamps clamp to zero.
pub fn mtime_millis(path: &Path) -> io::Result<u128> {
	let modified = std::fs::metadata(path)?.modified()?;
	Ok(modified
		.duration_since(UNIX_EPOCH)
		.map(|d| d.as_millis())
		.unwrap_or(0))
}
