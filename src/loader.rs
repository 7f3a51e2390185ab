/* src/loader.rs */

//!
//! The directory scan pipeline.

use std::path::{Path, PathBuf};

use crate::cache::{MtimeCache, mtime_millis};
use crate::config::Config;
use crate::error::LoadError;
use crate::format::{AnyFormat, Format};
use crate::store::TemplateData;

/// Scans configured data directories and merges parsed files into a
/// [`TemplateData`] store.
///
/// Directories are processed in configured order; entries within one
/// directory in filesystem enumeration order, which is not sorted. When two
/// files derive the same store key, the later-processed one wins; that
/// tie-break is deterministic across directories but not within one.
///
/// The mtime cache is owned by the instance: build one loader per host
/// process and keep it alive across reloads, so repeat passes skip
/// unchanged files.
#[derive(Debug)]
pub struct DataLoader {
	src_path: PathBuf,
	config: Config,
	mtime_cache: MtimeCache,
}

impl DataLoader {
	/// Creates a loader with an empty mtime cache.
	pub fn new(src_path: impl Into<PathBuf>, config: Config) -> Self {
		Self {
			src_path: src_path.into(),
			config,
			mtime_cache: MtimeCache::new(),
		}
	}

	/// The active configuration.
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// The skip cache, exposed for inspection.
	pub fn mtime_cache(&self) -> &MtimeCache {
		&self.mtime_cache
	}

	/// Runs one load pass, merging new and changed files into `data`.
	///
	/// An empty `data_paths` emits a warning and scans nothing. Any error
	/// while resolving, listing, statting, or parsing aborts the remainder
	/// of the pass, across all configured directories, and is reported
	/// through the logger; files processed strictly before the failure stay
	/// applied. Nothing propagates to the caller.
	pub fn load(&mut self, data: &mut TemplateData) -> &mut Self {
		if self.config.data_paths.is_empty() {
			log::warn!("datafiles: no dataPaths defined in configuration, no data will be loaded");
			return self;
		}
		if let Err(e) = self.scan_all(data) {
			log::error!("datafiles: load pass aborted: {e}");
		}
		self
	}

	fn scan_all(&mut self, data: &mut TemplateData) -> Result<(), LoadError> {
		let dirs: Vec<PathBuf> = self
			.config
			.data_paths
			.iter()
			.map(|p| self.src_path.join(p))
			.collect();
		for dir in dirs {
			self.scan_dir(&dir, data)?;
		}
		Ok(())
	}

	fn scan_dir(&mut self, dir: &Path, data: &mut TemplateData) -> Result<(), LoadError> {
		for entry in std::fs::read_dir(dir)? {
			let path = entry?.path();

			if !self.config.always_reload {
				let mtime = mtime_millis(&path)?;
				if self.mtime_cache.is_current(&path, mtime) {
					continue;
				}
				// Recorded before parsing: a file that fails to parse is
				// not retried until it changes again.
				self.mtime_cache.record(path.clone(), mtime);
			}

			// Entries without a recognized extension are ignored, and that
			// implicitly covers subdirectories too.
			let Some(format) = path
				.extension()
				.map(|e| e.to_string_lossy())
				.and_then(|e| AnyFormat::from_extension(&e))
			else {
				continue;
			};

			let Some(stem) = path.file_stem().map(|s| s.to_string_lossy()) else {
				continue;
			};
			let key = self.config.key_style().apply(&stem);

			let value = format.load(&path)?;
			data.insert(key, value);
		}
		Ok(())
	}
}
