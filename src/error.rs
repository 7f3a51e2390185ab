/* src/error.rs */

use std::path::{Path, PathBuf};

/// Core error type for a load pass.
///
/// Any of these aborts the remainder of the pass; the loader reports the
/// first one through the host's logger and never raises it to the caller.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	/// IO error while listing a directory, statting, or reading a file.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// A data file failed to parse.
	#[error("parse error in {}: {message}", .path.display())]
	Parse { path: PathBuf, message: String },

	/// No interpreter binary on PATH for a script module.
	#[cfg(feature = "script")]
	#[error("interpreter not found: {0}")]
	MissingInterpreter(&'static str),

	/// A script module exited unsuccessfully.
	#[cfg(feature = "script")]
	#[error("script {} failed ({status}): {stderr}", .path.display())]
	Script {
		path: PathBuf,
		status: std::process::ExitStatus,
		stderr: String,
	},
}

impl LoadError {
	pub(crate) fn parse(path: &Path, err: impl std::fmt::Display) -> Self {
		Self::Parse {
			path: path.to_path_buf(),
			message: err.to_string(),
		}
	}
}
