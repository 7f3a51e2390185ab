/* src/config.rs */

use serde::Deserialize;
use std::path::PathBuf;

use crate::key::KeyStyle;

/// Options for the datafiles plugin.
///
/// Field spellings follow the host configuration surface (`dataPaths`,
/// `camelCase`, `alwaysReload`). Immutable for the duration of one load
/// pass.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
	/// Directories to scan, in order, relative to the host source root.
	pub data_paths: Vec<PathBuf>,
	/// Convert file base names to lowerCamelCase store keys.
	pub camel_case: bool,
	/// Bypass the mtime cache and re-parse every file on every load.
	pub always_reload: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			data_paths: vec![PathBuf::from("data")],
			camel_case: true,
			always_reload: false,
		}
	}
}

impl Config {
	/// The key style selected by `camel_case`.
	pub fn key_style(&self) -> KeyStyle {
		if self.camel_case {
			KeyStyle::LowerCamel
		} else {
			KeyStyle::Verbatim
		}
	}
}

/// Mirror of the host generator's configuration accessor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
	/// Root that relative data paths resolve against.
	pub src_path: PathBuf,
	#[serde(default)]
	pub plugins: Plugins,
}

/// Per-plugin configuration tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Plugins {
	#[serde(default)]
	pub datafiles: Config,
}
