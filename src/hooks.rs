/* src/hooks.rs */

//!
//! The lifecycle surface the host generator drives.

use crate::config::HostConfig;
use crate::loader::DataLoader;
use crate::store::TemplateData;

/// The two lifecycle events the host fires.
///
/// The host's data-extension event fires once per process; the pre-render
/// event fires before every render pass and is the only mechanism for
/// observing data-file edits during a long-running session. The host
/// guarantees the hooks are not re-entrant.
pub trait LifecycleHooks {
	/// Initial data load, at host startup.
	fn on_initial_load(&mut self, data: &mut TemplateData);

	/// Re-load before each render pass, with unchanged configuration.
	fn on_before_render(&mut self, data: &mut TemplateData);
}

/// Host-facing adapter binding a [`DataLoader`] to the lifecycle events.
#[derive(Debug)]
pub struct DataFilesPlugin {
	loader: DataLoader,
}

impl DataFilesPlugin {
	/// Plugin name under the host's `plugins` configuration tree.
	pub const NAME: &'static str = "datafiles";

	/// Builds the plugin from the host configuration.
	pub fn from_host(host: &HostConfig) -> Self {
		Self {
			loader: DataLoader::new(host.src_path.clone(), host.plugins.datafiles.clone()),
		}
	}

	/// Builds the plugin around an existing loader.
	pub fn new(loader: DataLoader) -> Self {
		Self { loader }
	}

	/// The underlying loader.
	pub fn loader(&self) -> &DataLoader {
		&self.loader
	}
}

// Both hooks delegate to the same load pass; the loader's mtime cache keeps
// the repeat invocations cheap.
impl LifecycleHooks for DataFilesPlugin {
	fn on_initial_load(&mut self, data: &mut TemplateData) {
		self.loader.load(data);
	}

	fn on_before_render(&mut self, data: &mut TemplateData) {
		self.loader.load(data);
	}
}
