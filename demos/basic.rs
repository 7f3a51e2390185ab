/* demos/basic.rs */

//! Example: load a data directory into template data.
//!
//! This example demonstrates:
//! - Building the plugin from a host configuration tree
//! - The initial lifecycle load
//! - Picking up a file edit through the pre-render hook
//!
//! Run with: cargo run --example basic

use std::fs;

use datafiles::{DataFilesPlugin, HostConfig, LifecycleHooks, TemplateData};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// 0. Prepare a source tree with a data directory
	let root = "example_site";

	// Cleanup from previous runs
	if std::path::Path::new(root).exists() {
		fs::remove_dir_all(root)?;
	}
	fs::create_dir_all(format!("{root}/data"))?;
	fs::write(
		format!("{root}/data/site.yaml"),
		"title: Demo Site\nbaseUrl: /\n",
	)?;
	fs::write(
		format!("{root}/data/nav-links.json"),
		r#"[{"label": "Home", "href": "/"}]"#,
	)?;

	println!("Created data files in {root}/data/");

	// 1. Host configuration, as the generator would hand it over
	let host: HostConfig = serde_json::from_str(&format!(
		r#"{{"srcPath": "{root}", "plugins": {{"datafiles": {{"dataPaths": ["data"]}}}}}}"#
	))?;

	// 2. Initial load
	let mut plugin = DataFilesPlugin::from_host(&host);
	let mut data = TemplateData::new();
	plugin.on_initial_load(&mut data);

	for (key, value) in data.iter() {
		println!("{key} = {value}");
	}

	// 3. Edit a file, then reload the way the pre-render hook does
	std::thread::sleep(std::time::Duration::from_millis(1100));
	fs::write(format!("{root}/data/site.yaml"), "title: Demo Site (edited)\n")?;
	plugin.on_before_render(&mut data);

	println!("after reload: site = {}", data.get("site").unwrap());

	fs::remove_dir_all(root)?;
	Ok(())
}
