/* tests/script_tests.rs */

#![cfg(feature = "script")]

use std::fs;
use std::thread::sleep;
use std::time::Duration;

use datafiles::{Config, DataLoader, TemplateData};

// Script evaluation shells out to the interpreter, so these tests are
// skipped on machines without `node` on PATH.
fn node_available() -> bool {
	which::which("node").is_ok()
}

#[test]
fn test_js_module_export_loaded() {
	if !node_available() {
		eprintln!("node not on PATH, skipping");
		return;
	}
	let tmp = tempfile::tempdir().unwrap();
	fs::create_dir(tmp.path().join("data")).unwrap();
	fs::write(
		tmp.path().join("data/constants.js"),
		"module.exports = { answer: 6 * 7 };\n",
	)
	.unwrap();

	let mut data = TemplateData::new();
	DataLoader::new(tmp.path(), Config::default()).load(&mut data);

	assert_eq!(data.get("constants").unwrap()["answer"], 42);
}

#[test]
fn test_js_edit_observed_on_reload() {
	if !node_available() {
		eprintln!("node not on PATH, skipping");
		return;
	}
	let tmp = tempfile::tempdir().unwrap();
	fs::create_dir(tmp.path().join("data")).unwrap();
	let file = tmp.path().join("data/counter.js");
	fs::write(&file, "module.exports = 1;\n").unwrap();

	let mut loader = DataLoader::new(tmp.path(), Config::default());
	let mut data = TemplateData::new();
	loader.load(&mut data);
	assert_eq!(data.get("counter").unwrap(), 1);

	// Some filesystems only have second-granularity mtimes.
	sleep(Duration::from_millis(1100));
	fs::write(&file, "module.exports = 2;\n").unwrap();
	loader.load(&mut data);

	// A fresh interpreter process per evaluation means no stale module
	// cache can shadow the edit.
	assert_eq!(data.get("counter").unwrap(), 2);
}

#[test]
fn test_throwing_module_aborts_pass() {
	if !node_available() {
		eprintln!("node not on PATH, skipping");
		return;
	}
	let tmp = tempfile::tempdir().unwrap();
	fs::create_dir(tmp.path().join("data")).unwrap();
	fs::write(
		tmp.path().join("data/boom.js"),
		"throw new Error('bad data file');\n",
	)
	.unwrap();

	let mut data = TemplateData::new();
	DataLoader::new(tmp.path(), Config::default()).load(&mut data);

	// Logged and swallowed; nothing was stored and nothing panicked.
	assert!(data.is_empty());
}
