/* src/format/script.rs */

use std::path::Path;
use std::process::Command;

use crate::error::LoadError;
use crate::store::Value;

use super::Format;

/// Which interpreter evaluates a script module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpreter {
	/// `node`, for `.js` modules.
	Node,
	/// `coffee`, for legacy `.coffee` modules.
	Coffee,
}

impl Interpreter {
	fn binary(&self) -> &'static str {
		match self {
			Interpreter::Node => "node",
			Interpreter::Coffee => "coffee",
		}
	}

	/// Eval snippet that requires the target module and writes its export as
	/// JSON on stdout. The target path travels in `DATA_FILE` so the same
	/// invocation shape works for both interpreters.
	fn eval_source(&self) -> &'static str {
		match self {
			Interpreter::Node => {
				"process.stdout.write(JSON.stringify(require(process.env.DATA_FILE)))"
			}
			Interpreter::Coffee => {
				"process.stdout.write JSON.stringify require process.env.DATA_FILE"
			}
		}
	}
}

/// Script-module data files, evaluated in a child interpreter process.
///
/// Every evaluation runs in a fresh process, so no module cache survives
/// between loads; an edited module is always re-read in full. The module's
/// export must be JSON-representable. Trusted input only: the file runs
/// with the host's privileges.
pub struct Script {
	interpreter: Interpreter,
}

impl Script {
	pub const fn new(interpreter: Interpreter) -> Self {
		Self { interpreter }
	}
}

impl Format for Script {
	fn extensions(&self) -> &'static [&'static str] {
		match self.interpreter {
			Interpreter::Node => &["js"],
			Interpreter::Coffee => &["coffee"],
		}
	}

	fn load(&self, path: &Path) -> Result<Value, LoadError> {
		let binary = which::which(self.interpreter.binary())
			.map_err(|_| LoadError::MissingInterpreter(self.interpreter.binary()))?;

		// `require` must resolve the module absolutely, not against the
		// child's working directory.
		let target = std::fs::canonicalize(path)?;

		let output = Command::new(binary)
			.arg("-e")
			.arg(self.interpreter.eval_source())
			.env("DATA_FILE", &target)
			.output()?;

		if !output.status.success() {
			return Err(LoadError::Script {
				path: path.to_path_buf(),
				status: output.status,
				stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
			});
		}

		serde_json::from_slice(&output.stdout).map_err(|e| LoadError::parse(path, e))
	}
}
