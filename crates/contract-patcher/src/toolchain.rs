// KILT Blockchain – <https://kilt.io>
// Copyright (C) 2025, KILT Foundation

// The KILT Blockchain is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The KILT Blockchain is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

// If you feel like getting in touch with us, you can do so at <hello@kilt.io>

//! The external programs a generation run hands over to.
//!
//! They are run as blocking child processes in the work directory. A non-zero
//! exit status aborts the run.

use std::{
	path::Path,
	process::{Command, Stdio},
};

use crate::error::{Error, Result};

const LOG_TARGET: &str = "contract-patcher::toolchain";

pub const GENESIS_SCRIPT: &str = "scripts/generate-genesis.js";

const VALIDATOR_SET_SNIPPET: &str = "const exportsObj = require('./scripts/validators.js'); \
	 console.log(exportsObj.validatorSetBytes.toString('hex'));";

pub trait Toolchain {
	/// Compile the patched contracts.
	fn build_contracts(&self, work_dir: &Path) -> Result<()>;

	/// Write the genesis file for `chain_id` to `output`.
	fn generate_genesis(&self, work_dir: &Path, chain_id: u64, output: &str) -> Result<()>;

	/// Hex encoded initial validator set, without `0x` prefix, as produced by
	/// the validator scripts of the work directory.
	fn validator_set_bytes(&self, work_dir: &Path) -> Result<String>;
}

/// `forge` and `node` found on `PATH` or given explicitly.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExternalToolchain {
	pub forge: String,
	pub node: String,
}

impl Default for ExternalToolchain {
	fn default() -> Self {
		Self {
			forge: "forge".into(),
			node: "node".into(),
		}
	}
}

impl ExternalToolchain {
	fn command(program: &str, work_dir: &Path, args: &[&str]) -> Command {
		log::info!(target: LOG_TARGET, "Running `{program} {}` in {}.", args.join(" "), work_dir.display());
		let mut cmd = Command::new(program);
		cmd.args(args).current_dir(work_dir);
		cmd
	}

	fn run(program: &str, work_dir: &Path, args: &[&str]) -> Result<()> {
		let status = Self::command(program, work_dir, args)
			.status()
			.map_err(|source| Error::Spawn {
				program: program.to_owned(),
				source,
			})?;
		if !status.success() {
			return Err(Error::CommandFailed {
				program: program.to_owned(),
				status,
			});
		}
		Ok(())
	}
}

impl Toolchain for ExternalToolchain {
	fn build_contracts(&self, work_dir: &Path) -> Result<()> {
		Self::run(&self.forge, work_dir, &["build"])
	}

	fn generate_genesis(&self, work_dir: &Path, chain_id: u64, output: &str) -> Result<()> {
		let chain_id = chain_id.to_string();
		Self::run(
			&self.node,
			work_dir,
			&[GENESIS_SCRIPT, "--chainId", &chain_id, "--output", output],
		)
	}

	fn validator_set_bytes(&self, work_dir: &Path) -> Result<String> {
		let output = Self::command(&self.node, work_dir, &["-e", VALIDATOR_SET_SNIPPET])
			.stderr(Stdio::inherit())
			.output()
			.map_err(|source| Error::Spawn {
				program: self.node.clone(),
				source,
			})?;
		if !output.status.success() {
			return Err(Error::CommandFailed {
				program: self.node.clone(),
				status: output.status,
			});
		}
		Ok(strip_hex_prefix(&String::from_utf8_lossy(&output.stdout)))
	}
}

/// The last non-empty line of `stdout`, with the `0x` prefix removed.
///
/// The validator script logs a few lines of its own before the bytes.
fn strip_hex_prefix(stdout: &str) -> String {
	let line = stdout.lines().rev().find(|l| !l.trim().is_empty()).unwrap_or_default().trim();
	line.strip_prefix("0x").unwrap_or(line).to_owned()
}
