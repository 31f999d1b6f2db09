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

//! Deployment targets and the context a generation run carries around.

use std::{
	path::{Path, PathBuf},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const CONTRACTS_DIR: &str = "contracts";
pub const SCRIPTS_DIR: &str = "scripts";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
	Mainnet,
	Testnet,
	Dev,
}

impl Target {
	pub const ALL: [Target; 3] = [Target::Mainnet, Target::Testnet, Target::Dev];

	pub fn is_dev(&self) -> bool {
		matches!(self, Self::Dev)
	}
}

impl std::fmt::Display for Target {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Mainnet => write!(f, "mainnet"),
			Self::Testnet => write!(f, "testnet"),
			Self::Dev => write!(f, "dev"),
		}
	}
}

impl FromStr for Target {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"mainnet" => Ok(Self::Mainnet),
			"testnet" => Ok(Self::Testnet),
			"dev" => Ok(Self::Dev),
			_ => Err(Error::UnknownTarget(s.to_owned())),
		}
	}
}

/// Lowercase hex of `chain_id`, zero padded to at least four digits.
pub fn convert_chain_id(chain_id: u64) -> String {
	format!("{chain_id:04x}")
}

/// Where and for which target a generation run happens. The chain id is part
/// of the [`GenesisParameters`](crate::params::GenesisParameters) of the run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GenerationContext {
	pub work_dir: PathBuf,
	pub target: Target,
}

impl GenerationContext {
	pub fn new(work_dir: impl Into<PathBuf>, target: Target) -> Self {
		Self {
			work_dir: work_dir.into(),
			target,
		}
	}

	pub fn contracts_dir(&self) -> PathBuf {
		self.work_dir.join(CONTRACTS_DIR)
	}

	pub fn contract(&self, name: &str) -> PathBuf {
		self.contracts_dir().join(name)
	}
}

/// The directory the tool operates on when none is given explicitly: `dir`
/// itself, or its parent when invoked from within `scripts/`.
pub fn resolve_work_dir(dir: &Path) -> PathBuf {
	match (dir.file_name(), dir.parent()) {
		(Some(name), Some(parent)) if name == SCRIPTS_DIR => parent.to_owned(),
		_ => dir.to_owned(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn chain_id_is_zero_padded_hex() {
		assert_eq!(convert_chain_id(2582), "0a16");
		assert_eq!(convert_chain_id(25821), "64dd");
		assert_eq!(convert_chain_id(714), "02ca");
		assert_eq!(convert_chain_id(0x1_0000), "10000");
	}

	#[test]
	fn target_round_trips_through_str() {
		for target in Target::ALL {
			assert_eq!(target.to_string().parse::<Target>().unwrap(), target);
		}
		assert!(matches!("staging".parse::<Target>(), Err(Error::UnknownTarget(s)) if s == "staging"));
	}

	#[test]
	fn scripts_dir_resolves_to_parent() {
		assert_eq!(resolve_work_dir(Path::new("/repo/scripts")), PathBuf::from("/repo"));
		assert_eq!(resolve_work_dir(Path::new("/repo")), PathBuf::from("/repo"));
		assert_eq!(resolve_work_dir(Path::new("/repo/my-scripts")), PathBuf::from("/repo/my-scripts"));
	}

	#[test]
	fn context_paths() {
		let ctx = GenerationContext::new("/repo", Target::Mainnet);

		assert_eq!(ctx.contracts_dir(), PathBuf::from("/repo/contracts"));
		assert_eq!(ctx.contract("System.sol"), PathBuf::from("/repo/contracts/System.sol"));
	}
}
