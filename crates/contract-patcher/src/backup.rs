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

//! Sibling `.bak` copies of contract sources.
//!
//! A file `<stem>.bak` next to `<stem>.sol` marks a contract that was mutated
//! and not restored yet. Only one backup per contract is kept.

use std::{
	fs,
	path::{Path, PathBuf},
};

use crate::error::{Error, Result};

const LOG_TARGET: &str = "contract-patcher::backup";

pub const BACKUP_EXTENSION: &str = "bak";
pub const CONTRACT_EXTENSION: &str = "sol";

/// Path of the backup belonging to `contract`.
pub fn backup_path(contract: &Path) -> PathBuf {
	contract.with_extension(BACKUP_EXTENSION)
}

/// Copy `contract` to its backup path, overwriting an older backup.
pub fn backup(contract: &Path) -> Result<PathBuf> {
	let destination = backup_path(contract);
	fs::copy(contract, &destination).map_err(Error::io(contract))?;
	log::trace!(target: LOG_TARGET, "Backed up {} to {}.", contract.display(), destination.display());
	Ok(destination)
}

/// Best effort [`backup`]: failures are logged and the run goes on.
pub fn try_backup(contract: &Path) {
	if let Err(e) = backup(contract) {
		log::warn!(target: LOG_TARGET, "Could not back up {}: {e}", contract.display());
	}
}

/// Copy the backup of `contract` back in place and delete it.
///
/// Returns `false` if there was no backup to restore.
pub fn restore(contract: &Path) -> Result<bool> {
	let source = backup_path(contract);
	if !source.exists() {
		return Ok(false);
	}
	fs::copy(&source, contract).map_err(Error::io(contract))?;
	fs::remove_file(&source).map_err(Error::io(&source))?;
	log::trace!(target: LOG_TARGET, "Restored {} from {}.", contract.display(), source.display());
	Ok(true)
}

/// Restore every backup found directly inside `dir`.
///
/// Returns the restored contract paths, sorted.
pub fn restore_all(dir: &Path) -> Result<Vec<PathBuf>> {
	let mut backups = fs::read_dir(dir)
		.map_err(Error::io(dir))?
		.map(|entry| entry.map(|e| e.path()).map_err(Error::io(dir)))
		.collect::<Result<Vec<_>>>()?;
	backups.retain(|path| path.extension().is_some_and(|ext| ext == BACKUP_EXTENSION));
	backups.sort();

	let mut restored = Vec::with_capacity(backups.len());
	for bak in backups {
		let contract = bak.with_extension(CONTRACT_EXTENSION);
		restore(&contract)?;
		restored.push(contract);
	}
	log::info!(target: LOG_TARGET, "Restored {} contract(s) in {}.", restored.len(), dir.display());
	Ok(restored)
}
