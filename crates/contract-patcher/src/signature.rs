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

//! Selector annotations for custom Solidity errors.
//!
//! A declaration such as
//!
//! ```text
//!     error InsufficientBalance(uint256 amount);
//! ```
//!
//! gets the first four bytes of `keccak256("InsufficientBalance(uint256)")`
//! written on the line above it:
//!
//! ```text
//!     // @notice signature: 0x92665351
//!     error InsufficientBalance(uint256 amount);
//! ```

use std::{
	fs,
	path::{Path, PathBuf},
	sync::OnceLock,
};

use regex::Regex;
use sha3::{Digest, Keccak256};

use crate::{
	backup::CONTRACT_EXTENSION,
	error::{Error, Result},
};

const LOG_TARGET: &str = "contract-patcher::signature";

pub const ANNOTATION_PREFIX: &str = "    // @notice signature: ";

fn error_declaration() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| Regex::new(r"^\s{4}error\s([a-zA-Z]*\(.*\));\s*$").expect("static regex is valid; qed"))
}

fn annotation() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| Regex::new(r"^\s{4}//\s@notice\ssignature:\s.*$").expect("static regex is valid; qed"))
}

/// Drop the parameter names of `declaration`, e.g.
/// `Foo(uint256 a, address b)` becomes `Foo(uint256,address)`.
pub fn canonical_signature(declaration: &str) -> String {
	let (Some(open), Some(close)) = (declaration.find('('), declaration.find(')')) else {
		return declaration.to_owned();
	};
	if close < open {
		return declaration.to_owned();
	}
	let params = &declaration[open + 1..close];
	if params.trim().is_empty() {
		return declaration.to_owned();
	}
	let types: Vec<&str> = params
		.split(',')
		.map(|param| param.split_whitespace().next().unwrap_or_default())
		.collect();
	format!("{}({}){}", &declaration[..open], types.join(","), &declaration[close + 1..])
}

/// `0x` prefixed hex of the first four bytes of `keccak256(signature)`.
pub fn selector(signature: &str) -> String {
	let hash = Keccak256::digest(signature.as_bytes());
	format!("0x{}", hex::encode(&hash[..4]))
}

fn line_body(line: &str) -> &str {
	line.trim_end_matches(['\n', '\r'])
}

/// Annotate every error declaration in `source`. Existing annotations right
/// above a declaration are overwritten, everything else is kept as is.
pub fn annotate_source(source: &str) -> String {
	let mut lines: Vec<String> = Vec::new();

	for line in source.split_inclusive('\n') {
		if let Some(captures) = error_declaration().captures(line_body(line)) {
			let signature = canonical_signature(&captures[1]);
			let annotation_line = format!("{ANNOTATION_PREFIX}{}\n", selector(&signature));
			log::trace!(target: LOG_TARGET, "{signature} -> {}", annotation_line.trim());

			match lines.last_mut() {
				Some(previous) if annotation().is_match(line_body(previous)) => *previous = annotation_line,
				_ => lines.push(annotation_line),
			}
		}
		lines.push(line.to_owned());
	}
	lines.concat()
}

/// Annotate a single contract file. Returns whether the file changed.
pub fn annotate_file(path: &Path) -> Result<bool> {
	let source = fs::read_to_string(path).map_err(Error::io(path))?;
	let annotated = annotate_source(&source);
	if annotated == source {
		return Ok(false);
	}
	fs::write(path, annotated).map_err(Error::io(path))?;
	Ok(true)
}

/// Annotate every contract directly inside `dir`. Returns the files that
/// changed.
pub fn annotate_dir(dir: &Path) -> Result<Vec<PathBuf>> {
	let mut contracts = fs::read_dir(dir)
		.map_err(Error::io(dir))?
		.map(|entry| entry.map(|e| e.path()).map_err(Error::io(dir)))
		.collect::<Result<Vec<_>>>()?;
	contracts.retain(|path| path.is_file() && path.extension().is_some_and(|ext| ext == CONTRACT_EXTENSION));
	contracts.sort();

	let mut changed = Vec::new();
	for contract in contracts {
		if annotate_file(&contract)? {
			changed.push(contract);
		}
	}
	log::info!(target: LOG_TARGET, "Updated error signatures in {} file(s).", changed.len());
	Ok(changed)
}
