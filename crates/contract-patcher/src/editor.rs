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

//! In-place edits of contract sources anchored on regular expressions.
//!
//! Every edit reads the whole file and writes it back in full. The write is
//! not atomic.

use std::{fs, path::Path};

use regex::{NoExpand, Regex};

use crate::error::{Error, Result};

const LOG_TARGET: &str = "contract-patcher::editor";

/// Replace up to `count` matches of `pattern` in `file` with the literal
/// `replacement`. A `count` of `0` replaces every match.
///
/// Fails with [`Error::PatternNotFound`] if nothing matches.
pub fn replace(file: &Path, pattern: &str, replacement: &str, count: usize) -> Result<()> {
	let regex = Regex::new(pattern)?;
	let content = fs::read_to_string(file).map_err(Error::io(file))?;

	if !regex.is_match(&content) {
		return Err(Error::PatternNotFound {
			pattern: pattern.to_owned(),
			path: file.to_owned(),
		});
	}
	let patched = regex.replacen(&content, count, NoExpand(replacement));
	fs::write(file, patched.as_bytes()).map_err(Error::io(file))?;

	log::debug!(target: LOG_TARGET, "{}: {pattern} -> {replacement}", file.display());
	Ok(())
}

/// Insert `line` right before the first line of `file` matching `pattern`.
///
/// Lines after the first match are left alone even if they match too. If no
/// line matches, the file is not touched and [`Error::PatternNotFound`] is
/// returned.
pub fn insert_before(file: &Path, pattern: &str, line: &str) -> Result<()> {
	let regex = Regex::new(pattern)?;
	let content = fs::read_to_string(file).map_err(Error::io(file))?;

	let offset = content
		.split_inclusive('\n')
		.scan(0, |start, current| {
			let offset = *start;
			*start += current.len();
			Some((offset, current))
		})
		.find(|(_, current)| regex.is_match(current.trim_end_matches(['\n', '\r'])))
		.map(|(offset, _)| offset)
		.ok_or_else(|| Error::PatternNotFound {
			pattern: pattern.to_owned(),
			path: file.to_owned(),
		})?;

	let mut patched = String::with_capacity(content.len() + line.len() + 1);
	patched.push_str(&content[..offset]);
	patched.push_str(line);
	patched.push('\n');
	patched.push_str(&content[offset..]);
	fs::write(file, patched).map_err(Error::io(file))?;

	log::debug!(target: LOG_TARGET, "{}: inserted {line:?} before {pattern}", file.display());
	Ok(())
}

/// Set a declaration of the form `<name> = <value>;` to `value`.
///
/// `name` is matched literally, including the type and visibility prefix,
/// e.g. `uint256 public constant FELONY_THRESHOLD`.
pub fn replace_parameter(file: &Path, name: &str, value: &str) -> Result<()> {
	let pattern = parameter_pattern(name);
	replace(file, &pattern, &format!("{name} = {value};"), 1)
}

pub(crate) fn parameter_pattern(name: &str) -> String {
	format!("{} =[^;]*;", regex::escape(name))
}
