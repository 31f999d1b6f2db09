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

//! Errors raised while patching contracts and driving the genesis tooling.

use std::{io, path::PathBuf, process::ExitStatus};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// An anchor the contract sources are expected to contain is missing.
	#[error("{pattern} not found in {}", path.display())]
	PatternNotFound { pattern: String, path: PathBuf },

	#[error("I/O error on {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to start `{program}`: {source}")]
	Spawn {
		program: String,
		#[source]
		source: io::Error,
	},

	#[error("`{program}` exited with {status}")]
	CommandFailed { program: String, status: ExitStatus },

	#[error("Invalid validator info: {line}")]
	InvalidValidatorRecord { line: String },

	#[error("invalid hex value for {field}: {value}")]
	InvalidHex { field: &'static str, value: String },

	#[error("invalid voting power: {value}")]
	InvalidVotingPower { value: String },

	#[error("Unknown target provided: {0}")]
	UnknownTarget(String),

	#[error(transparent)]
	InvalidRegex(#[from] regex::Error),

	#[error(transparent)]
	Template(#[from] minijinja::Error),
}

impl Error {
	pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
		let path = path.into();
		move |source| Self::Io { path, source }
	}
}
