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

//! Genesis contract generation.
//!
//! Patches the constants of the genesis system contracts (chain id, validator
//! set, staking, slashing and governance parameters) for a [`Target`], backs
//! up every touched file so it can be recovered, and drives the external
//! build and genesis tooling through the [`Toolchain`] trait.
//!
//! Besides that the crate renders the helper scripts consumed by the genesis
//! tooling ([`template`]) and keeps the selector annotations of custom errors
//! up to date ([`signature`]).

pub mod backup;
pub mod editor;
pub mod error;
pub mod orchestrator;
pub mod params;
pub mod plan;
pub mod signature;
pub mod target;
pub mod template;
pub mod toolchain;
pub mod validators;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use orchestrator::{generate, patch_contracts, ValidatorSetSource};
pub use params::GenesisParameters;
pub use target::{convert_chain_id, GenerationContext, Target};
pub use toolchain::{ExternalToolchain, Toolchain};
