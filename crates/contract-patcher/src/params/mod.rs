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

//! Per target parameter tables.
//!
//! Values are kept as the literal source text that ends up in the contracts,
//! e.g. `7 days * 100 / 75` or `10_000_000 ether`. Nothing here checks that a
//! value makes sense for the constant it is assigned to.

use serde::{Deserialize, Serialize};

use crate::target::{convert_chain_id, Target};

pub mod dev;
pub mod mainnet;
pub mod testnet;

pub const GENESIS_OUTPUT: &str = "./genesis.json";

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisParameters {
	pub chain_id: u64,
	/// Where the genesis generator writes its output, relative to the work
	/// directory.
	pub genesis_output: String,

	// ValidatorSet
	pub init_burn_ratio: String,
	/// Hex encoded RLP without `0x` prefix. Empty for [`Target::Dev`] until
	/// the validator set of the run is resolved.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub init_validator_set_bytes: String,

	// StakeHub
	pub breathe_block_interval: String,
	pub max_elected_validators: String,
	pub unbond_period: String,
	pub downtime_jail_time: String,
	pub felony_jail_time: String,
	pub stake_hub_protector: String,

	// SlashIndicator
	pub init_felony_slash_scope: String,
	pub misdemeanor_threshold: String,
	pub felony_threshold: String,

	// Governor
	pub block_interval: String,
	pub init_voting_delay: String,
	pub init_voting_period: String,
	pub init_proposal_threshold: String,
	pub init_quorum_numerator: String,
	pub propose_start_threshold: String,
	pub init_min_period_after_quorum: String,
	pub governor_protector: String,

	// Timelock
	pub init_minimal_delay: String,
}

impl GenesisParameters {
	/// [`Self::chain_id`] as written into `System.sol`, without `0x` prefix.
	pub fn hex_chain_id(&self) -> String {
		convert_chain_id(self.chain_id)
	}
}

/// The built-in table of `target`.
///
/// For [`Target::Dev`] the validator set bytes are left empty; they are
/// produced from the local validator configuration at generation time.
pub fn for_target(target: Target) -> GenesisParameters {
	match target {
		Target::Mainnet => mainnet::generate_parameters(),
		Target::Testnet => testnet::generate_parameters(),
		Target::Dev => dev::generate_parameters(),
	}
}
