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

//! Local development network.
//!
//! These are only defaults, every value can be overridden from the command
//! line.

use crate::params::GenesisParameters;

pub const CHAIN_ID: u64 = 714;
pub const GENESIS_OUTPUT: &str = "./genesis-dev.json";

const PROTECTOR: &str = "address(0xdEaD)";

pub fn generate_parameters() -> GenesisParameters {
	GenesisParameters {
		chain_id: CHAIN_ID,
		genesis_output: GENESIS_OUTPUT.into(),
		init_burn_ratio: "1000".into(),
		init_validator_set_bytes: String::new(),
		breathe_block_interval: "1 days".into(),
		max_elected_validators: "45".into(),
		unbond_period: "7 days".into(),
		downtime_jail_time: "2 days".into(),
		felony_jail_time: "30 days".into(),
		stake_hub_protector: PROTECTOR.into(),
		init_felony_slash_scope: "28800".into(),
		misdemeanor_threshold: "50".into(),
		felony_threshold: "150".into(),
		block_interval: "3 seconds".into(),
		init_voting_delay: "0 hours / BLOCK_INTERVAL".into(),
		init_voting_period: "7 days / BLOCK_INTERVAL".into(),
		init_proposal_threshold: "200 ether".into(),
		init_quorum_numerator: "10".into(),
		propose_start_threshold: "10_000_000 ether".into(),
		init_min_period_after_quorum: "uint64(1 days / BLOCK_INTERVAL)".into(),
		governor_protector: PROTECTOR.into(),
		init_minimal_delay: "24 hours".into(),
	}
}
