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

//! H2 testnet.

use crate::params::{GenesisParameters, GENESIS_OUTPUT};

pub const CHAIN_ID: u64 = 25821;

pub const INIT_VALIDATOR_SET_BYTES: &str = concat!(
	"f9015d80f90159f87194035ba39085b3a149b1b186252e639f2fdeb6aa8c94035ba39085b3a149b1b186252e639f2fde",
	"b6aa8c94035ba39085b3a149b1b186252e639f2fdeb6aa8c64b08ec997c9c836f53a48c21c433c9ddfea2be2f6ea15a1",
	"d058b634d42341f54197a7489d939d635ae4234fdc0f1bd7cce5f87194a29c7351b54aae166e4f651ef22eff1b47d49a",
	"2d94a29c7351b54aae166e4f651ef22eff1b47d49a2d94a29c7351b54aae166e4f651ef22eff1b47d49a2d64b08483e5",
	"b831c8b6a0a14c4db8c9b1fd81b8f2c5f28c2d2e0b2647b2399032834bea67ed48c1efc3b7ce98e66458332bc2f87194",
	"0931f2a9a600eb04d216f15da75ece6769717b89940931f2a9a600eb04d216f15da75ece6769717b89940931f2a9a600",
	"eb04d216f15da75ece6769717b8964b095a1471f5671cc92ed80f8246d056f1cb379b57fb7122e572715140ef15223c1",
	"a5db3a7822f12286fe0c4112592ae677",
);

const PROTECTOR: &str = "0x28e14eAc4e41E146ECA05A9679604A0fE6959A39";

pub fn generate_parameters() -> GenesisParameters {
	GenesisParameters {
		chain_id: CHAIN_ID,
		genesis_output: GENESIS_OUTPUT.into(),
		init_burn_ratio: "1000".into(),
		init_validator_set_bytes: INIT_VALIDATOR_SET_BYTES.into(),
		breathe_block_interval: "1 days".into(),
		max_elected_validators: "25".into(),
		unbond_period: "7 days".into(),
		downtime_jail_time: "2 days".into(),
		felony_jail_time: "30 days".into(),
		stake_hub_protector: PROTECTOR.into(),
		init_felony_slash_scope: "115200".into(),
		misdemeanor_threshold: "200".into(),
		felony_threshold: "600".into(),
		block_interval: "1 seconds".into(),
		init_voting_delay: "0 hours * 100 / 75".into(),
		// shorter voting period so proposals can be tried out within a day
		init_voting_period: "1 hours * 100 / 75".into(),
		init_proposal_threshold: "200 ether".into(),
		init_quorum_numerator: "10".into(),
		propose_start_threshold: "10_000_000 ether".into(),
		init_min_period_after_quorum: "uint64(0)".into(),
		governor_protector: PROTECTOR.into(),
		init_minimal_delay: "0 hours".into(),
	}
}
