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

//! H2 mainnet.

use crate::params::{GenesisParameters, GENESIS_OUTPUT};

pub const CHAIN_ID: u64 = 2582;

/// RLP encoded initial validator set, see
/// [`encode_validator_set`](crate::validators::encode_validator_set).
pub const INIT_VALIDATOR_SET_BYTES: &str = concat!(
	"f9040f80f9040bf87194563322cc646b29348998b48f0a781a72de0e885b94563322cc646b29348998b48f0a781a72de",
	"0e885b94563322cc646b29348998b48f0a781a72de0e885b64b093c6fb41d8897eb68ad25e966de3cb309cbf1807da6e",
	"3032a88707fb80c9e4a98f110f72f6b7bba588c2c38017d8eab7f871944ddf403fab2c9953e87b713af8650b47a506e4",
	"e3944ddf403fab2c9953e87b713af8650b47a506e4e3944ddf403fab2c9953e87b713af8650b47a506e4e364b0a6450a",
	"f15c45c559954660cf3d01d8cf6ed93c8f4a2ae147363274ceb21252bfc3544841ac5e63fd62508e544e3bd63af87194",
	"e1094a64b9e6a35cf504d97782084dd0208e49a894e1094a64b9e6a35cf504d97782084dd0208e49a894e1094a64b9e6",
	"a35cf504d97782084dd0208e49a864b090dc7f1c9792e2d2ab1461ee15c612d70b79819c24b3eaf74bee343e61766e02",
	"bfc912257e593955651d35ec14de3612f87194ef5e9de1e55cce5c86a19d71a9eebec286394b3394ef5e9de1e55cce5c",
	"86a19d71a9eebec286394b3394ef5e9de1e55cce5c86a19d71a9eebec286394b3364b09722fc855ae18ea61969c26f0f",
	"ccd93296cc47d07e7e9d0ce445c6ee6a1d14eb2e7fef75dcd41bf4b0bca8ac95738adaf87194e11fe867fff43d89465b",
	"8d2e0db05dee5504d7ce94e11fe867fff43d89465b8d2e0db05dee5504d7ce94e11fe867fff43d89465b8d2e0db05dee",
	"5504d7ce64b093bc9190bf418f4f20db8c31f3111010138fcbdd6e3e98d5e360e4237d3eca4fef1aa39552557d8e812c",
	"86e6c4979933f871944ed4c4aa45a69c5be22c2ca646db0887b266b862944ed4c4aa45a69c5be22c2ca646db0887b266",
	"b862944ed4c4aa45a69c5be22c2ca646db0887b266b86264b0937bb0f0b8f504c3397b774f9d5e7127f4b9c15fda8594",
	"10e873d55c4bdbd014566e082d9a1c8a1c38f36a634fbdd25bf871944615415aac8609577c4a2add55af25fecf5f862f",
	"944615415aac8609577c4a2add55af25fecf5f862f944615415aac8609577c4a2add55af25fecf5f862f64b081fbeb9d",
	"bca53bdc16da942059eb5327aac6c2929ae3b0348d5c55b786e2e44d32bc68483ddc3a4bb8dc598c41bdc396f871942e",
	"7ac7fb5c3ccb279b5c1168a117b4d0f3fb2cd2942e7ac7fb5c3ccb279b5c1168a117b4d0f3fb2cd2942e7ac7fb5c3ccb",
	"279b5c1168a117b4d0f3fb2cd264b090fbc2dc507a55c5dec905aa093b22b2956eb12e8cd861b2150b1077822ff4b089",
	"2cd363c5e68994fc37eacba4106609f87194632aab1ed1054d2a43d4077662abee5557e4645794632aab1ed1054d2a43",
	"d4077662abee5557e4645794632aab1ed1054d2a43d4077662abee5557e4645764b0b892aff71e0f9537e70adb94a808",
	"76c4b7f4859bac606f76fff6f08f30f0363ee2bc3e4a65f9b993b27c655657f69f49",
);

const PROTECTOR: &str = "0x1e5afE0Fd369f92CA1b8039f773a2B64697Ca5E8";

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
		init_voting_period: "7 days * 100 / 75".into(),
		init_proposal_threshold: "200 ether".into(),
		init_quorum_numerator: "10".into(),
		propose_start_threshold: "10_000_000 ether".into(),
		init_min_period_after_quorum: "uint64(1 days * 100 / 75)".into(),
		governor_protector: PROTECTOR.into(),
		init_minimal_delay: "24 hours".into(),
	}
}
