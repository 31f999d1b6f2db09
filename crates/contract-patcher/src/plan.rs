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

//! The fixed, ordered list of contract edits of a generation run.

use std::path::Path;

use crate::{
	editor,
	error::Result,
	params::GenesisParameters,
	target::Target,
};

pub const SYSTEM: &str = "System.sol";
pub const SYSTEM_REWARD: &str = "SystemReward.sol";
pub const GOV_HUB: &str = "GovHub.sol";
pub const SLASH_INDICATOR: &str = "SlashIndicator.sol";
pub const VALIDATOR_SET: &str = "ValidatorSet.sol";
pub const STAKE_HUB: &str = "StakeHub.sol";
pub const GOVERNOR: &str = "Governor.sol";
pub const TIMELOCK: &str = "Timelock.sol";

const PROTECTABLE_INIT: &str = r"__Protectable_init_unchained\(.*\);";
const NUM_OPERATOR: &str = "numOperator = 2;";
const ALREADY_INIT: &str = "alreadyInit = true;";

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Edit {
	/// `<name> = <value>;`, see [`editor::replace_parameter`].
	Parameter { name: &'static str, value: String },
	/// First match of `pattern` becomes `replacement`.
	Replace { pattern: &'static str, replacement: String },
	/// `line` goes in front of the first line matching `anchor`.
	InsertBefore { anchor: &'static str, line: &'static str },
}

impl Edit {
	fn parameter(name: &'static str, value: impl std::fmt::Display) -> Self {
		Self::Parameter {
			name,
			value: value.to_string(),
		}
	}

	fn replace(pattern: &'static str, replacement: impl Into<String>) -> Self {
		Self::Replace {
			pattern,
			replacement: replacement.into(),
		}
	}

	pub fn apply(&self, file: &Path) -> Result<()> {
		match self {
			Self::Parameter { name, value } => editor::replace_parameter(file, name, value),
			Self::Replace { pattern, replacement } => editor::replace(file, pattern, replacement, 1),
			Self::InsertBefore { anchor, line } => editor::insert_before(file, anchor, line),
		}
	}
}

/// The edits of a single contract. A plan without edits still gets the
/// contract backed up.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ContractPlan {
	pub contract: &'static str,
	pub edits: Vec<Edit>,
}

pub fn build_plan(target: Target, params: &GenesisParameters) -> Vec<ContractPlan> {
	let mut plan = vec![ContractPlan {
		contract: SYSTEM,
		edits: vec![Edit::parameter(
			"uint16 public constant chainID",
			format!("0x{}", params.hex_chain_id()),
		)],
	}];

	if target.is_dev() {
		plan.push(ContractPlan {
			contract: SYSTEM_REWARD,
			edits: vec![
				Edit::InsertBefore {
					anchor: NUM_OPERATOR,
					line: "\t\toperators[VALIDATOR_CONTRACT_ADDR] = true;",
				},
				Edit::InsertBefore {
					anchor: NUM_OPERATOR,
					line: "\t\toperators[SLASH_CONTRACT_ADDR] = true;",
				},
				Edit::replace(NUM_OPERATOR, "numOperator = 4;"),
			],
		});
	}

	plan.push(ContractPlan {
		contract: GOV_HUB,
		edits: vec![],
	});

	let mut slash_indicator = vec![
		Edit::parameter("uint256 public constant MISDEMEANOR_THRESHOLD", &params.misdemeanor_threshold),
		Edit::parameter("uint256 public constant FELONY_THRESHOLD", &params.felony_threshold),
		Edit::parameter("uint256 public constant INIT_FELONY_SLASH_SCOPE", &params.init_felony_slash_scope),
	];
	if target.is_dev() {
		slash_indicator.push(Edit::InsertBefore {
			anchor: ALREADY_INIT,
			line: "\t\tenableMaliciousVoteSlash = true;",
		});
	}
	plan.push(ContractPlan {
		contract: SLASH_INDICATOR,
		edits: slash_indicator,
	});

	plan.push(ContractPlan {
		contract: VALIDATOR_SET,
		edits: vec![
			Edit::parameter("uint256 public constant INIT_BURN_RATIO", &params.init_burn_ratio),
			Edit::parameter(
				"bytes public constant INIT_VALIDATORSET_BYTES",
				format!("hex\"{}\"", params.init_validator_set_bytes),
			),
		],
	});

	plan.push(ContractPlan {
		contract: STAKE_HUB,
		edits: vec![
			Edit::parameter("uint256 public constant BREATHE_BLOCK_INTERVAL", &params.breathe_block_interval),
			Edit::replace(
				"maxElectedValidators = .*;",
				format!("maxElectedValidators = {};", params.max_elected_validators),
			),
			Edit::replace("unbondPeriod = .*;", format!("unbondPeriod = {};", params.unbond_period)),
			Edit::replace(
				"downtimeJailTime = .*;",
				format!("downtimeJailTime = {};", params.downtime_jail_time),
			),
			Edit::replace("felonyJailTime = .*;", format!("felonyJailTime = {};", params.felony_jail_time)),
			Edit::replace(
				PROTECTABLE_INIT,
				format!("__Protectable_init_unchained({});", params.stake_hub_protector),
			),
		],
	});

	plan.push(ContractPlan {
		contract: GOVERNOR,
		edits: vec![
			Edit::parameter("uint256 private constant BLOCK_INTERVAL", &params.block_interval),
			Edit::parameter("uint256 private constant INIT_VOTING_DELAY", &params.init_voting_delay),
			Edit::parameter("uint256 private constant INIT_VOTING_PERIOD", &params.init_voting_period),
			Edit::parameter("uint256 private constant INIT_PROPOSAL_THRESHOLD", &params.init_proposal_threshold),
			Edit::parameter("uint256 private constant INIT_QUORUM_NUMERATOR", &params.init_quorum_numerator),
			Edit::parameter(
				"uint256 private constant PROPOSE_START_GOV_SUPPLY_THRESHOLD",
				&params.propose_start_threshold,
			),
			Edit::parameter(
				"uint64 private constant INIT_MIN_PERIOD_AFTER_QUORUM",
				&params.init_min_period_after_quorum,
			),
			Edit::replace(
				PROTECTABLE_INIT,
				format!("__Protectable_init_unchained({});", params.governor_protector),
			),
		],
	});

	plan.push(ContractPlan {
		contract: TIMELOCK,
		edits: vec![Edit::parameter(
			"uint256 private constant INIT_MINIMAL_DELAY",
			&params.init_minimal_delay,
		)],
	});

	plan
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::params;

	fn contracts(plan: &[ContractPlan]) -> Vec<&'static str> {
		plan.iter().map(|p| p.contract).collect()
	}

	#[test]
	fn contract_order() {
		let mainnet = build_plan(Target::Mainnet, &params::mainnet::generate_parameters());
		let dev = build_plan(Target::Dev, &params::dev::generate_parameters());

		assert_eq!(
			contracts(&mainnet),
			[SYSTEM, GOV_HUB, SLASH_INDICATOR, VALIDATOR_SET, STAKE_HUB, GOVERNOR, TIMELOCK]
		);
		assert_eq!(
			contracts(&dev),
			[SYSTEM, SYSTEM_REWARD, GOV_HUB, SLASH_INDICATOR, VALIDATOR_SET, STAKE_HUB, GOVERNOR, TIMELOCK]
		);
	}

	#[test]
	fn chain_id_is_written_as_hex_literal() {
		let plan = build_plan(Target::Mainnet, &params::mainnet::generate_parameters());

		assert_eq!(
			plan[0].edits,
			vec![Edit::Parameter {
				name: "uint16 public constant chainID",
				value: "0x0a16".into(),
			}]
		);
	}

	#[test]
	fn malicious_vote_slash_only_on_dev() {
		let is_slash_flag = |e: &Edit| matches!(e, Edit::InsertBefore { anchor, .. } if *anchor == ALREADY_INIT);
		let slash_edits = |target, params: &GenesisParameters| {
			build_plan(target, params)
				.into_iter()
				.find(|p| p.contract == SLASH_INDICATOR)
				.unwrap()
				.edits
		};

		assert!(!slash_edits(Target::Testnet, &params::testnet::generate_parameters())
			.iter()
			.any(is_slash_flag));
		assert!(slash_edits(Target::Dev, &params::dev::generate_parameters())
			.iter()
			.any(is_slash_flag));
	}

	#[test]
	fn gov_hub_is_only_backed_up() {
		let plan = build_plan(Target::Testnet, &params::testnet::generate_parameters());

		assert!(plan.iter().find(|p| p.contract == GOV_HUB).unwrap().edits.is_empty());
	}
}
