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

use std::{
	cell::RefCell,
	fs,
	path::{Path, PathBuf},
};

use crate::{
	backup, generate, params, patch_contracts, plan, Error, GenerationContext, Result, Target, Toolchain,
	ValidatorSetSource,
};

const CONTRACTS: [(&str, &str); 8] = [
	(plan::SYSTEM, include_str!("../res/contracts/System.sol")),
	(plan::SYSTEM_REWARD, include_str!("../res/contracts/SystemReward.sol")),
	(plan::GOV_HUB, include_str!("../res/contracts/GovHub.sol")),
	(plan::SLASH_INDICATOR, include_str!("../res/contracts/SlashIndicator.sol")),
	(plan::VALIDATOR_SET, include_str!("../res/contracts/ValidatorSet.sol")),
	(plan::STAKE_HUB, include_str!("../res/contracts/StakeHub.sol")),
	(plan::GOVERNOR, include_str!("../res/contracts/Governor.sol")),
	(plan::TIMELOCK, include_str!("../res/contracts/Timelock.sol")),
];

#[derive(Debug, Clone, Eq, PartialEq)]
enum Call {
	Build(PathBuf),
	Genesis(PathBuf, u64, String),
	ValidatorSet(PathBuf),
}

#[derive(Default)]
struct MockToolchain {
	calls: RefCell<Vec<Call>>,
}

impl Toolchain for MockToolchain {
	fn build_contracts(&self, work_dir: &Path) -> Result<()> {
		self.calls.borrow_mut().push(Call::Build(work_dir.to_owned()));
		Ok(())
	}

	fn generate_genesis(&self, work_dir: &Path, chain_id: u64, output: &str) -> Result<()> {
		self.calls
			.borrow_mut()
			.push(Call::Genesis(work_dir.to_owned(), chain_id, output.to_owned()));
		Ok(())
	}

	fn validator_set_bytes(&self, work_dir: &Path) -> Result<String> {
		self.calls.borrow_mut().push(Call::ValidatorSet(work_dir.to_owned()));
		Ok("c280c0".into())
	}
}

fn workspace() -> tempfile::TempDir {
	let _ = env_logger::builder().is_test(true).try_init();
	let dir = tempfile::tempdir().unwrap();
	let contracts = dir.path().join("contracts");
	fs::create_dir(&contracts).unwrap();
	for (name, source) in CONTRACTS {
		fs::write(contracts.join(name), source).unwrap();
	}
	dir
}

fn read(dir: &Path, contract: &str) -> String {
	fs::read_to_string(dir.join("contracts").join(contract)).unwrap()
}

fn parameters(target: Target) -> params::GenesisParameters {
	let mut params = params::for_target(target);
	if target.is_dev() {
		params.init_validator_set_bytes = "c280c0".into();
	}
	params
}

#[test]
fn mainnet_generation() {
	let dir = workspace();
	let params = parameters(Target::Mainnet);
	let ctx = GenerationContext::new(dir.path(), Target::Mainnet);
	let toolchain = MockToolchain::default();

	generate(&ctx, &params, &toolchain).unwrap();

	assert!(read(dir.path(), plan::SYSTEM).contains("uint16 public constant chainID = 0x0a16;"));
	let validator_set = read(dir.path(), plan::VALIDATOR_SET);
	assert!(validator_set.contains("uint256 public constant INIT_BURN_RATIO = 1000;"));
	assert!(validator_set.contains(&format!(
		"bytes public constant INIT_VALIDATORSET_BYTES = hex\"{}\";",
		params::mainnet::INIT_VALIDATOR_SET_BYTES
	)));
	let stake_hub = read(dir.path(), plan::STAKE_HUB);
	assert!(stake_hub.contains("uint256 public constant BREATHE_BLOCK_INTERVAL = 1 days;"));
	assert!(stake_hub.contains("maxElectedValidators = 25;"));
	assert!(stake_hub.contains("__Protectable_init_unchained(0x1e5afE0Fd369f92CA1b8039f773a2B64697Ca5E8);"));
	let governor = read(dir.path(), plan::GOVERNOR);
	assert!(governor.contains("uint256 private constant INIT_VOTING_PERIOD = 7 days * 100 / 75;"));
	assert!(governor.contains("uint64 private constant INIT_MIN_PERIOD_AFTER_QUORUM = uint64(1 days * 100 / 75);"));
	assert!(read(dir.path(), plan::SLASH_INDICATOR).contains("uint256 public constant FELONY_THRESHOLD = 600;"));
	assert!(read(dir.path(), plan::TIMELOCK).contains("uint256 private constant INIT_MINIMAL_DELAY = 24 hours;"));

	// untouched outside of dev
	assert_eq!(read(dir.path(), plan::SYSTEM_REWARD), CONTRACTS[1].1);
	assert!(!backup::backup_path(&ctx.contract(plan::SYSTEM_REWARD)).exists());
	assert!(!read(dir.path(), plan::SLASH_INDICATOR).contains("enableMaliciousVoteSlash = true;"));

	assert_eq!(
		toolchain.calls.into_inner(),
		vec![
			Call::Build(dir.path().to_owned()),
			Call::Genesis(dir.path().to_owned(), 2582, "./genesis.json".into()),
		]
	);
}

#[test]
fn dev_generation_adds_dev_only_edits() {
	let dir = workspace();
	let params = parameters(Target::Dev);
	let ctx = GenerationContext::new(dir.path(), Target::Dev);
	let toolchain = MockToolchain::default();

	generate(&ctx, &params, &toolchain).unwrap();

	let system_reward = read(dir.path(), plan::SYSTEM_REWARD);
	assert!(system_reward.contains(
		"\t\toperators[VALIDATOR_CONTRACT_ADDR] = true;\n\t\toperators[SLASH_CONTRACT_ADDR] = true;\n            numOperator = 4;"
	));
	assert!(!system_reward.contains("numOperator = 2;"));
	assert!(read(dir.path(), plan::SLASH_INDICATOR)
		.contains("\t\tenableMaliciousVoteSlash = true;\n        alreadyInit = true;"));
	assert!(read(dir.path(), plan::SYSTEM).contains("uint16 public constant chainID = 0x02ca;"));
	assert_eq!(
		toolchain.calls.into_inner().last(),
		Some(&Call::Genesis(dir.path().to_owned(), 714, "./genesis-dev.json".into()))
	);
}

#[test]
fn contracts_and_genesis_share_the_chain_id() {
	let dir = workspace();
	let mut params = parameters(Target::Mainnet);
	params.chain_id = 1;
	let ctx = GenerationContext::new(dir.path(), Target::Mainnet);
	let toolchain = MockToolchain::default();

	generate(&ctx, &params, &toolchain).unwrap();

	assert!(read(dir.path(), plan::SYSTEM).contains("uint16 public constant chainID = 0x0001;"));
	assert_eq!(
		toolchain.calls.into_inner().last(),
		Some(&Call::Genesis(dir.path().to_owned(), 1, "./genesis.json".into()))
	);
}

#[test]
fn recover_restores_every_target() {
	for target in Target::ALL {
		let dir = workspace();
		let params = parameters(target);
		let ctx = GenerationContext::new(dir.path(), target);

		let touched = patch_contracts(&ctx, &params).unwrap();
		assert_eq!(touched.first(), Some(&ctx.contract(plan::SYSTEM)));
		assert_ne!(read(dir.path(), plan::SYSTEM), CONTRACTS[0].1, "{target}");
		backup::restore_all(&ctx.contracts_dir()).unwrap();

		for (name, source) in CONTRACTS {
			assert_eq!(read(dir.path(), name), source, "{target}: {name}");
			assert!(!backup::backup_path(&ctx.contract(name)).exists(), "{target}: {name}");
		}
	}
}

#[test]
fn missing_anchor_aborts_before_toolchain() {
	let dir = workspace();
	fs::write(dir.path().join("contracts").join(plan::TIMELOCK), "contract Timelock {}\n").unwrap();
	let params = parameters(Target::Testnet);
	let ctx = GenerationContext::new(dir.path(), Target::Testnet);
	let toolchain = MockToolchain::default();

	let err = generate(&ctx, &params, &toolchain).unwrap_err();

	assert!(matches!(err, Error::PatternNotFound { .. }));
	assert!(toolchain.calls.into_inner().is_empty());
	// earlier contracts stay patched until recovered
	assert!(read(dir.path(), plan::SYSTEM).contains("0x64dd"));
}

#[test]
fn missing_contract_still_fails_on_edit() {
	let dir = workspace();
	fs::remove_file(dir.path().join("contracts").join(plan::SYSTEM)).unwrap();
	let params = parameters(Target::Mainnet);
	let ctx = GenerationContext::new(dir.path(), Target::Mainnet);

	assert!(matches!(patch_contracts(&ctx, &params), Err(Error::Io { .. })));
}

#[test]
fn validator_set_sources() {
	let dir = workspace();
	fs::write(dir.path().join("validators.conf"), include_str!("../res/testnet-validators.conf")).unwrap();
	let ctx = GenerationContext::new(dir.path(), Target::Dev);
	let toolchain = MockToolchain::default();

	assert_eq!(
		ValidatorSetSource::Literal("0xc280c0".into()).resolve(&ctx, &toolchain).unwrap(),
		"c280c0"
	);
	assert_eq!(
		ValidatorSetSource::Config("validators.conf".into()).resolve(&ctx, &toolchain).unwrap(),
		params::testnet::INIT_VALIDATOR_SET_BYTES
	);
	assert!(toolchain.calls.borrow().is_empty());
	assert_eq!(ValidatorSetSource::Scripts.resolve(&ctx, &toolchain).unwrap(), "c280c0");
	assert_eq!(toolchain.calls.into_inner(), vec![Call::ValidatorSet(dir.path().to_owned())]);
}
