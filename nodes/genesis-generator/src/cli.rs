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

use std::path::PathBuf;

use contract_patcher::{
	params::{self, GenesisParameters},
	template, Target, ValidatorSetSource,
};

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
	/// Generate the genesis contracts and genesis file of the mainnet.
	Mainnet,

	/// Generate the genesis contracts and genesis file of the testnet.
	Testnet,

	/// Generate the genesis contracts and genesis file of a local network.
	Dev(DevCmd),

	/// Restore every contract from its backup.
	Recover,

	/// Render the init holders script from a comma separated address list.
	GenerateInitHolders(GenerateInitHoldersCmd),

	/// Render the validators script from a validator configuration.
	GenerateValidators(GenerateValidatorsCmd),

	/// Annotate custom errors with their selectors.
	GenerateErrorSig(GenerateErrorSigCmd),

	/// Print the encoded initial validator set of a validator configuration.
	EncodeValidatorSet(EncodeValidatorSetCmd),

	/// Print the parameters a target patches into the contracts.
	ShowParams(ShowParamsCmd),
}

#[derive(Debug, clap::Parser)]
#[command(name = "h2-genesis", version, about, propagate_version = true)]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub(crate) subcommand: Subcommand,

	/// Directory holding `contracts/` and `scripts/`. Defaults to the current
	/// directory, or its parent when run from within `scripts/`.
	#[arg(long, global = true, env = "H2_GENESIS_WORK_DIR")]
	pub(crate) work_dir: Option<PathBuf>,

	#[arg(long, global = true, env = "H2_GENESIS_FORGE", default_value = "forge")]
	pub(crate) forge_bin: String,

	#[arg(long, global = true, env = "H2_GENESIS_NODE", default_value = "node")]
	pub(crate) node_bin: String,
}

/// Overrides of the dev parameter table. Values are Solidity expressions and
/// are written into the contracts as given.
#[derive(Debug, clap::Args)]
pub(crate) struct DevCmd {
	#[arg(long)]
	pub(crate) dev_chain_id: Option<u64>,

	/// Hex encoded initial validator set. Skips the validator scripts.
	#[arg(long, conflicts_with = "validators_conf")]
	pub(crate) init_validator_set_bytes: Option<String>,

	/// Encode the initial validator set from this configuration instead of
	/// running the validator scripts.
	#[arg(long)]
	pub(crate) validators_conf: Option<PathBuf>,

	#[arg(long)]
	pub(crate) init_burn_ratio: Option<String>,
	#[arg(long)]
	pub(crate) stake_hub_protector: Option<String>,
	#[arg(long)]
	pub(crate) governor_protector: Option<String>,
	#[arg(long)]
	pub(crate) block_interval: Option<String>,
	#[arg(long)]
	pub(crate) breathe_block_interval: Option<String>,
	#[arg(long)]
	pub(crate) max_elected_validators: Option<String>,
	#[arg(long)]
	pub(crate) unbond_period: Option<String>,
	#[arg(long)]
	pub(crate) downtime_jail_time: Option<String>,
	#[arg(long)]
	pub(crate) felony_jail_time: Option<String>,
	#[arg(long)]
	pub(crate) init_felony_slash_scope: Option<String>,
	#[arg(long)]
	pub(crate) misdemeanor_threshold: Option<String>,
	#[arg(long)]
	pub(crate) felony_threshold: Option<String>,
	#[arg(long)]
	pub(crate) init_voting_delay: Option<String>,
	#[arg(long)]
	pub(crate) init_voting_period: Option<String>,
	#[arg(long)]
	pub(crate) init_proposal_threshold: Option<String>,
	#[arg(long)]
	pub(crate) init_quorum_numerator: Option<String>,
	#[arg(long)]
	pub(crate) propose_start_threshold: Option<String>,
	#[arg(long)]
	pub(crate) init_min_period_after_quorum: Option<String>,
	#[arg(long)]
	pub(crate) init_minimal_delay: Option<String>,
}

impl DevCmd {
	/// The dev table with the given overrides applied. The initial validator
	/// set is resolved separately, see [`Self::validator_set_source`].
	pub(crate) fn parameters(&self) -> GenesisParameters {
		let mut params = params::dev::generate_parameters();
		if let Some(chain_id) = self.dev_chain_id {
			params.chain_id = chain_id;
		}

		let overrides = [
			(&mut params.init_burn_ratio, &self.init_burn_ratio),
			(&mut params.stake_hub_protector, &self.stake_hub_protector),
			(&mut params.governor_protector, &self.governor_protector),
			(&mut params.block_interval, &self.block_interval),
			(&mut params.breathe_block_interval, &self.breathe_block_interval),
			(&mut params.max_elected_validators, &self.max_elected_validators),
			(&mut params.unbond_period, &self.unbond_period),
			(&mut params.downtime_jail_time, &self.downtime_jail_time),
			(&mut params.felony_jail_time, &self.felony_jail_time),
			(&mut params.init_felony_slash_scope, &self.init_felony_slash_scope),
			(&mut params.misdemeanor_threshold, &self.misdemeanor_threshold),
			(&mut params.felony_threshold, &self.felony_threshold),
			(&mut params.init_voting_delay, &self.init_voting_delay),
			(&mut params.init_voting_period, &self.init_voting_period),
			(&mut params.init_proposal_threshold, &self.init_proposal_threshold),
			(&mut params.init_quorum_numerator, &self.init_quorum_numerator),
			(&mut params.propose_start_threshold, &self.propose_start_threshold),
			(&mut params.init_min_period_after_quorum, &self.init_min_period_after_quorum),
			(&mut params.init_minimal_delay, &self.init_minimal_delay),
		];
		for (value, given) in overrides {
			if let Some(given) = given {
				value.clone_from(given);
			}
		}
		params
	}

	pub(crate) fn validator_set_source(&self) -> ValidatorSetSource {
		match (&self.init_validator_set_bytes, &self.validators_conf) {
			(Some(bytes), _) => ValidatorSetSource::Literal(bytes.clone()),
			(None, Some(path)) => ValidatorSetSource::Config(path.clone()),
			(None, None) => ValidatorSetSource::Scripts,
		}
	}
}

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateInitHoldersCmd {
	/// Comma separated addresses.
	pub(crate) init_holders: String,

	#[arg(long, default_value = template::INIT_HOLDERS_TEMPLATE)]
	pub(crate) template_file: PathBuf,

	#[arg(long, default_value = template::INIT_HOLDERS_OUTPUT)]
	pub(crate) output_file: PathBuf,
}

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateValidatorsCmd {
	/// Validator configuration, one `consensusAddr,feeAddr,bbcFeeAddr,votingPower,blsPublicKey`
	/// record per line.
	#[arg(default_value = template::VALIDATORS_CONFIG)]
	pub(crate) file_path: PathBuf,

	#[arg(long, default_value = template::VALIDATORS_TEMPLATE)]
	pub(crate) template_file: PathBuf,

	#[arg(long, default_value = template::VALIDATORS_OUTPUT)]
	pub(crate) output_file: PathBuf,
}

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateErrorSigCmd {
	#[arg(default_value = "./contracts")]
	pub(crate) dir_path: PathBuf,
}

#[derive(Debug, clap::Args)]
pub(crate) struct EncodeValidatorSetCmd {
	#[arg(default_value = template::VALIDATORS_CONFIG)]
	pub(crate) file_path: PathBuf,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ShowParamsCmd {
	/// One of `mainnet`, `testnet` or `dev`.
	pub(crate) target: Target,
}

#[cfg(test)]
mod tests {
	use clap::{CommandFactory, Parser};

	use super::*;

	fn parse(args: &[&str]) -> Cli {
		Cli::try_parse_from(std::iter::once("h2-genesis").chain(args.iter().copied())).unwrap()
	}

	#[test]
	fn command_is_well_formed() {
		Cli::command().debug_assert();
	}

	#[test]
	fn dev_defaults() {
		let Subcommand::Dev(cmd) = parse(&["dev"]).subcommand else {
			panic!("expected the dev command");
		};

		assert_eq!(cmd.parameters(), params::dev::generate_parameters());
		assert_eq!(cmd.validator_set_source(), ValidatorSetSource::Scripts);
	}

	#[test]
	fn dev_overrides() {
		let cli = parse(&[
			"dev",
			"--dev-chain-id",
			"1000",
			"--init-burn-ratio",
			"500",
			"--governor-protector",
			"0x0000000000000000000000000000000000001234",
			"--init-validator-set-bytes",
			"0xc280c0",
		]);
		let Subcommand::Dev(cmd) = cli.subcommand else {
			panic!("expected the dev command");
		};

		let params = cmd.parameters();
		assert_eq!(params.chain_id, 1000);
		assert_eq!(params.init_burn_ratio, "500");
		assert_eq!(params.governor_protector, "0x0000000000000000000000000000000000001234");
		assert_eq!(params.stake_hub_protector, "address(0xdEaD)");
		assert_eq!(params.genesis_output, params::dev::GENESIS_OUTPUT);
		assert_eq!(
			cmd.validator_set_source(),
			ValidatorSetSource::Literal("0xc280c0".into())
		);
	}

	#[test]
	fn validator_set_flags_conflict() {
		assert!(Cli::try_parse_from([
			"h2-genesis",
			"dev",
			"--init-validator-set-bytes",
			"c280c0",
			"--validators-conf",
			"validators.conf",
		])
		.is_err());
	}

	#[test]
	fn global_flags_after_subcommand() {
		let cli = parse(&["recover", "--work-dir", "/tmp/h2", "--forge-bin", "/opt/forge"]);

		assert!(matches!(cli.subcommand, Subcommand::Recover));
		assert_eq!(cli.work_dir, Some(PathBuf::from("/tmp/h2")));
		assert_eq!(cli.forge_bin, "/opt/forge");
	}

	#[test]
	fn helper_command_defaults() {
		let Subcommand::GenerateValidators(cmd) = parse(&["generate-validators"]).subcommand else {
			panic!("expected the generate-validators command");
		};
		assert_eq!(cmd.file_path, PathBuf::from(template::VALIDATORS_CONFIG));
		assert_eq!(cmd.output_file, PathBuf::from(template::VALIDATORS_OUTPUT));

		let Subcommand::GenerateInitHolders(cmd) = parse(&["generate-init-holders", "0x01,0x02"]).subcommand else {
			panic!("expected the generate-init-holders command");
		};
		assert_eq!(cmd.init_holders, "0x01,0x02");
		assert_eq!(cmd.template_file, PathBuf::from(template::INIT_HOLDERS_TEMPLATE));

		let Subcommand::ShowParams(cmd) = parse(&["show-params", "testnet"]).subcommand else {
			panic!("expected the show-params command");
		};
		assert_eq!(cmd.target, Target::Testnet);
		assert!(Cli::try_parse_from(["h2-genesis", "show-params", "devnet"]).is_err());
	}
}
