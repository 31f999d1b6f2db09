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

use std::{env, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use contract_patcher::{
	backup, params, signature,
	target::{resolve_work_dir, CONTRACTS_DIR},
	template, validators, ExternalToolchain, GenerationContext, GenesisParameters, Target,
};

use crate::cli::{Cli, Subcommand};

const LOG_TARGET: &str = "h2-genesis::command";

impl Cli {
	fn work_dir(&self) -> anyhow::Result<PathBuf> {
		match &self.work_dir {
			Some(dir) => Ok(dir.clone()),
			None => {
				let current = env::current_dir().context("failed to read the current directory")?;
				Ok(resolve_work_dir(&current))
			}
		}
	}

	fn toolchain(&self) -> ExternalToolchain {
		ExternalToolchain {
			forge: self.forge_bin.clone(),
			node: self.node_bin.clone(),
		}
	}
}

fn generate(ctx: &GenerationContext, params: &GenesisParameters, toolchain: &ExternalToolchain) -> anyhow::Result<()> {
	contract_patcher::generate(ctx, params, toolchain)
		.with_context(|| format!("failed to generate genesis of {}", ctx.target))?;
	println!("Generate genesis of {} successfully", ctx.target);
	Ok(())
}

fn generate_fixed(work_dir: PathBuf, target: Target, toolchain: &ExternalToolchain) -> anyhow::Result<()> {
	let params = params::for_target(target);
	let ctx = GenerationContext::new(work_dir, target);
	generate(&ctx, &params, toolchain)
}

/// Parse and run the command line.
pub(crate) fn run() -> anyhow::Result<()> {
	let cli = Cli::parse();
	let work_dir = cli.work_dir()?;
	log::debug!(target: LOG_TARGET, "Working in {}.", work_dir.display());

	match &cli.subcommand {
		Subcommand::Mainnet => generate_fixed(work_dir, Target::Mainnet, &cli.toolchain()),
		Subcommand::Testnet => generate_fixed(work_dir, Target::Testnet, &cli.toolchain()),
		Subcommand::Dev(cmd) => {
			let toolchain = cli.toolchain();
			let mut params = cmd.parameters();
			let ctx = GenerationContext::new(work_dir, Target::Dev);
			params.init_validator_set_bytes = cmd
				.validator_set_source()
				.resolve(&ctx, &toolchain)
				.context("failed to resolve the initial validator set")?;
			generate(&ctx, &params, &toolchain)
		}
		Subcommand::Recover => {
			let contracts = work_dir.join(CONTRACTS_DIR);
			let restored = backup::restore_all(&contracts)
				.with_context(|| format!("failed to recover contracts in {}", contracts.display()))?;
			log::info!(target: LOG_TARGET, "Restored {} contract(s).", restored.len());
			println!("Recover from the backup successfully");
			Ok(())
		}
		Subcommand::GenerateInitHolders(cmd) => {
			let init_holders = template::parse_init_holders(&cmd.init_holders);
			template::generate_init_holders(&work_dir, &init_holders, &cmd.template_file, &cmd.output_file)
				.context("failed to generate init holders")?;
			println!("Generate init holders successfully");
			Ok(())
		}
		Subcommand::GenerateValidators(cmd) => {
			template::generate_validators(&work_dir, &cmd.file_path, &cmd.template_file, &cmd.output_file)
				.context("failed to generate validators")?;
			println!("Generate validators successfully");
			Ok(())
		}
		Subcommand::GenerateErrorSig(cmd) => {
			let dir = work_dir.join(&cmd.dir_path);
			let changed = signature::annotate_dir(&dir)
				.with_context(|| format!("failed to annotate errors in {}", dir.display()))?;
			for path in &changed {
				log::info!(target: LOG_TARGET, "Annotated {}.", path.display());
			}
			println!("Generate error signatures successfully");
			Ok(())
		}
		Subcommand::EncodeValidatorSet(cmd) => {
			let path = work_dir.join(&cmd.file_path);
			let entries = validators::load_validators(&path)
				.with_context(|| format!("failed to load validators from {}", path.display()))?;
			println!("{}", validators::encode_validator_set(&entries)?);
			Ok(())
		}
		Subcommand::ShowParams(cmd) => {
			let params = params::for_target(cmd.target);
			if cmd.target.is_dev() {
				log::info!(
					target: LOG_TARGET,
					"The dev validator set is resolved when generating, see `dev --help`."
				);
			}
			println!("{}", serde_json::to_string_pretty(&params)?);
			Ok(())
		}
	}
}
