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

//! Runs the contract plan of a target and hands over to the toolchain.

use std::path::PathBuf;

use crate::{
	backup,
	error::Result,
	params::GenesisParameters,
	plan::build_plan,
	target::GenerationContext,
	toolchain::Toolchain,
	validators,
};

const LOG_TARGET: &str = "contract-patcher::orchestrator";

/// Where the initial validator set of a run comes from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ValidatorSetSource {
	/// Hex encoded bytes, with or without `0x` prefix.
	Literal(String),
	/// A validator configuration file, encoded natively.
	Config(PathBuf),
	/// The validator scripts of the work directory, run by the toolchain.
	Scripts,
}

impl ValidatorSetSource {
	pub fn resolve(&self, ctx: &GenerationContext, toolchain: &impl Toolchain) -> Result<String> {
		let bytes = match self {
			Self::Literal(bytes) => bytes.trim_start_matches("0x").to_owned(),
			Self::Config(path) => validators::encode_validator_set(&validators::load_validators(
				&ctx.work_dir.join(path),
			)?)?,
			Self::Scripts => toolchain.validator_set_bytes(&ctx.work_dir)?,
		};
		log::debug!(target: LOG_TARGET, "Initial validator set: {bytes}");
		Ok(bytes)
	}
}

/// Back up and patch every contract of the plan, in order.
///
/// Backup failures are logged and skipped, edit failures abort the run. The
/// contracts patched before a failing edit stay patched; `recover` restores
/// them. Returns the touched contract paths.
pub fn patch_contracts(ctx: &GenerationContext, params: &GenesisParameters) -> Result<Vec<PathBuf>> {
	let plan = build_plan(ctx.target, params);
	let mut touched = Vec::with_capacity(plan.len());

	for contract_plan in plan {
		let path = ctx.contract(contract_plan.contract);
		backup::try_backup(&path);
		for edit in &contract_plan.edits {
			edit.apply(&path)?;
		}
		log::info!(
			target: LOG_TARGET,
			"Patched {} ({} edit(s)).",
			contract_plan.contract,
			contract_plan.edits.len()
		);
		touched.push(path);
	}
	Ok(touched)
}

/// Patch the contracts for `ctx.target`, build them and generate the genesis
/// file.
pub fn generate(ctx: &GenerationContext, params: &GenesisParameters, toolchain: &impl Toolchain) -> Result<()> {
	log::info!(
		target: LOG_TARGET,
		"Generating {} genesis for chain id {} ({}).",
		ctx.target,
		params.chain_id,
		params.hex_chain_id()
	);
	patch_contracts(ctx, params)?;
	toolchain.build_contracts(&ctx.work_dir)?;
	toolchain.generate_genesis(&ctx.work_dir, params.chain_id, &params.genesis_output)?;
	Ok(())
}
