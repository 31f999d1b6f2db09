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

//! Rendering of the genesis helper scripts from Jinja templates.

use std::{fs, path::Path};

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use crate::{
	error::{Error, Result},
	validators::ValidatorEntry,
};

const LOG_TARGET: &str = "contract-patcher::template";

pub const INIT_HOLDERS_TEMPLATE: &str = "./scripts/init_holders.template";
pub const INIT_HOLDERS_OUTPUT: &str = "./scripts/init_holders.js";
pub const VALIDATORS_CONFIG: &str = "./validators.conf";
pub const VALIDATORS_TEMPLATE: &str = "./scripts/validators.template";
pub const VALIDATORS_OUTPUT: &str = "./scripts/validators.js";

#[derive(Debug, Serialize)]
pub struct ValidatorsData<'a> {
	pub validators: &'a [ValidatorEntry],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitHoldersData<'a> {
	pub init_holders: &'a [String],
}

/// Render `source` against `data`.
///
/// Values are HTML escaped on substitution.
pub fn render_str(source: &str, data: &impl Serialize) -> Result<String> {
	let mut env = Environment::new();
	env.set_auto_escape_callback(|_| AutoEscape::Html);
	let template = env.template_from_str(source)?;
	Ok(template.render(data)?)
}

/// Render the template at `template_file` and write the result to
/// `output_file`, both relative to `work_dir`.
pub fn generate_from_template(
	work_dir: &Path,
	data: &impl Serialize,
	template_file: &Path,
	output_file: &Path,
) -> Result<()> {
	let template_path = work_dir.join(template_file);
	let source = fs::read_to_string(&template_path).map_err(Error::io(&template_path))?;
	let rendered = render_str(&source, data)?;

	let output_path = work_dir.join(output_file);
	fs::write(&output_path, rendered).map_err(Error::io(&output_path))?;
	log::info!(
		target: LOG_TARGET,
		"Rendered {} into {}.",
		template_path.display(),
		output_path.display()
	);
	Ok(())
}

/// Split a comma separated list of addresses.
pub fn parse_init_holders(list: &str) -> Vec<String> {
	list.split(',').map(|s| s.trim().to_owned()).collect()
}

pub fn generate_init_holders(
	work_dir: &Path,
	init_holders: &[String],
	template_file: &Path,
	output_file: &Path,
) -> Result<()> {
	generate_from_template(work_dir, &InitHoldersData { init_holders }, template_file, output_file)
}

/// Render the validator script from the configuration at `config_file`.
///
/// The whole configuration is validated before anything is written.
pub fn generate_validators(
	work_dir: &Path,
	config_file: &Path,
	template_file: &Path,
	output_file: &Path,
) -> Result<()> {
	let validators = crate::validators::load_validators(&work_dir.join(config_file))?;
	generate_from_template(
		work_dir,
		&ValidatorsData {
			validators: &validators,
		},
		template_file,
		output_file,
	)
}
