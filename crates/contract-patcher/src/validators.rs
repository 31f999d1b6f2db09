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

//! Validator configuration records and the initial validator set encoding.
//!
//! The configuration is one validator per line:
//!
//! ```text
//! consensusAddr,feeAddr,bbcFeeAddr,votingPower,blsPublicKey
//! ```

use std::{fs, path::Path};

use alloy_rlp::{Encodable, Header, RlpEncodable};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const LOG_TARGET: &str = "contract-patcher::validators";

const ADDRESS_LEN: usize = 20;
const BLS_PUBLIC_KEY_LEN: usize = 48;

/// One line of the validator configuration, as handed to templates.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValidatorEntry {
	#[serde(rename = "consensusAddr")]
	pub consensus_addr: String,
	#[serde(rename = "feeAddr")]
	pub fee_addr: String,
	#[serde(rename = "bbcFeeAddr")]
	pub bbc_fee_addr: String,
	#[serde(rename = "votingPower")]
	pub voting_power: String,
	#[serde(rename = "bLSPublicKey")]
	pub bls_public_key: String,
}

impl std::str::FromStr for ValidatorEntry {
	type Err = Error;

	fn from_str(line: &str) -> Result<Self> {
		let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
		let [consensus_addr, fee_addr, bbc_fee_addr, voting_power, bls_public_key] = fields[..] else {
			return Err(Error::InvalidValidatorRecord { line: line.to_owned() });
		};
		Ok(Self {
			consensus_addr: consensus_addr.to_owned(),
			fee_addr: fee_addr.to_owned(),
			bbc_fee_addr: bbc_fee_addr.to_owned(),
			voting_power: voting_power.to_owned(),
			bls_public_key: bls_public_key.to_owned(),
		})
	}
}

/// Parse a whole validator configuration. Every line, blank ones included,
/// must hold exactly five fields; only the final newline is optional.
pub fn parse_validators(content: &str) -> Result<Vec<ValidatorEntry>> {
	content.lines().map(str::parse).collect()
}

pub fn load_validators(path: &Path) -> Result<Vec<ValidatorEntry>> {
	let content = fs::read_to_string(path).map_err(Error::io(path))?;
	let validators = parse_validators(&content)?;
	log::debug!(target: LOG_TARGET, "Loaded {} validator(s) from {}.", validators.len(), path.display());
	Ok(validators)
}

/// A validator as it appears in the RLP encoded validator set. Note that the
/// legacy fee address precedes the fee address.
#[derive(Debug, Clone, Eq, PartialEq, RlpEncodable)]
struct ValidatorRecord {
	consensus_addr: [u8; ADDRESS_LEN],
	bbc_fee_addr: [u8; ADDRESS_LEN],
	fee_addr: [u8; ADDRESS_LEN],
	voting_power: u64,
	bls_public_key: [u8; BLS_PUBLIC_KEY_LEN],
}

impl TryFrom<&ValidatorEntry> for ValidatorRecord {
	type Error = Error;

	fn try_from(entry: &ValidatorEntry) -> Result<Self> {
		Ok(Self {
			consensus_addr: decode_fixed("consensusAddr", &entry.consensus_addr)?,
			bbc_fee_addr: decode_fixed("bbcFeeAddr", &entry.bbc_fee_addr)?,
			fee_addr: decode_fixed("feeAddr", &entry.fee_addr)?,
			voting_power: parse_voting_power(&entry.voting_power)?,
			bls_public_key: decode_fixed("bLSPublicKey", &entry.bls_public_key)?,
		})
	}
}

fn decode_fixed<const N: usize>(field: &'static str, value: &str) -> Result<[u8; N]> {
	let invalid = || Error::InvalidHex {
		field,
		value: value.to_owned(),
	};
	let bytes = hex::decode(value.trim_start_matches("0x")).map_err(|_| invalid())?;
	bytes.try_into().map_err(|_| invalid())
}

fn parse_voting_power(value: &str) -> Result<u64> {
	let parsed = match value.strip_prefix("0x") {
		Some(hex) => u64::from_str_radix(hex, 16),
		None => value.parse(),
	};
	parsed.map_err(|_| Error::InvalidVotingPower { value: value.to_owned() })
}

/// RLP encode `validators` into the initial validator set package
/// `[0, [validator, ...]]` and return it hex encoded, without `0x` prefix.
pub fn encode_validator_set(validators: &[ValidatorEntry]) -> Result<String> {
	let records = validators
		.iter()
		.map(ValidatorRecord::try_from)
		.collect::<Result<Vec<_>>>()?;

	let package_type = 0u8;
	let payload_length = package_type.length() + alloy_rlp::list_length::<_, ValidatorRecord>(&records);

	let mut out = Vec::with_capacity(payload_length + 4);
	Header {
		list: true,
		payload_length,
	}
	.encode(&mut out);
	package_type.encode(&mut out);
	alloy_rlp::encode_list::<_, ValidatorRecord>(&records, &mut out);

	Ok(hex::encode(out))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::params::{mainnet, testnet};

	const MAINNET_VALIDATORS: &str = include_str!("../res/mainnet-validators.conf");
	const TESTNET_VALIDATORS: &str = include_str!("../res/testnet-validators.conf");

	#[test]
	fn parse_single_record() {
		let validators = parse_validators("0xAAA,0xBBB,0xCCC,100,0xDDD\n").unwrap();

		assert_eq!(
			validators,
			vec![ValidatorEntry {
				consensus_addr: "0xAAA".into(),
				fee_addr: "0xBBB".into(),
				bbc_fee_addr: "0xCCC".into(),
				voting_power: "100".into(),
				bls_public_key: "0xDDD".into(),
			}]
		);
	}

	#[test]
	fn template_field_names() {
		let entry: ValidatorEntry = "0xAAA,0xBBB,0xCCC,100,0xDDD".parse().unwrap();

		assert_eq!(
			serde_json::to_value(entry).unwrap(),
			serde_json::json!({
				"consensusAddr": "0xAAA",
				"feeAddr": "0xBBB",
				"bbcFeeAddr": "0xCCC",
				"votingPower": "100",
				"bLSPublicKey": "0xDDD",
			})
		);
	}

	#[test]
	fn wrong_field_count_names_the_line() {
		let err = parse_validators("0xAAA,0xBBB,0xCCC,100,0xDDD\n0xAAA,0xBBB,0xCCC,100\n").unwrap_err();

		assert!(matches!(err, Error::InvalidValidatorRecord { line } if line == "0xAAA,0xBBB,0xCCC,100"));
		assert!(parse_validators("a,b,c,d,e,f").is_err());
	}

	#[test]
	fn blank_lines_are_rejected() {
		assert_eq!(parse_validators("0xA,0xB,0xC,1,0xD\n0xE,0xF,0x0,2,0x1\n").unwrap().len(), 2);
		assert_eq!(parse_validators("0xA,0xB,0xC,1,0xD").unwrap().len(), 1);

		let err = parse_validators("0xA,0xB,0xC,1,0xD\n\n0xE,0xF,0x0,2,0x1\n").unwrap_err();
		assert!(matches!(err, Error::InvalidValidatorRecord { line } if line.is_empty()));
		assert!(parse_validators("0xA,0xB,0xC,1,0xD\n\n").is_err());
	}

	#[test]
	fn voting_power_accepts_hex_and_decimal() {
		assert_eq!(parse_voting_power("100").unwrap(), 100);
		assert_eq!(parse_voting_power("0x0000000000000064").unwrap(), 100);
		assert!(matches!(parse_voting_power("lots"), Err(Error::InvalidVotingPower { .. })));
	}

	#[test]
	fn rejects_short_addresses() {
		let entry: ValidatorEntry = "0xAAA,0xBBB,0xCCC,100,0xDDD".parse().unwrap();

		assert!(matches!(
			encode_validator_set(&[entry]),
			Err(Error::InvalidHex { field: "consensusAddr", .. })
		));
	}

	#[test]
	fn empty_set() {
		// [0x80, []]
		assert_eq!(encode_validator_set(&[]).unwrap(), "c280c0");
	}

	#[test]
	fn reproduces_mainnet_validator_set() {
		let validators = parse_validators(MAINNET_VALIDATORS).unwrap();

		assert_eq!(validators.len(), 9);
		assert_eq!(encode_validator_set(&validators).unwrap(), mainnet::INIT_VALIDATOR_SET_BYTES);
	}

	#[test]
	fn reproduces_testnet_validator_set() {
		let validators = parse_validators(TESTNET_VALIDATORS).unwrap();

		assert_eq!(encode_validator_set(&validators).unwrap(), testnet::INIT_VALIDATOR_SET_BYTES);
	}
}
