use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Layer config files and `INITZ__*` variables, put the CLI flags on top and
/// validate the result.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = build_config(cli)?
		.try_deserialize()
		.context("configuration does not match the expected layout")?;
	raw.apply_cli_overrides(cli);
	let resolved = raw.resolve(cli)?;
	log::debug!("resolved configuration: {resolved:?}");
	Ok(resolved)
}
