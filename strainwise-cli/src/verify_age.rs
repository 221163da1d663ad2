//! Verify-age command implementation for the Strainwise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use strainwise_core::{AgeVerification, JsonFileStateStore, StateStore};

use crate::input::{now_unix, state_or_default, write_json};
use crate::{ARG_CONFIRM, ARG_STATE, CliError};

/// CLI arguments for the `verify-age` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Record that the user confirmed they are of legal age. \
                 Recommendations stay unlocked until the confirmation \
                 expires.",
    about = "Confirm the user is of legal age"
)]
#[ortho_config(prefix = "STRAINWISE")]
pub(crate) struct VerifyAgeArgs {
    /// Confirm that you are of legal age.
    #[arg(long = ARG_CONFIRM)]
    #[serde(default)]
    pub(crate) confirm: bool,
    /// Path to the storefront state file (default `state.json`).
    #[arg(long = ARG_STATE, value_name = "path")]
    #[serde(default)]
    pub(crate) state: Option<Utf8PathBuf>,
}

pub(super) fn run_verify_age(args: VerifyAgeArgs) -> Result<(), CliError> {
    let now = now_unix()?;
    let mut stdout = std::io::stdout().lock();
    run_verify_age_with(args, now, &mut stdout)
}

pub(super) fn run_verify_age_with(
    args: VerifyAgeArgs,
    now: u64,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    if !merged.confirm {
        return Err(CliError::ConfirmationRequired);
    }
    let mut store = JsonFileStateStore::new(state_or_default(merged.state));
    let mut state = store.load()?;
    state.verify_age(now);
    store.save(&state)?;
    log::info!("recorded age verification in {}", store.path());
    write_json(writer, &AgeVerification { verified_at: now })
}
