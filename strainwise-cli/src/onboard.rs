//! Onboard command implementation for the Strainwise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use strainwise_core::{JsonFileStateStore, StateStore, UserPreferences};

use crate::input::{load_json, require_existing, state_or_default, write_json};
use crate::{ARG_PREFERENCES, ARG_STATE, CliError, ENV_ONBOARD_PREFERENCES};

/// CLI arguments for the `onboard` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Store the answers from the onboarding questionnaire as the \
                 user's preferences. Later `recommend` and `compatibility` \
                 runs use them when no --preferences file is given.",
    about = "Save onboarding preferences"
)]
#[ortho_config(prefix = "STRAINWISE")]
pub(crate) struct OnboardArgs {
    /// Path to a JSON file of user preferences.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Path to the storefront state file (default `state.json`).
    #[arg(long = ARG_STATE, value_name = "path")]
    #[serde(default)]
    pub(crate) state: Option<Utf8PathBuf>,
}

/// Resolved `onboard` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OnboardConfig {
    pub(crate) preferences: Utf8PathBuf,
    pub(crate) state: Utf8PathBuf,
}

impl TryFrom<OnboardArgs> for OnboardConfig {
    type Error = CliError;

    fn try_from(args: OnboardArgs) -> Result<Self, Self::Error> {
        let preferences = args.preferences.ok_or(CliError::MissingArgument {
            field: ARG_PREFERENCES,
            env: ENV_ONBOARD_PREFERENCES,
        })?;
        Ok(Self {
            preferences,
            state: state_or_default(args.state),
        })
    }
}

pub(super) fn run_onboard(args: OnboardArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_onboard_with(args, &mut stdout)
}

pub(super) fn run_onboard_with(args: OnboardArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = OnboardConfig::try_from(merged)?;
    require_existing(&config.preferences, ARG_PREFERENCES)?;

    let preferences: UserPreferences = load_json(&config.preferences, ARG_PREFERENCES)?;
    let mut store = JsonFileStateStore::new(config.state);
    let mut state = store.load()?;
    state.complete_onboarding(preferences.clone());
    store.save(&state)?;
    log::info!("stored onboarding preferences in {}", store.path());
    write_json(writer, &preferences)
}
