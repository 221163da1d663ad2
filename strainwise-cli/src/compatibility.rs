//! Compatibility command implementation for the Strainwise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use strainwise_core::{Category, JsonFileStateStore};
use strainwise_scorer::{Compatibility, compatibility};

use crate::input::{
    catalog_or_default, load_catalog, load_verified_state, now_unix, require_existing,
    resolve_preferences, state_or_default, write_json,
};
use crate::{
    ARG_CATALOG, ARG_CATEGORY, ARG_ITEM_ID, ARG_PREFERENCES, ARG_STATE, CliError,
    ENV_COMPATIBILITY_ITEM_ID,
};

/// CLI arguments for the `compatibility` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Summarise how well a single catalog item suits the user, \
                 with the reasons it fits and any warnings about avoided \
                 effects or potency. A current age verification is required.",
    about = "Check one item against the user's preferences"
)]
#[ortho_config(prefix = "STRAINWISE")]
pub(crate) struct CompatibilityArgs {
    /// Catalog id of the item to check.
    #[arg(value_name = ARG_ITEM_ID)]
    #[serde(default)]
    pub(crate) item_id: Option<String>,
    /// Path to the catalog JSON file (default `catalog.json`).
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to a JSON file of user preferences.
    #[arg(long = ARG_PREFERENCES, value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Path to the storefront state file (default `state.json`).
    #[arg(long = ARG_STATE, value_name = "path")]
    #[serde(default)]
    pub(crate) state: Option<Utf8PathBuf>,
    /// Category holding the item: strains, concentrates or cartridges.
    #[arg(long = ARG_CATEGORY, value_name = "name")]
    #[serde(default)]
    pub(crate) category: Option<Category>,
}

impl CompatibilityArgs {
    pub(crate) fn into_config(self) -> Result<CompatibilityConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CompatibilityConfig::try_from(merged)
    }
}

/// Resolved `compatibility` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompatibilityConfig {
    pub(crate) item_id: String,
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) preferences: Option<Utf8PathBuf>,
    pub(crate) state: Utf8PathBuf,
    pub(crate) category: Category,
}

impl CompatibilityConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_CATALOG)?;
        if let Some(preferences) = &self.preferences {
            require_existing(preferences, ARG_PREFERENCES)?;
        }
        Ok(())
    }
}

impl TryFrom<CompatibilityArgs> for CompatibilityConfig {
    type Error = CliError;

    fn try_from(args: CompatibilityArgs) -> Result<Self, Self::Error> {
        let item_id = args.item_id.ok_or(CliError::MissingArgument {
            field: ARG_ITEM_ID,
            env: ENV_COMPATIBILITY_ITEM_ID,
        })?;
        Ok(Self {
            item_id,
            catalog: catalog_or_default(args.catalog),
            preferences: args.preferences,
            state: state_or_default(args.state),
            category: args.category.unwrap_or(Category::Strains),
        })
    }
}

/// Compatibility summary as printed by the `compatibility` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CompatibilityReport {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(flatten)]
    pub(crate) summary: Compatibility,
}

pub(super) fn run_compatibility(args: CompatibilityArgs) -> Result<(), CliError> {
    let now = now_unix()?;
    let mut stdout = std::io::stdout().lock();
    run_compatibility_with(args, now, &mut stdout)
}

pub(super) fn run_compatibility_with(
    args: CompatibilityArgs,
    now: u64,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let report = execute_compatibility(args, now)?;
    write_json(writer, &report)
}

fn execute_compatibility(
    args: CompatibilityArgs,
    now: u64,
) -> Result<CompatibilityReport, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;

    let store = JsonFileStateStore::new(config.state.clone());
    let state = load_verified_state(&store, now)?;
    let preferences = resolve_preferences(config.preferences.as_deref(), &state)?;
    let catalog = load_catalog(&config.catalog)?;
    let items = catalog
        .scorable(config.category)
        .ok_or(CliError::UnrankableCategory {
            category: config.category,
        })?;
    let item = items
        .into_iter()
        .find(|candidate| candidate.id() == config.item_id)
        .ok_or_else(|| CliError::UnknownItem {
            category: config.category,
            id: config.item_id.clone(),
        })?;

    Ok(CompatibilityReport {
        id: item.id().to_owned(),
        name: item.name().to_owned(),
        summary: compatibility(item, &preferences),
    })
}
