//! Save command implementation for the Strainwise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use strainwise_core::{Category, JsonFileStateStore, StateStore};

use crate::input::{
    catalog_or_default, load_catalog, require_existing, state_or_default, write_json,
};
use crate::{
    ARG_CATALOG, ARG_CATEGORY, ARG_ITEM_ID, ARG_STATE, CliError, ENV_SAVE_CATEGORY,
    ENV_SAVE_ITEM_ID,
};

/// CLI arguments for the `save` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Add a catalog item to the user's saved list for its \
                 category. The item must exist in the catalog.",
    about = "Save a catalog item"
)]
#[ortho_config(prefix = "STRAINWISE")]
pub(crate) struct SaveArgs {
    /// Category of the item: strains, edibles, concentrates or cartridges.
    #[arg(value_name = ARG_CATEGORY)]
    #[serde(default)]
    pub(crate) category: Option<Category>,
    /// Catalog id of the item to save.
    #[arg(value_name = ARG_ITEM_ID)]
    #[serde(default)]
    pub(crate) item_id: Option<String>,
    /// Path to the catalog JSON file (default `catalog.json`).
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to the storefront state file (default `state.json`).
    #[arg(long = ARG_STATE, value_name = "path")]
    #[serde(default)]
    pub(crate) state: Option<Utf8PathBuf>,
}

/// Resolved `save` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SaveConfig {
    pub(crate) category: Category,
    pub(crate) item_id: String,
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) state: Utf8PathBuf,
}

impl TryFrom<SaveArgs> for SaveConfig {
    type Error = CliError;

    fn try_from(args: SaveArgs) -> Result<Self, Self::Error> {
        let category = args.category.ok_or(CliError::MissingArgument {
            field: ARG_CATEGORY,
            env: ENV_SAVE_CATEGORY,
        })?;
        let item_id = args.item_id.ok_or(CliError::MissingArgument {
            field: ARG_ITEM_ID,
            env: ENV_SAVE_ITEM_ID,
        })?;
        Ok(Self {
            category,
            item_id,
            catalog: catalog_or_default(args.catalog),
            state: state_or_default(args.state),
        })
    }
}

/// Saved list printed after a `save` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SavedList {
    pub(crate) category: Category,
    pub(crate) added: bool,
    pub(crate) ids: Vec<String>,
}

pub(super) fn run_save(args: SaveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_save_with(args, &mut stdout)
}

pub(super) fn run_save_with(args: SaveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = SaveConfig::try_from(merged)?;
    require_existing(&config.catalog, ARG_CATALOG)?;

    let catalog = load_catalog(&config.catalog)?;
    if !catalog.contains(config.category, &config.item_id) {
        return Err(CliError::UnknownItem {
            category: config.category,
            id: config.item_id,
        });
    }

    let mut store = JsonFileStateStore::new(config.state);
    let mut state = store.load()?;
    let added = state.saved.save(config.category, config.item_id.as_str());
    store.save(&state)?;
    if !added {
        log::debug!("{} {} was already saved", config.category, config.item_id);
    }

    let ids = state
        .saved
        .ids(config.category)
        .map(|ids| ids.iter().cloned().collect())
        .unwrap_or_default();
    write_json(
        writer,
        &SavedList {
            category: config.category,
            added,
            ids,
        },
    )
}
