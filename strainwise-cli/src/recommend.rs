//! Recommend command implementation for the Strainwise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use strainwise_core::{Category, JsonFileStateStore, Scorable};
use strainwise_scorer::{PreferenceScorer, RankingWeights};

use crate::input::{
    catalog_or_default, load_catalog, load_verified_state, now_unix, require_existing,
    resolve_preferences, state_or_default, write_json,
};
use crate::{ARG_CATALOG, ARG_CATEGORY, ARG_LIMIT, ARG_PREFERENCES, ARG_STATE, CliError};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank one catalog category against the user's preferences. \
                 Preferences come from --preferences when given, otherwise \
                 from the answers stored by `onboard`, otherwise a default \
                 profile. A current age verification is required.",
    about = "Rank catalog items for the user"
)]
#[ortho_config(prefix = "STRAINWISE")]
pub(crate) struct RecommendArgs {
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
    /// Category to rank: strains, concentrates or cartridges.
    #[arg(long = ARG_CATEGORY, value_name = "name")]
    #[serde(default)]
    pub(crate) category: Option<Category>,
    /// Maximum number of results.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) preferences: Option<Utf8PathBuf>,
    pub(crate) state: Utf8PathBuf,
    pub(crate) category: Category,
    pub(crate) limit: usize,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_CATALOG)?;
        if let Some(preferences) = &self.preferences {
            require_existing(preferences, ARG_PREFERENCES)?;
        }
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            catalog: catalog_or_default(args.catalog),
            preferences: args.preferences,
            state: state_or_default(args.state),
            category: args.category.unwrap_or(Category::Strains),
            limit: args.limit.unwrap_or(RankingWeights::default().limit),
        })
    }
}

/// One ranked item as printed by `recommend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Recommendation {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) score: f32,
    pub(crate) reasons: Vec<String>,
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let now = now_unix()?;
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, now, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    now: u64,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let recommendations = execute_recommend(args, now)?;
    write_json(writer, &recommendations)
}

fn execute_recommend(args: RecommendArgs, now: u64) -> Result<Vec<Recommendation>, CliError> {
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

    let scorer = PreferenceScorer::new(RankingWeights {
        limit: config.limit,
        ..RankingWeights::default()
    })?;
    let ranked = scorer
        .rank(&items, &preferences)
        .into_iter()
        .map(|scored| Recommendation {
            id: scored.item.id().to_owned(),
            name: scored.item.name().to_owned(),
            score: scored.score,
            reasons: scored.reasons,
        })
        .collect::<Vec<_>>();
    log::info!(
        "ranked {} of {} {} for {}",
        ranked.len(),
        items.len(),
        config.category,
        config.catalog
    );
    Ok(ranked)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
