//! Command-line interface for the Strainwise storefront.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod compatibility;
mod error;
mod input;
mod onboard;
mod recommend;
mod save;
mod verify_age;

pub use error::CliError;

use compatibility::{CompatibilityArgs, run_compatibility};
use onboard::{OnboardArgs, run_onboard};
use recommend::{RecommendArgs, run_recommend};
use save::{SaveArgs, run_save};
use verify_age::{VerifyAgeArgs, run_verify_age};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_PREFERENCES: &str = "preferences";
pub(crate) const ARG_STATE: &str = "state";
pub(crate) const ARG_CATEGORY: &str = "category";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_ITEM_ID: &str = "item-id";
pub(crate) const ARG_CONFIRM: &str = "confirm";
pub(crate) const ENV_COMPATIBILITY_ITEM_ID: &str = "STRAINWISE_CMDS_COMPATIBILITY_ITEM_ID";
pub(crate) const ENV_ONBOARD_PREFERENCES: &str = "STRAINWISE_CMDS_ONBOARD_PREFERENCES";
pub(crate) const ENV_SAVE_CATEGORY: &str = "STRAINWISE_CMDS_SAVE_CATEGORY";
pub(crate) const ENV_SAVE_ITEM_ID: &str = "STRAINWISE_CMDS_SAVE_ITEM_ID";

/// Run the Strainwise CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Compatibility(args) => run_compatibility(args),
        Command::VerifyAge(args) => run_verify_age(args),
        Command::Onboard(args) => run_onboard(args),
        Command::Save(args) => run_save(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "strainwise",
    about = "Personalised recommendations for a cannabis storefront catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank catalog items against the user's preferences.
    Recommend(RecommendArgs),
    /// Summarise how well one item suits the user.
    Compatibility(CompatibilityArgs),
    /// Record that the user confirmed they are of legal age.
    VerifyAge(VerifyAgeArgs),
    /// Store onboarding answers as the user's preferences.
    Onboard(OnboardArgs),
    /// Add a catalog item to the user's saved list.
    Save(SaveArgs),
}

#[cfg(test)]
mod tests;
