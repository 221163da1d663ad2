//! Scoring for the Strainwise storefront.
//!
//! The crate provides two independent heuristics:
//! - **Ranking** orders rankable catalog items for a set of
//!   [`UserPreferences`](strainwise_core::UserPreferences). It weighs effect
//!   overlap, medical overlap, THC fit, type/time affinity and rating, halves
//!   items carrying an avoided effect, and keeps the top 20. The
//!   [`PreferenceScorer`] implements the
//!   [`Scorer`](strainwise_core::Scorer) trait.
//! - **Compatibility** summarises one item for a detail view as a percentage
//!   with separate reasons and warnings.
//!
//! Both are pure: the same inputs always produce the same output.
//!
//! # Examples
//!
//! ```
//! use strainwise_core::{Strain, StrainType, UserPreferences};
//! use strainwise_scorer::get_recommendations;
//!
//! let catalog = vec![
//!     Strain::new("sd", "Sour Diesel", StrainType::Sativa).with_thc(22.0),
//!     Strain::new("gdp", "Granddaddy Purple", StrainType::Indica).with_thc(20.0),
//! ];
//! let ranked = get_recommendations(&UserPreferences::default(), &catalog);
//! assert_eq!(ranked[0].id, "gdp");
//! ```

#![forbid(unsafe_code)]

mod compatibility;
mod error;
mod fit;
mod ranking;

pub use compatibility::{Compatibility, compatibility};
pub use error::RankingWeightsError;
pub use fit::{NEUTRAL_FIT, check_thc_tolerance, thc_score, type_score};
pub use ranking::{
    AVOID_WARNING, PreferenceScorer, RankingWeights, ScoredItem, calculate_recommendations,
    get_recommendations,
};
