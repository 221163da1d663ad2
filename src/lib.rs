//! Facade crate for the Strainwise storefront recommendation engine.
//!
//! This crate re-exports the catalog and preference types, the storefront
//! state, and both scoring heuristics. The JSON state store sits behind the
//! `store-json` feature.

#![forbid(unsafe_code)]

pub use strainwise_core::{
    AgeVerification, Cartridge, Catalog, CatalogError, Category, Concentrate, Edible,
    ExperienceLevel, MAX_SCORE, ParseLabelError, SavedItems, Scorable, Scorer, StateStore,
    StateStoreError, StorefrontState, Strain, StrainType, ThcTolerance, TimeOfUse,
    UserPreferences, VerificationPolicy,
};

#[cfg(feature = "store-json")]
pub use strainwise_core::JsonFileStateStore;

pub use strainwise_scorer::{
    AVOID_WARNING, Compatibility, PreferenceScorer, RankingWeights, RankingWeightsError,
    ScoredItem, calculate_recommendations, check_thc_tolerance, compatibility,
    get_recommendations, thc_score, type_score,
};
