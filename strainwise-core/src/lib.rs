//! Core domain types for the Strainwise recommendation engine.
//!
//! The crate models the product catalog as a closed set of per-category
//! records, captures onboarding answers as [`UserPreferences`], and defines
//! the [`Scorer`] seam used by ranking implementations. Storefront state that
//! a browser would keep in local storage is modelled explicitly by
//! [`StorefrontState`] and persisted through the [`StateStore`] trait.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod label;

pub mod catalog;
pub mod preferences;
pub mod scorer;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{
    Cartridge, Catalog, CatalogError, Category, Concentrate, Edible, Scorable, Strain, StrainType,
};
pub use label::ParseLabelError;
pub use preferences::{ExperienceLevel, ThcTolerance, TimeOfUse, UserPreferences};
pub use scorer::{Assessment, MAX_SCORE, Scorer};
#[cfg(feature = "store-json")]
pub use state::JsonFileStateStore;
pub use state::{
    AgeVerification, SavedItems, StateStore, StateStoreError, StorefrontState,
    VerificationPolicy,
};
