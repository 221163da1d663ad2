//! Storefront state: age verification, onboarding answers and saved items.
//!
//! The state is a plain serialisable value. Persistence sits behind the
//! [`StateStore`] trait so callers decide where it lives; the scoring code
//! never sees it.

use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Category, UserPreferences};

#[cfg(feature = "store-json")]
mod json;

#[cfg(feature = "store-json")]
pub use json::JsonFileStateStore;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// When the user confirmed they are of legal age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeVerification {
    /// Confirmation time in seconds since the Unix epoch.
    pub verified_at: u64,
}

/// How long an age verification stays valid.
///
/// # Examples
/// ```
/// use strainwise_core::{AgeVerification, VerificationPolicy};
///
/// let policy = VerificationPolicy::daily();
/// let verification = AgeVerification { verified_at: 1_000 };
/// assert!(policy.is_valid(&verification, 1_000 + 60));
/// assert!(!policy.is_valid(&verification, 1_000 + 2 * 86_400));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationPolicy {
    /// Maximum age of a verification.
    pub max_age: Duration,
}

impl VerificationPolicy {
    /// Verifications expire after `days` days.
    #[must_use]
    pub const fn days(days: u64) -> Self {
        Self {
            max_age: Duration::from_secs(days.saturating_mul(SECONDS_PER_DAY)),
        }
    }

    /// Verifications expire after 24 hours.
    #[must_use]
    pub const fn daily() -> Self {
        Self::days(1)
    }

    /// Report whether `verification` is still valid at `now` (Unix seconds).
    ///
    /// Timestamps in the future are rejected.
    #[must_use]
    pub const fn is_valid(&self, verification: &AgeVerification, now: u64) -> bool {
        match now.checked_sub(verification.verified_at) {
            Some(elapsed) => elapsed <= self.max_age.as_secs(),
            None => false,
        }
    }
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self::days(30)
    }
}

/// Saved item identifiers, one ordered set per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedItems {
    /// Saved strain ids.
    #[serde(default)]
    pub strains: BTreeSet<String>,
    /// Saved edible ids.
    #[serde(default)]
    pub edibles: BTreeSet<String>,
    /// Saved concentrate ids.
    #[serde(default)]
    pub concentrates: BTreeSet<String>,
    /// Saved cartridge ids.
    #[serde(default)]
    pub cartridges: BTreeSet<String>,
}

impl SavedItems {
    /// Add `id` to the saved list for `category`.
    ///
    /// Returns `true` when the id was not already saved. Unknown categories
    /// are ignored and return `false`.
    pub fn save(&mut self, category: Category, id: impl Into<String>) -> bool {
        self.list_mut(category)
            .is_some_and(|list| list.insert(id.into()))
    }

    /// Remove `id` from the saved list for `category`.
    ///
    /// Returns `true` when the id was present.
    pub fn remove(&mut self, category: Category, id: &str) -> bool {
        self.list_mut(category).is_some_and(|list| list.remove(id))
    }

    /// Return the saved ids for `category`.
    #[must_use]
    pub fn ids(&self, category: Category) -> Option<&BTreeSet<String>> {
        match category {
            Category::Strains => Some(&self.strains),
            Category::Edibles => Some(&self.edibles),
            Category::Concentrates => Some(&self.concentrates),
            Category::Cartridges => Some(&self.cartridges),
            Category::Unknown => None,
        }
    }

    const fn list_mut(&mut self, category: Category) -> Option<&mut BTreeSet<String>> {
        match category {
            Category::Strains => Some(&mut self.strains),
            Category::Edibles => Some(&mut self.edibles),
            Category::Concentrates => Some(&mut self.concentrates),
            Category::Cartridges => Some(&mut self.cartridges),
            Category::Unknown => None,
        }
    }
}

/// Everything the storefront remembers between visits.
///
/// # Examples
/// ```
/// use strainwise_core::{StorefrontState, VerificationPolicy};
///
/// let mut state = StorefrontState::default();
/// assert!(!state.is_age_verified(&VerificationPolicy::default(), 10));
/// state.verify_age(10);
/// assert!(state.is_age_verified(&VerificationPolicy::default(), 10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontState {
    /// Most recent age confirmation.
    #[serde(default)]
    pub age_verification: Option<AgeVerification>,
    /// Whether onboarding finished.
    #[serde(default)]
    pub onboarding_complete: bool,
    /// Answers from onboarding.
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
    /// Saved item ids.
    #[serde(default)]
    pub saved: SavedItems,
}

impl StorefrontState {
    /// Record an age confirmation at `now` (Unix seconds).
    pub const fn verify_age(&mut self, now: u64) {
        self.age_verification = Some(AgeVerification { verified_at: now });
    }

    /// Report whether a verification exists and is valid under `policy`.
    #[must_use]
    pub fn is_age_verified(&self, policy: &VerificationPolicy, now: u64) -> bool {
        let Some(verification) = self.age_verification else {
            return false;
        };
        let valid = policy.is_valid(&verification, now);
        if !valid {
            log::warn!(
                "age verification from {} is no longer valid at {now}",
                verification.verified_at
            );
        }
        valid
    }

    /// Store onboarding answers and mark onboarding complete.
    pub fn complete_onboarding(&mut self, preferences: UserPreferences) {
        self.preferences = Some(preferences);
        self.onboarding_complete = true;
    }

    /// Return the stored preferences, or the default profile.
    #[must_use]
    pub fn preferences_or_default(&self) -> UserPreferences {
        self.preferences.clone().unwrap_or_default()
    }
}

/// Errors raised by [`StateStore`] implementations.
#[derive(Debug, Error)]
pub enum StateStoreError {
    /// Reading persisted state failed.
    #[error("failed to read storefront state from {location}")]
    Read {
        /// Where the state was expected.
        location: String,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Persisted state was not valid.
    #[cfg(feature = "store-json")]
    #[error("failed to decode storefront state from {location}")]
    Decode {
        /// Where the state was read from.
        location: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Encoding state failed.
    #[cfg(feature = "store-json")]
    #[error("failed to encode storefront state")]
    Encode(#[source] serde_json::Error),
    /// Writing state failed.
    #[error("failed to write storefront state to {location}")]
    Write {
        /// Where the state was to be written.
        location: String,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}

/// Load and save [`StorefrontState`].
///
/// `load` returns the default state when nothing has been persisted yet.
pub trait StateStore {
    /// Read the current state.
    ///
    /// # Errors
    /// Returns [`StateStoreError`] when existing state cannot be read.
    fn load(&self) -> Result<StorefrontState, StateStoreError>;

    /// Persist `state`, replacing what was stored.
    ///
    /// # Errors
    /// Returns [`StateStoreError`] when the state cannot be written.
    fn save(&mut self, state: &StorefrontState) -> Result<(), StateStoreError>;
}
