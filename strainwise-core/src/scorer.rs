//! Score catalog items for a set of user preferences.
//!
//! The `Scorer` trait turns a [`Scorable`](crate::Scorable) item and a
//! [`UserPreferences`](crate::UserPreferences) record into an [`Assessment`]:
//! a score on the `0.0..=100.0` scale plus human-readable reasons.

use crate::{Scorable, UserPreferences};

/// Upper bound of every score.
pub const MAX_SCORE: f32 = 100.0;

/// A score together with the reasons that produced it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assessment {
    /// Score in `0.0..=MAX_SCORE`.
    pub score: f32,
    /// Ordered, human-readable explanations.
    pub reasons: Vec<String>,
}

/// Calculate a preference score for a catalog item.
///
/// Higher scores indicate a better match. Implementations must be
/// thread-safe (`Send` + `Sync`) and infallible: malformed inputs degrade the
/// score rather than erroring.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Keep results within `0.0..=MAX_SCORE`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use strainwise_core::{Assessment, Scorable, Scorer, Strain, StrainType, UserPreferences};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn assess(&self, _item: &dyn Scorable, _preferences: &UserPreferences) -> Assessment {
///         Assessment { score: 50.0, reasons: Vec::new() }
///     }
/// }
///
/// let strain = Strain::new("s1", "Sour Diesel", StrainType::Sativa);
/// let assessment = FlatScorer.assess(&strain, &UserPreferences::default());
/// assert_eq!(assessment.score, 50.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Assess `item` against `preferences`.
    fn assess(&self, item: &dyn Scorable, preferences: &UserPreferences) -> Assessment;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=MAX_SCORE`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, MAX_SCORE)
    }
}
