//! Preference-weighted ranking of catalog items.
//!
//! Each item accumulates points from five components (effect overlap,
//! medical overlap, THC fit, type/time affinity and rating), is halved when
//! it carries an effect the user wants to avoid, and is clamped to
//! `0.0..=100.0`. Results are ordered by descending score and truncated.

use serde::{Deserialize, Serialize};
use strainwise_core::{Assessment, Scorable, Scorer, ThcTolerance, TimeOfUse, UserPreferences};

use crate::RankingWeightsError;
use crate::fit::{overlap, ratio, thc_score, type_score};

/// Reason appended when an item carries an effect the user avoids.
pub const AVOID_WARNING: &str = "⚠️ Contains effects you prefer to avoid";

/// THC fit above which the tolerance reason is reported.
const THC_REASON_THRESHOLD: f32 = 0.7;

/// Rating at or above which the rating reason is reported.
const HIGH_RATING: f32 = 4.5;

/// Tunable weights for [`PreferenceScorer`].
///
/// The defaults give 40 points to effects, 25 to medical uses (12.5 when the
/// user lists no conditions), 20 to THC fit, 10 to type/time affinity and 5
/// to rating, halve the score on an avoided effect, and keep 20 results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingWeights {
    /// Points for a full desired-effect match.
    pub effects: f32,
    /// Points for a full medical-condition match.
    pub medical: f32,
    /// Flat points awarded when the user lists no medical conditions.
    pub medical_baseline: f32,
    /// Points for a perfect THC fit.
    pub thc: f32,
    /// Points for a perfect type/time affinity.
    pub strain_type: f32,
    /// Points for a five-star rating.
    pub rating: f32,
    /// Multiplier applied when an avoided effect is present.
    pub avoid_penalty: f32,
    /// Maximum number of ranked results.
    pub limit: usize,
}

impl RankingWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`RankingWeightsError::InvalidWeight`] when a component weight
    /// is negative or not finite, and
    /// [`RankingWeightsError::InvalidPenalty`] when the avoid multiplier lies
    /// outside `0.0..=1.0`.
    pub fn validate(self) -> Result<Self, RankingWeightsError> {
        let components = [
            ("effects", self.effects),
            ("medical", self.medical),
            ("medical_baseline", self.medical_baseline),
            ("thc", self.thc),
            ("strain_type", self.strain_type),
            ("rating", self.rating),
        ];
        if let Some((name, value)) = components
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(RankingWeightsError::InvalidWeight { name, value });
        }
        if !(0.0..=1.0).contains(&self.avoid_penalty) {
            return Err(RankingWeightsError::InvalidPenalty {
                value: self.avoid_penalty,
            });
        }
        Ok(self)
    }
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            effects: 40.0,
            medical: 25.0,
            medical_baseline: 12.5,
            thc: 20.0,
            strain_type: 10.0,
            rating: 5.0,
            avoid_penalty: 0.5,
            limit: 20,
        }
    }
}

/// A catalog item annotated with its score and reasons.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem<'a, T> {
    /// The ranked item.
    pub item: &'a T,
    /// Score in `0.0..=100.0`.
    pub score: f32,
    /// Human-readable explanations, in component order.
    pub reasons: Vec<String>,
}

/// Ranks catalog items against user preferences.
///
/// # Examples
/// ```
/// use strainwise_core::{Scorer, Strain, StrainType, UserPreferences};
/// use strainwise_scorer::PreferenceScorer;
///
/// let strain = Strain::new("gdp", "Granddaddy Purple", StrainType::Indica)
///     .with_thc(18.0)
///     .with_rating(5.0)
///     .with_effects(["relaxed", "happy"]);
/// let assessment = PreferenceScorer::default().assess(&strain, &UserPreferences::default());
/// assert_eq!(assessment.score, 87.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PreferenceScorer {
    weights: RankingWeights,
}

impl PreferenceScorer {
    /// Construct a scorer from validated weights.
    ///
    /// # Errors
    /// Propagates [`RankingWeights::validate`] failures.
    pub fn new(weights: RankingWeights) -> Result<Self, RankingWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> &RankingWeights {
        &self.weights
    }

    /// Score every item, sort by descending score, and keep the top results.
    ///
    /// The sort is stable: items with equal scores keep their input order.
    #[must_use]
    pub fn rank<'a, T: Scorable>(
        &self,
        items: &'a [T],
        preferences: &UserPreferences,
    ) -> Vec<ScoredItem<'a, T>> {
        warn_on_unknown_labels(preferences);
        let mut scored: Vec<ScoredItem<'a, T>> = items
            .iter()
            .map(|item| {
                let Assessment { score, reasons } = self.assess(item, preferences);
                ScoredItem {
                    item,
                    score,
                    reasons,
                }
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.weights.limit);
        log::debug!(
            "ranked {} of {} items; top score {}",
            scored.len(),
            items.len(),
            scored.first().map_or(0.0, |top| top.score)
        );
        scored
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "component scores are weighted ratios"
    )]
    fn effect_points(
        &self,
        item: &dyn Scorable,
        preferences: &UserPreferences,
    ) -> (f32, Option<String>) {
        let desired = &preferences.desired_effects;
        let matches = overlap(item.effects(), desired).len();
        let points = ratio(matches, desired.len().max(1)) * self.weights.effects;
        let reason = (matches > 0).then(|| format!("Matches {matches} desired effect(s)"));
        (points, reason)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "component scores are weighted ratios"
    )]
    fn medical_points(
        &self,
        item: &dyn Scorable,
        preferences: &UserPreferences,
    ) -> (f32, Option<String>) {
        let conditions = &preferences.medical_conditions;
        if conditions.is_empty() {
            return (self.weights.medical_baseline, None);
        }
        let matches = overlap(item.medical_uses(), conditions).len();
        let points = ratio(matches, conditions.len()) * self.weights.medical;
        let reason = (matches > 0).then(|| format!("Helpful for {matches} medical condition(s)"));
        (points, reason)
    }
}

impl Scorer for PreferenceScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "ranking sums weighted components and applies a multiplier"
    )]
    fn assess(&self, item: &dyn Scorable, preferences: &UserPreferences) -> Assessment {
        let mut reasons = Vec::new();

        let (effect_points, effect_reason) = self.effect_points(item, preferences);
        reasons.extend(effect_reason);

        let (medical_points, medical_reason) = self.medical_points(item, preferences);
        reasons.extend(medical_reason);

        let thc_fit = thc_score(item.thc(), preferences.thc_tolerance);
        if thc_fit > THC_REASON_THRESHOLD {
            reasons.push("THC level matches your tolerance".to_owned());
        }

        let type_fit = type_score(item.strain_type(), preferences.preferred_time_of_use);

        let rating = item.rating();
        if rating >= HIGH_RATING {
            reasons.push(format!("Highly rated ({rating}/5)"));
        }

        let mut score = effect_points
            + medical_points
            + thc_fit * self.weights.thc
            + type_fit * self.weights.strain_type
            + (rating / 5.0) * self.weights.rating;

        if !overlap(item.effects(), &preferences.avoid_effects).is_empty() {
            score *= self.weights.avoid_penalty;
            reasons.push(AVOID_WARNING.to_owned());
        }

        Assessment {
            score: <Self as Scorer>::sanitise(score),
            reasons,
        }
    }
}

fn warn_on_unknown_labels(preferences: &UserPreferences) {
    if preferences.thc_tolerance == ThcTolerance::Unknown {
        log::warn!("unrecognised THC tolerance; scoring THC fit neutrally");
    }
    if preferences.preferred_time_of_use == TimeOfUse::Unknown {
        log::warn!("unrecognised time of use; scoring type affinity neutrally");
    }
}

/// Rank `items` for `preferences` with the default weights.
///
/// Returns at most 20 results ordered by descending score.
///
/// # Examples
/// ```
/// use strainwise_core::{Strain, StrainType, UserPreferences};
/// use strainwise_scorer::calculate_recommendations;
///
/// let items = vec![
///     Strain::new("a", "Sleepy", StrainType::Indica).with_effects(["sleepy"]),
///     Strain::new("b", "Calm", StrainType::Indica).with_effects(["relaxed"]),
/// ];
/// let ranked = calculate_recommendations(&items, &UserPreferences::default());
/// assert_eq!(ranked[0].item.id, "b");
/// ```
#[must_use]
pub fn calculate_recommendations<'a, T: Scorable>(
    items: &'a [T],
    preferences: &UserPreferences,
) -> Vec<ScoredItem<'a, T>> {
    PreferenceScorer::default().rank(items, preferences)
}

/// Rank `items` and return only the ordered items.
#[must_use]
pub fn get_recommendations<'a, T: Scorable>(
    preferences: &UserPreferences,
    items: &'a [T],
) -> Vec<&'a T> {
    calculate_recommendations(items, preferences)
        .into_iter()
        .map(|scored| scored.item)
        .collect()
}
