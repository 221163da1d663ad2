//! Single-item compatibility summary for detail views.
//!
//! This heuristic is weighted independently of the ranking score: effects are
//! worth up to 50 points, an acceptable THC level 20, and the rating up to 30.
//! An avoided effect subtracts 20 points instead of halving the total.

use serde::{Deserialize, Serialize};
use strainwise_core::{ExperienceLevel, MAX_SCORE, Scorable, UserPreferences};

use crate::fit::{check_thc_tolerance, overlap, ratio};

const EFFECT_POINTS: f32 = 50.0;
const AVOID_DEDUCTION: f32 = 20.0;
const THC_POINTS: f32 = 20.0;
const RATING_POINTS: f32 = 30.0;
const BEGINNER_THC_LIMIT: f32 = 20.0;

/// Compatibility percentage with supporting reasons and warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compatibility {
    /// Percentage in `0.0..=100.0`.
    pub compatibility: f32,
    /// Positive observations.
    pub reasons: Vec<String>,
    /// Cautions for the user.
    pub warnings: Vec<String>,
}

/// Summarise how well `item` suits `preferences`.
///
/// # Examples
/// ```
/// use strainwise_core::{Strain, StrainType, UserPreferences};
/// use strainwise_scorer::compatibility;
///
/// let strain = Strain::new("bd", "Blue Dream", StrainType::Hybrid)
///     .with_thc(18.0)
///     .with_rating(5.0)
///     .with_effects(["relaxed", "happy"]);
/// let summary = compatibility(&strain, &UserPreferences::default());
/// assert_eq!(summary.compatibility, 100.0);
/// assert!(summary.warnings.is_empty());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "compatibility adds and subtracts weighted components"
)]
pub fn compatibility(item: &dyn Scorable, preferences: &UserPreferences) -> Compatibility {
    let mut total = 0.0_f32;
    let mut reasons = Vec::new();
    let mut warnings = Vec::new();

    let desired = &preferences.desired_effects;
    let matches = overlap(item.effects(), desired).len();
    if !desired.is_empty() {
        total += ratio(matches, desired.len()) * EFFECT_POINTS;
    }
    if matches > 0 {
        reasons.push(format!(
            "Matches {matches} of {} desired effect(s)",
            desired.len()
        ));
    }

    let avoided = overlap(item.effects(), &preferences.avoid_effects);
    if !avoided.is_empty() {
        let listed: Vec<&str> = avoided.into_iter().collect();
        warnings.push(format!(
            "Contains effects you want to avoid: {}",
            listed.join(", ")
        ));
        total -= AVOID_DEDUCTION;
    }

    let thc = item.thc();
    if let Some(warning) = check_thc_tolerance(thc, preferences.thc_tolerance) {
        warnings.push(warning);
    } else {
        total += THC_POINTS;
        reasons.push("THC level suits your tolerance".to_owned());
    }

    if preferences.experience_level == ExperienceLevel::Beginner && thc > BEGINNER_THC_LIMIT {
        warnings.push(format!(
            "THC {thc}% is high for a beginner; start with a small amount"
        ));
    }

    total += (item.rating() / 5.0) * RATING_POINTS;

    let compatibility = if total.is_finite() {
        total.clamp(0.0, MAX_SCORE)
    } else {
        0.0
    };
    Compatibility {
        compatibility,
        reasons,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use strainwise_core::test_support::strain;
    use strainwise_core::{StrainType, ThcTolerance, TimeOfUse};

    #[fixture]
    fn beginner() -> UserPreferences {
        UserPreferences::new(
            ExperienceLevel::Beginner,
            ThcTolerance::Low,
            TimeOfUse::Night,
        )
        .with_desired_effects(["sleepy", "relaxed"])
        .with_avoid_effects(["paranoid", "anxious"])
    }

    #[rstest]
    fn avoided_effects_subtract_and_are_listed(beginner: UserPreferences) {
        let item = strain(
            "edgy",
            StrainType::Indica,
            12.0,
            5.0,
            &["sleepy", "paranoid", "anxious"],
            &[],
        );
        let summary = compatibility(&item, &beginner);
        // 25 (half the effects) - 20 + 20 (THC fits) + 30 (rating)
        assert_eq!(summary.compatibility, 55.0);
        assert_eq!(
            summary.warnings,
            vec!["Contains effects you want to avoid: anxious, paranoid".to_owned()]
        );
        assert_eq!(
            summary.reasons.first().map(String::as_str),
            Some("Matches 1 of 2 desired effect(s)")
        );
    }

    #[rstest]
    fn strong_product_warns_beginner_twice(beginner: UserPreferences) {
        let item = strain("strong", StrainType::Indica, 26.0, 2.5, &["relaxed"], &[]);
        let summary = compatibility(&item, &beginner);
        // 25 (half the effects) + 15 (rating), no THC points
        assert_eq!(summary.compatibility, 40.0);
        match summary.warnings.as_slice() {
            [tolerance, experience] => {
                assert!(tolerance.contains("low tolerance"));
                assert!(experience.contains("beginner"));
            }
            other => panic!("expected two warnings, got {other:?}"),
        }
    }

    #[rstest]
    fn score_never_drops_below_zero() {
        let preferences = UserPreferences::new(
            ExperienceLevel::Experienced,
            ThcTolerance::High,
            TimeOfUse::Morning,
        )
        .with_desired_effects(["focused"])
        .with_avoid_effects(["sleepy"]);
        let item = strain("weak", StrainType::Indica, 5.0, 0.0, &["sleepy"], &[]);
        let summary = compatibility(&item, &preferences);
        assert_eq!(summary.compatibility, 0.0);
    }

    #[rstest]
    fn empty_desired_effects_contribute_nothing() {
        let preferences = UserPreferences::default().with_desired_effects(Vec::<String>::new());
        let item = strain("plain", StrainType::Hybrid, 18.0, 5.0, &["happy"], &[]);
        let summary = compatibility(&item, &preferences);
        assert_eq!(summary.compatibility, 50.0);
        assert_eq!(summary.reasons, vec!["THC level suits your tolerance".to_owned()]);
    }
}
