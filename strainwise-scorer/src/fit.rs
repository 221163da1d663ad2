//! Fit coefficients shared by the ranking and compatibility scorers.

use std::collections::BTreeSet;

use strainwise_core::{StrainType, ThcTolerance, TimeOfUse};

/// Coefficient used when an input falls outside the known buckets.
pub const NEUTRAL_FIT: f32 = 0.5;

/// Map a THC percentage and a tolerance bucket to a fit in `0.0..=1.0`.
///
/// Bounds are inclusive.
///
/// | tolerance | 1.0 | second band | otherwise |
/// |---|---|---|---|
/// | low | `thc <= 15` | `thc <= 20` → 0.7 | 0.3 |
/// | medium | `15..=25` | `10..=30` → 0.8 | 0.5 |
/// | high | `thc >= 20` | `thc >= 15` → 0.7 | 0.4 |
///
/// An unknown tolerance scores [`NEUTRAL_FIT`].
///
/// # Examples
/// ```
/// use strainwise_core::ThcTolerance;
/// use strainwise_scorer::thc_score;
///
/// assert_eq!(thc_score(15.0, ThcTolerance::Low), 1.0);
/// assert_eq!(thc_score(15.01, ThcTolerance::Low), 0.7);
/// assert_eq!(thc_score(12.0, ThcTolerance::Unknown), 0.5);
/// ```
#[must_use]
pub fn thc_score(thc: f32, tolerance: ThcTolerance) -> f32 {
    match tolerance {
        ThcTolerance::Low if thc <= 15.0 => 1.0,
        ThcTolerance::Low if thc <= 20.0 => 0.7,
        ThcTolerance::Low => 0.3,
        ThcTolerance::Medium if (15.0..=25.0).contains(&thc) => 1.0,
        ThcTolerance::Medium if (10.0..=30.0).contains(&thc) => 0.8,
        ThcTolerance::Medium => 0.5,
        ThcTolerance::High if thc >= 20.0 => 1.0,
        ThcTolerance::High if thc >= 15.0 => 0.7,
        ThcTolerance::High => 0.4,
        ThcTolerance::Unknown => NEUTRAL_FIT,
    }
}

/// Affinity between a strain type and the preferred time of use.
///
/// | time | sativa | hybrid | indica |
/// |---|---|---|---|
/// | morning | 1.0 | 0.7 | 0.3 |
/// | afternoon | 0.8 | 1.0 | 0.6 |
/// | evening | 0.4 | 0.8 | 1.0 |
/// | night | 0.2 | 0.5 | 1.0 |
///
/// Any pair involving an unknown value scores [`NEUTRAL_FIT`].
///
/// # Examples
/// ```
/// use strainwise_core::{StrainType, TimeOfUse};
/// use strainwise_scorer::type_score;
///
/// assert_eq!(type_score(StrainType::Sativa, TimeOfUse::Morning), 1.0);
/// assert_eq!(type_score(StrainType::Hybrid, TimeOfUse::Unknown), 0.5);
/// ```
#[must_use]
pub const fn type_score(strain_type: StrainType, time_of_use: TimeOfUse) -> f32 {
    match (time_of_use, strain_type) {
        (TimeOfUse::Morning, StrainType::Sativa)
        | (TimeOfUse::Afternoon, StrainType::Hybrid)
        | (TimeOfUse::Evening | TimeOfUse::Night, StrainType::Indica) => 1.0,
        (TimeOfUse::Afternoon, StrainType::Sativa) | (TimeOfUse::Evening, StrainType::Hybrid) => {
            0.8
        }
        (TimeOfUse::Morning, StrainType::Hybrid) => 0.7,
        (TimeOfUse::Afternoon, StrainType::Indica) => 0.6,
        (TimeOfUse::Night, StrainType::Hybrid) => NEUTRAL_FIT,
        (TimeOfUse::Evening, StrainType::Sativa) => 0.4,
        (TimeOfUse::Morning, StrainType::Indica) => 0.3,
        (TimeOfUse::Night, StrainType::Sativa) => 0.2,
        (TimeOfUse::Unknown, _) | (_, StrainType::Unknown) => NEUTRAL_FIT,
    }
}

/// Warn when a THC percentage sits outside what a tolerance bucket expects.
///
/// Low tolerance warns above 20%, medium above 30%, and high below 15%.
/// These thresholds are independent of [`thc_score`].
///
/// # Examples
/// ```
/// use strainwise_core::ThcTolerance;
/// use strainwise_scorer::check_thc_tolerance;
///
/// assert!(check_thc_tolerance(22.0, ThcTolerance::Low).is_some());
/// assert!(check_thc_tolerance(22.0, ThcTolerance::Medium).is_none());
/// ```
#[must_use]
pub fn check_thc_tolerance(thc: f32, tolerance: ThcTolerance) -> Option<String> {
    match tolerance {
        ThcTolerance::Low if thc > 20.0 => Some(format!(
            "THC {thc}% may be too strong for a low tolerance"
        )),
        ThcTolerance::Medium if thc > 30.0 => Some(format!(
            "THC {thc}% is above a medium tolerance"
        )),
        ThcTolerance::High if thc < 15.0 => Some(format!(
            "THC {thc}% may feel mild for a high tolerance"
        )),
        _ => None,
    }
}

/// Distinct labels of `labels` that also appear in `wanted`, in sorted order.
pub(crate) fn overlap<'a>(labels: &'a [String], wanted: &BTreeSet<String>) -> BTreeSet<&'a str> {
    labels
        .iter()
        .map(String::as_str)
        .filter(|label| wanted.contains(*label))
        .collect()
}

/// Convert a small count to `f32` without a lossy cast.
pub(crate) fn count_as_f32(count: usize) -> f32 {
    u16::try_from(count).map_or(f32::from(u16::MAX), f32::from)
}

/// `part / whole` for counts, with the caller guaranteeing `whole > 0`.
#[expect(
    clippy::float_arithmetic,
    reason = "overlap ratios divide match counts by set sizes"
)]
pub(crate) fn ratio(part: usize, whole: usize) -> f32 {
    count_as_f32(part) / count_as_f32(whole)
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ThcTolerance::Low, 15.0, 1.0)]
    #[case(ThcTolerance::Low, 15.01, 0.7)]
    #[case(ThcTolerance::Low, 20.0, 0.7)]
    #[case(ThcTolerance::Low, 20.5, 0.3)]
    #[case(ThcTolerance::Medium, 15.0, 1.0)]
    #[case(ThcTolerance::Medium, 25.0, 1.0)]
    #[case(ThcTolerance::Medium, 10.0, 0.8)]
    #[case(ThcTolerance::Medium, 30.0, 0.8)]
    #[case(ThcTolerance::Medium, 31.0, 0.5)]
    #[case(ThcTolerance::Medium, 9.0, 0.5)]
    #[case(ThcTolerance::High, 20.0, 1.0)]
    #[case(ThcTolerance::High, 15.0, 0.7)]
    #[case(ThcTolerance::High, 14.9, 0.4)]
    #[case(ThcTolerance::Unknown, 18.0, 0.5)]
    fn thc_score_buckets(#[case] tolerance: ThcTolerance, #[case] thc: f32, #[case] expected: f32) {
        assert_eq!(thc_score(thc, tolerance), expected);
    }

    #[rstest]
    #[case(TimeOfUse::Morning, [1.0, 0.7, 0.3])]
    #[case(TimeOfUse::Afternoon, [0.8, 1.0, 0.6])]
    #[case(TimeOfUse::Evening, [0.4, 0.8, 1.0])]
    #[case(TimeOfUse::Night, [0.2, 0.5, 1.0])]
    #[case(TimeOfUse::Unknown, [0.5, 0.5, 0.5])]
    fn type_score_table(#[case] time: TimeOfUse, #[case] expected: [f32; 3]) {
        let actual = [
            type_score(StrainType::Sativa, time),
            type_score(StrainType::Hybrid, time),
            type_score(StrainType::Indica, time),
        ];
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn unknown_strain_type_is_neutral() {
        assert_eq!(type_score(StrainType::Unknown, TimeOfUse::Morning), NEUTRAL_FIT);
    }

    #[rstest]
    #[case(ThcTolerance::Low, 20.0, false)]
    #[case(ThcTolerance::Low, 20.1, true)]
    #[case(ThcTolerance::Medium, 30.0, false)]
    #[case(ThcTolerance::Medium, 30.5, true)]
    #[case(ThcTolerance::High, 15.0, false)]
    #[case(ThcTolerance::High, 14.0, true)]
    #[case(ThcTolerance::Unknown, 95.0, false)]
    fn tolerance_warnings(#[case] tolerance: ThcTolerance, #[case] thc: f32, #[case] warns: bool) {
        assert_eq!(check_thc_tolerance(thc, tolerance).is_some(), warns);
    }

    #[rstest]
    fn overlap_ignores_duplicate_labels() {
        let labels = vec!["happy".to_owned(), "happy".to_owned(), "sleepy".to_owned()];
        let wanted = BTreeSet::from(["happy".to_owned()]);
        assert_eq!(overlap(&labels, &wanted).len(), 1);
    }
}
