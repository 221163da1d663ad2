//! Behavioural coverage for single-item compatibility summaries.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use strainwise_core::test_support::strain;
use strainwise_core::{
    ExperienceLevel, Strain, StrainType, ThcTolerance, TimeOfUse, UserPreferences,
};
use strainwise_scorer::{Compatibility, compatibility};

/// Shared state for the compatibility scenarios.
pub struct CompatibilityContext {
    item: RefCell<Option<Strain>>,
    summary: RefCell<Option<Compatibility>>,
}

#[fixture]
/// Build an empty context for each scenario run.
pub fn context() -> CompatibilityContext {
    CompatibilityContext {
        item: RefCell::new(None),
        summary: RefCell::new(None),
    }
}

fn check(context: &CompatibilityContext, preferences: &UserPreferences) {
    let summary = context
        .item
        .borrow()
        .as_ref()
        .map(|item| compatibility(item, preferences));
    *context.summary.borrow_mut() = summary;
}

fn summary(context: &CompatibilityContext) -> Compatibility {
    let stored = context.summary.borrow().clone();
    let Some(summary) = stored else {
        panic!("compatibility has not been checked");
    };
    summary
}

#[given("a 26 percent indica that relaxes")]
fn potent_indica(context: &CompatibilityContext) {
    *context.item.borrow_mut() = Some(strain(
        "potent",
        StrainType::Indica,
        26.0,
        2.5,
        &["relaxed"],
        &[],
    ));
}

#[given("a 18 percent hybrid rated five stars that relaxes and cheers")]
fn balanced_hybrid(context: &CompatibilityContext) {
    *context.item.borrow_mut() = Some(strain(
        "balanced",
        StrainType::Hybrid,
        18.0,
        5.0,
        &["relaxed", "happy"],
        &[],
    ));
}

#[when("a low tolerance beginner checks compatibility")]
fn beginner_checks(context: &CompatibilityContext) {
    let preferences = UserPreferences::new(
        ExperienceLevel::Beginner,
        ThcTolerance::Low,
        TimeOfUse::Night,
    )
    .with_desired_effects(["sleepy", "relaxed"]);
    check(context, &preferences);
}

#[when("the default profile checks compatibility")]
fn default_checks(context: &CompatibilityContext) {
    check(context, &UserPreferences::default());
}

#[then("the compatibility is 40")]
fn compatibility_forty(context: &CompatibilityContext) {
    assert_eq!(summary(context).compatibility, 40.0);
}

#[then("the compatibility is 100")]
fn compatibility_full(context: &CompatibilityContext) {
    assert_eq!(summary(context).compatibility, 100.0);
}

#[then("the summary warns about tolerance and experience")]
fn warns_twice(context: &CompatibilityContext) {
    let warnings = summary(context).warnings;
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().any(|warning| warning.contains("tolerance")));
    assert!(warnings.iter().any(|warning| warning.contains("beginner")));
}

#[then("the summary has no warnings")]
fn no_warnings(context: &CompatibilityContext) {
    assert!(summary(context).warnings.is_empty());
}

#[scenario(path = "tests/features/compatibility.feature", index = 0)]
fn cautious_beginner(context: CompatibilityContext) {
    let _ = context;
}

#[scenario(path = "tests/features/compatibility.feature", index = 1)]
fn well_suited_strain(context: CompatibilityContext) {
    let _ = context;
}
