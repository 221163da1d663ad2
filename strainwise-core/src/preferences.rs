//! User preferences captured by the onboarding questionnaire.
//!
//! A [`UserPreferences`] value is supplied wholesale to the scorers and is
//! never mutated by them. Optional answers (medical conditions and effects to
//! avoid) decode as empty sets when absent.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::label::labelled_enum;

labelled_enum! {
    /// Self-reported familiarity with cannabis products.
    ///
    /// # Examples
    /// ```
    /// use strainwise_core::ExperienceLevel;
    ///
    /// assert_eq!(ExperienceLevel::Beginner.as_str(), "beginner");
    /// ```
    pub enum ExperienceLevel ("experience level") {
        /// New to cannabis.
        Beginner => "beginner",
        /// Occasional consumer.
        Intermediate => "intermediate",
        /// Regular consumer.
        Experienced => "experienced",
        ;
        /// Stored value outside the known set.
        fallback Unknown => "unknown",
    }
}

labelled_enum! {
    /// How much THC potency the user is comfortable with.
    ///
    /// # Examples
    /// ```
    /// use std::str::FromStr;
    /// use strainwise_core::ThcTolerance;
    ///
    /// assert_eq!(ThcTolerance::from_str("HIGH"), Ok(ThcTolerance::High));
    /// assert_eq!(ThcTolerance::Medium.to_string(), "medium");
    /// ```
    pub enum ThcTolerance ("THC tolerance") {
        /// Prefers mild products.
        Low => "low",
        /// Comfortable with average potency.
        Medium => "medium",
        /// Seeks potent products.
        High => "high",
        ;
        /// Stored value outside the known set; scores neutrally.
        fallback Unknown => "unknown",
    }
}

labelled_enum! {
    /// When the user intends to consume.
    ///
    /// # Examples
    /// ```
    /// use strainwise_core::TimeOfUse;
    ///
    /// let known: TimeOfUse = serde_json::from_str("\"night\"").unwrap();
    /// assert_eq!(known, TimeOfUse::Night);
    /// let stray: TimeOfUse = serde_json::from_str("\"brunch\"").unwrap();
    /// assert_eq!(stray, TimeOfUse::Unknown);
    /// assert!("brunch".parse::<TimeOfUse>().is_err());
    /// ```
    pub enum TimeOfUse ("time of use") {
        /// Start of the day.
        Morning => "morning",
        /// Middle of the day.
        Afternoon => "afternoon",
        /// After work.
        Evening => "evening",
        /// Before sleep.
        Night => "night",
        ;
        /// Stored value outside the known set; scores neutrally.
        fallback Unknown => "unknown",
    }
}

/// Answers gathered by onboarding, or the default profile.
///
/// # Examples
/// ```
/// use strainwise_core::{ThcTolerance, UserPreferences};
///
/// let json = r#"{
///     "desired_effects": ["relaxed"],
///     "experience_level": "beginner",
///     "thc_tolerance": "low",
///     "preferred_time_of_use": "night"
/// }"#;
/// let preferences: UserPreferences = serde_json::from_str(json).unwrap();
/// assert_eq!(preferences.thc_tolerance, ThcTolerance::Low);
/// assert!(preferences.medical_conditions.is_empty());
/// assert!(preferences.avoid_effects.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Effects the user hopes for.
    #[serde(default)]
    pub desired_effects: BTreeSet<String>,
    /// Conditions the user wants relief from.
    #[serde(default)]
    pub medical_conditions: BTreeSet<String>,
    /// Familiarity with cannabis.
    pub experience_level: ExperienceLevel,
    /// Comfortable THC potency bucket.
    pub thc_tolerance: ThcTolerance,
    /// Intended time of consumption.
    pub preferred_time_of_use: TimeOfUse,
    /// Effects the user would rather not experience.
    #[serde(default)]
    pub avoid_effects: BTreeSet<String>,
}

impl UserPreferences {
    /// Construct preferences with no effect, condition, or avoidance sets.
    #[must_use]
    pub const fn new(
        experience_level: ExperienceLevel,
        thc_tolerance: ThcTolerance,
        preferred_time_of_use: TimeOfUse,
    ) -> Self {
        Self {
            desired_effects: BTreeSet::new(),
            medical_conditions: BTreeSet::new(),
            experience_level,
            thc_tolerance,
            preferred_time_of_use,
            avoid_effects: BTreeSet::new(),
        }
    }

    /// Replace the desired effects while returning `self` for chaining.
    ///
    /// # Examples
    /// ```
    /// use strainwise_core::UserPreferences;
    ///
    /// let preferences = UserPreferences::default().with_desired_effects(["creative"]);
    /// assert!(preferences.desired_effects.contains("creative"));
    /// assert_eq!(preferences.desired_effects.len(), 1);
    /// ```
    #[must_use]
    pub fn with_desired_effects<I, S>(mut self, effects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.desired_effects = effects.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the medical conditions while returning `self` for chaining.
    #[must_use]
    pub fn with_medical_conditions<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medical_conditions = conditions.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the effects to avoid while returning `self` for chaining.
    #[must_use]
    pub fn with_avoid_effects<I, S>(mut self, effects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.avoid_effects = effects.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for UserPreferences {
    /// The profile used before onboarding completes.
    fn default() -> Self {
        Self::new(
            ExperienceLevel::Intermediate,
            ThcTolerance::Medium,
            TimeOfUse::Evening,
        )
        .with_desired_effects(["relaxed", "happy"])
    }
}
