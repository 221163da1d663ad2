//! Test-only helpers: an in-memory `StateStore` and a small sample catalog.

use crate::{
    Cartridge, Catalog, Concentrate, Edible, StateStore, StateStoreError, StorefrontState, Strain,
    StrainType,
};

/// In-memory `StateStore` implementation used in tests.
///
/// Counts saves so tests can assert that commands persisted their changes.
#[derive(Debug, Default, Clone)]
pub struct MemoryStateStore {
    state: StorefrontState,
    saves: usize,
}

impl MemoryStateStore {
    /// Create a store holding `state`.
    #[must_use]
    pub const fn with_state(state: StorefrontState) -> Self {
        Self { state, saves: 0 }
    }

    /// Number of times `save` has been called.
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> Result<StorefrontState, StateStoreError> {
        Ok(self.state.clone())
    }

    fn save(&mut self, state: &StorefrontState) -> Result<(), StateStoreError> {
        self.state = state.clone();
        self.saves = self.saves.saturating_add(1);
        Ok(())
    }
}

/// Build a strain with the fields the scorers read.
#[must_use]
pub fn strain(
    id: &str,
    strain_type: StrainType,
    thc: f32,
    rating: f32,
    effects: &[&str],
    medical_uses: &[&str],
) -> Strain {
    Strain::new(id, id, strain_type)
        .with_thc(thc)
        .with_rating(rating)
        .with_effects(effects.iter().copied())
        .with_medical_uses(medical_uses.iter().copied())
}

/// A catalog with a handful of items in every category.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog {
        strains: vec![
            strain(
                "blue-dream",
                StrainType::Hybrid,
                18.0,
                4.6,
                &["relaxed", "happy", "creative"],
                &["stress", "depression"],
            ),
            strain(
                "sour-diesel",
                StrainType::Sativa,
                22.0,
                4.4,
                &["energetic", "happy", "uplifted"],
                &["fatigue", "stress"],
            ),
            strain(
                "granddaddy-purple",
                StrainType::Indica,
                20.0,
                4.7,
                &["relaxed", "sleepy", "hungry"],
                &["insomnia", "pain"],
            ),
            strain(
                "jack-herer",
                StrainType::Sativa,
                16.0,
                4.5,
                &["focused", "creative", "anxious"],
                &["fatigue"],
            ),
        ],
        edibles: vec![Edible {
            id: "citrus-gummies".into(),
            name: "Citrus Gummies".into(),
            thc_mg: 5.0,
            cbd_mg: 0.0,
            servings: 20,
            rating: 4.3,
            reviews: 120,
            effects: vec!["relaxed".into()],
            description: String::new(),
            image: String::new(),
            price: 18.0,
            dispensaries: Vec::new(),
        }],
        concentrates: vec![Concentrate {
            profile: strain(
                "gelato-shatter",
                StrainType::Hybrid,
                78.0,
                4.8,
                &["euphoric", "relaxed"],
                &["pain"],
            ),
            consistency: "shatter".into(),
        }],
        cartridges: vec![Cartridge {
            profile: strain(
                "lemon-haze-cart",
                StrainType::Sativa,
                85.0,
                4.2,
                &["energetic", "focused"],
                &["fatigue"],
            ),
            volume_ml: 0.5,
            hardware: "510 thread".into(),
        }],
    }
}
