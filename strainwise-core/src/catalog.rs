//! Product catalog records, one closed type per category.
//!
//! Strains, concentrates and cartridges carry potency as a THC percentage and
//! implement [`Scorable`], so the ranking code can rely on the fields it
//! reads. Edibles carry potency in milligrams per serving and are listed and
//! saved but never ranked.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::label::labelled_enum;

labelled_enum! {
    /// Cultivar classification used as a proxy for effect timing.
    ///
    /// # Examples
    /// ```
    /// use strainwise_core::StrainType;
    ///
    /// assert_eq!(StrainType::Hybrid.to_string(), "hybrid");
    /// ```
    pub enum StrainType ("strain type") {
        /// Energising, daytime leaning.
        Sativa => "sativa",
        /// Sedating, night leaning.
        Indica => "indica",
        /// A cross of both.
        Hybrid => "hybrid",
        ;
        /// Stored value outside the known set; scores neutrally.
        fallback Unknown => "unknown",
    }
}

labelled_enum! {
    /// Catalog sections, mirroring the storefront's saved-item lists.
    pub enum Category ("category") {
        /// Flower strains.
        Strains => "strains",
        /// Infused food products.
        Edibles => "edibles",
        /// Extracts such as shatter or wax.
        Concentrates => "concentrates",
        /// Vape cartridges.
        Cartridges => "cartridges",
        ;
        /// Stored value outside the known set.
        fallback Unknown => "unknown",
    }
}

/// Fields read by the scorers.
///
/// Implemented by every category whose potency is a THC percentage.
pub trait Scorable {
    /// Stable catalog identifier.
    fn id(&self) -> &str;
    /// Display name.
    fn name(&self) -> &str;
    /// Cultivar classification.
    fn strain_type(&self) -> StrainType;
    /// THC content as a percentage.
    fn thc(&self) -> f32;
    /// Average review rating on a `0.0..=5.0` scale.
    fn rating(&self) -> f32;
    /// Reported effects.
    fn effects(&self) -> &[String];
    /// Conditions the product is reported to help with.
    fn medical_uses(&self) -> &[String];
}

/// A flower strain.
///
/// # Examples
/// ```
/// use strainwise_core::{Scorable, Strain, StrainType};
///
/// let strain = Strain::new("blue-dream", "Blue Dream", StrainType::Hybrid)
///     .with_thc(18.0)
///     .with_rating(4.6)
///     .with_effects(["relaxed", "happy"]);
/// assert_eq!(strain.effects().len(), 2);
/// assert_eq!(strain.strain_type(), StrainType::Hybrid);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strain {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Cultivar classification.
    #[serde(rename = "type")]
    pub strain_type: StrainType,
    /// THC percentage.
    pub thc: f32,
    /// CBD percentage.
    #[serde(default)]
    pub cbd: f32,
    /// Average rating out of five.
    #[serde(default)]
    pub rating: f32,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub reviews: u32,
    /// Reported effects.
    #[serde(default)]
    pub effects: Vec<String>,
    /// Reported medical uses.
    #[serde(default)]
    pub medical_uses: Vec<String>,
    /// Marketing copy.
    #[serde(default)]
    pub description: String,
    /// Image location.
    #[serde(default)]
    pub image: String,
    /// Price in the storefront's currency.
    #[serde(default)]
    pub price: f32,
    /// Dispensaries stocking the product.
    #[serde(default)]
    pub dispensaries: Vec<String>,
}

impl Strain {
    /// Construct a strain with zero potency and no metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, strain_type: StrainType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            strain_type,
            thc: 0.0,
            cbd: 0.0,
            rating: 0.0,
            reviews: 0,
            effects: Vec::new(),
            medical_uses: Vec::new(),
            description: String::new(),
            image: String::new(),
            price: 0.0,
            dispensaries: Vec::new(),
        }
    }

    /// Set the THC percentage.
    #[must_use]
    pub const fn with_thc(mut self, thc: f32) -> Self {
        self.thc = thc;
        self
    }

    /// Set the average rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    /// Replace the reported effects.
    #[must_use]
    pub fn with_effects<I, S>(mut self, effects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.effects = effects.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the reported medical uses.
    #[must_use]
    pub fn with_medical_uses<I, S>(mut self, uses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medical_uses = uses.into_iter().map(Into::into).collect();
        self
    }
}

/// A concentrated extract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concentrate {
    /// Shared potency and review fields.
    #[serde(flatten)]
    pub profile: Strain,
    /// Physical form, e.g. `shatter` or `live resin`.
    #[serde(default)]
    pub consistency: String,
}

/// A vape cartridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cartridge {
    /// Shared potency and review fields.
    #[serde(flatten)]
    pub profile: Strain,
    /// Fill volume in millilitres.
    #[serde(default)]
    pub volume_ml: f32,
    /// Hardware standard, e.g. `510 thread`.
    #[serde(default)]
    pub hardware: String,
}

/// An infused edible. Potency is per serving, in milligrams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edible {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// THC per serving in milligrams.
    pub thc_mg: f32,
    /// CBD per serving in milligrams.
    #[serde(default)]
    pub cbd_mg: f32,
    /// Servings per package.
    #[serde(default)]
    pub servings: u32,
    /// Average rating out of five.
    #[serde(default)]
    pub rating: f32,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub reviews: u32,
    /// Reported effects.
    #[serde(default)]
    pub effects: Vec<String>,
    /// Marketing copy.
    #[serde(default)]
    pub description: String,
    /// Image location.
    #[serde(default)]
    pub image: String,
    /// Price in the storefront's currency.
    #[serde(default)]
    pub price: f32,
    /// Dispensaries stocking the product.
    #[serde(default)]
    pub dispensaries: Vec<String>,
}

impl Scorable for Strain {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn strain_type(&self) -> StrainType {
        self.strain_type
    }

    fn thc(&self) -> f32 {
        self.thc
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn effects(&self) -> &[String] {
        &self.effects
    }

    fn medical_uses(&self) -> &[String] {
        &self.medical_uses
    }
}

impl<T: Scorable + ?Sized> Scorable for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn strain_type(&self) -> StrainType {
        (**self).strain_type()
    }

    fn thc(&self) -> f32 {
        (**self).thc()
    }

    fn rating(&self) -> f32 {
        (**self).rating()
    }

    fn effects(&self) -> &[String] {
        (**self).effects()
    }

    fn medical_uses(&self) -> &[String] {
        (**self).medical_uses()
    }
}

/// Delegate [`Scorable`] to an embedded [`Strain`] profile.
macro_rules! scorable_via_profile {
    ($ty:ty) => {
        impl Scorable for $ty {
            fn id(&self) -> &str {
                self.profile.id()
            }

            fn name(&self) -> &str {
                self.profile.name()
            }

            fn strain_type(&self) -> StrainType {
                self.profile.strain_type()
            }

            fn thc(&self) -> f32 {
                self.profile.thc()
            }

            fn rating(&self) -> f32 {
                self.profile.rating()
            }

            fn effects(&self) -> &[String] {
                self.profile.effects()
            }

            fn medical_uses(&self) -> &[String] {
                self.profile.medical_uses()
            }
        }
    };
}

scorable_via_profile!(Concentrate);
scorable_via_profile!(Cartridge);

/// Errors raised while validating a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two items in one category share an identifier.
    #[error("duplicate {category} id '{id}'")]
    DuplicateId {
        /// Category containing the duplicate.
        category: Category,
        /// The repeated identifier.
        id: String,
    },
}

/// The storefront's in-memory product database.
///
/// Every category key is optional when decoding from JSON.
///
/// # Examples
/// ```
/// use strainwise_core::{Catalog, Category};
///
/// let json = r#"{ "strains": [{ "id": "s1", "name": "Sour", "type": "sativa", "thc": 21.0 }] }"#;
/// let catalog: Catalog = serde_json::from_str(json).unwrap();
/// assert!(catalog.contains(Category::Strains, "s1"));
/// assert!(catalog.edibles.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Flower strains.
    #[serde(default)]
    pub strains: Vec<Strain>,
    /// Edibles.
    #[serde(default)]
    pub edibles: Vec<Edible>,
    /// Concentrates.
    #[serde(default)]
    pub concentrates: Vec<Concentrate>,
    /// Cartridges.
    #[serde(default)]
    pub cartridges: Vec<Cartridge>,
}

impl Catalog {
    /// Reject catalogs where a category repeats an identifier.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] naming the first repeat found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_unique(Category::Strains, self.strains.iter().map(|s| s.id.as_str()))?;
        check_unique(Category::Edibles, self.edibles.iter().map(|e| e.id.as_str()))?;
        check_unique(
            Category::Concentrates,
            self.concentrates.iter().map(Scorable::id),
        )?;
        check_unique(Category::Cartridges, self.cartridges.iter().map(Scorable::id))
    }

    /// Look up a strain by identifier.
    #[must_use]
    pub fn strain(&self, id: &str) -> Option<&Strain> {
        self.strains.iter().find(|s| s.id == id)
    }

    /// Look up an edible by identifier.
    #[must_use]
    pub fn edible(&self, id: &str) -> Option<&Edible> {
        self.edibles.iter().find(|e| e.id == id)
    }

    /// Look up a concentrate by identifier.
    #[must_use]
    pub fn concentrate(&self, id: &str) -> Option<&Concentrate> {
        self.concentrates.iter().find(|c| c.id() == id)
    }

    /// Look up a cartridge by identifier.
    #[must_use]
    pub fn cartridge(&self, id: &str) -> Option<&Cartridge> {
        self.cartridges.iter().find(|c| c.id() == id)
    }

    /// Report whether `category` holds an item with `id`.
    #[must_use]
    pub fn contains(&self, category: Category, id: &str) -> bool {
        match category {
            Category::Strains => self.strain(id).is_some(),
            Category::Edibles => self.edible(id).is_some(),
            Category::Concentrates => self.concentrate(id).is_some(),
            Category::Cartridges => self.cartridge(id).is_some(),
            Category::Unknown => false,
        }
    }

    /// Return the rankable items of `category` as trait objects.
    ///
    /// Edibles and unknown categories yield `None`.
    #[must_use]
    pub fn scorable(&self, category: Category) -> Option<Vec<&dyn Scorable>> {
        match category {
            Category::Strains => Some(self.strains.iter().map(as_scorable).collect()),
            Category::Concentrates => Some(self.concentrates.iter().map(as_scorable).collect()),
            Category::Cartridges => Some(self.cartridges.iter().map(as_scorable).collect()),
            Category::Edibles | Category::Unknown => None,
        }
    }
}

fn as_scorable<T: Scorable>(item: &T) -> &dyn Scorable {
    item
}

fn check_unique<'a>(
    category: Category,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                category,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}
