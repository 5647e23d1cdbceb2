//! Aspect catalog: the ordered table of recognized angular relationships.

use serde::Serialize;

/// A named aspect angle with its matching tolerance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectDefinition {
    /// Identifier, unique within a catalog
    pub name: String,
    /// Exact angle in degrees, in `[0, 180]`
    pub angle: f64,
    /// Matching tolerance in degrees, non-negative
    pub orb: f64,
}

impl AspectDefinition {
    pub fn new(name: impl Into<String>, angle: f64, orb: f64) -> Self {
        Self {
            name: name.into(),
            angle,
            orb,
        }
    }
}

/// Catalog construction failures.
///
/// This is the only error the engine produces: once a catalog exists, every
/// downstream operation is a total function.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("duplicate aspect name '{name}' in catalog")]
    DuplicateAspect { name: String },

    #[error("aspect '{name}' has angle {angle} outside [0, 180]")]
    AngleOutOfRange { name: String, angle: f64 },

    #[error("aspect '{name}' has negative orb {orb}")]
    NegativeOrb { name: String, orb: f64 },

    #[error("axis orb override {orb} is negative")]
    NegativeAxisOrb { orb: f64 },
}

/// Validated, ordered aspect table.
///
/// Declaration order is meaningful: when two entries are equally close to a
/// pair's separation, the earlier entry wins. Immutable once constructed;
/// build one per request and share it by reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectCatalog {
    definitions: Vec<AspectDefinition>,
    axis_orb: Option<f64>,
}

impl AspectCatalog {
    /// Validate and build a catalog. Axis points use the same orbs as any
    /// other point.
    pub fn new(definitions: Vec<AspectDefinition>) -> Result<Self, CatalogError> {
        Self::build(definitions, None)
    }

    /// Validate and build a catalog whose orb is replaced by `axis_orb` for
    /// every pair involving an axis point.
    pub fn with_axis_orb(
        definitions: Vec<AspectDefinition>,
        axis_orb: f64,
    ) -> Result<Self, CatalogError> {
        Self::build(definitions, Some(axis_orb))
    }

    fn build(
        definitions: Vec<AspectDefinition>,
        axis_orb: Option<f64>,
    ) -> Result<Self, CatalogError> {
        if let Some(orb) = axis_orb {
            if orb < 0.0 {
                return Err(CatalogError::NegativeAxisOrb { orb });
            }
        }
        for (index, definition) in definitions.iter().enumerate() {
            if !(0.0..=180.0).contains(&definition.angle) {
                return Err(CatalogError::AngleOutOfRange {
                    name: definition.name.clone(),
                    angle: definition.angle,
                });
            }
            if definition.orb < 0.0 {
                return Err(CatalogError::NegativeOrb {
                    name: definition.name.clone(),
                    orb: definition.orb,
                });
            }
            if definitions[..index]
                .iter()
                .any(|earlier| earlier.name == definition.name)
            {
                return Err(CatalogError::DuplicateAspect {
                    name: definition.name.clone(),
                });
            }
        }
        Ok(Self {
            definitions,
            axis_orb,
        })
    }

    /// The classic six-aspect table with traditional orbs.
    pub fn classic() -> Self {
        // Statically valid, so no validation round-trip.
        Self {
            definitions: vec![
                AspectDefinition::new("conjunction", 0.0, 10.0),
                AspectDefinition::new("opposition", 180.0, 10.0),
                AspectDefinition::new("trine", 120.0, 8.0),
                AspectDefinition::new("sextile", 60.0, 6.0),
                AspectDefinition::new("square", 90.0, 5.0),
                AspectDefinition::new("quintile", 72.0, 1.0),
            ],
            axis_orb: None,
        }
    }

    /// The eight-aspect table of the Discepolo relationship method.
    pub fn discepolo() -> Self {
        Self {
            definitions: vec![
                AspectDefinition::new("conjunction", 0.0, 8.0),
                AspectDefinition::new("semi-sextile", 30.0, 2.0),
                AspectDefinition::new("semi-square", 45.0, 2.0),
                AspectDefinition::new("sextile", 60.0, 4.0),
                AspectDefinition::new("square", 90.0, 5.0),
                AspectDefinition::new("trine", 120.0, 7.0),
                AspectDefinition::new("sesquiquadrate", 135.0, 2.0),
                AspectDefinition::new("opposition", 180.0, 8.0),
            ],
            axis_orb: None,
        }
    }

    /// Definitions in declaration order.
    pub fn definitions(&self) -> &[AspectDefinition] {
        &self.definitions
    }

    pub fn axis_orb(&self) -> Option<f64> {
        self.axis_orb
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Look up a definition by name.
    pub fn find(&self, name: &str) -> Option<&AspectDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Orb to apply for one definition: the axis override when the pair
    /// involves an axis point and an override is configured, the
    /// definition's own orb otherwise.
    pub fn effective_orb(&self, definition: &AspectDefinition, involves_axis: bool) -> f64 {
        if involves_axis {
            if let Some(orb) = self.axis_orb {
                return orb;
            }
        }
        definition.orb
    }
}

impl Default for AspectCatalog {
    fn default() -> Self {
        Self::classic()
    }
}
