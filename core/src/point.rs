//! Celestial point model.

use serde::{Deserialize, Serialize};

use crate::angle::normalize_degrees;

/// Category of a celestial point.
///
/// The category travels with the point as data; nothing in the engine
/// inspects point names to decide behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointKind {
    Planet,
    /// Chart angle: Ascendant, Midheaven, Descendant, Imum Coeli
    Axis,
    Node,
    ArabicPart,
    FixedStar,
    Other,
}

impl PointKind {
    pub fn is_axis(self) -> bool {
        matches!(self, PointKind::Axis)
    }
}

/// A celestial point at a moment in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Identifier, unique within its owning chart
    pub name: String,
    /// Label of the chart or subject the point belongs to
    pub owner: String,
    /// Ecliptic longitude in degrees
    pub longitude: f64,
    /// Signed rate of change in degrees per day; negative while retrograde
    pub daily_speed: f64,
    pub kind: PointKind,
}

impl ChartPoint {
    /// Create a point with the longitude normalized to `[0, 360)`.
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        longitude: f64,
        daily_speed: f64,
        kind: PointKind,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            longitude: normalize_degrees(longitude),
            daily_speed,
            kind,
        }
    }

    pub fn is_axis(&self) -> bool {
        self.kind.is_axis()
    }

    pub fn is_retrograde(&self) -> bool {
        self.daily_speed < 0.0
    }

    /// Whether two records describe the same point of the same chart.
    pub fn is_same_point(&self, other: &ChartPoint) -> bool {
        self.name == other.name && self.owner == other.owner
    }
}
