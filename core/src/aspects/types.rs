//! Result types for aspect computation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Temporal direction of an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Movement {
    /// The orb is shrinking; the pair is closing in on exactness
    Applying,
    /// The orb is growing; the pair is drifting away from exactness
    Separating,
    /// Relative motion is below the detection threshold
    Static,
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Movement::Applying => "Applying",
            Movement::Separating => "Separating",
            Movement::Static => "Static",
        };
        f.write_str(label)
    }
}

/// One matched angular relationship between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub p1_name: String,
    pub p1_owner: String,
    /// First point's longitude in degrees, normalized to `[0, 360)`
    pub p1_longitude: f64,
    pub p2_name: String,
    pub p2_owner: String,
    pub p2_longitude: f64,
    /// Name of the matched catalog entry
    pub aspect: String,
    /// Exact angle of the matched entry, in degrees
    pub target_angle: f64,
    /// Minimal separation of the two longitudes, in `[0, 180]`
    pub separation: f64,
    /// Signed deviation from exact: `separation - target_angle`. Positive
    /// means wider than exact, negative means narrower.
    pub orbit: f64,
    pub movement: Movement,
}

impl Aspect {
    /// Absolute distance from exactness, in degrees.
    pub fn orb_distance(&self) -> f64 {
        self.orbit.abs()
    }
}

/// Ordered collection of matched aspects for one computation.
///
/// This is the single authoritative result; narrower views ("only trines",
/// "only applying", ...) are produced on demand by the query methods rather
/// than stored alongside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectList {
    aspects: Vec<Aspect>,
}

impl AspectList {
    pub fn new(aspects: Vec<Aspect>) -> Self {
        Self { aspects }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Aspect> {
        self.aspects.iter()
    }

    pub fn as_slice(&self) -> &[Aspect] {
        &self.aspects
    }

    pub fn into_vec(self) -> Vec<Aspect> {
        self.aspects
    }

    pub fn len(&self) -> usize {
        self.aspects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aspects.is_empty()
    }

    /// Aspects in which the named point takes part, on either side.
    pub fn involving<'a>(&'a self, point_name: &'a str) -> impl Iterator<Item = &'a Aspect> + 'a {
        self.aspects
            .iter()
            .filter(move |a| a.p1_name == point_name || a.p2_name == point_name)
    }

    /// Aspects matching one catalog entry name.
    pub fn named<'a>(&'a self, aspect_name: &'a str) -> impl Iterator<Item = &'a Aspect> + 'a {
        self.aspects.iter().filter(move |a| a.aspect == aspect_name)
    }

    /// Aspects with the given temporal direction.
    pub fn with_movement(&self, movement: Movement) -> impl Iterator<Item = &Aspect> + '_ {
        self.aspects.iter().filter(move |a| a.movement == movement)
    }

    /// Aspects no further than `max_orb_distance` degrees from exact.
    pub fn within_orb(&self, max_orb_distance: f64) -> impl Iterator<Item = &Aspect> + '_ {
        self.aspects
            .iter()
            .filter(move |a| a.orb_distance() <= max_orb_distance)
    }

    /// Aspects between two named points, in either orientation.
    pub fn between<'a>(
        &'a self,
        first: &'a str,
        second: &'a str,
    ) -> impl Iterator<Item = &'a Aspect> + 'a {
        self.aspects.iter().filter(move |a| {
            (a.p1_name == first && a.p2_name == second)
                || (a.p1_name == second && a.p2_name == first)
        })
    }
}

impl IntoIterator for AspectList {
    type Item = Aspect;
    type IntoIter = std::vec::IntoIter<Aspect>;

    fn into_iter(self) -> Self::IntoIter {
        self.aspects.into_iter()
    }
}

impl<'a> IntoIterator for &'a AspectList {
    type Item = &'a Aspect;
    type IntoIter = std::slice::Iter<'a, Aspect>;

    fn into_iter(self) -> Self::IntoIter {
        self.aspects.iter()
    }
}
