//! Single-chart and dual-chart aspect enumeration.

use log::debug;

use crate::angle::normalize_degrees;
use crate::aspects::movement::classify_movement;
use crate::aspects::resolver::{match_pair, PairMatch};
use crate::aspects::types::{Aspect, AspectList};
use crate::catalog::AspectCatalog;
use crate::point::ChartPoint;

/// Aspect calculator over a borrowed catalog.
///
/// Stateless beyond the catalog reference: construct one next to the catalog
/// for each request. Which points take part is the caller's decision; the
/// calculator evaluates exactly what it is handed.
pub struct AspectCalculator<'a> {
    catalog: &'a AspectCatalog,
}

impl<'a> AspectCalculator<'a> {
    pub fn new(catalog: &'a AspectCatalog) -> Self {
        Self { catalog }
    }

    /// Aspect formed by one pair of points, if their separation falls within
    /// an effective orb.
    pub fn aspect_between(&self, p1: &ChartPoint, p2: &ChartPoint) -> Option<Aspect> {
        match_pair(self.catalog, p1, p2).map(|found| build_aspect(p1, p2, found))
    }

    /// Aspects among one chart's points.
    ///
    /// Evaluates every unordered pair `{i < j}`, skipping entries that name
    /// the same point of the same chart. Output follows `(i, j)` order,
    /// never orb strength, so identical input yields identical output.
    pub fn single_chart(&self, points: &[ChartPoint]) -> AspectList {
        let mut aspects = Vec::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let p1 = &points[i];
                let p2 = &points[j];
                if p1.is_same_point(p2) {
                    continue;
                }
                if let Some(found) = match_pair(self.catalog, p1, p2) {
                    aspects.push(build_aspect(p1, p2, found));
                }
            }
        }
        debug!(
            "single-chart pass over {} points matched {} aspects",
            points.len(),
            aspects.len()
        );
        AspectList::new(aspects)
    }

    /// Aspects across two charts.
    ///
    /// Evaluates the full `first x second` product, same-named points
    /// included: a point against its own namesake in the other chart is a
    /// valid, often exact, result. Output follows `(i, j)` order over the
    /// two input lists.
    pub fn dual_chart(&self, first: &[ChartPoint], second: &[ChartPoint]) -> AspectList {
        let mut aspects = Vec::new();
        for p1 in first {
            for p2 in second {
                if let Some(found) = match_pair(self.catalog, p1, p2) {
                    aspects.push(build_aspect(p1, p2, found));
                }
            }
        }
        debug!(
            "dual-chart pass over {}x{} pairs matched {} aspects",
            first.len(),
            second.len(),
            aspects.len()
        );
        AspectList::new(aspects)
    }
}

fn build_aspect(p1: &ChartPoint, p2: &ChartPoint, found: PairMatch<'_>) -> Aspect {
    let movement = classify_movement(
        p1.longitude,
        p1.daily_speed,
        p2.longitude,
        p2.daily_speed,
        found.definition.angle,
    );
    Aspect {
        p1_name: p1.name.clone(),
        p1_owner: p1.owner.clone(),
        p1_longitude: normalize_degrees(p1.longitude),
        p2_name: p2.name.clone(),
        p2_owner: p2.owner.clone(),
        p2_longitude: normalize_degrees(p2.longitude),
        aspect: found.definition.name.clone(),
        target_angle: found.definition.angle,
        separation: found.separation,
        orbit: found.orbit,
        movement,
    }
}
