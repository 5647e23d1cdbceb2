//! Best-match resolution of one point pair against a catalog.

use crate::angle::arc_separation;
use crate::catalog::{AspectCatalog, AspectDefinition};
use crate::point::ChartPoint;

/// Outcome of matching one pair of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairMatch<'a> {
    /// Winning catalog entry
    pub definition: &'a AspectDefinition,
    /// Minimal separation of the two longitudes, in `[0, 180]`
    pub separation: f64,
    /// Signed deviation from exact: `separation - definition.angle`
    pub orbit: f64,
}

/// Find the aspect formed by two points, if any.
///
/// Every catalog entry whose effective orb contains the pair's separation is
/// a candidate (the orb boundary is inclusive). The entry closest to exact
/// wins; an exact tie goes to the entry declared first, so the result never
/// depends on anything but the catalog's order.
pub fn match_pair<'a>(
    catalog: &'a AspectCatalog,
    p1: &ChartPoint,
    p2: &ChartPoint,
) -> Option<PairMatch<'a>> {
    let separation = arc_separation(p1.longitude, p2.longitude);
    let involves_axis = p1.is_axis() || p2.is_axis();

    let mut best: Option<(&AspectDefinition, f64)> = None;
    for definition in catalog.definitions() {
        let distance = (separation - definition.angle).abs();
        if distance > catalog.effective_orb(definition, involves_axis) {
            continue;
        }
        // Strict comparison keeps the earliest declaration on ties.
        let closer = match best {
            Some((_, best_distance)) => distance < best_distance,
            None => true,
        };
        if closer {
            best = Some((definition, distance));
        }
    }

    best.map(|(definition, _)| PairMatch {
        definition,
        separation,
        orbit: separation - definition.angle,
    })
}
