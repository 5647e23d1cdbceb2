//! Angular aspect computation for celestial points.
//!
//! Given one or two lists of points (each a longitude plus a signed daily
//! speed) and a catalog of recognized angles with orbs, the engine matches
//! every pair against the closest catalog entry within orb and labels it
//! Applying, Separating, or Static. Everything is synchronous and stateless;
//! the single failure mode is an invalid catalog.

pub mod angle;
pub use angle::{
    arc_separation, circular_mean, circular_sort, is_point_between, normalize_degrees,
    signed_delta,
};

pub mod point;
pub use point::{ChartPoint, PointKind};

pub mod catalog;
pub use catalog::{AspectCatalog, AspectDefinition, CatalogError};

pub mod aspects;
pub use aspects::{Aspect, AspectCalculator, AspectList, Movement};
