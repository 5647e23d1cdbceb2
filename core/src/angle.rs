//! Circular arithmetic over ecliptic longitudes.
//!
//! Angles are plain `f64` degrees. Every function here is total: any real
//! input is normalized rather than rejected.

/// Normalize an angle to `[0, 360)`.
pub fn normalize_degrees(value: f64) -> f64 {
    let wrapped = value.rem_euclid(360.0);
    // Rounding on tiny negative inputs can land exactly on 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Minimal separation between two angles, in `[0, 180]`.
///
/// Symmetric, and zero exactly when the angles coincide modulo 360.
pub fn arc_separation(a: f64, b: f64) -> f64 {
    let diff = (normalize_degrees(a) - normalize_degrees(b)).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Shortest signed rotation from `from` to `to`, in `(-180, 180]`.
///
/// Positive means the shorter way is in increasing-longitude direction.
/// Antipodal angles resolve to `+180`.
pub fn signed_delta(from: f64, to: f64) -> f64 {
    let diff = normalize_degrees(to) - normalize_degrees(from);
    if diff > 180.0 {
        diff - 360.0
    } else if diff <= -180.0 {
        diff + 360.0
    } else {
        diff
    }
}

/// Midpoint of two angles along the shorter arc between them, in `[0, 360)`.
pub fn circular_mean(a: f64, b: f64) -> f64 {
    normalize_degrees(a + signed_delta(a, b) / 2.0)
}

/// Whether `point` lies on the clockwise arc from `start` to `end`.
///
/// Half-open: the start belongs to the arc, the end does not. A zero-length
/// arc contains only its start.
pub fn is_point_between(start: f64, end: f64, point: f64) -> bool {
    let arc = normalize_degrees(end - start);
    let offset = normalize_degrees(point - start);
    if offset == 0.0 {
        return true;
    }
    offset < arc
}

/// Reorder angles by increasing clockwise distance from the first element.
///
/// The first element is the reference and stays at index 0. Equidistant
/// angles keep their input order.
pub fn circular_sort(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let reference = values[0];
    let mut rest: Vec<f64> = values[1..].to_vec();
    rest.sort_by(|a, b| {
        normalize_degrees(a - reference).total_cmp(&normalize_degrees(b - reference))
    });
    let mut sorted = Vec::with_capacity(values.len());
    sorted.push(reference);
    sorted.extend(rest);
    sorted
}
