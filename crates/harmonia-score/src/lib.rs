//! Couple compatibility scoring by the Ciro Discepolo method.
//!
//! The score sums fixed contributions from a handful of synastry contacts
//! (Sun-Sun, Sun-Moon, Sun-Ascendant, Moon-Ascendant, Venus-Mars) plus a
//! bonus when both Suns share a sign quality. Synastry is computed here with
//! the dedicated eight-aspect Discepolo table, not the caller's catalog.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use harmonia_core::{normalize_degrees, Aspect, AspectCalculator, AspectCatalog, ChartPoint};

/// Quality (modality) of a zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

/// Quality of the sign containing a longitude. Signs cycle through the
/// three qualities in zodiac order, so the sign index modulo 3 decides.
pub fn quality_of(longitude: f64) -> Quality {
    let sign_index = (normalize_degrees(longitude) / 30.0) as usize;
    match sign_index % 3 {
        0 => Quality::Cardinal,
        1 => Quality::Fixed,
        _ => Quality::Mutable,
    }
}

/// One synastry contact counted toward the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAspect {
    pub p1_name: String,
    pub p2_name: String,
    pub aspect: String,
    pub orbit: f64,
}

/// Discepolo's published bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Minimal,
    Medium,
    Important,
    VeryImportant,
    Exceptional,
    RareExceptional,
}

impl ScoreBand {
    /// Band containing a numeric score.
    pub fn from_value(value: u32) -> Self {
        match value {
            0..=4 => ScoreBand::Minimal,
            5..=9 => ScoreBand::Medium,
            10..=14 => ScoreBand::Important,
            15..=19 => ScoreBand::VeryImportant,
            20..=29 => ScoreBand::Exceptional,
            _ => ScoreBand::RareExceptional,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreBand::Minimal => "Minimal",
            ScoreBand::Medium => "Medium",
            ScoreBand::Important => "Important",
            ScoreBand::VeryImportant => "Very Important",
            ScoreBand::Exceptional => "Exceptional",
            ScoreBand::RareExceptional => "Rare Exceptional",
        };
        f.write_str(label)
    }
}

/// Full scoring result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipScore {
    pub value: u32,
    pub band: ScoreBand,
    /// Both Suns share a sign quality
    pub is_destiny_sign: bool,
    /// Contacts that contributed, in synastry order
    pub aspects: Vec<ScoredAspect>,
}

const MAJOR_ASPECTS: &[&str] = &["conjunction", "sextile", "square", "trine", "opposition"];

/// Contacts within this many degrees of exact earn the higher tier.
const TIGHT_ORB: f64 = 2.0;

/// Relationship scorer.
pub struct RelationshipScorer {
    catalog: AspectCatalog,
    use_only_major_aspects: bool,
}

impl RelationshipScorer {
    pub fn new() -> Self {
        Self {
            catalog: AspectCatalog::discepolo(),
            use_only_major_aspects: true,
        }
    }

    /// Count minor contacts (semi-sextile, semi-square, sesquiquadrate) too.
    pub fn use_only_major_aspects(mut self, only_major: bool) -> Self {
        self.use_only_major_aspects = only_major;
        self
    }

    /// Score two charts against each other.
    ///
    /// Contributions: shared Sun quality +5; Sun-Sun conjunction, opposition
    /// or square +11 tight / +8 wide; Sun-Moon conjunction +11 tight / +8
    /// wide; any other Sun-Sun or Sun-Moon contact +4; Sun-Ascendant,
    /// Moon-Ascendant and Venus-Mars contacts +4 each. Points are matched by
    /// name; a chart without a Sun simply earns no Sun contributions.
    pub fn score(&self, first: &[ChartPoint], second: &[ChartPoint]) -> RelationshipScore {
        let calculator = AspectCalculator::new(&self.catalog);
        let synastry = calculator.dual_chart(first, second);

        let mut value = 0u32;
        let mut counted = Vec::new();

        let first_sun = find_point(first, "Sun");
        let second_sun = find_point(second, "Sun");
        let is_destiny_sign = match (first_sun, second_sun) {
            (Some(a), Some(b)) => quality_of(a.longitude) == quality_of(b.longitude),
            _ => false,
        };
        if is_destiny_sign {
            value += 5;
            debug!("shared Sun quality, +5");
        }

        for aspect in synastry.iter() {
            if self.use_only_major_aspects && !MAJOR_ASPECTS.contains(&aspect.aspect.as_str()) {
                continue;
            }
            if let Some(points) = contact_value(aspect) {
                value += points;
                debug!(
                    "{} {} {} (orbit {:+.2}), +{}",
                    aspect.p1_name, aspect.aspect, aspect.p2_name, aspect.orbit, points
                );
                counted.push(ScoredAspect {
                    p1_name: aspect.p1_name.clone(),
                    p2_name: aspect.p2_name.clone(),
                    aspect: aspect.aspect.clone(),
                    orbit: aspect.orbit,
                });
            }
        }

        RelationshipScore {
            value,
            band: ScoreBand::from_value(value),
            is_destiny_sign,
            aspects: counted,
        }
    }
}

impl Default for RelationshipScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn find_point<'a>(points: &'a [ChartPoint], name: &str) -> Option<&'a ChartPoint> {
    points.iter().find(|p| p.name == name)
}

fn pair_is(aspect: &Aspect, a: &str, b: &str) -> bool {
    (aspect.p1_name == a && aspect.p2_name == b) || (aspect.p1_name == b && aspect.p2_name == a)
}

fn contact_value(aspect: &Aspect) -> Option<u32> {
    let tight = aspect.orb_distance() <= TIGHT_ORB;
    if pair_is(aspect, "Sun", "Sun") {
        let points = match aspect.aspect.as_str() {
            "conjunction" | "opposition" | "square" => {
                if tight {
                    11
                } else {
                    8
                }
            }
            _ => 4,
        };
        return Some(points);
    }
    if pair_is(aspect, "Sun", "Moon") {
        let points = if aspect.aspect == "conjunction" {
            if tight {
                11
            } else {
                8
            }
        } else {
            4
        };
        return Some(points);
    }
    if pair_is(aspect, "Sun", "Ascendant")
        || pair_is(aspect, "Moon", "Ascendant")
        || pair_is(aspect, "Venus", "Mars")
    {
        return Some(4);
    }
    None
}
