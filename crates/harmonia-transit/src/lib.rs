//! Batch transit scanning over a time range.
//!
//! Given a natal chart and a sequence of ephemeris frames (resolved point
//! positions at successive timestamps), the scanner computes the dual-chart
//! aspects of every frame against the natal points. Frames are independent,
//! so the scan fans out across the rayon pool and collects back in input
//! order.

use chrono::{DateTime, Utc};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use harmonia_core::{AspectCalculator, AspectCatalog, AspectList, ChartPoint};

/// Resolved point positions at one timestamp.
///
/// Position resolution happens upstream; the scanner only reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EphemerisFrame {
    pub timestamp: DateTime<Utc>,
    pub points: Vec<ChartPoint>,
}

impl EphemerisFrame {
    pub fn new(timestamp: DateTime<Utc>, points: Vec<ChartPoint>) -> Self {
        Self { timestamp, points }
    }
}

/// Aspects active at one scanned timestamp. The transiting point is always
/// the first side of each aspect, the natal point the second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitMoment {
    pub timestamp: DateTime<Utc>,
    pub aspects: AspectList,
}

/// Scan output, in input frame order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitSeries {
    pub timestamps: Vec<DateTime<Utc>>,
    pub moments: Vec<TransitMoment>,
}

impl TransitSeries {
    /// Moments where at least one aspect is active.
    pub fn moments_with_aspects(&self) -> impl Iterator<Item = &TransitMoment> {
        self.moments.iter().filter(|m| !m.aspects.is_empty())
    }

    /// Timestamps at which the named aspect occurs.
    pub fn when_aspect<'a>(
        &'a self,
        aspect_name: &'a str,
    ) -> impl Iterator<Item = DateTime<Utc>> + 'a {
        self.moments
            .iter()
            .filter(move |m| m.aspects.named(aspect_name).next().is_some())
            .map(|m| m.timestamp)
    }

    pub fn len(&self) -> usize {
        self.moments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }
}

/// Batch scanner over a validated catalog.
pub struct TransitScanner {
    catalog: AspectCatalog,
}

impl TransitScanner {
    pub fn new(catalog: AspectCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AspectCatalog {
        &self.catalog
    }

    /// Compute the dual-chart aspects of every frame against the natal
    /// points. Output order matches frame order exactly.
    pub fn scan(&self, natal: &[ChartPoint], frames: &[EphemerisFrame]) -> TransitSeries {
        let moments: Vec<TransitMoment> = frames
            .par_iter()
            .map(|frame| {
                let calculator = AspectCalculator::new(&self.catalog);
                TransitMoment {
                    timestamp: frame.timestamp,
                    aspects: calculator.dual_chart(&frame.points, natal),
                }
            })
            .collect();
        debug!(
            "scanned {} frames against {} natal points",
            frames.len(),
            natal.len()
        );
        TransitSeries {
            timestamps: frames.iter().map(|f| f.timestamp).collect(),
            moments,
        }
    }
}
