//! Dissimilarity between two polylines of unequal length.
//!
//! Both metrics compare coordinates as planar (lat, lng) values. Lower scores
//! mean more similar; identical inputs score 0.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::polyline::GeoPoint;

/// Scoring function used for a whole optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Mean squared per-axis error after resampling the candidate onto the
    /// reference's index grid.
    InterpolatedMse,
    /// Larger of the two directed Hausdorff distances.
    SymmetricHausdorff,
}

impl Metric {
    /// Score `candidate` against `reference`.
    ///
    /// Fails with [`RouteError::InvalidInput`] if either side has fewer than 2 points.
    pub fn score(self, reference: &[GeoPoint], candidate: &[GeoPoint]) -> Result<f64, RouteError> {
        if reference.len() < 2 {
            return Err(RouteError::too_few_points("reference track", reference.len()));
        }
        if candidate.len() < 2 {
            return Err(RouteError::too_few_points("candidate route", candidate.len()));
        }

        Ok(match self {
            Metric::InterpolatedMse => interpolated_mse(reference, candidate),
            Metric::SymmetricHausdorff => symmetric_hausdorff(reference, candidate),
        })
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::InterpolatedMse => write!(f, "mse"),
            Metric::SymmetricHausdorff => write!(f, "hausdorff"),
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mse" | "interpolated_mse" => Ok(Metric::InterpolatedMse),
            "hausdorff" | "symmetric_hausdorff" => Ok(Metric::SymmetricHausdorff),
            other => Err(format!("unknown metric '{}', expected mse or hausdorff", other)),
        }
    }
}

/// Convenience wrapper around [`Metric::score`].
pub fn score(
    metric: Metric,
    reference: &[GeoPoint],
    candidate: &[GeoPoint],
) -> Result<f64, RouteError> {
    metric.score(reference, candidate)
}

fn interpolated_mse(reference: &[GeoPoint], candidate: &[GeoPoint]) -> f64 {
    let resampled = resample_by_index(candidate, reference.len());

    let sum: f64 = reference
        .iter()
        .zip(&resampled)
        .map(|(r, c)| (r.lat - c.lat).powi(2) + (r.lng - c.lng).powi(2))
        .sum();

    // Averaged over both axes of every matched pair.
    sum / (2 * reference.len()) as f64
}

/// Linearly interpolates `points` (parametrized by index over [0, 1]) at
/// `count` evenly spaced parameters. Each axis is interpolated independently.
fn resample_by_index(points: &[GeoPoint], count: usize) -> Vec<GeoPoint> {
    let last = points.len() - 1;
    let steps = count - 1;

    (0..count)
        .map(|i| {
            // Exact when both sides have the same length.
            let position = (i * last) as f64 / steps as f64;
            let lower = (position.floor() as usize).min(last - 1);
            let frac = position - lower as f64;
            let a = points[lower];
            let b = points[lower + 1];
            // Weighted form so both endpoints come back bit-exact.
            GeoPoint::new(
                a.lat * (1.0 - frac) + b.lat * frac,
                a.lng * (1.0 - frac) + b.lng * frac,
            )
        })
        .collect()
}

fn symmetric_hausdorff(a: &[GeoPoint], b: &[GeoPoint]) -> f64 {
    directed_hausdorff(a, b).max(directed_hausdorff(b, a))
}

/// Worst-case nearest-neighbour distance from `from` to `to`.
pub fn directed_hausdorff(from: &[GeoPoint], to: &[GeoPoint]) -> f64 {
    from.par_iter()
        .map(|p| {
            to.iter()
                .map(|q| planar_distance(*p, *q))
                .fold(f64::INFINITY, f64::min)
        })
        .reduce(|| 0.0, f64::max)
}

fn planar_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    ((a.lat - b.lat).powi(2) + (a.lng - b.lng).powi(2)).sqrt()
}
