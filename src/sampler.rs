//! Reduces a dense track to a bounded, ordered waypoint subset.
//!
//! Every subset keeps the track's first and last points in first and last
//! position. Tracks already within the cap are returned unchanged.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::polyline::{GeoPoint, Track, WaypointSubset};

/// How interior waypoints are chosen when the track exceeds the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingPolicy {
    /// Every `floor((N-1)/(max-1))`-th point. Deterministic.
    Stride,
    /// Uniform draw without replacement from the interior, original order kept.
    Random,
}

impl fmt::Display for SamplingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplingPolicy::Stride => write!(f, "stride"),
            SamplingPolicy::Random => write!(f, "random"),
        }
    }
}

impl FromStr for SamplingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stride" => Ok(SamplingPolicy::Stride),
            "random" => Ok(SamplingPolicy::Random),
            other => Err(format!("unknown sampling policy '{}', expected stride or random", other)),
        }
    }
}

/// Waypoint sampler with its own random generator.
///
/// A fixed seed makes random sampling reproducible; without one the
/// generator is seeded from OS entropy.
#[derive(Debug, Clone)]
pub struct Sampler {
    policy: SamplingPolicy,
    rng: StdRng,
}

impl Sampler {
    pub fn new(policy: SamplingPolicy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { policy, rng }
    }

    pub fn policy(&self) -> SamplingPolicy {
        self.policy
    }

    /// Draw a subset of at most `max_count` points from `track`.
    pub fn sample(
        &mut self,
        track: &Track,
        max_count: usize,
    ) -> Result<WaypointSubset, RouteError> {
        match self.policy {
            SamplingPolicy::Stride => stride_sample(track, max_count),
            SamplingPolicy::Random => random_sample(track, max_count, &mut self.rng),
        }
    }
}

fn check_cap(max_count: usize) -> Result<(), RouteError> {
    if max_count < 2 {
        return Err(RouteError::InvalidInput(format!(
            "waypoint cap must be at least 2, got {}",
            max_count
        )));
    }
    Ok(())
}

/// Fixed-interval subsampling. A pure function of `(track, max_count)`.
pub fn stride_sample(track: &Track, max_count: usize) -> Result<WaypointSubset, RouteError> {
    check_cap(max_count)?;
    let points = track.points();
    let n = points.len();
    if n <= max_count {
        return Ok(WaypointSubset::from(track));
    }

    // n > max_count >= 2, so the interval is at least 1.
    let interval = (n - 1) / (max_count - 1);
    let mut indices: Vec<usize> = (0..n).step_by(interval).take(max_count).collect();

    let last = n - 1;
    if indices.last() != Some(&last) {
        if indices.len() < max_count {
            indices.push(last);
        } else if let Some(tail) = indices.last_mut() {
            *tail = last;
        }
    }

    Ok(WaypointSubset::from_points(pick(points, &indices)))
}

/// Uniform interior subsampling driven by the supplied generator.
pub fn random_sample(
    track: &Track,
    max_count: usize,
    rng: &mut StdRng,
) -> Result<WaypointSubset, RouteError> {
    check_cap(max_count)?;
    let points = track.points();
    let n = points.len();
    if n <= max_count {
        return Ok(WaypointSubset::from(track));
    }

    // Interior indices are 1..n-1; draw offsets into that range.
    let mut interior: Vec<usize> = index::sample(rng, n - 2, max_count - 2)
        .into_iter()
        .map(|offset| offset + 1)
        .collect();
    interior.sort_unstable();

    let mut indices = Vec::with_capacity(max_count);
    indices.push(0);
    indices.extend(interior);
    indices.push(n - 1);

    Ok(WaypointSubset::from_points(pick(points, &indices)))
}

fn pick(points: &[GeoPoint], indices: &[usize]) -> Vec<GeoPoint> {
    indices.iter().map(|&i| points[i]).collect()
}
