//! Route approximation search (sample -> route -> score, best-so-far).

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::directions::DEFAULT_MAX_WAYPOINTS;
use crate::error::RouteError;
use crate::haversine::path_length_km;
use crate::polyline::{Track, WaypointSubset};
use crate::sampler::{Sampler, SamplingPolicy};
use crate::similarity::Metric;
use crate::traits::{RouteCandidate, RoutingOracle, TravelMode};

#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// Rounds run after the initial request.
    pub max_iterations: usize,
    /// Cap on submitted points, origin and destination included.
    pub max_waypoints: usize,
    pub mode: TravelMode,
    pub sampling: SamplingPolicy,
    /// Scoring function for the whole run.
    pub metric: Metric,
    /// Seed for random sampling. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            max_waypoints: DEFAULT_MAX_WAYPOINTS,
            mode: TravelMode::Bicycling,
            sampling: SamplingPolicy::Random,
            metric: Metric::SymmetricHausdorff,
            seed: None,
        }
    }
}

/// Counters describing how a run went. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Rounds after the initial request.
    pub rounds: usize,
    /// Rounds skipped because the service found no route.
    pub skipped: usize,
    /// Rounds whose candidate replaced the best so far.
    pub improvements: usize,
}

/// Best candidate found by [`optimize`].
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    pub candidate: RouteCandidate,
    pub score: f64,
    pub stats: RunStats,
}

impl OptimizationResult {
    /// Waypoints that produced the winning route.
    pub fn waypoints(&self) -> &WaypointSubset {
        &self.candidate.waypoints
    }

    pub fn url(&self) -> &str {
        &self.candidate.url
    }

    /// Great-circle lengths of the original track and the winning route.
    pub fn distance_report(&self, track: &Track) -> DistanceReport {
        DistanceReport {
            track_km: path_length_km(track.points()),
            route_km: path_length_km(self.candidate.route.points()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceReport {
    pub track_km: f64,
    pub route_km: f64,
}

/// Incumbent carried between rounds; replaced wholesale on improvement.
#[derive(Debug, Clone)]
struct Best {
    candidate: RouteCandidate,
    score: f64,
}

/// Search for the waypoint subset whose route best matches `track`.
///
/// The first request must succeed: its failure (including
/// [`RouteError::NoRouteFound`]) is returned as is. Later rounds that find no
/// route are skipped; any other error aborts the run. Oracle calls are issued
/// one at a time and carry no timeout of their own, so callers that need one
/// must configure it on the oracle.
pub fn optimize<O>(
    track: &Track,
    oracle: &O,
    options: &OptimizeOptions,
) -> Result<OptimizationResult, RouteError>
where
    O: RoutingOracle + ?Sized,
{
    let mut sampler = Sampler::new(options.sampling, options.seed);
    optimize_with_sampler(track, oracle, &mut sampler, options)
}

/// Like [`optimize`] but draws subsets from a caller-owned sampler.
///
/// `options.sampling` and `options.seed` are ignored in favour of the sampler.
pub fn optimize_with_sampler<O>(
    track: &Track,
    oracle: &O,
    sampler: &mut Sampler,
    options: &OptimizeOptions,
) -> Result<OptimizationResult, RouteError>
where
    O: RoutingOracle + ?Sized,
{
    info!(
        points = track.len(),
        iterations = options.max_iterations,
        max_waypoints = options.max_waypoints,
        policy = %sampler.policy(),
        metric = %options.metric,
        "starting route approximation"
    );

    let subset = sampler.sample(track, options.max_waypoints)?;
    let candidate = oracle.request_route(&subset, options.mode)?;
    let score = options.metric.score(track.points(), candidate.route.points())?;
    debug!(score, "initial candidate");

    let mut best = Best { candidate, score };
    let mut stats = RunStats::default();
    let needs_sampling = track.len() > options.max_waypoints;

    for round in 1..=options.max_iterations {
        stats.rounds += 1;

        let subset = if needs_sampling {
            sampler.sample(track, options.max_waypoints)?
        } else {
            WaypointSubset::from(track)
        };

        let candidate = match oracle.request_route(&subset, options.mode) {
            Ok(candidate) => candidate,
            Err(err) if err.is_recoverable() => {
                warn!(round, error = %err, "skipping round");
                stats.skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };

        let score = options.metric.score(track.points(), candidate.route.points())?;
        debug!(round, score, best = best.score, "scored candidate");

        // Ties keep the incumbent.
        if score < best.score {
            info!(round, score, previous = best.score, "found better route");
            best = Best { candidate, score };
            stats.improvements += 1;
        }
    }

    info!(
        score = best.score,
        improvements = stats.improvements,
        skipped = stats.skipped,
        "route approximation complete"
    );

    Ok(OptimizationResult {
        candidate: best.candidate,
        score: best.score,
        stats,
    })
}
