//! route-approx CLI
//!
//! Usage:
//!   route-approx <track.gpx> [--iterations N] [--metric mse|hausdorff] ...
//!
//! Reads a GPX track, searches for the directions route that best matches
//! it, prints the share link and distances, and writes an HTML map.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use route_approx::directions::{DEFAULT_MAX_WAYPOINTS, DirectionsClient, DirectionsConfig};
use route_approx::gpx_source::read_track;
use route_approx::optimizer::{OptimizeOptions, optimize};
use route_approx::render::{MapLayers, write_html};
use route_approx::sampler::SamplingPolicy;
use route_approx::similarity::Metric;
use route_approx::traits::TravelMode;

#[derive(Parser)]
#[command(name = "route-approx")]
#[command(
    about = "Approximate a GPS track with a turn-by-turn directions route",
    long_about = None
)]
struct Cli {
    /// GPX file holding the recorded track
    track: PathBuf,

    /// Directions API key
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Rounds after the initial request
    #[arg(short, long, default_value_t = 10)]
    iterations: usize,

    /// Points submitted per request, origin and destination included
    #[arg(long, default_value_t = DEFAULT_MAX_WAYPOINTS)]
    max_waypoints: usize,

    /// Travel mode (driving, walking, bicycling, transit)
    #[arg(long, default_value = "bicycling")]
    mode: TravelMode,

    /// Waypoint sampling policy (stride, random)
    #[arg(long, default_value = "random")]
    sampling: SamplingPolicy,

    /// Similarity metric (mse, hausdorff)
    #[arg(long, default_value = "hausdorff")]
    metric: Metric,

    /// Seed for random sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Where to write the HTML map
    #[arg(long, default_value = "map.html")]
    map_output: PathBuf,

    /// Enable verbose debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let track = read_track(&cli.track)?;
    tracing::info!(points = track.len(), path = %cli.track.display(), "loaded track");

    let config = DirectionsConfig {
        api_key: cli.api_key,
        timeout_secs: cli.timeout,
        max_waypoints: cli.max_waypoints,
        ..DirectionsConfig::from_env()
    };
    let client = DirectionsClient::new(config)?;

    let options = OptimizeOptions {
        max_iterations: cli.iterations,
        max_waypoints: cli.max_waypoints,
        mode: cli.mode,
        sampling: cli.sampling,
        metric: cli.metric,
        seed: cli.seed,
    };
    let result = optimize(&track, &client, &options)?;
    let report = result.distance_report(&track);

    println!("Optimized route URL: {}", result.url());
    println!("Similarity to original track ({}): {}", options.metric, result.score);
    println!("Total distance of the original track: {:.2} km", report.track_km);
    println!("Total distance of the directions route: {:.2} km", report.route_km);

    write_html(
        &cli.map_output,
        &MapLayers {
            original: track.points(),
            sampled: result.waypoints().points(),
            route: result.candidate.route.points(),
        },
    )?;
    println!("Map saved to {}", cli.map_output.display());

    Ok(())
}
