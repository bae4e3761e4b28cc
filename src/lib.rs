//! route-approx core
//!
//! Approximates a recorded GPS track with a route from a turn-by-turn
//! directions service that only accepts a bounded number of waypoints.

pub mod error;
pub mod polyline;
pub mod haversine;
pub mod similarity;
pub mod sampler;
pub mod traits;
pub mod directions;
pub mod optimizer;
pub mod gpx_source;
pub mod render;

pub use error::{RouteError, UpstreamError};
pub use optimizer::{OptimizationResult, OptimizeOptions, optimize};
pub use polyline::{GeoPoint, Polyline, Track, WaypointSubset};
