//! The routing oracle seam.
//!
//! The optimizer only needs "submit ordered waypoints and a mode, get back a
//! polyline or a no-route failure". Concrete services implement
//! [`RoutingOracle`]; tests implement it with in-memory mocks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::polyline::{Polyline, WaypointSubset};

/// Travel mode requested from the directions service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "driving" => Ok(TravelMode::Driving),
            "walking" => Ok(TravelMode::Walking),
            "bicycling" | "cycling" => Ok(TravelMode::Bicycling),
            "transit" => Ok(TravelMode::Transit),
            other => Err(format!("unknown travel mode '{}'", other)),
        }
    }
}

/// Output of one oracle invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteCandidate {
    /// Route geometry as returned by the service.
    pub route: Polyline,
    /// Shareable link for display. Never read by the optimizer.
    pub url: String,
    /// The waypoints that were submitted.
    pub waypoints: WaypointSubset,
}

/// An external turn-by-turn directions service.
pub trait RoutingOracle {
    /// Request a route through `waypoints` in order, letting the service
    /// reorder intermediates while origin and destination stay fixed.
    ///
    /// Fails with [`RouteError::NoRouteFound`] when the service has no
    /// itinerary and [`RouteError::Upstream`] for transport, auth or quota
    /// problems.
    fn request_route(
        &self,
        waypoints: &WaypointSubset,
        mode: TravelMode,
    ) -> Result<RouteCandidate, RouteError>;
}
