//! Google Directions HTTP adapter.
//!
//! Wire details (query layout, response schema, status codes) stay in this
//! module; callers only see [`RoutingOracle`].

use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::error::{RouteError, UpstreamError};
use crate::polyline::{GeoPoint, Polyline, WaypointSubset};
use crate::traits::{RouteCandidate, RoutingOracle, TravelMode};

/// Total points (origin and destination included) submitted per request.
pub const DEFAULT_MAX_WAYPOINTS: usize = 23;

const DIRECTIONS_PATH: &str = "/maps/api/directions/json";
const SHARE_BASE: &str = "https://www.google.com/maps/dir/";

#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    pub base_url: String,
    pub api_key: String,
    /// Per-request timeout applied to the HTTP client.
    pub timeout_secs: u64,
    /// Hard cap on submitted points, origin and destination included.
    pub max_waypoints: usize,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
            max_waypoints: DEFAULT_MAX_WAYPOINTS,
        }
    }
}

impl DirectionsConfig {
    /// Defaults overridden by `GOOGLE_MAPS_API_KEY` and `DIRECTIONS_BASE_URL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("GOOGLE_MAPS_API_KEY") {
            config.api_key = key;
        }
        if let Ok(base_url) = std::env::var("DIRECTIONS_BASE_URL") {
            config.base_url = base_url;
        }
        config
    }
}

#[derive(Debug, Clone)]
pub struct DirectionsClient {
    config: DirectionsConfig,
    client: reqwest::blocking::Client,
}

impl DirectionsClient {
    pub fn new(config: DirectionsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn query_params(
        &self,
        waypoints: &WaypointSubset,
        mode: TravelMode,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("origin", waypoints.origin().to_query()),
            ("destination", waypoints.destination().to_query()),
            ("mode", mode.as_str().to_string()),
        ];

        let intermediates = waypoints.intermediates();
        if !intermediates.is_empty() {
            let mut value = String::from("optimize:true");
            for point in intermediates {
                value.push('|');
                value.push_str(&point.to_query());
            }
            params.push(("waypoints", value));
        }

        params.push(("key", self.config.api_key.clone()));
        params
    }
}

impl RoutingOracle for DirectionsClient {
    fn request_route(
        &self,
        waypoints: &WaypointSubset,
        mode: TravelMode,
    ) -> Result<RouteCandidate, RouteError> {
        if waypoints.len() > self.config.max_waypoints {
            return Err(RouteError::InvalidInput(format!(
                "{} waypoints exceed the service cap of {}",
                waypoints.len(),
                self.config.max_waypoints
            )));
        }

        let url = format!("{}{}", self.config.base_url, DIRECTIONS_PATH);
        debug!(waypoints = waypoints.len(), %mode, "requesting directions");

        let body = self
            .client
            .get(url)
            .query(&self.query_params(waypoints, mode))
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<DirectionsResponse>())?;

        let points = route_points(body)?;
        debug!(points = points.len(), "directions returned route");

        Ok(RouteCandidate {
            route: Polyline::new(points),
            url: share_url(waypoints, mode)?,
            waypoints: waypoints.clone(),
        })
    }
}

/// Link that opens the submitted waypoints in the Google Maps UI.
pub fn share_url(waypoints: &WaypointSubset, mode: TravelMode) -> Result<String, RouteError> {
    let mut params = vec![
        ("api", "1".to_string()),
        ("origin", waypoints.origin().to_query()),
        ("destination", waypoints.destination().to_query()),
    ];

    let intermediates = waypoints.intermediates();
    if !intermediates.is_empty() {
        let joined = intermediates
            .iter()
            .map(GeoPoint::to_query)
            .collect::<Vec<_>>()
            .join("|");
        params.push(("waypoints", joined));
    }
    params.push(("travelmode", mode.as_str().to_string()));

    Url::parse_with_params(SHARE_BASE, &params)
        .map(String::from)
        .map_err(|err| RouteError::InvalidInput(format!("cannot build share url: {}", err)))
}

/// Flattens the first itinerary into start/end points of every step, in
/// leg order then step order.
fn route_points(body: DirectionsResponse) -> Result<Vec<GeoPoint>, RouteError> {
    match body.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" | "NOT_FOUND" => return Err(RouteError::NoRouteFound),
        _ => {
            return Err(UpstreamError::Status {
                status: body.status,
                message: body.error_message,
            }
            .into());
        }
    }

    let route = body.routes.into_iter().next().ok_or(RouteError::NoRouteFound)?;

    let points: Vec<GeoPoint> = route
        .legs
        .iter()
        .flat_map(|leg| leg.steps.iter())
        .flat_map(|step| [GeoPoint::from(step.start_location), GeoPoint::from(step.end_location)])
        .collect();

    if points.len() < 2 {
        return Err(RouteError::NoRouteFound);
    }
    Ok(points)
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    #[serde(default)]
    steps: Vec<DirectionsStep>,
}

#[derive(Debug, Deserialize)]
struct DirectionsStep {
    start_location: LatLng,
    end_location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<LatLng> for GeoPoint {
    fn from(value: LatLng) -> Self {
        GeoPoint::new(value.lat, value.lng)
    }
}
