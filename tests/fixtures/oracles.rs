//! Mock routing oracles.

use std::cell::RefCell;
use std::collections::VecDeque;

use route_approx::traits::{RouteCandidate, RoutingOracle, TravelMode};
use route_approx::{GeoPoint, Polyline, RouteError, WaypointSubset};

use super::tracks::line_points;

fn candidate(route: Vec<GeoPoint>, url: String, waypoints: &WaypointSubset) -> RouteCandidate {
    RouteCandidate {
        route: Polyline::new(route),
        url,
        waypoints: waypoints.clone(),
    }
}

/// Routes exactly through the submitted waypoints.
pub struct EchoOracle;

impl RoutingOracle for EchoOracle {
    fn request_route(
        &self,
        waypoints: &WaypointSubset,
        _mode: TravelMode,
    ) -> Result<RouteCandidate, RouteError> {
        Ok(candidate(waypoints.points().to_vec(), "echo".to_string(), waypoints))
    }
}

/// Follows the straight segment from origin to destination at a fixed resolution.
pub struct StraightLineOracle {
    pub resolution: usize,
}

impl RoutingOracle for StraightLineOracle {
    fn request_route(
        &self,
        waypoints: &WaypointSubset,
        _mode: TravelMode,
    ) -> Result<RouteCandidate, RouteError> {
        let route = line_points(self.resolution, waypoints.origin(), waypoints.destination());
        Ok(candidate(route, "line".to_string(), waypoints))
    }
}

/// Never finds a route.
pub struct NoRouteOracle;

impl RoutingOracle for NoRouteOracle {
    fn request_route(
        &self,
        _waypoints: &WaypointSubset,
        _mode: TravelMode,
    ) -> Result<RouteCandidate, RouteError> {
        Err(RouteError::NoRouteFound)
    }
}

/// Replays queued responses in order and records every request.
///
/// Successful responses get the url `call-<n>` where `n` counts from 0.
pub struct ScriptedOracle {
    responses: RefCell<VecDeque<Result<Vec<GeoPoint>, RouteError>>>,
    calls: RefCell<Vec<(WaypointSubset, TravelMode)>>,
}

impl ScriptedOracle {
    pub fn new(responses: Vec<Result<Vec<GeoPoint>, RouteError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(WaypointSubset, TravelMode)> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl RoutingOracle for ScriptedOracle {
    fn request_route(
        &self,
        waypoints: &WaypointSubset,
        mode: TravelMode,
    ) -> Result<RouteCandidate, RouteError> {
        let n = self.call_count();
        self.calls.borrow_mut().push((waypoints.clone(), mode));
        let next = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("script exhausted at call {}", n));
        next.map(|route| candidate(route, format!("call-{}", n), waypoints))
    }
}

/// Wraps another oracle and records the subsets it was asked for.
pub struct Recording<O> {
    inner: O,
    calls: RefCell<Vec<WaypointSubset>>,
}

impl<O> Recording<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<WaypointSubset> {
        self.calls.borrow().clone()
    }
}

impl<O: RoutingOracle> RoutingOracle for Recording<O> {
    fn request_route(
        &self,
        waypoints: &WaypointSubset,
        mode: TravelMode,
    ) -> Result<RouteCandidate, RouteError> {
        self.calls.borrow_mut().push(waypoints.clone());
        self.inner.request_route(waypoints, mode)
    }
}
