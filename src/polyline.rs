//! Coordinate sequences used throughout the approximation loop.
//!
//! Points are stored decoded as latitude/longitude pairs. Encoding to
//! service-specific formats happens at the boundary (the directions adapter
//! and the map renderer), not here.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// A (latitude, longitude) pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Formats as `lat,lng`, the form accepted by the directions service.
    pub fn to_query(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// An ordered sequence of points, e.g. a route returned by the directions service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The originally recorded track. Always holds at least 2 points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    points: Vec<GeoPoint>,
}

impl Track {
    pub fn new(points: Vec<GeoPoint>) -> Result<Self, RouteError> {
        if points.len() < 2 {
            return Err(RouteError::too_few_points("track", points.len()));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first(&self) -> GeoPoint {
        self.points[0]
    }

    pub fn last(&self) -> GeoPoint {
        self.points[self.points.len() - 1]
    }
}

/// Points selected from a track for submission to the directions service.
///
/// Always begins with the track's first point and ends with its last point.
/// Built by the sampler and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaypointSubset {
    points: Vec<GeoPoint>,
}

impl WaypointSubset {
    pub(crate) fn from_points(points: Vec<GeoPoint>) -> Self {
        debug_assert!(points.len() >= 2);
        Self { points }
    }

    /// Builds a subset from arbitrary points, e.g. when waypoints were chosen by hand.
    pub fn new(points: Vec<GeoPoint>) -> Result<Self, RouteError> {
        if points.len() < 2 {
            return Err(RouteError::too_few_points("waypoint subset", points.len()));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn origin(&self) -> GeoPoint {
        self.points[0]
    }

    pub fn destination(&self) -> GeoPoint {
        self.points[self.points.len() - 1]
    }

    /// Points strictly between origin and destination.
    pub fn intermediates(&self) -> &[GeoPoint] {
        &self.points[1..self.points.len() - 1]
    }
}

impl From<&Track> for WaypointSubset {
    fn from(track: &Track) -> Self {
        Self {
            points: track.points.clone(),
        }
    }
}
