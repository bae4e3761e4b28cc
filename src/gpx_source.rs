//! Reads a recorded track from a GPX document.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::polyline::{GeoPoint, Track};

#[derive(Debug, thiserror::Error)]
pub enum TrackSourceError {
    #[error("cannot read track file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse GPX: {0}")]
    Parse(String),

    #[error("track has {0} points, at least 2 are needed")]
    Degenerate(usize),
}

/// Read every track point of the GPX file at `path`.
pub fn read_track(path: impl AsRef<Path>) -> Result<Track, TrackSourceError> {
    let file = File::open(path.as_ref())?;
    parse_track(BufReader::new(file))
}

/// Collect points across all tracks and segments in document order.
pub fn parse_track<R: Read>(reader: R) -> Result<Track, TrackSourceError> {
    let gpx = gpx::read(reader).map_err(|e| TrackSourceError::Parse(e.to_string()))?;

    let points: Vec<GeoPoint> = gpx
        .tracks
        .iter()
        .flat_map(|track| track.segments.iter())
        .flat_map(|segment| segment.points.iter())
        .map(|waypoint| {
            let point = waypoint.point();
            GeoPoint::new(point.y(), point.x())
        })
        .collect();

    let count = points.len();
    Track::new(points).map_err(|_| TrackSourceError::Degenerate(count))
}
