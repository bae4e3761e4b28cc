//! Track builders.

use route_approx::{GeoPoint, Track};

/// `n` evenly spaced points from `from` to `to`, both included.
pub fn straight_line(n: usize, from: (f64, f64), to: (f64, f64)) -> Track {
    Track::new(line_points(n, from.into(), to.into())).expect("at least 2 points")
}

pub fn line_points(n: usize, from: GeoPoint, to: GeoPoint) -> Vec<GeoPoint> {
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            GeoPoint::new(
                from.lat + t * (to.lat - from.lat),
                from.lng + t * (to.lng - from.lng),
            )
        })
        .collect()
}

/// Points whose latitude encodes their index, handy for asserting on subsets.
pub fn numbered(n: usize) -> Track {
    Track::new((0..n).map(|i| GeoPoint::new(i as f64, (i % 3) as f64)).collect())
        .expect("at least 2 points")
}

pub fn indices(points: &[GeoPoint]) -> Vec<usize> {
    points.iter().map(|p| p.lat as usize).collect()
}

/// Shift every point by the same offset.
pub fn translated(points: &[GeoPoint], dlat: f64, dlng: f64) -> Vec<GeoPoint> {
    points
        .iter()
        .map(|p| GeoPoint::new(p.lat + dlat, p.lng + dlng))
        .collect()
}

/// A recorded cycling loop around Chevreuse, south-west of Paris.
pub const CHEVREUSE_LOOP: &[(f64, f64)] = &[
    (48.70640, 2.03890),
    (48.70712, 2.04105),
    (48.70803, 2.04377),
    (48.70921, 2.04602),
    (48.71054, 2.04851),
    (48.71170, 2.05133),
    (48.71248, 2.05460),
    (48.71301, 2.05792),
    (48.71322, 2.06140),
    (48.71290, 2.06481),
    (48.71208, 2.06790),
    (48.71087, 2.07042),
    (48.70931, 2.07213),
    (48.70752, 2.07301),
    (48.70563, 2.07296),
    (48.70381, 2.07204),
    (48.70215, 2.07031),
    (48.70083, 2.06792),
    (48.69990, 2.06507),
    (48.69941, 2.06190),
    (48.69937, 2.05861),
    (48.69978, 2.05536),
    (48.70056, 2.05230),
    (48.70161, 2.04953),
    (48.70283, 2.04710),
    (48.70409, 2.04488),
    (48.70502, 2.04262),
    (48.70571, 2.04063),
    (48.70640, 2.03890),
];

pub fn chevreuse_loop() -> Track {
    Track::new(CHEVREUSE_LOOP.iter().copied().map(GeoPoint::from).collect())
        .expect("fixture has many points")
}
