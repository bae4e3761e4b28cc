//! Standalone HTML map overlaying the track, sampled waypoints and route.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::json;

use crate::polyline::GeoPoint;

const ZOOM: u8 = 13;

/// The three polylines drawn on the map.
#[derive(Debug, Clone, Copy)]
pub struct MapLayers<'a> {
    pub original: &'a [GeoPoint],
    pub sampled: &'a [GeoPoint],
    pub route: &'a [GeoPoint],
}

struct Layer<'a> {
    points: &'a [GeoPoint],
    color: &'static str,
    label: &'static str,
}

/// Render the layers to a Leaflet page centred on the track's first point.
pub fn render_html(layers: &MapLayers<'_>) -> String {
    let start = layers.original.first().copied().unwrap_or(GeoPoint::new(0.0, 0.0));

    let drawn = [
        Layer {
            points: layers.original,
            color: "blue",
            label: "Original GPX Route",
        },
        Layer {
            points: layers.sampled,
            color: "green",
            label: "Sampled Waypoints",
        },
        Layer {
            points: layers.route,
            color: "red",
            label: "Directions Route",
        },
    ];

    let mut script = String::new();
    for layer in &drawn {
        let coords: Vec<[f64; 2]> = layer.points.iter().map(|p| [p.lat, p.lng]).collect();
        let style = json!({ "color": layer.color, "weight": 2.5, "opacity": 1 });
        script.push_str(&format!(
            "L.polyline({}, {}).bindPopup({}).addTo(map);\n",
            json!(coords),
            style,
            json!(layer.label),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>Route approximation</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map('map').setView([{lat}, {lng}], {zoom});
L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
  attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);
{script}</script>
</body>
</html>
"#,
        lat = start.lat,
        lng = start.lng,
        zoom = ZOOM,
        script = script,
    )
}

/// Render and write the map to `path`.
pub fn write_html(path: impl AsRef<Path>, layers: &MapLayers<'_>) -> io::Result<()> {
    fs::write(path, render_html(layers))
}
