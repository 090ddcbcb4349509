use crate::track::{Track, lat_lon};
use serde::Serialize;

pub const TRACK_WEIGHT: f64 = 2.5;
pub const TRACK_OPACITY: f64 = 1.0;

const LEAFLET_VERSION: &str = "1.9.4";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    /// `[lat, lon]` pairs in drawing order.
    pub coordinates: Vec<[f64; 2]>,
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub tooltip: String,
}

/// Everything the generated page draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDocument {
    pub center: [f64; 2],
    pub zoom: u8,
    pub polylines: Vec<Polyline>,
}

impl MapDocument {
    /// Lays out one polyline per track, centered on the first point of the
    /// first track. Returns `None` when there is nothing to draw.
    ///
    /// Tooltips are numbered by position in `tracks`, so callers must drop
    /// empty tracks first.
    pub fn from_tracks(tracks: &[Track], color: &str, zoom: u8) -> Option<Self> {
        let center = tracks.first()?.start().map(lat_lon)?;

        let polylines = tracks
            .iter()
            .enumerate()
            .map(|(i, track)| Polyline {
                coordinates: track.points.iter().map(lat_lon).collect(),
                color: color.to_string(),
                weight: TRACK_WEIGHT,
                opacity: TRACK_OPACITY,
                tooltip: format!("Track {}", i + 1),
            })
            .collect();

        Some(MapDocument {
            center,
            zoom,
            polylines,
        })
    }

    /// Standalone HTML page showing the map with Leaflet.
    pub fn to_html(&self) -> Result<String, serde_json::Error> {
        // keeps "</script>" inside string values from ending the script block
        let data = serde_json::to_string(self)?.replace("</", "<\\/");

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Tracks</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@{version}/dist/leaflet.css" />
  <script src="https://unpkg.com/leaflet@{version}/dist/leaflet.js"></script>
  <style>
    html, body {{ width: 100%; height: 100%; margin: 0; padding: 0; }}
    #map {{ position: absolute; top: 0; bottom: 0; left: 0; right: 0; }}
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    const data = {data};
    const map = L.map("map").setView(data.center, data.zoom);
    L.tileLayer({tile_url}, {{ maxZoom: 19, attribution: {attribution} }}).addTo(map);
    for (const line of data.polylines) {{
      L.polyline(line.coordinates, {{
        color: line.color,
        weight: line.weight,
        opacity: line.opacity,
      }})
        .bindTooltip(line.tooltip, {{ sticky: true }})
        .addTo(map);
    }}
  </script>
</body>
</html>
"#,
            version = LEAFLET_VERSION,
            data = data,
            tile_url = serde_json::to_string(TILE_URL)?,
            attribution = serde_json::to_string(TILE_ATTRIBUTION)?.replace("</", "<\\/"),
        ))
    }
}
