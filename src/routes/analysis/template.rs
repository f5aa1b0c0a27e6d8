//! Server-rendered analysis page: city selector, Leaflet map and the
//! nearest-branch message.

use crate::configuration::MapSettings;
use crate::domain::{BranchReport, City};
use std::fmt::Write;

const TITLE: &str = "Mappa degli utenti non 100% digital";

#[derive(serde::Serialize)]
struct Marker {
    title: &'static str,
    position: [f64; 2],
}

pub fn render(map: &MapSettings, report: &BranchReport) -> Result<String, anyhow::Error> {
    let markers = City::ALL
        .iter()
        .map(|city| Marker {
            title: city.name(),
            position: [city.location().latitude, city.location().longitude],
        })
        .collect::<Vec<_>>();
    let markers = script_safe(&serde_json::to_string(&markers)?);
    let center = script_safe(&serde_json::to_string(&[
        map.center.latitude,
        map.center.longitude,
    ])?);
    let tile_url = script_safe(&serde_json::to_string(&map.tile_url)?);

    let mut html = String::new();
    write!(
        html,
        r#"<!DOCTYPE html>
<html lang="it">
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
</head>
<body>
<h1>{title}</h1>
{selector}
<br>
<div id="map" style="width: 100%; height: 50vh"></div>
<br>
<div id="closest-location-info">{info}</div>
<script>
const map = L.map("map").setView({center}, {zoom});
L.tileLayer({tile_url}).addTo(map);
for (const marker of {markers}) {{
  L.marker(marker.position, {{ title: marker.title }}).addTo(map);
}}
</script>
</body>
</html>
"#,
        title = TITLE,
        selector = selector(report.city),
        info = info(report),
        center = center,
        zoom = map.zoom,
        tile_url = tile_url,
        markers = markers,
    )?;

    Ok(html)
}

/// Radio buttons, one per city; picking one reloads the page with `?city=`.
fn selector(selected: City) -> String {
    let mut html = String::from(r#"<form id="marker-selector" method="get" action="/analysis">"#);
    for city in City::ALL {
        let location = city.location();
        let label = format!(
            "{} (Coordinates: {:.4}, {:.4})",
            city.name(),
            location.latitude,
            location.longitude
        );
        let checked = if city == selected { " checked" } else { "" };
        html.push_str(&format!(
            r#"<label><input type="radio" name="city" value="{value}" onchange="this.form.submit()"{checked}> {label}</label><br>"#,
            value = escape_html(city.name()),
            label = escape_html(&label),
        ));
    }
    html.push_str("</form>");
    html
}

fn info(report: &BranchReport) -> String {
    let lines = report
        .message_lines()
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>();

    format!("<p>{}</p>", lines.join("<br>"))
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// JSON embedded in a `<script>` block must not close the element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
