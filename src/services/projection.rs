// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View projection: what the map should show for the current state.
//!
//! Pure derivation from the document and selection. Drawing is left to a
//! `MapSurface` implementation.

use geo::{BoundingRect, LineString};
use geojson::{feature, Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Coordinate, Pin, Selection, Snapshot};
use crate::time_utils::format_date;

/// Everything the map surface needs to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MapView {
    pub markers: Vec<Marker>,
    pub path: Option<TripPath>,
    pub selected: Option<Pin>,
}

/// One marker per pin.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Marker {
    pub pin_id: String,
    pub coordinate: Coordinate,
    /// Hex color from the category palette
    pub color: String,
    pub popup: Popup,
}

/// Popup summary. Every field is already HTML-escaped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Popup {
    pub title: String,
    pub category: String,
    pub date: String,
    pub description: String,
}

/// Connected line for the active trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TripPath {
    pub trip_id: String,
    /// Resolved coordinates in trip order (at least two)
    pub coordinates: Vec<Coordinate>,
    pub bounds: Bounds,
}

/// Bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Bounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

/// Escape `& < > " '` for embedding in markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl Popup {
    pub fn from_pin(pin: &Pin) -> Self {
        Self {
            title: escape_html(&pin.title),
            category: escape_html(pin.category.as_str()),
            date: escape_html(&format_date(pin.date)),
            description: escape_html(&pin.description),
        }
    }

    /// Render the popup body as an HTML fragment.
    pub fn to_markup(&self) -> String {
        let mut html = format!(
            "<strong>{}</strong><br><small>{} · {}</small>",
            self.title, self.category, self.date
        );
        if !self.description.is_empty() {
            html.push_str(&format!("<p>{}</p>", self.description));
        }
        html
    }
}

impl Marker {
    pub fn from_pin(pin: &Pin) -> Self {
        Self {
            pin_id: pin.id.clone(),
            coordinate: pin.coordinate,
            color: pin.category.color().to_string(),
            popup: Popup::from_pin(pin),
        }
    }
}

/// Resolve the active trip into a drawable path.
///
/// Pin ids that no longer resolve are skipped. Returns `None` when fewer
/// than two coordinates remain.
pub fn trip_path(doc: &Snapshot, trip_id: &str) -> Option<TripPath> {
    let trip = doc.trip(trip_id)?;
    let coordinates: Vec<Coordinate> = trip
        .pin_ids
        .iter()
        .filter_map(|id| doc.pin(id))
        .map(|p| p.coordinate)
        .collect();

    if coordinates.len() < 2 {
        return None;
    }

    let line: LineString<f64> = coordinates.iter().map(|&c| geo::Coord::from(c)).collect();
    let rect = line.bounding_rect()?;

    Some(TripPath {
        trip_id: trip.id.clone(),
        coordinates,
        bounds: Bounds {
            west: rect.min().x,
            south: rect.min().y,
            east: rect.max().x,
            north: rect.max().y,
        },
    })
}

/// Derive the full map view.
pub fn project(doc: &Snapshot, selection: &Selection) -> MapView {
    MapView {
        markers: doc.pins.iter().map(Marker::from_pin).collect(),
        path: selection
            .active_trip
            .as_deref()
            .and_then(|id| trip_path(doc, id)),
        selected: selection
            .selected_pin
            .as_deref()
            .and_then(|id| doc.pin(id))
            .cloned(),
    }
}

impl MapView {
    /// GeoJSON rendition: one Point per marker plus a LineString for the path.
    pub fn to_geojson(&self) -> FeatureCollection {
        let mut features: Vec<Feature> = self
            .markers
            .iter()
            .map(|m| {
                let mut props = JsonObject::new();
                props.insert("kind".to_string(), "marker".into());
                props.insert("color".to_string(), m.color.clone().into());
                props.insert("title".to_string(), m.popup.title.clone().into());
                props.insert("category".to_string(), m.popup.category.clone().into());
                props.insert("date".to_string(), m.popup.date.clone().into());
                props.insert("description".to_string(), m.popup.description.clone().into());
                props.insert("popup".to_string(), m.popup.to_markup().into());
                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Point(vec![
                        m.coordinate.lng,
                        m.coordinate.lat,
                    ]))),
                    id: Some(feature::Id::String(m.pin_id.clone())),
                    properties: Some(props),
                    foreign_members: None,
                }
            })
            .collect();

        if let Some(path) = &self.path {
            let mut props = JsonObject::new();
            props.insert("kind".to_string(), "path".into());
            features.push(Feature {
                bbox: Some(vec![
                    path.bounds.west,
                    path.bounds.south,
                    path.bounds.east,
                    path.bounds.north,
                ]),
                geometry: Some(Geometry::new(Value::LineString(
                    path.coordinates.iter().map(|c| vec![c.lng, c.lat]).collect(),
                ))),
                id: Some(feature::Id::String(path.trip_id.clone())),
                properties: Some(props),
                foreign_members: None,
            });
        }

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}
