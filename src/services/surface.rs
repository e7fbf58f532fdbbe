// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map surface adapter boundary.
//!
//! The core never draws. It hands a `MapSurface` the marker set, the path,
//! and camera requests; the surface owns projection, tiles, and easing.
//! `CommandBuffer` is the surface used by the HTTP shell: it queues
//! commands for the browser-side adapter to apply.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Coordinate;
use crate::services::projection::{Bounds, MapView, Marker, TripPath};

/// Outbound rendering/camera commands.
pub trait MapSurface {
    /// Replace all rendered markers with exactly this set.
    fn render_markers(&mut self, markers: &[Marker]);
    /// Draw the path line, or remove it when `None`.
    fn render_path(&mut self, path: Option<&TripPath>);
    /// Center the camera on a coordinate.
    fn fly_to(&mut self, center: Coordinate, zoom: f64);
    /// Frame the camera around a bounding box.
    fn fit_bounds(&mut self, bounds: Bounds);
}

/// Inbound interaction events from the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum MapEvent {
    /// User clicked empty map at a coordinate
    Clicked { lng: f64, lat: f64 },
    /// User activated the marker of a pin
    MarkerActivated { pin_id: String },
}

/// Serialized form of a `MapSurface` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum SurfaceCommand {
    RenderMarkers { markers: Vec<Marker> },
    RenderPath { path: TripPath },
    RemovePath,
    FlyTo { center: Coordinate, zoom: f64 },
    FitBounds { bounds: Bounds },
}

/// Queue of commands waiting to be applied by the browser.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<SurfaceCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued command, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }
}

impl MapSurface for CommandBuffer {
    fn render_markers(&mut self, markers: &[Marker]) {
        self.commands.push(SurfaceCommand::RenderMarkers {
            markers: markers.to_vec(),
        });
    }

    fn render_path(&mut self, path: Option<&TripPath>) {
        self.commands.push(match path {
            Some(path) => SurfaceCommand::RenderPath { path: path.clone() },
            None => SurfaceCommand::RemovePath,
        });
    }

    fn fly_to(&mut self, center: Coordinate, zoom: f64) {
        self.commands.push(SurfaceCommand::FlyTo { center, zoom });
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.commands.push(SurfaceCommand::FitBounds { bounds });
    }
}

/// Push a view onto a surface: markers, then the path (fitted) or its removal.
pub fn redraw(view: &MapView, surface: &mut dyn MapSurface) {
    surface.render_markers(&view.markers);
    surface.render_path(view.path.as_ref());
    if let Some(path) = &view.path {
        surface.fit_bounds(path.bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> TripPath {
        TripPath {
            trip_id: "t1".to_string(),
            coordinates: vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)],
            bounds: Bounds {
                west: 0.0,
                south: 0.0,
                east: 1.0,
                north: 1.0,
            },
        }
    }

    #[test]
    fn test_redraw_without_path_removes_line() {
        let view = MapView {
            markers: vec![],
            path: None,
            selected: None,
        };
        let mut buffer = CommandBuffer::new();
        redraw(&view, &mut buffer);
        assert_eq!(
            buffer.drain(),
            vec![
                SurfaceCommand::RenderMarkers { markers: vec![] },
                SurfaceCommand::RemovePath
            ]
        );
        assert!(buffer.commands().is_empty());
    }

    #[test]
    fn test_redraw_with_path_fits_bounds() {
        let view = MapView {
            markers: vec![],
            path: Some(path()),
            selected: None,
        };
        let mut buffer = CommandBuffer::new();
        redraw(&view, &mut buffer);
        let commands = buffer.drain();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[2],
            SurfaceCommand::FitBounds {
                bounds: path().bounds
            }
        );
    }

    #[test]
    fn test_command_wire_format() {
        let json = serde_json::to_value(SurfaceCommand::FlyTo {
            center: Coordinate::new(24.95, 60.17),
            zoom: 14.0,
        })
        .unwrap();
        assert_eq!(json["command"], "fly_to");
        assert_eq!(json["center"]["lng"], 24.95);
    }

    #[test]
    fn test_map_event_wire_format() {
        let event: MapEvent =
            serde_json::from_str(r#"{"type":"clicked","lng":1.5,"lat":2.5}"#).unwrap();
        assert_eq!(event, MapEvent::Clicked { lng: 1.5, lat: 2.5 });
    }
}
