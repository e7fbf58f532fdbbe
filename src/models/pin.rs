// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pin model: a geo-tagged place dropped on the map.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Title used when a pin is created with a blank title.
pub const UNTITLED_PLACE: &str = "Untitled place";

/// A longitude/latitude pair in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Both components are finite and inside the valid degree ranges.
    pub fn is_valid(&self) -> bool {
        self.lng.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lng)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::coord! { x: c.lng, y: c.lat }
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self { lng: c.x, lat: c.y }
    }
}

/// Fixed set of pin categories.
///
/// Unknown values read from storage collapse to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Category {
    #[default]
    Landmark,
    Food,
    Museum,
    Nature,
    Stay,
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Landmark,
        Category::Food,
        Category::Museum,
        Category::Nature,
        Category::Stay,
        Category::Other,
    ];

    /// Wire/display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Landmark => "landmark",
            Category::Food => "food",
            Category::Museum => "museum",
            Category::Nature => "nature",
            Category::Stay => "stay",
            Category::Other => "other",
        }
    }

    /// Marker color (hex) for this category.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Landmark => "#2563eb", // blue
            Category::Food => "#f59e0b",     // amber
            Category::Museum => "#7c3aed",   // purple
            Category::Nature => "#16a34a",   // green
            Category::Stay => "#e11d48",     // rose
            Category::Other => "#6b7280",    // gray
        }
    }
}

/// Stored pin record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Pin {
    /// Opaque unique identifier
    pub id: String,
    /// Place title (never empty)
    pub title: String,
    /// Free-text notes, may be empty
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    /// Visit date
    pub date: NaiveDate,
    pub coordinate: Coordinate,
}

/// In-progress form fields for a pin that has not been placed yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PinDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    /// Defaults to the creation date when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Pin {
    /// Build a pin from a draft, applying the title and date defaults.
    pub fn from_draft(id: String, draft: &PinDraft, coordinate: Coordinate, today: NaiveDate) -> Self {
        let title = draft.title.trim();
        Self {
            id,
            title: if title.is_empty() {
                UNTITLED_PLACE.to_string()
            } else {
                title.to_string()
            },
            description: draft.description.clone(),
            category: draft.category,
            date: draft.date.unwrap_or(today),
            coordinate,
        }
    }
}

/// Built-in sample pins used when no readable pin collection is stored.
pub fn seed_pins() -> Vec<Pin> {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default();
    let seed = |id: &str, title: &str, description: &str, category, lng, lat| Pin {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        date,
        coordinate: Coordinate::new(lng, lat),
    };

    vec![
        seed(
            "seed-helsinki-cathedral",
            "Helsinki Cathedral",
            "White cathedral above Senate Square.",
            Category::Landmark,
            24.9522,
            60.1704,
        ),
        seed(
            "seed-old-market-hall",
            "Old Market Hall",
            "Covered market by the harbour.",
            Category::Food,
            24.9536,
            60.1672,
        ),
        seed(
            "seed-ateneum",
            "Ateneum",
            "Finnish National Gallery.",
            Category::Museum,
            24.9441,
            60.1701,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    #[test]
    fn test_blank_title_defaults_to_untitled() {
        let draft = PinDraft {
            title: "   ".to_string(),
            ..Default::default()
        };
        let pin = Pin::from_draft("p1".into(), &draft, Coordinate::new(1.0, 2.0), today());
        assert_eq!(pin.title, UNTITLED_PLACE);
        assert_eq!(pin.date, today());
    }

    #[test]
    fn test_draft_date_wins_over_today() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let draft = PinDraft {
            title: " Kiasma ".to_string(),
            category: Category::Museum,
            date: Some(date),
            ..Default::default()
        };
        let pin = Pin::from_draft("p1".into(), &draft, Coordinate::new(1.0, 2.0), today());
        assert_eq!(pin.title, "Kiasma");
        assert_eq!(pin.date, date);
        assert_eq!(pin.category, Category::Museum);
    }

    #[test]
    fn test_description_kept_as_entered() {
        let draft = PinDraft {
            title: "Pier".to_string(),
            description: "  two spaces\n  indented line\n".to_string(),
            ..Default::default()
        };
        let pin = Pin::from_draft("p1".into(), &draft, Coordinate::new(1.0, 2.0), today());
        assert_eq!(pin.description, "  two spaces\n  indented line\n");
    }

    #[test]
    fn test_unknown_category_reads_as_other() {
        let category: Category = serde_json::from_str("\"volcano\"").unwrap();
        assert_eq!(category, Category::Other);
        assert_eq!(category.color(), "#6b7280");
    }

    #[test]
    fn test_category_wire_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(24.95, 60.17).is_valid());
        assert!(!Coordinate::new(200.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn test_seed_ids_unique() {
        let pins = seed_pins();
        let ids: std::collections::HashSet<_> = pins.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), pins.len());
    }
}
