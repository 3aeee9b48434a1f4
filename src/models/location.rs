//! Locations: the (floor, room) pair stored on every item, and the static
//! building plan the dashboard drills through.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Where an item is stored. Always a complete pair; an update replaces the
/// whole location, never one half of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
pub struct Location {
    pub floor: i32,
    #[validate(length(min = 1, message = "room is required"))]
    pub room: String,
}

/// One floor of the building plan: numeric floor, display label, room names.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Floor {
    pub floor: i32,
    pub label: String,
    pub rooms: Vec<String>,
}

static FLOOR_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Extract the leading floor number from a display label ("1st Floor" -> 1).
pub fn parse_floor_label(label: &str) -> Option<i32> {
    FLOOR_NUMBER.find(label)?.as_str().parse().ok()
}

/// The building's room layout. Static for now, matching the rooms the
/// dashboard presents.
static BUILDING_PLAN: Lazy<Vec<Floor>> = Lazy::new(|| {
    let floors: [(&str, &[&str]); 4] = [
        (
            "1st Floor",
            &[
                "Pro Sto (Production Storage)",
                "Atrium Closet",
                "TV Cart Storage",
            ],
        ),
        ("2nd Floor", &["Pegasus Penthouse"]),
        ("3rd Floor", &["Third Floor Storage", "Charge on Chamber"]),
        ("4th Floor", &["4th Floor Storage", "Farith's office"]),
    ];

    floors
        .iter()
        .map(|(label, rooms)| Floor {
            floor: parse_floor_label(label).unwrap_or(0),
            label: label.to_string(),
            rooms: rooms.iter().map(|r| r.to_string()).collect(),
        })
        .collect()
});

/// All floors of the building plan.
pub fn building_floors() -> &'static [Floor] {
    &BUILDING_PLAN
}
