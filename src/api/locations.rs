//! Building plan endpoint backing the dashboard's floor/room hierarchy

use axum::Json;

use crate::models::location::{building_floors, Floor};

/// List the building's floors and rooms
#[utoipa::path(
    get,
    path = "/locations",
    tag = "locations",
    responses(
        (status = 200, description = "Floors with their rooms", body = Vec<Floor>)
    )
)]
pub async fn list_locations() -> Json<Vec<Floor>> {
    Json(building_floors().to_vec())
}
