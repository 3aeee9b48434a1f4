//! Inventory service: validation and defaulting on top of the items repository

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::item::{CreateItem, Item, ItemQuery, UpdateItem},
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &ItemQuery) -> AppResult<Vec<Item>> {
        self.repository.items.list(query).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Item> {
        self.repository.items.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateItem) -> AppResult<Item> {
        let data = normalize_create(data)?;
        self.repository.items.create(&data).await
    }

    pub async fn update(&self, id: Uuid, data: UpdateItem) -> AppResult<Item> {
        let data = normalize_update(data)?;
        self.repository.items.update(id, &data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.items.delete(id).await
    }
}

fn trimmed(s: String) -> String {
    s.trim().to_string()
}

/// Trim string fields, default the quantity, then validate.
fn normalize_create(mut data: CreateItem) -> AppResult<CreateItem> {
    data.name = trimmed(data.name);
    data.category = trimmed(data.category);
    data.location.room = trimmed(data.location.room);
    data.description = data.description.map(trimmed).filter(|d| !d.is_empty());
    data.quantity = Some(data.quantity.unwrap_or(1));
    data.validate()?;
    Ok(data)
}

/// Trim whichever string fields are present, then validate.
fn normalize_update(mut data: UpdateItem) -> AppResult<UpdateItem> {
    data.name = data.name.map(trimmed);
    data.category = data.category.map(trimmed);
    data.description = data.description.map(trimmed);
    if let Some(ref mut location) = data.location {
        location.room = location.room.trim().to_string();
    }
    data.validate()?;
    Ok(data)
}
