//! Items repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::item::{CreateItem, Item, ItemQuery, UpdateItem},
};

const ITEM_COLUMNS: &str = "id, name, description, category, quantity, floor, room, created_at, updated_at";

#[derive(Clone)]
pub struct ItemsRepository {
    pool: Pool<Postgres>,
}

impl ItemsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List items, optionally narrowed to a floor and/or room
    pub async fn list(&self, query: &ItemQuery) -> AppResult<Vec<Item>> {
        let items = match (query.floor, query.room.as_deref()) {
            (Some(floor), Some(room)) => {
                sqlx::query_as::<_, Item>(&format!(
                    "SELECT {ITEM_COLUMNS} FROM items WHERE floor = $1 AND room = $2 ORDER BY created_at"
                ))
                .bind(floor)
                .bind(room)
                .fetch_all(&self.pool)
                .await?
            }
            (Some(floor), None) => {
                sqlx::query_as::<_, Item>(&format!(
                    "SELECT {ITEM_COLUMNS} FROM items WHERE floor = $1 ORDER BY created_at"
                ))
                .bind(floor)
                .fetch_all(&self.pool)
                .await?
            }
            (None, Some(room)) => {
                sqlx::query_as::<_, Item>(&format!(
                    "SELECT {ITEM_COLUMNS} FROM items WHERE room = $1 ORDER BY created_at"
                ))
                .bind(room)
                .fetch_all(&self.pool)
                .await?
            }
            (None, None) => {
                sqlx::query_as::<_, Item>(&format!(
                    "SELECT {ITEM_COLUMNS} FROM items ORDER BY created_at"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(items)
    }

    /// Get an item by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))
    }

    /// Insert a new item and return the stored record
    pub async fn create(&self, data: &CreateItem) -> AppResult<Item> {
        let item = sqlx::query_as::<_, Item>(&format!(
            r#"
            INSERT INTO items (id, name, description, category, quantity, floor, room)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ITEM_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.category)
        .bind(data.quantity.unwrap_or(1))
        .bind(data.location.floor)
        .bind(&data.location.room)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    /// Apply the provided fields to an item and return the updated record
    pub async fn update(&self, id: Uuid, data: &UpdateItem) -> AppResult<Item> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.name, "name");
        add_field!(data.description, "description");
        add_field!(data.category, "category");
        add_field!(data.quantity, "quantity");
        if data.location.is_some() {
            sets.push(format!("floor = ${}", idx));
            idx += 1;
            sets.push(format!("room = ${}", idx));
            idx += 1;
        }

        let query = format!(
            "UPDATE items SET {} WHERE id = ${} RETURNING {}",
            sets.join(", "),
            idx,
            ITEM_COLUMNS
        );

        let mut builder = sqlx::query_as::<_, Item>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.description);
        bind_field!(data.category);
        bind_field!(data.quantity);
        if let Some(ref location) = data.location {
            builder = builder.bind(location.floor);
            builder = builder.bind(&location.room);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))
    }

    /// Delete an item
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Item {} not found", id)));
        }
        Ok(())
    }
}
