//! Business logic services

pub mod inventory;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub inventory: inventory::InventoryService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            inventory: inventory::InventoryService::new(repository.clone()),
            repository,
        }
    }

    /// Confirm the database answers (used by the readiness probe)
    pub async fn ping_database(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
