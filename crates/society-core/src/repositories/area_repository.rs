//! Area repository trait (port)

use async_trait::async_trait;
use society_shared::EntityId;

use crate::domain::{Area, NewArea};
use crate::error::DomainError;

#[async_trait]
pub trait AreaRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Area>, DomainError>;
    async fn list(&self) -> Result<Vec<Area>, DomainError>;
    async fn create(&self, area: &NewArea) -> Result<Area, DomainError>;
    async fn update(&self, area: &Area) -> Result<Area, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
