//! Collection repository trait (port)

use async_trait::async_trait;
use society_shared::EntityId;

use crate::domain::{Collection, NewCollection};
use crate::error::DomainError;

#[async_trait]
pub trait CollectionRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Collection>, DomainError>;
    async fn list(&self) -> Result<Vec<Collection>, DomainError>;
    async fn create(&self, collection: &NewCollection) -> Result<Collection, DomainError>;
    async fn update(&self, collection: &Collection) -> Result<Collection, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
