//! Subcollection repository trait (port)

use async_trait::async_trait;
use society_shared::EntityId;

use crate::domain::{NewSubcollection, Subcollection};
use crate::error::DomainError;

#[async_trait]
pub trait SubcollectionRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Subcollection>, DomainError>;
    async fn list(&self) -> Result<Vec<Subcollection>, DomainError>;
    async fn list_by_collection(
        &self,
        collection_id: EntityId,
    ) -> Result<Vec<Subcollection>, DomainError>;
    async fn create(&self, subcollection: &NewSubcollection)
        -> Result<Subcollection, DomainError>;
    async fn update(&self, subcollection: &Subcollection) -> Result<Subcollection, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
