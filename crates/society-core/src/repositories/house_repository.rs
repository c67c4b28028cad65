//! House repository trait (port)

use async_trait::async_trait;
use society_shared::EntityId;

use crate::domain::{House, NewHouse};
use crate::error::DomainError;

#[async_trait]
pub trait HouseRepository: Send + Sync {
    async fn find_by_id(&self, home_id: EntityId) -> Result<Option<House>, DomainError>;
    async fn list(&self) -> Result<Vec<House>, DomainError>;
    async fn create(&self, house: &NewHouse) -> Result<House, DomainError>;
    async fn update(&self, house: &House) -> Result<House, DomainError>;
    async fn delete(&self, home_id: EntityId) -> Result<(), DomainError>;
}
