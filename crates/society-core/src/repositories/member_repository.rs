//! Member repository trait (port)

use async_trait::async_trait;
use society_shared::EntityId;

use crate::domain::{Member, NewMember};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find_by_id(&self, member_id: EntityId) -> Result<Option<Member>, DomainError>;
    async fn list(&self) -> Result<Vec<Member>, DomainError>;
    async fn create(&self, member: &NewMember) -> Result<Member, DomainError>;
    async fn update(&self, member: &Member) -> Result<Member, DomainError>;
    async fn delete(&self, member_id: EntityId) -> Result<(), DomainError>;
}
