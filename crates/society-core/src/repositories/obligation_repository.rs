//! Obligation ledger trait (port)

use async_trait::async_trait;
use society_shared::EntityId;

use crate::domain::{NewObligation, Obligation, ObligationPatch, SubcollectionStatistics};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObligationRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Obligation>, DomainError>;
    async fn list(&self) -> Result<Vec<Obligation>, DomainError>;
    /// All obligations for one subcollection; also feeds the "already
    /// added" exclusion set for bulk assignment.
    async fn list_by_subcollection(
        &self,
        subcollection_id: EntityId,
    ) -> Result<Vec<Obligation>, DomainError>;
    async fn create(&self, obligation: &NewObligation) -> Result<Obligation, DomainError>;
    async fn create_bulk(
        &self,
        obligations: &[NewObligation],
    ) -> Result<Vec<Obligation>, DomainError>;
    async fn update(
        &self,
        id: EntityId,
        patch: &ObligationPatch,
    ) -> Result<Obligation, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
    async fn statistics(
        &self,
        subcollection_id: EntityId,
    ) -> Result<SubcollectionStatistics, DomainError>;
}
