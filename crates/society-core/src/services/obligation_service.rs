// ============================================================================
// Society Core - Obligation Ledger Service
// File: crates/society-core/src/services/obligation_service.rs
// ============================================================================
//! Validation boundary for obligation CRUD.

use std::collections::BTreeSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use society_shared::EntityId;
use tracing::{info, warn};

use crate::domain::{NewObligation, Obligation, ObligationPatch, SubcollectionStatistics};
use crate::error::DomainError;
use crate::repositories::ObligationRepository;

pub struct ObligationService<R: ObligationRepository> {
    repo: Arc<R>,
}

impl<R: ObligationRepository> Clone for ObligationService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: ObligationRepository> ObligationService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a single obligation. Duplicates for the (member,
    /// subcollection) pair are fatal on this path.
    pub async fn create(&self, new: NewObligation) -> Result<Obligation, DomainError> {
        // 1. Validate amount
        if new.amount <= Decimal::ZERO {
            return Err(DomainError::Validation(
                "Please enter a valid amount".to_string(),
            ));
        }

        // 2. Reject a pre-existing row for this (member, subcollection) pair.
        //    The server enforces the same constraint; this check gives the
        //    user a precise message instead of a generic backend error.
        let existing = self.repo.list_by_subcollection(new.subcollection).await?;
        if existing.iter().any(|ob| ob.member == new.member) {
            warn!(
                "Duplicate obligation rejected: member {} already in subcollection {}",
                new.member, new.subcollection
            );
            return Err(DomainError::DuplicateObligation {
                member_id: new.member,
                subcollection_id: new.subcollection,
            });
        }

        // 3. Persist
        let created = self.repo.create(&new).await?;
        info!(
            "Created obligation {} for member {} in subcollection {}",
            created.id, created.member, created.subcollection
        );
        Ok(created)
    }

    /// Partial update restricted to `amount` and `paid_status`.
    pub async fn update(
        &self,
        id: EntityId,
        patch: ObligationPatch,
    ) -> Result<Obligation, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::Validation("Nothing to update".to_string()));
        }
        if let Some(amount) = patch.amount {
            if amount <= Decimal::ZERO {
                return Err(DomainError::Validation(
                    "Please enter a valid amount".to_string(),
                ));
            }
        }
        self.repo.update(id, &patch).await
    }

    /// Remove a row. No side effects on member or subcollection.
    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.repo.delete(id).await?;
        info!("Deleted obligation {}", id);
        Ok(())
    }

    pub async fn list_by_subcollection(
        &self,
        subcollection_id: EntityId,
    ) -> Result<Vec<Obligation>, DomainError> {
        self.repo.list_by_subcollection(subcollection_id).await
    }

    /// The "already added" exclusion set for bulk assignment.
    pub async fn existing_member_ids(
        &self,
        subcollection_id: EntityId,
    ) -> Result<BTreeSet<EntityId>, DomainError> {
        Ok(self
            .repo
            .list_by_subcollection(subcollection_id)
            .await?
            .into_iter()
            .map(|ob| ob.member)
            .collect())
    }

    pub async fn statistics(
        &self,
        subcollection_id: EntityId,
    ) -> Result<SubcollectionStatistics, DomainError> {
        self.repo.statistics(subcollection_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PaidStatus;
    use crate::repositories::obligation_repository::MockObligationRepository;
    use rust_decimal_macros::dec;

    fn obligation(id: EntityId, member: EntityId, subcollection: EntityId) -> Obligation {
        Obligation {
            id,
            member,
            subcollection,
            amount: dec!(500),
            paid_status: PaidStatus::Pending,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_amount() {
        let repo = MockObligationRepository::new();
        let service = ObligationService::new(Arc::new(repo));

        let err = service
            .create(NewObligation::pending(1, 2, dec!(0)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = service
            .create(NewObligation::pending(1, 2, dec!(-10)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_pair() {
        let mut repo = MockObligationRepository::new();
        repo.expect_list_by_subcollection()
            .returning(|_| Ok(vec![obligation(10, 7, 3)]));
        repo.expect_create().never();
        let service = ObligationService::new(Arc::new(repo));

        let err = service
            .create(NewObligation::pending(7, 3, dec!(500)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::DuplicateObligation {
                member_id: 7,
                subcollection_id: 3,
            }
        ));
    }

    #[tokio::test]
    async fn test_create_persists_when_pair_is_free() {
        let mut repo = MockObligationRepository::new();
        repo.expect_list_by_subcollection()
            .returning(|_| Ok(vec![obligation(10, 7, 3)]));
        repo.expect_create()
            .withf(|new| new.member == 8 && new.paid_status == PaidStatus::Pending)
            .returning(|new| {
                Ok(Obligation {
                    id: 11,
                    member: new.member,
                    subcollection: new.subcollection,
                    amount: new.amount,
                    paid_status: new.paid_status,
                })
            });
        let service = ObligationService::new(Arc::new(repo));

        let created = service
            .create(NewObligation::pending(8, 3, dec!(500)))
            .await
            .unwrap();
        assert_eq!(created.member, 8);
    }

    #[tokio::test]
    async fn test_update_rejects_empty_and_invalid_patches() {
        let repo = MockObligationRepository::new();
        let service = ObligationService::new(Arc::new(repo));

        let err = service
            .update(10, ObligationPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = service
            .update(10, ObligationPatch::set_amount(dec!(0)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_surfaces_not_found() {
        let mut repo = MockObligationRepository::new();
        repo.expect_update()
            .returning(|id, _| Err(DomainError::ObligationNotFound(id)));
        let service = ObligationService::new(Arc::new(repo));

        let err = service
            .update(99, ObligationPatch::mark_paid())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ObligationNotFound(99)));
    }

    #[tokio::test]
    async fn test_existing_member_ids() {
        let mut repo = MockObligationRepository::new();
        repo.expect_list_by_subcollection()
            .returning(|_| Ok(vec![obligation(10, 7, 3), obligation(11, 9, 3)]));
        let service = ObligationService::new(Arc::new(repo));

        let ids = service.existing_member_ids(3).await.unwrap();
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![7, 9]);
    }
}
