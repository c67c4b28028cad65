// ============================================================================
// Society Core - Payment State Transition
// File: crates/society-core/src/services/payment_service.rs
// ============================================================================
//! Move a single obligation to `paid` after human confirmation.

use std::sync::Arc;

use rust_decimal::Decimal;
use society_shared::constants::{PLACEHOLDER_NOT_AVAILABLE, PLACEHOLDER_UNKNOWN_MEMBER};
use society_shared::EntityId;
use tracing::info;

use crate::domain::{Member, Obligation, ObligationPatch, PaidStatus, Subcollection};
use crate::error::DomainError;
use crate::repositories::ObligationRepository;

/// What the confirmation dialog shows before the transition is committed.
/// Joins tolerate orphaned references and fall back to placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentConfirmation {
    pub obligation_id: EntityId,
    pub member_name: String,
    pub subcollection_name: String,
    pub amount: Decimal,
    pub current_status: PaidStatus,
}

impl PaymentConfirmation {
    pub fn prepare(
        obligation: &Obligation,
        member: Option<&Member>,
        subcollection: Option<&Subcollection>,
    ) -> Self {
        Self {
            obligation_id: obligation.id,
            member_name: member
                .map(Member::full_name)
                .unwrap_or_else(|| PLACEHOLDER_UNKNOWN_MEMBER.to_string()),
            subcollection_name: subcollection
                .map(Subcollection::display_name)
                .unwrap_or_else(|| PLACEHOLDER_NOT_AVAILABLE.to_string()),
            amount: obligation.amount,
            current_status: obligation.paid_status,
        }
    }
}

pub struct PaymentService<R: ObligationRepository> {
    repo: Arc<R>,
}

impl<R: ObligationRepository> PaymentService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Commit the confirmed transition. The patch carries only the status,
    /// never the amount, and nothing is mutated locally until the server
    /// acknowledges; on failure the obligation keeps its prior state and
    /// the error propagates to the open dialog.
    pub async fn confirm(&self, obligation_id: EntityId) -> Result<Obligation, DomainError> {
        let updated = self
            .repo
            .update(obligation_id, &ObligationPatch::mark_paid())
            .await?;
        info!("Obligation {} marked as paid", obligation_id);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MemberStatus;
    use crate::repositories::obligation_repository::MockObligationRepository;
    use rust_decimal_macros::dec;

    fn obligation(id: EntityId, status: PaidStatus) -> Obligation {
        Obligation {
            id,
            member: 7,
            subcollection: 3,
            amount: dec!(500),
            paid_status: status,
        }
    }

    #[tokio::test]
    async fn test_confirm_sends_status_only_patch() {
        let mut repo = MockObligationRepository::new();
        repo.expect_update()
            .withf(|id, patch| {
                *id == 10 && patch.amount.is_none() && patch.paid_status == Some(PaidStatus::Paid)
            })
            .returning(|id, _| Ok(obligation(id, PaidStatus::Paid)));
        let service = PaymentService::new(Arc::new(repo));

        let updated = service.confirm(10).await.unwrap();
        assert_eq!(updated.paid_status, PaidStatus::Paid);
        // Amount unchanged at 500.
        assert_eq!(updated.amount, dec!(500));
    }

    #[tokio::test]
    async fn test_confirm_propagates_failure_without_mutation() {
        let mut repo = MockObligationRepository::new();
        repo.expect_update()
            .returning(|_, _| Err(DomainError::Network("connection reset".into())));
        let service = PaymentService::new(Arc::new(repo));

        let err = service.confirm(10).await.unwrap_err();
        assert!(matches!(err, DomainError::Network(_)));
    }

    #[test]
    fn test_confirmation_joins_names() {
        let member = Member {
            member_id: 7,
            name: "Fathima".into(),
            surname: "Rasheed".into(),
            status: Some(MemberStatus::Live),
            is_guardian: false,
            house: None,
            phone: None,
            created_at: None,
            updated_at: None,
        };
        let subcollection = Subcollection {
            id: 3,
            collection: 1,
            name: "Eid".into(),
            year: 2025,
            amount: dec!(500),
            due_date: None,
        };

        let confirmation = PaymentConfirmation::prepare(
            &obligation(10, PaidStatus::Pending),
            Some(&member),
            Some(&subcollection),
        );
        assert_eq!(confirmation.member_name, "Fathima Rasheed");
        assert_eq!(confirmation.subcollection_name, "Eid 2025");
        assert_eq!(confirmation.current_status, PaidStatus::Pending);
    }

    #[test]
    fn test_confirmation_tolerates_orphaned_references() {
        let confirmation =
            PaymentConfirmation::prepare(&obligation(10, PaidStatus::Overdue), None, None);
        assert_eq!(confirmation.member_name, "Unknown Member");
        assert_eq!(confirmation.subcollection_name, "N/A");
    }
}
