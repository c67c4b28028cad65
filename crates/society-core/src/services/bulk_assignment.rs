// ============================================================================
// Society Core - Bulk Assignment Engine
// File: crates/society-core/src/services/bulk_assignment.rs
// Description: Create obligations for many members against one subcollection
// ============================================================================

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use society_shared::EntityId;
use tracing::{error, info};

use crate::domain::{NewObligation, Obligation};
use crate::error::DomainError;
use crate::repositories::ObligationRepository;
use crate::services::ObligationService;

/// One bulk-assignment run: a target subcollection, a uniform amount, and
/// the candidate member set produced by filtering.
#[derive(Debug, Clone)]
pub struct BulkAssignmentRequest {
    pub subcollection_id: EntityId,
    pub amount: Decimal,
    pub member_ids: BTreeSet<EntityId>,
}

#[derive(Debug)]
pub struct BulkAssignmentFailure {
    pub member_id: EntityId,
    pub error: DomainError,
}

/// Accounting for a run. The engine is not all-or-nothing: successful
/// creations stay committed even when a later one fails.
#[derive(Debug, Default)]
pub struct BulkAssignmentOutcome {
    pub requested: usize,
    pub created: Vec<Obligation>,
    pub skipped_existing: usize,
    pub failures: Vec<BulkAssignmentFailure>,
}

impl BulkAssignmentOutcome {
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct BulkAssignmentService<R: ObligationRepository> {
    ledger: ObligationService<R>,
}

impl<R: ObligationRepository> BulkAssignmentService<R> {
    pub fn new(ledger: ObligationService<R>) -> Self {
        Self { ledger }
    }

    /// Create one pending obligation per candidate member not already
    /// present in the ledger for the subcollection. Members with an
    /// existing row are silently skipped, so a retry of the same request
    /// is idempotent.
    pub async fn assign(
        &self,
        request: BulkAssignmentRequest,
    ) -> Result<BulkAssignmentOutcome, DomainError> {
        // Both checks run before any write.
        if request.member_ids.is_empty() {
            return Err(DomainError::Validation(
                "Please select at least one member".to_string(),
            ));
        }
        if request.amount <= Decimal::ZERO {
            return Err(DomainError::Validation(
                "Please enter a valid amount".to_string(),
            ));
        }

        let existing = self
            .ledger
            .existing_member_ids(request.subcollection_id)
            .await?;

        let mut outcome = BulkAssignmentOutcome {
            requested: request.member_ids.len(),
            ..Default::default()
        };

        for member_id in &request.member_ids {
            if existing.contains(member_id) {
                outcome.skipped_existing += 1;
                continue;
            }

            let new = NewObligation::pending(*member_id, request.subcollection_id, request.amount);
            match self.ledger.create(new).await {
                Ok(created) => outcome.created.push(created),
                // Another session filled the pair between our read and
                // this write; same skip semantics as the precomputed set.
                Err(DomainError::DuplicateObligation { .. }) => {
                    outcome.skipped_existing += 1;
                }
                Err(e) => {
                    error!(
                        "Bulk assignment failed for member {} in subcollection {}: {}",
                        member_id, request.subcollection_id, e
                    );
                    outcome.failures.push(BulkAssignmentFailure {
                        member_id: *member_id,
                        error: e,
                    });
                }
            }
        }

        info!(
            "Bulk assignment for subcollection {}: {} created, {} skipped, {} failed of {} requested",
            request.subcollection_id,
            outcome.created_count(),
            outcome.skipped_existing,
            outcome.failures.len(),
            outcome.requested
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ObligationPatch, PaidStatus, SubcollectionStatistics};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::{Arc, Mutex};

    /// In-memory ledger enforcing the (member, subcollection) uniqueness
    /// constraint, standing in for the backend.
    #[derive(Default)]
    struct InMemoryLedger {
        rows: Mutex<Vec<Obligation>>,
        next_id: AtomicI64,
        fail_members: Vec<EntityId>,
    }

    impl InMemoryLedger {
        fn with_rows(rows: Vec<Obligation>) -> Self {
            let next = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
            Self {
                rows: Mutex::new(rows),
                next_id: AtomicI64::new(next),
                fail_members: Vec::new(),
            }
        }

        fn failing_for(mut self, members: Vec<EntityId>) -> Self {
            self.fail_members = members;
            self
        }

        fn snapshot(&self) -> Vec<Obligation> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ObligationRepository for InMemoryLedger {
        async fn find_by_id(&self, id: EntityId) -> Result<Option<Obligation>, DomainError> {
            Ok(self.snapshot().into_iter().find(|o| o.id == id))
        }

        async fn list(&self) -> Result<Vec<Obligation>, DomainError> {
            Ok(self.snapshot())
        }

        async fn list_by_subcollection(
            &self,
            subcollection_id: EntityId,
        ) -> Result<Vec<Obligation>, DomainError> {
            Ok(self
                .snapshot()
                .into_iter()
                .filter(|o| o.subcollection == subcollection_id)
                .collect())
        }

        async fn create(&self, new: &NewObligation) -> Result<Obligation, DomainError> {
            if self.fail_members.contains(&new.member) {
                return Err(DomainError::Backend("injected failure".into()));
            }
            let mut rows = self.rows.lock().unwrap();
            if rows
                .iter()
                .any(|o| o.member == new.member && o.subcollection == new.subcollection)
            {
                return Err(DomainError::DuplicateObligation {
                    member_id: new.member,
                    subcollection_id: new.subcollection,
                });
            }
            let created = Obligation {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                member: new.member,
                subcollection: new.subcollection,
                amount: new.amount,
                paid_status: new.paid_status,
            };
            rows.push(created.clone());
            Ok(created)
        }

        async fn create_bulk(
            &self,
            obligations: &[NewObligation],
        ) -> Result<Vec<Obligation>, DomainError> {
            let mut created = Vec::new();
            for new in obligations {
                created.push(self.create(new).await?);
            }
            Ok(created)
        }

        async fn update(
            &self,
            id: EntityId,
            patch: &ObligationPatch,
        ) -> Result<Obligation, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|o| o.id == id)
                .ok_or(DomainError::ObligationNotFound(id))?;
            if let Some(amount) = patch.amount {
                row.amount = amount;
            }
            if let Some(status) = patch.paid_status {
                row.paid_status = status;
            }
            Ok(row.clone())
        }

        async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|o| o.id != id);
            if rows.len() == before {
                return Err(DomainError::ObligationNotFound(id));
            }
            Ok(())
        }

        async fn statistics(
            &self,
            subcollection_id: EntityId,
        ) -> Result<SubcollectionStatistics, DomainError> {
            Ok(SubcollectionStatistics::from_obligations(
                &self.list_by_subcollection(subcollection_id).await?,
            ))
        }
    }

    fn service(ledger: Arc<InMemoryLedger>) -> BulkAssignmentService<InMemoryLedger> {
        BulkAssignmentService::new(ObligationService::new(ledger))
    }

    fn request(subcollection: EntityId, members: &[EntityId]) -> BulkAssignmentRequest {
        BulkAssignmentRequest {
            subcollection_id: subcollection,
            amount: dec!(500),
            member_ids: members.iter().copied().collect(),
        }
    }

    #[tokio::test]
    async fn test_empty_candidate_set_is_rejected_before_any_write() {
        let ledger = Arc::new(InMemoryLedger::default());
        let engine = service(Arc::clone(&ledger));

        let err = engine.assign(request(3, &[])).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref msg) if msg.contains("at least one member")));
        assert!(ledger.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_non_positive_amount_is_rejected() {
        let ledger = Arc::new(InMemoryLedger::default());
        let engine = service(Arc::clone(&ledger));

        let mut req = request(3, &[1, 2]);
        req.amount = dec!(0);
        let err = engine.assign(req).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(ledger.snapshot().is_empty());
    }

    // Subcollection "Eid2025": empty ledger, three live candidates.
    #[tokio::test]
    async fn test_fresh_subcollection_creates_all_candidates() {
        let ledger = Arc::new(InMemoryLedger::default());
        let engine = service(Arc::clone(&ledger));

        let outcome = engine.assign(request(3, &[1, 2, 7])).await.unwrap();
        assert_eq!(outcome.created_count(), 3);
        assert_eq!(outcome.skipped_existing, 0);
        assert!(outcome.is_complete());

        let rows = ledger.snapshot();
        assert_eq!(rows.len(), 3);
        assert!(rows
            .iter()
            .all(|o| o.paid_status == PaidStatus::Pending && o.amount == dec!(500)));
    }

    // Re-run after member 7 already holds a row: only the difference lands.
    #[tokio::test]
    async fn test_rerun_skips_existing_members() {
        let ledger = Arc::new(InMemoryLedger::with_rows(vec![Obligation {
            id: 1,
            member: 7,
            subcollection: 3,
            amount: dec!(750),
            paid_status: PaidStatus::Partial,
        }]));
        let engine = service(Arc::clone(&ledger));

        let outcome = engine.assign(request(3, &[1, 2, 7])).await.unwrap();
        assert_eq!(outcome.created_count(), 2);
        assert_eq!(outcome.skipped_existing, 1);

        // Member 7's pre-existing row is untouched.
        let rows = ledger.snapshot();
        let row7 = rows.iter().find(|o| o.member == 7).unwrap();
        assert_eq!(row7.amount, dec!(750));
        assert_eq!(row7.paid_status, PaidStatus::Partial);
    }

    #[tokio::test]
    async fn test_rerun_of_identical_request_is_idempotent() {
        let ledger = Arc::new(InMemoryLedger::default());
        let engine = service(Arc::clone(&ledger));

        engine.assign(request(3, &[1, 2, 7])).await.unwrap();
        let second = engine.assign(request(3, &[1, 2, 7])).await.unwrap();

        assert_eq!(second.created_count(), 0);
        assert_eq!(second.skipped_existing, 3);
        assert_eq!(ledger.snapshot().len(), 3);
    }

    #[tokio::test]
    async fn test_mid_batch_failure_keeps_prior_creations() {
        let ledger = Arc::new(InMemoryLedger::default().failing_for(vec![2]));
        let engine = service(Arc::clone(&ledger));

        let outcome = engine.assign(request(3, &[1, 2, 7])).await.unwrap();
        assert_eq!(outcome.requested, 3);
        assert_eq!(outcome.created_count(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].member_id, 2);
        assert!(!outcome.is_complete());

        // The two successful rows stay committed.
        assert_eq!(ledger.snapshot().len(), 2);
    }

    // Full flow: filter the directory down to one area, select everything
    // in view, assign against a fresh subcollection.
    #[tokio::test]
    async fn test_filtered_selection_drives_assignment() {
        use crate::domain::{House, Member, MemberStatus};
        use crate::services::{BulkSelection, CandidateFilter};
        use std::collections::HashMap;

        let houses: HashMap<EntityId, House> = [(
            1,
            House {
                home_id: 1,
                house_name: "North Lane 1".into(),
                family_name: String::new(),
                area: Some(10),
                location_name: None,
                address: None,
            },
        )]
        .into();
        let members: Vec<Member> = (1..=3)
            .map(|id| Member {
                member_id: id,
                name: format!("Member {}", id),
                surname: String::new(),
                status: Some(MemberStatus::Live),
                is_guardian: false,
                house: Some(1),
                phone: None,
                created_at: None,
                updated_at: None,
            })
            .collect();

        let ledger = Arc::new(InMemoryLedger::default());
        let engine = service(Arc::clone(&ledger));

        let filter = CandidateFilter {
            area: Some(10),
            ..Default::default()
        };
        let filtered = filter.apply(&members, &houses);
        assert_eq!(filtered.len(), 3);

        let existing = ObligationService::new(Arc::clone(&ledger))
            .existing_member_ids(3)
            .await
            .unwrap();
        let mut selection = BulkSelection::default();
        selection.toggle_all_filtered(&filtered, &existing);

        let outcome = engine
            .assign(BulkAssignmentRequest {
                subcollection_id: 3,
                amount: dec!(500),
                member_ids: selection.into_ids(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.created_count(), 3);
        assert!(ledger
            .snapshot()
            .iter()
            .all(|o| o.paid_status == PaidStatus::Pending && o.amount == dec!(500)));
    }

    #[tokio::test]
    async fn test_obligations_for_other_subcollections_do_not_exclude() {
        let ledger = Arc::new(InMemoryLedger::with_rows(vec![Obligation {
            id: 1,
            member: 7,
            subcollection: 99,
            amount: dec!(500),
            paid_status: PaidStatus::Pending,
        }]));
        let engine = service(Arc::clone(&ledger));

        let outcome = engine.assign(request(3, &[7])).await.unwrap();
        assert_eq!(outcome.created_count(), 1);
        assert_eq!(outcome.skipped_existing, 0);
    }
}
