//! Collection progress analytics.
//!
//! A pure, stateless fold over a subcollection's obligations, recomputed on
//! demand. The backend statistics endpoint returns the same shape.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::Obligation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusBucket {
    pub count: u64,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionProgress {
    pub percentage: u32,
    pub paid_amount: Decimal,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubcollectionStatistics {
    pub total_members: u64,
    pub paid: StatusBucket,
    pub pending_overdue: StatusBucket,
    pub collection_progress: CollectionProgress,
}

impl SubcollectionStatistics {
    pub fn from_obligations(obligations: &[Obligation]) -> Self {
        let mut paid = StatusBucket::default();
        let mut pending_overdue = StatusBucket::default();

        for obligation in obligations {
            if obligation.is_settled() {
                paid.count += 1;
                paid.amount += obligation.amount;
            } else {
                pending_overdue.count += 1;
                pending_overdue.amount += obligation.amount;
            }
        }

        let paid_amount = paid.amount;
        let total_amount = paid.amount + pending_overdue.amount;
        // Defined as 0% for an empty or zero-amount subcollection.
        let percentage = if total_amount.is_zero() {
            0
        } else {
            (paid.amount / total_amount * Decimal::from(100))
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_u32()
                .unwrap_or(0)
        };

        Self {
            total_members: obligations.len() as u64,
            paid,
            pending_overdue,
            collection_progress: CollectionProgress {
                percentage,
                paid_amount,
                total_amount,
            },
        }
    }
}
