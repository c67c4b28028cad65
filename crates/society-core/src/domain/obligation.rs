// ============================================================================
// Society Core - Obligation Entity
// File: crates/society-core/src/domain/obligation.rs
// Description: One member's amount owed for one subcollection billing period
// ============================================================================

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use society_shared::EntityId;

/// Payment status of an obligation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaidStatus {
    Pending,
    Paid,
    Overdue,
    Partial,
}

impl PaidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaidStatus::Pending => "pending",
            PaidStatus::Paid => "paid",
            PaidStatus::Overdue => "overdue",
            PaidStatus::Partial => "partial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PaidStatus::Pending),
            "paid" => Some(PaidStatus::Paid),
            "overdue" => Some(PaidStatus::Overdue),
            "partial" => Some(PaidStatus::Partial),
            _ => None,
        }
    }

    /// Pending, overdue, and partial are grouped as outstanding.
    pub fn is_outstanding(&self) -> bool {
        !matches!(self, PaidStatus::Paid)
    }
}

impl Default for PaidStatus {
    fn default() -> Self {
        PaidStatus::Pending
    }
}

/// Obligation entity. At most one row exists per (member, subcollection)
/// pair; the bulk assignment path excludes already-obligated members and
/// the single-create path rejects duplicates outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obligation {
    pub id: EntityId,
    pub member: EntityId,
    pub subcollection: EntityId,
    pub amount: Decimal,
    pub paid_status: PaidStatus,
}

impl Obligation {
    pub fn is_settled(&self) -> bool {
        self.paid_status == PaidStatus::Paid
    }
}

/// Payload for creating an obligation. Matches the bulk-create item shape.
#[derive(Debug, Clone, Serialize)]
pub struct NewObligation {
    pub member: EntityId,
    pub subcollection: EntityId,
    pub amount: Decimal,
    pub paid_status: PaidStatus,
}

impl NewObligation {
    pub fn pending(member: EntityId, subcollection: EntityId, amount: Decimal) -> Self {
        Self {
            member,
            subcollection,
            amount,
            paid_status: PaidStatus::Pending,
        }
    }
}

/// Partial update restricted to `amount` and `paid_status`. Absent fields
/// are omitted from the request body entirely so the backend never sees
/// an accidental overwrite.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ObligationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_status: Option<PaidStatus>,
}

impl ObligationPatch {
    /// The payment-confirmation patch: status only, never the amount.
    pub fn mark_paid() -> Self {
        Self {
            amount: None,
            paid_status: Some(PaidStatus::Paid),
        }
    }

    pub fn set_amount(amount: Decimal) -> Self {
        Self {
            amount: Some(amount),
            paid_status: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.paid_status.is_none()
    }
}
