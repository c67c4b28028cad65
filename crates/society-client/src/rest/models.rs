//! Wire models for backend responses that need shape tolerance before
//! they become domain entities.

use rust_decimal::Decimal;
use serde::Deserialize;
use society_core::domain::{Member, MemberStatus, Obligation, PaidStatus};
use society_shared::EntityId;

/// List endpoints answer either a plain array or a paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Plain(Vec<T>),
    Results { results: Vec<T> },
    Data { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Plain(items) => items,
            ListEnvelope::Results { results } => results,
            ListEnvelope::Data { data } => data,
        }
    }
}

/// Foreign keys arrive either as a bare id or as a nested object keyed by
/// the referenced entity's id field.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Id(EntityId),
    Member { member_id: EntityId },
    House { home_id: EntityId },
    Keyed { id: EntityId },
}

impl EntityRef {
    pub fn id(&self) -> EntityId {
        match *self {
            EntityRef::Id(id) => id,
            EntityRef::Member { member_id } => member_id,
            EntityRef::House { home_id } => home_id,
            EntityRef::Keyed { id } => id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ObligationRow {
    pub id: EntityId,
    pub member: EntityRef,
    pub subcollection: EntityRef,
    pub amount: Decimal,
    pub paid_status: PaidStatus,
}

impl From<ObligationRow> for Obligation {
    fn from(row: ObligationRow) -> Self {
        Obligation {
            id: row.id,
            member: row.member.id(),
            subcollection: row.subcollection.id(),
            amount: row.amount,
            paid_status: row.paid_status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MemberRow {
    pub member_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub status: Option<MemberStatus>,
    #[serde(rename = "isGuardian", default)]
    pub is_guardian: bool,
    #[serde(default)]
    pub house: Option<EntityRef>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Member {
            member_id: row.member_id,
            name: row.name,
            surname: row.surname,
            status: row.status,
            is_guardian: row.is_guardian,
            house: row.house.map(|h| h.id()),
            phone: row.phone,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
