//! Domain errors

use society_shared::EntityId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Member {member_id} already has an obligation for subcollection {subcollection_id}")]
    DuplicateObligation {
        member_id: EntityId,
        subcollection_id: EntityId,
    },

    #[error("Member not found: {0}")]
    MemberNotFound(EntityId),

    #[error("House not found: {0}")]
    HouseNotFound(EntityId),

    #[error("Obligation not found: {0}")]
    ObligationNotFound(EntityId),

    #[error("Subcollection not found: {0}")]
    SubcollectionNotFound(EntityId),

    #[error("Collection not found: {0}")]
    CollectionNotFound(EntityId),

    #[error("Area not found: {0}")]
    AreaNotFound(EntityId),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Validation failures are surfaced to the user at the operation
    /// boundary; everything else is reported generically.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            DomainError::Validation(_) | DomainError::DuplicateObligation { .. }
        )
    }
}
