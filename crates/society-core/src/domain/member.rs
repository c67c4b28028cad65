// ============================================================================
// Society Core - Member Entity
// File: crates/society-core/src/domain/member.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use society_shared::EntityId;
use validator::Validate;

/// Member lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Live,
    Dead,
    Terminated,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Live => "live",
            MemberStatus::Dead => "dead",
            MemberStatus::Terminated => "terminated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "live" => Some(MemberStatus::Live),
            "dead" => Some(MemberStatus::Dead),
            "terminated" => Some(MemberStatus::Terminated),
            _ => None,
        }
    }
}

impl Default for MemberStatus {
    fn default() -> Self {
        MemberStatus::Live
    }
}

/// Member entity. `member_id` is server-assigned and read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Member {
    pub member_id: EntityId,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    pub surname: String,

    // Records imported before the status field existed carry no status.
    #[serde(default)]
    pub status: Option<MemberStatus>,

    #[serde(rename = "isGuardian", default)]
    pub is_guardian: bool,

    #[serde(default)]
    pub house: Option<EntityId>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Member {
    pub fn full_name(&self) -> String {
        if self.surname.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.surname)
        }
    }

    pub fn is_live(&self) -> bool {
        self.status == Some(MemberStatus::Live)
    }

    /// Whether this member may receive a bulk-assigned obligation.
    /// A missing status is the legacy case and counts as eligible.
    pub fn is_assignable(&self) -> bool {
        matches!(self.status, None | Some(MemberStatus::Live))
    }

    /// Case-insensitive substring match against name, surname, or the
    /// decimal rendering of the member id.
    pub fn matches_search(&self, term: &str) -> bool {
        let term_lower = term.to_lowercase();
        self.name.to_lowercase().contains(&term_lower)
            || self.surname.to_lowercase().contains(&term_lower)
            || self.member_id.to_string().contains(term)
    }
}

/// Payload for registering a new member.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewMember {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub surname: String,
    pub status: MemberStatus,
    #[serde(rename = "isGuardian")]
    pub is_guardian: bool,
    pub house: Option<EntityId>,
    pub phone: Option<String>,
}

impl NewMember {
    pub fn new(name: String, surname: String) -> Result<Self, validator::ValidationErrors> {
        let member = Self {
            name,
            surname,
            status: MemberStatus::Live,
            is_guardian: false,
            house: None,
            phone: None,
        };
        member.validate()?;
        Ok(member)
    }
}
