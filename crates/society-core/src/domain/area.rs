//! Area entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use society_shared::EntityId;
use validator::Validate;

/// Grouping/filter dimension over households.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Area {
    pub id: EntityId,

    #[validate(length(min = 1, message = "Area name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewArea {
    #[validate(length(min = 1, message = "Area name is required"))]
    pub name: String,
    pub description: Option<String>,
}

impl NewArea {
    pub fn new(name: String, description: Option<String>) -> Result<Self, validator::ValidationErrors> {
        let area = Self { name, description };
        area.validate()?;
        Ok(area)
    }
}
