//! Collection entity

use serde::{Deserialize, Serialize};
use society_shared::EntityId;
use validator::Validate;

/// A named fund-raising campaign (e.g. "Annual Fund 2024").
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Collection {
    pub id: EntityId,

    #[validate(length(min = 1, message = "Collection name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewCollection {
    #[validate(length(min = 1, message = "Collection name is required"))]
    pub name: String,
    pub description: Option<String>,
}

impl NewCollection {
    pub fn new(name: String, description: Option<String>) -> Result<Self, validator::ValidationErrors> {
        let collection = Self { name, description };
        collection.validate()?;
        Ok(collection)
    }
}
