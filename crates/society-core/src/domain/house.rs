//! House entity

use serde::{Deserialize, Serialize};
use society_shared::EntityId;
use validator::Validate;

/// Household. `home_id` is server-assigned and used as the lookup key.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct House {
    pub home_id: EntityId,

    #[validate(length(min = 1, message = "House name is required"))]
    pub house_name: String,

    #[serde(default)]
    pub family_name: String,

    #[serde(default)]
    pub area: Option<EntityId>,

    #[serde(default)]
    pub location_name: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewHouse {
    #[validate(length(min = 1, message = "House name is required"))]
    pub house_name: String,
    pub family_name: String,
    pub area: Option<EntityId>,
    pub location_name: Option<String>,
    pub address: Option<String>,
}

impl NewHouse {
    pub fn new(house_name: String, family_name: String) -> Result<Self, validator::ValidationErrors> {
        let house = Self {
            house_name,
            family_name,
            area: None,
            location_name: None,
            address: None,
        };
        house.validate()?;
        Ok(house)
    }
}
