//! Subcollection entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use society_shared::EntityId;
use validator::Validate;

/// One billing period/campaign instance within a collection
/// (e.g. "Eid 2025"). `amount` is the default due per member.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Subcollection {
    pub id: EntityId,
    pub collection: EntityId,

    #[validate(length(min = 1, message = "Subcollection name is required"))]
    pub name: String,

    pub year: i32,
    pub amount: Decimal,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl Subcollection {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.year)
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewSubcollection {
    pub collection: EntityId,

    #[validate(length(min = 1, message = "Subcollection name is required"))]
    pub name: String,

    pub year: i32,
    pub amount: Decimal,
    pub due_date: Option<NaiveDate>,
}

impl NewSubcollection {
    pub fn new(
        collection: EntityId,
        name: String,
        year: i32,
        amount: Decimal,
    ) -> Result<Self, validator::ValidationErrors> {
        let subcollection = Self {
            collection,
            name,
            year,
            amount,
            due_date: None,
        };
        subcollection.validate()?;
        Ok(subcollection)
    }
}
