//! Common types

use serde::{Deserialize, Serialize};

/// Server-assigned integer id used by every backend resource.
pub type EntityId = i64;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: super::constants::DEFAULT_PAGE_SIZE,
        }
    }
}
