// ============================================================================
// Society Client - REST Area Repository
// File: crates/society-client/src/rest/area_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use tracing::error;

use society_core::domain::{Area, NewArea};
use society_core::error::DomainError;
use society_core::repositories::AreaRepository;
use society_shared::EntityId;

use super::client::{RestClient, RestError};

pub struct RestAreaRepository {
    client: RestClient,
}

impl RestAreaRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AreaRepository for RestAreaRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Area>, DomainError> {
        match self
            .client
            .get_json::<Area>(&format!("areas/{}/", id))
            .await
        {
            Ok(area) => Ok(Some(area)),
            Err(RestError::Status { status: 404, .. }) => Ok(None),
            Err(e) => {
                error!("Backend error fetching area {}: {}", id, e);
                Err(e.into_domain())
            }
        }
    }

    async fn list(&self) -> Result<Vec<Area>, DomainError> {
        self.client.get_list("areas/").await.map_err(|e| {
            error!("Backend error listing areas: {}", e);
            e.into_domain()
        })
    }

    async fn create(&self, area: &NewArea) -> Result<Area, DomainError> {
        self.client.post_json("areas/", area).await.map_err(|e| {
            error!("Backend error creating area: {}", e);
            e.into_domain()
        })
    }

    async fn update(&self, area: &Area) -> Result<Area, DomainError> {
        self.client
            .put_json(&format!("areas/{}/", area.id), area)
            .await
            .map_err(|e| match e {
                RestError::Status { status: 404, .. } => DomainError::AreaNotFound(area.id),
                other => {
                    error!("Backend error updating area {}: {}", area.id, other);
                    other.into_domain()
                }
            })
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.client
            .delete(&format!("areas/{}/", id))
            .await
            .map_err(|e| match e {
                RestError::Status { status: 404, .. } => DomainError::AreaNotFound(id),
                other => {
                    error!("Backend error deleting area {}: {}", id, other);
                    other.into_domain()
                }
            })
    }
}
