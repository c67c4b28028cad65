// ============================================================================
// Society Client - REST House Repository
// File: crates/society-client/src/rest/house_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use tracing::error;

use society_core::domain::{House, NewHouse};
use society_core::error::DomainError;
use society_core::repositories::HouseRepository;
use society_shared::EntityId;

use super::client::{RestClient, RestError};

pub struct RestHouseRepository {
    client: RestClient,
}

impl RestHouseRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HouseRepository for RestHouseRepository {
    async fn find_by_id(&self, home_id: EntityId) -> Result<Option<House>, DomainError> {
        match self
            .client
            .get_json::<House>(&format!("houses/{}/", home_id))
            .await
        {
            Ok(house) => Ok(Some(house)),
            Err(RestError::Status { status: 404, .. }) => Ok(None),
            Err(e) => {
                error!("Backend error fetching house {}: {}", home_id, e);
                Err(e.into_domain())
            }
        }
    }

    async fn list(&self) -> Result<Vec<House>, DomainError> {
        self.client.get_list("houses/").await.map_err(|e| {
            error!("Backend error listing houses: {}", e);
            e.into_domain()
        })
    }

    async fn create(&self, house: &NewHouse) -> Result<House, DomainError> {
        self.client.post_json("houses/", house).await.map_err(|e| {
            error!("Backend error creating house: {}", e);
            e.into_domain()
        })
    }

    async fn update(&self, house: &House) -> Result<House, DomainError> {
        self.client
            .put_json(&format!("houses/{}/", house.home_id), house)
            .await
            .map_err(|e| match e {
                RestError::Status { status: 404, .. } => DomainError::HouseNotFound(house.home_id),
                other => {
                    error!("Backend error updating house {}: {}", house.home_id, other);
                    other.into_domain()
                }
            })
    }

    async fn delete(&self, home_id: EntityId) -> Result<(), DomainError> {
        self.client
            .delete(&format!("houses/{}/", home_id))
            .await
            .map_err(|e| match e {
                RestError::Status { status: 404, .. } => DomainError::HouseNotFound(home_id),
                other => {
                    error!("Backend error deleting house {}: {}", home_id, other);
                    other.into_domain()
                }
            })
    }
}
