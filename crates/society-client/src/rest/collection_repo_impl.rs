// ============================================================================
// Society Client - REST Collection Repository
// File: crates/society-client/src/rest/collection_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use tracing::error;

use society_core::domain::{Collection, NewCollection};
use society_core::error::DomainError;
use society_core::repositories::CollectionRepository;
use society_shared::EntityId;

use super::client::{RestClient, RestError};

pub struct RestCollectionRepository {
    client: RestClient,
}

impl RestCollectionRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CollectionRepository for RestCollectionRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Collection>, DomainError> {
        match self
            .client
            .get_json::<Collection>(&format!("collections/{}/", id))
            .await
        {
            Ok(collection) => Ok(Some(collection)),
            Err(RestError::Status { status: 404, .. }) => Ok(None),
            Err(e) => {
                error!("Backend error fetching collection {}: {}", id, e);
                Err(e.into_domain())
            }
        }
    }

    async fn list(&self) -> Result<Vec<Collection>, DomainError> {
        self.client.get_list("collections/").await.map_err(|e| {
            error!("Backend error listing collections: {}", e);
            e.into_domain()
        })
    }

    async fn create(&self, collection: &NewCollection) -> Result<Collection, DomainError> {
        self.client
            .post_json("collections/", collection)
            .await
            .map_err(|e| {
                error!("Backend error creating collection: {}", e);
                e.into_domain()
            })
    }

    async fn update(&self, collection: &Collection) -> Result<Collection, DomainError> {
        self.client
            .put_json(&format!("collections/{}/", collection.id), collection)
            .await
            .map_err(|e| match e {
                RestError::Status { status: 404, .. } => {
                    DomainError::CollectionNotFound(collection.id)
                }
                other => {
                    error!("Backend error updating collection {}: {}", collection.id, other);
                    other.into_domain()
                }
            })
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.client
            .delete(&format!("collections/{}/", id))
            .await
            .map_err(|e| match e {
                RestError::Status { status: 404, .. } => DomainError::CollectionNotFound(id),
                other => {
                    error!("Backend error deleting collection {}: {}", id, other);
                    other.into_domain()
                }
            })
    }
}
