// ============================================================================
// Society Client - REST Subcollection Repository
// File: crates/society-client/src/rest/subcollection_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use tracing::error;

use society_core::domain::{NewSubcollection, Subcollection};
use society_core::error::DomainError;
use society_core::repositories::SubcollectionRepository;
use society_shared::EntityId;

use super::client::{RestClient, RestError};

pub struct RestSubcollectionRepository {
    client: RestClient,
}

impl RestSubcollectionRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SubcollectionRepository for RestSubcollectionRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Subcollection>, DomainError> {
        match self
            .client
            .get_json::<Subcollection>(&format!("subcollections/{}/", id))
            .await
        {
            Ok(subcollection) => Ok(Some(subcollection)),
            Err(RestError::Status { status: 404, .. }) => Ok(None),
            Err(e) => {
                error!("Backend error fetching subcollection {}: {}", id, e);
                Err(e.into_domain())
            }
        }
    }

    async fn list(&self) -> Result<Vec<Subcollection>, DomainError> {
        self.client.get_list("subcollections/").await.map_err(|e| {
            error!("Backend error listing subcollections: {}", e);
            e.into_domain()
        })
    }

    async fn list_by_collection(
        &self,
        collection_id: EntityId,
    ) -> Result<Vec<Subcollection>, DomainError> {
        self.client
            .get_list(&format!("subcollections/?collection={}", collection_id))
            .await
            .map_err(|e| {
                error!(
                    "Backend error listing subcollections for collection {}: {}",
                    collection_id, e
                );
                e.into_domain()
            })
    }

    async fn create(
        &self,
        subcollection: &NewSubcollection,
    ) -> Result<Subcollection, DomainError> {
        self.client
            .post_json("subcollections/", subcollection)
            .await
            .map_err(|e| {
                error!("Backend error creating subcollection: {}", e);
                e.into_domain()
            })
    }

    async fn update(&self, subcollection: &Subcollection) -> Result<Subcollection, DomainError> {
        self.client
            .put_json(
                &format!("subcollections/{}/", subcollection.id),
                subcollection,
            )
            .await
            .map_err(|e| match e {
                RestError::Status { status: 404, .. } => {
                    DomainError::SubcollectionNotFound(subcollection.id)
                }
                other => {
                    error!(
                        "Backend error updating subcollection {}: {}",
                        subcollection.id, other
                    );
                    other.into_domain()
                }
            })
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.client
            .delete(&format!("subcollections/{}/", id))
            .await
            .map_err(|e| match e {
                RestError::Status { status: 404, .. } => DomainError::SubcollectionNotFound(id),
                other => {
                    error!("Backend error deleting subcollection {}: {}", id, other);
                    other.into_domain()
                }
            })
    }
}
