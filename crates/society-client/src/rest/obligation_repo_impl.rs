// ============================================================================
// Society Client - REST Obligation Repository
// File: crates/society-client/src/rest/obligation_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use serde::Serialize;
use tracing::error;

use society_core::domain::{
    NewObligation, Obligation, ObligationPatch, SubcollectionStatistics,
};
use society_core::error::DomainError;
use society_core::repositories::ObligationRepository;
use society_shared::EntityId;

use super::client::{RestClient, RestError};
use super::models::ObligationRow;

pub struct RestObligationRepository {
    client: RestClient,
}

impl RestObligationRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

/// Wire shape of the bulk-create endpoint.
#[derive(Serialize)]
struct BulkCreateRequest<'a> {
    obligations: &'a [NewObligation],
}

#[async_trait]
impl ObligationRepository for RestObligationRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Obligation>, DomainError> {
        match self
            .client
            .get_json::<ObligationRow>(&format!("obligations/{}/", id))
            .await
        {
            Ok(row) => Ok(Some(row.into())),
            Err(RestError::Status { status: 404, .. }) => Ok(None),
            Err(e) => {
                error!("Backend error fetching obligation {}: {}", id, e);
                Err(e.into_domain())
            }
        }
    }

    async fn list(&self) -> Result<Vec<Obligation>, DomainError> {
        let rows: Vec<ObligationRow> =
            self.client.get_list("obligations/").await.map_err(|e| {
                error!("Backend error listing obligations: {}", e);
                e.into_domain()
            })?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_subcollection(
        &self,
        subcollection_id: EntityId,
    ) -> Result<Vec<Obligation>, DomainError> {
        let rows: Vec<ObligationRow> = self
            .client
            .get_list(&format!("obligations/?subcollection={}", subcollection_id))
            .await
            .map_err(|e| {
                error!(
                    "Backend error listing obligations for subcollection {}: {}",
                    subcollection_id, e
                );
                e.into_domain()
            })?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, obligation: &NewObligation) -> Result<Obligation, DomainError> {
        let row: ObligationRow = self
            .client
            .post_json("obligations/", obligation)
            .await
            .map_err(|e| {
                error!(
                    "Backend error creating obligation for member {}: {}",
                    obligation.member, e
                );
                e.into_domain()
            })?;
        Ok(row.into())
    }

    async fn create_bulk(
        &self,
        obligations: &[NewObligation],
    ) -> Result<Vec<Obligation>, DomainError> {
        let rows: Vec<ObligationRow> = self
            .client
            .post_json(
                "obligations/bulk_create/",
                &BulkCreateRequest { obligations },
            )
            .await
            .map_err(|e| {
                error!(
                    "Backend error bulk-creating {} obligations: {}",
                    obligations.len(),
                    e
                );
                e.into_domain()
            })?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: EntityId,
        patch: &ObligationPatch,
    ) -> Result<Obligation, DomainError> {
        let row: ObligationRow = self
            .client
            .patch_json(&format!("obligations/{}/", id), patch)
            .await
            .map_err(|e| match e {
                RestError::Status { status: 404, .. } => DomainError::ObligationNotFound(id),
                other => {
                    error!("Backend error updating obligation {}: {}", id, other);
                    other.into_domain()
                }
            })?;
        Ok(row.into())
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.client
            .delete(&format!("obligations/{}/", id))
            .await
            .map_err(|e| match e {
                RestError::Status { status: 404, .. } => DomainError::ObligationNotFound(id),
                other => {
                    error!("Backend error deleting obligation {}: {}", id, other);
                    other.into_domain()
                }
            })
    }

    async fn statistics(
        &self,
        subcollection_id: EntityId,
    ) -> Result<SubcollectionStatistics, DomainError> {
        self.client
            .get_json(&format!(
                "obligations/statistics/?subcollection={}",
                subcollection_id
            ))
            .await
            .map_err(|e| {
                error!(
                    "Backend error fetching statistics for subcollection {}: {}",
                    subcollection_id, e
                );
                e.into_domain()
            })
    }
}
