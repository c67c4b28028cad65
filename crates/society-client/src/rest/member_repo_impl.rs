// ============================================================================
// Society Client - REST Member Repository
// File: crates/society-client/src/rest/member_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use tracing::error;

use society_core::domain::{Member, NewMember};
use society_core::error::DomainError;
use society_core::repositories::MemberRepository;
use society_shared::EntityId;

use super::client::{RestClient, RestError};
use super::models::MemberRow;

pub struct RestMemberRepository {
    client: RestClient,
}

impl RestMemberRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MemberRepository for RestMemberRepository {
    async fn find_by_id(&self, member_id: EntityId) -> Result<Option<Member>, DomainError> {
        match self
            .client
            .get_json::<MemberRow>(&format!("members/{}/", member_id))
            .await
        {
            Ok(row) => Ok(Some(row.into())),
            Err(RestError::Status { status: 404, .. }) => Ok(None),
            Err(e) => {
                error!("Backend error fetching member {}: {}", member_id, e);
                Err(e.into_domain())
            }
        }
    }

    async fn list(&self) -> Result<Vec<Member>, DomainError> {
        let rows: Vec<MemberRow> = self.client.get_list("members/").await.map_err(|e| {
            error!("Backend error listing members: {}", e);
            e.into_domain()
        })?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, member: &NewMember) -> Result<Member, DomainError> {
        let row: MemberRow = self.client.post_json("members/", member).await.map_err(|e| {
            error!("Backend error creating member: {}", e);
            e.into_domain()
        })?;
        Ok(row.into())
    }

    async fn update(&self, member: &Member) -> Result<Member, DomainError> {
        let row: MemberRow = self
            .client
            .put_json(&format!("members/{}/", member.member_id), member)
            .await
            .map_err(|e| match e {
                RestError::Status { status: 404, .. } => {
                    DomainError::MemberNotFound(member.member_id)
                }
                other => {
                    error!("Backend error updating member {}: {}", member.member_id, other);
                    other.into_domain()
                }
            })?;
        Ok(row.into())
    }

    async fn delete(&self, member_id: EntityId) -> Result<(), DomainError> {
        self.client
            .delete(&format!("members/{}/", member_id))
            .await
            .map_err(|e| match e {
                RestError::Status { status: 404, .. } => DomainError::MemberNotFound(member_id),
                other => {
                    error!("Backend error deleting member {}: {}", member_id, other);
                    other.into_domain()
                }
            })
    }
}
