// ============================================================================
// Society Client - Startup Bootstrap
// File: crates/society-client/src/bootstrap.rs
// Description: Initial concurrent load of all backend resources, with the
//              connect-retry policy applied on app start
// ============================================================================

use std::collections::HashMap;
use std::time::Duration;

use tracing::{error, info, warn};

use society_core::domain::{Area, Collection, House, Member, Obligation, Subcollection};
use society_core::error::DomainError;
use society_core::repositories::{
    AreaRepository, CollectionRepository, HouseRepository, MemberRepository,
    ObligationRepository, SubcollectionRepository,
};
use society_shared::config::StartupSettings;
use society_shared::{AppError, EntityId};

use crate::rest::client::RestClient;
use crate::rest::{
    RestAreaRepository, RestCollectionRepository, RestHouseRepository, RestMemberRepository,
    RestObligationRepository, RestSubcollectionRepository,
};

/// All REST repositories sharing one HTTP client.
pub struct RestBackend {
    pub members: RestMemberRepository,
    pub houses: RestHouseRepository,
    pub areas: RestAreaRepository,
    pub collections: RestCollectionRepository,
    pub subcollections: RestSubcollectionRepository,
    pub obligations: RestObligationRepository,
}

impl RestBackend {
    pub fn new(client: RestClient) -> Self {
        Self {
            members: RestMemberRepository::new(client.clone()),
            houses: RestHouseRepository::new(client.clone()),
            areas: RestAreaRepository::new(client.clone()),
            collections: RestCollectionRepository::new(client.clone()),
            subcollections: RestSubcollectionRepository::new(client.clone()),
            obligations: RestObligationRepository::new(client),
        }
    }
}

/// Everything the app shows after startup, loaded in one pass.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub members: Vec<Member>,
    pub houses: Vec<House>,
    pub areas: Vec<Area>,
    pub collections: Vec<Collection>,
    pub subcollections: Vec<Subcollection>,
    pub obligations: Vec<Obligation>,
}

impl Snapshot {
    /// House lookup for the candidate filter's area join.
    pub fn house_index(&self) -> HashMap<EntityId, House> {
        self.houses
            .iter()
            .map(|h| (h.home_id, h.clone()))
            .collect()
    }
}

pub async fn load_snapshot(backend: &RestBackend) -> Result<Snapshot, DomainError> {
    let (members, houses, areas, collections, subcollections, obligations) = tokio::try_join!(
        backend.members.list(),
        backend.houses.list(),
        backend.areas.list(),
        backend.collections.list(),
        backend.subcollections.list(),
        backend.obligations.list(),
    )?;
    Ok(Snapshot {
        members,
        houses,
        areas,
        collections,
        subcollections,
        obligations,
    })
}

/// Startup connect-retry policy: up to `max_retries` retries after the
/// first failure, with linear backoff.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_base: Duration,
}

impl RetryPolicy {
    fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_base * (attempt + 1)
    }
}

impl From<&StartupSettings> for RetryPolicy {
    fn from(settings: &StartupSettings) -> Self {
        Self {
            max_retries: settings.max_retries,
            backoff_base: Duration::from_secs(settings.backoff_base_secs),
        }
    }
}

/// Initial data load. Only this operation auto-retries; when the policy is
/// exhausted the fatal cannot-connect state is surfaced.
pub async fn load_snapshot_with_retry(
    backend: &RestBackend,
    policy: &RetryPolicy,
) -> Result<Snapshot, AppError> {
    let mut attempt = 0;
    loop {
        match load_snapshot(backend).await {
            Ok(snapshot) => {
                info!(
                    "Initial load complete: {} members, {} houses, {} areas, {} collections, {} subcollections, {} obligations",
                    snapshot.members.len(),
                    snapshot.houses.len(),
                    snapshot.areas.len(),
                    snapshot.collections.len(),
                    snapshot.subcollections.len(),
                    snapshot.obligations.len()
                );
                return Ok(snapshot);
            }
            Err(e) if attempt < policy.max_retries => {
                let delay = policy.backoff(attempt);
                warn!(
                    "Initial load failed (attempt {} of {}): {}; retrying in {:?}",
                    attempt + 1,
                    policy.max_retries + 1,
                    e,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                error!("Initial load failed after {} attempts: {}", attempt + 1, e);
                return Err(AppError::BackendUnreachable);
            }
        }
    }
}
