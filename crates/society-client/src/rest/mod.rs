//! REST infrastructure

pub mod area_repo_impl;
pub mod client;
pub mod collection_repo_impl;
pub mod house_repo_impl;
pub mod member_repo_impl;
pub mod models;
pub mod obligation_repo_impl;
pub mod subcollection_repo_impl;

pub use area_repo_impl::RestAreaRepository;
pub use collection_repo_impl::RestCollectionRepository;
pub use house_repo_impl::RestHouseRepository;
pub use member_repo_impl::RestMemberRepository;
pub use obligation_repo_impl::RestObligationRepository;
pub use subcollection_repo_impl::RestSubcollectionRepository;
