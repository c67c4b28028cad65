//! Repository traits (ports)
//!
//! One typed repository per entity, selected by type rather than a
//! name-keyed dispatch table.

pub mod area_repository;
pub mod collection_repository;
pub mod house_repository;
pub mod member_repository;
pub mod obligation_repository;
pub mod subcollection_repository;

pub use area_repository::AreaRepository;
pub use collection_repository::CollectionRepository;
pub use house_repository::HouseRepository;
pub use member_repository::MemberRepository;
pub use obligation_repository::ObligationRepository;
pub use subcollection_repository::SubcollectionRepository;
