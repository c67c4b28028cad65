//! Domain services

pub mod bulk_assignment;
pub mod candidate_filter;
pub mod directory;
pub mod obligation_service;
pub mod payment_service;

pub use bulk_assignment::{
    BulkAssignmentFailure, BulkAssignmentOutcome, BulkAssignmentRequest, BulkAssignmentService,
};
pub use candidate_filter::{BulkSelection, CandidateFilter};
pub use directory::{AreaSummary, MemberQuery};
pub use obligation_service::ObligationService;
pub use payment_service::{PaymentConfirmation, PaymentService};
