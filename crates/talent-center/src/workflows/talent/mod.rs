//! Demo talent catalog and the dashboard that filters it.

pub mod catalog;
pub mod dashboard;
pub mod domain;

pub use catalog::TalentCatalog;
pub use dashboard::{
    filter_candidates, AvailabilityFilter, CandidateCardView, CandidateFilter,
    CandidateSelections, DashboardView, EmptyStateView,
};
pub use domain::{Availability, Candidate};
