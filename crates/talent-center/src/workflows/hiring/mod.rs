//! Guided hiring request flow: company, role, preferences, and budget steps feeding a
//! persisted [`FlowState`], the access code issued on completion, and the gate in front
//! of the talent dashboard.

pub mod access;
pub mod domain;
pub mod router;
pub mod service;
pub mod skills;
pub mod steps;
pub mod storage;
pub mod store;

#[cfg(test)]
mod tests;

pub use access::{
    generate_access_code, normalize_access_code, verify_access_code, AccessDecision, AccessGate,
    AccessState,
};
pub use domain::{
    BudgetRangeOption, EngagementType, ExperienceRange, FlowState, InterviewMode,
    JoiningChoice, RoleCategory, WorkingHours, FLOW_STORAGE_KEY,
};
pub use router::hiring_router;
pub use service::{CandidateToggleView, FlowSnapshot, HiringFlowError, HiringFlowService, StepOutcome};
pub use skills::{skill_key, SkillSelection, SkillSet};
pub use steps::{
    BudgetSubmission, CompanyAnswers, CompanyField, CompletionView, FlowProgress, FlowStep,
    PreferencesSubmission, RoleDraft, RoleSubmission, StepError,
};
pub use storage::{FileStateStorage, InMemoryStateStorage, StateStorage, StorageError};
pub use store::{FlowStore, LoadOutcome, PersistOutcome, UpdateOutcome};
