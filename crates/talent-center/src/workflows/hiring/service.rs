use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::{debug, info};

use crate::workflows::talent::{CandidateFilter, CandidateSelections, DashboardView, TalentCatalog};

use super::access::{generate_access_code, verify_access_code, AccessDecision};
use super::domain::FlowState;
use super::steps::{
    BudgetSubmission, CompanyAnswers, CompletionView, FlowProgress, FlowStep,
    PreferencesSubmission, RoleSubmission, StepError,
};
use super::storage::StateStorage;
use super::store::{FlowStore, LoadOutcome, PersistOutcome};

#[derive(Debug, thiserror::Error)]
pub enum HiringFlowError {
    #[error(transparent)]
    Step(#[from] StepError),
    #[error("candidate {0} does not exist")]
    UnknownCandidate(u32),
    #[error("flow state lock poisoned")]
    Poisoned,
}

/// Current answers plus where a returning client should resume.
#[derive(Debug, Clone, Serialize)]
pub struct FlowSnapshot {
    pub state: FlowState,
    pub resume_at: FlowStep,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<FlowProgress>,
    pub load: LoadOutcome,
}

/// Response to a completed step.
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub state: FlowState,
    pub next: FlowStep,
    pub persistence: PersistOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CandidateToggleView {
    pub candidate_id: u32,
    pub shortlisted: bool,
    pub interview_requested: bool,
}

/// Service owning the flow store, the talent catalog, and dashboard selections.
pub struct HiringFlowService<S> {
    store: Mutex<FlowStore<S>>,
    catalog: Arc<TalentCatalog>,
    selections: Mutex<CandidateSelections>,
}

impl<S> HiringFlowService<S>
where
    S: StateStorage + 'static,
{
    pub fn new(store: FlowStore<S>, catalog: Arc<TalentCatalog>) -> Self {
        Self {
            store: Mutex::new(store),
            catalog,
            selections: Mutex::new(CandidateSelections::default()),
        }
    }

    /// Opens the store on `storage` and pairs it with the standard catalog.
    pub fn open(storage: Arc<S>) -> Self {
        Self::new(FlowStore::open(storage), Arc::new(TalentCatalog::standard()))
    }

    pub fn catalog(&self) -> &TalentCatalog {
        &self.catalog
    }

    pub fn snapshot(&self) -> Result<FlowSnapshot, HiringFlowError> {
        let store = self.store()?;
        let state = store.read();
        let resume_at = FlowStep::resume_point(&state);
        Ok(FlowSnapshot {
            progress: resume_at.progress(),
            resume_at,
            load: store.load_outcome().clone(),
            state,
        })
    }

    pub fn submit_company(&self, answers: CompanyAnswers) -> Result<StepOutcome, HiringFlowError> {
        let patch = answers.into_patch()?;
        self.apply(FlowStep::Company, patch)
    }

    pub fn submit_role(&self, submission: RoleSubmission) -> Result<StepOutcome, HiringFlowError> {
        let mut store = self.store()?;
        let patch = submission.into_patch(&self.catalog, store.state().role.as_deref())?;
        Ok(record(&mut store, FlowStep::Role, patch))
    }

    pub fn submit_preferences(
        &self,
        submission: PreferencesSubmission,
    ) -> Result<StepOutcome, HiringFlowError> {
        self.apply(FlowStep::Preferences, submission.into_patch())
    }

    /// Saves the budget answers and attaches the access code, minting one only when the
    /// flow has none yet.
    pub fn submit_budget(
        &self,
        submission: BudgetSubmission,
    ) -> Result<StepOutcome, HiringFlowError> {
        let mut store = self.store()?;
        let code = match store.state().generated_access_code.clone() {
            Some(existing) => existing,
            None => {
                let code = generate_access_code();
                info!(code = %code, "issued access code");
                code
            }
        };
        let outcome = store.update(submission.into_patch(code));
        Ok(StepOutcome {
            state: store.read(),
            next: FlowStep::Complete,
            persistence: outcome.persistence,
        })
    }

    pub fn completion(&self) -> Result<CompletionView, HiringFlowError> {
        let store = self.store()?;
        Ok(CompletionView::from_state(store.state()))
    }

    pub fn reset(&self) -> Result<PersistOutcome, HiringFlowError> {
        let outcome = self.store()?.reset();
        *self.selections()? = CandidateSelections::default();
        info!(persisted = outcome.is_persisted(), "hiring flow reset");
        Ok(outcome)
    }

    pub fn verify_access(&self, input: &str) -> Result<AccessDecision, HiringFlowError> {
        let store = self.store()?;
        let decision =
            verify_access_code(store.state().generated_access_code.as_deref(), input);
        debug!(verified = decision.is_verified(), "access code submitted");
        Ok(decision)
    }

    pub fn dashboard(&self, filter: CandidateFilter) -> Result<DashboardView, HiringFlowError> {
        let role = self.store()?.state().role.clone();
        let selections = self.selections()?;
        Ok(DashboardView::build(
            &self.catalog,
            role.as_deref(),
            filter,
            &selections,
        ))
    }

    pub fn toggle_shortlist(&self, candidate_id: u32) -> Result<CandidateToggleView, HiringFlowError> {
        self.toggle(candidate_id, CandidateSelections::toggle_shortlist)
    }

    pub fn toggle_interview(&self, candidate_id: u32) -> Result<CandidateToggleView, HiringFlowError> {
        self.toggle(candidate_id, CandidateSelections::toggle_interview)
    }

    fn toggle(
        &self,
        candidate_id: u32,
        flip: fn(&mut CandidateSelections, u32) -> bool,
    ) -> Result<CandidateToggleView, HiringFlowError> {
        if self.catalog.candidate(candidate_id).is_none() {
            return Err(HiringFlowError::UnknownCandidate(candidate_id));
        }
        let mut selections = self.selections()?;
        flip(&mut selections, candidate_id);
        Ok(CandidateToggleView {
            candidate_id,
            shortlisted: selections.is_shortlisted(candidate_id),
            interview_requested: selections.is_interview_requested(candidate_id),
        })
    }

    fn apply(&self, step: FlowStep, patch: FlowState) -> Result<StepOutcome, HiringFlowError> {
        let mut store = self.store()?;
        Ok(record(&mut store, step, patch))
    }

    fn store(&self) -> Result<MutexGuard<'_, FlowStore<S>>, HiringFlowError> {
        self.store.lock().map_err(|_| HiringFlowError::Poisoned)
    }

    fn selections(&self) -> Result<MutexGuard<'_, CandidateSelections>, HiringFlowError> {
        self.selections.lock().map_err(|_| HiringFlowError::Poisoned)
    }
}

fn record<S>(store: &mut FlowStore<S>, step: FlowStep, patch: FlowState) -> StepOutcome
where
    S: StateStorage + 'static,
{
    let outcome = store.update(patch);
    info!(
        step = step.label(),
        persisted = outcome.persistence.is_persisted(),
        "hiring step saved"
    );
    StepOutcome {
        state: store.read(),
        next: step.next().unwrap_or(FlowStep::Complete),
        persistence: outcome.persistence,
    }
}
