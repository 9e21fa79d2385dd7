use serde::{Deserialize, Serialize};

use super::catalog::TalentCatalog;
use super::domain::{Availability, Candidate};

pub const EMPTY_STATE_TITLE: &str = "No candidates match the selected role and filters.";
pub const EMPTY_STATE_GUIDANCE: &str =
    "Try changing filters or select a different role when starting a new hiring request.";
const ROLE_FALLBACK_LABEL: &str = "your selected role";

/// Availability constraint; `All` leaves the dimension unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AvailabilityFilter {
    #[default]
    All,
    Only(Availability),
}

impl AvailabilityFilter {
    pub fn matches(self, availability: Availability) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Only(expected) => expected == availability,
        }
    }
}

impl TryFrom<String> for AvailabilityFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "all" {
            return Ok(AvailabilityFilter::All);
        }
        Availability::from_label(&value)
            .map(AvailabilityFilter::Only)
            .ok_or_else(|| format!("unknown availability filter '{value}'"))
    }
}

impl From<AvailabilityFilter> for String {
    fn from(value: AvailabilityFilter) -> Self {
        match value {
            AvailabilityFilter::All => "all".to_string(),
            AvailabilityFilter::Only(availability) => availability.label().to_string(),
        }
    }
}

/// Quick filters offered on the dashboard, combined with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFilter {
    /// `Some(true)` keeps relocation-ready candidates, `Some(false)` the others.
    #[serde(default)]
    pub ready_to_shift: Option<bool>,
    #[serde(default)]
    pub availability: AvailabilityFilter,
}

impl CandidateFilter {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        let shift_ok = self
            .ready_to_shift
            .map_or(true, |ready| candidate.ready_to_relocate == ready);
        shift_ok && self.availability.matches(candidate.availability)
    }
}

/// Stable filter: surviving candidates keep their input order.
pub fn filter_candidates<'a, I>(candidates: I, filter: &CandidateFilter) -> Vec<&'a Candidate>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    candidates
        .into_iter()
        .filter(|candidate| filter.matches(candidate))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateCardView {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub monthly_cost_label: String,
    pub shortlisted: bool,
    pub interview_requested: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmptyStateView {
    pub title: &'static str,
    pub guidance: &'static str,
}

/// Everything the talent dashboard renders for one role and filter combination.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub role: Option<String>,
    pub role_label: String,
    pub total_for_role: usize,
    pub filter: CandidateFilter,
    pub candidates: Vec<CandidateCardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyStateView>,
}

impl DashboardView {
    pub fn build(
        catalog: &TalentCatalog,
        role: Option<&str>,
        filter: CandidateFilter,
        selections: &CandidateSelections,
    ) -> Self {
        let for_role = catalog.candidates_for(role.unwrap_or_default());
        let total_for_role = for_role.len();
        let candidates: Vec<CandidateCardView> = filter_candidates(for_role, &filter)
            .into_iter()
            .map(|candidate| CandidateCardView {
                candidate: candidate.clone(),
                monthly_cost_label: candidate.monthly_cost_label(),
                shortlisted: selections.is_shortlisted(candidate.id),
                interview_requested: selections.is_interview_requested(candidate.id),
            })
            .collect();

        let empty_state = candidates.is_empty().then_some(EmptyStateView {
            title: EMPTY_STATE_TITLE,
            guidance: EMPTY_STATE_GUIDANCE,
        });

        Self {
            role: role.filter(|role| !role.is_empty()).map(str::to_string),
            role_label: role
                .filter(|role| !role.is_empty())
                .unwrap_or(ROLE_FALLBACK_LABEL)
                .to_string(),
            total_for_role,
            filter,
            candidates,
            empty_state,
        }
    }
}

/// Shortlist and interview toggles made on the dashboard. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateSelections {
    shortlisted: Vec<u32>,
    interview_requested: Vec<u32>,
}

impl CandidateSelections {
    /// Returns whether the candidate is shortlisted after the toggle.
    pub fn toggle_shortlist(&mut self, candidate_id: u32) -> bool {
        toggle(&mut self.shortlisted, candidate_id)
    }

    /// Returns whether an interview is requested after the toggle.
    pub fn toggle_interview(&mut self, candidate_id: u32) -> bool {
        toggle(&mut self.interview_requested, candidate_id)
    }

    pub fn is_shortlisted(&self, candidate_id: u32) -> bool {
        self.shortlisted.contains(&candidate_id)
    }

    pub fn is_interview_requested(&self, candidate_id: u32) -> bool {
        self.interview_requested.contains(&candidate_id)
    }

    pub fn shortlisted(&self) -> &[u32] {
        &self.shortlisted
    }

    pub fn interview_requested(&self) -> &[u32] {
        &self.interview_requested
    }
}

fn toggle(ids: &mut Vec<u32>, candidate_id: u32) -> bool {
    if let Some(position) = ids.iter().position(|id| *id == candidate_id) {
        ids.remove(position);
        false
    } else {
        ids.push(candidate_id);
        true
    }
}
