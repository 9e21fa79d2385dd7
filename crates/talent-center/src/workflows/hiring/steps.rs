use serde::{Deserialize, Serialize};

use crate::workflows::talent::TalentCatalog;

use super::domain::{
    BudgetRangeOption, EngagementType, ExperienceRange, FlowState, InterviewMode, JoiningChoice,
    RoleCategory, WorkingHours,
};
use super::skills::{SkillSelection, SkillSet};

/// Number of segments in the progress bar (four forms plus completion).
pub const TOTAL_STEPS: u8 = 5;

pub const EMAIL_CONFIRMATION_NOTE: &str = "This code has been sent to your email. (Demo confirmation)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStep {
    Company,
    Role,
    Preferences,
    Budget,
    Complete,
}

impl FlowStep {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Company,
            Self::Role,
            Self::Preferences,
            Self::Budget,
            Self::Complete,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Role => "Role",
            Self::Preferences => "Preferences",
            Self::Budget => "Budget",
            Self::Complete => "Complete",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Company => "/start",
            Self::Role => "/role",
            Self::Preferences => "/preferences",
            Self::Budget => "/budget",
            Self::Complete => "/complete",
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::Company => 1,
            Self::Role => 2,
            Self::Preferences => 3,
            Self::Budget => 4,
            Self::Complete => 5,
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Company => Some(Self::Role),
            Self::Role => Some(Self::Preferences),
            Self::Preferences => Some(Self::Budget),
            Self::Budget => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    /// Progress header for form steps; completion has none.
    pub fn progress(self) -> Option<FlowProgress> {
        if self == Self::Complete {
            return None;
        }
        Some(FlowProgress {
            step: self,
            number: self.number(),
            total: TOTAL_STEPS,
            label: self.label(),
        })
    }

    /// First step whose answers are still missing.
    pub fn resume_point(state: &FlowState) -> Self {
        if state.company_name.is_none() || state.email.is_none() {
            Self::Company
        } else if state.role.is_none() {
            Self::Role
        } else if state.working_hours.is_none() {
            Self::Preferences
        } else if state.generated_access_code.is_none() {
            Self::Budget
        } else {
            Self::Complete
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowProgress {
    pub step: FlowStep,
    pub number: u8,
    pub total: u8,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("{} is required", .0.label())]
    MissingAnswer(CompanyField),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("choose a role category first")]
    MissingCategory,
    #[error("select a role to continue")]
    MissingRole,
    #[error("'{0}' is not a role we hire for")]
    UnknownRole(String),
    #[error("'{role}' is not a {} role", .category.label())]
    RoleOutsideCategory { role: String, category: RoleCategory },
}

/// Questions asked one at a time on the company step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyField {
    CompanyName,
    Location,
    ContactPerson,
    Email,
}

impl CompanyField {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::CompanyName,
            Self::Location,
            Self::ContactPerson,
            Self::Email,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company name",
            Self::Location => "Company location",
            Self::ContactPerson => "Contact person",
            Self::Email => "Email",
        }
    }

    pub const fn question(self) -> &'static str {
        match self {
            Self::CompanyName => "Let's start simple. What's your company name?",
            Self::Location => "Where is your company located?",
            Self::ContactPerson => "Who should we contact regarding hiring?",
            Self::Email => "What's the best email to reach you?",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::CompanyName => "E.g. Acme Inc",
            Self::Location => "City, Country",
            Self::ContactPerson => "Full name",
            Self::Email => "you@company.com",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyAnswers {
    pub company_name: String,
    pub location: String,
    pub contact_person: String,
    pub email: String,
}

impl CompanyAnswers {
    pub fn prefill(state: &FlowState) -> Self {
        Self {
            company_name: state.company_name.clone().unwrap_or_default(),
            location: state.location.clone().unwrap_or_default(),
            contact_person: state.contact_person.clone().unwrap_or_default(),
            email: state.email.clone().unwrap_or_default(),
        }
    }

    pub fn answer(&self, field: CompanyField) -> &str {
        match field {
            CompanyField::CompanyName => &self.company_name,
            CompanyField::Location => &self.location,
            CompanyField::ContactPerson => &self.contact_person,
            CompanyField::Email => &self.email,
        }
    }

    pub fn into_patch(self) -> Result<FlowState, StepError> {
        if let Some(field) = CompanyField::ordered()
            .into_iter()
            .find(|field| self.answer(*field).trim().is_empty())
        {
            return Err(StepError::MissingAnswer(field));
        }

        let email = self.email.trim();
        if !email.contains('@') {
            return Err(StepError::InvalidEmail(email.to_string()));
        }

        Ok(FlowState {
            company_name: non_blank(&self.company_name),
            location: non_blank(&self.location),
            contact_person: non_blank(&self.contact_person),
            email: non_blank(&self.email),
            ..FlowState::default()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleSubmission {
    pub category: Option<RoleCategory>,
    pub role: String,
    pub headcount: String,
    pub experience_range: ExperienceRange,
    pub skills: Vec<String>,
}

impl RoleSubmission {
    /// Validates against the catalog. Skills chosen for `previous_role` are dropped when
    /// the role changes and no new skills are submitted.
    pub fn into_patch(
        self,
        catalog: &TalentCatalog,
        previous_role: Option<&str>,
    ) -> Result<FlowState, StepError> {
        let role = self.role.trim();
        if role.is_empty() {
            return Err(StepError::MissingRole);
        }
        let Some(actual) = catalog.category_of(role) else {
            return Err(StepError::UnknownRole(role.to_string()));
        };
        let category = self.category.ok_or(StepError::MissingCategory)?;
        if actual != category {
            return Err(StepError::RoleOutsideCategory {
                role: role.to_string(),
                category,
            });
        }

        let skills: SkillSet = self.skills.iter().collect();
        let role_changed = previous_role.is_some_and(|previous| previous != role);
        Ok(FlowState {
            role: Some(role.to_string()),
            headcount: non_blank(&self.headcount),
            experience_range: Some(self.experience_range),
            skills: (!skills.is_empty() || role_changed).then_some(skills),
            ..FlowState::default()
        })
    }
}

/// Interactive editing state for the role step.
///
/// Picking another category forgets the role and skills; picking another role forgets
/// the skills, since suggestions are specific to one role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleDraft {
    category: Option<RoleCategory>,
    role: Option<String>,
    pub headcount: String,
    pub experience_range: ExperienceRange,
    skills: SkillSelection,
}

impl RoleDraft {
    pub fn prefill(state: &FlowState, catalog: &TalentCatalog) -> Self {
        let role = state.role.clone();
        Self {
            category: role.as_deref().and_then(|role| catalog.category_of(role)),
            role,
            headcount: state.headcount.clone().unwrap_or_default(),
            experience_range: state.experience_range.unwrap_or_default(),
            skills: SkillSelection::from_existing(state.skills.as_ref()),
        }
    }

    pub fn category(&self) -> Option<RoleCategory> {
        self.category
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn skills(&self) -> &SkillSet {
        self.skills.selected()
    }

    pub fn select_category(&mut self, category: Option<RoleCategory>) {
        self.category = category;
        self.role = None;
        self.skills.clear();
    }

    pub fn select_role(&mut self, role: &str, catalog: &TalentCatalog) -> Result<(), StepError> {
        let category = self.category.ok_or(StepError::MissingCategory)?;
        if !catalog.roles_for(category).contains(&role) {
            return Err(StepError::RoleOutsideCategory {
                role: role.to_string(),
                category,
            });
        }
        self.role = Some(role.to_string());
        self.skills.clear();
        Ok(())
    }

    /// Roles offered for the chosen category.
    pub fn available_roles(&self, catalog: &TalentCatalog) -> &'static [&'static str] {
        self.category
            .map(|category| catalog.roles_for(category))
            .unwrap_or(&[])
    }

    /// Suggested skills, only once a role is chosen.
    pub fn suggested_skills(&self, catalog: &TalentCatalog) -> &'static [&'static str] {
        self.role
            .as_deref()
            .map(|role| catalog.skills_for(role))
            .unwrap_or(&[])
    }

    pub fn toggle_skill(&mut self, label: &str) {
        self.skills.toggle(label);
    }

    pub fn add_custom_skill(&mut self, label: &str) -> bool {
        self.skills.add_custom(label)
    }

    pub fn remove_skill(&mut self, label: &str) -> bool {
        self.skills.remove(label)
    }

    pub fn select_all_skills(&mut self, catalog: &TalentCatalog) {
        let suggestions = self.suggested_skills(catalog);
        self.skills.select_all(suggestions);
    }

    /// The submit button stays disabled until both category and role are chosen.
    pub fn can_submit(&self) -> bool {
        self.category.is_some() && self.role.is_some()
    }

    pub fn into_submission(self) -> RoleSubmission {
        RoleSubmission {
            category: self.category,
            role: self.role.unwrap_or_default(),
            headcount: self.headcount,
            experience_range: self.experience_range,
            skills: self
                .skills
                .into_submission()
                .map(Vec::from)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesSubmission {
    pub working_hours: WorkingHours,
    pub interview_mode: InterviewMode,
    pub joining: JoiningChoice,
    /// Free-text timeline, used only with [`JoiningChoice::Other`].
    pub joining_custom: Option<String>,
}

impl PreferencesSubmission {
    pub fn prefill(state: &FlowState) -> Self {
        let (joining, joining_custom) = match state.joining_timeline.as_deref() {
            None => (JoiningChoice::default(), None),
            Some(stored) => match [
                JoiningChoice::Immediate,
                JoiningChoice::FifteenDays,
                JoiningChoice::ThirtyDays,
                JoiningChoice::Other,
            ]
            .into_iter()
            .find(|choice| choice.label() == stored)
            {
                Some(choice) => (choice, None),
                None => (JoiningChoice::Other, Some(stored.to_string())),
            },
        };

        Self {
            working_hours: state.working_hours.unwrap_or_default(),
            interview_mode: state.interview_mode.unwrap_or_default(),
            joining,
            joining_custom,
        }
    }

    pub fn effective_timeline(&self) -> String {
        match (self.joining, self.joining_custom.as_deref().and_then(non_blank)) {
            (JoiningChoice::Other, Some(custom)) => custom,
            (choice, _) => choice.label().to_string(),
        }
    }

    pub fn into_patch(self) -> FlowState {
        FlowState {
            joining_timeline: Some(self.effective_timeline()),
            working_hours: Some(self.working_hours),
            interview_mode: Some(self.interview_mode),
            ..FlowState::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetSubmission {
    pub budget_range_option: Option<BudgetRangeOption>,
    pub budget_range: String,
    pub engagement_type: EngagementType,
    pub notes: String,
}

impl BudgetSubmission {
    pub fn prefill(state: &FlowState) -> Self {
        Self {
            budget_range_option: state.budget_range_option,
            budget_range: state.budget_range.clone().unwrap_or_default(),
            engagement_type: state.engagement_type.unwrap_or_default(),
            notes: state.notes.clone().unwrap_or_default(),
        }
    }

    pub fn into_patch(self, access_code: String) -> FlowState {
        FlowState {
            budget_range_option: self.budget_range_option,
            budget_range: non_blank(&self.budget_range),
            engagement_type: Some(self.engagement_type),
            notes: non_blank(&self.notes),
            generated_access_code: Some(access_code),
            ..FlowState::default()
        }
    }
}

/// Completion screen contents, or where to send the client when no code exists yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CompletionView {
    Ready {
        access_code: String,
        email_note: &'static str,
    },
    Redirect {
        redirect_to: FlowStep,
    },
}

impl CompletionView {
    pub fn from_state(state: &FlowState) -> Self {
        match state.generated_access_code.as_deref().and_then(non_blank) {
            Some(access_code) => CompletionView::Ready {
                access_code,
                email_note: EMAIL_CONFIRMATION_NOTE,
            },
            None => CompletionView::Redirect {
                redirect_to: FlowStep::Budget,
            },
        }
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
