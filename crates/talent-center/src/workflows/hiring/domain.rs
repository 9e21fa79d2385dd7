use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::skills::SkillSet;

/// Fixed identifier the flow snapshot is persisted under.
pub const FLOW_STORAGE_KEY: &str = "owngcc-hiring-flow";

/// Answers accumulated across the hiring request flow.
///
/// Every field is optional: a field is only present once the step owning it has been
/// submitted. The same shape doubles as a patch for [`FlowState::merge`], where `None`
/// means "leave the current value alone".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowState {
    // Company
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    // Role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headcount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub experience_range: Option<ExperienceRange>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub skills: Option<SkillSet>,
    // Preferences
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub working_hours: Option<WorkingHours>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub interview_mode: Option<InterviewMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_timeline: Option<String>,
    // Budget
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub budget_range_option: Option<BudgetRangeOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub engagement_type: Option<EngagementType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    // Access
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_access_code: Option<String>,
}

/// Reads a closed-set field; a value outside the set loads as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

impl FlowState {
    /// Shallow merge: every `Some` field of `patch` replaces the current value.
    pub fn merge(&mut self, patch: FlowState) {
        fn apply<T>(slot: &mut Option<T>, value: Option<T>) {
            if let Some(value) = value {
                *slot = Some(value);
            }
        }

        let FlowState {
            company_name,
            contact_person,
            email,
            location,
            role,
            headcount,
            experience_range,
            skills,
            working_hours,
            interview_mode,
            joining_timeline,
            budget_range_option,
            budget_range,
            engagement_type,
            notes,
            generated_access_code,
        } = patch;

        apply(&mut self.company_name, company_name);
        apply(&mut self.contact_person, contact_person);
        apply(&mut self.email, email);
        apply(&mut self.location, location);
        apply(&mut self.role, role);
        apply(&mut self.headcount, headcount);
        apply(&mut self.experience_range, experience_range);
        apply(&mut self.skills, skills);
        apply(&mut self.working_hours, working_hours);
        apply(&mut self.interview_mode, interview_mode);
        apply(&mut self.joining_timeline, joining_timeline);
        apply(&mut self.budget_range_option, budget_range_option);
        apply(&mut self.budget_range, budget_range);
        apply(&mut self.engagement_type, engagement_type);
        apply(&mut self.notes, notes);
        apply(&mut self.generated_access_code, generated_access_code);
    }

    pub fn is_empty(&self) -> bool {
        *self == FlowState::default()
    }
}

/// Top-level grouping chosen before a specific role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    Tech,
    NonTech,
}

impl RoleCategory {
    pub const fn ordered() -> [Self; 2] {
        [Self::Tech, Self::NonTech]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tech => "Tech",
            Self::NonTech => "Non-Tech",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Tech => "Software, engineering, QA, DevOps, AI/ML",
            Self::NonTech => "Product, design, marketing, HR, sales, operations",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceRange {
    #[serde(rename = "0-2 years")]
    ZeroToTwo,
    #[serde(rename = "2-4 years")]
    TwoToFour,
    #[default]
    #[serde(rename = "3-5 years")]
    ThreeToFive,
    #[serde(rename = "5-8 years")]
    FiveToEight,
    #[serde(rename = "8+ years")]
    EightPlus,
    Flexible,
}

impl ExperienceRange {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::ZeroToTwo,
            Self::TwoToFour,
            Self::ThreeToFive,
            Self::FiveToEight,
            Self::EightPlus,
            Self::Flexible,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ZeroToTwo => "0–2 years",
            Self::TwoToFour => "2–4 years",
            Self::ThreeToFive => "3–5 years",
            Self::FiveToEight => "5–8 years",
            Self::EightPlus => "8+ years",
            Self::Flexible => "Flexible",
        }
    }
}

/// Time zone the hire is expected to overlap with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkingHours {
    #[default]
    India,
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "UK")]
    Uk,
}

impl WorkingHours {
    pub const fn label(self) -> &'static str {
        match self {
            Self::India => "India",
            Self::Us => "US",
            Self::Uk => "UK",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::India => "IST time zone",
            Self::Us => "EST / PST",
            Self::Uk => "GMT / BST",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewMode {
    #[default]
    Video,
    Audio,
}

impl InterviewMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Audio => "Audio",
        }
    }
}

/// Joining timeline choice offered by the preferences step.
///
/// The stored value is an open string because `Other` lets the client describe the
/// timeline in their own words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoiningChoice {
    #[default]
    Immediate,
    #[serde(rename = "15 days")]
    FifteenDays,
    #[serde(rename = "30 days")]
    ThirtyDays,
    Other,
}

impl JoiningChoice {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::FifteenDays => "15 days",
            Self::ThirtyDays => "30 days",
            Self::Other => "Other",
        }
    }
}

/// Annual budget bands, in Indian lakh/crore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetRangeOption {
    #[serde(rename = "under-10")]
    UnderTenLakh,
    #[serde(rename = "10-25")]
    TenToTwentyFiveLakh,
    #[serde(rename = "25-50")]
    TwentyFiveToFiftyLakh,
    #[serde(rename = "50-100")]
    FiftyLakhToOneCrore,
    #[serde(rename = "100-plus")]
    OneCrorePlus,
}

impl BudgetRangeOption {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::UnderTenLakh,
            Self::TenToTwentyFiveLakh,
            Self::TwentyFiveToFiftyLakh,
            Self::FiftyLakhToOneCrore,
            Self::OneCrorePlus,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderTenLakh => "Under ₹10L",
            Self::TenToTwentyFiveLakh => "₹10L – ₹25L",
            Self::TwentyFiveToFiftyLakh => "₹25L – ₹50L",
            Self::FiftyLakhToOneCrore => "₹50L – ₹1Cr",
            Self::OneCrorePlus => "₹1Cr+",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    Contract,
}

impl EngagementType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::Contract => "Contract",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::FullTime => "Dedicated hire",
            Self::Contract => "Project-based",
        }
    }
}
