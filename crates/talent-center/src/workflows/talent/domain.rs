use serde::{Deserialize, Serialize};

/// Notice period a candidate can join within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    Immediate,
    #[serde(rename = "15 days")]
    FifteenDays,
    #[serde(rename = "30 days")]
    ThirtyDays,
}

impl Availability {
    pub const fn ordered() -> [Self; 3] {
        [Self::Immediate, Self::FifteenDays, Self::ThirtyDays]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::FifteenDays => "15 days",
            Self::ThirtyDays => "30 days",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|availability| availability.label() == raw)
    }
}

const PAISE_PER_THOUSAND_RUPEES: u64 = 100_000;

/// Static demo profile shown on the talent dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub experience: u8,
    pub skills: &'static [&'static str],
    /// Monthly cost in paise (1/100 rupee).
    pub monthly_cost: u64,
    pub availability: Availability,
    pub ready_to_relocate: bool,
    pub project: &'static str,
}

impl Candidate {
    /// Cost rendered in thousands of rupees, rounded half up, e.g. `₹85k`.
    pub fn monthly_cost_label(&self) -> String {
        let thousands =
            (self.monthly_cost + PAISE_PER_THOUSAND_RUPEES / 2) / PAISE_PER_THOUSAND_RUPEES;
        format!("₹{thousands}k")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_labels_round_trip() {
        for availability in Availability::ordered() {
            assert_eq!(Availability::from_label(availability.label()), Some(availability));
        }
        assert_eq!(Availability::from_label("all"), None);
        assert_eq!(Availability::from_label("immediate"), None);
    }

    #[test]
    fn cost_label_rounds_to_thousands() {
        let candidate = Candidate {
            id: 1,
            name: "Test",
            role: "QA Engineer",
            experience: 3,
            skills: &[],
            monthly_cost: 8_460_000,
            availability: Availability::Immediate,
            ready_to_relocate: false,
            project: "",
        };
        assert_eq!(candidate.monthly_cost_label(), "₹85k");

        let just_below_half = Candidate {
            monthly_cost: 8_449_999,
            ..candidate.clone()
        };
        assert_eq!(just_below_half.monthly_cost_label(), "₹84k");
    }
}
