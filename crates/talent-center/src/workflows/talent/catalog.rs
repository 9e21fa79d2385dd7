use crate::workflows::hiring::domain::RoleCategory;

use super::domain::{Availability, Candidate};

const TECH_ROLES: &[&str] = &[
    "Frontend Engineer",
    "Backend Engineer",
    "Full Stack Engineer",
    "Mobile Engineer",
    "DevOps Engineer",
    "QA Engineer",
    "Data Engineer",
    "AI/ML Engineer",
];

const NON_TECH_ROLES: &[&str] = &[
    "Product Manager",
    "UI/UX Designer",
    "Digital Marketing Specialist",
    "HR Generalist",
    "Sales Executive",
    "Operations Manager",
];

#[derive(Debug)]
struct RoleSkills {
    role: &'static str,
    skills: &'static [&'static str],
}

/// Read-only catalog of roles, suggested skills and demo candidates.
#[derive(Debug)]
pub struct TalentCatalog {
    role_skills: Vec<RoleSkills>,
    candidates: Vec<Candidate>,
}

impl TalentCatalog {
    pub fn standard() -> Self {
        Self {
            role_skills: standard_role_skills(),
            candidates: standard_candidates(),
        }
    }

    pub fn roles_for(&self, category: RoleCategory) -> &'static [&'static str] {
        match category {
            RoleCategory::Tech => TECH_ROLES,
            RoleCategory::NonTech => NON_TECH_ROLES,
        }
    }

    pub fn category_of(&self, role: &str) -> Option<RoleCategory> {
        RoleCategory::ordered()
            .into_iter()
            .find(|category| self.roles_for(*category).contains(&role))
    }

    pub fn is_known_role(&self, role: &str) -> bool {
        self.category_of(role).is_some()
    }

    /// Suggested skills for exactly `role`; unknown roles have none.
    pub fn skills_for(&self, role: &str) -> &'static [&'static str] {
        self.role_skills
            .iter()
            .find(|entry| entry.role == role)
            .map(|entry| entry.skills)
            .unwrap_or(&[])
    }

    /// Candidates whose role is exactly `role` (case-sensitive), in catalog order.
    pub fn candidates_for(&self, role: &str) -> Vec<&Candidate> {
        self.candidates
            .iter()
            .filter(|candidate| candidate.role == role)
            .collect()
    }

    pub fn candidate(&self, id: u32) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| candidate.id == id)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}

fn standard_role_skills() -> Vec<RoleSkills> {
    vec![
        RoleSkills {
            role: "Frontend Engineer",
            skills: &["React", "TypeScript", "Next.js", "Tailwind CSS", "Redux", "Jest"],
        },
        RoleSkills {
            role: "Backend Engineer",
            skills: &["Node.js", "Java", "Spring Boot", "PostgreSQL", "REST APIs", "Microservices"],
        },
        RoleSkills {
            role: "Full Stack Engineer",
            skills: &["React", "Node.js", "TypeScript", "MongoDB", "GraphQL", "AWS"],
        },
        RoleSkills {
            role: "Mobile Engineer",
            skills: &["Flutter", "React Native", "Kotlin", "Swift", "Firebase"],
        },
        RoleSkills {
            role: "DevOps Engineer",
            skills: &["AWS", "Kubernetes", "Docker", "Terraform", "CI/CD", "Prometheus"],
        },
        RoleSkills {
            role: "QA Engineer",
            skills: &["Selenium", "Cypress", "Playwright", "API Testing", "JMeter"],
        },
        RoleSkills {
            role: "Data Engineer",
            skills: &["Python", "Apache Spark", "Airflow", "Snowflake", "Kafka", "SQL"],
        },
        RoleSkills {
            role: "AI/ML Engineer",
            skills: &["Python", "PyTorch", "TensorFlow", "LLMs", "MLOps", "NLP"],
        },
        RoleSkills {
            role: "Product Manager",
            skills: &["Roadmapping", "User Research", "Jira", "Analytics", "Stakeholder Management"],
        },
        RoleSkills {
            role: "UI/UX Designer",
            skills: &["Figma", "Prototyping", "Design Systems", "User Research", "Wireframing"],
        },
        RoleSkills {
            role: "Digital Marketing Specialist",
            skills: &["SEO", "Google Ads", "Content Strategy", "Social Media", "HubSpot"],
        },
        RoleSkills {
            role: "HR Generalist",
            skills: &["Recruitment", "Onboarding", "Payroll", "Employee Relations", "HRMS"],
        },
        RoleSkills {
            role: "Sales Executive",
            skills: &["Lead Generation", "CRM", "Negotiation", "Cold Calling", "Salesforce"],
        },
        RoleSkills {
            role: "Operations Manager",
            skills: &["Process Improvement", "Vendor Management", "Budgeting", "Reporting", "Excel"],
        },
    ]
}

fn standard_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: 1,
            name: "Aarav Mehta",
            role: "Frontend Engineer",
            experience: 4,
            skills: &["React", "TypeScript", "Next.js", "Tailwind CSS"],
            monthly_cost: 9_500_000,
            availability: Availability::Immediate,
            ready_to_relocate: true,
            project: "Rebuilt a fintech onboarding funnel in Next.js, lifting completion by 18%.",
        },
        Candidate {
            id: 2,
            name: "Sneha Iyer",
            role: "Frontend Engineer",
            experience: 6,
            skills: &["React", "Redux", "Jest", "Design Systems"],
            monthly_cost: 13_000_000,
            availability: Availability::ThirtyDays,
            ready_to_relocate: false,
            project: "Led a shared component library adopted by four product squads.",
        },
        Candidate {
            id: 3,
            name: "Rohan Kulkarni",
            role: "Backend Engineer",
            experience: 5,
            skills: &["Java", "Spring Boot", "PostgreSQL", "Microservices"],
            monthly_cost: 14_000_000,
            availability: Availability::Immediate,
            ready_to_relocate: true,
            project: "Split a monolithic billing service into event-driven microservices.",
        },
        Candidate {
            id: 4,
            name: "Priya Nair",
            role: "Backend Engineer",
            experience: 3,
            skills: &["Node.js", "REST APIs", "PostgreSQL", "Redis"],
            monthly_cost: 9_000_000,
            availability: Availability::FifteenDays,
            ready_to_relocate: false,
            project: "Built a rate-limited public API serving two million requests a day.",
        },
        Candidate {
            id: 5,
            name: "Vikram Singh",
            role: "Backend Engineer",
            experience: 8,
            skills: &["Java", "Kafka", "Microservices", "AWS"],
            monthly_cost: 21_000_000,
            availability: Availability::ThirtyDays,
            ready_to_relocate: true,
            project: "Designed the order-matching backend for a commodities exchange.",
        },
        Candidate {
            id: 6,
            name: "Ananya Rao",
            role: "Full Stack Engineer",
            experience: 4,
            skills: &["React", "Node.js", "MongoDB", "GraphQL"],
            monthly_cost: 11_000_000,
            availability: Availability::Immediate,
            ready_to_relocate: false,
            project: "Shipped a B2B procurement portal end to end in five months.",
        },
        Candidate {
            id: 7,
            name: "Karthik Reddy",
            role: "Full Stack Engineer",
            experience: 7,
            skills: &["TypeScript", "Node.js", "AWS", "PostgreSQL"],
            monthly_cost: 16_500_000,
            availability: Availability::FifteenDays,
            ready_to_relocate: true,
            project: "Migrated a logistics dashboard to serverless, halving hosting costs.",
        },
        Candidate {
            id: 8,
            name: "Meera Joshi",
            role: "Mobile Engineer",
            experience: 5,
            skills: &["Flutter", "Firebase", "Kotlin"],
            monthly_cost: 12_000_000,
            availability: Availability::Immediate,
            ready_to_relocate: true,
            project: "Built a cross-platform telehealth app with offline appointment sync.",
        },
        Candidate {
            id: 9,
            name: "Arjun Das",
            role: "Mobile Engineer",
            experience: 3,
            skills: &["React Native", "Swift", "Firebase"],
            monthly_cost: 8_500_000,
            availability: Availability::ThirtyDays,
            ready_to_relocate: false,
            project: "Owned the iOS release train for a grocery delivery app.",
        },
        Candidate {
            id: 10,
            name: "Siddharth Menon",
            role: "DevOps Engineer",
            experience: 6,
            skills: &["AWS", "Kubernetes", "Terraform", "CI/CD"],
            monthly_cost: 15_000_000,
            availability: Availability::FifteenDays,
            ready_to_relocate: true,
            project: "Codified a multi-region Kubernetes platform with Terraform modules.",
        },
        Candidate {
            id: 11,
            name: "Divya Pillai",
            role: "DevOps Engineer",
            experience: 4,
            skills: &["Docker", "CI/CD", "Prometheus", "GCP"],
            monthly_cost: 10_500_000,
            availability: Availability::Immediate,
            ready_to_relocate: false,
            project: "Cut deployment lead time from days to minutes with GitOps pipelines.",
        },
        Candidate {
            id: 12,
            name: "Nikhil Bansal",
            role: "QA Engineer",
            experience: 4,
            skills: &["Cypress", "Playwright", "API Testing"],
            monthly_cost: 7_500_000,
            availability: Availability::Immediate,
            ready_to_relocate: true,
            project: "Automated 900 regression cases for an insurance claims platform.",
        },
        Candidate {
            id: 13,
            name: "Pooja Shah",
            role: "QA Engineer",
            experience: 2,
            skills: &["Selenium", "JMeter", "Postman"],
            monthly_cost: 5_500_000,
            availability: Availability::FifteenDays,
            ready_to_relocate: false,
            project: "Introduced load testing ahead of a festive-season sale launch.",
        },
        Candidate {
            id: 14,
            name: "Rahul Verma",
            role: "Data Engineer",
            experience: 5,
            skills: &["Python", "Apache Spark", "Airflow", "Snowflake"],
            monthly_cost: 14_500_000,
            availability: Availability::ThirtyDays,
            ready_to_relocate: true,
            project: "Built a lakehouse ingesting 40 source systems for retail analytics.",
        },
        Candidate {
            id: 15,
            name: "Ishita Ghosh",
            role: "Data Engineer",
            experience: 3,
            skills: &["SQL", "Kafka", "dbt"],
            monthly_cost: 9_500_000,
            availability: Availability::Immediate,
            ready_to_relocate: false,
            project: "Streamed clickstream events into near-real-time marketing dashboards.",
        },
        Candidate {
            id: 16,
            name: "Aditya Kapoor",
            role: "AI/ML Engineer",
            experience: 5,
            skills: &["Python", "PyTorch", "LLMs", "MLOps"],
            monthly_cost: 19_000_000,
            availability: Availability::FifteenDays,
            ready_to_relocate: true,
            project: "Fine-tuned a support-ticket triage model serving 12 languages.",
        },
        Candidate {
            id: 17,
            name: "Neha Saxena",
            role: "AI/ML Engineer",
            experience: 7,
            skills: &["TensorFlow", "NLP", "Computer Vision"],
            monthly_cost: 22_000_000,
            availability: Availability::ThirtyDays,
            ready_to_relocate: false,
            project: "Deployed document OCR and extraction for loan underwriting.",
        },
        Candidate {
            id: 18,
            name: "Kavya Krishnan",
            role: "Product Manager",
            experience: 6,
            skills: &["Roadmapping", "User Research", "Analytics"],
            monthly_cost: 17_500_000,
            availability: Availability::ThirtyDays,
            ready_to_relocate: true,
            project: "Launched a subscription tier that reached 50k paying users in a year.",
        },
        Candidate {
            id: 19,
            name: "Manish Tiwari",
            role: "Product Manager",
            experience: 4,
            skills: &["Jira", "Stakeholder Management", "A/B Testing"],
            monthly_cost: 12_500_000,
            availability: Availability::Immediate,
            ready_to_relocate: false,
            project: "Ran discovery and delivery for an SME lending mobile app.",
        },
        Candidate {
            id: 20,
            name: "Tanvi Desai",
            role: "UI/UX Designer",
            experience: 5,
            skills: &["Figma", "Design Systems", "Prototyping"],
            monthly_cost: 10_000_000,
            availability: Availability::Immediate,
            ready_to_relocate: true,
            project: "Redesigned a hospital booking flow, reducing drop-offs by a third.",
        },
        Candidate {
            id: 21,
            name: "Farhan Qureshi",
            role: "UI/UX Designer",
            experience: 3,
            skills: &["Wireframing", "User Research", "Figma"],
            monthly_cost: 7_000_000,
            availability: Availability::FifteenDays,
            ready_to_relocate: false,
            project: "Created the design language for an edtech startup's mobile app.",
        },
        Candidate {
            id: 22,
            name: "Ritika Malhotra",
            role: "Digital Marketing Specialist",
            experience: 4,
            skills: &["SEO", "Google Ads", "HubSpot"],
            monthly_cost: 6_500_000,
            availability: Availability::Immediate,
            ready_to_relocate: false,
            project: "Grew organic traffic 3x for a D2C skincare brand.",
        },
        Candidate {
            id: 23,
            name: "Suresh Babu",
            role: "HR Generalist",
            experience: 6,
            skills: &["Recruitment", "Payroll", "HRMS"],
            monthly_cost: 6_000_000,
            availability: Availability::ThirtyDays,
            ready_to_relocate: true,
            project: "Set up onboarding and payroll operations for a 200-person GCC.",
        },
        Candidate {
            id: 24,
            name: "Anjali Chawla",
            role: "Sales Executive",
            experience: 3,
            skills: &["Lead Generation", "CRM", "Negotiation"],
            monthly_cost: 5_000_000,
            availability: Availability::Immediate,
            ready_to_relocate: true,
            project: "Closed the largest enterprise SaaS deal in her regional team.",
        },
        Candidate {
            id: 25,
            name: "Deepak Joshi",
            role: "Operations Manager",
            experience: 9,
            skills: &["Process Improvement", "Vendor Management", "Budgeting"],
            monthly_cost: 16_000_000,
            availability: Availability::FifteenDays,
            ready_to_relocate: false,
            project: "Consolidated vendor contracts across three delivery centres.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn role_catalogs_are_disjoint() {
        let catalog = TalentCatalog::standard();
        let tech: HashSet<_> = catalog.roles_for(RoleCategory::Tech).iter().collect();
        assert!(catalog
            .roles_for(RoleCategory::NonTech)
            .iter()
            .all(|role| !tech.contains(role)));
    }

    #[test]
    fn every_role_has_suggested_skills() {
        let catalog = TalentCatalog::standard();
        for category in RoleCategory::ordered() {
            for role in catalog.roles_for(category) {
                assert!(!catalog.skills_for(role).is_empty(), "{role} has no skills");
            }
        }
    }

    #[test]
    fn candidate_ids_are_unique_and_roles_are_catalogued() {
        let catalog = TalentCatalog::standard();
        let ids: HashSet<u32> = catalog.candidates().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), catalog.candidates().len());
        assert!(catalog
            .candidates()
            .iter()
            .all(|candidate| catalog.is_known_role(candidate.role)));
    }

    #[test]
    fn category_lookup_matches_exact_role() {
        let catalog = TalentCatalog::standard();
        assert_eq!(catalog.category_of("QA Engineer"), Some(RoleCategory::Tech));
        assert_eq!(
            catalog.category_of("HR Generalist"),
            Some(RoleCategory::NonTech)
        );
        assert_eq!(catalog.category_of("qa engineer"), None);
    }

    #[test]
    fn unknown_role_has_no_skills_or_candidates() {
        let catalog = TalentCatalog::standard();
        assert!(catalog.skills_for("Astronaut").is_empty());
        assert!(catalog.candidates_for("Astronaut").is_empty());
        assert!(catalog.candidates_for("").is_empty());
    }
}
