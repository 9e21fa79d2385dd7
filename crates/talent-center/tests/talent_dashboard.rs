//! Catalog lookups and dashboard filtering through the public talent API.

use talent_center::workflows::hiring::RoleCategory;
use talent_center::workflows::talent::{
    filter_candidates, Availability, AvailabilityFilter, CandidateFilter, CandidateSelections,
    DashboardView, TalentCatalog,
};

#[test]
fn role_catalogs_are_disjoint() {
    let catalog = TalentCatalog::standard();
    let tech = catalog.roles_for(RoleCategory::Tech);
    let non_tech = catalog.roles_for(RoleCategory::NonTech);
    assert!(tech.iter().all(|role| !non_tech.contains(role)));
    for role in tech.iter().chain(non_tech) {
        assert!(
            !catalog.skills_for(role).is_empty(),
            "{role} should have suggested skills"
        );
    }
}

#[test]
fn candidate_lookup_is_exact_and_case_sensitive() {
    let catalog = TalentCatalog::standard();
    assert_eq!(catalog.candidates_for("Backend Engineer").len(), 3);
    assert!(catalog.candidates_for("backend engineer").is_empty());
    assert!(catalog.candidates_for("").is_empty());
    assert!(catalog.skills_for("Astronaut").is_empty());
}

#[test]
fn filters_compose_with_and() {
    let catalog = TalentCatalog::standard();
    let backend = catalog.candidates_for("Backend Engineer");

    let relocating = CandidateFilter {
        ready_to_shift: Some(true),
        availability: AvailabilityFilter::All,
    };
    let ids: Vec<u32> = filter_candidates(backend.iter().copied(), &relocating)
        .iter()
        .map(|candidate| candidate.id)
        .collect();
    assert_eq!(ids, vec![3, 5]);

    let relocating_now = CandidateFilter {
        availability: AvailabilityFilter::Only(Availability::Immediate),
        ..relocating
    };
    let ids: Vec<u32> = filter_candidates(backend.iter().copied(), &relocating_now)
        .iter()
        .map(|candidate| candidate.id)
        .collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn dashboard_reports_empty_state_for_unsatisfiable_filters() {
    let catalog = TalentCatalog::standard();
    let view = DashboardView::build(
        &catalog,
        Some("Backend Engineer"),
        CandidateFilter {
            ready_to_shift: Some(false),
            availability: AvailabilityFilter::Only(Availability::ThirtyDays),
        },
        &CandidateSelections::default(),
    );

    assert_eq!(view.total_for_role, 3);
    assert!(view.candidates.is_empty());
    let empty = view.empty_state.expect("guidance shown");
    assert_eq!(empty.title, "No candidates match the selected role and filters.");
}

#[test]
fn every_candidate_role_is_in_the_catalog() {
    let catalog = TalentCatalog::standard();
    for candidate in catalog.candidates() {
        assert!(
            catalog.is_known_role(candidate.role),
            "{} has unknown role {}",
            candidate.name,
            candidate.role
        );
    }
}
