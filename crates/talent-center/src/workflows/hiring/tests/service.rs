use std::sync::Arc;

use super::common::*;
use crate::workflows::hiring::domain::{FlowState, FLOW_STORAGE_KEY};
use crate::workflows::hiring::steps::{CompletionView, FlowStep, StepError};
use crate::workflows::hiring::{AccessDecision, HiringFlowError, HiringFlowService};
use crate::workflows::talent::{AvailabilityFilter, CandidateFilter, Availability};

#[test]
fn steps_accumulate_into_one_state() {
    let service = completed_service();
    let snapshot = service.snapshot().expect("snapshot");

    let state = snapshot.state;
    assert_eq!(state.company_name.as_deref(), Some("Acme Inc"));
    assert_eq!(state.role.as_deref(), Some("Backend Engineer"));
    assert_eq!(state.joining_timeline.as_deref(), Some("Immediate"));
    assert_eq!(state.headcount.as_deref(), Some("2"));
    assert!(state.generated_access_code.is_some());
    assert_eq!(snapshot.resume_at, FlowStep::Complete);
    assert!(snapshot.progress.is_none());
}

#[test]
fn each_step_reports_the_next_one() {
    let (service, _) = build_service();
    let outcome = service.submit_company(company_answers()).expect("company");
    assert_eq!(outcome.next, FlowStep::Role);
    assert!(outcome.persistence.is_persisted());

    let outcome = service.submit_role(backend_role()).expect("role");
    assert_eq!(outcome.next, FlowStep::Preferences);
    assert_eq!(
        service.snapshot().expect("snapshot").resume_at,
        FlowStep::Preferences
    );
}

#[test]
fn rejected_step_leaves_state_untouched() {
    let (service, storage) = build_service();
    let mut answers = company_answers();
    answers.email = "not-an-email".to_string();

    let err = service.submit_company(answers).expect_err("invalid email");
    assert!(matches!(
        err,
        HiringFlowError::Step(StepError::InvalidEmail(_))
    ));
    assert!(service.snapshot().expect("snapshot").state.is_empty());
    assert!(storage.raw(FLOW_STORAGE_KEY).is_none());
}

#[test]
fn budget_step_keeps_existing_code() {
    let service = completed_service();
    let first = service
        .snapshot()
        .expect("snapshot")
        .state
        .generated_access_code
        .expect("code issued");

    let outcome = service.submit_budget(budget()).expect("resubmit budget");
    assert_eq!(outcome.state.generated_access_code, Some(first));
    assert_eq!(outcome.next, FlowStep::Complete);
}

#[test]
fn reset_issues_a_fresh_flow() {
    let service = completed_service();
    assert!(service.reset().expect("reset").is_persisted());

    let snapshot = service.snapshot().expect("snapshot");
    assert_eq!(snapshot.state, FlowState::default());
    assert_eq!(snapshot.resume_at, FlowStep::Company);
    assert_eq!(
        service.completion().expect("completion"),
        CompletionView::Redirect {
            redirect_to: FlowStep::Budget
        }
    );
}

#[test]
fn persisted_answers_survive_reopening() {
    let (service, storage) = build_service();
    service.submit_company(company_answers()).expect("company");

    let reopened = HiringFlowService::open(Arc::new(storage));
    let state = reopened.snapshot().expect("snapshot").state;
    assert_eq!(state.email.as_deref(), Some("hiring@acme.test"));
}

#[test]
fn persistence_failure_still_applies_in_memory() {
    let service = HiringFlowService::open(Arc::new(ReadOnlyStorage));
    let outcome = service.submit_company(company_answers()).expect("company");

    assert!(!outcome.persistence.is_persisted());
    assert_eq!(outcome.state.company_name.as_deref(), Some("Acme Inc"));
    assert!(!service.reset().expect("reset").is_persisted());
    assert!(service.snapshot().expect("snapshot").state.is_empty());
}

#[test]
fn access_is_checked_against_issued_code() {
    let service = completed_service();
    let code = service
        .snapshot()
        .expect("snapshot")
        .state
        .generated_access_code
        .expect("code issued");

    let spaced = format!("  {} ", code.to_lowercase());
    assert!(service.verify_access(&spaced).expect("verify").is_verified());
    assert!(matches!(
        service.verify_access("GCC-00000").expect("verify"),
        AccessDecision::Rejected { .. }
    ));
}

#[test]
fn access_without_code_asks_to_finish_the_flow() {
    let (service, _) = build_service();
    assert!(matches!(
        service.verify_access("GCC-9X28A").expect("verify"),
        AccessDecision::NoCodeYet { .. }
    ));
}

#[test]
fn dashboard_uses_stored_role_and_filters() {
    let service = completed_service();
    let view = service
        .dashboard(CandidateFilter {
            ready_to_shift: Some(true),
            availability: AvailabilityFilter::Only(Availability::ThirtyDays),
        })
        .expect("dashboard");

    assert_eq!(view.role.as_deref(), Some("Backend Engineer"));
    assert_eq!(view.total_for_role, 3);
    let ids: Vec<u32> = view.candidates.iter().map(|card| card.candidate.id).collect();
    assert_eq!(ids, vec![5]);
    assert!(view.empty_state.is_none());
}

#[test]
fn toggles_show_up_on_dashboard_cards() {
    let service = completed_service();
    let toggled = service.toggle_shortlist(4).expect("known candidate");
    assert!(toggled.shortlisted);
    assert!(!toggled.interview_requested);

    let view = service.dashboard(CandidateFilter::default()).expect("dashboard");
    let card = view
        .candidates
        .iter()
        .find(|card| card.candidate.id == 4)
        .expect("candidate 4 listed");
    assert!(card.shortlisted);

    assert!(matches!(
        service.toggle_interview(999),
        Err(HiringFlowError::UnknownCandidate(999))
    ));
}
