//! End-to-end scenarios for the hiring request flow, driven through the public service
//! facade and backed by real files so reloads behave like a fresh process.

mod common {
    use std::path::Path;
    use std::sync::Arc;

    use talent_center::workflows::hiring::{
        CompanyAnswers, FileStateStorage, HiringFlowService, RoleCategory, RoleSubmission,
    };

    pub(super) fn open_service(dir: &Path) -> HiringFlowService<FileStateStorage> {
        HiringFlowService::open(Arc::new(FileStateStorage::new(dir)))
    }

    pub(super) fn company() -> CompanyAnswers {
        CompanyAnswers {
            company_name: "Northwind Labs".to_string(),
            location: "Austin, USA".to_string(),
            contact_person: "Sam Rivera".to_string(),
            email: "sam@northwind.test".to_string(),
        }
    }

    pub(super) fn role(role: &str, skills: &[&str]) -> RoleSubmission {
        RoleSubmission {
            category: Some(RoleCategory::Tech),
            role: role.to_string(),
            skills: skills.iter().map(|skill| skill.to_string()).collect(),
            ..RoleSubmission::default()
        }
    }
}

use std::fs;
use std::sync::Arc;

use common::*;
use talent_center::workflows::hiring::{
    BudgetSubmission, CompletionView, FileStateStorage, FlowState, FlowStep, FlowStore,
    InMemoryStateStorage, InterviewMode, JoiningChoice, LoadOutcome, PreferencesSubmission,
    FLOW_STORAGE_KEY,
};

#[test]
fn flow_survives_process_restart() {
    let dir = tempfile::tempdir().expect("temp dir");
    {
        let service = open_service(dir.path());
        service.submit_company(company()).expect("company step");
        service
            .submit_role(role("DevOps Engineer", &["Kubernetes", "Terraform"]))
            .expect("role step");
    }

    let service = open_service(dir.path());
    let snapshot = service.snapshot().expect("snapshot");
    assert_eq!(snapshot.load, LoadOutcome::Restored);
    assert_eq!(snapshot.resume_at, FlowStep::Preferences);
    let skills = snapshot.state.skills.expect("skills persisted");
    assert_eq!(skills.labels(), ["Kubernetes", "Terraform"]);
}

#[test]
fn persisted_file_uses_snake_case_keys_and_omits_absent_fields() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = open_service(dir.path());
    service.submit_company(company()).expect("company step");

    let path = dir.path().join(format!("{FLOW_STORAGE_KEY}.json"));
    let raw = fs::read_to_string(path).expect("snapshot written");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let object = json.as_object().expect("json object");

    assert_eq!(object["company_name"], "Northwind Labs");
    assert_eq!(object["contact_person"], "Sam Rivera");
    assert!(!object.contains_key("role"));
    assert!(!object.contains_key("generated_access_code"));
}

#[test]
fn later_submission_overrides_only_the_fields_it_sets() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = open_service(dir.path());
    service.submit_company(company()).expect("company step");
    service
        .submit_role(role("Backend Engineer", &["Go"]))
        .expect("role step");

    // Same role, no skills: the previous selection stays.
    let outcome = service
        .submit_role(role("Backend Engineer", &[]))
        .expect("role step again");
    assert_eq!(
        outcome.state.skills.map(Vec::from),
        Some(vec!["Go".to_string()])
    );
    assert_eq!(outcome.state.company_name.as_deref(), Some("Northwind Labs"));
}

#[test]
fn switching_role_drops_skills_picked_for_the_old_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = open_service(dir.path());
    service
        .submit_role(role("Backend Engineer", &["Go"]))
        .expect("role step");

    let outcome = service
        .submit_role(role("QA Engineer", &[]))
        .expect("role step again");
    assert_eq!(outcome.state.role.as_deref(), Some("QA Engineer"));
    assert_eq!(outcome.state.skills.map(Vec::from), Some(Vec::<String>::new()));

    let reopened = open_service(dir.path());
    let skills = reopened.snapshot().expect("snapshot").state.skills;
    assert!(skills.map_or(true, |skills| skills.is_empty()));
}

#[test]
fn reset_then_reload_starts_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = open_service(dir.path());
    service.submit_company(company()).expect("company step");
    assert!(service.reset().expect("reset").is_persisted());

    let reopened = open_service(dir.path());
    let snapshot = reopened.snapshot().expect("snapshot");
    assert_eq!(snapshot.state, FlowState::default());
    assert_eq!(snapshot.load, LoadOutcome::Empty);
}

#[test]
fn corrupt_snapshot_is_discarded_on_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    let storage = FileStateStorage::new(dir.path());
    fs::write(storage.path_for(FLOW_STORAGE_KEY), "{ not json").expect("write garbage");

    let store = FlowStore::open(Arc::new(storage));
    assert!(store.state().is_empty());
    assert!(matches!(store.load_outcome(), LoadOutcome::Discarded { .. }));
}

#[test]
fn full_flow_issues_a_verifiable_code() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = open_service(dir.path());
    service.submit_company(company()).expect("company step");
    service
        .submit_role(role("Data Engineer", &["Python"]))
        .expect("role step");
    service
        .submit_preferences(PreferencesSubmission {
            interview_mode: InterviewMode::Audio,
            joining: JoiningChoice::Other,
            joining_custom: Some("after Diwali".to_string()),
            ..PreferencesSubmission::default()
        })
        .expect("preferences step");
    let outcome = service
        .submit_budget(BudgetSubmission::default())
        .expect("budget step");

    assert_eq!(outcome.state.joining_timeline.as_deref(), Some("after Diwali"));
    let code = outcome.state.generated_access_code.expect("code issued");

    let CompletionView::Ready { access_code, .. } = service.completion().expect("completion")
    else {
        panic!("completion should be ready after budget step");
    };
    assert_eq!(access_code, code);

    let reopened = open_service(dir.path());
    assert!(reopened
        .verify_access(&code.to_lowercase())
        .expect("verify")
        .is_verified());
}

#[test]
fn empty_patch_does_not_change_state() {
    let storage = Arc::new(InMemoryStateStorage::default());
    let mut store = FlowStore::open(storage.clone());
    store.update(FlowState {
        email: Some("a@b.test".to_string()),
        ..FlowState::default()
    });
    let before = store.read();

    let outcome = store.update(FlowState::default());
    assert!(outcome.persistence.is_persisted());
    assert_eq!(store.read(), before);
}
