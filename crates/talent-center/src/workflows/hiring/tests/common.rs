use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::hiring::domain::{RoleCategory, WorkingHours};
use crate::workflows::hiring::storage::{InMemoryStateStorage, StateStorage, StorageError};
use crate::workflows::hiring::steps::{
    BudgetSubmission, CompanyAnswers, PreferencesSubmission, RoleSubmission,
};
use crate::workflows::hiring::{hiring_router, HiringFlowService};

pub(super) fn company_answers() -> CompanyAnswers {
    CompanyAnswers {
        company_name: "Acme Inc".to_string(),
        location: "Pune, India".to_string(),
        contact_person: "Jordan Lee".to_string(),
        email: "hiring@acme.test".to_string(),
    }
}

pub(super) fn backend_role() -> RoleSubmission {
    RoleSubmission {
        category: Some(RoleCategory::Tech),
        role: "Backend Engineer".to_string(),
        headcount: "2".to_string(),
        skills: vec!["Java".to_string(), "Kafka".to_string()],
        ..RoleSubmission::default()
    }
}

pub(super) fn us_hours() -> PreferencesSubmission {
    PreferencesSubmission {
        working_hours: WorkingHours::Us,
        ..PreferencesSubmission::default()
    }
}

pub(super) fn budget() -> BudgetSubmission {
    BudgetSubmission {
        budget_range: "₹1.5L per month".to_string(),
        notes: "Needs on-call experience".to_string(),
        ..BudgetSubmission::default()
    }
}

pub(super) fn build_service() -> (HiringFlowService<InMemoryStateStorage>, InMemoryStateStorage) {
    let storage = InMemoryStateStorage::default();
    let service = HiringFlowService::open(Arc::new(storage.clone()));
    (service, storage)
}

/// Runs every step so the flow holds an access code.
pub(super) fn completed_service() -> HiringFlowService<InMemoryStateStorage> {
    let (service, _) = build_service();
    service.submit_company(company_answers()).expect("company step");
    service.submit_role(backend_role()).expect("role step");
    service.submit_preferences(us_hours()).expect("preferences step");
    service.submit_budget(budget()).expect("budget step");
    service
}

pub(super) fn hiring_router_with_service(
    service: HiringFlowService<InMemoryStateStorage>,
) -> axum::Router {
    hiring_router(Arc::new(service))
}

pub(super) struct ReadOnlyStorage;

impl StateStorage for ReadOnlyStorage {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn save(&self, _key: &str, _payload: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read only".to_string()))
    }

    fn clear(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read only".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
