use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::workflows::talent::CandidateFilter;

use super::domain::RoleCategory;
use super::service::{HiringFlowError, HiringFlowService};
use super::steps::{
    BudgetSubmission, CompanyAnswers, CompletionView, PreferencesSubmission, RoleSubmission,
};
use super::storage::StateStorage;

#[derive(Debug, Deserialize)]
pub(crate) struct AccessRequest {
    #[serde(default)]
    pub(crate) code: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RolesQuery {
    pub(crate) category: RoleCategory,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SkillsQuery {
    pub(crate) role: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RolesView {
    category: RoleCategory,
    label: &'static str,
    roles: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub(crate) struct SkillsView {
    role: String,
    skills: &'static [&'static str],
}

/// Router builder exposing the hiring flow, access gate, catalog, and dashboard.
///
/// Handlers call the service inline, so step submissions do their small synchronous file
/// write on the request task.
pub fn hiring_router<S>(service: Arc<HiringFlowService<S>>) -> Router
where
    S: StateStorage + 'static,
{
    Router::new()
        .route(
            "/api/v1/flow",
            get(flow_handler::<S>).delete(reset_handler::<S>),
        )
        .route("/api/v1/flow/company", post(company_handler::<S>))
        .route("/api/v1/flow/role", post(role_handler::<S>))
        .route("/api/v1/flow/preferences", post(preferences_handler::<S>))
        .route("/api/v1/flow/budget", post(budget_handler::<S>))
        .route("/api/v1/flow/completion", get(completion_handler::<S>))
        .route("/api/v1/access", post(access_handler::<S>))
        .route("/api/v1/catalog/roles", get(roles_handler::<S>))
        .route("/api/v1/catalog/skills", get(skills_handler::<S>))
        .route("/api/v1/dashboard", get(dashboard_handler::<S>))
        .route(
            "/api/v1/dashboard/candidates/:candidate_id/shortlist",
            post(shortlist_handler::<S>),
        )
        .route(
            "/api/v1/dashboard/candidates/:candidate_id/interview",
            post(interview_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn flow_handler<S>(State(service): State<Arc<HiringFlowService<S>>>) -> Response
where
    S: StateStorage + 'static,
{
    respond(service.snapshot(), StatusCode::OK)
}

pub(crate) async fn reset_handler<S>(State(service): State<Arc<HiringFlowService<S>>>) -> Response
where
    S: StateStorage + 'static,
{
    respond(service.reset(), StatusCode::OK)
}

pub(crate) async fn company_handler<S>(
    State(service): State<Arc<HiringFlowService<S>>>,
    axum::Json(answers): axum::Json<CompanyAnswers>,
) -> Response
where
    S: StateStorage + 'static,
{
    respond(service.submit_company(answers), StatusCode::OK)
}

pub(crate) async fn role_handler<S>(
    State(service): State<Arc<HiringFlowService<S>>>,
    axum::Json(submission): axum::Json<RoleSubmission>,
) -> Response
where
    S: StateStorage + 'static,
{
    respond(service.submit_role(submission), StatusCode::OK)
}

pub(crate) async fn preferences_handler<S>(
    State(service): State<Arc<HiringFlowService<S>>>,
    axum::Json(submission): axum::Json<PreferencesSubmission>,
) -> Response
where
    S: StateStorage + 'static,
{
    respond(service.submit_preferences(submission), StatusCode::OK)
}

pub(crate) async fn budget_handler<S>(
    State(service): State<Arc<HiringFlowService<S>>>,
    axum::Json(submission): axum::Json<BudgetSubmission>,
) -> Response
where
    S: StateStorage + 'static,
{
    respond(service.submit_budget(submission), StatusCode::OK)
}

pub(crate) async fn completion_handler<S>(
    State(service): State<Arc<HiringFlowService<S>>>,
) -> Response
where
    S: StateStorage + 'static,
{
    match service.completion() {
        Ok(view @ CompletionView::Ready { .. }) => {
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Ok(view @ CompletionView::Redirect { .. }) => {
            (StatusCode::CONFLICT, axum::Json(view)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn access_handler<S>(
    State(service): State<Arc<HiringFlowService<S>>>,
    axum::Json(request): axum::Json<AccessRequest>,
) -> Response
where
    S: StateStorage + 'static,
{
    respond(service.verify_access(&request.code), StatusCode::OK)
}

pub(crate) async fn roles_handler<S>(
    State(service): State<Arc<HiringFlowService<S>>>,
    Query(query): Query<RolesQuery>,
) -> Response
where
    S: StateStorage + 'static,
{
    let view = RolesView {
        category: query.category,
        label: query.category.label(),
        roles: service.catalog().roles_for(query.category),
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn skills_handler<S>(
    State(service): State<Arc<HiringFlowService<S>>>,
    Query(query): Query<SkillsQuery>,
) -> Response
where
    S: StateStorage + 'static,
{
    let skills = service.catalog().skills_for(&query.role);
    let view = SkillsView {
        role: query.role,
        skills,
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn dashboard_handler<S>(
    State(service): State<Arc<HiringFlowService<S>>>,
    Query(filter): Query<CandidateFilter>,
) -> Response
where
    S: StateStorage + 'static,
{
    respond(service.dashboard(filter), StatusCode::OK)
}

pub(crate) async fn shortlist_handler<S>(
    State(service): State<Arc<HiringFlowService<S>>>,
    Path(candidate_id): Path<u32>,
) -> Response
where
    S: StateStorage + 'static,
{
    respond(service.toggle_shortlist(candidate_id), StatusCode::OK)
}

pub(crate) async fn interview_handler<S>(
    State(service): State<Arc<HiringFlowService<S>>>,
    Path(candidate_id): Path<u32>,
) -> Response
where
    S: StateStorage + 'static,
{
    respond(service.toggle_interview(candidate_id), StatusCode::OK)
}

fn respond<T: Serialize>(result: Result<T, HiringFlowError>, status: StatusCode) -> Response {
    match result {
        Ok(body) => (status, axum::Json(body)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: HiringFlowError) -> Response {
    let status = match &err {
        HiringFlowError::Step(_) => StatusCode::UNPROCESSABLE_ENTITY,
        HiringFlowError::UnknownCandidate(_) => StatusCode::NOT_FOUND,
        HiringFlowError::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
