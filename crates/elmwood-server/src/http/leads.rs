// SPDX-License-Identifier: Apache-2.0

//! Write-path handlers: lead forms, the visit popup, the multi-step
//! admission flow, and the admin listing/patch pair. Validation always runs
//! before any persistence attempt.

use crate::http::response::{created, failure, success};
use crate::intake::{
    self, dispatch_notifications, notification_for_lead, notification_for_visitor, write_failure,
    ClientMeta,
};
use crate::store::{LeadFilter, LeadPatch};
use crate::timefmt::now_rfc3339;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use elmwood_api::{
    validate_appointment, validate_contact, validate_inquiry, validate_step_request,
    validate_visit, AdmissionCompleteRequest, AdmissionStepRequest, ApiError, ApiErrorCode,
    AppointmentRequest, ContactRequest, Envelope, FieldError, InquiryRequest, LeadListParams,
    LeadStatusPatch, Pagination, VisitRequest,
};
use elmwood_model::{LeadNote, LeadPriority, LeadSource, LeadStatus};
use serde_json::json;

const DEFAULT_PAGE_SIZE: u64 = 20;
const MAX_PAGE_SIZE: u64 = 100;

fn client_meta(headers: &HeaderMap) -> ClientMeta {
    let ip = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    ClientMeta { ip, user_agent }
}

pub(crate) async fn submit_inquiry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<InquiryRequest>,
) -> Response {
    let violations = validate_inquiry(&req);
    if !violations.is_empty() {
        return failure(&ApiError::validation(violations));
    }
    let new = intake::inquiry_lead(req, client_meta(&headers));
    match state.store.create_lead(new).await {
        Ok(lead) => {
            dispatch_notifications(
                &state,
                "General",
                notification_for_lead(&lead),
                Some((lead.name.clone(), lead.email.clone())),
            );
            created(
                "Thank you for your inquiry! Our team will contact you shortly.",
                json!({"id": lead.id, "name": lead.name, "email": lead.email}),
            )
        }
        Err(err) => failure(&write_failure(&err, state.config.dev_mode)),
    }
}

pub(crate) async fn submit_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<AppointmentRequest>,
) -> Response {
    let violations = validate_appointment(&req);
    if !violations.is_empty() {
        return failure(&ApiError::validation(violations));
    }
    let new = intake::appointment_lead(req, client_meta(&headers));
    match state.store.create_lead(new).await {
        Ok(lead) => {
            dispatch_notifications(
                &state,
                "Appointment",
                notification_for_lead(&lead),
                Some((lead.name.clone(), lead.email.clone())),
            );
            created(
                "Thank you for your visit request! We will confirm your appointment shortly.",
                json!({
                    "id": lead.id,
                    "name": lead.name,
                    "preferredDate": lead.appointment_date,
                }),
            )
        }
        Err(err) => failure(&write_failure(&err, state.config.dev_mode)),
    }
}

pub(crate) async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ContactRequest>,
) -> Response {
    let violations = validate_contact(&req);
    if !violations.is_empty() {
        return failure(&ApiError::validation(violations));
    }
    let new = intake::contact_lead(req, client_meta(&headers));
    match state.store.create_lead(new).await {
        Ok(lead) => {
            dispatch_notifications(
                &state,
                "Contact Form",
                notification_for_lead(&lead),
                Some((lead.name.clone(), lead.email.clone())),
            );
            created(
                "Thank you for contacting us! We will get back to you soon.",
                json!({"id": lead.id, "name": lead.name}),
            )
        }
        Err(err) => failure(&write_failure(&err, state.config.dev_mode)),
    }
}

pub(crate) async fn submit_visit_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<VisitRequest>,
) -> Response {
    let violations = validate_visit(&req);
    if !violations.is_empty() {
        return failure(&ApiError::validation(violations));
    }
    let new = intake::visitor_from(req, client_meta(&headers));
    match state.store.create_visitor(new).await {
        Ok(visitor) => {
            dispatch_notifications(
                &state,
                "Visit Request",
                notification_for_visitor(&visitor),
                None,
            );
            created(
                "Thank you! Your visit request has been submitted. We will contact you \
                 shortly to confirm.",
                json!({
                    "id": visitor.id,
                    "name": visitor.name,
                    "visitDate": visitor.visit_date,
                }),
            )
        }
        Err(err) => failure(&write_failure(&err, state.config.dev_mode)),
    }
}

pub(crate) async fn submit_admission_step(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<AdmissionStepRequest>,
) -> Response {
    let violations = validate_step_request(&req);
    if !violations.is_empty() {
        return failure(&ApiError::validation(violations));
    }
    let step = req.step;
    match intake::submit_step(&state, req, client_meta(&headers)).await {
        Ok(application) => success(
            &format!("Step {step} saved successfully"),
            json!({
                "applicationId": application.application_id,
                "currentStep": application.current_step,
            }),
        ),
        Err(err) => failure(&err),
    }
}

pub(crate) async fn complete_admission(
    State(state): State<AppState>,
    Json(req): Json<AdmissionCompleteRequest>,
) -> Response {
    match intake::complete_application(&state, &req.application_id).await {
        Ok(application) => success(
            "Application submitted successfully!",
            json!({
                "applicationId": application.application_id,
                "status": application.status,
            }),
        ),
        Err(err) => failure(&err),
    }
}

pub(crate) async fn get_admission(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> Response {
    match intake::get_application(&state, &application_id).await {
        Ok(application) => success("Application retrieved successfully", json!(application)),
        Err(err) => failure(&err),
    }
}

fn parse_filter(params: &LeadListParams) -> Result<LeadFilter, ApiError> {
    let mut violations = Vec::new();
    let status = match params.status.as_deref() {
        Some(raw) => match LeadStatus::parse(raw) {
            Some(status) => Some(status),
            None => {
                violations.push(FieldError::new("status", "Invalid status"));
                None
            }
        },
        None => None,
    };
    let source = match params.source.as_deref() {
        Some(raw) => match LeadSource::parse(raw) {
            Some(source) => Some(source),
            None => {
                violations.push(FieldError::new("source", "Invalid source"));
                None
            }
        },
        None => None,
    };
    if violations.is_empty() {
        Ok(LeadFilter { status, source })
    } else {
        Err(ApiError::validation(violations))
    }
}

/// Admin listing. Unauthenticated, as inherited from the original deployment;
/// any access-control layer is a separate collaborator in front of this.
pub(crate) async fn list_leads(
    State(state): State<AppState>,
    Query(params): Query<LeadListParams>,
) -> Response {
    let filter = match parse_filter(&params) {
        Ok(filter) => filter,
        Err(err) => return failure(&err),
    };
    let page = params.page.unwrap_or(1).max(1);
    let limit = params
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    match state.store.list_leads(&filter, page, limit).await {
        Ok((leads, total)) => {
            let pagination = if state.store.durable() {
                Pagination::new(page, limit, total)
            } else {
                // The in-memory fallback serves everything as one page.
                Pagination {
                    page: 1,
                    limit: total,
                    total,
                    pages: 1,
                }
            };
            let envelope =
                Envelope::paginated("Leads retrieved successfully", json!(leads), pagination);
            (StatusCode::OK, Json(envelope)).into_response()
        }
        Err(err) => failure(&write_failure(&err, state.config.dev_mode)),
    }
}

pub(crate) async fn update_lead_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<LeadStatusPatch>,
) -> Response {
    if !state.store.durable() {
        return failure(&ApiError::new(
            ApiErrorCode::BackendUnavailable,
            "Database not connected",
        ));
    }
    let mut violations = Vec::new();
    let status = match patch.status.as_deref() {
        Some(raw) => match LeadStatus::parse(raw) {
            Some(status) => Some(status),
            None => {
                violations.push(FieldError::new("status", "Invalid status"));
                None
            }
        },
        None => None,
    };
    let priority = match patch.priority.as_deref() {
        Some(raw) => match LeadPriority::parse(raw) {
            Some(priority) => Some(priority),
            None => {
                violations.push(FieldError::new("priority", "Invalid priority"));
                None
            }
        },
        None => None,
    };
    if !violations.is_empty() {
        return failure(&ApiError::validation(violations));
    }
    let note = patch
        .notes
        .filter(|text| !text.trim().is_empty())
        .map(|text| LeadNote {
            text,
            added_by: "Admin".to_string(),
            added_at: now_rfc3339(),
        });
    let store_patch = LeadPatch {
        status,
        priority,
        note,
    };
    match state.store.update_lead(&id, store_patch).await {
        Ok(Some(lead)) => success("Lead updated successfully", json!(lead)),
        Ok(None) => failure(&ApiError::not_found("Lead not found")),
        Err(err) => failure(&write_failure(&err, state.config.dev_mode)),
    }
}
