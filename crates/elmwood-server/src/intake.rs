// SPDX-License-Identifier: Apache-2.0

//! Intake pipeline: turn validated submissions into store records, then hand
//! the notification work to a detached task. Persistence is awaited before
//! the handler responds; notifications never are.

use crate::mail::Notification;
use crate::store::{Store, StoreError};
use crate::timefmt::{now_rfc3339, unix_millis};
use crate::AppState;
use elmwood_api::{
    AdmissionStepRequest, ApiError, ApiErrorCode, AppointmentRequest, ContactRequest,
    InquiryRequest, VisitRequest,
};
use elmwood_model::{
    mint_application_id, AdmissionApplication, Lead, LeadPriority, LeadSource, NewLead,
    NewVisitor, Visitor,
};
use tracing::{debug, error, warn};

#[derive(Debug, Clone, Default)]
pub(crate) struct ClientMeta {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

/// Store write failures have no fallback target, so they surface as the
/// generic failure; the detail stays in the log (and, in dev mode, the body).
pub(crate) fn write_failure(err: &StoreError, dev_mode: bool) -> ApiError {
    error!("store write failed: {err}");
    if dev_mode {
        ApiError::new(ApiErrorCode::Internal, format!("{GENERIC_FAILURE} ({err})"))
    } else {
        ApiError::new(ApiErrorCode::Internal, GENERIC_FAILURE)
    }
}

pub(crate) fn inquiry_lead(req: InquiryRequest, meta: ClientMeta) -> NewLead {
    NewLead {
        name: req.name.trim().to_string(),
        email: req.email.trim().to_ascii_lowercase(),
        phone: req.phone.trim().to_string(),
        subject: None,
        message: req.message.unwrap_or_default(),
        source: LeadSource::ContactForm,
        appointment_date: None,
        appointment_time: None,
        service_interested: Some(
            req.inquiry_type
                .unwrap_or_else(|| "general".to_string()),
        ),
        priority: LeadPriority::Medium,
        ip_address: meta.ip,
        user_agent: meta.user_agent,
    }
}

pub(crate) fn appointment_lead(req: AppointmentRequest, meta: ClientMeta) -> NewLead {
    NewLead {
        name: req.name.trim().to_string(),
        email: req.email.trim().to_ascii_lowercase(),
        phone: req.phone.trim().to_string(),
        subject: None,
        message: req.message.unwrap_or_default(),
        source: LeadSource::Appointment,
        appointment_date: req.preferred_date,
        appointment_time: req.preferred_time,
        service_interested: req.service_interested,
        priority: LeadPriority::High,
        ip_address: meta.ip,
        user_agent: meta.user_agent,
    }
}

pub(crate) fn contact_lead(req: ContactRequest, meta: ClientMeta) -> NewLead {
    NewLead {
        name: req.name.trim().to_string(),
        email: req.email.trim().to_ascii_lowercase(),
        phone: req.phone.trim().to_string(),
        subject: Some(
            req.subject
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "General Inquiry".to_string()),
        ),
        message: req.message.unwrap_or_default(),
        source: LeadSource::ContactForm,
        appointment_date: None,
        appointment_time: None,
        service_interested: None,
        priority: LeadPriority::Medium,
        ip_address: meta.ip,
        user_agent: meta.user_agent,
    }
}

pub(crate) fn visitor_from(req: VisitRequest, meta: ClientMeta) -> NewVisitor {
    NewVisitor {
        name: req.name.trim().to_string(),
        phone: req.phone.trim().to_string(),
        email: req
            .email
            .map(|e| e.trim().to_ascii_lowercase())
            .filter(|e| !e.is_empty()),
        service: req.service.trim().to_string(),
        visit_date: req.visit_date.trim().to_string(),
        visit_time: req.visit_time.trim().to_string(),
        ip_address: meta.ip,
        user_agent: meta.user_agent,
    }
}

pub(crate) fn notification_for_lead(lead: &Lead) -> Notification {
    Notification {
        name: lead.name.clone(),
        email: lead.email.clone(),
        phone: lead.phone.clone(),
        subject: lead.subject.clone(),
        service_interested: lead.service_interested.clone(),
        appointment_date: lead.appointment_date.clone(),
        appointment_time: lead.appointment_time.clone(),
        message: lead.message.clone(),
    }
}

pub(crate) fn notification_for_visitor(visitor: &Visitor) -> Notification {
    Notification {
        name: visitor.name.clone(),
        email: visitor
            .email
            .clone()
            .unwrap_or_else(|| "N/A".to_string()),
        phone: visitor.phone.clone(),
        subject: None,
        service_interested: Some(visitor.service.clone()),
        appointment_date: Some(visitor.visit_date.clone()),
        appointment_time: Some(visitor.visit_time.clone()),
        message: "Visit request from website popup".to_string(),
    }
}

/// Fire-and-forget: dispatched after the response-determining write, with no
/// failure visibility to the caller.
pub(crate) fn dispatch_notifications(
    state: &AppState,
    kind: &'static str,
    notification: Notification,
    auto_reply_to: Option<(String, String)>,
) {
    let Some(mailer) = state.mailer.clone() else {
        debug!("mail not configured - skipping notifications");
        return;
    };
    tokio::spawn(async move {
        if let Err(err) = mailer.notify_admin(&notification, kind).await {
            warn!("admin notification failed: {err}");
        }
        if let Some((name, email)) = auto_reply_to {
            if let Err(err) = mailer.auto_reply(&name, &email).await {
                warn!("auto-reply failed: {err}");
            }
        }
    });
}

async fn mint_unused_application_id(store: &dyn Store) -> Result<String, StoreError> {
    // The millis-suffix format survives for external compatibility; bumping
    // the clock value on collision closes the same-millisecond window.
    let base = unix_millis();
    for attempt in 0..64 {
        let id = mint_application_id(base + attempt);
        if store.find_admission(&id).await?.is_none() {
            return Ok(id);
        }
    }
    Err(StoreError(
        "could not mint an unused application id".to_string(),
    ))
}

pub(crate) async fn submit_step(
    state: &AppState,
    req: AdmissionStepRequest,
    meta: ClientMeta,
) -> Result<AdmissionApplication, ApiError> {
    let store = state.store.as_ref();
    let now = now_rfc3339();
    if let Some(application_id) = req.application_id {
        let found = store
            .find_admission(&application_id)
            .await
            .map_err(|e| write_failure(&e, state.config.dev_mode))?;
        let mut application =
            found.ok_or_else(|| ApiError::not_found("Application not found"))?;
        application.apply_step(req.step, req.data, now);
        store
            .update_admission(&application)
            .await
            .map_err(|e| write_failure(&e, state.config.dev_mode))?;
        Ok(application)
    } else {
        let application_id = mint_unused_application_id(store)
            .await
            .map_err(|e| write_failure(&e, state.config.dev_mode))?;
        let mut application =
            AdmissionApplication::started(application_id, req.step, req.data, now);
        application.ip_address = meta.ip;
        application.user_agent = meta.user_agent;
        store
            .insert_admission(&application)
            .await
            .map_err(|e| write_failure(&e, state.config.dev_mode))?;
        Ok(application)
    }
}

pub(crate) async fn complete_application(
    state: &AppState,
    application_id: &str,
) -> Result<AdmissionApplication, ApiError> {
    let store = state.store.as_ref();
    let found = store
        .find_admission(application_id)
        .await
        .map_err(|e| write_failure(&e, state.config.dev_mode))?;
    let mut application = found.ok_or_else(|| ApiError::not_found("Application not found"))?;
    application.complete(now_rfc3339());
    store
        .update_admission(&application)
        .await
        .map_err(|e| write_failure(&e, state.config.dev_mode))?;

    let contact = application.contact_summary();
    let new_lead = NewLead {
        name: contact.name,
        email: contact.email,
        phone: contact.phone,
        subject: None,
        message: format!(
            "Admission application submitted. Application ID: {application_id}"
        ),
        source: LeadSource::Other,
        appointment_date: None,
        appointment_time: None,
        service_interested: None,
        priority: LeadPriority::High,
        ip_address: None,
        user_agent: None,
    };
    match store.create_lead(new_lead).await {
        Ok(lead) => {
            dispatch_notifications(
                state,
                "Admission Application",
                notification_for_lead(&lead),
                None,
            );
        }
        // The application is already completed; a failed lead synthesis is
        // logged rather than unwinding the state change.
        Err(err) => warn!("derived lead write failed: {err}"),
    }
    Ok(application)
}

pub(crate) async fn get_application(
    state: &AppState,
    application_id: &str,
) -> Result<AdmissionApplication, ApiError> {
    state
        .store
        .find_admission(application_id)
        .await
        .map_err(|e| write_failure(&e, state.config.dev_mode))?
        .ok_or_else(|| ApiError::not_found("Application not found"))
}
