#![forbid(unsafe_code)]
//! Wire contract for the Elmwood House website API.
//!
//! Every endpoint answers with the same envelope: `success`, a human-readable
//! `message`, optional `data`/`pagination`, and for content reads a `source`
//! tag naming which tier answered. Failures carry an error code and, for
//! validation, the full list of field-level violations.

mod envelope;
mod errors;
mod requests;
mod validate;

pub use envelope::{Envelope, Pagination, Source};
pub use errors::{ApiError, ApiErrorCode, FieldError};
pub use requests::{
    AdmissionCompleteRequest, AdmissionStepRequest, AppointmentRequest, ContactRequest,
    InquiryRequest, LeadListParams, LeadStatusPatch, VisitRequest,
};
pub use validate::{
    validate_appointment, validate_contact, validate_inquiry, validate_step_request,
    validate_visit, MAX_MESSAGE_LEN,
};

pub const CRATE_NAME: &str = "elmwood-api";
