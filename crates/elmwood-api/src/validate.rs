// SPDX-License-Identifier: Apache-2.0

//! Request validation. Every validator inspects the whole payload and returns
//! the full list of violations; an empty list means the request may proceed.
//! Nothing here touches storage, so a failed validation can never leave a
//! partial write behind.

use crate::{
    AdmissionStepRequest, AppointmentRequest, ContactRequest, FieldError, InquiryRequest,
    VisitRequest,
};

pub const MAX_MESSAGE_LEN: usize = 1000;

const INQUIRY_TYPES: [&str; 5] = ["general", "admission", "visit", "pricing", "other"];
const CONTACT_METHODS: [&str; 3] = ["phone", "email", "whatsapp"];

fn check_name(out: &mut Vec<FieldError>, name: &str) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        out.push(FieldError::new("name", "Name is required"));
    } else if trimmed.len() < 2 || trimmed.len() > 100 {
        out.push(FieldError::new(
            "name",
            "Name must be between 2 and 100 characters",
        ));
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.len() < 3 {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty() || tld.len() < 2 {
        return false;
    }
    email
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '-' | '_' | '+'))
}

fn check_email(out: &mut Vec<FieldError>, email: &str) {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        out.push(FieldError::new("email", "Email is required"));
    } else if !is_valid_email(trimmed) {
        out.push(FieldError::new(
            "email",
            "Please provide a valid email address",
        ));
    }
}

fn is_valid_phone(phone: &str) -> bool {
    let len = phone.chars().count();
    (10..=15).contains(&len)
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
}

fn check_phone(out: &mut Vec<FieldError>, phone: &str) {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        out.push(FieldError::new("phone", "Phone number is required"));
    } else if !is_valid_phone(trimmed) {
        out.push(FieldError::new(
            "phone",
            "Please provide a valid phone number",
        ));
    }
}

fn check_message(out: &mut Vec<FieldError>, message: Option<&str>) {
    if let Some(message) = message {
        if message.trim().len() > MAX_MESSAGE_LEN {
            out.push(FieldError::new(
                "message",
                "Message cannot exceed 1000 characters",
            ));
        }
    }
}

fn check_membership(
    out: &mut Vec<FieldError>,
    field: &str,
    value: Option<&str>,
    allowed: &[&str],
    label: &str,
) {
    if let Some(value) = value {
        if !allowed.contains(&value) {
            out.push(FieldError::new(field, format!("Invalid {label}")));
        }
    }
}

fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && value
            .char_indices()
            .all(|(i, c)| matches!(i, 4 | 7) || c.is_ascii_digit())
}

fn is_24h_time(value: &str) -> bool {
    let Some((h, m)) = value.split_once(':') else {
        return false;
    };
    let (Ok(h), Ok(m)) = (h.parse::<u8>(), m.parse::<u8>()) else {
        return false;
    };
    h < 24 && m < 60 && value.len() <= 5
}

#[must_use]
pub fn validate_inquiry(req: &InquiryRequest) -> Vec<FieldError> {
    let mut out = Vec::new();
    check_name(&mut out, &req.name);
    check_email(&mut out, &req.email);
    check_phone(&mut out, &req.phone);
    check_message(&mut out, req.message.as_deref());
    check_membership(
        &mut out,
        "inquiryType",
        req.inquiry_type.as_deref(),
        &INQUIRY_TYPES,
        "inquiry type",
    );
    check_membership(
        &mut out,
        "preferredContactMethod",
        req.preferred_contact_method.as_deref(),
        &CONTACT_METHODS,
        "contact method",
    );
    out
}

#[must_use]
pub fn validate_appointment(req: &AppointmentRequest) -> Vec<FieldError> {
    let mut out = Vec::new();
    check_name(&mut out, &req.name);
    check_email(&mut out, &req.email);
    check_phone(&mut out, &req.phone);
    check_message(&mut out, req.message.as_deref());
    check_membership(
        &mut out,
        "preferredContactMethod",
        req.preferred_contact_method.as_deref(),
        &CONTACT_METHODS,
        "contact method",
    );
    if let Some(date) = req.preferred_date.as_deref() {
        if !is_iso_date(date) {
            out.push(FieldError::new("preferredDate", "Invalid date format"));
        }
    }
    if let Some(time) = req.preferred_time.as_deref() {
        if !is_24h_time(time) {
            out.push(FieldError::new("preferredTime", "Invalid time format"));
        }
    }
    out
}

#[must_use]
pub fn validate_contact(req: &ContactRequest) -> Vec<FieldError> {
    let mut out = Vec::new();
    check_name(&mut out, &req.name);
    check_email(&mut out, &req.email);
    check_phone(&mut out, &req.phone);
    check_message(&mut out, req.message.as_deref());
    out
}

#[must_use]
pub fn validate_visit(req: &VisitRequest) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, value) in [
        ("name", &req.name),
        ("phone", &req.phone),
        ("service", &req.service),
        ("visitDate", &req.visit_date),
        ("visitTime", &req.visit_time),
    ] {
        if value.trim().is_empty() {
            out.push(FieldError::new(
                field,
                "All required fields must be provided",
            ));
        }
    }
    if out.is_empty() && !is_valid_phone(req.phone.trim()) {
        out.push(FieldError::new(
            "phone",
            "Please provide a valid phone number",
        ));
    }
    if let Some(email) = req.email.as_deref() {
        let trimmed = email.trim();
        if !trimmed.is_empty() && !is_valid_email(trimmed) {
            out.push(FieldError::new(
                "email",
                "Please provide a valid email address",
            ));
        }
    }
    out
}

#[must_use]
pub fn validate_step_request(req: &AdmissionStepRequest) -> Vec<FieldError> {
    let mut out = Vec::new();
    if !(1..=6).contains(&req.step) {
        out.push(FieldError::new("step", "Step must be between 1 and 6"));
    }
    if !req.data.is_object() {
        out.push(FieldError::new("data", "Step data must be an object"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> InquiryRequest {
        InquiryRequest {
            name: "Asha Rane".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98200 11223".to_string(),
            message: Some("Looking for assisted living for my father.".to_string()),
            inquiry_type: Some("general".to_string()),
            preferred_contact_method: Some("phone".to_string()),
        }
    }

    #[test]
    fn valid_inquiry_passes() {
        assert!(validate_inquiry(&inquiry()).is_empty());
    }

    #[test]
    fn missing_email_is_reported_by_field() {
        let req = InquiryRequest {
            email: String::new(),
            ..inquiry()
        };
        let errors = validate_inquiry(&req);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn all_violations_are_reported_together() {
        let req = InquiryRequest {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            phone: "123".to_string(),
            inquiry_type: Some("loan".to_string()),
            ..inquiry()
        };
        let errors = validate_inquiry(&req);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["name", "email", "phone", "inquiryType"]);
    }

    #[test]
    fn phone_accepts_punctuation_but_bounds_length() {
        let mut req = inquiry();
        req.phone = "(020) 4123-99".to_string();
        assert!(validate_inquiry(&req).is_empty());
        req.phone = "12345678901234567890".to_string();
        assert_eq!(validate_inquiry(&req).len(), 1);
        req.phone = "98x0041520".to_string();
        assert_eq!(validate_inquiry(&req).len(), 1);
    }

    #[test]
    fn message_over_the_ceiling_is_rejected() {
        let mut req = inquiry();
        req.message = Some("x".repeat(MAX_MESSAGE_LEN + 1));
        assert_eq!(validate_inquiry(&req)[0].field, "message");
    }

    #[test]
    fn appointment_checks_date_and_time_shape() {
        let req = AppointmentRequest {
            name: "Asha Rane".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98200 11223".to_string(),
            message: None,
            preferred_date: Some("07-08-2026".to_string()),
            preferred_time: Some("25:00".to_string()),
            service_interested: None,
            preferred_contact_method: None,
        };
        let fields: Vec<String> = validate_appointment(&req)
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, ["preferredDate", "preferredTime"]);

        let ok = AppointmentRequest {
            preferred_date: Some("2026-08-20".to_string()),
            preferred_time: Some("14:30".to_string()),
            ..req
        };
        assert!(validate_appointment(&ok).is_empty());
    }

    #[test]
    fn visit_requires_every_core_field() {
        let req = VisitRequest {
            name: String::new(),
            phone: String::new(),
            email: None,
            service: String::new(),
            visit_date: String::new(),
            visit_time: String::new(),
        };
        assert_eq!(validate_visit(&req).len(), 5);
    }

    #[test]
    fn step_request_bounds_step_and_requires_object_data() {
        let req = AdmissionStepRequest {
            application_id: None,
            step: 7,
            data: serde_json::json!([1, 2]),
        };
        assert_eq!(validate_step_request(&req).len(), 2);
        let ok = AdmissionStepRequest {
            application_id: None,
            step: 3,
            data: serde_json::json!({"city": "Pune"}),
        };
        assert!(validate_step_request(&ok).is_empty());
    }
}
