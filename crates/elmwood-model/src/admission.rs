// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Application ids are minted as `EH` + the last 8 digits of the unix-millis
/// clock, a format the website's frontend already parses and displays.
pub const APPLICATION_ID_PREFIX: &str = "EH";

#[must_use]
pub fn mint_application_id(unix_millis: u128) -> String {
    format!("{APPLICATION_ID_PREFIX}{:08}", unix_millis % 100_000_000)
}

#[must_use]
pub fn step_key(step: u8) -> String {
    format!("step{step}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionStatus {
    InProgress,
    Completed,
    UnderReview,
    Approved,
    Rejected,
    OnHold,
}

impl AdmissionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::UnderReview => "under_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::OnHold => "on_hold",
        }
    }
}

/// A multi-step admission application. Steps accumulate under "step1".."step6"
/// and may arrive out of order; a resubmitted step replaces only its own blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionApplication {
    pub application_id: String,
    pub current_step: u8,
    pub status: AdmissionStatus,
    pub steps: BTreeMap<String, Value>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl AdmissionApplication {
    #[must_use]
    pub fn started(application_id: String, step: u8, data: Value, now: String) -> Self {
        let mut steps = BTreeMap::new();
        steps.insert(step_key(step), data);
        Self {
            application_id,
            current_step: step,
            status: AdmissionStatus::InProgress,
            steps,
            created_at: now.clone(),
            updated_at: now,
            completed_at: None,
            ip_address: None,
            user_agent: None,
        }
    }

    /// Last write wins for the step's blob; other steps are untouched.
    pub fn apply_step(&mut self, step: u8, data: Value, now: String) {
        self.steps.insert(step_key(step), data);
        self.current_step = step;
        self.updated_at = now;
    }

    pub fn complete(&mut self, now: String) {
        self.status = AdmissionStatus::Completed;
        self.completed_at = Some(now.clone());
        self.updated_at = now;
    }

    /// Contact identity for the lead synthesized on completion: applicant
    /// fields from step 1, with the step-6 guardian as fallback for blanks.
    #[must_use]
    pub fn contact_summary(&self) -> AdmissionContact {
        let applicant = self.steps.get(&step_key(1));
        let guardian = self.steps.get(&step_key(6));

        let first = field(applicant, "firstName");
        let last = field(applicant, "lastName");
        let name = format!("{first} {last}").trim().to_string();

        let email = non_empty(field(applicant, "email"))
            .or_else(|| non_empty(field(guardian, "guardianEmail")))
            .unwrap_or_else(|| "no-email@example.com".to_string());
        let phone = non_empty(field(applicant, "phone"))
            .or_else(|| non_empty(field(guardian, "guardianPhone")))
            .unwrap_or_else(|| "N/A".to_string());

        AdmissionContact {
            name: if name.is_empty() {
                "Unknown".to_string()
            } else {
                name
            },
            email,
            phone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

fn field(blob: Option<&Value>, key: &str) -> String {
    blob.and_then(|v| v.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn application_id_keeps_the_prefixed_eight_digit_format() {
        assert_eq!(mint_application_id(1_754_500_012_345), "EH00012345");
        let id = mint_application_id(1_754_512_345_678);
        assert_eq!(id.len(), 10);
        assert!(id.starts_with(APPLICATION_ID_PREFIX));
        assert!(id[2..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn steps_accumulate_and_resubmission_replaces_only_its_own() {
        let mut app = AdmissionApplication::started(
            "EH00000001".to_string(),
            1,
            json!({"firstName": "Leela"}),
            "t0".to_string(),
        );
        app.apply_step(2, json!({"city": "Pune"}), "t1".to_string());
        assert_eq!(app.current_step, 2);
        assert_eq!(app.steps.len(), 2);

        app.apply_step(1, json!({"firstName": "Leela", "lastName": "Naik"}), "t2".to_string());
        assert_eq!(app.current_step, 1);
        assert_eq!(
            app.steps.get("step1").and_then(|v| v.get("lastName")),
            Some(&json!("Naik"))
        );
        assert_eq!(app.steps.get("step2"), Some(&json!({"city": "Pune"})));
    }

    #[test]
    fn contact_summary_prefers_applicant_and_falls_back_to_guardian() {
        let mut app = AdmissionApplication::started(
            "EH00000002".to_string(),
            1,
            json!({"firstName": "Madhav", "lastName": "Joshi", "email": "", "phone": "  "}),
            "t0".to_string(),
        );
        app.apply_step(
            6,
            json!({"guardianEmail": "kin@example.com", "guardianPhone": "+91 90000 00000"}),
            "t1".to_string(),
        );
        let contact = app.contact_summary();
        assert_eq!(contact.name, "Madhav Joshi");
        assert_eq!(contact.email, "kin@example.com");
        assert_eq!(contact.phone, "+91 90000 00000");
    }

    #[test]
    fn contact_summary_defaults_when_both_sources_are_blank() {
        let app = AdmissionApplication::started(
            "EH00000003".to_string(),
            2,
            json!({"city": "Pune"}),
            "t0".to_string(),
        );
        let contact = app.contact_summary();
        assert_eq!(contact.name, "Unknown");
        assert_eq!(contact.email, "no-email@example.com");
        assert_eq!(contact.phone, "N/A");
    }
}
