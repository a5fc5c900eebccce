// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    ContactForm,
    Appointment,
    Callback,
    Newsletter,
    Other,
}

impl LeadSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContactForm => "contact_form",
            Self::Appointment => "appointment",
            Self::Callback => "callback",
            Self::Newsletter => "newsletter",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "contact_form" => Some(Self::ContactForm),
            "appointment" => Some(Self::Appointment),
            "callback" => Some(Self::Callback),
            "newsletter" => Some(Self::Newsletter),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl Display for LeadSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lead lifecycle: new -> contacted -> qualified -> converted -> closed,
/// with spam as a terminal side exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Closed,
    Spam,
}

impl LeadStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Converted => "converted",
            Self::Closed => "closed",
            Self::Spam => "spam",
        }
    }

    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "new" => Some(Self::New),
            "contacted" => Some(Self::Contacted),
            "qualified" => Some(Self::Qualified),
            "converted" => Some(Self::Converted),
            "closed" => Some(Self::Closed),
            "spam" => Some(Self::Spam),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl LeadPriority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadNote {
    pub text: String,
    pub added_by: String,
    pub added_at: String,
}

/// A lead as persisted. `id` is the store rowid (or the in-memory counter)
/// rendered as text so both backends share one wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub source: LeadSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_interested: Option<String>,
    pub status: LeadStatus,
    pub priority: LeadPriority,
    #[serde(default)]
    pub notes: Vec<LeadNote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    pub created_at: String,
}

/// Fields the intake pipeline fills in before a store assigns identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: Option<String>,
    pub message: String,
    pub source: LeadSource,
    pub appointment_date: Option<String>,
    pub appointment_time: Option<String>,
    pub service_interested: Option<String>,
    pub priority: LeadPriority,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl Lead {
    #[must_use]
    pub fn from_new(new: NewLead, id: String, created_at: String) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            subject: new.subject,
            message: new.message,
            source: new.source,
            appointment_date: new.appointment_date,
            appointment_time: new.appointment_time,
            service_interested: new.service_interested,
            status: LeadStatus::New,
            priority: new.priority,
            notes: Vec::new(),
            ip_address: new.ip_address,
            user_agent: new.user_agent,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitorStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

/// A visit request captured from the quick popup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub service: String,
    pub visit_date: String,
    pub visit_time: String,
    pub status: VisitorStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisitor {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service: String,
    pub visit_date: String,
    pub visit_time: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl Visitor {
    #[must_use]
    pub fn from_new(new: NewVisitor, id: String, created_at: String) -> Self {
        Self {
            id,
            name: new.name,
            phone: new.phone,
            email: new.email,
            service: new.service,
            visit_date: new.visit_date,
            visit_time: new.visit_time,
            status: VisitorStatus::Pending,
            ip_address: new.ip_address,
            user_agent: new.user_agent,
            created_at,
        }
    }
}
