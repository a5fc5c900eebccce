// SPDX-License-Identifier: Apache-2.0

//! Outbound mail over an HTTP relay. Notifications are best-effort side
//! effects: the intake handlers spawn them after the persistence result is
//! known and never await them, so a relay outage can slow nothing down and
//! fail nothing that already succeeded.

use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub endpoint: String,
    pub api_key: String,
    pub from: String,
    pub admin_to: Option<String>,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail relay rejected message: status {0}")]
    Rejected(u16),
    #[error("mail send failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// What the admin notification says about a submission. Optional fields are
/// omitted from the rendered message, matching what each form collects.
#[derive(Debug, Clone, Default)]
pub struct Notification {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: Option<String>,
    pub service_interested: Option<String>,
    pub appointment_date: Option<String>,
    pub appointment_time: Option<String>,
    pub message: String,
}

pub struct Mailer {
    client: reqwest::Client,
    cfg: MailConfig,
}

impl Mailer {
    #[must_use]
    pub fn from_config(cfg: Option<MailConfig>) -> Option<Self> {
        let cfg = cfg?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Some(Self { client, cfg })
    }

    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError> {
        let resp = self
            .client
            .post(&self.cfg.endpoint)
            .bearer_auth(&self.cfg.api_key)
            .json(&json!({
                "from": self.cfg.from,
                "to": to,
                "subject": subject,
                "html": html,
            }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(MailError::Rejected(resp.status().as_u16()));
        }
        Ok(())
    }

    pub async fn notify_admin(
        &self,
        notification: &Notification,
        kind: &str,
    ) -> Result<(), MailError> {
        let Some(admin_to) = self.cfg.admin_to.as_deref() else {
            debug!("admin email not configured - skipping notification");
            return Ok(());
        };
        let subject = format!("New {kind} Inquiry - Elmwood House");
        let html = render_admin_notification(notification, kind);
        self.send(admin_to, &subject, &html).await?;
        info!("admin notification sent");
        Ok(())
    }

    pub async fn auto_reply(&self, name: &str, email: &str) -> Result<(), MailError> {
        let html = render_auto_reply(name);
        self.send(email, "Thank you for contacting Elmwood House", &html)
            .await?;
        info!("auto-reply sent");
        Ok(())
    }
}

fn render_admin_notification(n: &Notification, kind: &str) -> String {
    let mut html = format!(
        "<h2>New {kind} Inquiry Received</h2>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Phone:</strong> {}</p>",
        n.name, n.email, n.phone
    );
    if let Some(subject) = &n.subject {
        html.push_str(&format!("<p><strong>Subject:</strong> {subject}</p>"));
    }
    if let Some(service) = &n.service_interested {
        html.push_str(&format!(
            "<p><strong>Service Interested:</strong> {service}</p>"
        ));
    }
    if let Some(date) = &n.appointment_date {
        html.push_str(&format!("<p><strong>Preferred Date:</strong> {date}</p>"));
    }
    if let Some(time) = &n.appointment_time {
        html.push_str(&format!("<p><strong>Preferred Time:</strong> {time}</p>"));
    }
    let message = if n.message.is_empty() {
        "No message provided"
    } else {
        &n.message
    };
    html.push_str(&format!("<p><strong>Message:</strong></p><p>{message}</p>"));
    html
}

fn render_auto_reply(name: &str) -> String {
    format!(
        "<h2>Dear {name},</h2>\
         <p>Thank you for reaching out to Elmwood House. We have received your \
         inquiry and our team will get back to you within 24 hours.</p>\
         <p>For immediate assistance, call us at <strong>+91 98600 41520</strong>.</p>\
         <br><p>Warm regards,</p><p><strong>The Elmwood House Team</strong></p>\
         <p>14 Orchard Lane, Baner, Pune 411045</p>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_notification_includes_only_present_fields() {
        let html = render_admin_notification(
            &Notification {
                name: "Asha Rane".to_string(),
                email: "asha@example.com".to_string(),
                phone: "+91 98200 11223".to_string(),
                service_interested: Some("Assisted Living".to_string()),
                ..Notification::default()
            },
            "General",
        );
        assert!(html.contains("New General Inquiry Received"));
        assert!(html.contains("Service Interested"));
        assert!(!html.contains("Preferred Date"));
        assert!(html.contains("No message provided"));
    }

    #[test]
    fn auto_reply_addresses_the_submitter() {
        let html = render_auto_reply("Asha Rane");
        assert!(html.starts_with("<h2>Dear Asha Rane,"));
    }
}
