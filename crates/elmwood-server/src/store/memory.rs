// SPDX-License-Identifier: Apache-2.0

use super::{Collection, LeadFilter, LeadPatch, ListQuery, Store, StoreError};
use crate::timefmt::now_rfc3339;
use async_trait::async_trait;
use elmwood_model::{AdmissionApplication, Lead, NewLead, NewVisitor, Visitor};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// Process-lifetime fallback store. Holds no content (reads fall through to
/// the static dataset) and keeps intake records in memory with locally
/// incremented ids. Everything here is lost on restart; that is the accepted
/// policy when no database is attached, not a defect to paper over.
#[derive(Default)]
pub struct MemoryStore {
    leads: Mutex<Vec<Lead>>,
    lead_seq: AtomicU64,
    visitors: Mutex<Vec<Visitor>>,
    visitor_seq: AtomicU64,
    admissions: Mutex<Vec<AdmissionApplication>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn kind(&self) -> &'static str {
        "memory"
    }

    fn durable(&self) -> bool {
        false
    }

    async fn list_content(
        &self,
        _collection: Collection,
        _query: &ListQuery,
    ) -> Result<Vec<Value>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_singleton(&self, _collection: Collection) -> Result<Option<Value>, StoreError> {
        Ok(None)
    }

    async fn find_content(
        &self,
        _collection: Collection,
        _id_or_slug: &str,
    ) -> Result<Option<Value>, StoreError> {
        Ok(None)
    }

    async fn increment_blog_views(&self, _slug: &str) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn create_lead(&self, new: NewLead) -> Result<Lead, StoreError> {
        let id = self.lead_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let lead = Lead::from_new(new, id.to_string(), now_rfc3339());
        self.leads.lock().await.push(lead.clone());
        Ok(lead)
    }

    async fn list_leads(
        &self,
        filter: &LeadFilter,
        _page: u64,
        _limit: u64,
    ) -> Result<(Vec<Lead>, u64), StoreError> {
        let leads = self.leads.lock().await;
        let mut rows: Vec<Lead> = leads
            .iter()
            .filter(|lead| filter.status.is_none_or(|s| lead.status == s))
            .filter(|lead| filter.source.is_none_or(|s| lead.source == s))
            .cloned()
            .collect();
        // Newest first; ids break ties for same-second submissions.
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.len().cmp(&a.id.len()))
                .then_with(|| b.id.cmp(&a.id))
        });
        let total = rows.len() as u64;
        Ok((rows, total))
    }

    async fn update_lead(&self, _id: &str, _patch: LeadPatch) -> Result<Option<Lead>, StoreError> {
        Err(StoreError(
            "lead updates require the durable store".to_string(),
        ))
    }

    async fn create_visitor(&self, new: NewVisitor) -> Result<Visitor, StoreError> {
        let id = self.visitor_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let visitor = Visitor::from_new(new, id.to_string(), now_rfc3339());
        self.visitors.lock().await.push(visitor.clone());
        Ok(visitor)
    }

    async fn insert_admission(&self, application: &AdmissionApplication) -> Result<(), StoreError> {
        self.admissions.lock().await.push(application.clone());
        Ok(())
    }

    async fn find_admission(
        &self,
        application_id: &str,
    ) -> Result<Option<AdmissionApplication>, StoreError> {
        Ok(self
            .admissions
            .lock()
            .await
            .iter()
            .find(|app| app.application_id == application_id)
            .cloned())
    }

    async fn update_admission(&self, application: &AdmissionApplication) -> Result<(), StoreError> {
        let mut admissions = self.admissions.lock().await;
        match admissions
            .iter_mut()
            .find(|app| app.application_id == application.application_id)
        {
            Some(slot) => {
                *slot = application.clone();
                Ok(())
            }
            None => Err(StoreError(format!(
                "admission {} vanished during update",
                application.application_id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elmwood_model::{LeadPriority, LeadSource, LeadStatus};

    fn new_lead(name: &str) -> NewLead {
        NewLead {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            phone: "+91 98600 41520".to_string(),
            subject: None,
            message: String::new(),
            source: LeadSource::ContactForm,
            appointment_date: None,
            appointment_time: None,
            service_interested: None,
            priority: LeadPriority::Medium,
            ip_address: None,
            user_agent: None,
        }
    }

    #[tokio::test]
    async fn ids_increment_and_listing_filters_by_status_and_source() {
        let store = MemoryStore::new();
        let first = store.create_lead(new_lead("asha")).await.expect("create");
        let second = store.create_lead(new_lead("ravi")).await.expect("create");
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");

        let (all, total) = store
            .list_leads(&LeadFilter::default(), 1, 20)
            .await
            .expect("list");
        assert_eq!(total, 2);
        assert_eq!(all.len(), 2);

        let filter = LeadFilter {
            status: Some(LeadStatus::Contacted),
            source: None,
        };
        let (none, _) = store.list_leads(&filter, 1, 20).await.expect("list");
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn content_reads_are_always_empty() {
        let store = MemoryStore::new();
        assert!(store
            .list_content(Collection::Sliders, &ListQuery::active())
            .await
            .expect("list")
            .is_empty());
        assert!(!store.increment_blog_views("any").await.expect("bump"));
    }
}
