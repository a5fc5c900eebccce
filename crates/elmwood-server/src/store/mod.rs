// SPDX-License-Identifier: Apache-2.0

//! Storage capability. The resolver and the intake pipeline are handed one
//! `Store` at construction time; which implementation is active is a resolved
//! dependency, never a per-call global check. The SQLite store is the durable
//! tier; the in-memory store is the accepted non-durable fallback (data is
//! lost on restart, by policy).

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use elmwood_model::{
    AdmissionApplication, Lead, LeadNote, LeadPriority, LeadSource, LeadStatus, NewLead,
    NewVisitor, Visitor,
};
use serde_json::Value;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone)]
pub struct StoreError(pub String);

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// Content collections. `key()` doubles as the storage namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Settings,
    Sliders,
    Services,
    About,
    Team,
    Testimonials,
    Gallery,
    Blogs,
    Events,
    Statistics,
    Faqs,
    LivingOptions,
    Popup,
}

impl Collection {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Sliders => "sliders",
            Self::Services => "services",
            Self::About => "about",
            Self::Team => "team",
            Self::Testimonials => "testimonials",
            Self::Gallery => "gallery",
            Self::Blogs => "blogs",
            Self::Events => "events",
            Self::Statistics => "statistics",
            Self::Faqs => "faqs",
            Self::LivingOptions => "living_options",
            Self::Popup => "popup",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderBy {
    /// `order` ascending, ties by stored id.
    #[default]
    OrderAsc,
    /// Newest first by the entity's date field (blogs, events).
    DateDesc,
}

/// Immutable filter specification. Each backend translates it as appropriate:
/// SQL for the SQLite store, in-process predicates for the static fixtures.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub active_only: bool,
    pub category: Option<String>,
    pub order: OrderBy,
    pub limit: Option<usize>,
}

impl ListQuery {
    #[must_use]
    pub fn active() -> Self {
        Self {
            active_only: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn active_by_date() -> Self {
        Self {
            active_only: true,
            order: OrderBy::DateDesc,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    pub status: Option<LeadStatus>,
    pub source: Option<LeadSource>,
}

#[derive(Debug, Clone, Default)]
pub struct LeadPatch {
    pub status: Option<LeadStatus>,
    pub priority: Option<LeadPriority>,
    pub note: Option<LeadNote>,
}

#[async_trait]
pub trait Store: Send + Sync {
    fn kind(&self) -> &'static str;

    /// Whether writes survive a restart. The in-memory fallback answers false
    /// and the admin mutation path refuses to run against it.
    fn durable(&self) -> bool;

    async fn list_content(
        &self,
        collection: Collection,
        query: &ListQuery,
    ) -> Result<Vec<Value>, StoreError>;

    async fn find_singleton(&self, collection: Collection) -> Result<Option<Value>, StoreError>;

    /// Detail lookup: primary id match first, slug second.
    async fn find_content(
        &self,
        collection: Collection,
        id_or_slug: &str,
    ) -> Result<Option<Value>, StoreError>;

    /// Returns whether a post was found and bumped.
    async fn increment_blog_views(&self, slug: &str) -> Result<bool, StoreError>;

    async fn create_lead(&self, new: NewLead) -> Result<Lead, StoreError>;

    async fn list_leads(
        &self,
        filter: &LeadFilter,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<Lead>, u64), StoreError>;

    async fn update_lead(&self, id: &str, patch: LeadPatch) -> Result<Option<Lead>, StoreError>;

    async fn create_visitor(&self, new: NewVisitor) -> Result<Visitor, StoreError>;

    async fn insert_admission(&self, application: &AdmissionApplication) -> Result<(), StoreError>;

    async fn find_admission(
        &self,
        application_id: &str,
    ) -> Result<Option<AdmissionApplication>, StoreError>;

    async fn update_admission(&self, application: &AdmissionApplication) -> Result<(), StoreError>;
}
