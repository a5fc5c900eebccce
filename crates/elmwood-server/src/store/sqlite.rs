// SPDX-License-Identifier: Apache-2.0

use super::{Collection, LeadFilter, LeadPatch, ListQuery, OrderBy, Store, StoreError};
use crate::timefmt::now_rfc3339;
use async_trait::async_trait;
use elmwood_model::{
    fixtures, AdmissionApplication, ContentRecord, Lead, NewLead, NewVisitor, Visitor,
};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tokio::sync::Mutex;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS content (
    collection TEXT NOT NULL,
    id INTEGER NOT NULL,
    slug TEXT,
    category TEXT,
    is_active INTEGER NOT NULL DEFAULT 1,
    ord INTEGER NOT NULL DEFAULT 0,
    body TEXT NOT NULL,
    PRIMARY KEY (collection, id)
);
CREATE INDEX IF NOT EXISTS idx_content_slug ON content(collection, slug);
CREATE TABLE IF NOT EXISTS leads (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    status TEXT NOT NULL,
    source TEXT NOT NULL,
    priority TEXT NOT NULL,
    created_at TEXT NOT NULL,
    body TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_leads_status_created ON leads(status, created_at);
CREATE INDEX IF NOT EXISTS idx_leads_source ON leads(source);
CREATE TABLE IF NOT EXISTS visitors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    created_at TEXT NOT NULL,
    body TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS admissions (
    application_id TEXT PRIMARY KEY,
    status TEXT NOT NULL,
    created_at TEXT NOT NULL,
    body TEXT NOT NULL
);
";

/// Durable document store over SQLite. Each row carries the entity as a JSON
/// body plus the columns the list queries filter and sort on.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError(format!("sqlite open failed: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| StoreError(format!("sqlite pragma failed: {e}")))?;
        conn.busy_timeout(std::time::Duration::from_millis(500))
            .map_err(|e| StoreError(format!("sqlite busy timeout failed: {e}")))?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| StoreError(format!("sqlite schema failed: {e}")))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Loads the bundled dataset into the content table, replacing what is
    /// there. Mirrors the original deployment's seed script.
    pub async fn seed_fixtures(&self) -> Result<(), StoreError> {
        let mut conn = self.conn.lock().await;
        let tx = conn
            .transaction()
            .map_err(|e| StoreError(format!("seed transaction failed: {e}")))?;

        fn put<T: Serialize>(
            tx: &rusqlite::Transaction<'_>,
            collection: Collection,
            id: u64,
            slug: Option<&str>,
            category: Option<&str>,
            is_active: bool,
            ord: i64,
            body: &T,
        ) -> Result<(), StoreError> {
            let body = serde_json::to_string(body)
                .map_err(|e| StoreError(format!("seed encode failed: {e}")))?;
            tx.execute(
                "INSERT OR REPLACE INTO content(collection, id, slug, category, is_active, ord, body)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![collection.key(), id, slug, category, is_active, ord, body],
            )
            .map_err(|e| StoreError(format!("seed insert failed: {e}")))?;
            Ok(())
        }

        put(&tx, Collection::Settings, 1, None, None, true, 0, &fixtures::site_settings())?;
        put(&tx, Collection::About, 1, None, None, true, 0, &fixtures::about_page())?;
        let popup = fixtures::home_popup();
        put(&tx, Collection::Popup, 1, None, None, popup.is_active, 0, &popup)?;
        for item in fixtures::sliders() {
            put(&tx, Collection::Sliders, item.id, None, None, item.is_active, item.order, &item)?;
        }
        for item in fixtures::services() {
            put(
                &tx,
                Collection::Services,
                item.id,
                Some(&item.slug),
                None,
                item.is_active,
                item.order,
                &item,
            )?;
        }
        for item in fixtures::team_members() {
            put(&tx, Collection::Team, item.id, None, None, item.is_active, item.order, &item)?;
        }
        for item in fixtures::testimonials() {
            put(
                &tx,
                Collection::Testimonials,
                item.id,
                None,
                None,
                item.is_active,
                item.order,
                &item,
            )?;
        }
        for item in fixtures::gallery_images() {
            put(
                &tx,
                Collection::Gallery,
                item.id,
                None,
                Some(&item.category),
                item.is_active,
                item.order,
                &item,
            )?;
        }
        for item in fixtures::blog_posts() {
            put(
                &tx,
                Collection::Blogs,
                item.id,
                Some(&item.slug),
                Some(&item.category),
                item.is_active,
                item.order,
                &item,
            )?;
        }
        for item in fixtures::events() {
            put(
                &tx,
                Collection::Events,
                item.id,
                Some(&item.slug),
                None,
                item.is_active,
                item.order,
                &item,
            )?;
        }
        for item in fixtures::statistics() {
            put(
                &tx,
                Collection::Statistics,
                item.id,
                None,
                None,
                item.is_active,
                item.order,
                &item,
            )?;
        }
        for item in fixtures::faqs() {
            put(
                &tx,
                Collection::Faqs,
                item.id,
                None,
                Some(&item.category),
                item.is_active,
                item.order,
                &item,
            )?;
        }
        for item in fixtures::living_options() {
            put(
                &tx,
                Collection::LivingOptions,
                item.id,
                None,
                None,
                item.is_active,
                item.order,
                &item,
            )?;
        }

        tx.commit()
            .map_err(|e| StoreError(format!("seed commit failed: {e}")))
    }

    /// Direct content upsert, used by tests and operational tooling.
    pub async fn put_content_row<T: Serialize + ContentRecord>(
        &self,
        collection: Collection,
        slug: Option<&str>,
        category: Option<&str>,
        item: &T,
    ) -> Result<(), StoreError> {
        let body = serde_json::to_string(item)
            .map_err(|e| StoreError(format!("content encode failed: {e}")))?;
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT OR REPLACE INTO content(collection, id, slug, category, is_active, ord, body)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                collection.key(),
                item.id(),
                slug,
                category,
                item.is_active(),
                item.sort_order(),
                body
            ],
        )
        .map_err(|e| StoreError(format!("content insert failed: {e}")))?;
        Ok(())
    }
}

fn decode(body: &str) -> Result<Value, StoreError> {
    serde_json::from_str(body).map_err(|e| StoreError(format!("stored body is not json: {e}")))
}

#[async_trait]
impl Store for SqliteStore {
    fn kind(&self) -> &'static str {
        "sqlite"
    }

    fn durable(&self) -> bool {
        true
    }

    async fn list_content(
        &self,
        collection: Collection,
        query: &ListQuery,
    ) -> Result<Vec<Value>, StoreError> {
        let mut sql = String::from("SELECT body FROM content WHERE collection = ?1");
        if query.active_only {
            sql.push_str(" AND is_active = 1");
        }
        if query.category.is_some() {
            sql.push_str(" AND category = ?2");
        }
        sql.push_str(match query.order {
            OrderBy::OrderAsc => " ORDER BY ord ASC, id ASC",
            OrderBy::DateDesc => " ORDER BY json_extract(body, '$.date') DESC, id ASC",
        });
        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| StoreError(format!("content query prepare failed: {e}")))?;
        let mut binds: Vec<String> = vec![collection.key().to_string()];
        if let Some(category) = &query.category {
            binds.push(category.clone());
        }
        let rows = stmt
            .query_map(params_from_iter(binds.iter()), |row| {
                row.get::<_, String>(0)
            })
            .map_err(|e| StoreError(format!("content query failed: {e}")))?;
        let mut out = Vec::new();
        for body in rows {
            let body = body.map_err(|e| StoreError(format!("content row failed: {e}")))?;
            out.push(decode(&body)?);
        }
        Ok(out)
    }

    async fn find_singleton(&self, collection: Collection) -> Result<Option<Value>, StoreError> {
        let conn = self.conn.lock().await;
        let body: Option<String> = conn
            .query_row(
                "SELECT body FROM content WHERE collection = ?1 ORDER BY id ASC LIMIT 1",
                params![collection.key()],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError(format!("singleton query failed: {e}")))?;
        body.as_deref().map(decode).transpose()
    }

    async fn find_content(
        &self,
        collection: Collection,
        id_or_slug: &str,
    ) -> Result<Option<Value>, StoreError> {
        let conn = self.conn.lock().await;
        if let Ok(id) = id_or_slug.parse::<u64>() {
            let body: Option<String> = conn
                .query_row(
                    "SELECT body FROM content WHERE collection = ?1 AND id = ?2",
                    params![collection.key(), id],
                    |row| row.get(0),
                )
                .optional()
                .map_err(|e| StoreError(format!("content id lookup failed: {e}")))?;
            if let Some(body) = body {
                return decode(&body).map(Some);
            }
        }
        let body: Option<String> = conn
            .query_row(
                "SELECT body FROM content WHERE collection = ?1 AND slug = ?2",
                params![collection.key(), id_or_slug],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError(format!("content slug lookup failed: {e}")))?;
        body.as_deref().map(decode).transpose()
    }

    async fn increment_blog_views(&self, slug: &str) -> Result<bool, StoreError> {
        let conn = self.conn.lock().await;
        let changed = conn
            .execute(
                "UPDATE content
                 SET body = json_set(body, '$.views', COALESCE(json_extract(body, '$.views'), 0) + 1)
                 WHERE collection = 'blogs' AND slug = ?1",
                params![slug],
            )
            .map_err(|e| StoreError(format!("view increment failed: {e}")))?;
        Ok(changed > 0)
    }

    async fn create_lead(&self, new: NewLead) -> Result<Lead, StoreError> {
        let now = now_rfc3339();
        let mut conn = self.conn.lock().await;
        let tx = conn
            .transaction()
            .map_err(|e| StoreError(format!("lead transaction failed: {e}")))?;
        tx.execute(
            "INSERT INTO leads(status, source, priority, created_at, body) VALUES ('new', ?1, ?2, ?3, '')",
            params![new.source.as_str(), new.priority.as_str(), now],
        )
        .map_err(|e| StoreError(format!("lead insert failed: {e}")))?;
        let id = tx.last_insert_rowid();
        let lead = Lead::from_new(new, id.to_string(), now);
        let body = serde_json::to_string(&lead)
            .map_err(|e| StoreError(format!("lead encode failed: {e}")))?;
        tx.execute(
            "UPDATE leads SET body = ?1 WHERE id = ?2",
            params![body, id],
        )
        .map_err(|e| StoreError(format!("lead body write failed: {e}")))?;
        tx.commit()
            .map_err(|e| StoreError(format!("lead commit failed: {e}")))?;
        Ok(lead)
    }

    async fn list_leads(
        &self,
        filter: &LeadFilter,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<Lead>, u64), StoreError> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut binds: Vec<String> = Vec::new();
        if let Some(status) = filter.status {
            clauses.push("status = ?");
            binds.push(status.as_str().to_string());
        }
        if let Some(source) = filter.source {
            clauses.push("source = ?");
            binds.push(source.as_str().to_string());
        }
        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };

        let conn = self.conn.lock().await;
        let total: u64 = conn
            .query_row(
                &format!("SELECT COUNT(*) FROM leads{where_sql}"),
                params_from_iter(binds.iter()),
                |row| row.get(0),
            )
            .map_err(|e| StoreError(format!("lead count failed: {e}")))?;

        let offset = page.saturating_sub(1).saturating_mul(limit);
        let sql = format!(
            "SELECT body FROM leads{where_sql} ORDER BY created_at DESC, id DESC LIMIT {limit} OFFSET {offset}"
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| StoreError(format!("lead query prepare failed: {e}")))?;
        let rows = stmt
            .query_map(params_from_iter(binds.iter()), |row| {
                row.get::<_, String>(0)
            })
            .map_err(|e| StoreError(format!("lead query failed: {e}")))?;
        let mut leads = Vec::new();
        for body in rows {
            let body = body.map_err(|e| StoreError(format!("lead row failed: {e}")))?;
            leads.push(
                serde_json::from_str(&body)
                    .map_err(|e| StoreError(format!("stored lead is not valid: {e}")))?,
            );
        }
        Ok((leads, total))
    }

    async fn update_lead(&self, id: &str, patch: LeadPatch) -> Result<Option<Lead>, StoreError> {
        let Ok(id_num) = id.parse::<i64>() else {
            return Ok(None);
        };
        let conn = self.conn.lock().await;
        let body: Option<String> = conn
            .query_row(
                "SELECT body FROM leads WHERE id = ?1",
                params![id_num],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError(format!("lead lookup failed: {e}")))?;
        let Some(body) = body else {
            return Ok(None);
        };
        let mut lead: Lead = serde_json::from_str(&body)
            .map_err(|e| StoreError(format!("stored lead is not valid: {e}")))?;
        if let Some(status) = patch.status {
            lead.status = status;
        }
        if let Some(priority) = patch.priority {
            lead.priority = priority;
        }
        if let Some(note) = patch.note {
            lead.notes.push(note);
        }
        let body = serde_json::to_string(&lead)
            .map_err(|e| StoreError(format!("lead encode failed: {e}")))?;
        conn.execute(
            "UPDATE leads SET status = ?1, priority = ?2, body = ?3 WHERE id = ?4",
            params![lead.status.as_str(), lead.priority.as_str(), body, id_num],
        )
        .map_err(|e| StoreError(format!("lead update failed: {e}")))?;
        Ok(Some(lead))
    }

    async fn create_visitor(&self, new: NewVisitor) -> Result<Visitor, StoreError> {
        let now = now_rfc3339();
        let mut conn = self.conn.lock().await;
        let tx = conn
            .transaction()
            .map_err(|e| StoreError(format!("visitor transaction failed: {e}")))?;
        tx.execute(
            "INSERT INTO visitors(created_at, body) VALUES (?1, '')",
            params![now],
        )
        .map_err(|e| StoreError(format!("visitor insert failed: {e}")))?;
        let id = tx.last_insert_rowid();
        let visitor = Visitor::from_new(new, id.to_string(), now);
        let body = serde_json::to_string(&visitor)
            .map_err(|e| StoreError(format!("visitor encode failed: {e}")))?;
        tx.execute(
            "UPDATE visitors SET body = ?1 WHERE id = ?2",
            params![body, id],
        )
        .map_err(|e| StoreError(format!("visitor body write failed: {e}")))?;
        tx.commit()
            .map_err(|e| StoreError(format!("visitor commit failed: {e}")))?;
        Ok(visitor)
    }

    async fn insert_admission(&self, application: &AdmissionApplication) -> Result<(), StoreError> {
        let body = serde_json::to_string(application)
            .map_err(|e| StoreError(format!("admission encode failed: {e}")))?;
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO admissions(application_id, status, created_at, body) VALUES (?1, ?2, ?3, ?4)",
            params![
                application.application_id,
                application.status.as_str(),
                application.created_at,
                body
            ],
        )
        .map_err(|e| StoreError(format!("admission insert failed: {e}")))?;
        Ok(())
    }

    async fn find_admission(
        &self,
        application_id: &str,
    ) -> Result<Option<AdmissionApplication>, StoreError> {
        let conn = self.conn.lock().await;
        let body: Option<String> = conn
            .query_row(
                "SELECT body FROM admissions WHERE application_id = ?1",
                params![application_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError(format!("admission lookup failed: {e}")))?;
        body.map(|body| {
            serde_json::from_str(&body)
                .map_err(|e| StoreError(format!("stored admission is not valid: {e}")))
        })
        .transpose()
    }

    async fn update_admission(&self, application: &AdmissionApplication) -> Result<(), StoreError> {
        let body = serde_json::to_string(application)
            .map_err(|e| StoreError(format!("admission encode failed: {e}")))?;
        let conn = self.conn.lock().await;
        let changed = conn
            .execute(
                "UPDATE admissions SET status = ?1, body = ?2 WHERE application_id = ?3",
                params![
                    application.status.as_str(),
                    body,
                    application.application_id
                ],
            )
            .map_err(|e| StoreError(format!("admission update failed: {e}")))?;
        if changed == 0 {
            return Err(StoreError(format!(
                "admission {} vanished during update",
                application.application_id
            )));
        }
        Ok(())
    }
}
