#![forbid(unsafe_code)]
//! Elmwood House website API server.
//!
//! Two leaves over one storage capability: the content resolver (reads with
//! a static-data fallback) and the intake pipeline (lead, visit and admission
//! writes with best-effort mail notifications). Which `Store` implementation
//! backs them is decided once at startup and injected through `AppState`.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, patch, post};
use axum::Router;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub mod config;
mod http;
mod intake;
pub mod mail;
mod middleware;
mod resolver;
pub mod store;
mod timefmt;

pub use config::ServerConfig;
pub use mail::{MailConfig, Mailer};
pub use store::{MemoryStore, SqliteStore, Store};

pub const CRATE_NAME: &str = "elmwood-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub mailer: Option<Arc<Mailer>>,
    pub config: Arc<ServerConfig>,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self::with_config(store, ServerConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<dyn Store>, config: ServerConfig) -> Self {
        let mailer = Mailer::from_config(config.mail.clone()).map(Arc::new);
        Self {
            store,
            mailer,
            config: Arc::new(config),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);
    if config.allowed_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

pub fn build_router(state: AppState) -> Router {
    let website = Router::new()
        .route("/settings", get(http::content::get_settings))
        .route("/home", get(http::content::get_home))
        .route("/sliders", get(http::content::get_sliders))
        .route("/popup", get(http::content::get_popup))
        .route("/about", get(http::content::get_about))
        .route("/services", get(http::content::get_services))
        .route("/services/:id", get(http::content::get_service))
        .route("/team", get(http::content::get_team))
        .route("/testimonials", get(http::content::get_testimonials))
        .route("/gallery", get(http::content::get_gallery))
        .route(
            "/gallery/:category",
            get(http::content::get_gallery_by_category),
        )
        .route("/blogs", get(http::content::get_blogs))
        .route("/blogs/:slug", get(http::content::get_blog))
        .route("/events", get(http::content::get_events))
        .route("/events/:id", get(http::content::get_event))
        .route("/statistics", get(http::content::get_statistics))
        .route("/faqs", get(http::content::get_faqs))
        .route("/living-options", get(http::content::get_living_options));

    let leads = Router::new()
        .route("/", get(http::leads::list_leads))
        .route("/inquiry", post(http::leads::submit_inquiry))
        .route("/appointment", post(http::leads::submit_appointment))
        .route("/contact", post(http::leads::submit_contact))
        .route("/visit-request", post(http::leads::submit_visit_request))
        .route("/admission/step", post(http::leads::submit_admission_step))
        .route("/admission/complete", post(http::leads::complete_admission))
        .route("/admission/:application_id", get(http::leads::get_admission))
        .route("/:id/status", patch(http::leads::update_lead_status));

    Router::new()
        .route("/api/health", get(http::system::health))
        .route("/api/db-status", get(http::system::db_status))
        .nest("/api/website", website)
        .nest("/api/leads", leads)
        .fallback(http::system::fallback)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(cors_layer(&state.config))
        .with_state(state)
}
