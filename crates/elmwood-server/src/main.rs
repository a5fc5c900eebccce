#![forbid(unsafe_code)]

use elmwood_server::{build_router, AppState, MemoryStore, ServerConfig, SqliteStore, Store};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

async fn resolve_store(config: &ServerConfig) -> Arc<dyn Store> {
    match &config.sqlite_path {
        Some(path) => match SqliteStore::open(path) {
            Ok(store) => {
                info!("sqlite store ready at {}", path.display());
                if config.seed_on_start {
                    match store.seed_fixtures().await {
                        Ok(()) => info!("content fixtures seeded"),
                        Err(err) => error!("fixture seed failed: {err}"),
                    }
                }
                Arc::new(store)
            }
            Err(err) => {
                warn!("sqlite store unavailable ({err}); serving static data with in-memory intake");
                Arc::new(MemoryStore::new())
            }
        },
        None => {
            info!("no ELMWOOD_SQLITE_PATH set; serving static data with in-memory intake");
            Arc::new(MemoryStore::new())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ServerConfig::from_env();
    init_tracing(config.log_json);

    let store = resolve_store(&config).await;
    let bind_addr = config.bind_addr.clone();
    let mail_configured = config.mail.is_some();
    let state = AppState::with_config(store, config);
    let app = build_router(state);

    if !mail_configured {
        info!("mail relay not configured; notifications are disabled");
    }

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("elmwood-server listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
