//! GuildForms Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guildforms_engine::api::{self, websocket::WsState, ConnectionManager};
use guildforms_engine::infrastructure::{
    config::EngineConfig,
    localization::CatalogLocalizer,
    memory::{InMemoryServices, SeedData},
};
use guildforms_engine::use_cases::dialogs::DialogFactory;
use guildforms_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine is usually run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guildforms_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GuildForms Engine");

    let config = EngineConfig::from_env()?;

    // Localization: built-in English plus any catalogs on disk
    let mut localizer = CatalogLocalizer::builtin()?;
    if let Some(dir) = &config.locale_dir {
        localizer = localizer.load_dir(dir)?;
    }
    tracing::info!(
        locales = ?localizer.locales(),
        default_locale = %config.default_locale,
        "Localization catalogs loaded"
    );

    // Domain façades
    let seed = match &config.seed_data_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading seed data");
            SeedData::load(path)?
        }
        None => SeedData::default(),
    };
    let services = Arc::new(InMemoryServices::from_seed(seed));

    let bind_address = config.bind_address();
    let app = Arc::new(App::new(
        config,
        Arc::new(localizer),
        DialogFactory::from_services(services),
    ));

    let ws_state = Arc::new(WsState {
        app: app.clone(),
        connections: Arc::new(ConnectionManager::new()),
    });

    // Build router with separate states for HTTP and WebSocket
    let mut router = api::http::routes()
        .with_state(app)
        .route("/ws", get(api::websocket::ws_handler).with_state(ws_state))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer_from_env() {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = bind_address.parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer_from_env() -> Option<CorsLayer> {
    let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
