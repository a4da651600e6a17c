use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::controller;
use crate::ontology::OntologyStore;
use crate::storage::{DocumentStorage, OpendalStorage};

/// Shared state handed to every controller.
#[derive(Clone)]
pub struct AppContext {
    /// Process-wide holder of the active ontology.
    pub ontology: OntologyStore,
    /// Persistence for raw uploaded documents.
    pub storage: Arc<dyn DocumentStorage>,
    /// Resolved application settings.
    pub settings: Arc<Settings>,
}

impl AppContext {
    /// Builds the production context from resolved settings.
    pub fn new(settings: Settings) -> crate::Result<Self> {
        let storage: Arc<dyn DocumentStorage> =
            Arc::new(OpendalStorage::filesystem(&settings.upload.dir)?);
        Ok(Self {
            ontology: OntologyStore::new(),
            storage,
            settings: Arc::new(settings),
        })
    }

    /// Builds a context backed by in-memory storage, for tests.
    #[must_use]
    pub fn for_tests() -> Self {
        let storage: Arc<dyn DocumentStorage> =
            Arc::new(OpendalStorage::memory().expect("memory storage"));
        Self {
            ontology: OntologyStore::new(),
            storage,
            settings: Arc::new(Settings::default()),
        }
    }
}

/// Assembles the application router with every route mounted.
#[must_use]
pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .merge(controller::pages::routes())
        .merge(controller::graph::routes())
        .merge(controller::hierarchy::routes())
        .merge(controller::entity::routes())
        .merge(controller::upload::routes())
        .merge(controller::monitoring::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Installs the process-wide tracing subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ontoview=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Binds the configured address and serves requests until shutdown.
pub async fn run(ctx: AppContext) -> crate::Result<()> {
    let address = ctx.settings.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, "listening");
    axum::serve(listener, routes(ctx)).await?;
    Ok(())
}
