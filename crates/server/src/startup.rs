use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::items::memory::MemoryItemRepository;
use service::items::seaorm::SeaOrmItemRepository;
use service::items::service::ItemService;

use crate::routes;

/// Shared handler state: the item service over whichever backend the binary
/// constructed at startup.
#[derive(Clone)]
pub struct AppState {
    pub items: ItemService,
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

async fn serve(state: AppState) -> anyhow::Result<()> {
    let app: Router = routes::build_router(state, build_cors());
    let addr = load_bind_addr()?;
    info!(%addr, "starting item service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Entry for the in-memory variant. The store is constructed once here and
/// lives for the process lifetime; restart is the only reset.
pub async fn run_memory() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let repo = Arc::new(MemoryItemRepository::new());
    let state = AppState { items: ItemService::new(repo) };
    serve(state).await
}

/// Entry for the relational variant: connect the pool, then serve.
pub async fn run_database() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let db = models::db::connect().await?;
    let repo = Arc::new(SeaOrmItemRepository::new(db));
    let state = AppState { items: ItemService::new(repo) };
    serve(state).await
}
