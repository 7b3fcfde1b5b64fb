//! Preview server
//!
//! Serves the post listing as JSON, the feed and sitemap rendered from the
//! in-memory index, and static files from the public directory.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::ListOptions;
use crate::generator::Generator;
use crate::Folio;

/// Server state
pub struct ServerState {
    folio: Folio,
    /// Preview mode: drafts are visible without asking
    drafts: bool,
}

impl ServerState {
    pub fn new(folio: Folio, drafts: bool) -> Self {
        Self { folio, drafts }
    }

    fn options(&self, query: &DraftQuery) -> ListOptions {
        ListOptions {
            include_drafts: self.drafts || query.drafts.unwrap_or(false),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DraftQuery {
    drafts: Option<bool>,
}

/// Build the router for a shared state
pub fn router(state: Arc<ServerState>) -> Router {
    let config = &state.folio.config;
    let feed_route = format!("/{}", config.feed.path.trim_start_matches('/'));
    let sitemap_route = format!("/{}", config.sitemap.path.trim_start_matches('/'));
    let public_dir = state.folio.public_dir.clone();

    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:slug", get(show_post))
        .route(&feed_route, get(feed))
        .route(&sitemap_route, get(sitemap))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the preview server
pub async fn start(folio: Folio, ip: &str, port: u16, drafts: bool) -> Result<()> {
    // Build the index before the first request can race on it
    let total = folio.all_posts(ListOptions::with_drafts())?.len();
    tracing::info!("Serving {} posts (drafts visible: {})", total, drafts);

    let state = Arc::new(ServerState::new(folio, drafts));
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_posts(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<DraftQuery>,
) -> Response {
    match state.folio.all_posts(state.options(&query)) {
        Ok(posts) => Json(posts).into_response(),
        Err(e) => internal_error(e),
    }
}

async fn show_post(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
    Query(query): Query<DraftQuery>,
) -> Response {
    let options = state.options(&query);
    let loader = state.clone();
    let loaded = tokio::task::spawn_blocking(move || loader.folio.load_post(&slug)).await;

    match loaded {
        Ok(Ok(Some(post))) if options.include_drafts || !post.frontmatter().draft => {
            Json(post).into_response()
        }
        Ok(Ok(_)) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        Ok(Err(e)) => internal_error(e),
        Err(e) => internal_error(e),
    }
}

async fn feed(State(state): State<Arc<ServerState>>) -> Response {
    match Generator::new(&state.folio).feed() {
        Ok(xml) => xml_response("application/rss+xml; charset=utf-8", xml),
        Err(e) => internal_error(e),
    }
}

async fn sitemap(State(state): State<Arc<ServerState>>) -> Response {
    match Generator::new(&state.folio).sitemap() {
        Ok(xml) => xml_response("application/xml; charset=utf-8", xml),
        Err(e) => internal_error(e),
    }
}

fn xml_response(content_type: &'static str, body: String) -> Response {
    ([(header::CONTENT_TYPE, content_type)], body).into_response()
}

fn internal_error<E: std::fmt::Display>(e: E) -> Response {
    tracing::error!("Request failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
}
