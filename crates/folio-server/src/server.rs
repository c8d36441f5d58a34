//! Preview server implementation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::sync::{broadcast, RwLock};
use tower_http::services::ServeDir;

use folio_markdown::escape_html;
use folio_model::{
    load_path, PortfolioPatch, PortfolioSource, PortfolioStore, Snapshot, SourceError, Theme,
};
use folio_static::assets::AssetPipeline;
use folio_static::{ArchiveBuilder, SiteGenerator};

use crate::hub::{preview_client_script, PreviewHub, PreviewMessage};
use crate::watcher::{FileWatcher, WatchEvent};

const SOCKET_PATH: &str = "/__preview";
const CLIENT_SCRIPT_TAG: &str = r#"<script src="/__preview.js"></script>"#;

/// Configuration for the preview server.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Portfolio source file
    pub data_file: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Theme preset that wins over the data file's theme
    pub theme: Option<String>,

    /// Minify the layout CSS
    pub minify: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("portfolio.yaml"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
            theme: None,
            minify: false,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    Bind(String, String),

    #[error("File watch error: {0}")]
    Watch(String),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Shared server state.
struct ServerState {
    config: PreviewConfig,
    store: PortfolioStore,
    generator: SiteGenerator,
    hub: PreviewHub,
    theme_override: Option<Theme>,
}

type SharedState = Arc<RwLock<ServerState>>;

impl ServerState {
    /// Load the data file into a fresh store.
    fn load(config: PreviewConfig) -> Result<Self, ServerError> {
        let theme_override = match &config.theme {
            Some(id) => {
                Some(Theme::preset(id).ok_or_else(|| SourceError::UnknownTheme(id.clone()))?)
            }
            None => None,
        };

        let source = load_path(&config.data_file)?;

        let mut state = Self {
            generator: SiteGenerator::new(config.minify),
            config,
            store: PortfolioStore::new(),
            hub: PreviewHub::new(),
            theme_override,
        };
        state.apply(source);

        Ok(state)
    }

    /// Feed loaded content through the store.
    ///
    /// Unchanged content leaves the store untouched and publishes nothing.
    fn apply(&mut self, source: PortfolioSource) {
        let theme = self
            .theme_override
            .clone()
            .or(source.theme)
            .unwrap_or_default();

        self.store
            .update_portfolio_data(PortfolioPatch::from(source.data));
        self.store.set_selected_theme(theme);
    }
}

/// Live preview server.
pub struct PreviewServer {
    config: PreviewConfig,
}

impl PreviewServer {
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }

    /// Start the preview server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let state = ServerState::load(self.config.clone())?;
        let hub = state.hub.clone();
        let snapshots = state.store.subscribe();
        let state = Arc::new(RwLock::new(state));

        let (watcher, mut rx) = FileWatcher::new(&self.config.data_file)
            .map_err(|e| ServerError::Watch(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        tokio::spawn(forward_snapshots(snapshots, hub));

        let app = router(state, &self.config.data_file);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind(addr.clone(), e.to_string()))?;

        tracing::info!("Previewing {} at http://{}", self.config.data_file.display(), addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Bind(addr, e.to_string()))?;

        Ok(())
    }
}

fn router(state: SharedState, data_file: &Path) -> Router {
    let assets_dir = match data_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/script.js", get(script_handler))
        .route("/export", get(export_handler))
        .route(SOCKET_PATH, get(ws_handler))
        .route("/__preview.js", get(client_script_handler))
        .fallback_service(ServeDir::new(assets_dir))
        .with_state(state)
}

/// Turn every new snapshot into a reload broadcast.
async fn forward_snapshots(mut snapshots: broadcast::Receiver<Arc<Snapshot>>, hub: PreviewHub) {
    loop {
        match snapshots.recv().await {
            Ok(snapshot) => {
                tracing::debug!("New snapshot: {}", snapshot.summary());
                // One reload covers everything already queued.
                while snapshots.try_recv().is_ok() {}
                hub.send(PreviewMessage::Reload);
            }
            Err(broadcast::error::RecvError::Lagged(_)) => hub.send(PreviewMessage::Reload),
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Handle file watch events.
///
/// The data file is read and parsed before the write lock is taken, so
/// requests keep being served while it loads.
async fn handle_watch_event(state: &SharedState, event: WatchEvent) {
    match event {
        WatchEvent::Changed(path) => {
            tracing::info!("Portfolio changed: {}", path.display());

            let data_file = state.read().await.config.data_file.clone();
            let loaded = load_source(data_file).await;

            let mut state = state.write().await;
            match loaded {
                Ok(source) => state.apply(source),
                Err(message) => {
                    tracing::warn!("Keeping previous content: {}", message);
                    state.hub.send(PreviewMessage::Failed { message });
                }
            }
        }

        WatchEvent::Removed(path) => {
            tracing::warn!("Portfolio removed: {}", path.display());
            state.read().await.hub.send(PreviewMessage::Failed {
                message: format!("{} was removed", path.display()),
            });
        }
    }
}

/// Read and parse the data file on the blocking pool.
async fn load_source(data_file: PathBuf) -> Result<PortfolioSource, String> {
    match tokio::task::spawn_blocking(move || load_path(&data_file)).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(format!("Loading task failed: {}", e)),
    }
}

/// Handler for the generated page, with the client script injected.
async fn index_handler(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    let snapshot = state.store.snapshot();

    match state.generator.render_html(&snapshot) {
        Ok(html) => Html(inject_client_script(&html)).into_response(),
        Err(e) => {
            tracing::warn!("Failed to render preview: {}", e);
            let page = format!(
                "<!DOCTYPE html><html><body><pre>{}</pre>{}</body></html>",
                escape_html(&e.to_string()),
                CLIENT_SCRIPT_TAG
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
        }
    }
}

async fn styles_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    let css = state.generator.render_css(&state.store.snapshot().theme);
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css)
}

async fn script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        AssetPipeline::generate_js(),
    )
}

/// Handler for the archive download.
async fn export_handler(State(state): State<SharedState>) -> Response {
    // Capture the snapshot and release the lock before packaging.
    let (snapshot, artifacts) = {
        let state = state.read().await;
        let snapshot = state.store.snapshot();
        let artifacts = state.generator.generate(&snapshot);
        (snapshot, artifacts)
    };

    let archive = match artifacts {
        Ok(artifacts) => ArchiveBuilder::package(artifacts, snapshot.owner_name()).await,
        Err(e) => Err(e),
    };

    match archive {
        Ok(archive) => {
            tracing::info!("Serving {} ({})", archive.file_name, snapshot.summary());
            let disposition = format!(
                "attachment; filename=\"{}\"",
                archive.file_name.replace('"', "'")
            );
            (
                [
                    (header::CONTENT_TYPE, "application/zip".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                archive.bytes,
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Export failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Handler for the preview WebSocket endpoint.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<SharedState>) -> impl IntoResponse {
    let rx = state.read().await.hub.subscribe();
    ws.on_upgrade(move |socket| handle_ws(socket, rx))
}

/// Forward hub messages to one client.
async fn handle_ws(mut socket: WebSocket, mut rx: broadcast::Receiver<PreviewMessage>) {
    if send_message(&mut socket, &PreviewMessage::Connected)
        .await
        .is_err()
    {
        return;
    }

    loop {
        match rx.recv().await {
            Ok(msg) => {
                if send_message(&mut socket, &msg).await.is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(_)) => continue,
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

async fn send_message(socket: &mut WebSocket, msg: &PreviewMessage) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    socket.send(Message::Text(json.into())).await
}

async fn client_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        preview_client_script(SOCKET_PATH),
    )
}

/// Insert the preview client script before `</body>`.
fn inject_client_script(html: &str) -> String {
    match html.rfind("</body>") {
        Some(pos) => format!("{}{}\n{}", &html[..pos], CLIENT_SCRIPT_TAG, &html[pos..]),
        None => format!("{}{}", html, CLIENT_SCRIPT_TAG),
    }
}
