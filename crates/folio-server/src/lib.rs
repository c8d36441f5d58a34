//! Live preview server for folio portfolios.
//!
//! Watches the portfolio data file, feeds changes through the store and
//! tells connected browsers to reload over a WebSocket.

pub mod hub;
pub mod server;
pub mod watcher;

pub use hub::{preview_client_script, PreviewHub, PreviewMessage};
pub use server::{PreviewConfig, PreviewServer, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
