//! Live preview command.

use anyhow::Result;
use folio_server::{PreviewConfig, PreviewServer};

use crate::config::ConfigFile;

/// Run the preview server.
pub async fn run(config: ConfigFile, port: Option<u16>, open: Option<bool>) -> Result<()> {
    let config = PreviewConfig {
        data_file: config.portfolio.data,
        port: port.unwrap_or(config.preview.port),
        host: config.preview.host,
        open: open.unwrap_or(config.preview.open),
        theme: config.portfolio.theme,
        minify: config.export.minify,
    };

    tracing::info!("Starting preview server on port {}", config.port);

    PreviewServer::new(config).start().await?;

    Ok(())
}
