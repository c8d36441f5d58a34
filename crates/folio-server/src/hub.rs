//! Reload notifications for connected browsers.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages pushed to preview clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PreviewMessage {
    /// Connection established
    Connected,

    /// The portfolio changed; reload the page
    Reload,

    /// The data file could not be loaded; the last good content stays up
    Failed { message: String },
}

/// Hub for broadcasting preview messages to all connected clients.
#[derive(Debug, Clone)]
pub struct PreviewHub {
    sender: broadcast::Sender<PreviewMessage>,
}

impl PreviewHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected clients.
    pub fn send(&self, msg: PreviewMessage) {
        // No receivers is fine
        let _ = self.sender.send(msg);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PreviewMessage> {
        self.sender.subscribe()
    }

    /// Number of connected clients.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for PreviewHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Client-side script connecting to the preview socket at `ws_path`.
///
/// The socket URL is built from the page's own host, so the script works
/// on whatever address the server is bound to.
pub fn preview_client_script(ws_path: &str) -> String {
    format!(
        r#"
(function() {{
  'use strict';

  const url = (location.protocol === 'https:' ? 'wss://' : 'ws://') + location.host + '{}';
  const ws = new WebSocket(url);
  let reconnectAttempts = 0;
  const maxReconnectAttempts = 10;

  function showFailure(message) {{
    let banner = document.getElementById('folio-preview-error');
    if (!banner) {{
      banner = document.createElement('div');
      banner.id = 'folio-preview-error';
      banner.style.cssText = 'position:fixed;bottom:1rem;left:1rem;right:1rem;padding:1rem;' +
        'background:#7f1d1d;color:#fff;font-family:monospace;border-radius:0.5rem;z-index:9999;';
      document.body.appendChild(banner);
    }}
    banner.textContent = message;
  }}

  ws.onopen = function() {{
    console.log('[folio] Preview connected');
    reconnectAttempts = 0;
  }};

  ws.onmessage = function(event) {{
    const msg = JSON.parse(event.data);

    switch (msg.type) {{
      case 'reload':
        location.reload();
        break;

      case 'failed':
        console.error('[folio]', msg.message);
        showFailure(msg.message);
        break;

      case 'connected':
        break;
    }}
  }};

  ws.onclose = function() {{
    console.log('[folio] Preview disconnected');
    if (reconnectAttempts < maxReconnectAttempts) {{
      reconnectAttempts++;
      setTimeout(function() {{
        location.reload();
      }}, 1000 * reconnectAttempts);
    }}
  }};
}})();
"#,
        ws_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_broadcasts_messages() {
        let hub = PreviewHub::new();
        let mut rx = hub.subscribe();

        hub.send(PreviewMessage::Reload);

        assert_eq!(rx.try_recv().unwrap(), PreviewMessage::Reload);
        assert_eq!(hub.subscriber_count(), 1);
    }

    #[test]
    fn send_without_clients_is_ignored() {
        let hub = PreviewHub::new();
        hub.send(PreviewMessage::Connected);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn serializes_messages() {
        let reload = serde_json::to_string(&PreviewMessage::Reload).unwrap();
        assert_eq!(reload, r#"{"type":"reload"}"#);

        let failed = serde_json::to_string(&PreviewMessage::Failed {
            message: "Invalid YAML".to_string(),
        })
        .unwrap();
        assert_eq!(failed, r#"{"type":"failed","message":"Invalid YAML"}"#);
    }

    #[test]
    fn client_script_targets_socket_path() {
        let script = preview_client_script("/__preview");
        assert!(script.contains("location.host + '/__preview'"));
        assert!(script.contains("case 'reload'"));
    }
}
