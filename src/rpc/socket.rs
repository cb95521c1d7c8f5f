//! Persistent WebSocket channel to the server.

use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tokio_util::sync::CancellationToken;

use super::router::{Channel, Router};
use crate::error::{Result, XbmcError};

/// Lifecycle of the socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
  Unconnected,
  Connecting,
  Open,
  Closed,
}

/// WebSocket connection; one background task owns both halves of the stream.
pub(crate) struct SocketChannel {
  state: Arc<RwLock<ConnectionState>>,
  write_tx: RwLock<Option<async_channel::Sender<String>>>,
  cancel_token: RwLock<Option<CancellationToken>>,
  task_handle: RwLock<Option<JoinHandle<()>>>,
}

impl SocketChannel {
  pub fn new() -> Self {
    Self {
      state: Arc::new(RwLock::new(ConnectionState::Unconnected)),
      write_tx: RwLock::new(None),
      cancel_token: RwLock::new(None),
      task_handle: RwLock::new(None),
    }
  }

  pub fn state(&self) -> ConnectionState {
    *self.state.read()
  }

  /// Open the socket and spawn its I/O task. Replies are handed to `router`.
  pub async fn connect(&self, url: &str, router: Arc<Router>) -> Result<()> {
    // Drop any existing connection
    self.disconnect().await;

    *self.state.write() = ConnectionState::Connecting;
    log::debug!("Opening socket to {}", url);

    let ws_stream = match connect_async(url).await {
      Ok((ws_stream, _)) => ws_stream,
      Err(e) => {
        *self.state.write() = ConnectionState::Closed;
        return Err(e.into());
      }
    };
    let (mut write, mut read) = ws_stream.split();

    let (write_tx, write_rx) = async_channel::unbounded::<String>();
    *self.write_tx.write() = Some(write_tx);
    *self.state.write() = ConnectionState::Open;

    let cancel_token = CancellationToken::new();
    *self.cancel_token.write() = Some(cancel_token.clone());

    let state = self.state.clone();

    let handle = tokio::spawn(async move {
      loop {
        tokio::select! {
          _ = cancel_token.cancelled() => {
            log::info!("Socket shutdown requested");
            let _ = write.close().await;
            break;
          }
          outgoing = write_rx.recv() => {
            let Ok(text) = outgoing else { break };
            if let Err(e) = write.send(Message::Text(text.into())).await {
              log::error!("Socket write error: {}", e);
              break;
            }
          }
          msg = read.next() => {
            match msg {
              Some(Ok(Message::Text(text))) => router.route(&text),
              Some(Ok(Message::Close(_))) => {
                log::info!("Socket closed by server");
                break;
              }
              Some(Err(e)) => {
                log::error!("Socket error: {}", e);
                break;
              }
              None => {
                log::info!("Socket stream ended");
                break;
              }
              _ => {}
            }
          }
        }
      }

      *state.write() = ConnectionState::Closed;
      router.fail_channel(Channel::Socket, "socket closed");
    });

    *self.task_handle.write() = Some(handle);

    Ok(())
  }

  /// Queue a text frame for the I/O task.
  pub fn send(&self, text: String) -> Result<()> {
    if self.state() != ConnectionState::Open {
      return Err(XbmcError::TransportUnavailable(
        "socket is not open".to_string(),
      ));
    }
    let guard = self.write_tx.read();
    let tx = guard
      .as_ref()
      .ok_or_else(|| XbmcError::TransportUnavailable("socket is not open".to_string()))?;
    tx.try_send(text)
      .map_err(|_| XbmcError::TransportUnavailable("socket writer stopped".to_string()))
  }

  /// Close the socket and wait briefly for the I/O task to finish.
  pub async fn disconnect(&self) {
    if let Some(token) = self.cancel_token.write().take() {
      token.cancel();
    }
    self.write_tx.write().take();

    // Take the handle without holding the lock across await
    let handle = self.task_handle.write().take();
    if let Some(handle) = handle {
      let _ = tokio::time::timeout(Duration::from_secs(2), handle).await;
    }

    let mut state = self.state.write();
    if *state != ConnectionState::Unconnected {
      *state = ConnectionState::Closed;
    }
  }
}

impl Drop for SocketChannel {
  fn drop(&mut self) {
    if let Some(token) = self.cancel_token.write().take() {
      token.cancel();
    }
  }
}
