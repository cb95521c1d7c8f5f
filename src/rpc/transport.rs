//! JSON-RPC transport: id allocation, channel selection, reply correlation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_channel::Receiver;
use parking_lot::RwLock;
use serde_json::Value;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use super::http::HttpChannel;
use super::protocol::{Notification, Request};
use super::router::{Channel, Router};
use super::socket::{ConnectionState, SocketChannel};
use crate::config::ClientConfig;
use crate::error::{Result, XbmcError};
use crate::handlers::{Completion, DefaultHandlers};
use crate::methods::Params;

/// Sends requests over the socket when it is open, over HTTP otherwise.
pub struct Transport {
  next_id: AtomicU64,
  router: Arc<Router>,
  socket: SocketChannel,
  http: Option<HttpChannel>,
  socket_url: String,
  request_timeout: Option<Duration>,
  runtime: RwLock<Option<Handle>>,
}

impl Transport {
  pub fn new(config: &ClientConfig, handlers: DefaultHandlers) -> Result<Self> {
    let http = if config.http_fallback {
      Some(HttpChannel::new(config.http_url(), config.request_timeout())?)
    } else {
      None
    };

    Ok(Self {
      next_id: AtomicU64::new(1),
      router: Arc::new(Router::new(handlers)),
      socket: SocketChannel::new(),
      http,
      socket_url: config.socket_url(),
      request_timeout: config.request_timeout(),
      runtime: RwLock::new(None),
    })
  }

  /// Open the persistent socket.
  pub async fn connect(&self) -> Result<()> {
    // Background work started by later sync calls runs here
    *self.runtime.write() = Some(Handle::current());
    self.socket.connect(&self.socket_url, self.router.clone()).await
  }

  /// Close the persistent socket. HTTP fallback stays usable.
  pub async fn disconnect(&self) {
    self.socket.disconnect().await;
  }

  pub fn state(&self) -> ConnectionState {
    self.socket.state()
  }

  pub fn handlers(&self) -> &DefaultHandlers {
    self.router.handlers()
  }

  pub fn notifications(&self) -> Receiver<Notification> {
    self.router.notifications()
  }

  pub fn pending_count(&self) -> usize {
    self.router.pending_count()
  }

  fn next_id(&self) -> u64 {
    self.next_id.fetch_add(1, Ordering::SeqCst)
  }

  /// Runtime captured by `connect`, else the caller's.
  fn runtime(&self) -> Option<Handle> {
    self
      .runtime
      .read()
      .clone()
      .or_else(|| Handle::try_current().ok())
  }

  /// Send a request; `complete` runs once with its outcome.
  ///
  /// Never blocks. Safe to call from any thread once `connect` has run;
  /// before that, it needs an ambient tokio runtime.
  pub(crate) fn send(&self, method: &str, params: Params, complete: Completion) -> u64 {
    let id = self.next_id();
    let Some(runtime) = self.runtime() else {
      complete(Err(XbmcError::TransportUnavailable(
        "no tokio runtime to drive the request".to_string(),
      )));
      return id;
    };
    let request = Request::new(id, method, params);
    let body = match serde_json::to_string(&request) {
      Ok(body) => body,
      Err(e) => {
        complete(Err(e.into()));
        return id;
      }
    };

    if self.socket.state() == ConnectionState::Open {
      log::debug!("Sending {} (id {}) over socket", method, id);
      self.router.register(id, method, Channel::Socket, complete);
      self.arm_timeout(&runtime, id);
      if let Err(e) = self.socket.send(body) {
        self.router.complete(id, Err(e));
      }
      return id;
    }

    let Some(http) = self.http.clone() else {
      complete(Err(XbmcError::TransportUnavailable(
        "socket is not open and HTTP fallback is disabled".to_string(),
      )));
      return id;
    };

    log::debug!("Sending {} (id {}) over HTTP {}", method, id, http.url());
    self.router.register(id, method, Channel::Http, complete);
    self.arm_timeout(&runtime, id);
    let router = self.router.clone();
    runtime.spawn(async move {
      let outcome = match http.post(body).await {
        Ok(text) => {
          router.route(&text);
          // The response is the only reply this request will get
          Err(XbmcError::ProtocolMismatch(format!(
            "HTTP response did not answer request id {}",
            id
          )))
        }
        Err(e) => Err(e),
      };
      router.complete(id, outcome);
    });
    id
  }

  /// Send a request and wait for its outcome.
  pub async fn call(&self, method: &str, params: Params) -> Result<Value> {
    let (tx, rx) = oneshot::channel();
    self.send(
      method,
      params,
      Box::new(move |outcome| {
        let _ = tx.send(outcome);
      }),
    );
    rx.await
      .map_err(|_| XbmcError::TransportUnavailable("reply channel dropped".to_string()))?
  }

  fn arm_timeout(&self, runtime: &Handle, id: u64) {
    let Some(timeout) = self.request_timeout else {
      return;
    };
    let router = self.router.clone();
    runtime.spawn(async move {
      tokio::time::sleep(timeout).await;
      router.expire(id);
    });
  }
}
