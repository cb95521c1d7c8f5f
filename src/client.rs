//! High-level XBMC client.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_channel::Receiver;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::call::PreparedCall;
use crate::config::ClientConfig;
use crate::error::{Result, XbmcError};
use crate::handlers::{DefaultHandlers, Handlers};
use crate::methods::{
  Addons, Application, AudioLibrary, Files, Gui, JsonRpc, Method, Params, Player, VideoLibrary,
};
use crate::rpc::{keepalive, ConnectionState, Notification, Transport};

/// Client for one XBMC server. Owns its transport, keep-alive task and
/// default handlers.
pub struct XbmcClient {
  config: ClientConfig,
  transport: Arc<Transport>,
  initialized: AtomicBool,
  keepalive: Mutex<Option<(CancellationToken, JoinHandle<()>)>>,
}

/// Builder for clients with custom default handlers.
pub struct ClientBuilder {
  config: ClientConfig,
  handlers: DefaultHandlers,
}

impl ClientBuilder {
  /// Replace the handler reporting results of calls without a success
  /// handler (only consulted in verbose mode).
  pub fn on_default_success(mut self, f: impl Fn(&Value) + Send + Sync + 'static) -> Self {
    self.handlers = self.handlers.with_success(f);
    self
  }

  /// Replace the handler reporting errors of calls without an error handler.
  pub fn on_default_error(mut self, f: impl Fn(&XbmcError) + Send + Sync + 'static) -> Self {
    self.handlers = self.handlers.with_error(f);
    self
  }

  pub fn build(self) -> Result<XbmcClient> {
    self.config.validate()?;
    let transport = Transport::new(&self.config, self.handlers)?;
    Ok(XbmcClient {
      config: self.config,
      transport: Arc::new(transport),
      initialized: AtomicBool::new(false),
      keepalive: Mutex::new(None),
    })
  }
}

impl XbmcClient {
  /// Create a client with the default (logging) handlers.
  pub fn new(config: ClientConfig) -> Result<Self> {
    Self::builder(config).build()
  }

  pub fn builder(config: ClientConfig) -> ClientBuilder {
    let handlers = DefaultHandlers::new(config.verbose);
    ClientBuilder { config, handlers }
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  /// Open the socket and start the keep-alive.
  ///
  /// If the socket cannot be opened and HTTP fallback is enabled, the client
  /// still initializes and sends every call over HTTP.
  pub async fn connect(&self) -> Result<()> {
    let url = self.config.socket_url();
    match self.transport.connect().await {
      Ok(()) => log::info!("Connected to {}", url),
      Err(e) if self.config.http_fallback => {
        log::warn!(
          "Socket connection to {} failed ({}), falling back to {}",
          url,
          e,
          self.config.http_url()
        );
      }
      Err(e) => return Err(e),
    }

    self.initialized.store(true, Ordering::SeqCst);
    self.start_keepalive();
    Ok(())
  }

  /// Stop the keep-alive and close the socket. Calls after this go over HTTP
  /// when fallback is enabled.
  pub async fn close(&self) {
    self.stop_keepalive();
    self.transport.disconnect().await;
    log::info!("XBMC client closed");
  }

  fn start_keepalive(&self) {
    self.stop_keepalive();
    let cancel = CancellationToken::new();
    let handle = keepalive::spawn(
      self.transport.clone(),
      self.config.ping_interval(),
      self.config.suppress_ping_errors,
      cancel.clone(),
    );
    *self.keepalive.lock() = Some((cancel, handle));
  }

  fn stop_keepalive(&self) {
    if let Some((cancel, _handle)) = self.keepalive.lock().take() {
      cancel.cancel();
    }
  }

  pub fn is_initialized(&self) -> bool {
    self.initialized.load(Ordering::SeqCst)
  }

  pub fn connection_state(&self) -> ConnectionState {
    self.transport.state()
  }

  /// Number of calls waiting for a reply.
  pub fn pending_calls(&self) -> usize {
    self.transport.pending_count()
  }

  /// Server notifications (`Player.OnPlay`, `VideoLibrary.OnUpdate`, ...).
  /// Only delivered over the socket.
  pub fn notifications(&self) -> Receiver<Notification> {
    self.transport.notifications()
  }

  pub fn handlers(&self) -> &DefaultHandlers {
    self.transport.handlers()
  }

  /// Validate `params` against `method` and prepare the call.
  pub fn prepare(&self, method: &Method, params: Params) -> Result<PreparedCall> {
    let params = method.bind(params)?;
    self.ensure_initialized()?;
    Ok(PreparedCall::new(self.transport.clone(), method.name, params))
  }

  /// Positional form of [`XbmcClient::prepare`].
  pub fn prepare_positional(
    &self,
    method: &Method,
    args: Vec<Option<Value>>,
  ) -> Result<PreparedCall> {
    let params = method.bind_positional(args)?;
    self.ensure_initialized()?;
    Ok(PreparedCall::new(self.transport.clone(), method.name, params))
  }

  /// Call an arbitrary method with arbitrary params, bypassing the schema.
  ///
  /// Requires `allow_direct_access`.
  pub fn custom(&self, method: impl Into<String>, params: Params) -> Result<PreparedCall> {
    if !self.config.allow_direct_access {
      return Err(XbmcError::DirectAccessDisabled);
    }
    self.ensure_initialized()?;
    Ok(PreparedCall::new(self.transport.clone(), method, params))
  }

  /// Callback form of [`XbmcClient::custom`]; returns as soon as the request
  /// is handed to the transport.
  pub fn custom_with(
    &self,
    method: impl Into<String>,
    params: Params,
    handlers: Handlers,
  ) -> Result<()> {
    self.custom(method, params)?.dispatch(handlers);
    Ok(())
  }

  fn ensure_initialized(&self) -> Result<()> {
    if self.is_initialized() {
      Ok(())
    } else {
      Err(XbmcError::ClientNotInitialized)
    }
  }

  pub fn jsonrpc(&self) -> JsonRpc<'_> {
    JsonRpc::new(self)
  }

  pub fn video_library(&self) -> VideoLibrary<'_> {
    VideoLibrary::new(self)
  }

  pub fn audio_library(&self) -> AudioLibrary<'_> {
    AudioLibrary::new(self)
  }

  pub fn files(&self) -> Files<'_> {
    Files::new(self)
  }

  pub fn application(&self) -> Application<'_> {
    Application::new(self)
  }

  pub fn gui(&self) -> Gui<'_> {
    Gui::new(self)
  }

  pub fn addons(&self) -> Addons<'_> {
    Addons::new(self)
  }

  pub fn player(&self) -> Player<'_> {
    Player::new(self)
  }
}

impl Drop for XbmcClient {
  fn drop(&mut self) {
    self.stop_keepalive();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::methods::video_library;
  use serde_json::json;

  fn client(config: ClientConfig) -> XbmcClient {
    XbmcClient::new(config).unwrap()
  }

  #[test]
  fn test_rejects_invalid_config() {
    assert!(matches!(
      XbmcClient::new(ClientConfig::default().with_hostname("")),
      Err(XbmcError::InvalidConfig(_))
    ));
  }

  #[test]
  fn test_calls_before_connect_fail_synchronously() {
    let client = client(ClientConfig::default());
    assert!(!client.is_initialized());
    assert_eq!(client.connection_state(), ConnectionState::Unconnected);
    assert!(matches!(
      client.video_library().get_movies(Params::new()),
      Err(XbmcError::ClientNotInitialized)
    ));
  }

  #[test]
  fn test_set_episode_details_without_id_fails_first() {
    let client = client(ClientConfig::default());
    let err = client
      .video_library()
      .set_episode_details(Params::new().with("title", "Pilot"))
      .unwrap_err();
    assert!(matches!(
      err,
      XbmcError::MissingRequiredParameter {
        method: "VideoLibrary.SetEpisodeDetails",
        param: "episodeid"
      }
    ));
    assert_eq!(client.pending_calls(), 0);
  }

  #[test]
  fn test_custom_requires_direct_access() {
    let client = client(ClientConfig::default());
    assert!(matches!(
      client.custom("Input.Home", Params::new()),
      Err(XbmcError::DirectAccessDisabled)
    ));

    let client = self::client(ClientConfig::default().with_direct_access(true));
    assert!(matches!(
      client.custom("Input.Home", Params::new()),
      Err(XbmcError::ClientNotInitialized)
    ));
  }

  #[test]
  fn test_prepared_request_round_trip() {
    let client = client(ClientConfig::default().with_http_fallback(true));
    client.initialized.store(true, Ordering::SeqCst);

    let call = client
      .video_library()
      .get_movies(
        Params::new()
          .with("properties", json!(["title", "year"]))
          .with("limits", json!({"start": 0, "end": 10})),
      )
      .unwrap();
    let wire = serde_json::to_string(&call.request(42)).unwrap();
    let parsed: crate::rpc::Request = serde_json::from_str(&wire).unwrap();

    assert_eq!(parsed.method, "VideoLibrary.GetMovies");
    assert_eq!(parsed.id, 42);
    assert_eq!(parsed.jsonrpc, "2.0");
    let mut keys: Vec<_> = parsed.params.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["limits", "properties"]);
  }

  #[test]
  fn test_positional_form_converges_on_same_call() {
    let client = client(ClientConfig::default());
    client.initialized.store(true, Ordering::SeqCst);

    let positional = client
      .prepare_positional(
        &video_library::GET_MOVIE_DETAILS,
        vec![Some(json!(12)), Some(json!(["title"]))],
      )
      .unwrap();
    let object = client
      .video_library()
      .get_movie_details(
        Params::new()
          .with("properties", json!(["title"]))
          .with("movieid", 12),
      )
      .unwrap();
    assert_eq!(positional.request(1), object.request(1));
  }
}
