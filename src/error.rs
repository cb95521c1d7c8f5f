//! Client error types.

use thiserror::Error;

use crate::rpc::RpcError;

/// Errors that can occur when talking to an XBMC server.
#[derive(Debug, Error)]
pub enum XbmcError {
  #[error("Client not initialized: call connect() first")]
  ClientNotInitialized,

  #[error("{method}: required parameter `{param}` is not provided")]
  MissingRequiredParameter {
    method: &'static str,
    param: &'static str,
  },

  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  #[error("Direct access is disabled (set allowDirectAccess)")]
  DirectAccessDisabled,

  #[error("Transport unavailable: {0}")]
  TransportUnavailable(String),

  #[error("Remote error {}: {}", .0.code, .0.message)]
  Remote(RpcError),

  #[error("Protocol mismatch: {0}")]
  ProtocolMismatch(String),

  #[error("Request {id} ({method}) timed out")]
  Timeout { id: u64, method: String },

  #[error("HTTP request failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("HTTP error: status {0}")]
  HttpStatus(u16),

  #[error("WebSocket error: {0}")]
  WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

  #[error("JSON serialization error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, XbmcError>;
