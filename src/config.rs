//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, XbmcError};

/// Options recognized when constructing a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
  /// Server host name.
  #[serde(default = "default_hostname")]
  pub hostname: String,

  /// WebSocket port.
  #[serde(default = "default_port")]
  pub port: u16,

  /// Port of the HTTP JSON-RPC endpoint.
  #[serde(default = "default_http_port")]
  pub http_port: u16,

  /// Path of the HTTP JSON-RPC endpoint.
  #[serde(default = "default_http_path")]
  pub http_path: String,

  /// Keep-alive ping period in milliseconds.
  #[serde(default = "default_ping_interval")]
  pub ping_interval_ms: u64,

  /// Per-request timeout in milliseconds (0 = wait forever).
  #[serde(default = "default_request_timeout")]
  pub request_timeout_ms: u64,

  /// Fall back to HTTP when the socket is not open.
  #[serde(default = "default_http_fallback")]
  pub http_fallback: bool,

  /// Enable `custom()` calls with arbitrary method names.
  #[serde(default)]
  pub allow_direct_access: bool,

  /// Report results of calls without an explicit success handler.
  #[serde(default)]
  pub verbose: bool,

  /// Do not report keep-alive failures to the default error handler.
  #[serde(default)]
  pub suppress_ping_errors: bool,
}

fn default_hostname() -> String {
  "localhost".to_string()
}

fn default_port() -> u16 {
  9090
}

fn default_http_port() -> u16 {
  8080
}

fn default_http_path() -> String {
  "/jsonrpc".to_string()
}

fn default_ping_interval() -> u64 {
  1000
}

fn default_request_timeout() -> u64 {
  5000
}

fn default_http_fallback() -> bool {
  true
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      hostname: default_hostname(),
      port: default_port(),
      http_port: default_http_port(),
      http_path: default_http_path(),
      ping_interval_ms: default_ping_interval(),
      request_timeout_ms: default_request_timeout(),
      http_fallback: default_http_fallback(),
      allow_direct_access: false,
      verbose: false,
      suppress_ping_errors: false,
    }
  }
}

impl ClientConfig {
  /// Parse a JSON configuration object and validate it.
  pub fn from_json(json: &str) -> Result<Self> {
    let config: Self = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  /// Validate configuration values.
  pub fn validate(&self) -> Result<()> {
    if self.hostname.trim().is_empty() {
      return Err(XbmcError::InvalidConfig("hostname cannot be empty".to_string()));
    }
    if self.port == 0 || self.http_port == 0 {
      return Err(XbmcError::InvalidConfig("ports must be non-zero".to_string()));
    }
    if !self.http_path.starts_with('/') {
      return Err(XbmcError::InvalidConfig(
        "httpPath must start with '/'".to_string(),
      ));
    }
    if self.ping_interval_ms < 100 {
      return Err(XbmcError::InvalidConfig(
        "pingIntervalMs must be at least 100".to_string(),
      ));
    }
    Ok(())
  }

  pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
    self.hostname = hostname.into();
    self
  }

  pub fn with_port(mut self, port: u16) -> Self {
    self.port = port;
    self
  }

  pub fn with_http_port(mut self, port: u16) -> Self {
    self.http_port = port;
    self
  }

  pub fn with_ping_interval_ms(mut self, ms: u64) -> Self {
    self.ping_interval_ms = ms;
    self
  }

  pub fn with_request_timeout_ms(mut self, ms: u64) -> Self {
    self.request_timeout_ms = ms;
    self
  }

  pub fn with_http_fallback(mut self, enabled: bool) -> Self {
    self.http_fallback = enabled;
    self
  }

  pub fn with_direct_access(mut self, enabled: bool) -> Self {
    self.allow_direct_access = enabled;
    self
  }

  pub fn with_verbose(mut self, enabled: bool) -> Self {
    self.verbose = enabled;
    self
  }

  pub fn with_suppressed_ping_errors(mut self, suppressed: bool) -> Self {
    self.suppress_ping_errors = suppressed;
    self
  }

  /// WebSocket endpoint, `ws://host:port/`.
  pub fn socket_url(&self) -> String {
    format!("ws://{}:{}/", self.hostname, self.port)
  }

  /// HTTP endpoint, `http://host:http_port/jsonrpc` by default.
  pub fn http_url(&self) -> String {
    format!("http://{}:{}{}", self.hostname, self.http_port, self.http_path)
  }

  pub fn ping_interval(&self) -> Duration {
    Duration::from_millis(self.ping_interval_ms)
  }

  pub fn request_timeout(&self) -> Option<Duration> {
    (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
  }
}
