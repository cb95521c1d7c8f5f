//! Request/response fallback over HTTP POST.

use std::time::Duration;

use reqwest::{header, Client};

use crate::error::{Result, XbmcError};

/// HTTP JSON-RPC endpoint; each call is an independent POST.
#[derive(Clone)]
pub(crate) struct HttpChannel {
  http: Client,
  url: String,
}

impl HttpChannel {
  pub fn new(url: String, timeout: Option<Duration>) -> Result<Self> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
      builder = builder.timeout(timeout);
    }
    Ok(Self {
      http: builder.build()?,
      url,
    })
  }

  pub fn url(&self) -> &str {
    &self.url
  }

  /// POST a serialized request and return the raw reply body.
  pub async fn post(&self, body: String) -> Result<String> {
    let response = self
      .http
      .post(&self.url)
      .header(header::CONTENT_TYPE, "application/json")
      .body(body)
      .send()
      .await
      .map_err(|e| {
        if e.is_connect() {
          XbmcError::TransportUnavailable(format!("{}: {}", self.url, e))
        } else {
          XbmcError::Http(e)
        }
      })?;

    if !response.status().is_success() {
      return Err(XbmcError::HttpStatus(response.status().as_u16()));
    }

    Ok(response.text().await?)
  }
}
