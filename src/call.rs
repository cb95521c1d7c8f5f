//! A validated call, ready to be sent.

use std::future::IntoFuture;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::error::Result;
use crate::handlers::Handlers;
use crate::methods::Params;
use crate::rpc::{Request, Transport};

/// Result of a façade or `custom` call whose arguments already passed
/// validation.
///
/// Either `.await` it for the result, or [`dispatch`](PreparedCall::dispatch)
/// it with callback handlers.
#[must_use = "a prepared call does nothing until awaited or dispatched"]
pub struct PreparedCall {
  transport: Arc<Transport>,
  method: String,
  params: Params,
}

impl PreparedCall {
  pub(crate) fn new(transport: Arc<Transport>, method: impl Into<String>, params: Params) -> Self {
    Self {
      transport,
      method: method.into(),
      params,
    }
  }

  pub fn method(&self) -> &str {
    &self.method
  }

  pub fn params(&self) -> &Params {
    &self.params
  }

  /// Wire request this call would produce with the given id.
  pub fn request(&self, id: u64) -> Request {
    Request::new(id, self.method.clone(), self.params.clone())
  }

  /// Send and return immediately. Missing handlers fall back to the client's
  /// defaults.
  ///
  /// Does not need to run inside a tokio runtime: the request is driven on
  /// the runtime the client connected from.
  pub fn dispatch(self, handlers: Handlers) {
    let completion = handlers.into_completion(self.transport.handlers().clone());
    self.transport.send(&self.method, self.params, completion);
  }

  /// Send and wait for the result.
  pub async fn send(self) -> Result<Value> {
    self.transport.call(&self.method, self.params).await
  }
}

impl IntoFuture for PreparedCall {
  type Output = Result<Value>;
  type IntoFuture = BoxFuture<'static, Result<Value>>;

  fn into_future(self) -> Self::IntoFuture {
    Box::pin(self.send())
  }
}

impl std::fmt::Debug for PreparedCall {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PreparedCall")
      .field("method", &self.method)
      .field("params", &self.params)
      .finish()
  }
}
