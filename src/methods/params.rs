//! Keyed parameter mapping sent as `params`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, XbmcError};

/// Named call parameters.
///
/// A key that was never set is absent from the wire request; a key set to
/// `Value::Null` is sent as an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
  pub fn new() -> Self {
    Self::default()
  }

  /// Set `key` to `value`.
  pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.0.insert(key.into(), value.into());
    self
  }

  /// Set `key` only when `value` is `Some`.
  pub fn with_opt<V: Into<Value>>(self, key: impl Into<String>, value: Option<V>) -> Self {
    match value {
      Some(value) => self.with(key, value),
      None => self,
    }
  }

  /// Set `key` to an explicit `null`.
  pub fn with_null(self, key: impl Into<String>) -> Self {
    self.with(key, Value::Null)
  }

  pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
    self.0.insert(key.into(), value.into())
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.0.get(key)
  }

  pub fn remove(&mut self, key: &str) -> Option<Value> {
    self.0.remove(key)
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.0.contains_key(key)
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn into_inner(self) -> Map<String, Value> {
    self.0
  }

  /// Build from a JSON value, which must be an object.
  pub fn from_value(value: Value) -> Result<Self> {
    match value {
      Value::Object(map) => Ok(Self(map)),
      other => Err(XbmcError::InvalidArgument(format!(
        "params must be a JSON object, got {}",
        other
      ))),
    }
  }
}

impl From<Map<String, Value>> for Params {
  fn from(map: Map<String, Value>) -> Self {
    Self(map)
  }
}

impl From<Params> for Value {
  fn from(params: Params) -> Self {
    Value::Object(params.0)
  }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
  }
}
