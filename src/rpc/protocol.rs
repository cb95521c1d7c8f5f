//! JSON-RPC 2.0 wire types.
//!
//! Reference: https://kodi.wiki/view/JSON-RPC_API/v6

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::XbmcError;
use crate::methods::Params;

/// Protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request sent to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
  pub jsonrpc: String,
  pub method: String,
  pub params: Params,
  pub id: u64,
}

impl Request {
  pub fn new(id: u64, method: impl Into<String>, params: Params) -> Self {
    Self {
      jsonrpc: JSONRPC_VERSION.to_string(),
      method: method.into(),
      params,
      id,
    }
  }
}

/// Error object carried by a failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
  pub code: i64,
  pub message: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data: Option<Value>,
}

/// Server-pushed message without an id (e.g. `Player.OnPlay`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
  pub method: String,
  #[serde(default)]
  pub params: Value,
}

/// Message received from the server (either a reply or a notification).
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
  Reply {
    id: Option<u64>,
    body: Result<Value, RpcError>,
  },
  Notification(Notification),
  /// Reply to a known id whose body could not be understood.
  Malformed { id: u64, reason: String },
}

impl Message {
  /// Parse a JSON text frame from the server.
  ///
  /// `result: null` is a valid success, so presence of the keys is checked on
  /// the raw object rather than through `Option` fields.
  pub fn parse(text: &str) -> Result<Self, XbmcError> {
    let value: Value = serde_json::from_str(text)
      .map_err(|e| XbmcError::ProtocolMismatch(format!("unparsable message: {}", e)))?;
    let Value::Object(mut object) = value else {
      return Err(XbmcError::ProtocolMismatch(
        "message is not a JSON object".to_string(),
      ));
    };

    let id = match object.get("id") {
      None | Some(Value::Null) => None,
      Some(raw) => Some(raw.as_u64().ok_or_else(|| {
        XbmcError::ProtocolMismatch(format!("unsupported id {}", raw))
      })?),
    };

    if let Some(error) = object.remove("error") {
      let error: RpcError = match serde_json::from_value(error) {
        Ok(error) => error,
        Err(e) => {
          let reason = format!("malformed error object: {}", e);
          return match id {
            Some(id) => Ok(Message::Malformed { id, reason }),
            None => Err(XbmcError::ProtocolMismatch(reason)),
          };
        }
      };
      return Ok(Message::Reply {
        id,
        body: Err(error),
      });
    }

    if let Some(result) = object.remove("result") {
      return Ok(Message::Reply {
        id,
        body: Ok(result),
      });
    }

    if id.is_none() && object.contains_key("method") {
      let notification: Notification = serde_json::from_value(Value::Object(object))
        .map_err(|e| XbmcError::ProtocolMismatch(format!("malformed notification: {}", e)))?;
      return Ok(Message::Notification(notification));
    }

    let reason = "message carries neither result nor error".to_string();
    match id {
      Some(id) => Ok(Message::Malformed { id, reason }),
      None => Err(XbmcError::ProtocolMismatch(reason)),
    }
  }
}
