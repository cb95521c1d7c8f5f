//! Pending call table and reply routing.

use std::collections::HashMap;

use async_channel::{Receiver, Sender};
use parking_lot::Mutex;
use serde_json::Value;

use super::protocol::{Message, Notification};
use crate::error::{Result, XbmcError};
use crate::handlers::{Completion, DefaultHandlers};

/// Notifications buffered before the oldest subscriber falls behind.
const NOTIFICATION_BUFFER: usize = 64;

/// Channel a request went out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
  Socket,
  Http,
}

/// Call waiting for its reply.
struct PendingCall {
  method: String,
  channel: Channel,
  complete: Completion,
}

/// Correlates replies to outstanding calls by id.
pub(crate) struct Router {
  pending: Mutex<HashMap<u64, PendingCall>>,
  handlers: DefaultHandlers,
  notify_tx: Sender<Notification>,
  notify_rx: Receiver<Notification>,
}

impl Router {
  pub fn new(handlers: DefaultHandlers) -> Self {
    let (notify_tx, notify_rx) = async_channel::bounded(NOTIFICATION_BUFFER);
    Self {
      pending: Mutex::new(HashMap::new()),
      handlers,
      notify_tx,
      notify_rx,
    }
  }

  pub fn handlers(&self) -> &DefaultHandlers {
    &self.handlers
  }

  pub fn notifications(&self) -> Receiver<Notification> {
    self.notify_rx.clone()
  }

  pub fn register(&self, id: u64, method: &str, channel: Channel, complete: Completion) {
    let previous = self.pending.lock().insert(
      id,
      PendingCall {
        method: method.to_string(),
        channel,
        complete,
      },
    );
    debug_assert!(previous.is_none(), "request id {} reused while pending", id);
  }

  #[cfg(test)]
  pub fn is_pending(&self, id: u64) -> bool {
    self.pending.lock().contains_key(&id)
  }

  pub fn pending_count(&self) -> usize {
    self.pending.lock().len()
  }

  /// Remove a pending call and hand it its outcome.
  ///
  /// Returns false if the id was not pending.
  pub fn complete(&self, id: u64, outcome: Result<Value>) -> bool {
    let call = self.pending.lock().remove(&id);
    match call {
      Some(call) => {
        (call.complete)(outcome);
        true
      }
      None => false,
    }
  }

  /// Fail a pending call with a timeout, if it is still waiting.
  pub fn expire(&self, id: u64) {
    let call = self.pending.lock().remove(&id);
    if let Some(call) = call {
      log::warn!("Request {} ({}) timed out", id, call.method);
      (call.complete)(Err(XbmcError::Timeout {
        id,
        method: call.method,
      }));
    }
  }

  /// Fail every call that went out on `channel`.
  pub fn fail_channel(&self, channel: Channel, reason: &str) {
    let failed: Vec<(u64, PendingCall)> = {
      let mut pending = self.pending.lock();
      let ids: Vec<u64> = pending
        .iter()
        .filter(|(_, call)| call.channel == channel)
        .map(|(id, _)| *id)
        .collect();
      ids
        .into_iter()
        .filter_map(|id| pending.remove(&id).map(|call| (id, call)))
        .collect()
    };

    for (id, call) in failed {
      log::debug!("Failing request {} ({}): {}", id, call.method, reason);
      (call.complete)(Err(XbmcError::TransportUnavailable(reason.to_string())));
    }
  }

  /// Route a text frame received from the server.
  pub fn route(&self, text: &str) {
    match Message::parse(text) {
      Ok(Message::Reply { id: Some(id), body }) => {
        let outcome = body.map_err(XbmcError::Remote);
        if !self.complete(id, outcome) {
          log::warn!("Dropping reply for unknown request id {}", id);
          self
            .handlers
            .report_error(&XbmcError::ProtocolMismatch(format!(
              "no pending call for id {}",
              id
            )));
        }
      }
      Ok(Message::Reply { id: None, body }) => {
        let detail = match body {
          Ok(_) => "reply without id".to_string(),
          Err(e) => format!("reply without id: {} ({})", e.message, e.code),
        };
        log::warn!("{}", detail);
        self.handlers.report_error(&XbmcError::ProtocolMismatch(detail));
      }
      Ok(Message::Malformed { id, reason }) => {
        log::warn!("Malformed reply for request {}: {}", id, reason);
        let error = XbmcError::ProtocolMismatch(reason);
        let call = self.pending.lock().remove(&id);
        match call {
          Some(call) => (call.complete)(Err(error)),
          None => self.handlers.report_error(&error),
        }
      }
      Ok(Message::Notification(notification)) => {
        log::debug!("Received notification {}", notification.method);
        if self.notify_tx.try_send(notification).is_err() {
          log::debug!("Notification buffer full, dropping");
        }
      }
      Err(e) => {
        log::warn!("Failed to parse server message: {} - {}", e, text);
        self.handlers.report_error(&e);
      }
    }
  }
}
