//! Periodic `JSONRPC.Ping` keeping the socket from being dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::transport::Transport;
use crate::handlers::{Completion, Handlers};
use crate::methods::{jsonrpc, Params};

/// Spawn the keep-alive task. It stops when `cancel` fires.
pub(crate) fn spawn(
  transport: Arc<Transport>,
  period: Duration,
  suppress_errors: bool,
  cancel: CancellationToken,
) -> JoinHandle<()> {
  tokio::spawn(async move {
    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
      tokio::select! {
        _ = cancel.cancelled() => {
          log::debug!("Keep-alive stopped");
          break;
        }
        _ = ticker.tick() => {
          transport.send(jsonrpc::PING.name, Params::new(), ping_completion(&transport, suppress_errors));
        }
      }
    }
  })
}

fn ping_completion(transport: &Transport, suppress_errors: bool) -> Completion {
  let defaults = transport.handlers().clone();
  if suppress_errors {
    Handlers::new()
      .on_error(|e| log::debug!("Keep-alive failed: {}", e))
      .into_completion(defaults)
  } else {
    Handlers::new().into_completion(defaults)
  }
}
