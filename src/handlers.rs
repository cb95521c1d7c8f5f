//! Completion handlers for callback-style calls.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{Result, XbmcError};

pub type SuccessFn = Arc<dyn Fn(&Value) + Send + Sync>;
pub type ErrorFn = Arc<dyn Fn(&XbmcError) + Send + Sync>;

/// One-shot completion stored in the pending call table.
pub(crate) type Completion = Box<dyn FnOnce(Result<Value>) + Send + 'static>;

/// Fallback handlers used when a caller does not supply its own.
///
/// Owned by a client; every client has its own pair.
#[derive(Clone)]
pub struct DefaultHandlers {
  verbose: bool,
  success: SuccessFn,
  error: ErrorFn,
}

fn log_success(result: &Value) {
  log::info!("XBMC API: {}", result);
}

fn log_error(error: &XbmcError) {
  log::error!("XBMC API: {}", error);
}

impl DefaultHandlers {
  pub fn new(verbose: bool) -> Self {
    Self {
      verbose,
      success: Arc::new(log_success),
      error: Arc::new(log_error),
    }
  }

  pub fn with_success(mut self, f: impl Fn(&Value) + Send + Sync + 'static) -> Self {
    self.success = Arc::new(f);
    self
  }

  pub fn with_error(mut self, f: impl Fn(&XbmcError) + Send + Sync + 'static) -> Self {
    self.error = Arc::new(f);
    self
  }

  pub fn is_verbose(&self) -> bool {
    self.verbose
  }

  /// Report a result nobody asked for. No-op unless verbose.
  pub fn report_success(&self, result: &Value) {
    if self.verbose {
      (self.success)(result);
    }
  }

  /// Report an error nobody asked for. Always reported.
  pub fn report_error(&self, error: &XbmcError) {
    (self.error)(error);
  }
}

impl fmt::Debug for DefaultHandlers {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DefaultHandlers")
      .field("verbose", &self.verbose)
      .finish_non_exhaustive()
  }
}

/// Caller-supplied handlers for a single call. Missing ones fall back to the
/// client's [`DefaultHandlers`].
#[derive(Default)]
pub struct Handlers {
  success: Option<Box<dyn FnOnce(Value) + Send + 'static>>,
  error: Option<Box<dyn FnOnce(XbmcError) + Send + 'static>>,
}

impl Handlers {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn on_success(mut self, f: impl FnOnce(Value) + Send + 'static) -> Self {
    self.success = Some(Box::new(f));
    self
  }

  pub fn on_error(mut self, f: impl FnOnce(XbmcError) + Send + 'static) -> Self {
    self.error = Some(Box::new(f));
    self
  }

  pub(crate) fn into_completion(self, defaults: DefaultHandlers) -> Completion {
    Box::new(move |outcome| match outcome {
      Ok(result) => match self.success {
        Some(f) => f(result),
        None => defaults.report_success(&result),
      },
      Err(error) => match self.error {
        Some(f) => f(error),
        None => defaults.report_error(&error),
      },
    })
  }
}

impl fmt::Debug for Handlers {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Handlers")
      .field("success", &self.success.is_some())
      .field("error", &self.error.is_some())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use std::sync::atomic::{AtomicUsize, Ordering};

  fn counting(verbose: bool) -> (DefaultHandlers, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let successes = Arc::new(AtomicUsize::new(0));
    let errors = Arc::new(AtomicUsize::new(0));
    let s = successes.clone();
    let e = errors.clone();
    let handlers = DefaultHandlers::new(verbose)
      .with_success(move |_| {
        s.fetch_add(1, Ordering::SeqCst);
      })
      .with_error(move |_| {
        e.fetch_add(1, Ordering::SeqCst);
      });
    (handlers, successes, errors)
  }

  #[test]
  fn test_default_success_only_when_verbose() {
    let (quiet, quiet_count, _) = counting(false);
    quiet.report_success(&json!("OK"));
    assert_eq!(quiet_count.load(Ordering::SeqCst), 0);

    let (loud, loud_count, _) = counting(true);
    loud.report_success(&json!("OK"));
    assert_eq!(loud_count.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn test_default_error_always_reported() {
    let (quiet, _, errors) = counting(false);
    quiet.report_error(&XbmcError::ProtocolMismatch("x".into()));
    assert_eq!(errors.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn test_explicit_handlers_bypass_defaults() {
    let (defaults, successes, errors) = counting(true);
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_clone = seen.clone();
    let completion = Handlers::new()
      .on_error(move |_| {
        seen_clone.fetch_add(1, Ordering::SeqCst);
      })
      .into_completion(defaults.clone());
    completion(Err(XbmcError::DirectAccessDisabled));
    assert_eq!(seen.load(Ordering::SeqCst), 1);
    assert_eq!(errors.load(Ordering::SeqCst), 0);

    // Success was not supplied, so the default one runs
    let completion = Handlers::new()
      .on_error(|_| {})
      .into_completion(defaults);
    completion(Ok(json!("OK")));
    assert_eq!(successes.load(Ordering::SeqCst), 1);
  }
}
