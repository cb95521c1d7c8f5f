//! Async client for the XBMC/Kodi JSON-RPC API (v6).
//!
//! Calls go over a persistent WebSocket when it is open and fall back to HTTP
//! POST otherwise. Replies are matched to callers by request id.
//!
//! ```no_run
//! use serde_json::json;
//! use xbmc_rpc::{ClientConfig, Params, XbmcClient};
//!
//! # async fn run() -> xbmc_rpc::Result<()> {
//! let client = XbmcClient::new(ClientConfig::default().with_hostname("htpc"))?;
//! client.connect().await?;
//!
//! let movies = client
//!   .video_library()
//!   .get_movies(Params::new().with("properties", json!(["title", "year"])))?
//!   .await?;
//! println!("{}", movies);
//! # Ok(())
//! # }
//! ```

mod call;
mod client;
mod config;
mod error;
mod handlers;
pub mod methods;
pub mod rpc;

pub use call::PreparedCall;
pub use client::{ClientBuilder, XbmcClient};
pub use config::ClientConfig;
pub use error::{Result, XbmcError};
pub use handlers::{DefaultHandlers, ErrorFn, Handlers, SuccessFn};
pub use methods::{Method, Params};
pub use rpc::{ConnectionState, Notification};
