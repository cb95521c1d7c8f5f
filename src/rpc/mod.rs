//! JSON-RPC transport to the media center.
//!
//! Architecture:
//! - `protocol.rs` - Request/reply/notification wire types
//! - `router.rs` - Pending call table, reply correlation by id
//! - `socket.rs` - Persistent WebSocket channel
//! - `http.rs` - HTTP POST fallback channel
//! - `transport.rs` - Id allocation and channel selection
//! - `keepalive.rs` - Periodic ping

pub(crate) mod keepalive;
mod http;
mod protocol;
mod router;
mod socket;
mod transport;

pub use protocol::{Message, Notification, Request, RpcError, JSONRPC_VERSION};
pub use router::Channel;
pub use socket::ConnectionState;
pub use transport::Transport;
