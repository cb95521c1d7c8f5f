//! `JSONRPC.*`: protocol-level introspection and the keep-alive ping.

namespace! {
  /// Protocol-level calls.
  JsonRpc {
    introspect => INTROSPECT = "JSONRPC.Introspect" [] ["getdescriptions", "getmetadata", "filterbytransport", "filter"];
    permission => PERMISSION = "JSONRPC.Permission" [] [];
    /// No-argument call; also used by the keep-alive task.
    ping => PING = "JSONRPC.Ping" [] [];
    version => VERSION = "JSONRPC.Version" [] [];
  }
}
