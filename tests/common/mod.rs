//! In-process mock XBMC endpoints.

#![allow(dead_code)]

use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use xbmc_rpc::ClientConfig;

/// Decides which frames to send back after each received request.
pub type Responder = Box<dyn FnMut(&Value) -> Vec<Value> + Send>;

pub struct MockServer {
  pub port: u16,
  /// Every request the server received, in arrival order.
  pub requests: async_channel::Receiver<Value>,
  handle: JoinHandle<()>,
}

impl Drop for MockServer {
  fn drop(&mut self) {
    self.handle.abort();
  }
}

/// Reply `{"result": result}` to every request.
pub fn reply_with(result: Value) -> Responder {
  Box::new(move |req| vec![json!({"jsonrpc": "2.0", "id": req["id"], "result": result})])
}

/// Reply `"pong"` to pings and echo the params of everything else.
pub fn echo() -> Responder {
  Box::new(|req| {
    let result = if req["method"] == "JSONRPC.Ping" {
      json!("pong")
    } else {
      req["params"].clone()
    };
    vec![json!({"jsonrpc": "2.0", "id": req["id"], "result": result})]
  })
}

/// Never reply.
pub fn silent() -> Responder {
  Box::new(|_| Vec::new())
}

/// Accept a single WebSocket client and answer it with `responder`.
pub async fn spawn_ws(mut responder: Responder) -> MockServer {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let port = listener.local_addr().unwrap().port();
  let (tx, requests) = async_channel::unbounded();

  let handle = tokio::spawn(async move {
    let (stream, _) = listener.accept().await.unwrap();
    let ws = tokio_tungstenite::accept_async(stream).await.unwrap();
    let (mut write, mut read) = ws.split();

    while let Some(Ok(msg)) = read.next().await {
      let Message::Text(text) = msg else { continue };
      let request: Value = serde_json::from_str(&text).unwrap();
      let replies = responder(&request);
      let _ = tx.send(request).await;
      for reply in replies {
        if write.send(Message::Text(reply.to_string().into())).await.is_err() {
          return;
        }
      }
    }
  });

  MockServer {
    port,
    requests,
    handle,
  }
}

/// Accept a single WebSocket client, then close the connection right away.
pub async fn spawn_ws_closing() -> MockServer {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let port = listener.local_addr().unwrap().port();
  let (_tx, requests) = async_channel::unbounded();

  let handle = tokio::spawn(async move {
    let (stream, _) = listener.accept().await.unwrap();
    let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
    let _ = ws.close(None).await;
  });

  MockServer {
    port,
    requests,
    handle,
  }
}

/// Serve HTTP JSON-RPC POSTs with `responder` (first reply frame is the body).
pub async fn spawn_http(mut responder: Responder) -> MockServer {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let port = listener.local_addr().unwrap().port();
  let (tx, requests) = async_channel::unbounded();

  let handle = tokio::spawn(async move {
    loop {
      let Ok((stream, _)) = listener.accept().await else {
        return;
      };
      let mut reader = BufReader::new(stream);

      let mut content_length = 0usize;
      loop {
        let mut line = String::new();
        if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
          break;
        }
        let line = line.trim_end();
        if line.is_empty() {
          break;
        }
        if let Some((name, value)) = line.split_once(':') {
          if name.eq_ignore_ascii_case("content-length") {
            content_length = value.trim().parse().unwrap_or(0);
          }
        }
      }

      let mut body = vec![0u8; content_length];
      if reader.read_exact(&mut body).await.is_err() {
        continue;
      }
      let request: Value = serde_json::from_slice(&body).unwrap();
      let reply = responder(&request)
        .into_iter()
        .next()
        .unwrap_or(Value::Null)
        .to_string();
      let _ = tx.send(request).await;

      let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.len(),
        reply
      );
      let mut stream = reader.into_inner();
      let _ = stream.write_all(response.as_bytes()).await;
      let _ = stream.shutdown().await;
    }
  });

  MockServer {
    port,
    requests,
    handle,
  }
}

/// A port nothing listens on.
pub async fn unused_port() -> u16 {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  listener.local_addr().unwrap().port()
}

/// Config pointing at local mock ports with a keep-alive slow enough to stay
/// out of the way.
pub fn local_config(ws_port: u16, http_port: u16) -> ClientConfig {
  ClientConfig::default()
    .with_hostname("127.0.0.1")
    .with_port(ws_port)
    .with_http_port(http_port)
    .with_ping_interval_ms(60_000)
}
