// WebSocket server exposing the query operations as JSON tool calls.
//
// Each text frame is one request, answered with one response frame on the
// same socket. The dataset is immutable after load, so every connection
// gets its own task and queries run with no shared mutable state.

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;
use tracing::{info, warn};

use crate::protocol::{Request, Response, ToolCall};
use crate::stats::dataset::Dataset;
use crate::stats::query;

/// Accept connections forever, spawning one task per client.
pub async fn run(
    listener: TcpListener,
    dataset: Arc<Dataset>,
    default_team: String,
) -> anyhow::Result<()> {
    let local_addr = listener.local_addr()?;
    info!("tool server listening on {local_addr}");

    loop {
        let (stream, addr) = listener.accept().await?;
        let dataset = dataset.clone();
        let default_team = default_team.clone();

        tokio::spawn(async move {
            let addr = addr.to_string();
            let ws_stream = match tokio_tungstenite::accept_async(stream).await {
                Ok(ws) => ws,
                Err(e) => {
                    warn!("WebSocket handshake failed for {addr}: {e}");
                    return;
                }
            };
            info!("client connected from {addr}");

            let (mut write, mut read) = ws_stream.split();
            while let Some(msg_result) = read.next().await {
                match msg_result {
                    Ok(Message::Text(text)) => {
                        let reply = dispatch(&text, &dataset, &default_team);
                        if write.send(Message::Text(reply.into())).await.is_err() {
                            break;
                        }
                    }
                    Ok(Message::Close(_)) => {
                        info!("client {addr} sent close frame");
                        break;
                    }
                    Err(e) => {
                        warn!("WebSocket error from {addr}: {e}");
                        break;
                    }
                    _ => {
                        // Ignore Binary, Ping, Pong, Frame variants.
                    }
                }
            }
        });
    }
}

/// Decode one request frame, run the operation, and serialize the reply.
///
/// This is a pure function of the frame and the dataset — the primary
/// unit-test target, exercised without opening sockets. Malformed frames
/// produce an error response, never a dropped connection.
pub fn dispatch(json: &str, dataset: &Dataset, default_team: &str) -> String {
    let response = match serde_json::from_str::<Request>(json) {
        Ok(req) => {
            let result = match &req.call {
                ToolCall::GetPlayerStats(args) => {
                    query::get_player_stats(dataset, default_team, args)
                }
                ToolCall::Leaderboard(args) => query::leaderboard(dataset, default_team, args),
                ToolCall::Teams => query::teams(dataset),
            };
            Response::ok(req.id, result)
        }
        Err(e) => {
            // Salvage the id for correlation when the frame is at least JSON.
            let id = serde_json::from_str::<serde_json::Value>(json)
                .ok()
                .and_then(|v| v.get("id").cloned());
            Response::err(id, format!("invalid request: {e}"))
        }
    };

    serde_json::to_string(&response)
        .unwrap_or_else(|e| format!(r#"{{"error":"response serialization failed: {e}"}}"#))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::stats::loader::load_batting_from_reader;

    const BATTING_CSV: &str = "\
Player,Pos,PA,HR,RBI,OPS+
Pete Alonso,*3,695,34,88,121
Francisco Lindor#,*6,689,33,91,137";

    fn dataset() -> Dataset {
        let mut batting = BTreeMap::new();
        batting.insert(
            "NYM".to_string(),
            load_batting_from_reader(BATTING_CSV.as_bytes(), "NYM").unwrap(),
        );
        Dataset::from_rows(batting, BTreeMap::new())
    }

    #[test]
    fn teams_roundtrip() {
        let reply = dispatch(r#"{"id": 1, "tool": "teams"}"#, &dataset(), "NYM");
        let v: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(v["id"], 1);
        assert_eq!(v["result"]["rows"][0], "NYM");
        assert!(v.get("error").is_none());
    }

    #[test]
    fn leaderboard_roundtrip() {
        let req = r#"{
            "id": "abc",
            "tool": "leaderboard",
            "arguments": {"table": "batting", "metric": "OPS+", "direction": "desc", "limit": 1}
        }"#;
        let reply = dispatch(req, &dataset(), "NYM");
        let v: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(v["id"], "abc");
        assert_eq!(v["result"]["rows"][0]["player"], "Francisco Lindor");
    }

    #[test]
    fn default_team_applied_when_omitted() {
        let req = r#"{
            "tool": "get_player_stats",
            "arguments": {"table": "batting", "player": "Pete Alonso", "columns": ["hr"]}
        }"#;
        let reply = dispatch(req, &dataset(), "NYM");
        let v: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(v["result"]["rows"][0]["hr"], 34.0);
    }

    #[test]
    fn malformed_json_yields_error_response() {
        let reply = dispatch("not json at all", &dataset(), "NYM");
        let v: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert!(v["error"].as_str().unwrap().contains("invalid request"));
        assert!(v.get("result").is_none());
    }

    #[test]
    fn unknown_tool_yields_error_with_id() {
        let reply = dispatch(r#"{"id": 9, "tool": "drop_tables"}"#, &dataset(), "NYM");
        let v: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(v["id"], 9);
        assert!(v["error"].is_string());
    }

    #[test]
    fn missing_required_argument_yields_error() {
        let req = r#"{"tool": "leaderboard", "arguments": {"table": "batting", "metric": "hr", "limit": 3}}"#;
        let reply = dispatch(req, &dataset(), "NYM");
        let v: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert!(v["error"].is_string());
    }

    #[tokio::test]
    async fn server_answers_requests_over_a_real_socket() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(run(listener, Arc::new(dataset()), "NYM".to_string()));

        let stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        let (mut ws, _) = tokio_tungstenite::client_async(format!("ws://{addr}"), stream)
            .await
            .unwrap();

        ws.send(Message::Text(r#"{"id": 1, "tool": "teams"}"#.into()))
            .await
            .unwrap();
        let reply = ws.next().await.unwrap().unwrap();
        let Message::Text(text) = reply else {
            panic!("expected a text frame, got {reply:?}");
        };
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["id"], 1);
        assert_eq!(v["result"]["rows"][0], "NYM");

        // A malformed frame gets an error response on the same socket.
        ws.send(Message::Text("not json".into())).await.unwrap();
        let reply = ws.next().await.unwrap().unwrap();
        let Message::Text(text) = reply else {
            panic!("expected a text frame, got {reply:?}");
        };
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(v["error"].is_string());

        server.abort();
    }
}
