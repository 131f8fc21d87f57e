//! JSON messages of a shared drawing session
//!
//! Every message is an object tagged by `"type"`. A fitted curve travels as an
//! array of segments, each an array of four `{"x", "y"}` points.
//!
//! # Example
//!
//! ```rust
//! use sketch_fit::modules::protocol::message::{decode, encode, ClientMessage};
//! use sketch_fit::{cubic, curve_from};
//!
//! let message = ClientMessage::AddPath {
//!     path: curve_from!(cubic!([(0, 0), (1, 2), (3, 2), (4, 0)])),
//! };
//! let wire = encode(&message).unwrap();
//! assert!(wire.starts_with(r#"{"type":"add_path","path":[[{"x":0.0"#));
//!
//! let back: ClientMessage = decode(&wire).unwrap();
//! assert_eq!(back, message);
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::data::BezierCurve;
use crate::error::BezierResult;

/// Sent by a drawing client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Join the session with the given name
    Open { name: String },
    /// A stroke the client just drew and fitted
    AddPath { path: BezierCurve },
}

/// Sent to a drawing client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Every curve drawn in the session so far, oldest first, sent on join
    Paths { paths: Vec<BezierCurve> },
    /// A curve drawn by another participant
    AddPath { path: BezierCurve },
}

pub fn encode<M: Serialize>(message: &M) -> BezierResult<String> {
    Ok(serde_json::to_string(message)?)
}

pub fn decode<M: DeserializeOwned>(data: &str) -> BezierResult<M> {
    Ok(serde_json::from_str(data)?)
}
