//! Minimal GraphQL-over-HTTP envelope.
//!
//! The backend exposes a single POST endpoint speaking the standard
//! `{query, variables}` / `{data, errors}` envelope. Transport is owned by
//! the UI crate; this module only defines the wire shapes and how a raw
//! response (status + body bytes) becomes a typed result.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Request envelope for a single GraphQL operation.
#[derive(Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

impl<'a> GraphqlRequest<'a> {
    pub fn new(query: &'a str, variables: serde_json::Value) -> Self {
        Self {
            query,
            variables: Some(variables),
        }
    }

    /// Serialize the envelope to the POST body.
    pub fn to_body(&self) -> Vec<u8> {
        // The envelope is two plain fields; serialization cannot fail.
        serde_json::to_vec(self).expect("GraphQL request envelope is always serializable")
    }
}

/// Response envelope: `data` and/or `errors`.
#[derive(Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlErrorEntry>>,
}

/// One entry of the standard `errors` array.
#[derive(Deserialize, Debug, Clone)]
pub struct GraphqlErrorEntry {
    pub message: String,
}

#[derive(thiserror::Error, Debug)]
pub enum GraphqlError {
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL errors: {}", messages.join(", "))]
    Operation { messages: Vec<String> },

    #[error("Empty response from API")]
    EmptyResponse,

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphqlError>;

/// Decode a raw HTTP response into the operation's `data` payload.
///
/// Order matters: a non-2xx status wins over body contents, then the
/// `errors` array, then missing `data`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    if !(200..300).contains(&status) {
        return Err(GraphqlError::Api {
            status,
            message: String::from_utf8_lossy(body).into_owned(),
        });
    }

    let response: GraphqlResponse<T> = serde_json::from_slice(body)?;

    if let Some(errors) = response.errors {
        return Err(GraphqlError::Operation {
            messages: errors.into_iter().map(|e| e.message).collect(),
        });
    }

    response.data.ok_or(GraphqlError::EmptyResponse)
}
