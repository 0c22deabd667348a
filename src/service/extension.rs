//! Descriptor-schema extension fragment.
//!
//! The host validates descriptors against a JSON schema it owns; this crate
//! only contributes the fragment describing the `localAuthorizer` property
//! it consumes on HTTP events. Registration with the host's validator is
//! the host's job.

use serde_json::{json, Value};

/// Accepted authorizer types, matched case-insensitively.
pub const AUTHORIZER_TYPES: [&str; 4] = ["token", "cognito_user_pools", "request", "aws_iam"];

/// JSON-schema fragment for the HTTP event properties this crate reads.
pub fn http_event_properties() -> Value {
    let type_variants: Vec<Value> = AUTHORIZER_TYPES
        .iter()
        .map(|accepted| json!({ "type": "string", "regexp": format!("/^{accepted}$/i") }))
        .collect();
    json!({
        "properties": {
            "localAuthorizer": {
                "anyOf": [
                    { "type": "string" },
                    {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "type": { "anyOf": type_variants },
                        },
                    },
                ],
            },
        },
    })
}
