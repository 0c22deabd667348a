//! Typed shapes for the descriptor sub-tree this crate mutates.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of the service being simulated, as the injector needs it.
#[derive(Debug, Clone)]
pub struct ServiceContext {
    /// Service name, used in synthetic function display names.
    pub service_name: String,

    /// Deployment stage, used in synthetic function display names.
    pub stage: String,

    /// Directory the service descriptor lives in; probe and generation
    /// paths are resolved against it.
    pub service_root: PathBuf,
}

/// One entry of the host's function-definition mapping.
///
/// Only the keys this crate reads or writes are typed; everything else is
/// carried in `extra` and serialized back verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<FunctionEvent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageRule>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One event attached to a function. Non-HTTP events pass through untyped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpEvent>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The HTTP event surface the injector reads and rewrites.
///
/// `authorizer` is deliberately loose: on input it may be a string, an
/// object, or an object carrying a nested `localAuthorizer`; on rewrite it
/// becomes `{ name, type }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<Value>,

    #[serde(rename = "localAuthorizer", skip_serializing_if = "Option::is_none")]
    pub local_authorizer: Option<Value>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl HttpEvent {
    /// Extracts the declared local authorizer binding, if any.
    ///
    /// Reads `authorizer.localAuthorizer` first, then the top-level
    /// `localAuthorizer`, normalizing the bare-string shorthand to a named
    /// binding.
    pub fn local_authorizer_binding(&self) -> Option<AuthorizerBinding> {
        let declared = self
            .authorizer
            .as_ref()
            .and_then(Value::as_object)
            .and_then(|authorizer| authorizer.get("localAuthorizer"))
            .or(self.local_authorizer.as_ref())?;
        AuthorizerBinding::from_value(declared)
    }
}

/// Packaging rule attached to synthetic function definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageRule {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A declared local authorizer reference on an HTTP event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizerBinding {
    /// Authorizer name to look up in the registry. An object form without a
    /// `name` yields an empty name, which misses and gets reported.
    pub name: String,

    /// Declared authorizer type, copied through verbatim on rewrite.
    pub auth_type: Option<String>,
}

impl AuthorizerBinding {
    fn from_value(declared: &Value) -> Option<Self> {
        match declared {
            Value::String(name) => Some(Self {
                name: name.clone(),
                auth_type: None,
            }),
            Value::Object(fields) => Some(Self {
                name: fields
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned(),
                auth_type: fields.get("type").and_then(Value::as_str).map(str::to_owned),
            }),
            _ => None,
        }
    }
}
