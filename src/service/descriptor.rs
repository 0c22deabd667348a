//! Narrow service-descriptor read.
//!
//! # Responsibilities
//! - Read just the keys this crate consumes: service name, stage, the
//!   custom section, and the function mapping
//! - Locate the local-auth setting inside the custom section
//!
//! # Design Decisions
//! - The rest of the descriptor is never parsed; unknown keys inside the
//!   consumed sub-tree are retained via flattening in the models

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::resolver::is_falsy;
use crate::service::store::FunctionMap;

/// Custom-section key carrying the local-auth setting.
pub const CONFIG_KEY: &str = "offline-local-auth";

/// Simulator block the setting may be nested under.
pub const SIMULATOR_KEY: &str = "serverless-offline";

/// Errors reading the descriptor file.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// The descriptor sub-tree consumed at startup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceDescriptor {
    /// Service name.
    pub service: Option<String>,

    /// Provider block; only the stage is read.
    pub provider: ProviderSection,

    /// Free-form custom section; the local-auth setting lives here.
    pub custom: Value,

    /// Function-definition mapping, in declaration order.
    pub functions: FunctionMap,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderSection {
    pub stage: Option<String>,
}

/// Reads the consumed sub-tree from a YAML descriptor file.
pub fn read_descriptor(path: &Path) -> Result<ServiceDescriptor, DescriptorError> {
    let text = fs::read_to_string(path).map_err(|source| DescriptorError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| DescriptorError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Locates the local-auth setting inside the custom section.
///
/// The nested simulator block takes precedence over the top-level key; a
/// falsy value at either location falls through to the next, ending at null.
pub fn local_auth_setting(custom: &Value) -> Value {
    let nested = custom
        .get(SIMULATOR_KEY)
        .and_then(|block| block.get(CONFIG_KEY));
    if let Some(setting) = nested.filter(|setting| !is_falsy(setting)) {
        return setting.clone();
    }
    custom
        .get(CONFIG_KEY)
        .filter(|setting| !is_falsy(setting))
        .cloned()
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_setting_takes_precedence() {
        let custom = json!({
            "serverless-offline": { "offline-local-auth": "nested-fn" },
            "offline-local-auth": "top-fn",
        });
        assert_eq!(local_auth_setting(&custom), json!("nested-fn"));
    }

    #[test]
    fn test_falsy_nested_falls_through_to_top_level() {
        let custom = json!({
            "serverless-offline": { "offline-local-auth": "" },
            "offline-local-auth": "top-fn",
        });
        assert_eq!(local_auth_setting(&custom), json!("top-fn"));
    }

    #[test]
    fn test_missing_setting_is_null() {
        assert_eq!(local_auth_setting(&json!({})), Value::Null);
        assert_eq!(local_auth_setting(&Value::Null), Value::Null);
    }

    #[test]
    fn test_descriptor_parses_narrow_subtree() {
        let text = r#"
service: orders
frameworkVersion: "3"
provider:
  name: aws
  stage: dev
  runtime: nodejs18.x
custom:
  offline-local-auth: disabled
functions:
  listOrders:
    handler: src/orders.list
    events:
      - http:
          path: /orders
          method: get
          localAuthorizer: myAuth
"#;
        let descriptor: ServiceDescriptor = serde_yaml::from_str(text).unwrap();
        assert_eq!(descriptor.service.as_deref(), Some("orders"));
        assert_eq!(descriptor.provider.stage.as_deref(), Some("dev"));
        assert_eq!(local_auth_setting(&descriptor.custom), json!("disabled"));

        let function = &descriptor.functions["listOrders"];
        assert_eq!(function.handler.as_deref(), Some("src/orders.list"));
        let http = function.events[0].http.as_ref().unwrap();
        assert_eq!(http.local_authorizer_binding().unwrap().name, "myAuth");
    }
}
