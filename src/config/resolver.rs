//! Mode resolution from the raw custom-section value.
//!
//! # Responsibilities
//! - Map every possible input shape to exactly one mode
//! - Auto-detect a user-authored module when no setting is present
//! - Never fail: malformed shapes coerce and surface later, at load or
//!   invocation time
//!
//! # Design Decisions
//! - File existence goes through a probe trait so detection is testable
//!   without touching the real filesystem
//! - Unrecognized object fields are ignored, not rejected

use std::path::Path;

use serde_json::Value;

use crate::config::schema::{InjectedConfig, LocalAuthConfig, SdkVersion};
use crate::service::MODULE_BASENAME;

/// Endpoint field of the object configuration form.
const ENDPOINT_FIELD: &str = "lambdaEndpoint";
/// Function-name field of the object configuration form.
const FUNCTION_FIELD: &str = "lambdaAuthFnName";
/// SDK-version field of the object configuration form.
const VERSION_FIELD: &str = "lambdaVersion";

/// File-existence capability used during auto-detection.
pub trait FileProbe {
    /// Returns true if a regular file exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Resolves the raw custom-section value into an operating mode.
///
/// Total over all inputs:
/// - absent/falsy → [`LocalAuthConfig::Hardcoded`] if the conventional
///   module file exists at the service root, else [`LocalAuthConfig::Disabled`]
/// - `"disabled"` (any casing) → [`LocalAuthConfig::Disabled`]
/// - any other string → [`LocalAuthConfig::Injected`] with the string as the
///   remote function name
/// - an object → [`LocalAuthConfig::Injected`] with recognized fields
///   overriding the defaults
pub fn resolve(raw: &Value, service_root: &Path, probe: &dyn FileProbe) -> LocalAuthConfig {
    if is_falsy(raw) {
        let module_path = service_root.join(MODULE_BASENAME);
        if probe.exists(&module_path) {
            tracing::info!(path = %module_path.display(), "local authorizer module detected");
            return LocalAuthConfig::Hardcoded { module_path };
        }
        return LocalAuthConfig::Disabled;
    }

    match raw {
        Value::String(text) => {
            if text.eq_ignore_ascii_case("disabled") {
                return LocalAuthConfig::Disabled;
            }
            LocalAuthConfig::Injected(InjectedConfig {
                endpoint: None,
                function_name: Some(text.clone()),
                sdk_version: SdkVersion::default(),
            })
        }
        Value::Object(fields) => LocalAuthConfig::Injected(InjectedConfig {
            endpoint: string_field(fields, ENDPOINT_FIELD),
            function_name: string_field(fields, FUNCTION_FIELD),
            sdk_version: fields
                .get(VERSION_FIELD)
                .and_then(Value::as_str)
                .map(SdkVersion::parse)
                .unwrap_or_default(),
        }),
        // Numbers, arrays, `true`: best-guess injection with defaults. The
        // missing fields fail at invocation time.
        _ => LocalAuthConfig::Injected(InjectedConfig::default()),
    }
}

/// Inputs treated as "no setting": null, false, empty string, zero.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::String(text) => text.is_empty(),
        Value::Number(number) => number.as_f64() == Some(0.0),
        _ => false,
    }
}

fn string_field(fields: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_owned)
}
