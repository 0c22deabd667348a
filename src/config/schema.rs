//! Configuration schema definitions.
//!
//! The operating mode for local authorizer resolution. Exactly one variant
//! is active per simulation run.

use std::path::PathBuf;

/// Resolved local authorizer mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalAuthConfig {
    /// Injection is skipped entirely.
    Disabled,

    /// A user-authored proxy module at a fixed path. Never generated or
    /// overwritten by this crate.
    Hardcoded {
        /// Absolute or service-relative location of the module.
        module_path: PathBuf,
    },

    /// A proxy module is generated at startup that forwards authorization
    /// events to a remote function.
    Injected(InjectedConfig),
}

impl LocalAuthConfig {
    /// Short mode label for log lines.
    pub fn mode(&self) -> &'static str {
        match self {
            LocalAuthConfig::Disabled => "disabled",
            LocalAuthConfig::Hardcoded { .. } => "hardcoded",
            LocalAuthConfig::Injected(_) => "inject",
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, LocalAuthConfig::Disabled)
    }
}

/// Settings for the generated proxy module.
///
/// `endpoint` and `function_name` may be absent; generation still succeeds
/// and the proxy fails at invocation time instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InjectedConfig {
    /// Endpoint the proxy's SDK client targets (e.g. a local Lambda port).
    pub endpoint: Option<String>,

    /// Remote function the proxy invokes.
    pub function_name: Option<String>,

    /// SDK calling convention to generate against.
    pub sdk_version: SdkVersion,
}

/// SDK generation the proxy module is emitted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SdkVersion {
    /// `aws-sdk` (callback-era client, pre-decoded payloads).
    V2,
    /// `@aws-sdk/client-lambda` (modular client, binary payloads).
    #[default]
    V3,
}

impl SdkVersion {
    /// Parses a version tag case-insensitively. Unrecognized tags coerce to
    /// the default generation rather than failing.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("v2") {
            SdkVersion::V2
        } else {
            SdkVersion::V3
        }
    }
}
