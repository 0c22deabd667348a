//! Proxy source rendering.
//!
//! The emitted module exports a single async entry point that forwards the
//! incoming authorization event to the configured remote function and
//! returns the JSON-decoded response. Anything other than a success status
//! surfaces as one generic validation error, with no status or body detail.

use crate::config::schema::{InjectedConfig, SdkVersion};

/// Name of the single export of the generated module.
pub const PROXY_EXPORT: &str = "autoLocalAuthProxy";

const GENERATED_BANNER: &str = "// AUTO GENERATED FILE PLEASE DO NOT MODIFY //";

const ENDPOINT_SLOT: &str = "__ENDPOINT__";
const FUNCTION_SLOT: &str = "__FUNCTION_NAME__";

/// The pieces that differ between the two SDK generations.
struct CallingConvention {
    /// Module import line.
    import: &'static str,

    /// Client construction plus the request-response invocation, leaving
    /// the result in `res`.
    invoke: &'static str,

    /// Success branch: payload to return value. The modular client hands
    /// back a binary buffer that must be decoded before parsing; the older
    /// client pre-decodes it.
    on_success: &'static str,
}

const V3: CallingConvention = CallingConvention {
    import: "const { LambdaClient, InvokeCommand } = require('@aws-sdk/client-lambda');",
    invoke: "\
  const client = new LambdaClient({ endpoint: '__ENDPOINT__', credentials: { accessKeyId: '', secretAccessKey: '' } });
  const res = await client.send(new InvokeCommand({
    FunctionName: '__FUNCTION_NAME__',
    InvocationType: 'RequestResponse',
    Payload: JSON.stringify(event),
  }));",
    on_success: "\
    const body = Buffer.from(res.Payload, 'binary').toString('utf-8');
    return JSON.parse(body);",
};

const V2: CallingConvention = CallingConvention {
    import: "const AWS = require('aws-sdk');",
    invoke: "\
  const lambda = new AWS.Lambda({ endpoint: '__ENDPOINT__', credentials: { accessKeyId: '', secretAccessKey: '' } });
  const res = await lambda.invoke({
    FunctionName: '__FUNCTION_NAME__',
    InvocationType: 'RequestResponse',
    Payload: JSON.stringify(event),
  }).promise();",
    on_success: "    return JSON.parse(res.Payload);",
};

/// Renders the proxy module source for the given settings.
///
/// Pure; absent endpoint or function name render as empty strings and fail
/// at invocation time rather than here.
pub fn generate(config: &InjectedConfig) -> String {
    let convention = match config.sdk_version {
        SdkVersion::V2 => &V2,
        SdkVersion::V3 => &V3,
    };
    let invoke = convention
        .invoke
        .replace(ENDPOINT_SLOT, config.endpoint.as_deref().unwrap_or_default())
        .replace(FUNCTION_SLOT, config.function_name.as_deref().unwrap_or_default());

    let clauses: [&str; 11] = [
        GENERATED_BANNER,
        convention.import,
        &format!("const {PROXY_EXPORT} = async (event, _context) => {{"),
        &invoke,
        "  if (res.StatusCode === 200) {",
        convention.on_success,
        "  }",
        "  throw Error('Authorizer failed to validate request');",
        "};",
        &format!("module.exports = {{ {PROXY_EXPORT} }};"),
        GENERATED_BANNER,
    ];
    let mut source = clauses.join("\n");
    source.push('\n');
    source
}

#[cfg(test)]
mod tests {
    use super::*;

    fn injected(sdk_version: SdkVersion) -> InjectedConfig {
        InjectedConfig {
            endpoint: Some("http://localhost:3002".into()),
            function_name: Some("auth-fn".into()),
            sdk_version,
        }
    }

    #[test]
    fn test_v3_targets_modular_client_and_decodes_buffer() {
        let source = generate(&injected(SdkVersion::V3));
        assert!(source.contains("require('@aws-sdk/client-lambda')"));
        assert!(source.contains("endpoint: 'http://localhost:3002'"));
        assert!(source.contains("FunctionName: 'auth-fn'"));
        assert!(source.contains("InvocationType: 'RequestResponse'"));
        assert!(source.contains("Buffer.from(res.Payload, 'binary')"));
    }

    #[test]
    fn test_v2_parses_payload_directly() {
        let source = generate(&injected(SdkVersion::V2));
        assert!(source.contains("require('aws-sdk')"));
        assert!(source.contains("JSON.parse(res.Payload)"));
        assert!(!source.contains("Buffer.from"));
    }

    #[test]
    fn test_failure_branch_raises_generic_error() {
        for sdk_version in [SdkVersion::V2, SdkVersion::V3] {
            let source = generate(&injected(sdk_version));
            assert!(source.contains("if (res.StatusCode === 200)"));
            assert!(source.contains("Authorizer failed to validate request"));
        }
    }

    #[test]
    fn test_single_named_export() {
        let source = generate(&injected(SdkVersion::V3));
        assert!(source.contains("module.exports = { autoLocalAuthProxy };"));
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let source = generate(&InjectedConfig::default());
        assert!(source.contains("endpoint: ''"));
        assert!(source.contains("FunctionName: ''"));
        assert!(!source.contains(ENDPOINT_SLOT));
        assert!(!source.contains(FUNCTION_SLOT));
    }
}
