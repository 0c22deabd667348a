//! Injected mode end to end: generation, loading, and binding rewrite.

mod common;

use std::fs;
use std::path::Path;

use serde_json::json;

use offline_local_auth::config::{LocalAuthConfig, SdkVersion};

fn proxy_descriptor(custom_block: &str) -> String {
    format!(
        r#"service: orders
provider:
  name: aws
  stage: dev
custom:
{custom_block}
functions:
  listOrders:
    handler: src/orders.list
    events:
      - http:
          path: /orders
          method: get
          localAuthorizer: autoLocalAuthProxy
"#
    )
}

fn generated_source(root: &Path) -> String {
    fs::read_to_string(root.join(".offline-local-auth/local-authorizers.js")).unwrap()
}

#[test]
fn test_object_setting_generates_and_injects_the_proxy() {
    let root = tempfile::tempdir().unwrap();
    let custom = r#"  offline-local-auth:
    lambdaEndpoint: http://localhost:3002
    lambdaAuthFnName: auth-fn"#;

    let (resolved, functions) = common::run_hooks(root.path(), &proxy_descriptor(custom));

    let LocalAuthConfig::Injected(injected) = resolved else {
        panic!("expected injected mode");
    };
    assert_eq!(injected.sdk_version, SdkVersion::V3);

    let source = generated_source(root.path());
    assert!(source.contains("require('@aws-sdk/client-lambda')"));
    assert!(source.contains("endpoint: 'http://localhost:3002'"));
    assert!(source.contains("FunctionName: 'auth-fn'"));

    let synthetic = &functions["$_LOCAL_AUTH_autoLocalAuthProxy"];
    assert_eq!(
        synthetic.handler.as_deref(),
        Some(".offline-local-auth/local-authorizers.autoLocalAuthProxy")
    );
    assert_eq!(
        synthetic.package.as_ref().unwrap().include,
        [".offline-local-auth/local-authorizers.js"]
    );

    let list = functions["listOrders"].events[0].http.as_ref().unwrap();
    assert_eq!(
        list.authorizer,
        Some(json!({ "name": "$_LOCAL_AUTH_autoLocalAuthProxy", "type": "token" }))
    );
}

#[test]
fn test_string_setting_names_the_remote_function() {
    let root = tempfile::tempdir().unwrap();
    let (resolved, _) = common::run_hooks(
        root.path(),
        &proxy_descriptor("  offline-local-auth: auth-fn"),
    );

    let LocalAuthConfig::Injected(injected) = resolved else {
        panic!("expected injected mode");
    };
    assert_eq!(injected.function_name.as_deref(), Some("auth-fn"));
    assert_eq!(injected.endpoint, None);

    let source = generated_source(root.path());
    assert!(source.contains("FunctionName: 'auth-fn'"));
    assert!(source.contains("endpoint: ''"));
}

#[test]
fn test_v2_setting_generates_the_older_convention() {
    let root = tempfile::tempdir().unwrap();
    let custom = r#"  offline-local-auth:
    lambdaEndpoint: http://localhost:3002
    lambdaAuthFnName: auth-fn
    lambdaVersion: v2"#;

    common::run_hooks(root.path(), &proxy_descriptor(custom));

    let source = generated_source(root.path());
    assert!(source.contains("require('aws-sdk')"));
    assert!(source.contains("JSON.parse(res.Payload)"));
    assert!(!source.contains("Buffer.from"));
}

#[test]
fn test_rerun_overwrites_the_previous_module() {
    let root = tempfile::tempdir().unwrap();
    let first = r#"  offline-local-auth:
    lambdaEndpoint: http://first:3002
    lambdaAuthFnName: auth-fn"#;
    let second = r#"  offline-local-auth:
    lambdaEndpoint: http://second:3002
    lambdaAuthFnName: auth-fn"#;

    common::run_hooks(root.path(), &proxy_descriptor(first));
    common::run_hooks(root.path(), &proxy_descriptor(second));

    let source = generated_source(root.path());
    assert!(source.contains("http://second:3002"));
    assert!(!source.contains("http://first:3002"));
}

#[test]
fn test_nested_simulator_block_takes_precedence() {
    let root = tempfile::tempdir().unwrap();
    let custom = r#"  serverless-offline:
    offline-local-auth: nested-fn
  offline-local-auth: top-fn"#;

    let (resolved, _) = common::run_hooks(root.path(), &proxy_descriptor(custom));

    let LocalAuthConfig::Injected(injected) = resolved else {
        panic!("expected injected mode");
    };
    assert_eq!(injected.function_name.as_deref(), Some("nested-fn"));
}
