//! Shared fixtures for the end-to-end injection tests.

use std::fs;
use std::path::Path;

use offline_local_auth::config::{FsProbe, LocalAuthConfig};
use offline_local_auth::loader::JsExportScanner;
use offline_local_auth::service::model::ServiceContext;
use offline_local_auth::service::{local_auth_setting, read_descriptor, FunctionMap};
use offline_local_auth::{before_server_start, initialize};

/// Renders a small descriptor around the given `custom:` block body.
#[allow(dead_code)]
pub fn descriptor(custom_block: &str) -> String {
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
          localAuthorizer: myAuth
  updateOrder:
    handler: src/orders.update
    events:
      - http:
          path: /orders
          method: put
          localAuthorizer:
            name: adminAuth
            type: request
  health:
    handler: src/health.check
    events:
      - http:
          path: /health
          method: get
"#
    )
}

/// Writes the descriptor into `root` and runs both host hooks against it,
/// exactly as the simulator would at startup.
#[allow(dead_code)]
pub fn run_hooks(root: &Path, descriptor_text: &str) -> (LocalAuthConfig, FunctionMap) {
    let path = root.join("serverless.yml");
    fs::write(&path, descriptor_text).unwrap();

    let descriptor = read_descriptor(&path).unwrap();
    let context = ServiceContext {
        service_name: descriptor.service.clone().unwrap(),
        stage: descriptor
            .provider
            .stage
            .clone()
            .unwrap_or_else(|| "dev".into()),
        service_root: root.to_path_buf(),
    };

    let setting = local_auth_setting(&descriptor.custom);
    let resolved = initialize(&setting, root, &FsProbe);

    let mut functions = descriptor.functions;
    before_server_start(&resolved, &mut functions, &context, &JsExportScanner).unwrap();
    (resolved, functions)
}
