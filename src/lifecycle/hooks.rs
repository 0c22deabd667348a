//! The two host hooks, in invocation order.
//!
//! # Responsibilities
//! - Initialization: resolve the raw custom-section setting into a mode
//! - Before server start: generate the proxy module when injecting, then
//!   apply authorizers to the function store
//!
//! # Design Decisions
//! - Both hooks complete before the simulated server accepts traffic; no
//!   work here runs concurrently with request handling

use std::path::Path;

use serde_json::Value;

use crate::codegen;
use crate::config::{self, FileProbe, LocalAuthConfig};
use crate::inject;
use crate::loader::ModuleLoader;
use crate::service::model::ServiceContext;
use crate::service::store::FunctionStore;

/// Initialization hook: resolves the raw setting into an operating mode.
pub fn initialize(raw: &Value, service_root: &Path, probe: &dyn FileProbe) -> LocalAuthConfig {
    tracing::info!(setting = %raw, "initializing local authorizer resolution");
    let resolved = config::resolve(raw, service_root, probe);
    tracing::info!(mode = resolved.mode(), "local authorizer mode resolved");
    resolved
}

/// Before-server-start hook: generation plus injection.
///
/// Persistence failure propagates and aborts initialization; load failures
/// downstream are absorbed by the injector (fail-open).
pub fn before_server_start(
    resolved: &LocalAuthConfig,
    store: &mut dyn FunctionStore,
    context: &ServiceContext,
    loader: &dyn ModuleLoader,
) -> Result<(), codegen::PersistError> {
    if let LocalAuthConfig::Injected(injected) = resolved {
        let source = codegen::generate(injected);
        let path = codegen::persist(&context.service_root, &source)?;
        tracing::info!(path = %path.display(), "generated local authorizer proxy module");
    }
    inject::inject(resolved, store, context, loader);
    Ok(())
}
