//! Service descriptor sub-tree.
//!
//! # Data Flow
//! ```text
//! serverless.yml
//!     → descriptor.rs (narrow read: service, stage, custom, functions)
//!     → model.rs (typed function/event shapes, unknown keys retained)
//!     → store.rs (insert/iterate surface handed to the injector)
//! ```
//!
//! # Design Decisions
//! - Only the sub-tree this crate reads or mutates is typed; everything
//!   else rides along in flattened maps and round-trips untouched
//! - Function and event order is declaration order (indexmap), so log
//!   output and synthetic-definition insertion are deterministic

pub mod descriptor;
pub mod extension;
pub mod model;
pub mod store;

pub use descriptor::{local_auth_setting, read_descriptor, ServiceDescriptor};
pub use extension::http_event_properties;
pub use model::{AuthorizerBinding, FunctionDefinition, HttpEvent, ServiceContext};
pub use store::{FunctionMap, FunctionStore};

/// Conventional basename for both the user-authored module at the service
/// root and the generated module in the reserved directory.
pub const MODULE_BASENAME: &str = "local-authorizers.js";
