//! Authorizer injection subsystem.
//!
//! # Data Flow
//! ```text
//! LocalAuthConfig + module path
//!     → loader (exported names, declaration order)
//!     → synthetic.rs (one placeholder definition per name)
//!     → AuthorizerRegistry (name → synthetic function key)
//!     → injector.rs (rewrite each HTTP event's binding in place)
//! ```
//!
//! # Design Decisions
//! - Registry construction is all-or-nothing: a load failure aborts the
//!   whole run before any mutation, leaving existing bindings in effect
//! - Unknown binding names are reported and left untouched, never errors

pub mod injector;
pub mod synthetic;

pub use injector::{inject, AuthorizerRegistry};
pub use synthetic::{function_key, ModuleArtifact, FUNCTION_KEY_PREFIX};
