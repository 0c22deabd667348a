//! Lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! initialize (host hook):
//!     custom-section setting → config resolver → LocalAuthConfig
//!
//! before server start (host hook):
//!     Injected mode → generate + persist proxy module
//!     any enabled mode → load module → inject authorizers
//! ```
//!
//! # Design Decisions
//! - The host owns hook timing; this crate only registers and reacts
//! - The mode is recomputed fresh on every initialization
//! - Persistence failure is the only fatal error in the flow; everything
//!   downstream fails open
pub mod hooks;

pub use hooks::{before_server_start, initialize};
