//! Local authorizer injection for offline API simulation.
//!
//! Resolves the "local authorizer" setting of a simulated service into one
//! of three modes, generates a forwarding proxy module when asked to, and
//! rewrites every HTTP event's authorizer binding to a synthetic placeholder
//! function.
//!
//! # Architecture Overview
//!
//! ```text
//!   service descriptor custom section
//!              │
//!              ▼
//!       ┌────────────┐   Disabled │ Hardcoded │ Injected
//!       │   config   │──────────────────────────────────┐
//!       └────────────┘                                  │
//!                                                       ▼
//!       ┌────────────┐  Injected only          ┌────────────────┐
//!       │  codegen   │────────────────────────▶│  .offline-     │
//!       │ (proxy.js) │   overwrite on startup  │  local-auth/   │
//!       └────────────┘                         └───────┬────────┘
//!                                                      │
//!       ┌────────────┐   exported names                ▼
//!       │   loader   │◀───────────────────────  module on disk
//!       └─────┬──────┘
//!             │ name → synthetic key
//!             ▼
//!       ┌────────────┐   insert placeholders, rewrite bindings
//!       │   inject   │──────────────────────────────────────▶ function store
//!       └────────────┘
//! ```
//!
//! The `lifecycle` module strings these together behind the two hooks the
//! host invokes around server start.

// Core engine
pub mod codegen;
pub mod config;
pub mod inject;
pub mod loader;

// Descriptor surface and orchestration
pub mod lifecycle;
pub mod service;

pub use config::{InjectedConfig, LocalAuthConfig, SdkVersion};
pub use inject::inject;
pub use lifecycle::{before_server_start, initialize};
