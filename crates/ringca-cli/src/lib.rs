//! Ringca CLI
//!
//! Caller-side collaborators for the automaton engine: command line and
//! environment configuration, the interactive prompt loop, per-error
//! diagnostics, and renderers that draw a generation grid as text, a PBM
//! bitmap or JSON.
//!
//! The `ca-viewer` binary wires these together.

pub mod config;
pub mod diagnostics;
pub mod render;
pub mod session;

pub use config::{default_rule, Cli, OutputFormat, ViewerConfig};
pub use diagnostics::{describe, IO_EXIT_CODE, VALIDATION_EXIT_CODE};
pub use render::{GridRenderer, JsonRenderer, PbmRenderer, TextRenderer};
pub use session::{simulate, Session, SessionSummary, State};
