//! Core types and host plumbing for strake.
//!
//! This crate provides the foundational pieces shared by strake rule modules:
//! - [`types`] — Token descriptors, quote marks, and diagnostics
//! - [`options`] — The run-scoped option set, loadable from `strake.json`
//! - [`host`] — The [`StyleHost`](host::StyleHost) capability trait and the
//!   [`RuleSet`](host::RuleSet) subscription registry
//! - [`run`] — The per-invocation cache and the reference
//!   [`LintRun`](run::LintRun) host implementation

pub mod host;
pub mod options;
pub mod run;
pub mod types;
