//! Observability subsystem
//!
//! Structured JSON logging for request-level events. Logging is
//! read-only: it has no side effects on request execution, runs no
//! background threads, and produces deterministic output.

mod logger;

pub use logger::{Logger, Severity};
