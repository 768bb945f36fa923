pub mod config;
pub mod error;
pub mod net;

mod macros;

// Re-exported for the logging macros, which expand to `$crate::tracing`
// paths so callers need no tracing dependency of their own.
pub use tracing;
