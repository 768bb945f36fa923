//! Logging macros shared across the workspace.
//!
//! Thin wrappers over [`tracing`] so callers don't need a tracing import
//! for the common levels. `success!` reads better than `info!` at call
//! sites announcing a completed step; both land at INFO.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
