pub mod log;
pub mod neighbor;
pub mod probe;
pub mod sweep;
