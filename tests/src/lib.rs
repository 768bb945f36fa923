//! Integration tests for the lansweep workspace.

#[cfg(test)]
mod log;
#[cfg(test)]
mod targets;
