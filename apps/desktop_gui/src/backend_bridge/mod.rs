//! Backend worker: owns the tokio runtime and all network access.

pub mod commands;
pub mod flags;
pub mod runtime;
