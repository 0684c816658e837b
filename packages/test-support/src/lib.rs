//! Shared helpers for integration tests across the workspace.

pub mod logging;
