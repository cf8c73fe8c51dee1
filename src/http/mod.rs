//! HTTP transport layer for the greeter service.
//!
//! Provides the external routing surface, a single endpoint on the root path.

pub mod handlers;
