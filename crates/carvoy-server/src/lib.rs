#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod extract;
pub mod handler;
pub mod middleware;
pub mod service;

/// Tracing target for authentication flows.
pub const TRACING_TARGET_AUTHENTICATION: &str = "carvoy_server::authentication";

/// Tracing target for authorization decisions.
pub const TRACING_TARGET_AUTHORIZATION: &str = "carvoy_server::authorization";
