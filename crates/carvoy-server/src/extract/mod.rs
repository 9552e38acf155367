//! Custom HTTP request extractors.
//!
//! Drop-in replacements for the stock axum extractors with richer rejection
//! messages, plus the JWT-backed authentication state.
//!
//! # Extractor Categories
//!
//! ## Authentication & Authorization
//!
//! - [`AuthClaims`] - JWT claims with application-specific fields
//! - [`AuthState`] - Authentication state with database verification
//!
//! ## Request Data Extraction
//!
//! - [`Json`] - JSON deserialization with better error messages
//! - [`ValidateJson`] - JSON extraction with automatic validation
//! - [`Path`] - Path parameter extraction with detailed error context
//! - [`Query`] - Query parameter extraction with enhanced error messages
//! - [`Multipart`] - Multipart form extraction for file uploads

pub mod auth;
pub mod reject;

pub use crate::extract::auth::{AuthClaims, AuthState};
pub use crate::extract::reject::{Json, Multipart, Path, Query, ValidateJson};
