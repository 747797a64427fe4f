//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Absolute URL validation for submitted long URLs
//! - [`extract_host`] - Host extraction from HTTP requests

pub mod code_generator;
pub mod extract_host;
pub mod url_validator;
