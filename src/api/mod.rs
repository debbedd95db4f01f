//! HTTP API surface

pub mod analyze;
pub mod error;
pub mod health;
pub mod openapi;
