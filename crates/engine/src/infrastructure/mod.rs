//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod config;
pub mod correlation;
pub mod mysql;
pub mod openai;
pub mod ports;
