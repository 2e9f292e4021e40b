/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Nobitex adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Async client for the Nobitex REST API.
//!
//! One method per endpoint on [`NobitexClient`]; responses are returned as
//! raw [`serde_json::Value`].

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    NobitexClient,
    NobitexError,
    REST_API_BASE_URL,
    Result,
};

// Re-export all types
pub use types::*;
