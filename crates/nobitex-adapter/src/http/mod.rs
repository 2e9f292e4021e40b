/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: Decoded JSON responses from the Nobitex REST API
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod user;

pub use error::{NobitexError, Result};

pub use client::{ClientConfig, Credentials, NobitexClient, REST_API_BASE_URL};
