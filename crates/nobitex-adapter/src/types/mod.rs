/*
[INPUT]:  Nobitex wire vocabulary (markets, currencies, routes)
[OUTPUT]: Typed enums, request structs and the endpoint route table
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod requests;
pub mod routes;

pub(crate) use enums::join_currencies;
pub use enums::{Currency, ParseEnumError, Resolution, Symbol, TradeType};
pub use requests::OhlcvQuery;
pub use routes::Endpoint;
