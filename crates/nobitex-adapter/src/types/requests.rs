/*
[INPUT]:  Caller supplied candle query parameters
[OUTPUT]: Typed request struct for the UDF history endpoint
[POS]:    Data layer - request types with more than a couple of fields
[UPDATE]: When endpoint parameters change
*/

use serde::{Deserialize, Serialize};

use super::enums::{Resolution, Symbol};

/// Query for `/market/udf/history`.
///
/// `from` and `to` are unix seconds. When `countback` is non-zero the
/// server returns that many candles ending at `to` and ignores `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OhlcvQuery {
    pub symbol: Symbol,
    pub resolution: Resolution,
    pub from: i64,
    pub to: i64,
    pub countback: u32,
    pub page: u32,
}

impl OhlcvQuery {
    pub fn new(symbol: Symbol, resolution: Resolution, from: i64, to: i64, countback: u32) -> Self {
        Self {
            symbol,
            resolution,
            from,
            to,
            countback,
            page: 1,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("symbol", self.symbol.as_str().to_string()),
            ("resolution", self.resolution.as_str().to_string()),
            ("from", self.from.to_string()),
            ("to", self.to.to_string()),
            ("countback", self.countback.to_string()),
            ("page", self.page.to_string()),
        ]
    }
}
