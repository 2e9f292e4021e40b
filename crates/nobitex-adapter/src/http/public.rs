/*
[INPUT]:  Symbols, currencies and candle query parameters
[OUTPUT]: Raw JSON market data (order book, depth, trades, stats, candles)
[POS]:    HTTP layer - public market data endpoints (no token required)
[UPDATE]: When adding new public endpoints or changing query parameters
*/

use reqwest::Method;
use serde_json::Value;

use crate::http::{NobitexClient, NobitexError, Result};
use crate::types::{Currency, Endpoint, OhlcvQuery, Symbol, join_currencies};

impl NobitexClient {
    /// Order book for one symbol, or every market with `Symbol::All`
    ///
    /// GET /v2/orderbook/{symbol}
    /// Rate limit: 60/min
    pub async fn get_order_book(&self, symbol: Symbol) -> Result<Value> {
        let builder =
            self.request_with_segment(Method::GET, Endpoint::OrderBook, symbol.as_str())?;
        self.send_json(builder).await
    }

    /// Market depth chart data for a single symbol
    ///
    /// GET /v2/depth/{symbol}
    /// Rate limit: 60/min
    pub async fn get_market_depth(&self, symbol: Symbol) -> Result<Value> {
        reject_all(symbol, "market depth")?;
        let builder =
            self.request_with_segment(Method::GET, Endpoint::MarketDepth, symbol.as_str())?;
        self.send_json(builder).await
    }

    /// Latest trades for a single symbol
    ///
    /// GET /v2/trades/{symbol}
    /// Rate limit: 15/min
    pub async fn get_trades(&self, symbol: Symbol) -> Result<Value> {
        reject_all(symbol, "trades")?;
        let builder = self.request_with_segment(Method::GET, Endpoint::Trades, symbol.as_str())?;
        self.send_json(builder).await
    }

    /// Latest stats for one or more source currencies against one destination
    ///
    /// GET /market/stats?srcCurrency={a,b}&dstCurrency={c}
    /// Rate limit: 100/min
    pub async fn get_market_stats(
        &self,
        sources: &[Currency],
        destination: Currency,
    ) -> Result<Value> {
        if sources.is_empty() {
            return Err(NobitexError::invalid_argument(
                "market stats need at least one source currency",
            ));
        }

        let params = [
            ("srcCurrency", join_currencies(sources)),
            ("dstCurrency", destination.as_str().to_string()),
        ];
        let builder = self
            .request(Method::GET, Endpoint::MarketStats)?
            .query(&params);
        self.send_json(builder).await
    }

    /// OHLCV candles in UDF format
    ///
    /// GET /market/udf/history?symbol&resolution&from&to&countback&page
    /// Rate limit: none published
    pub async fn ohlcv(&self, query: OhlcvQuery) -> Result<Value> {
        reject_all(query.symbol, "OHLCV")?;
        if query.from > query.to {
            return Err(NobitexError::invalid_argument(format!(
                "OHLCV range is reversed (from {} > to {})",
                query.from, query.to
            )));
        }

        let builder = self
            .request(Method::GET, Endpoint::Ohlcv)?
            .query(&query.to_params());
        self.send_json(builder).await
    }

    /// Global market stats mirrored from Binance and Kraken
    ///
    /// POST /market/global-stats
    /// Rate limit: 100/10min
    pub async fn get_global_market_stats(&self) -> Result<Value> {
        let builder = self.request(Method::POST, Endpoint::GlobalMarketStats)?;
        self.send_json(builder).await
    }
}

fn reject_all(symbol: Symbol, what: &str) -> Result<()> {
    if symbol.is_all() {
        return Err(NobitexError::invalid_argument(format!(
            "{what} is not available for all symbols at once; request each symbol separately"
        )));
    }
    Ok(())
}
