/*
[INPUT]:  Logical API operations
[OUTPUT]: URL paths relative to the Nobitex base URL
[POS]:    Data layer - route table shared by all HTTP methods
[UPDATE]: When Nobitex moves or adds endpoints
*/

/// Route table for every supported operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    // Public market data
    OrderBook,
    MarketDepth,
    Trades,
    MarketStats,
    Ohlcv,
    GlobalMarketStats,

    // User info
    UserProfile,
    GenerateWalletAddress,
    AddCard,
    AddAccount,
    UserLimitations,
    WalletList,
    Wallets,
}

impl Endpoint {
    pub const VARIANTS: &'static [Endpoint] = &[
        Endpoint::OrderBook,
        Endpoint::MarketDepth,
        Endpoint::Trades,
        Endpoint::MarketStats,
        Endpoint::Ohlcv,
        Endpoint::GlobalMarketStats,
        Endpoint::UserProfile,
        Endpoint::GenerateWalletAddress,
        Endpoint::AddCard,
        Endpoint::AddAccount,
        Endpoint::UserLimitations,
        Endpoint::WalletList,
        Endpoint::Wallets,
    ];

    /// Path of the endpoint. The order book, depth and trades paths end with
    /// `/` and expect the symbol to be appended.
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::OrderBook => "/v2/orderbook/",
            Endpoint::MarketDepth => "/v2/depth/",
            Endpoint::Trades => "/v2/trades/",
            Endpoint::MarketStats => "/market/stats",
            Endpoint::Ohlcv => "/market/udf/history",
            Endpoint::GlobalMarketStats => "/market/global-stats",
            Endpoint::UserProfile => "/users/profile",
            Endpoint::GenerateWalletAddress => "/users/wallets/generate-address",
            Endpoint::AddCard => "/users/cards-add",
            Endpoint::AddAccount => "/users/accounts-add",
            Endpoint::UserLimitations => "/users/limitations",
            Endpoint::WalletList => "/users/wallets/list",
            Endpoint::Wallets => "/v2/wallets",
        }
    }

    pub const fn requires_token(self) -> bool {
        !matches!(
            self,
            Endpoint::OrderBook
                | Endpoint::MarketDepth
                | Endpoint::Trades
                | Endpoint::MarketStats
                | Endpoint::Ohlcv
                | Endpoint::GlobalMarketStats
        )
    }

    /// Path with a trailing segment, e.g. `/v2/depth/BTCIRT`
    pub fn path_with(self, segment: &str) -> String {
        format!("{}{}", self.path(), segment)
    }
}
