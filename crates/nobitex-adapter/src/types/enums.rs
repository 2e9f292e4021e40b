/*
[INPUT]:  Nobitex market, currency, candle and wallet identifiers
[OUTPUT]: Typed Rust enums mapped onto their wire strings
[POS]:    Data layer - enumerations used to build queries and bodies
[UPDATE]: When Nobitex lists new markets or currencies
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Returned when a string does not name a known enum value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a fieldless enum backed by a fixed wire string per variant.
///
/// Generates `as_str`, `VARIANTS`, `Display`, case-insensitive `FromStr`
/// and serde impls that all agree on the same string.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every value, in declaration order
            pub const VARIANTS: &'static [$name] = &[$($name::$variant,)+];

            /// Wire representation sent to the API
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::VARIANTS
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

wire_enum! {
    /// Trading pair identifier. `All` is only accepted by the order book endpoint.
    Symbol("symbol") {
        All => "all",
        BtcIrt => "BTCIRT",
        EthIrt => "ETHIRT",
        LtcIrt => "LTCIRT",
        UsdtIrt => "USDTIRT",
        XrpIrt => "XRPIRT",
        BchIrt => "BCHIRT",
        BnbIrt => "BNBIRT",
        EosIrt => "EOSIRT",
        XlmIrt => "XLMIRT",
        EtcIrt => "ETCIRT",
        TrxIrt => "TRXIRT",
        DogeIrt => "DOGEIRT",
        UniIrt => "UNIIRT",
        DaiIrt => "DAIIRT",
        LinkIrt => "LINKIRT",
        DotIrt => "DOTIRT",
        AaveIrt => "AAVEIRT",
        AdaIrt => "ADAIRT",
        ShibIrt => "SHIBIRT",
        FtmIrt => "FTMIRT",
        MaticIrt => "MATICIRT",
        AxsIrt => "AXSIRT",
        ManaIrt => "MANAIRT",
        SandIrt => "SANDIRT",
        AvaxIrt => "AVAXIRT",
        MkrIrt => "MKRIRT",
        GmtIrt => "GMTIRT",
        UsdcIrt => "USDCIRT",
        BtcUsdt => "BTCUSDT",
        EthUsdt => "ETHUSDT",
        LtcUsdt => "LTCUSDT",
        XrpUsdt => "XRPUSDT",
        BchUsdt => "BCHUSDT",
        BnbUsdt => "BNBUSDT",
        EosUsdt => "EOSUSDT",
        XlmUsdt => "XLMUSDT",
        EtcUsdt => "ETCUSDT",
        TrxUsdt => "TRXUSDT",
        PmnUsdt => "PMNUSDT",
        DogeUsdt => "DOGEUSDT",
        UniUsdt => "UNIUSDT",
        DaiUsdt => "DAIUSDT",
        LinkUsdt => "LINKUSDT",
        DotUsdt => "DOTUSDT",
        AaveUsdt => "AAVEUSDT",
        AdaUsdt => "ADAUSDT",
        ShibUsdt => "SHIBUSDT",
        FtmUsdt => "FTMUSDT",
        MaticUsdt => "MATICUSDT",
        AxsUsdt => "AXSUSDT",
        ManaUsdt => "MANAUSDT",
        SandUsdt => "SANDUSDT",
        AvaxUsdt => "AVAXUSDT",
        MkrUsdt => "MKRUSDT",
        GmtUsdt => "GMTUSDT",
        UsdcUsdt => "USDCUSDT",
    }
}

impl Symbol {
    pub const fn is_all(self) -> bool {
        matches!(self, Symbol::All)
    }
}

wire_enum! {
    /// Currency code. `Rls` is the Iranian rial.
    Currency("currency") {
        Rls => "rls",
        Btc => "btc",
        Eth => "eth",
        Ltc => "ltc",
        Usdt => "usdt",
        Xrp => "xrp",
        Bch => "bch",
        Bnb => "bnb",
        Eos => "eos",
        Xlm => "xlm",
        Etc => "etc",
        Trx => "trx",
        Pmn => "pmn",
        Doge => "doge",
        Uni => "uni",
        Dai => "dai",
        Link => "link",
        Dot => "dot",
        Aave => "aave",
        Ada => "ada",
        Shib => "shib",
        Ftm => "ftm",
        Matic => "matic",
        Axs => "axs",
        Mana => "mana",
        Sand => "sand",
        Avax => "avax",
        Mkr => "mkr",
        Gmt => "gmt",
        Usdc => "usdc",
    }
}

wire_enum! {
    /// Candle timeframe for the UDF history endpoint
    Resolution("resolution") {
        OneMinute => "1",
        FiveMinutes => "5",
        FifteenMinutes => "15",
        ThirtyMinutes => "30",
        OneHour => "60",
        ThreeHours => "180",
        FourHours => "240",
        SixHours => "360",
        TwelveHours => "720",
        OneDay => "D",
        TwoDays => "2D",
        ThreeDays => "3D",
    }
}

wire_enum! {
    /// Wallet type
    TradeType("wallet type") {
        Spot => "spot",
        Margin => "margin",
    }
}

/// Joins currencies into the comma separated form the API expects
pub(crate) fn join_currencies(currencies: &[Currency]) -> String {
    currencies
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
