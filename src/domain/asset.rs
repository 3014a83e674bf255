use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::domain::signal::{AssetSignalSet, SignalSetError, TimeframeSignal};

/// The fixed set of assets covered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum AssetId {
    #[strum(to_string = "Gold")]
    Gold,
    #[strum(to_string = "USD/JPY")]
    UsdJpy,
    #[strum(to_string = "Bitcoin")]
    Bitcoin,
}

impl AssetId {
    /// Card title, icon included.
    pub fn label(self) -> &'static str {
        match self {
            AssetId::Gold => "🥇 Gold (GC=F)",
            AssetId::UsdJpy => "💴 Yen (USD/JPY)",
            AssetId::Bitcoin => "₿ Bitcoin (BTC/USD)",
        }
    }

    /// Ticker symbol used by the upstream price source.
    pub fn ticker(self) -> &'static str {
        match self {
            AssetId::Gold => "GC=F",
            AssetId::UsdJpy => "USDJPY=X",
            AssetId::Bitcoin => "BTC-USD",
        }
    }

    pub fn currency_symbol(self) -> &'static str {
        match self {
            AssetId::UsdJpy => "¥",
            AssetId::Gold | AssetId::Bitcoin => "$",
        }
    }
}

/// ARIMA output: projected price and the percentage move it implies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub price: f64,
    pub change_pct: f64,
}

impl Forecast {
    pub fn is_rising(&self) -> bool {
        self.change_pct >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityTier {
    #[strum(to_string = "🔵 LOW")]
    Low,
    #[strum(to_string = "🟢 NORMAL")]
    Normal,
    #[strum(to_string = "🟠 HIGH")]
    High,
    #[strum(to_string = "🔴 VERY HIGH")]
    VeryHigh,
}

/// GARCH output: expected volatility and the tier the pipeline assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volatility {
    pub pct: f64,
    pub tier: VolatilityTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAssetSnapshot", into = "RawAssetSnapshot")]
pub struct AssetSnapshot {
    pub forecast: Forecast,
    pub volatility: Volatility,
    pub signals: AssetSignalSet,
}

impl AssetSnapshot {
    pub fn asset(&self) -> AssetId {
        self.signals.asset()
    }
}

/// Wire form of an asset entry: signals arrive as a plain list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawAssetSnapshot {
    asset: AssetId,
    forecast: Forecast,
    volatility: Volatility,
    signals: Vec<TimeframeSignal>,
}

impl TryFrom<RawAssetSnapshot> for AssetSnapshot {
    type Error = SignalSetError;

    fn try_from(raw: RawAssetSnapshot) -> Result<Self, Self::Error> {
        Ok(Self {
            forecast: raw.forecast,
            volatility: raw.volatility,
            signals: AssetSignalSet::from_signals(raw.asset, raw.signals)?,
        })
    }
}

impl From<AssetSnapshot> for RawAssetSnapshot {
    fn from(snapshot: AssetSnapshot) -> Self {
        Self {
            asset: snapshot.asset(),
            forecast: snapshot.forecast,
            volatility: snapshot.volatility,
            signals: snapshot.signals.signals().to_vec(),
        }
    }
}

/// Everything the external pipeline published in one run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignalSnapshot {
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
    pub assets: Vec<AssetSnapshot>,
}
