//! config/demo.rs Built-in snapshot shown when no pipeline output is supplied.
//!
//! Mirrors the last published run so the dashboard is usable offline.

use crate::domain::{AssetId, Direction, VolatilityTier};

pub struct DemoAsset {
    pub asset: AssetId,
    pub forecast_price: f64,
    pub forecast_change_pct: f64,
    pub volatility_pct: f64,
    pub volatility_tier: VolatilityTier,
    /// Short, mid and long term, in that order
    pub directions: [Direction; 3],
}

pub struct DemoConfig {
    pub assets: &'static [DemoAsset],
}

pub const DEMO: DemoConfig = DemoConfig {
    assets: &[
        DemoAsset {
            asset: AssetId::Gold,
            forecast_price: 2_347.50,
            forecast_change_pct: 0.45,
            volatility_pct: 12.5,
            volatility_tier: VolatilityTier::Normal,
            directions: [Direction::Buy, Direction::Buy, Direction::Buy],
        },
        DemoAsset {
            asset: AssetId::UsdJpy,
            forecast_price: 157.32,
            forecast_change_pct: -0.23,
            volatility_pct: 8.2,
            volatility_tier: VolatilityTier::Low,
            directions: [Direction::Sell, Direction::Sell, Direction::Buy],
        },
        DemoAsset {
            asset: AssetId::Bitcoin,
            forecast_price: 67_890.00,
            forecast_change_pct: 1.25,
            volatility_pct: 28.7,
            volatility_tier: VolatilityTier::VeryHigh,
            directions: [Direction::Buy, Direction::Buy, Direction::Buy],
        },
    ],
};
