// Core domain types
pub mod asset;
pub mod signal;

// Re-export commonly used types
pub use asset::{AssetId, AssetSnapshot, Forecast, SignalSnapshot, Volatility, VolatilityTier};
pub use signal::{AssetSignalSet, Direction, SignalSetError, Timeframe, TimeframeSignal};
