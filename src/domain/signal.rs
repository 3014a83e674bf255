use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

use crate::domain::asset::AssetId;

/// Direction of a single timeframe signal, as labelled by the forecasting pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[strum(to_string = "BUY")]
    Buy,
    #[strum(to_string = "SELL")]
    Sell,
}

/// The three fixed analysis horizons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    #[strum(to_string = "5m")]
    ShortTerm,
    #[strum(to_string = "15m")]
    MidTerm,
    #[strum(to_string = "1h")]
    LongTerm,
}

impl Timeframe {
    /// Position of this timeframe inside an `AssetSignalSet`.
    pub fn index(self) -> usize {
        match self {
            Timeframe::ShortTerm => 0,
            Timeframe::MidTerm => 1,
            Timeframe::LongTerm => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeframeSignal {
    pub timeframe: Timeframe,
    pub direction: Direction,
}

impl TimeframeSignal {
    pub fn new(timeframe: Timeframe, direction: Direction) -> Self {
        Self {
            timeframe,
            direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalSetError {
    #[error("{asset}: no {timeframe} signal supplied")]
    MissingTimeframe { asset: AssetId, timeframe: Timeframe },
    #[error("{asset}: {timeframe} signal supplied more than once")]
    DuplicateTimeframe { asset: AssetId, timeframe: Timeframe },
}

/// One signal per timeframe for a single asset.
///
/// Signals are stored in timeframe order no matter how they were supplied, and a set
/// with a missing or repeated timeframe cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSignalSet {
    asset: AssetId,
    signals: [TimeframeSignal; 3],
}

impl AssetSignalSet {
    pub fn new(asset: AssetId, short_term: Direction, mid_term: Direction, long_term: Direction) -> Self {
        Self {
            asset,
            signals: [
                TimeframeSignal::new(Timeframe::ShortTerm, short_term),
                TimeframeSignal::new(Timeframe::MidTerm, mid_term),
                TimeframeSignal::new(Timeframe::LongTerm, long_term),
            ],
        }
    }

    /// Builds a set from signals in any order.
    pub fn from_signals(
        asset: AssetId,
        signals: impl IntoIterator<Item = TimeframeSignal>,
    ) -> Result<Self, SignalSetError> {
        let mut slots: [Option<Direction>; 3] = [None; 3];

        for signal in signals {
            let slot = &mut slots[signal.timeframe.index()];
            if slot.is_some() {
                return Err(SignalSetError::DuplicateTimeframe {
                    asset,
                    timeframe: signal.timeframe,
                });
            }
            *slot = Some(signal.direction);
        }

        let mut directions = [Direction::Buy; 3];
        for timeframe in Timeframe::iter() {
            directions[timeframe.index()] = slots[timeframe.index()]
                .ok_or(SignalSetError::MissingTimeframe { asset, timeframe })?;
        }

        let [short_term, mid_term, long_term] = directions;
        Ok(Self::new(asset, short_term, mid_term, long_term))
    }

    pub fn asset(&self) -> AssetId {
        self.asset
    }

    pub fn signals(&self) -> &[TimeframeSignal; 3] {
        &self.signals
    }

    pub fn direction_for(&self, timeframe: Timeframe) -> Direction {
        self.signals[timeframe.index()].direction
    }

    pub fn directions(&self) -> [Direction; 3] {
        self.signals.map(|s| s.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Direction::{Buy, Sell};

    #[test]
    fn signals_are_stored_in_timeframe_order() {
        let set = AssetSignalSet::from_signals(
            AssetId::Gold,
            [
                TimeframeSignal::new(Timeframe::LongTerm, Buy),
                TimeframeSignal::new(Timeframe::ShortTerm, Sell),
                TimeframeSignal::new(Timeframe::MidTerm, Sell),
            ],
        )
        .unwrap();

        assert_eq!(set.directions(), [Sell, Sell, Buy]);
        assert_eq!(set.direction_for(Timeframe::LongTerm), Buy);
        assert_eq!(set.signals()[0].timeframe, Timeframe::ShortTerm);
    }

    #[test]
    fn missing_timeframe_is_rejected() {
        let err = AssetSignalSet::from_signals(
            AssetId::Bitcoin,
            [
                TimeframeSignal::new(Timeframe::ShortTerm, Buy),
                TimeframeSignal::new(Timeframe::LongTerm, Buy),
            ],
        )
        .unwrap_err();

        assert_eq!(
            err,
            SignalSetError::MissingTimeframe {
                asset: AssetId::Bitcoin,
                timeframe: Timeframe::MidTerm,
            }
        );
    }

    #[test]
    fn duplicate_timeframe_is_rejected() {
        let err = AssetSignalSet::from_signals(
            AssetId::UsdJpy,
            [
                TimeframeSignal::new(Timeframe::ShortTerm, Buy),
                TimeframeSignal::new(Timeframe::ShortTerm, Sell),
                TimeframeSignal::new(Timeframe::LongTerm, Buy),
            ],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            SignalSetError::DuplicateTimeframe {
                timeframe: Timeframe::ShortTerm,
                ..
            }
        ));
    }

    #[test]
    fn empty_input_reports_first_missing_timeframe() {
        let err = AssetSignalSet::from_signals(AssetId::Gold, []).unwrap_err();
        assert!(matches!(
            err,
            SignalSetError::MissingTimeframe {
                timeframe: Timeframe::ShortTerm,
                ..
            }
        ));
    }

    #[test]
    fn timeframe_labels_match_chart_intervals() {
        let labels: Vec<String> = Timeframe::iter().map(|tf| tf.to_string()).collect();
        assert_eq!(labels, ["5m", "15m", "1h"]);
    }
}
