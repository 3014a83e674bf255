use crate::domain::{AssetSignalSet, Direction};

/// Whether an asset's timeframes agree, and on what.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentVerdict {
    pub aligned: bool,
    pub direction: Option<Direction>,
}

impl AlignmentVerdict {
    pub fn full(direction: Direction) -> Self {
        Self {
            aligned: true,
            direction: Some(direction),
        }
    }

    pub fn mixed() -> Self {
        Self {
            aligned: false,
            direction: None,
        }
    }
}

/// Full confluence requires all three timeframes to point the same way.
/// A single dissenting timeframe makes the market mixed; there is no majority rule.
pub fn evaluate(signals: &AssetSignalSet) -> AlignmentVerdict {
    let [short_term, mid_term, long_term] = signals.directions();

    if short_term == mid_term && mid_term == long_term {
        AlignmentVerdict::full(short_term)
    } else {
        AlignmentVerdict::mixed()
    }
}
