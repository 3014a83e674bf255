// Loads the forecasting pipeline's published output.

use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::config::DEMO;
use crate::domain::{AssetSignalSet, AssetSnapshot, Forecast, SignalSnapshot, Volatility};

/// Reads a snapshot written by the pipeline (JSON).
pub fn load_snapshot(path: &Path) -> Result<SignalSnapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read signal feed {}", path.display()))?;
    let snapshot: SignalSnapshot = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse signal feed {}", path.display()))?;

    if snapshot.assets.is_empty() {
        bail!("Signal feed {} contains no assets", path.display());
    }
    Ok(snapshot)
}

/// The built-in snapshot from `DEMO`.
pub fn demo_snapshot() -> SignalSnapshot {
    let assets = DEMO
        .assets
        .iter()
        .map(|demo| {
            let [short_term, mid_term, long_term] = demo.directions;
            AssetSnapshot {
                forecast: Forecast {
                    price: demo.forecast_price,
                    change_pct: demo.forecast_change_pct,
                },
                volatility: Volatility {
                    pct: demo.volatility_pct,
                    tier: demo.volatility_tier,
                },
                signals: AssetSignalSet::new(demo.asset, short_term, mid_term, long_term),
            }
        })
        .collect();

    SignalSnapshot {
        generated_at: None,
        assets,
    }
}

/// Uses the feed at `path` when given and readable; otherwise the demo snapshot.
/// A bad feed never stops the dashboard from starting.
pub fn snapshot_or_demo(path: Option<&Path>) -> SignalSnapshot {
    let Some(path) = path else {
        log::info!("No signal feed given, showing the built-in demo snapshot");
        return demo_snapshot();
    };

    match load_snapshot(path) {
        Ok(snapshot) => {
            log::info!(
                "Loaded {} assets from signal feed {}",
                snapshot.assets.len(),
                path.display()
            );
            snapshot
        }
        Err(e) => {
            log::warn!("⚠️  {:#}", e);
            log::warn!("⚠️  Falling back to the built-in demo snapshot...");
            demo_snapshot()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AlignmentVerdict, evaluate};
    use crate::domain::{AssetId, Direction, Timeframe, VolatilityTier};

    const FEED: &str = r#"{
        "generated_at": "2026-10-16T09:30:00Z",
        "assets": [
            {
                "asset": "bitcoin",
                "forecast": { "price": 68000.0, "change_pct": 0.8 },
                "volatility": { "pct": 30.1, "tier": "very_high" },
                "signals": [
                    { "timeframe": "long_term", "direction": "sell" },
                    { "timeframe": "short_term", "direction": "sell" },
                    { "timeframe": "mid_term", "direction": "sell" }
                ]
            }
        ]
    }"#;

    fn write_feed(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signals.json");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn demo_snapshot_matches_published_run() {
        let snapshot = demo_snapshot();
        let verdicts: Vec<(AssetId, AlignmentVerdict)> = snapshot
            .assets
            .iter()
            .map(|a| (a.asset(), evaluate(&a.signals)))
            .collect();

        assert_eq!(
            verdicts,
            vec![
                (AssetId::Gold, AlignmentVerdict::full(Direction::Buy)),
                (AssetId::UsdJpy, AlignmentVerdict::mixed()),
                (AssetId::Bitcoin, AlignmentVerdict::full(Direction::Buy)),
            ]
        );
        assert_eq!(snapshot.assets[1].volatility.tier, VolatilityTier::Low);
        assert!(!snapshot.assets[1].forecast.is_rising());
    }

    #[test]
    fn loads_feed_with_unordered_signals() {
        let (_dir, path) = write_feed(FEED);

        let snapshot = load_snapshot(&path).unwrap();

        assert!(snapshot.generated_at.is_some());
        let btc = &snapshot.assets[0];
        assert_eq!(btc.asset(), AssetId::Bitcoin);
        assert_eq!(btc.signals.direction_for(Timeframe::ShortTerm), Direction::Sell);
        assert_eq!(evaluate(&btc.signals), AlignmentVerdict::full(Direction::Sell));
    }

    #[test]
    fn feed_with_partial_signal_set_is_rejected() {
        let partial = FEED.replace(
            r#"{ "timeframe": "mid_term", "direction": "sell" }"#,
            r#"{ "timeframe": "long_term", "direction": "buy" }"#,
        );
        let (_dir, path) = write_feed(&partial);

        let err = load_snapshot(&path).unwrap_err();
        assert!(format!("{err:#}").contains("more than once"), "{err:#}");
    }

    #[test]
    fn unreadable_feed_falls_back_to_demo() {
        let (_dir, path) = write_feed("{ not json");
        assert_eq!(snapshot_or_demo(Some(&path)), demo_snapshot());
        assert_eq!(snapshot_or_demo(None), demo_snapshot());
    }

    #[test]
    fn empty_feed_is_rejected() {
        let (_dir, path) = write_feed(r#"{ "assets": [] }"#);
        assert!(load_snapshot(&path).is_err());
    }
}
