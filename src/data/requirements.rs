//! Parsing of the `requirements.txt` manifest for the package-info view.

/// One pinned (or unpinned) dependency line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub version: Option<String>,
}

impl Requirement {
    pub fn description(&self) -> Option<&'static str> {
        describe(&self.name)
    }
}

const PACKAGE_DESCRIPTIONS: &[(&str, &str)] = &[
    ("streamlit", "Framework for the interactive web interface"),
    ("yfinance", "Downloads real-time price data (Yahoo Finance)"),
    ("pandas", "Tabular data handling and analysis"),
    ("numpy", "Mathematical and statistical calculations"),
    ("matplotlib", "Charts and visualisations"),
    ("statsmodels", "Provides the ARIMA model for price forecasts"),
    ("arch", "Provides the GARCH model for volatility"),
];

/// Reads `name==version` lines. Blank lines and `#` comments are skipped, trailing
/// comments are dropped, and a line without a pin keeps `version = None`.
pub fn parse(text: &str) -> Vec<Requirement> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once("==") {
            Some((name, version)) => Requirement {
                name: name.trim().to_string(),
                version: Some(version.trim().to_string()).filter(|v| !v.is_empty()),
            },
            None => Requirement {
                name: line.to_string(),
                version: None,
            },
        })
        .collect()
}

pub fn describe(name: &str) -> Option<&'static str> {
    PACKAGE_DESCRIPTIONS
        .iter()
        .find(|(package, _)| package.eq_ignore_ascii_case(name))
        .map(|(_, description)| *description)
}
