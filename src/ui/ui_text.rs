pub struct LegendItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct UiText {
    pub window_title: &'static str,
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub footer: &'static str,

    pub legend_heading: &'static str,
    pub legend_items: &'static [LegendItem],
    pub rules_heading: &'static str,
    pub rules: &'static [&'static str],

    pub forecast_heading: &'static str,
    pub volatility_heading: &'static str,
    pub forecast_rising: &'static str,
    pub forecast_falling: &'static str,
    pub timeframe_prefix: &'static str,
    pub chart_placeholder: &'static str,
    pub aligned_banner_prefix: &'static str,
    pub aligned_banner_suffix: &'static str,
    pub mixed_banner: &'static str,
    pub feed_generated_prefix: &'static str,
    pub feed_untimed_note: &'static str,

    pub code_heading: &'static str,
    pub requirements_heading: &'static str,
    pub copy_button: &'static str,
    pub copied_button: &'static str,
    pub download_button: &'static str,
    pub retry_button: &'static str,
    pub loading: &'static str,
    pub saved_prefix: &'static str,
    pub save_failed_prefix: &'static str,

    pub packages_heading: &'static str,
    pub packages_title: &'static str,
    pub install_heading: &'static str,
    pub install_command: &'static str,
    pub packages_table_heading: &'static str,
    pub packages_column_name: &'static str,
    pub packages_column_version: &'static str,
    pub packages_column_purpose: &'static str,
    pub packages_unpinned: &'static str,
    pub packages_unknown_purpose: &'static str,
    pub packages_loading: &'static str,
    pub packages_failed: &'static str,
    pub packages_none: &'static str,
    pub run_heading: &'static str,
    pub run_command: &'static str,
    pub layout_heading: &'static str,
    pub layout_lines: &'static [&'static str],
    pub deploy_heading: &'static str,
    pub deploy_steps: &'static [&'static str],
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Control Maestro v9.0 - Confluence Dashboard",
    app_title: "Control Maestro v9.0",
    app_subtitle: "ARIMA + GARCH + Technical Analysis",
    footer: "Control Maestro v9.0 | ARIMA + GARCH + Institutional Technical Analysis",

    legend_heading: "📖 QUICK GUIDE: What does all this mean?",
    legend_items: &[
        LegendItem {
            icon: "📊",
            title: "POC (Red Line)",
            description: "Price with the MOST volume. Acts as strong support/resistance.",
        },
        LegendItem {
            icon: "📈",
            title: "VWAP (Cyan Line)",
            description: "Volume-weighted average price of the day. Above = bullish. Below = bearish.",
        },
        LegendItem {
            icon: "💠",
            title: "Blue Diamond",
            description: "High volume + low volatility. A change of direction may be near.",
        },
        LegendItem {
            icon: "🔮",
            title: "ARIMA",
            description: "Forecasts the future price. Green ↑ = rising. Red ↓ = falling.",
        },
        LegendItem {
            icon: "📉",
            title: "GARCH",
            description: "Measures future volatility. High = more risk, reduce position size.",
        },
        LegendItem {
            icon: "🔥",
            title: "MASTER FIRE",
            description: "When 5m, 15m and 1h agree. The strongest signal!",
        },
    ],
    rules_heading: "⚡ SIMPLE TRADING RULES:",
    rules: &[
        "🔥 MASTER FIRE → consider entering in that direction",
        "📈 ARIMA rising + low GARCH → good BUY opportunity",
        "📉 ARIMA falling + low GARCH → good SELL opportunity",
        "⚠ GARCH VERY HIGH → CAREFUL! Reduce your risk",
        "⚖ Timeframes disagree → DO NOT TRADE, wait",
    ],

    forecast_heading: "🔮 ARIMA - Forecast",
    volatility_heading: "📉 GARCH - Volatility",
    forecast_rising: "RISING 📈",
    forecast_falling: "FALLING 📉",
    timeframe_prefix: "TF:",
    chart_placeholder: "Chart",
    aligned_banner_prefix: "🔥🔥🔥 MASTER FIRE DETECTED! FULL",
    aligned_banner_suffix: "ALIGNMENT 🔥🔥🔥",
    mixed_banner: "⚖ MIXED MARKET: timeframes disagree. Wait for better alignment.",
    feed_generated_prefix: "Pipeline run:",
    feed_untimed_note: "No pipeline timestamp (demo values)",

    code_heading: "🗋 app.py - Analysis Script",
    requirements_heading: "📦 requirements.txt",
    copy_button: "🗐 Copy",
    copied_button: "✔ Copied!",
    download_button: "⬇ Download",
    retry_button: "⟳ Retry",
    loading: "Loading...",
    saved_prefix: "Saved",
    save_failed_prefix: "Download failed:",

    packages_heading: "ℹ Package Information",
    packages_title: "📦 Project Dependencies",
    install_heading: "Quick install:",
    install_command: "pip install -r requirements.txt",
    packages_table_heading: "What each package is for:",
    packages_column_name: "Package",
    packages_column_version: "Version",
    packages_column_purpose: "Purpose",
    packages_unpinned: "any",
    packages_unknown_purpose: "-",
    packages_loading: "requirements.txt has not been loaded yet",
    packages_failed: "requirements.txt could not be loaded. Retry from the Requirements.txt tab.",
    packages_none: "requirements.txt lists no packages",
    run_heading: "Run the application:",
    run_command: "streamlit run app.py",
    layout_heading: "Recommended file layout:",
    layout_lines: &[
        "your-project/",
        "  ├── app.py              # Main script",
        "  ├── requirements.txt    # Dependencies",
        "  └── README.md           # Documentation (optional)",
    ],
    deploy_heading: "💡 Publishing to Streamlit Cloud:",
    deploy_steps: &[
        "Push your project with app.py and requirements.txt to GitHub",
        "Go to share.streamlit.io",
        "Connect your GitHub repository",
        "Select app.py as the entry point",
        "Done! Your app is online",
    ],
};
