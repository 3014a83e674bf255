use eframe::egui::{Color32, Context, CornerRadius, Frame, Margin, RichText, Stroke, Ui, Visuals};

use crate::data::ArtifactStatus;
use crate::domain::{Direction, VolatilityTier};
use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase() + ":";
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Creates a colored sub-section heading using the configured label color
pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    // Customize the dark theme
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.extreme_bg_color = UI_CONFIG.colors.inset_fill; // code views

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    // Set the custom visuals
    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Rounded, outlined frame used for asset cards and glossary entries.
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(UI_CONFIG.colors.card_fill)
        .stroke(Stroke::new(1.0, UI_CONFIG.colors.card_stroke))
        .corner_radius(CornerRadius::same(UI_CONFIG.card_rounding))
        .inner_margin(Margin::same(12))
}

/// Tinted full-width frame for the confluence banner.
pub fn banner_frame(color: Color32) -> Frame {
    Frame::new()
        .fill(color.gamma_multiply(0.15))
        .stroke(Stroke::new(1.5, color))
        .corner_radius(CornerRadius::same(UI_CONFIG.card_rounding))
        .inner_margin(Margin::symmetric(12, 8))
}

pub fn direction_color(direction: Direction) -> Color32 {
    match direction {
        Direction::Buy => UI_CONFIG.colors.buy,
        Direction::Sell => UI_CONFIG.colors.sell,
    }
}

pub fn tier_color(tier: VolatilityTier) -> Color32 {
    match tier {
        VolatilityTier::Low => UI_CONFIG.colors.buy,
        VolatilityTier::Normal => Color32::from_rgb(250, 204, 21),
        VolatilityTier::High => Color32::from_rgb(251, 146, 60),
        VolatilityTier::VeryHigh => UI_CONFIG.colors.sell,
    }
}

/// Formats a forecast price with two decimals and thousands separators.
/// - Gold: $2,347.50
/// - Yen:  ¥157.32
pub fn format_price(price: f64, currency_symbol: &str) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", price.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{currency_symbol}{grouped}.{fraction}")
}

/// Signed percentage, e.g. "+0.45%" or "-0.23%".
pub fn format_change_pct(change_pct: f64) -> String {
    format!("{:+.2}%", change_pct)
}

/// What to show in place of the package table, if anything.
pub fn package_table_note(status: ArtifactStatus, package_count: usize) -> Option<&'static str> {
    match status {
        ArtifactStatus::Unloaded | ArtifactStatus::Loading => Some(UI_TEXT.packages_loading),
        ArtifactStatus::Failed => Some(UI_TEXT.packages_failed),
        ArtifactStatus::Loaded if package_count == 0 => Some(UI_TEXT.packages_none),
        ArtifactStatus::Loaded => None,
    }
}
