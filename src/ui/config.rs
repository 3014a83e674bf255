use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub header_panel: Color32,
    pub card_fill: Color32,
    pub card_stroke: Color32,
    pub inset_fill: Color32,
    pub buy: Color32,
    pub sell: Color32,
    pub aligned_banner: Color32,
    pub mixed_banner: Color32,
    pub accent: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub card_rounding: u8,
    pub code_view_max_height: f32,
    pub chart_placeholder_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::from_rgb(251, 146, 60), // Orange headings throughout
        subsection_heading: Color32::from_rgb(96, 165, 250),
        central_panel: Color32::from_rgb(24, 27, 33),
        header_panel: Color32::from_rgb(17, 19, 24),
        card_fill: Color32::from_rgb(31, 41, 55),
        card_stroke: Color32::from_rgb(55, 65, 81),
        inset_fill: Color32::from_rgb(17, 24, 39),
        buy: Color32::from_rgb(74, 222, 128),
        sell: Color32::from_rgb(248, 113, 113),
        aligned_banner: Color32::from_rgb(251, 146, 60),
        mixed_banner: Color32::from_rgb(96, 165, 250),
        accent: Color32::from_rgb(192, 132, 252),
    },
    card_rounding: 8,
    code_view_max_height: 600.0,
    chart_placeholder_height: 72.0,
};
