use strum_macros::{Display, EnumIter};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The four top-level sections of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Section {
    #[default]
    #[strum(to_string = "Preview")]
    Preview,
    #[strum(to_string = "Python Code")]
    Code,
    #[strum(to_string = "Requirements.txt")]
    Requirements,
    #[strum(to_string = "Package Info")]
    PackageInfo,
}

impl Section {
    pub fn icon(self) -> &'static str {
        match self {
            Section::Preview => "📈",
            Section::Code => "🗋",
            Section::Requirements => "📦",
            Section::PackageInfo => "ℹ",
        }
    }
}

/// Everything the user can change about what is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    SelectSection(Section),
    ToggleLegend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub active_section: Section,
    pub legend_expanded: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_section: Section::Preview,
            legend_expanded: true,
        }
    }
}

impl ViewState {
    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::SelectSection(section) => self.select_section(section),
            ViewAction::ToggleLegend => self.toggle_legend(),
        }
    }

    pub fn select_section(&mut self, section: Section) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions && self.active_section != section {
            log::info!("Section: {} -> {}", self.active_section, section);
        }
        self.active_section = section;
    }

    pub fn toggle_legend(&mut self) {
        self.legend_expanded = !self.legend_expanded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn starts_on_preview_with_legend_open() {
        let view = ViewState::default();
        assert_eq!(view.active_section, Section::Preview);
        assert!(view.legend_expanded);
    }

    #[test]
    fn selecting_a_section_keeps_legend_state() {
        let mut view = ViewState::default();
        view.apply(ViewAction::ToggleLegend);

        for section in Section::iter() {
            view.apply(ViewAction::SelectSection(section));
            assert_eq!(view.active_section, section);
            assert!(!view.legend_expanded);
        }
    }

    #[test]
    fn toggling_twice_restores_legend() {
        let mut view = ViewState::default();
        view.toggle_legend();
        assert!(!view.legend_expanded);
        view.toggle_legend();
        assert!(view.legend_expanded);
        assert_eq!(view.active_section, Section::Preview);
    }
}
