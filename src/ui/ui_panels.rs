use eframe::egui::{Button, RichText, ScrollArea, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::data::{Artifact, ArtifactId, ArtifactStatus};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{card_frame, colored_subsection_heading, section_heading};
use crate::ui::view_state::{Section, ViewAction};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Row of section tabs under the header.
pub struct TabBarPanel {
    active: Section,
}

impl TabBarPanel {
    pub fn new(active: Section) -> Self {
        Self { active }
    }
}

impl Panel for TabBarPanel {
    type Event = ViewAction;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            for section in Section::iter() {
                let text = RichText::new(format!("{} {}", section.icon(), section)).strong();
                if ui.selectable_label(self.active == section, text).clicked() {
                    events.push(ViewAction::SelectSection(section));
                }
            }
        });
        events
    }
}

/// Collapsible glossary of indicators plus the trading rules.
pub struct LegendPanel {
    expanded: bool,
}

impl LegendPanel {
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    fn render_glossary(&self, ui: &mut Ui) {
        ui.columns(3, |columns| {
            for (i, item) in UI_TEXT.legend_items.iter().enumerate() {
                let ui = &mut columns[i % 3];
                card_frame().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(
                        RichText::new(format!("{} {}", item.icon, item.title))
                            .strong()
                            .color(UI_CONFIG.colors.accent),
                    );
                    ui.label_subdued(item.description);
                });
                ui.add_space(6.0);
            }
        });
    }

    fn render_rules(&self, ui: &mut Ui) {
        ui.add_space(6.0);
        ui.label(colored_subsection_heading(UI_TEXT.rules_heading).strong());
        for rule in UI_TEXT.rules {
            ui.label(*rule);
        }
    }
}

impl Panel for LegendPanel {
    type Event = ViewAction;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        let arrow = if self.expanded { "▼" } else { "▶" };
        let header = RichText::new(format!("{arrow} {}", UI_TEXT.legend_heading))
            .strong()
            .color(UI_CONFIG.colors.heading);

        if ui.add(Button::new(header).frame(false)).clicked() {
            events.push(ViewAction::ToggleLegend);
        }

        if self.expanded {
            ui.add_space(6.0);
            self.render_glossary(ui);
            self.render_rules(ui);
        }
        events
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactEvent {
    Copy(ArtifactId),
    Download(ArtifactId),
    Retry(ArtifactId),
}

/// Read-only view of one artifact with copy and download actions.
pub struct ArtifactPanel<'a> {
    artifact: &'a Artifact,
    heading: &'static str,
    copied: bool,
}

impl<'a> ArtifactPanel<'a> {
    pub fn new(artifact: &'a Artifact, heading: &'static str, copied: bool) -> Self {
        Self {
            artifact,
            heading,
            copied,
        }
    }

    fn render_actions(&self, ui: &mut Ui, events: &mut Vec<ArtifactEvent>) {
        let id = self.artifact.id;
        ui.horizontal(|ui| {
            let copy_label = if self.copied {
                RichText::new(UI_TEXT.copied_button).color(UI_CONFIG.colors.buy)
            } else {
                RichText::new(UI_TEXT.copy_button)
            };
            let ready = self.artifact.is_ready();
            if ui.add_enabled(ready, Button::new(copy_label)).clicked() {
                events.push(ArtifactEvent::Copy(id));
            }
            if ui.add_enabled(ready, Button::new(UI_TEXT.download_button)).clicked() {
                events.push(ArtifactEvent::Download(id));
            }
            if self.artifact.status == ArtifactStatus::Failed
                && ui.button(UI_TEXT.retry_button).clicked()
            {
                events.push(ArtifactEvent::Retry(id));
            }
        });
    }
}

impl Panel for ArtifactPanel<'_> {
    type Event = ArtifactEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        section_heading(ui, self.heading);
        self.render_actions(ui, &mut events);
        ui.add_space(6.0);

        let mut text: &str = match self.artifact.status {
            ArtifactStatus::Unloaded | ArtifactStatus::Loading => UI_TEXT.loading,
            ArtifactStatus::Loaded | ArtifactStatus::Failed => &self.artifact.content,
        };

        ScrollArea::vertical()
            .max_height(UI_CONFIG.code_view_max_height)
            .id_salt(self.artifact.id.copy_id())
            .show(ui, |ui| {
                ui.add(
                    TextEdit::multiline(&mut text)
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });

        events
    }
}
