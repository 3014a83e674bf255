use eframe::egui::{
    Align, Button, CentralPanel, Context, Frame, Grid, Layout, Margin, RichText, ScrollArea, Spinner,
    TopBottomPanel, Ui,
};
use std::time::Duration;

use crate::analysis::AlignmentVerdict;
use crate::data::{ArtifactId, ArtifactStatus, requirements};
use crate::domain::AssetSnapshot;
use crate::ui::app::DownloadNotice;
use crate::ui::ui_panels::{ArtifactEvent, ArtifactPanel, LegendPanel, Panel, TabBarPanel};
use crate::ui::view_state::Section;

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{
    banner_frame, card_frame, colored_subsection_heading, direction_color, format_change_pct,
    format_price, package_table_note, section_heading, spaced_separator, tier_color,
};

use super::app::DashboardApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// How long a download result stays in the footer.
const NOTICE_DISPLAY: Duration = Duration::from_secs(5);

impl DashboardApp {
    pub(super) fn render_header_panel(&mut self, ctx: &Context) {
        let header_frame = Frame::new()
            .fill(UI_CONFIG.colors.header_panel)
            .inner_margin(Margin::symmetric(16, 10));

        TopBottomPanel::top("header_panel")
            .frame(header_frame)
            .show(ctx, |ui| {
                let mut artifact_events = Vec::new();

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(UI_TEXT.app_title)
                                .size(24.0)
                                .strong()
                                .color(UI_CONFIG.colors.heading),
                        );
                        ui.label_subdued(UI_TEXT.app_subtitle);
                    });

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        for id in [ArtifactId::Requirements, ArtifactId::AppScript] {
                            let ready = self.artifacts.get_cached(id).is_ready();
                            let label = format!("{} {}", UI_TEXT.download_button, id);
                            if ui.add_enabled(ready, Button::new(label)).clicked() {
                                artifact_events.push(ArtifactEvent::Download(id));
                            }
                        }
                    });
                });

                ui.add_space(8.0);
                let view_events = TabBarPanel::new(self.view.active_section).render(ui);
                for action in view_events {
                    self.view.apply(action);
                }

                for event in artifact_events {
                    self.handle_artifact_event(event);
                }
            });
    }

    pub(super) fn render_footer_panel(&mut self, ctx: &Context) {
        let footer_frame = Frame::new()
            .fill(UI_CONFIG.colors.header_panel)
            .inner_margin(Margin::symmetric(8, 4));

        TopBottomPanel::bottom("footer_panel")
            .frame(footer_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.is_loading() {
                        ui.add(Spinner::new());
                        ui.label_subdued(UI_TEXT.loading);
                        ui.separator();
                    }

                    match self.snapshot.generated_at {
                        Some(at) => {
                            ui.metric(
                                UI_TEXT.feed_generated_prefix,
                                &at.format("%Y-%m-%d %H:%M UTC").to_string(),
                                UI_CONFIG.colors.subsection_heading,
                            );
                        }
                        _ => ui.label_subdued(UI_TEXT.feed_untimed_note),
                    }

                    self.render_notice(ui);

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued(UI_TEXT.footer);
                    });
                });
            });
    }

    fn render_notice(&mut self, ui: &mut Ui) {
        let Some(age) = self.notice.as_ref().map(|(shown_at, _)| shown_at.elapsed()) else {
            return;
        };
        if age >= NOTICE_DISPLAY {
            self.notice = None;
            return;
        }
        let Some((_, notice)) = &self.notice else {
            return;
        };

        ui.separator();
        match notice {
            DownloadNotice::Saved(path) => ui.metric(
                UI_TEXT.saved_prefix,
                &path.display().to_string(),
                UI_CONFIG.colors.buy,
            ),
            DownloadNotice::Failed(reason) => {
                ui.label_error(format!("{} {}", UI_TEXT.save_failed_prefix, reason))
            }
        }
        ui.ctx().request_repaint_after(NOTICE_DISPLAY - age);
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(16));

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .id_salt(self.view.active_section.to_string())
                    .show(ui, |ui| match self.view.active_section {
                        Section::Preview => self.render_preview(ui),
                        Section::Code => self.render_artifact_section(ui, ArtifactId::AppScript),
                        Section::Requirements => {
                            self.render_artifact_section(ui, ArtifactId::Requirements)
                        }
                        Section::PackageInfo => self.render_package_info(ui),
                    });
            });
    }

    fn render_preview(&mut self, ui: &mut Ui) {
        let legend_events = LegendPanel::new(self.view.legend_expanded).render(ui);
        for action in legend_events {
            self.view.apply(action);
        }

        spaced_separator(ui);

        let verdicts: Vec<AlignmentVerdict> = self.verdicts().collect();
        for (asset, verdict) in self.snapshot.assets.iter().zip(verdicts) {
            Self::render_asset_card(ui, asset, verdict);
            ui.add_space(12.0);
        }
    }

    fn render_asset_card(ui: &mut Ui, asset: &AssetSnapshot, verdict: AlignmentVerdict) {
        let id = asset.asset();

        card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(id.label()).size(18.0).strong());
            ui.label_subdued(id.ticker());
            ui.add_space(8.0);

            ui.columns(2, |columns| {
                let forecast = asset.forecast;
                let (trend_text, trend_color) = if forecast.is_rising() {
                    (UI_TEXT.forecast_rising, UI_CONFIG.colors.buy)
                } else {
                    (UI_TEXT.forecast_falling, UI_CONFIG.colors.sell)
                };
                let ui = &mut columns[0];
                ui.label_subheader(UI_TEXT.forecast_heading);
                ui.label(
                    RichText::new(format_price(forecast.price, id.currency_symbol()))
                        .size(20.0)
                        .strong()
                        .color(trend_color),
                );
                ui.label(
                    RichText::new(format!("{} {}", format_change_pct(forecast.change_pct), trend_text))
                        .color(trend_color),
                );

                let volatility = asset.volatility;
                let ui = &mut columns[1];
                ui.label_subheader(UI_TEXT.volatility_heading);
                ui.label(
                    RichText::new(format!("{:.1}%", volatility.pct))
                        .size(20.0)
                        .strong()
                        .color(tier_color(volatility.tier)),
                );
                ui.label(RichText::new(volatility.tier.to_string()).color(tier_color(volatility.tier)));
            });

            ui.add_space(8.0);
            ui.columns(3, |columns| {
                for (column, signal) in columns.iter_mut().zip(asset.signals.signals()) {
                    Frame::new()
                        .fill(UI_CONFIG.colors.inset_fill)
                        .inner_margin(Margin::same(8))
                        .show(column, |ui| {
                            ui.set_min_width(ui.available_width());
                            ui.vertical_centered(|ui| {
                                let title = format!("{} {}", UI_TEXT.timeframe_prefix, signal.timeframe);
                                ui.label(RichText::new(title).strong());
                                ui.allocate_ui(
                                    [ui.available_width(), UI_CONFIG.chart_placeholder_height].into(),
                                    |ui| {
                                        ui.centered_and_justified(|ui| {
                                            ui.label_subdued(format!(
                                                "[{} {}]",
                                                UI_TEXT.chart_placeholder, signal.timeframe
                                            ));
                                        });
                                    },
                                );
                                ui.badge(
                                    format!(" {} ", signal.direction),
                                    direction_color(signal.direction),
                                );
                            });
                        });
                }
            });

            ui.add_space(8.0);
            Self::render_alignment_banner(ui, verdict);
        });
    }

    fn render_alignment_banner(ui: &mut Ui, verdict: AlignmentVerdict) {
        let (text, color) = match verdict.direction {
            Some(direction) if verdict.aligned => (
                format!(
                    "{} {} {}",
                    UI_TEXT.aligned_banner_prefix, direction, UI_TEXT.aligned_banner_suffix
                ),
                UI_CONFIG.colors.aligned_banner,
            ),
            _ => (UI_TEXT.mixed_banner.to_string(), UI_CONFIG.colors.mixed_banner),
        };

        banner_frame(color).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(text).strong().color(color));
            });
        });
    }

    fn render_artifact_section(&mut self, ui: &mut Ui, id: ArtifactId) {
        let artifact = self.artifacts.get_cached(id);
        let heading = match id {
            ArtifactId::AppScript => UI_TEXT.code_heading,
            ArtifactId::Requirements => UI_TEXT.requirements_heading,
        };
        let copied = self.feedback.is_active(id.copy_id());

        let events = ArtifactPanel::new(&artifact, heading, copied).render(ui);
        for event in events {
            self.handle_artifact_event(event);
        }
    }

    fn render_package_info(&mut self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.packages_heading);
        ui.label(colored_subsection_heading(UI_TEXT.packages_title).size(18.0).strong());
        ui.add_space(10.0);

        ui.label_subheader(UI_TEXT.install_heading);
        ui.label_command(UI_TEXT.install_command);
        ui.add_space(10.0);

        ui.label_subheader(UI_TEXT.packages_table_heading);
        let artifact = self.artifacts.get_cached(ArtifactId::Requirements);
        let packages = match artifact.status {
            ArtifactStatus::Loaded => requirements::parse(&artifact.content),
            _ => Vec::new(),
        };

        if let Some(note) = package_table_note(artifact.status, packages.len()) {
            if artifact.status == ArtifactStatus::Failed {
                ui.label_error(note);
            } else {
                ui.label_subdued(note);
            }
        } else {
            Grid::new("packages_grid")
                .num_columns(3)
                .spacing([20.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label(RichText::new(UI_TEXT.packages_column_name).strong());
                    ui.label(RichText::new(UI_TEXT.packages_column_version).strong());
                    ui.label(RichText::new(UI_TEXT.packages_column_purpose).strong());
                    ui.end_row();

                    for package in &packages {
                        ui.label(RichText::new(&package.name).monospace().color(UI_CONFIG.colors.accent));
                        ui.label_subdued(package.version.as_deref().unwrap_or(UI_TEXT.packages_unpinned));
                        ui.label(package.description().unwrap_or(UI_TEXT.packages_unknown_purpose));
                        ui.end_row();
                    }
                });
        }

        spaced_separator(ui);
        ui.label_subheader(UI_TEXT.run_heading);
        ui.label_command(UI_TEXT.run_command);

        ui.add_space(10.0);
        ui.label_subheader(UI_TEXT.layout_heading);
        for line in UI_TEXT.layout_lines {
            ui.label_command(*line);
        }

        ui.add_space(10.0);
        ui.label_subheader(UI_TEXT.deploy_heading);
        for (i, step) in UI_TEXT.deploy_steps.iter().enumerate() {
            ui.label(format!("{}. {}", i + 1, step));
        }
    }

    pub(super) fn handle_artifact_event(&mut self, event: ArtifactEvent) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("UI event: {:?}", event);
        }

        match event {
            ArtifactEvent::Copy(id) => {
                let artifact = self.artifacts.get_cached(id);
                if artifact.is_ready() {
                    // A rejected write is logged by the controller and leaves the button as is.
                    let _ = self.feedback.copy(&artifact.content, id.copy_id());
                }
            }
            ArtifactEvent::Download(id) => self.start_download(id),
            ArtifactEvent::Retry(id) => self.start_artifact_load(id),
        }
    }
}
