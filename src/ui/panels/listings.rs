// SimHire - ui/panels/listings.rs
//
// Listing cards in the central area, one per visible record, in catalog
// order. Clicking a card selects it for the detail pane.

use crate::app::state::AppState;
use crate::core::model::ListingRecord;
use crate::ui::theme;
use crate::util::constants;

/// Render the listings panel (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let visible = state.visible_indices();

    if visible.is_empty() {
        ui.centered_and_justified(|ui| {
            if state.records.is_empty() {
                ui.label("No listings loaded.\nOpen a catalog via File \u{2192} Open Catalog.");
            } else {
                ui.label("No listings match the current filters.");
            }
        });
        return;
    }

    // Applied after the loop so `record` borrows of `state.records` end first.
    let mut clicked: Option<usize> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for idx in visible {
                let Some(record) = state.records.get(idx) else {
                    continue;
                };
                let is_selected = state.selected == Some(idx);
                if card(ui, record, is_selected).clicked() {
                    clicked = Some(idx);
                }
                ui.add_space(theme::CARD_SPACING);
            }
        });

    if let Some(idx) = clicked {
        state.selected = Some(idx);
        tracing::debug!(listing_id = %state.records[idx].id, "Listing selected");
    }
}

fn card(ui: &mut egui::Ui, record: &ListingRecord, is_selected: bool) -> egui::Response {
    let stroke = if is_selected {
        egui::Stroke::new(2.0, theme::ACCENT)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };

    let inner = egui::Frame::group(ui.style())
        .stroke(stroke)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                badge(ui, record.level.label(), theme::level_colour(&record.level));
                badge(
                    ui,
                    record.category.label(),
                    theme::category_colour(&record.category),
                );
            });

            ui.label(egui::RichText::new(&record.title).size(16.0).strong());
            ui.label(egui::RichText::new(&record.organization).weak());

            ui.horizontal_wrapped(|ui| {
                ui.label(format!("${}", record.price));
                if !record.duration.is_empty() {
                    ui.label(format!("\u{23f1} {}", record.duration));
                }
                if !record.location.is_empty() {
                    ui.label(format!("\u{1f4cd} {}", record.location));
                }
                if let Some(date) = record.start_date {
                    ui.label(format!("Starts {}", date.format("%d %b %Y")));
                }
            });

            if record.rating.is_some() || record.participants.is_some() {
                ui.horizontal(|ui| {
                    if let Some(rating) = record.rating {
                        ui.label(format!("\u{2605} {rating:.1}"));
                    }
                    if let Some(n) = record.participants {
                        ui.label(format!("{n} participants"));
                    }
                });
            }

            if !record.description.is_empty() {
                ui.label(preview(&record.description));
            }

            if !record.tags.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    for tag in &record.tags {
                        ui.label(egui::RichText::new(tag).small().code());
                    }
                });
            }
        });

    inner.response.interact(egui::Sense::click())
}

fn badge(ui: &mut egui::Ui, text: &str, colour: egui::Color32) {
    ui.label(
        egui::RichText::new(format!(" {text} "))
            .small()
            .strong()
            .color(egui::Color32::WHITE)
            .background_color(colour),
    );
}

/// First `CARD_DESCRIPTION_PREVIEW_CHARS` characters, with an ellipsis when cut.
fn preview(text: &str) -> String {
    let limit = constants::CARD_DESCRIPTION_PREVIEW_CHARS;
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}\u{2026}", cut.trim_end())
}
