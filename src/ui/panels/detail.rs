// SimHire - ui/panels/detail.rs
//
// Detail pane showing every field of the selected listing.

use crate::app::state::AppState;

/// Render the detail pane (bottom panel).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(record) = state.selected_record() else {
        ui.centered_and_justified(|ui| {
            ui.label("Select a listing to view details.");
        });
        return;
    };

    ui.horizontal(|ui| {
        ui.heading(&record.title);
        if state.debug_mode {
            ui.label(egui::RichText::new(format!("#{}", record.id)).weak());
        }
    });

    egui::Grid::new("detail_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Organization:");
            ui.label(&record.organization);
            ui.end_row();

            ui.label("Category:");
            ui.label(record.category.label());
            ui.end_row();

            ui.label("Level:");
            ui.label(record.level.label());
            ui.end_row();

            ui.label("Price:");
            ui.label(format!("${}", record.price));
            ui.end_row();

            if !record.duration.is_empty() {
                ui.label("Duration:");
                ui.label(&record.duration);
                ui.end_row();
            }

            if !record.location.is_empty() {
                ui.label("Location:");
                ui.label(&record.location);
                ui.end_row();
            }

            if let Some(date) = record.start_date {
                ui.label("Start date:");
                ui.label(date.format("%d %B %Y").to_string());
                ui.end_row();
            }

            if let Some(schedule) = record.schedule {
                ui.label("Schedule:");
                ui.label(schedule.label());
                ui.end_row();
            }

            if let Some(employment) = record.employment {
                ui.label("Employment:");
                ui.label(employment.label());
                ui.end_row();
            }

            if let Some(style) = record.work_style {
                ui.label("Work style:");
                ui.label(style.label());
                ui.end_row();
            }

            if let Some(rating) = record.rating {
                ui.label("Rating:");
                ui.label(format!("{rating:.1} / 5"));
                ui.end_row();
            }

            if let Some(count) = record.participants {
                ui.label("Participants:");
                ui.label(count.to_string());
                ui.end_row();
            }

            if !record.tags.is_empty() {
                ui.label("Skills:");
                ui.label(record.tags.join(", "));
                ui.end_row();
            }
        });

    if !record.description.is_empty() {
        ui.separator();
        egui::ScrollArea::vertical()
            .max_height(80.0)
            .show(ui, |ui| {
                ui.label(&record.description);
            });
    }
}
