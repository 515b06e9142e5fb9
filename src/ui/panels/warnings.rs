// SimHire - ui/panels/warnings.rs
//
// Window listing non-fatal warnings (skipped listings, config problems).

use crate::app::state::AppState;

/// Render the warnings window (if `state.show_warnings` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_warnings {
        return;
    }

    let mut open = true;
    let mut clear = false;
    egui::Window::new(format!("Warnings ({})", state.warnings.len()))
        .id(egui::Id::new("warnings_window"))
        .open(&mut open)
        .collapsible(false)
        .default_width(480.0)
        .show(ctx, |ui| {
            if state.warnings.is_empty() {
                ui.label("No warnings.");
                return;
            }
            egui::ScrollArea::vertical()
                .max_height(300.0)
                .show(ui, |ui| {
                    let colour = ui.visuals().warn_fg_color;
                    for warning in &state.warnings {
                        ui.label(egui::RichText::new(warning).color(colour));
                        ui.separator();
                    }
                });
            if ui.button("Clear").clicked() {
                clear = true;
            }
        });

    if clear {
        state.warnings.clear();
    }
    if !open {
        state.show_warnings = false;
    }
}
