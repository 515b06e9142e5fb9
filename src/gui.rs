// SimHire - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and handles catalog switching from the menu.

use crate::app::catalog_mgr;
use crate::app::state::AppState;
use crate::ui;
use std::path::PathBuf;

/// The SimHire finder application.
pub struct SimHireApp {
    pub state: AppState,
    /// Starting directory for the Open Catalog dialog.
    catalog_dir: PathBuf,
}

impl SimHireApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState, catalog_dir: PathBuf) -> Self {
        Self { state, catalog_dir }
    }

    fn open_catalog_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Catalog", &["toml", "json"])
            .set_directory(&self.catalog_dir)
            .pick_file()
        else {
            return;
        };
        if let Some(parent) = path.parent() {
            self.catalog_dir = parent.to_path_buf();
        }
        let loaded = catalog_mgr::load_catalog(Some(&path));
        let failed = loaded.source == catalog_mgr::CatalogSource::Builtin;
        self.state.replace_catalog(loaded);
        if failed {
            self.state.status_message = format!(
                "Could not load '{}'; showing the built-in catalog.",
                path.display()
            );
            self.state.show_warnings = true;
        }
    }
}

/// Apply theme and font size to the egui context.
pub fn apply_style(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            let scale = match text_style {
                egui::TextStyle::Heading => 1.4,
                egui::TextStyle::Small => 0.75,
                _ => 1.0,
            };
            font_id.size = font_size * scale;
        }
    });
}

impl eframe::App for SimHireApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Catalog\u{2026}").clicked() {
                        ui.close_menu();
                        self.open_catalog_dialog();
                    }
                    if ui.button("Load Built-in Catalog").clicked() {
                        self.state.replace_catalog(catalog_mgr::load_catalog(None));
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Filters", |ui| {
                    if ui.button("Reset All").clicked() {
                        self.state.reset_filters();
                        ui.close_menu();
                    }
                });
                ui.menu_button("View", |ui| {
                    let label = if self.state.dark_mode {
                        "Light Mode"
                    } else {
                        "Dark Mode"
                    };
                    if ui.button(label).clicked() {
                        self.state.dark_mode = !self.state.dark_mode;
                        ctx.set_visuals(if self.state.dark_mode {
                            egui::Visuals::dark()
                        } else {
                            egui::Visuals::light()
                        });
                        ui.close_menu();
                    }
                    if ui.button("Warnings").clicked() {
                        self.state.show_warnings = true;
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        let visible_count = self.state.visible_indices().len();

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                if !self.state.warnings.is_empty()
                    && ui
                        .small_button(format!("\u{26a0} {}", self.state.warnings.len()))
                        .clicked()
                {
                    self.state.show_warnings = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{visible_count}/{} listings",
                        self.state.records.len()
                    ));
                });
            });
        });

        // Detail pane (bottom)
        egui::TopBottomPanel::bottom("detail_pane")
            .resizable(true)
            .default_height(ui::theme::DETAIL_PANE_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::detail::render(ui, &self.state);
            });

        // Left sidebar
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_filters")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::filters::render(ui, &mut self.state);
                    });
            });

        // Central panel (listing cards)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::listings::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
        ui::panels::warnings::render(ctx, &mut self.state);
    }
}
