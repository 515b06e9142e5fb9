// SimHire - ui/panels/filters.rs
//
// Filter controls sidebar. Every control writes straight into
// `state.filter_state`; the listings panel re-reads the visible set on the
// same frame, so nothing here triggers a refresh.

use crate::app::state::AppState;
use crate::core::filter::{self, CategoryFilter};
use crate::core::model::{Category, EmploymentType, Level, WorkSchedule, WorkStyle};
use crate::core::range::{self, Handle};
use crate::ui::theme;
use std::collections::HashSet;
use std::hash::Hash;

/// Render the filter controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Filters");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("Reset all").clicked() {
                state.reset_filters();
            }
        });
    });
    ui.separator();

    ui.label("Search:");
    ui.add(
        egui::TextEdit::singleline(&mut state.filter_state.text_search)
            .hint_text("Program, company or skill"),
    );

    ui.add_space(6.0);
    ui.label("Location:");
    ui.add(
        egui::TextEdit::singleline(&mut state.filter_state.location)
            .hint_text("Any location"),
    );

    ui.separator();

    ui.label("Category:");
    ui.horizontal_wrapped(|ui| {
        let current = state.filter_state.category;
        if ui
            .selectable_label(current == CategoryFilter::All, "All")
            .clicked()
        {
            state.filter_state.category = CategoryFilter::All;
        }
        for category in Category::all() {
            let selected = current == CategoryFilter::Only(*category);
            if ui.selectable_label(selected, category.label()).clicked() {
                state.filter_state.category = CategoryFilter::Only(*category);
            }
        }
    });

    ui.add_space(6.0);
    ui.label("Level:");
    for level in Level::all() {
        let mut checked = state.filter_state.levels.contains(level);
        if ui.checkbox(&mut checked, level.label()).changed() {
            filter::toggle(&mut state.filter_state.levels, *level);
        }
    }

    ui.separator();

    ui.label("Work schedule:");
    chips(ui, &mut state.filter_state.schedules, WorkSchedule::all(), WorkSchedule::label);

    ui.add_space(6.0);
    ui.label("Employment type:");
    chips(
        ui,
        &mut state.filter_state.employment_types,
        EmploymentType::all(),
        EmploymentType::label,
    );

    ui.add_space(6.0);
    ui.label("Work style:");
    chips(ui, &mut state.filter_state.work_styles, WorkStyle::all(), WorkStyle::label);

    ui.separator();

    ui.label("Price range:");
    salary_range(ui, state);
}

/// Toggle chips for a multi-select set (nothing selected = all).
fn chips<T: Copy + Eq + Hash>(
    ui: &mut egui::Ui,
    selected: &mut HashSet<T>,
    options: &[T],
    label: fn(&T) -> &'static str,
) {
    ui.horizontal_wrapped(|ui| {
        for option in options {
            let on = selected.contains(option);
            if ui.selectable_label(on, label(option)).clicked() {
                filter::toggle(selected, *option);
            }
        }
    });
}

/// Two-handle range track plus numeric inputs for the same bounds.
fn salary_range(ui: &mut egui::Ui, state: &mut AppState) {
    let desired = egui::vec2(ui.available_width(), theme::RANGE_TRACK_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click_and_drag());
    let track = rect.shrink2(egui::vec2(theme::RANGE_HANDLE_RADIUS, 0.0));
    let fraction_at = |pos: egui::Pos2| (pos.x - track.left()) / track.width().max(1.0);

    let selector = &mut state.range_selector;
    let salary = &mut state.filter_state.salary;

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            selector.press(range::nearest_handle(fraction_at(pos), salary));
        }
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            selector.drag_to(fraction_at(pos), salary);
        }
    }
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let fraction = fraction_at(pos);
            selector.press(range::nearest_handle(fraction, salary));
            selector.drag_to(fraction, salary);
            selector.release();
        }
    }
    // Pointer up anywhere ends capture.
    if !ui.input(|i| i.pointer.any_down()) {
        selector.release();
    }

    if ui.is_rect_visible(rect) {
        let domain = salary.domain_max();
        let y = rect.center().y;
        let x_of = |v: u32| track.left() + track.width() * range::fraction_of(v, domain);
        let painter = ui.painter();

        painter.line_segment(
            [egui::pos2(track.left(), y), egui::pos2(track.right(), y)],
            egui::Stroke::new(theme::RANGE_TRACK_THICKNESS, theme::track_colour(state.dark_mode)),
        );
        painter.line_segment(
            [egui::pos2(x_of(salary.min()), y), egui::pos2(x_of(salary.max()), y)],
            egui::Stroke::new(theme::RANGE_TRACK_THICKNESS, theme::ACCENT),
        );
        for (handle, value) in [(Handle::Min, salary.min()), (Handle::Max, salary.max())] {
            let width = if selector.active_handle() == Some(handle) {
                2.5
            } else {
                1.0
            };
            painter.circle(
                egui::pos2(x_of(value), y),
                theme::RANGE_HANDLE_RADIUS,
                theme::handle_fill(state.dark_mode),
                egui::Stroke::new(width, theme::ACCENT),
            );
        }
    }

    let domain = salary.domain_max();
    ui.horizontal(|ui| {
        let mut min = salary.min();
        if ui
            .add(egui::DragValue::new(&mut min).range(0..=domain).prefix("$"))
            .changed()
        {
            salary.set_min(min);
        }
        ui.label("to");
        let mut max = salary.max();
        if ui
            .add(egui::DragValue::new(&mut max).range(0..=domain).prefix("$"))
            .changed()
        {
            salary.set_max(max);
        }
    });
}
