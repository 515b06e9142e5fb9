// SimHire - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Catalog loading and initial filters
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::ui::...` etc.
pub use simhire::app;
pub use simhire::core;
pub use simhire::platform;
pub use simhire::ui;
pub use simhire::util;

use clap::Parser;
use std::path::PathBuf;

/// SimHire Finder - browse paid tryouts and apprenticeships.
///
/// Loads a listing catalog (built-in, or a TOML/JSON file) and narrows it
/// with category, level, schedule, work style, location and price filters.
#[derive(Parser, Debug)]
#[command(name = "SimHire", version, about)]
struct Cli {
    /// Catalog file to load (TOML or JSON). Overrides [catalog] path in config.
    catalog: Option<PathBuf>,

    /// Initial category filter: all, tryout or apprenticeship.
    #[arg(short = 'c', long = "category")]
    category: Option<String>,

    /// Initial level filter, comma-separated (e.g. "beginner,advanced").
    #[arg(short = 'l', long = "level")]
    level: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "SimHire starting"
    );

    // Catalog path: CLI argument > config [catalog] path > built-in.
    let catalog_path = cli.catalog.clone().or_else(|| config.catalog_path.clone());
    let loaded = app::catalog_mgr::load_catalog(catalog_path.as_deref());

    let mut state = app::state::AppState::new(loaded, config.salary_domain_floor, cli.debug);
    state.dark_mode = config.dark_mode;

    for warning in &config_warnings {
        state.push_warning(warning.to_string());
    }

    if let Some(ref category) = cli.category {
        match category.parse() {
            Ok(filter) => state.filter_state.category = filter,
            Err(e) => state.push_warning(format!("--category ignored: {e}")),
        }
    }
    if let Some(ref levels) = cli.level {
        if let Err(e) = state.filter_state.set_levels_from_str(levels) {
            state.push_warning(format!("--level ignored: {e}"));
        }
    }

    tracing::info!(
        listings = state.records.len(),
        visible = state.visible_indices().len(),
        "Ready to launch GUI"
    );

    let catalog_dir = catalog_path
        .as_deref()
        .and_then(|p| p.parent())
        .filter(|p| p.is_dir())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| platform_paths.data_dir.clone());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            gui::apply_style(&cc.egui_ctx, state.dark_mode, font_size);
            Ok(Box::new(gui::SimHireApp::new(state, catalog_dir)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch SimHire GUI: {e}");
        std::process::exit(1);
    }
}
