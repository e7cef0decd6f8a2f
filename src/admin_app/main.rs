/**
 * Catalog Admin Desktop App - Main Entry Point
 *
 * Loads configuration, starts the catalog worker and hands the
 * application state to eframe.
 */
use eframe::egui;
use tracing_subscriber::EnvFilter;

use catalog_admin::admin_app::theme::styles;
use catalog_admin::admin_app::{
    views, AppState, CatalogController, CatalogWorker, Config, HttpApiClient,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catalog_admin=info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!("Using catalog server {}", config.server_url());

    let api = HttpApiClient::new(config)?;
    let catalog = CatalogWorker::spawn(CatalogController::new(api.clone()))?;
    let state = AppState::new(api, catalog);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "SolveTech - Catalog Admin",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(AdminApp { state }))
        }),
    )?;

    Ok(())
}

/// Main application state
struct AdminApp {
    state: AppState,
}

impl eframe::App for AdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_auth_result();
        self.state.check_catalog_events();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
