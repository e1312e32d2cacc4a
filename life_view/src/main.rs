// main.rs - Conway's Game of Life in an egui window
// The grid steps on a tokio timer task; the window only draws and forwards clicks

use std::sync::Arc;

use eframe::egui;
use life::{LifeConfig, OnStep, Runner, Simulation};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod ui;

#[derive(Debug, thiserror::Error)]
enum ViewError {
    #[error("invalid simulation config: {0}")]
    Config(#[from] life::ConfigError),

    #[error("failed to start timer runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

fn main() -> Result<(), ViewError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = LifeConfig::default();
    let simulation = Simulation::new(config)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("life-timer")
        .enable_time()
        .build()?;

    info!(rows = config.rows, cols = config.cols, "starting view");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::TITLE)
            .with_inner_size(ui::window_size(&config)),
        ..Default::default()
    };

    eframe::run_native(
        ui::TITLE,
        options,
        Box::new(move |_cc| Box::new(LifeView::new(simulation, runtime))),
    )?;
    Ok(())
}

/// The simulation view: owns the runner and the runtime its loop lives on.
pub struct LifeView {
    runner: Runner,
    runtime: tokio::runtime::Runtime,
}

impl LifeView {
    pub fn new(simulation: Simulation, runtime: tokio::runtime::Runtime) -> Self {
        Self { runner: Runner::new(simulation), runtime }
    }

    /// Start/Stop button.
    fn toggle_running(&self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        let on_step: OnStep = Arc::new(move || ctx.request_repaint());
        self.runner.toggle(self.runtime.handle(), on_step);
    }

    /// Seed button. Leaves the run flag alone.
    fn seed(&self) {
        self.runner.with_simulation(Simulation::randomize);
    }

    /// Clear button. A running loop keeps stepping the empty grid.
    fn clear(&self) {
        self.runner.with_simulation(Simulation::clear);
    }

    fn toggle_cell(&self, row: usize, col: usize) {
        if let Err(err) = self.runner.with_simulation(|sim| sim.toggle(row, col)) {
            tracing::warn!(%err, "ignored cell click");
        }
    }
}
