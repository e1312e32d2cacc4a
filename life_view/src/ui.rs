// ui.rs - Drawing and input for the simulation view

use eframe::egui;
use egui::{Color32, Rect, RichText, Stroke, Vec2};
use life::LifeConfig;

use crate::LifeView;

pub const TITLE: &str = "The Game of Life";

const CELL_SIZE: f32 = 15.0;                                // Cell edge in points
const CELL_BORDER: f32 = 1.0;
const LIVE_COLOR: Color32 = Color32::from_rgb(0, 128, 0);   // green
const BACKDROP: Color32 = Color32::from_rgb(211, 211, 211); // light grey
const BUTTON_COLOR: Color32 = Color32::from_rgb(76, 175, 80);

const FOOTER_LINKS: [(&str, &str); 2] = [
    ("Github", "https://github.com/AbdulRehmanUNI"),
    ("LinkedIn", "https://www.linkedin.com/in/theabdulrehmankhan/"),
];

/// Window size that fits the whole grid plus header and footer.
pub fn window_size(config: &LifeConfig) -> [f32; 2] {
    let (width, height) = grid_extent(config.rows, config.cols);
    [width.max(400.0) + 40.0, height + 200.0]
}

fn grid_extent(rows: usize, cols: usize) -> (f32, f32) {
    (cols as f32 * CELL_SIZE, rows as f32 * CELL_SIZE)
}

fn command_button(ui: &mut egui::Ui, label: &str) -> bool {
    let text = RichText::new(label).size(16.0).color(Color32::WHITE);
    ui.add(
        egui::Button::new(text)
            .fill(BUTTON_COLOR)
            .rounding(5.0)
            .min_size(Vec2::new(90.0, 36.0)),
    )
    .clicked()
}

impl eframe::App for LifeView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.heading(RichText::new(TITLE).size(28.0).strong());
                ui.add_space(20.0);

                // Controls
                ui.horizontal(|ui| {
                    let running = self.runner.is_running();
                    if command_button(ui, if running { "Stop" } else { "Start" }) {
                        self.toggle_running(ctx);
                    }
                    if command_button(ui, "Seed") {
                        self.seed();
                    }
                    if command_button(ui, "Clear") {
                        self.clear();
                    }
                });

                ui.add_space(20.0);

                // Copy the grid out so the timer task is never blocked on drawing
                let (grid, generation) =
                    self.runner.with_simulation(|sim| (sim.grid().clone(), sim.generation()));

                let (width, height) = grid_extent(grid.rows(), grid.cols());
                let (response, painter) =
                    ui.allocate_painter(Vec2::new(width, height), egui::Sense::click());
                let origin = response.rect.min;

                painter.rect_filled(response.rect, 0.0, BACKDROP);
                let border = Stroke::new(CELL_BORDER, Color32::BLACK);

                for row in 0..grid.rows() {
                    for col in 0..grid.cols() {
                        let rect = Rect::from_min_size(
                            origin + Vec2::new(col as f32 * CELL_SIZE, row as f32 * CELL_SIZE),
                            Vec2::splat(CELL_SIZE),
                        );
                        if grid.is_alive(row, col) {
                            painter.rect_filled(rect, 0.0, LIVE_COLOR);
                        }
                        painter.rect_stroke(rect.shrink(CELL_BORDER / 2.0), 0.0, border);
                    }
                }

                // Clicks toggle cells, running or not
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let offset = pos - origin;
                        let (row, col) = ((offset.y / CELL_SIZE) as usize, (offset.x / CELL_SIZE) as usize);
                        if row < grid.rows() && col < grid.cols() {
                            self.toggle_cell(row, col);
                        }
                    }
                }

                ui.add_space(8.0);
                ui.label(format!(
                    "Generation: {}    Live cells: {}",
                    generation,
                    grid.live_cells()
                ));

                ui.add_space(20.0);
                ui.horizontal(|ui| {
                    let (first, second) = (FOOTER_LINKS[0], FOOTER_LINKS[1]);
                    ui.hyperlink_to(first.0, first.1);
                    ui.label("|");
                    ui.hyperlink_to(second.0, second.1);
                });
            });
        });
    }
}
