use std::sync::{Arc, Mutex};
use std::time::Duration;

use eframe::egui;
use life_core::grid::LifeGrid;

mod ticker;
use ticker::Ticker;

const DEFAULT_CELL_SIZE: u32 = 8;
const DEFAULT_INTERVAL_MS: u64 = 100;
const DEFAULT_DENSITY: u8 = 30;
const ALIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x0c, 0xff, 0x45);
const DEAD_COLOR: egui::Color32 = egui::Color32::BLACK;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|cc| Ok(Box::new(LifeApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(())
}

struct LifeApp {
    // Shared with the ticker thread, which steps it in the background.
    grid: Arc<Mutex<LifeGrid>>,
    ticker: Option<Ticker>,
    ctx: egui::Context,
    cell_size: u32,
    interval_ms: u64,
    density: u8,
    reseed_requested: bool,
}

impl LifeApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = LifeApp {
            grid: Arc::new(Mutex::new(LifeGrid::default())),
            ticker: None,
            ctx: cc.egui_ctx.clone(),
            cell_size: DEFAULT_CELL_SIZE,
            interval_ms: DEFAULT_INTERVAL_MS,
            density: DEFAULT_DENSITY,
            reseed_requested: false,
        };
        app.ticker = Some(app.spawn_ticker());
        app
    }

    fn spawn_ticker(&self) -> Ticker {
        let grid = Arc::clone(&self.grid);
        let ctx = self.ctx.clone();
        Ticker::spawn(Duration::from_millis(self.interval_ms), move || {
            let changed = grid.lock().unwrap().step();
            if changed {
                ctx.request_repaint();
            }
        })
    }

    fn toggle_running(&mut self) {
        match self.ticker.take() {
            Some(ticker) => {
                ticker.stop();
                log::info!("simulation stopped");
            }
            None => {
                self.ticker = Some(self.spawn_ticker());
                log::info!("simulation started");
            }
        }
    }

    fn restart_ticker(&mut self) {
        if self.ticker.take().is_some() {
            self.ticker = Some(self.spawn_ticker());
        }
        log::info!("step interval set to {} ms", self.interval_ms);
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Game of Life");
            ui.separator();

            // A new cell size changes the extent, which the board panel
            // picks up on its own; a new density needs an explicit reseed.
            ui.add(egui::Slider::new(&mut self.cell_size, 2..=40).text("cell size"));
            let interval =
                ui.add(egui::Slider::new(&mut self.interval_ms, 16..=1000).text("interval (ms)"));
            let density = ui.add(egui::Slider::new(&mut self.density, 0..=100).text("density (%)"));

            if interval.changed() {
                self.restart_ticker();
            }
            if density.changed() {
                self.reseed_requested = true;
            }

            let label = if self.ticker.is_some() { "Stop" } else { "Start" };
            if ui.button(label).clicked() {
                self.toggle_running();
            }
            if ui.button("Randomize").clicked() {
                self.reseed_requested = true;
            }
        });
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let cell = self.cell_size.max(1) as f32;
        let cols = (size.x / cell) as usize;
        let rows = (size.y / cell) as usize;

        let mut grid = self.grid.lock().unwrap();

        // Covers window resizes and cell-size changes alike.
        if grid.dimensions() != (cols, rows) || self.reseed_requested {
            grid.reseed(cols, rows, self.density);
            self.reseed_requested = false;
            log::info!("reseeded board to {cols}x{rows} at {}% density", self.density);
        }

        // Drag over the board paints cells; while stopped they still show
        // up right away because the frame below draws the edited board.
        if response.is_pointer_button_down_on() {
            if let Some(pos) = response.interact_pointer_pos() {
                let rel = pos - response.rect.min;
                if rel.x >= 0.0 && rel.y >= 0.0 {
                    grid.insert_life([((rel.x / cell) as usize, (rel.y / cell) as usize)]);
                }
            }
        }

        painter.rect_filled(response.rect, 0.0, DEAD_COLOR);
        let origin = response.rect.min;
        let (width, height) = grid.dimensions();
        for row in 0..height {
            for col in 0..width {
                if grid.is_alive(col as isize, row as isize) {
                    let min = origin + egui::vec2(col as f32 * cell, row as f32 * cell);
                    painter.rect_filled(
                        egui::Rect::from_min_size(min, egui::vec2(cell, cell)),
                        0.0,
                        ALIVE_COLOR,
                    );
                }
            }
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.board(ui));
    }
}
