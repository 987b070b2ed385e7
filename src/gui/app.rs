//! Scatter Viewer Application
//! Main window: control strip, background CSV loading, and the chart canvas.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use egui::RichText;

use crate::charts::{export_png, ChartController};
use crate::data::{DatasetLoader, StateRecord};
use crate::gui::ChartView;

/// CSV loading result from the background thread
enum LoadResult {
    Complete(Vec<StateRecord>),
    Error(String),
}

/// Main application window.
pub struct ScatterApp {
    chart: Option<ChartController>,
    csv_path: Option<PathBuf>,
    status: String,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl ScatterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, initial_csv: Option<PathBuf>) -> Self {
        let mut app = Self {
            chart: None,
            csv_path: None,
            status: "No data loaded".to_string(),
            load_rx: None,
            is_loading: false,
        };
        if let Some(path) = initial_csv {
            app.start_load(path);
        }
        app
    }

    /// Handle CSV file selection.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_load(path);
        }
    }

    /// Kick off a load on a background thread. The previous chart is dropped
    /// up front; a failed load leaves the viewer empty.
    fn start_load(&mut self, path: PathBuf) {
        self.chart = None;
        self.status = format!("Loading {}...", path.display());
        self.csv_path = Some(path.clone());
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match DatasetLoader::read_records(&path) {
                Ok(records) => LoadResult::Complete(records),
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Complete(records) => {
                        tracing::info!(rows = records.len(), "dataset loaded");
                        self.status = format!("Loaded {} states", records.len());
                        self.chart = Some(ChartController::new(records));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        tracing::error!(error = %error, "failed to load dataset");
                        self.status = format!("Error: {}", error);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Handle PNG export of the current chart.
    fn handle_export_png(&mut self) {
        let Some(chart) = &self.chart else {
            self.status = "No chart to export".to_string();
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("state_scatter.png")
            .save_file()
        else {
            return; // User cancelled
        };

        match export_png(chart, &path) {
            Ok(()) => {
                self.status = format!("Exported {}", path.display());
            }
            Err(e) => {
                tracing::error!(error = %e, "chart export failed");
                self.status = format!("Error: {}", e);
            }
        }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("📂 Browse CSV").clicked() {
                    self.handle_browse_csv();
                }
                ui.add_enabled_ui(self.chart.is_some(), |ui| {
                    if ui.button("🖼 Export PNG").clicked() {
                        self.handle_export_png();
                    }
                });
                ui.separator();

                let status_color = if self.status.contains("Error") {
                    egui::Color32::from_rgb(220, 53, 69)
                } else {
                    ui.visuals().weak_text_color()
                };
                ui.label(RichText::new(&self.status).size(12.0).color(status_color));
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.chart {
            Some(controller) => {
                egui::ScrollArea::both().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ChartView::show(ui, controller);
                    });
                });
            }
            None => {
                let message = if self.is_loading { "Loading..." } else { "No Data" };
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new(message).size(20.0));
                });
            }
        });
    }
}
