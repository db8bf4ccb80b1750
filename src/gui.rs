// SidSort - gui.rs
//
// Desktop frontend: folder pickers, observer selection, a Run button,
// and a scrolling message pane mirroring the terminal output.
//
// The run executes synchronously on the UI thread -- one operator, one
// machine, directory trees small enough that a run completes in seconds.

use crate::app;
use crate::core::model::{RunConfig, SortEvent, SortSummary};
use crate::util;
use std::path::PathBuf;

/// The SidSort window.
pub struct SidSortApp {
    input_root: Option<PathBuf>,
    output_root: Option<PathBuf>,
    observer: String,
    messages: Vec<String>,
}

impl SidSortApp {
    fn new(observer: String) -> Self {
        Self {
            input_root: None,
            output_root: None,
            observer,
            messages: vec!["Select the input and output folders, then press Run.".to_string()],
        }
    }

    fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Execute one sorting run with the currently selected folders.
    fn run_sort(&mut self) {
        let (Some(input), Some(output)) = (self.input_root.clone(), self.output_root.clone())
        else {
            self.push("Both folders must be selected before running.");
            return;
        };

        self.push(format!(
            "SORTING for {} at {}...",
            self.observer,
            chrono::Local::now().format("%H:%M:%S")
        ));

        let config = RunConfig::new(input, output, self.observer.clone());
        let mut lines: Vec<String> = Vec::new();
        let result = app::sort::run_sort(&config, |event| lines.push(render_event(event)));
        self.messages.extend(lines);

        match result {
            Ok(summary) => self.push_summary(&summary),
            Err(e) => self.push(format!("Error: {e}")),
        }
    }

    fn push_summary(&mut self, summary: &SortSummary) {
        if summary.files_skipped > 0 {
            self.push(format!("Skipped files = {}", summary.files_skipped));
        } else {
            self.push("No skipped files");
        }
        self.push(format!(
            "Files copied = {} in {:.3} seconds",
            summary.files_copied,
            summary.duration.as_secs_f64()
        ));
    }
}

/// Message-pane rendering of per-file progress events.
fn render_event(event: &SortEvent) -> String {
    match event {
        SortEvent::Copied { source, dest } => {
            format!("{} >> {}", source.display(), dest.display())
        }
        SortEvent::AlreadyExists { dest } => {
            format!("{} - file already exists!", dest.display())
        }
        SortEvent::Skipped { file, reason } => format!("{file} skipped ({reason})"),
        SortEvent::Warning { message } => format!("Warning: {message}"),
        SortEvent::ReportWritten { path } => {
            format!("Skipped file report = {}", path.display())
        }
    }
}

impl eframe::App for SidSortApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui
                    .add_sized([160.0, 22.0], egui::Button::new("Select input folder"))
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new().pick_folder() {
                        self.messages
                            .push(format!("Input folder set to {}", path.display()));
                        self.input_root = Some(path);
                    }
                }
                ui.label(folder_label(&self.input_root));
            });

            ui.horizontal(|ui| {
                if ui
                    .add_sized([160.0, 22.0], egui::Button::new("Select output folder"))
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new().pick_folder() {
                        self.messages
                            .push(format!("Output folder set to {}", path.display()));
                        self.output_root = Some(path);
                    }
                }
                ui.label(folder_label(&self.output_root));
            });

            ui.horizontal(|ui| {
                ui.label("Observer's name");
                egui::ComboBox::from_id_salt("observer")
                    .selected_text(self.observer.clone())
                    .show_ui(ui, |ui| {
                        for name in util::constants::OBSERVER_NAMES {
                            ui.selectable_value(&mut self.observer, (*name).to_string(), *name);
                        }
                    });
            });

            let ready = self.input_root.is_some() && self.output_root.is_some();
            ui.add_enabled_ui(ready, |ui| {
                if ui
                    .add_sized([160.0, 26.0], egui::Button::new("Run"))
                    .clicked()
                {
                    self.run_sort();
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in &self.messages {
                        ui.monospace(line);
                    }
                });
        });
    }
}

fn folder_label(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string())
}

/// Launch the GUI with the given initial observer selection.
pub fn run(observer: String) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([820.0, 560.0])
            .with_min_inner_size([560.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(SidSortApp::new(observer)))),
    )
}
