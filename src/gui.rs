use crate::configure_dialog::{ConfigureDialog, ConfigureEvent};
use crate::launcher::{launch_explorer, reveal, Platform, RevealOutcome, SystemRunner};
use crate::settings::{ConfigProvider, FileConfig};
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use rfd::FileDialog;

/// Success feedback is transient, matching the original status-bar timing.
pub const SUCCESS_TOAST_SECS: f64 = 2.0;
const ERROR_TOAST_SECS: f64 = 5.0;

pub struct RevealApp {
    config: FileConfig,
    runner: SystemRunner,
    toasts: Toasts,
    configure_dialog: ConfigureDialog,
    /// Path currently shown in the target field.
    pub target: String,
    /// Reveal deferred until the configure flow finishes.
    pending_reveal: Option<String>,
    pub error: Option<String>,
}

impl RevealApp {
    pub fn new(config: FileConfig, initial_target: Option<String>) -> Self {
        Self {
            config,
            runner: SystemRunner,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            configure_dialog: ConfigureDialog::default(),
            target: initial_target.unwrap_or_default(),
            pending_reveal: None,
            error: None,
        }
    }

    fn set_error(&mut self, msg: String) {
        tracing::error!("{msg}");
        self.toasts.add(Toast {
            text: msg.clone().into(),
            kind: ToastKind::Error,
            options: ToastOptions::default().duration_in_seconds(ERROR_TOAST_SECS),
        });
        self.error = Some(msg);
    }

    fn notify(&mut self, msg: String) {
        self.toasts.add(Toast {
            text: msg.into(),
            kind: ToastKind::Success,
            options: ToastOptions::default().duration_in_seconds(SUCCESS_TOAST_SECS),
        });
    }

    pub fn is_configuring(&self) -> bool {
        self.configure_dialog.open
    }

    pub fn do_reveal(&mut self, target: String) {
        match reveal(&target, &self.config, &mut self.runner, Platform::current()) {
            Ok(RevealOutcome::Launched { explorer_name }) => {
                self.error = None;
                self.notify(format!("Revealed in {explorer_name}"));
            }
            Ok(RevealOutcome::NotConfigured) => {
                self.pending_reveal = Some(target);
                self.configure_dialog.begin();
            }
            Err(e) => self.set_error(format!("Failed to reveal in custom explorer: {e}")),
        }
    }

    /// Reveal with the path the configure flow just returned, without going
    /// back through the configuration read.
    fn reveal_configured(&mut self, explorer: &str, target: &str) {
        let use_open = self.config.use_open_command();
        match launch_explorer(
            explorer,
            target,
            use_open,
            &mut self.runner,
            Platform::current(),
        ) {
            Ok(RevealOutcome::Launched { explorer_name }) => {
                self.error = None;
                self.notify(format!("Revealed in {explorer_name}"));
            }
            Ok(RevealOutcome::NotConfigured) => {}
            Err(e) => self.set_error(format!("Failed to reveal in custom explorer: {e}")),
        }
    }

    pub fn handle_dropped_files(&mut self, files: Vec<egui::DroppedFile>) {
        if let Some(path) = files.into_iter().filter_map(|f| f.path).next() {
            self.target = path.display().to_string();
        }
    }
}

impl eframe::App for RevealApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.handle_dropped_files(dropped);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Path");
                ui.text_edit_singleline(&mut self.target);
                if ui.button("File…").clicked() {
                    if let Some(file) = FileDialog::new().pick_file() {
                        self.target = file.display().to_string();
                    }
                }
                if ui.button("Folder…").clicked() {
                    if let Some(dir) = FileDialog::new().pick_folder() {
                        self.target = dir.display().to_string();
                    }
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Reveal").clicked() {
                    let target = self.target.clone();
                    self.do_reveal(target);
                }
                if ui.button("Configure…").clicked() {
                    self.pending_reveal = None;
                    self.configure_dialog.begin();
                }
                if ui.button("Open settings file").clicked() {
                    if let Err(e) = open::that(self.config.path()) {
                        self.set_error(format!("Failed to open settings file: {e}"));
                    }
                }
            });
            if let Some(err) = &self.error {
                ui.colored_label(egui::Color32::RED, err);
            }
        });

        if let Some(event) = self.configure_dialog.ui(ctx, &mut self.config) {
            match event {
                ConfigureEvent::Persisted { path, message } => {
                    self.error = None;
                    self.notify(message);
                    if let Some(target) = self.pending_reveal.take() {
                        self.reveal_configured(&path, &target);
                    }
                }
                ConfigureEvent::Failed(msg) => {
                    self.pending_reveal = None;
                    self.set_error(msg);
                }
                ConfigureEvent::Cancelled => {
                    // Deliberate no-op: dismissing the picker aborts silently.
                    self.pending_reveal = None;
                }
            }
        }

        self.toasts.show(ctx);
    }
}
