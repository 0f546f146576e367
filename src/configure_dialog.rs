use crate::configure::{self, check_path, resolve_selection, validate_custom, Acceptance, Selection};
use crate::explorers::COMMON_EXPLORERS;
use crate::settings::ConfigProvider;
use eframe::egui;
use rfd::FileDialog;

/// What the dialog reported back to the main window this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigureEvent {
    /// A path was persisted; `message` is the confirmation to show.
    Persisted { path: String, message: String },
    /// Persisting failed.
    Failed(String),
    /// The user dismissed the dialog without saving.
    Cancelled,
}

enum Stage {
    Picking,
    EnteringCustom,
    /// The chosen path does not exist; waiting for "Save Anyway" / "Cancel".
    Confirming { path: String },
}

pub struct ConfigureDialog {
    pub open: bool,
    stage: Stage,
    custom_input: String,
    validation_error: Option<String>,
}

impl Default for ConfigureDialog {
    fn default() -> Self {
        Self {
            open: false,
            stage: Stage::Picking,
            custom_input: String::new(),
            validation_error: None,
        }
    }
}

impl ConfigureDialog {
    /// Open the dialog at the picker stage.
    pub fn begin(&mut self) {
        self.open = true;
        self.stage = Stage::Picking;
        self.custom_input.clear();
        self.validation_error = None;
    }

    /// Move a resolved path to the next stage: persist it when it exists on
    /// disk, otherwise ask for confirmation first.
    fn accept(&mut self, path: String, cfg: &mut dyn ConfigProvider) -> Option<ConfigureEvent> {
        match check_path(&path) {
            Acceptance::Persist => Some(self.save(path, cfg)),
            Acceptance::Confirm => {
                self.stage = Stage::Confirming { path };
                None
            }
        }
    }

    fn save(&mut self, path: String, cfg: &mut dyn ConfigProvider) -> ConfigureEvent {
        self.open = false;
        match configure::persist(&path, cfg) {
            Ok(message) => ConfigureEvent::Persisted { path, message },
            Err(e) => ConfigureEvent::Failed(format!("Failed to save configuration: {e}")),
        }
    }

    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        cfg: &mut dyn ConfigProvider,
    ) -> Option<ConfigureEvent> {
        if !self.open {
            return None;
        }
        let mut open = self.open;
        let mut event = None;
        egui::Window::new("Configure File Explorer")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                let mut next_stage = None;
                match &self.stage {
                    Stage::Picking => {
                        ui.label("Select a file explorer or choose a custom path");
                        ui.separator();
                        for (idx, explorer) in COMMON_EXPLORERS.iter().enumerate() {
                            let row = format!("{} — {}", explorer.name, explorer.path);
                            if ui.selectable_label(false, row).clicked() {
                                if let Some(path) = resolve_selection(&Selection::Builtin(idx)) {
                                    event = self.accept(path, cfg);
                                } else {
                                    // Unreachable by construction; treat as cancel.
                                    self.open = false;
                                    event = Some(ConfigureEvent::Cancelled);
                                }
                            }
                        }
                        if ui.selectable_label(false, "Custom Path…").clicked() {
                            next_stage = Some(Stage::EnteringCustom);
                        }
                        ui.separator();
                        let mut use_open = cfg.use_open_command();
                        if ui
                            .checkbox(&mut use_open, "Always launch via 'open -a'")
                            .changed()
                        {
                            if let Err(e) = cfg.set_use_open_command(use_open) {
                                event = Some(ConfigureEvent::Failed(format!(
                                    "Failed to save configuration: {e}"
                                )));
                            }
                        }
                        let mut debug = cfg.debug_logging();
                        if ui
                            .checkbox(&mut debug, "Debug logging (applies on restart)")
                            .changed()
                        {
                            if let Err(e) = cfg.set_debug_logging(debug) {
                                event = Some(ConfigureEvent::Failed(format!(
                                    "Failed to save configuration: {e}"
                                )));
                            }
                        }
                    }
                    Stage::EnteringCustom => {
                        ui.label("Enter the full path to your file explorer application");
                        ui.horizontal(|ui| {
                            ui.text_edit_singleline(&mut self.custom_input);
                            if ui.button("Browse").clicked() {
                                if let Some(file) = FileDialog::new().pick_file() {
                                    self.custom_input = file.display().to_string();
                                    self.validation_error = None;
                                }
                            }
                        });
                        if let Some(err) = &self.validation_error {
                            ui.colored_label(egui::Color32::RED, err);
                        }
                        ui.horizontal(|ui| {
                            if ui.button("Save").clicked() {
                                match validate_custom(&self.custom_input) {
                                    Some(path) => {
                                        self.validation_error = None;
                                        event = self.accept(path, cfg);
                                    }
                                    None => {
                                        self.validation_error =
                                            Some("Please enter a valid path".into());
                                    }
                                }
                            }
                            if ui.button("Back").clicked() {
                                next_stage = Some(Stage::Picking);
                                self.validation_error = None;
                            }
                            if ui.button("Cancel").clicked() {
                                self.open = false;
                                event = Some(ConfigureEvent::Cancelled);
                            }
                        });
                    }
                    Stage::Confirming { path } => {
                        let path = path.clone();
                        ui.label(format!(
                            "The file explorer at \"{path}\" was not found. \
                             Do you want to save this configuration anyway?"
                        ));
                        ui.horizontal(|ui| {
                            if ui.button("Save Anyway").clicked() {
                                event = Some(self.save(path, cfg));
                            }
                            if ui.button("Cancel").clicked() {
                                self.open = false;
                                event = Some(ConfigureEvent::Cancelled);
                            }
                        });
                    }
                }
                if let Some(stage) = next_stage {
                    self.stage = stage;
                }
            });
        // Closed via the window's close button.
        if self.open && !open {
            self.open = false;
            if event.is_none() {
                event = Some(ConfigureEvent::Cancelled);
            }
        }
        event
    }
}
