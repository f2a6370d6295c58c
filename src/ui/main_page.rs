use crate::core::app_config::AppConfig;
use crate::core::swap_engine::backup_directory;
use crate::core::swap_session::SwapSession;
use crate::model::error::Error;
use crate::model::log::system::SystemLog;
use crate::model::path_selection::{Role, SwapPhase};
use crate::ui::folder_tree::folder_structure;
use crate::ui::timed_notice::TimedNotice;
use eframe::egui::{self, Color32, RichText};
use eframe::{App, Frame};
use egui_file_dialog::{DialogState, FileDialog};
use macros::log;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

const PROMPT_SIZE: f32 = 14.0;
const WARNING_SIZE: f32 = 18.0;

pub struct MainPage {
    session: SwapSession,
    file_dialog: FileDialog,
    picking: Option<Role>,
    source_notice: TimedNotice,
    destination_notice: TimedNotice,
    show_confirm_dialog: bool,
    status: Option<(String, Color32)>,
}

impl MainPage {
    pub fn new(app_config: Arc<AppConfig>, session: SwapSession) -> Self {
        let duration = Duration::from_millis(app_config.warning_duration_ms);
        Self {
            session,
            file_dialog: FileDialog::new(),
            picking: None,
            source_notice: TimedNotice::new(duration),
            destination_notice: TimedNotice::new(duration),
            show_confirm_dialog: false,
            status: None,
        }
    }

    fn notice_mut(&mut self, role: Role) -> &mut TimedNotice {
        match role {
            Role::Source => &mut self.source_notice,
            Role::Destination => &mut self.destination_notice,
        }
    }

    fn notice(&self, role: Role) -> &TimedNotice {
        match role {
            Role::Source => &self.source_notice,
            Role::Destination => &self.destination_notice,
        }
    }

    fn poll_notices(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        for role in Role::ALL {
            if let Some(remaining) = self.notice_mut(role).poll(now) {
                ctx.request_repaint_after(remaining);
            }
        }
    }

    fn browse(&mut self, role: Role) {
        let mut file_dialog = FileDialog::new();
        if let Some(folder) = self.session.selection().get(role) {
            file_dialog = file_dialog.initial_directory(folder.path().to_path_buf());
        }
        self.file_dialog = file_dialog;
        self.file_dialog.pick_directory();
        self.picking = Some(role);
    }

    fn handle_file_dialog(&mut self, ctx: &egui::Context) {
        self.file_dialog.update(ctx);

        let Some(role) = self.picking else {
            return;
        };
        if let Some(path) = self.file_dialog.take_picked() {
            self.picking = None;
            self.apply_selection(role, Some(path));
        } else if matches!(self.file_dialog.state(), DialogState::Cancelled) {
            self.picking = None;
            self.apply_selection(role, None);
        }
    }

    fn apply_selection(&mut self, role: Role, path: Option<PathBuf>) {
        match self.session.select_directory(role, path) {
            Ok(_) => self.notice_mut(role).cancel(),
            Err(Error::Selection(err)) => {
                self.notice_mut(err.role()).show(err.notice(), Instant::now());
            }
            Err(err) => self.status = Some((err.to_string(), Color32::LIGHT_RED)),
        }
    }

    fn confirm(&mut self) {
        self.show_confirm_dialog = false;
        self.status = Some(match self.session.confirm_swap() {
            Ok(report) => (
                format!(
                    "{}: copied {} files in {} folders ({} bytes), previous data backed up to {}",
                    report.completed_at.format("%H:%M:%S"),
                    report.restored.files,
                    report.restored.directories,
                    report.restored.bytes,
                    report.backup_path.display()
                ),
                Color32::LIGHT_GREEN,
            ),
            Err(err) => (err.to_string(), Color32::LIGHT_RED),
        });
    }

    fn draw_folder_structures(&self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            for (column, role) in columns.iter_mut().zip(Role::ALL) {
                let path = self.session.selection().get(role).map(|folder| folder.path());
                column.label(RichText::new(folder_structure(role, path)).monospace());
            }
        });
    }

    fn draw_prompts(&mut self, ui: &mut egui::Ui) {
        let mut browse = None;
        ui.columns(2, |columns| {
            for (column, role) in columns.iter_mut().zip(Role::ALL) {
                column.vertical_centered(|ui| {
                    let prompt = match self.notice(role).message() {
                        Some(warning) => RichText::new(warning)
                            .size(WARNING_SIZE)
                            .underline()
                            .color(Color32::YELLOW),
                        None => RichText::new(format!("Select the '{role}' data directory:"))
                            .size(PROMPT_SIZE)
                            .strong(),
                    };
                    ui.label(prompt);
                    if ui.button("Browse Folder").clicked() {
                        browse = Some(role);
                    }
                });
            }
        });
        if let Some(role) = browse {
            self.browse(role);
        }
    }

    fn draw_submit(&mut self, ui: &mut egui::Ui) {
        let phase = self.session.phase();
        let text = match phase {
            SwapPhase::Submitted => "Submitted!",
            SwapPhase::Failed => "Failed",
            _ => "Copy Data",
        };

        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(text).min_size(egui::vec2(100.0, 0.0));
            if ui.add_enabled(phase == SwapPhase::Ready, button).clicked() {
                self.show_confirm_dialog = true;
            }
            if let Some((status, color)) = &self.status {
                ui.colored_label(*color, status);
            }
        });
    }

    fn draw_confirm_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_confirm_dialog {
            return;
        }
        let Some((source, destination)) = self.session.selection().both() else {
            self.show_confirm_dialog = false;
            return;
        };

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Confirm Copy")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("confirm_copy_grid")
                    .num_columns(2)
                    .spacing([10.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Copy from:");
                        ui.monospace(source.path().display().to_string());
                        ui.end_row();

                        ui.label("Replace:");
                        ui.monospace(destination.path().display().to_string());
                        ui.end_row();

                        if let Ok(backup) = backup_directory(destination.path()) {
                            ui.label("Backup to:");
                            ui.monospace(backup.display().to_string());
                            ui.end_row();
                        }
                    });

                ui.separator();
                ui.colored_label(
                    Color32::YELLOW,
                    "The destination is deleted before the source is copied in.",
                );

                ui.horizontal(|ui| {
                    if ui.button("Copy Data").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if confirmed {
            self.confirm();
        } else if cancelled {
            self.show_confirm_dialog = false;
        }
    }
}

impl App for MainPage {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.handle_file_dialog(ctx);
        self.poll_notices(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_folder_structures(ui);
            ui.add_space((ui.available_height() - 120.0).max(0.0));
            self.draw_prompts(ui);
            self.draw_submit(ui);
        });
        self.draw_confirm_dialog(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log!(SystemLog::GuiExited)
    }
}
