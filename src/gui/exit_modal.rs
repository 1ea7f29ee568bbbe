use crate::viewport::ExitChoice;
use eframe::egui;

/// "Are you sure?" prompt shown when the presenter presses Escape.
#[derive(Debug, Clone)]
pub struct ExitModal {
    open: bool,
    title: String,
    question: String,
}

impl Default for ExitModal {
    fn default() -> Self {
        Self {
            open: false,
            title: "Full Screen Counter".into(),
            question: "Are you sure to exit the counter?".into(),
        }
    }
}

impl ExitModal {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the prompt. Returns the presenter's answer once given; closing
    /// the window counts as staying.
    pub fn ui(&mut self, ctx: &egui::Context) -> Option<ExitChoice> {
        if !self.open {
            return None;
        }
        let mut choice = None;
        let mut open = true;
        egui::Window::new(self.title.clone())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(&self.question);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        choice = Some(ExitChoice::Exit);
                    }
                    if ui.button("No").clicked() {
                        choice = Some(ExitChoice::Stay);
                    }
                });
            });
        if !open && choice.is_none() {
            choice = Some(ExitChoice::Stay);
        }
        if choice.is_some() {
            self.open = false;
        }
        choice
    }
}
