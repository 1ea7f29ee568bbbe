use eframe::egui;

/// The subset of `egui::Context` used to drive the counter window.
pub trait ViewportCtx {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);
    fn request_repaint(&self);
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

/// Answer to the exit confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    Exit,
    Stay,
}

pub fn enter_fullscreen<C: ViewportCtx>(ctx: &C) {
    tracing::debug!("entering full screen");
    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
    ctx.request_repaint();
}

/// Drop out of full screen so the exit confirmation is visible.
pub fn leave_fullscreen<C: ViewportCtx>(ctx: &C) {
    tracing::debug!("leaving full screen");
    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
    ctx.request_repaint();
}

pub fn close<C: ViewportCtx>(ctx: &C) {
    tracing::info!("closing counter window");
    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
}

/// Close on `Exit`, go back to full screen on `Stay`.
pub fn resolve_exit<C: ViewportCtx>(ctx: &C, choice: ExitChoice) {
    match choice {
        ExitChoice::Exit => close(ctx),
        ExitChoice::Stay => enter_fullscreen(ctx),
    }
}
