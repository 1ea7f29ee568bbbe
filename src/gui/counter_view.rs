use super::color32;
use super::exit_modal::ExitModal;
use crate::counter::{counter_font_size, label_font_size, Appearance, CounterCommand, CounterConfig};
use crate::indicator::IndicatorLayout;
use crate::session::CounterSession;
use crate::settings::ArtSettings;
use crate::viewport::{leave_fullscreen, resolve_exit};
use eframe::egui;

const KEY_BINDINGS: [(egui::Key, CounterCommand); 3] = [
    (egui::Key::Space, CounterCommand::Increment),
    (egui::Key::Backspace, CounterCommand::Decrement),
    (egui::Key::Escape, CounterCommand::RequestExit),
];

pub fn command_for_key(key: egui::Key) -> Option<CounterCommand> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, command)| *command)
}

/// Commands for every key press in `events`, repeats included.
pub fn key_commands(events: &[egui::Event]) -> Vec<CounterCommand> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key, pressed: true, ..
            } => command_for_key(*key),
            _ => None,
        })
        .collect()
}

/// Size of the monitor in physical pixels, falling back to the current
/// window size when the monitor is unknown.
pub fn screen_size_px(ctx: &egui::Context) -> (u32, u32) {
    let points = ctx
        .input(|i| i.viewport().monitor_size)
        .unwrap_or_else(|| ctx.screen_rect().size());
    let ppp = ctx.pixels_per_point();
    (
        (points.x * ppp).round().max(1.0) as u32,
        (points.y * ppp).round().max(1.0) as u32,
    )
}

/// The full-screen counter display.
pub struct CounterView {
    session: CounterSession,
    texture: Option<egui::TextureHandle>,
    texture_size: (u32, u32),
    dirty: bool,
    exit_modal: ExitModal,
}

impl CounterView {
    pub fn new(ctx: &egui::Context, config: CounterConfig, art: &ArtSettings) -> anyhow::Result<Self> {
        let screen = screen_size_px(ctx);
        tracing::debug!(?screen, "building counter view");
        let session = CounterSession::new(config, screen, art)?;
        Ok(Self {
            session,
            texture: None,
            texture_size: (0, 0),
            dirty: true,
            exit_modal: ExitModal::default(),
        })
    }

    pub fn session(&self) -> &CounterSession {
        &self.session
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        if !self.exit_modal.is_open() {
            let commands = ctx.input(|i| key_commands(&i.events));
            for command in commands {
                self.handle(ctx, command);
            }
        }

        let appearance = self.session.appearance();
        let ppp = ctx.pixels_per_point();
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(color32(appearance.background)))
            .show(ctx, |ui| {
                let full = ui.max_rect();
                let text_area = self.paint_indicator(ui, full, ppp);
                self.paint_labels(ui, text_area, appearance);
            });

        if let Some(choice) = self.exit_modal.ui(ctx) {
            resolve_exit(ctx, choice);
        }
    }

    fn handle(&mut self, ctx: &egui::Context, command: CounterCommand) {
        match command {
            CounterCommand::RequestExit => {
                leave_fullscreen(ctx);
                self.exit_modal.open();
            }
            other => {
                if self.session.apply(other) {
                    self.dirty = true;
                    ctx.request_repaint();
                }
            }
        }
    }

    /// Paint the indicator and return the area left for the counter text.
    fn paint_indicator(&mut self, ui: &egui::Ui, full: egui::Rect, ppp: f32) -> egui::Rect {
        let Some(layout) = self.session.indicator_layout() else {
            return full;
        };
        let (area, rest) = match layout {
            IndicatorLayout::Column { width } => {
                let width = (width as f32 / ppp).min(full.width());
                let column = egui::Rect::from_min_size(full.min, egui::vec2(width, full.height()));
                let rest = egui::Rect::from_min_max(egui::pos2(column.max.x, full.min.y), full.max);
                (column, rest)
            }
            IndicatorLayout::Background => (full, full),
        };
        let size = (
            (area.width() * ppp).round().max(1.0) as u32,
            (area.height() * ppp).round().max(1.0) as u32,
        );
        if let Some(texture) = self.refresh_texture(ui.ctx(), size) {
            ui.painter().image(
                texture,
                area,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        rest
    }

    /// Re-render the indicator when the counter or the target size changed.
    fn refresh_texture(&mut self, ctx: &egui::Context, size: (u32, u32)) -> Option<egui::TextureId> {
        if self.dirty || self.texture.is_none() || self.texture_size != size {
            let surface = self.session.render_indicator(size)?;
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [size.0 as usize, size.1 as usize],
                surface.as_raw(),
            );
            match &mut self.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
                None => {
                    self.texture =
                        Some(ctx.load_texture("counter-indicator", image, egui::TextureOptions::LINEAR));
                }
            }
            self.texture_size = size;
            self.dirty = false;
        }
        self.texture.as_ref().map(|t| t.id())
    }

    fn paint_labels(&self, ui: &egui::Ui, area: egui::Rect, appearance: Appearance) {
        let painter = ui.painter();
        let color = color32(appearance.text_color());
        let screen_height = ui.ctx().screen_rect().height();
        let scale = self.session.config().font_scale;

        let text = self.session.counter().display_text();
        let default_size = counter_font_size(screen_height, scale, 0.0, area.width());
        let measured = painter
            .layout_no_wrap(text.clone(), egui::FontId::proportional(default_size), color)
            .size()
            .x;
        let size = counter_font_size(screen_height, scale, measured, area.width());
        painter.text(
            area.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(size),
            color,
        );

        if let Some(goal_text) = self.session.goal_text() {
            let label_size = label_font_size(screen_height);
            painter.text(
                egui::pos2(area.center().x, area.max.y - label_size * 0.25),
                egui::Align2::CENTER_BOTTOM,
                goal_text,
                egui::FontId::proportional(label_size),
                color,
            );
        }
    }
}
