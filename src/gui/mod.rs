pub mod config_panel;
pub mod counter_view;
pub mod exit_modal;

pub use config_panel::{ConfigAction, ConfigPanel};
pub use counter_view::CounterView;
pub use exit_modal::ExitModal;

use crate::settings::Settings;
use crate::surface::Rgba;
use crate::viewport;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

const TOAST_SECONDS: f64 = 4.0;

pub fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

enum Screen {
    Config(ConfigPanel),
    Counter(Box<CounterView>),
}

/// Top level application: the configuration form until the presenter starts
/// the counter, then the full-screen counter.
pub struct CounterApp {
    settings: Settings,
    screen: Screen,
    toasts: Toasts,
}

impl CounterApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            screen: Screen::Config(ConfigPanel::new(&settings)),
            settings,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0]),
        }
    }

    fn error_toast(&mut self, text: String) {
        self.toasts.add(Toast {
            text: text.into(),
            kind: ToastKind::Error,
            options: ToastOptions::default().duration_in_seconds(TOAST_SECONDS),
        });
    }
}

impl eframe::App for CounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let action = match &mut self.screen {
            Screen::Config(panel) => panel.ui(ctx),
            Screen::Counter(view) => {
                view.ui(ctx);
                ConfigAction::None
            }
        };

        match action {
            ConfigAction::None => {}
            ConfigAction::Start(config) => match CounterView::new(ctx, config, &self.settings.art) {
                Ok(view) => {
                    viewport::enter_fullscreen(ctx);
                    self.screen = Screen::Counter(Box::new(view));
                }
                Err(e) => {
                    tracing::error!("failed to start counter: {e:#}");
                    self.error_toast(format!("Failed to start the counter: {e:#}"));
                }
            },
            ConfigAction::Invalid(err) => {
                tracing::warn!(%err, "configuration rejected");
                self.error_toast(err.to_string());
            }
            ConfigAction::Quit => viewport::close(ctx),
        }

        self.toasts.show(ctx);
    }
}
