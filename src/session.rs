use crate::counter::{Appearance, CounterCommand, CounterConfig, CounterState};
use crate::indicator::{self, Indicator, IndicatorLayout};
use crate::settings::ArtSettings;
use crate::surface::{PixelSurface, Rect};

/// One run of the full-screen counter: the counter value, the configured
/// colors and the indicator that follows the value.
pub struct CounterSession {
    config: CounterConfig,
    counter: CounterState,
    indicator: Option<Box<dyn Indicator>>,
}

impl CounterSession {
    /// Start a session on a screen of `screen` pixels.
    pub fn new(config: CounterConfig, screen: (u32, u32), art: &ArtSettings) -> anyhow::Result<Self> {
        let indicator = indicator::build(
            config.indicator,
            config.start_value,
            config.goal_value,
            screen,
            art,
        )?;
        Ok(Self::with_indicator(config, indicator))
    }

    pub fn with_indicator(config: CounterConfig, indicator: Option<Box<dyn Indicator>>) -> Self {
        let mut session = Self {
            counter: CounterState::new(config.start_value, config.goal_value),
            config,
            indicator,
        };
        session.sync();
        tracing::info!(
            start = session.config.start_value,
            goal = session.config.goal_value,
            indicator = %session.config.indicator,
            "counter session started"
        );
        session
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn value(&self) -> i32 {
        self.counter.value()
    }

    pub fn appearance(&self) -> Appearance {
        if self.counter.goal_reached() {
            self.config.reached
        } else {
            self.config.normal
        }
    }

    /// Text for the label below the counter; `None` while the goal is not
    /// reached or no text is configured.
    pub fn goal_text(&self) -> Option<&str> {
        let text = self.config.goal_reached_text.as_str();
        (self.counter.goal_reached() && !text.is_empty()).then_some(text)
    }

    pub fn indicator_layout(&self) -> Option<IndicatorLayout> {
        self.indicator.as_ref().map(|i| i.layout())
    }

    /// Apply a counter command. Returns whether the displayed state changed.
    pub fn apply(&mut self, command: CounterCommand) -> bool {
        let changed = match command {
            CounterCommand::Increment => {
                self.counter.increment();
                true
            }
            CounterCommand::Decrement => self.counter.decrement(),
            CounterCommand::RequestExit => false,
        };
        if changed {
            self.sync();
            tracing::debug!(
                value = self.counter.value(),
                reached = self.counter.goal_reached(),
                "counter changed"
            );
        }
        changed
    }

    /// Render the indicator into a fresh surface of `size` pixels.
    pub fn render_indicator(&self, size: (u32, u32)) -> Option<PixelSurface> {
        let indicator = self.indicator.as_ref()?;
        let background = self.appearance().background;
        let mut surface = PixelSurface::new(size.0, size.1, background);
        indicator.render(&mut surface, Rect::from_size(size.0, size.1));
        Some(surface)
    }

    fn sync(&mut self) {
        let background = self.appearance().background;
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.set_value(self.counter.value());
            indicator.set_background(background);
        }
    }
}
