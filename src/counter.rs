use crate::error::ConfigError;
use crate::indicator::IndicatorKind;
use crate::settings::Settings;
use crate::surface::Rgba;
use serde::{Deserialize, Serialize};

/// Counter colors for one phase (before or after the goal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub foreground: Rgba,
    pub background: Rgba,
    /// Opacity of the counter text over the background.
    pub alpha: u8,
}

impl Appearance {
    pub fn text_color(&self) -> Rgba {
        self.foreground.with_alpha(self.alpha)
    }
}

/// A validated counter configuration, ready to start a session.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterConfig {
    pub start_value: i32,
    pub goal_value: i32,
    pub normal: Appearance,
    pub reached: Appearance,
    pub font_scale: f32,
    pub indicator: IndicatorKind,
    pub goal_reached_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterCommand {
    Increment,
    Decrement,
    RequestExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    value: i32,
    goal: i32,
}

impl CounterState {
    pub fn new(value: i32, goal: i32) -> Self {
        Self { value, goal }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn goal(&self) -> i32 {
        self.goal
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    /// Step down by one; the counter never goes below zero this way.
    pub fn decrement(&mut self) -> bool {
        if self.value > 0 {
            self.value -= 1;
            true
        } else {
            false
        }
    }

    pub fn goal_reached(&self) -> bool {
        self.value >= self.goal
    }

    /// Negative values are not shown.
    pub fn display_text(&self) -> String {
        if self.value >= 0 {
            self.value.to_string()
        } else {
            String::new()
        }
    }
}

/// Raw contents of the configuration form.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigForm {
    pub start_value: String,
    pub goal_value: String,
    pub normal: Appearance,
    pub reached: Appearance,
    pub font_scale: f32,
    pub indicator: IndicatorKind,
    pub goal_reached_text: String,
}

impl ConfigForm {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            start_value: settings.start_value.to_string(),
            goal_value: settings.goal_value.to_string(),
            normal: settings.normal,
            reached: settings.reached,
            font_scale: settings.font_scale,
            indicator: settings.indicator,
            goal_reached_text: settings.goal_reached_text.clone(),
        }
    }

    pub fn validate(&self) -> Result<CounterConfig, ConfigError> {
        let start_value = parse_integer(&self.start_value).ok_or(ConfigError::InvalidStart)?;
        let goal_value = parse_integer(&self.goal_value).ok_or(ConfigError::InvalidGoal)?;
        if start_value >= goal_value {
            return Err(ConfigError::GoalNotAboveStart);
        }
        Ok(CounterConfig {
            start_value,
            goal_value,
            normal: self.normal,
            reached: self.reached,
            font_scale: self.font_scale,
            indicator: self.indicator,
            goal_reached_text: self.goal_reached_text.clone(),
        })
    }
}

/// Parse an integer written in canonical form: no sign prefix, padding or
/// leading zeros.
pub fn parse_integer(text: &str) -> Option<i32> {
    let value = text.parse::<i32>().ok()?;
    (value.to_string() == text).then_some(value)
}

/// Font size for the counter digits. The default is three quarters of the
/// screen height; text wider than 90% of `available_width` shrinks to fit.
pub fn counter_font_size(
    screen_height: f32,
    font_scale: f32,
    text_width: f32,
    available_width: f32,
) -> f32 {
    let default = font_scale * 3.0 * screen_height / 4.0;
    let max_width = 0.9 * available_width;
    if text_width > max_width && text_width > 0.0 {
        default * (max_width / text_width)
    } else {
        default
    }
}

/// Font size of the labels above and below the counter.
pub fn label_font_size(screen_height: f32) -> f32 {
    screen_height / 8.0
}
