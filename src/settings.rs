use crate::counter::Appearance;
use crate::indicator::art::{EMPTY_LINE, GOAL_LINE};
use crate::indicator::IndicatorKind;
use crate::surface::Rgba;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that overrides the settings file location.
pub const SETTINGS_ENV: &str = "FULLSCREEN_COUNTER_SETTINGS";
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Startup defaults for the configuration form. The file is only ever read.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Write log output to this file instead of stdout.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub start_value: i32,
    #[serde(default = "default_goal_value")]
    pub goal_value: i32,
    /// Colors used while the counter is below the goal.
    #[serde(default = "default_normal")]
    pub normal: Appearance,
    /// Colors used once the goal is reached.
    #[serde(default = "default_reached")]
    pub reached: Appearance,
    /// Multiplier applied to the counter font size.
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
    #[serde(default)]
    pub indicator: IndicatorKind,
    #[serde(default = "default_goal_reached_text")]
    pub goal_reached_text: String,
    #[serde(default)]
    pub art: ArtSettings,
}

/// Optional replacement art. Paths come in pairs; leaving both unset keeps
/// the bundled art.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ArtSettings {
    #[serde(default)]
    pub thermometer_empty: Option<PathBuf>,
    #[serde(default)]
    pub thermometer_reached: Option<PathBuf>,
    /// Source scanline of the goal mark in the custom thermometer art.
    #[serde(default = "default_goal_line")]
    pub thermometer_goal_line: u32,
    /// Source scanline where the liquid starts in the custom thermometer art.
    #[serde(default = "default_empty_line")]
    pub thermometer_empty_line: u32,
    #[serde(default)]
    pub star_normal: Option<PathBuf>,
    #[serde(default)]
    pub star_shining: Option<PathBuf>,
}

fn default_goal_value() -> i32 {
    50
}

fn default_normal() -> Appearance {
    Appearance {
        foreground: Rgba::WHITE,
        background: Rgba::BLACK,
        alpha: 255,
    }
}

fn default_reached() -> Appearance {
    Appearance {
        foreground: Rgba::rgb(75, 75, 255),
        background: Rgba::WHITE,
        alpha: 255,
    }
}

fn default_font_scale() -> f32 {
    1.0
}

fn default_goal_reached_text() -> String {
    "Goal Reached!".into()
}

fn default_goal_line() -> u32 {
    GOAL_LINE
}

fn default_empty_line() -> u32 {
    EMPTY_LINE
}

impl Default for ArtSettings {
    fn default() -> Self {
        Self {
            thermometer_empty: None,
            thermometer_reached: None,
            thermometer_goal_line: default_goal_line(),
            thermometer_empty_line: default_empty_line(),
            star_normal: None,
            star_shining: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            start_value: 0,
            goal_value: default_goal_value(),
            normal: default_normal(),
            reached: default_reached(),
            font_scale: default_font_scale(),
            indicator: IndicatorKind::default(),
            goal_reached_text: default_goal_reached_text(),
            art: ArtSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing or empty file yields the defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content).with_context(|| format!("parse settings file {path}"))
    }

    /// Settings file location, honouring [`SETTINGS_ENV`].
    pub fn default_path() -> String {
        std::env::var(SETTINGS_ENV).unwrap_or_else(|_| DEFAULT_SETTINGS_FILE.into())
    }
}
