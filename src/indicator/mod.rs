pub mod art;
pub mod stars;
pub mod thermometer;

use crate::settings::ArtSettings;
use crate::surface::{Rgba, Rect, Surface};
use serde::{Deserialize, Serialize};

pub use art::{StarArt, ThermometerArt};
pub use stars::{Star, StarField, StarGeometry};
pub use thermometer::Thermometer;

/// Where the display window places an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorLayout {
    /// A full-height column of the given pixel width on the left edge.
    Column { width: u32 },
    /// Painted behind the counter across the whole window.
    Background,
}

/// A graphical progress indicator driven by the counter value.
pub trait Indicator {
    fn set_value(&mut self, value: i32);

    fn set_background(&mut self, color: Rgba);

    fn render(&self, surface: &mut dyn Surface, bounds: Rect);

    fn layout(&self) -> IndicatorLayout;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    None,
    #[default]
    Thermometer,
    Stars,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 3] = [
        IndicatorKind::None,
        IndicatorKind::Thermometer,
        IndicatorKind::Stars,
    ];
}

impl std::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndicatorKind::None => write!(f, "(none)"),
            IndicatorKind::Thermometer => write!(f, "Thermometer"),
            IndicatorKind::Stars => write!(f, "Stars"),
        }
    }
}

/// Build the indicator selected by `kind` for a screen of `screen` pixels,
/// loading only the art it needs.
pub fn build(
    kind: IndicatorKind,
    min_value: i32,
    max_value: i32,
    screen: (u32, u32),
    art: &ArtSettings,
) -> anyhow::Result<Option<Box<dyn Indicator>>> {
    match kind {
        IndicatorKind::None => Ok(None),
        IndicatorKind::Thermometer => {
            let art = ThermometerArt::from_settings(art)?;
            let thermometer = Thermometer::new(min_value, max_value, screen.1, &art)?;
            tracing::debug!(size = ?thermometer.desired_size(), "thermometer ready");
            Ok(Some(Box::new(thermometer)))
        }
        IndicatorKind::Stars => {
            let art = StarArt::from_settings(art)?;
            let field = StarField::new(min_value, max_value, screen, &art)?;
            tracing::debug!(geometry = ?field.geometry(), "star field ready");
            Ok(Some(Box::new(field)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{build, IndicatorKind, IndicatorLayout};
    use crate::error::ConfigError;
    use crate::settings::ArtSettings;

    #[test]
    fn none_builds_nothing() {
        let built = build(IndicatorKind::None, 0, 10, (200, 100), &ArtSettings::default()).unwrap();
        assert!(built.is_none());
    }

    #[test]
    fn thermometer_is_a_column() {
        let built = build(
            IndicatorKind::Thermometer,
            0,
            10,
            (400, 186),
            &ArtSettings::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(built.layout(), IndicatorLayout::Column { width: 60 });
    }

    #[test]
    fn stars_cover_the_background() {
        let built = build(IndicatorKind::Stars, 0, 10, (300, 120), &ArtSettings::default())
            .unwrap()
            .unwrap();
        assert_eq!(built.layout(), IndicatorLayout::Background);
    }

    #[test]
    fn inverted_range_is_a_config_error() {
        let err = build(
            IndicatorKind::Stars,
            5,
            5,
            (300, 120),
            &ArtSettings::default(),
        )
        .err()
        .unwrap();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidRange {
                min_value: 5,
                max_value: 5
            })
        );
    }

    #[test]
    fn kind_names_match_form_labels() {
        let labels: Vec<String> = IndicatorKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(labels, vec!["(none)", "Thermometer", "Stars"]);
    }
}
