use fullscreen_counter::indicator::IndicatorKind;
use fullscreen_counter::settings::Settings;
use fullscreen_counter::surface::Rgba;
use tempfile::tempdir;

#[test]
fn partial_file_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "goal_value": 12, "indicator": "stars", "font_scale": 0.5 }"#,
    )
    .unwrap();

    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings.goal_value, 12);
    assert_eq!(settings.indicator, IndicatorKind::Stars);
    assert_eq!(settings.font_scale, 0.5);
    assert_eq!(settings.start_value, 0);
    assert_eq!(settings.goal_reached_text, "Goal Reached!");
    assert_eq!(settings.reached.foreground, Rgba::rgb(75, 75, 255));
    assert_eq!(settings.art.thermometer_goal_line, 140);
}

#[test]
fn colors_are_read_as_components() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "normal": { "foreground": {"r": 1, "g": 2, "b": 3, "a": 255},
                         "background": {"r": 4, "g": 5, "b": 6, "a": 255},
                         "alpha": 90 } }"#,
    )
    .unwrap();

    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings.normal.foreground, Rgba::rgb(1, 2, 3));
    assert_eq!(settings.normal.background, Rgba::rgb(4, 5, 6));
    assert_eq!(settings.normal.alpha, 90);
}

#[test]
fn missing_or_empty_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert_eq!(
        Settings::load(missing.to_str().unwrap()).unwrap(),
        Settings::default()
    );

    let empty = dir.path().join("empty.json");
    std::fs::write(&empty, "  \n").unwrap();
    assert_eq!(
        Settings::load(empty.to_str().unwrap()).unwrap(),
        Settings::default()
    );
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = Settings::load(path.to_str().unwrap()).unwrap_err();
    assert!(format!("{err:#}").contains("parse settings file"));
}
