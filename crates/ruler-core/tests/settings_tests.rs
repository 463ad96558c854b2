use ruler_core::*;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert!(!settings.is_metric);
    assert!(settings.show_pointer);
    assert_eq!(settings.accent_color, Argb::DEFAULT_ACCENT);
    assert_eq!(settings.dots_per_inch, None);
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = Settings {
        is_metric: true,
        show_pointer: false,
        accent_color: Argb(0xFF12_3456),
        dots_per_inch: Some(141.0),
    };
    settings.save(&path).unwrap();

    assert_eq!(Settings::load(&path).unwrap(), settings);
}

#[test]
fn test_missing_keys_take_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "is_metric": true }"#).unwrap();

    let settings = Settings::load(&path).unwrap();
    assert!(settings.is_metric);
    assert!(settings.show_pointer);
    assert_eq!(settings.accent_color, Argb::DEFAULT_ACCENT);
}

#[test]
fn test_accent_stored_as_integer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    Settings::default().save(&path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains(&format!("\"accent_color\": {}", 0xFFFF_4081u32)));
    assert!(!json.contains("dots_per_inch"));
}

#[test]
fn test_load_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(Settings::load(&missing), Err(RulerError::Io(_))));
    assert_eq!(Settings::load_or_default(&missing), Settings::default());

    let garbage = dir.path().join("garbage.json");
    std::fs::write(&garbage, "not json").unwrap();
    assert!(matches!(Settings::load(&garbage), Err(RulerError::Settings(_))));
    assert_eq!(Settings::load_or_default(&garbage), Settings::default());
}

#[test]
fn test_load_if_exists_keeps_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert_eq!(Settings::load_if_exists(&missing).unwrap(), Settings::default());

    let corrupt = dir.path().join("corrupt.json");
    std::fs::write(&corrupt, "{ \"is_metric\": tru").unwrap();
    assert!(matches!(
        Settings::load_if_exists(&corrupt),
        Err(RulerError::Settings(_))
    ));
    assert_eq!(
        std::fs::read_to_string(&corrupt).unwrap(),
        "{ \"is_metric\": tru"
    );
}

#[test]
fn test_default_path() {
    let path = Settings::default_path();
    assert_eq!(path.file_name().unwrap(), "settings.json");
}

#[test]
fn test_launch_override_wins() {
    let settings = Settings {
        is_metric: false,
        ..Settings::default()
    };

    assert_eq!(settings.to_state(None).unit_system, UnitSystem::Imperial);
    assert_eq!(
        settings.to_state(Some(UnitSystem::Metric)).unit_system,
        UnitSystem::Metric
    );
}

#[test]
fn test_state_round_trip() {
    let mut state = RulerState::default();
    state.toggle_units();
    state.toggle_pointer();
    state.pick_accent(Argb(0x0011_2233));

    let mut settings = Settings::default();
    settings.update_from_state(&state);
    assert!(settings.is_metric);
    assert!(!settings.show_pointer);
    assert_eq!(settings.accent_color, Argb(0xFF11_2233));

    let restored = settings.to_state(None);
    assert_eq!(restored.unit_system, state.unit_system);
    assert_eq!(restored.pointer_visible, state.pointer_visible);
    assert_eq!(restored.accent_color, state.accent_color);
}

#[test]
fn test_set_by_key() {
    let mut settings = Settings::default();
    settings.set("is_metric", "true").unwrap();
    settings.set("accent_color", "#00FF00").unwrap();
    settings.set("dots_per_inch", "120").unwrap();

    assert!(settings.is_metric);
    assert_eq!(settings.accent_color, Argb(0xFF00_FF00));
    assert_eq!(settings.dots_per_inch, Some(120.0));

    settings.set("dots_per_inch", "none").unwrap();
    assert_eq!(settings.dots_per_inch, None);

    assert!(settings.set("show_pointer", "maybe").is_err());
    assert!(settings.set("dots_per_inch", "-3").is_err());
    assert!(settings.set("volume", "11").is_err());
}
