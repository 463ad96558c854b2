use ruler_core::*;

#[test]
fn test_unit_system_toggle_round_trip() {
    for units in [UnitSystem::Imperial, UnitSystem::Metric] {
        assert_ne!(units.toggled(), units);
        assert_eq!(units.toggled().toggled(), units);
    }
    assert_eq!(UnitSystem::default(), UnitSystem::Imperial);
    assert_eq!(UnitSystem::Metric.symbol(), "cm");
}

#[test]
fn test_viewport_metrics_validation() {
    assert!(ViewportMetrics::new(320.0, 160.0, 400.0).is_ok());
    assert!(ViewportMetrics::new(0.0, 160.0, 0.0).is_ok());

    assert!(matches!(
        ViewportMetrics::new(320.0, 0.0, 400.0),
        Err(RulerError::InvalidMetrics(_))
    ));
    assert!(ViewportMetrics::new(320.0, -1.0, 400.0).is_err());
    assert!(ViewportMetrics::new(f32::NAN, 160.0, 400.0).is_err());
    assert!(ViewportMetrics::new(320.0, 160.0, f32::INFINITY).is_err());
}

#[test]
fn test_viewport_metrics_tick_limit() {
    // At 1 dpi, 2^24 mm is 660520.3 px
    assert!(ViewportMetrics::new(660_520.0, 1.0, 100.0).is_ok());
    assert!(matches!(
        ViewportMetrics::new(660_521.0, 1.0, 100.0),
        Err(RulerError::InvalidMetrics(_))
    ));
    assert!(ViewportMetrics::new(1e12, 1.0, 100.0).is_err());

    // Same height is fine once the density makes it physically short
    assert!(ViewportMetrics::new(1e12, 1e7, 100.0).is_ok());
}

#[test]
fn test_error_messages() {
    let err = RulerError::Serialize("Failed to serialize frame: boom".into());
    assert_eq!(
        err.to_string(),
        "Serialization error: Failed to serialize frame: boom"
    );
    assert!(RulerError::Settings("bad".into()).to_string().starts_with("Settings error"));
}

#[test]
fn test_ruler_state_default() {
    let state = RulerState::default();
    assert_eq!(state.unit_system, UnitSystem::Imperial);
    assert_eq!(state.pointer_position_px, 100.0);
    assert!(state.pointer_visible);
    assert_eq!(state.accent_color, Argb::DEFAULT_ACCENT);
}

#[test]
fn test_drag_only_moves_visible_pointer() {
    let mut state = RulerState::default();
    assert!(state.drag_pointer(250.0));
    assert_eq!(state.pointer_position_px, 250.0);

    state.toggle_pointer();
    assert!(!state.drag_pointer(10.0));
    assert_eq!(state.pointer_position_px, 250.0);
}

#[test]
fn test_pointer_reading_one_inch() {
    for dpi in [96.0, 160.0, 326.0, 458.0] {
        let reading = pointer_reading(dpi, dpi, UnitSystem::Imperial);
        assert_eq!(format_reading(reading), "1.0");
    }
}

#[test]
fn test_random_colors_are_opaque() {
    let mut rng = rand::thread_rng();
    for _ in 0..32 {
        assert_eq!(Argb::random(&mut rng).alpha(), 255);
    }
}
