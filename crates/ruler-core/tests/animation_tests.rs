use ruler_core::*;
use std::time::Duration;

#[test]
fn test_transition_progress() {
    let t = Transition::new(0u8, 255u8, 10.0);

    assert_eq!(t.duration, Duration::from_millis(200));
    assert_eq!(t.value_at(10.0), 0);
    assert_eq!(t.value_at(10.1), 128);
    assert_eq!(t.value_at(10.2), 255);
    assert_eq!(t.value_at(11.0), 255);
    // Clock readings before the start hold the start value
    assert_eq!(t.value_at(9.0), 0);

    assert!(!t.is_finished(10.1));
    assert!(t.is_finished(10.2));
}

#[test]
fn test_zero_duration_finishes_immediately() {
    let t = Transition::with_duration(0u8, 255u8, 1.0, Duration::ZERO);
    assert!(t.is_finished(1.0));
    assert_eq!(t.value_at(1.0), 255);
}

#[test]
fn test_color_transition() {
    let mut accent = Animated::new(Argb(0xFF00_0000));
    accent.animate_to(Argb(0xFFFF_FFFF), 0.0);

    assert!(accent.is_animating());
    assert_eq!(accent.target(), Argb(0xFFFF_FFFF));
    assert_eq!(accent.value(0.1), Argb(0xFF80_8080));
    assert_eq!(accent.value(0.5), Argb(0xFFFF_FFFF));
    assert!(!accent.is_animating());
}

#[test]
fn test_last_animation_started_wins() {
    let mut alpha = Animated::new(255u8);
    alpha.animate_to(target_alpha(255), 0.0);

    // Halfway through the fade-out the user toggles again
    assert_eq!(alpha.value(0.1), 128);
    alpha.animate_to(target_alpha(128), 0.1);
    assert_eq!(alpha.target(), 0);

    // Still heading to 0 since the pointer is partly visible
    assert_eq!(alpha.value(0.2), 64);
    assert_eq!(alpha.value(0.3), 0);

    alpha.animate_to(target_alpha(0), 1.0);
    assert_eq!(alpha.value(1.0), 0);
    assert_eq!(alpha.value(1.2), 255);
}

#[test]
fn test_set_cancels_transition() {
    let mut alpha = Animated::new(0u8);
    alpha.animate_to(255, 0.0);
    alpha.set(42);

    assert!(!alpha.is_animating());
    assert_eq!(alpha.value(5.0), 42);
}

#[test]
fn test_animate_to_same_value_is_noop() {
    let mut alpha = Animated::new(255u8);
    alpha.animate_to(255, 0.0);
    assert!(!alpha.is_animating());
}
