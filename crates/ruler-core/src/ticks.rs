//! Tick generation
//!
//! Walks the height of the viewport once, emitting one tick per graduation.
//! Imperial rulers step every 1/16"; metric rulers step every millimeter and
//! rank each tick by its value in centimeters.

use crate::constants::{
    IMPERIAL_STEP_INCHES, LEADING_OFFSET_PX, MAX_TICKS, METRIC_STEP_MM, MM_PER_CM, cm_to_inches,
    inches_to_cm,
};
use crate::rank;
use crate::types::{Rank, Tick, UnitSystem, ViewportMetrics};

/// Ticks for the given unit system
pub fn ticks(metrics: &ViewportMetrics, unit_system: UnitSystem) -> Vec<Tick> {
    match unit_system {
        UnitSystem::Imperial => imperial_ticks(metrics),
        UnitSystem::Metric => metric_ticks(metrics),
    }
}

/// Ticks every 1/16" over `[0, height_inches)`
pub fn imperial_ticks(metrics: &ViewportMetrics) -> Vec<Tick> {
    let height_inches = metrics.height_inches();
    let mut ticks = Vec::new();

    for step in 0..MAX_TICKS {
        let inches = step as f32 * IMPERIAL_STEP_INCHES;
        if inches >= height_inches {
            break;
        }
        let offset_px = inches * metrics.dots_per_inch + LEADING_OFFSET_PX;
        ticks.push(make_tick(inches, offset_px, metrics.width_px));
    }

    ticks
}

/// Ticks every millimeter over the viewport height, labelled in centimeters
pub fn metric_ticks(metrics: &ViewportMetrics) -> Vec<Tick> {
    let height_mm = inches_to_cm(metrics.height_inches()) * MM_PER_CM;
    let mut ticks = Vec::new();

    for step in 0..MAX_TICKS {
        let mm = step as f32 * METRIC_STEP_MM;
        if mm >= height_mm {
            break;
        }
        let cm = mm / MM_PER_CM;
        let offset_px = cm_to_inches(cm) * metrics.dots_per_inch + LEADING_OFFSET_PX;
        ticks.push(make_tick(cm, offset_px, metrics.width_px));
    }

    ticks
}

fn make_tick(position: f32, offset_px: f32, viewport_width: f32) -> Tick {
    let rank = rank::classify(position);
    let label = match rank {
        Rank::Whole => Some((position as i64).to_string()),
        _ => None,
    };

    Tick {
        position,
        offset_px,
        rank,
        line_length_px: rank::line_length(rank, viewport_width),
        label,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(height_px: f32, dpi: f32, width_px: f32) -> ViewportMetrics {
        ViewportMetrics::new(height_px, dpi, width_px).unwrap()
    }

    #[test]
    fn test_first_tick_is_offset() {
        let ticks = imperial_ticks(&metrics(320.0, 160.0, 400.0));
        assert_eq!(ticks[0].offset_px, LEADING_OFFSET_PX);
        assert_eq!(ticks[1].offset_px, 10.0 + LEADING_OFFSET_PX);
    }

    #[test]
    fn test_zero_height_has_no_ticks() {
        assert!(imperial_ticks(&metrics(0.0, 160.0, 400.0)).is_empty());
        assert!(metric_ticks(&metrics(0.0, 160.0, 400.0)).is_empty());
    }

    #[test]
    fn test_partial_step_is_included() {
        // 2.01" tall: the tick at exactly 2" is still strictly inside
        let ticks = imperial_ticks(&metrics(321.6, 160.0, 400.0));
        assert_eq!(ticks.len(), 33);
        assert_eq!(ticks.last().unwrap().position, 2.0);
    }

    #[test]
    fn test_metric_offsets() {
        let ticks = metric_ticks(&metrics(254.0, 254.0, 400.0));
        // 1 cm is 100 px at 254 dpi
        let one_cm = &ticks[10];
        assert_eq!(one_cm.position, 1.0);
        assert!((one_cm.offset_px - (100.0 + LEADING_OFFSET_PX)).abs() < 1e-3);
    }
}
