//! Tick rank classification
//!
//! Ranks are decided by exact floating point comparison against the floor
//! and ceiling of the position. Accumulated rounding can misclassify a tick
//! that lands a hair off a boundary; every comparison lives in this module
//! so a tolerant variant only has to replace `classify`.

use crate::types::Rank;

/// Classify a position (in whole units) into its subdivision rank
pub fn classify(position: f32) -> Rank {
    let value = position as f64;
    let floor = value.floor();
    let ceiling = value.ceil();

    if value == floor {
        Rank::Whole
    } else if value - 0.5 == floor {
        Rank::Half
    } else if value - 0.25 == floor || value + 0.25 == ceiling {
        Rank::Quarter
    } else {
        Rank::Sixteenth
    }
}

/// Whether a position sits exactly on a whole unit
pub fn is_whole(position: f32) -> bool {
    classify(position) == Rank::Whole
}

/// Stroke length for a rank on a viewport of the given width
pub fn line_length(rank: Rank, viewport_width: f32) -> f32 {
    viewport_width / rank.width_divisor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_imperial_steps() {
        assert_eq!(classify(0.0), Rank::Whole);
        assert_eq!(classify(3.0), Rank::Whole);
        assert_eq!(classify(0.5), Rank::Half);
        assert_eq!(classify(2.5), Rank::Half);
        assert_eq!(classify(0.25), Rank::Quarter);
        assert_eq!(classify(1.75), Rank::Quarter);
        assert_eq!(classify(0.0625), Rank::Sixteenth);
        assert_eq!(classify(0.125), Rank::Sixteenth);
        assert_eq!(classify(1.9375), Rank::Sixteenth);
    }

    #[test]
    fn test_classify_centimeters() {
        assert_eq!(classify(1.0), Rank::Whole);
        assert_eq!(classify(1.5), Rank::Half);
        assert_eq!(classify(0.3), Rank::Sixteenth);
    }

    #[test]
    fn test_line_length_ordering() {
        let width = 480.0;
        let whole = line_length(Rank::Whole, width);
        let half = line_length(Rank::Half, width);
        let quarter = line_length(Rank::Quarter, width);
        let sixteenth = line_length(Rank::Sixteenth, width);

        assert_eq!(whole, 240.0);
        assert!(whole > half);
        assert!(half > quarter);
        assert!(quarter > sixteenth);
    }
}
