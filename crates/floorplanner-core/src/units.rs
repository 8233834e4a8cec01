//! Geometry and unit utilities
//!
//! Everything inside the editor is measured in inches (stored as `f64`).
//! Feet/inches only appear at the presentation boundary, so the helpers
//! here convert between the two and quantize values onto the grid.

use crate::constants::{MIN_GRID_SIZE, SQUARE_INCHES_PER_SQUARE_FOOT};
use crate::error::MeasurementError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Round half-way values towards positive infinity.
///
/// Matches the rounding the editor has always used for grid snapping, so
/// `-6` on a 12" grid snaps to `0` rather than `-12`.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Snap a value to the nearest multiple of `grid_size`.
///
/// Grid sizes below one inch are treated as one inch.
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    let grid = grid_size.max(MIN_GRID_SIZE);
    round_half_up(value / grid) * grid
}

/// Area of a `width` x `height` rectangle in whole square feet.
pub fn square_footage(width: f64, height: f64) -> f64 {
    round_half_up(width * height / SQUARE_INCHES_PER_SQUARE_FOOT)
}

/// A length split into whole feet and remaining inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInches {
    pub feet: i64,
    pub inches: f64,
}

impl FeetInches {
    pub fn new(feet: i64, inches: f64) -> Self {
        Self { feet, inches }
    }

    /// Total length in inches.
    pub fn to_inches(self) -> f64 {
        feet_inches_to_inches(self.feet, self.inches)
    }
}

impl fmt::Display for FeetInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}' {}\"", self.feet, self.inches)
    }
}

/// Split a length in inches into feet and inches.
///
/// The inches part is always in `0.0..12.0`, so the split round-trips
/// through [`feet_inches_to_inches`] for negative values too.
pub fn inches_to_feet_inches(total: f64) -> FeetInches {
    let mut feet = (total / 12.0).floor() as i64;
    let mut inches = total.rem_euclid(12.0);
    // rem_euclid rounds up to exactly 12.0 for tiny negative inputs.
    if inches >= 12.0 {
        feet += 1;
        inches = 0.0;
    }
    FeetInches { feet, inches }
}

/// Combine feet and inches into a length in inches.
pub fn feet_inches_to_inches(feet: i64, inches: f64) -> f64 {
    feet as f64 * 12.0 + inches
}

/// Width and height of an item, split for feet/inches input fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: FeetInches,
    pub height: FeetInches,
}

impl Dimensions {
    pub fn from_inches(width: f64, height: f64) -> Self {
        Self {
            width: inches_to_feet_inches(width),
            height: inches_to_feet_inches(height),
        }
    }

    /// Returns `(width, height)` in inches.
    pub fn to_inches(self) -> (f64, f64) {
        (self.width.to_inches(), self.height.to_inches())
    }

    /// The same dimensions rotated by 90 degrees.
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Parse a user-entered length into inches.
///
/// Accepts `10' 6"`, `10'6"`, `10'`, `6"` and bare inches such as `126`.
pub fn parse_feet_inches(input: &str) -> Result<f64, MeasurementError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MeasurementError::Empty);
    }

    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|_| MeasurementError::InvalidNumber {
                input: trimmed.to_string(),
                part: part.trim().to_string(),
            })
    };

    let (feet_part, rest) = match trimmed.split_once('\'') {
        Some((feet, rest)) => (Some(feet), rest),
        None => (None, trimmed),
    };

    let feet = feet_part.map(&parse).transpose()?.unwrap_or(0.0);
    let inches_part = rest.trim().trim_end_matches('"').trim();
    let inches = if inches_part.is_empty() {
        0.0
    } else {
        parse(inches_part)?
    };

    if feet < 0.0 || inches < 0.0 {
        return Err(MeasurementError::Negative {
            input: trimmed.to_string(),
        });
    }

    Ok(feet * 12.0 + inches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(37.0, 12.0), 36.0);
        assert_eq!(snap_to_grid(42.0, 12.0), 48.0);
        assert_eq!(snap_to_grid(-12.0, 12.0), -12.0);
        assert_eq!(snap_to_grid(-6.0, 12.0), 0.0);
        assert_eq!(snap_to_grid(250.0, 12.0), 252.0);
    }

    #[test]
    fn test_snap_clamps_grid_to_one_inch() {
        assert_eq!(snap_to_grid(3.4, 0.0), 3.0);
        assert_eq!(snap_to_grid(3.6, -5.0), 4.0);
    }

    #[test]
    fn test_square_footage() {
        assert_eq!(square_footage(120.0, 240.0), 200.0);
        assert_eq!(square_footage(12.0, 12.0), 1.0);
        // 30" x 30" is 6.25 sq ft
        assert_eq!(square_footage(30.0, 30.0), 6.0);
        assert_eq!(square_footage(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_feet_inches_conversion() {
        assert_eq!(inches_to_feet_inches(126.0), FeetInches::new(10, 6.0));
        assert_eq!(inches_to_feet_inches(12.0), FeetInches::new(1, 0.0));
        assert_eq!(inches_to_feet_inches(7.5), FeetInches::new(0, 7.5));
        assert_eq!(feet_inches_to_inches(10, 6.0), 126.0);
        assert_eq!(inches_to_feet_inches(-1.0).to_inches(), -1.0);
    }

    #[test]
    fn test_feet_inches_tiny_negative_stays_in_range() {
        let split = inches_to_feet_inches(-1e-17);
        assert_eq!(split, FeetInches::new(0, 0.0));
        assert_eq!(split.to_string(), "0' 0\"");
    }

    #[test]
    fn test_feet_inches_display() {
        assert_eq!(FeetInches::new(10, 6.0).to_string(), "10' 6\"");
        assert_eq!(FeetInches::new(0, 7.5).to_string(), "0' 7.5\"");
    }

    #[test]
    fn test_dimensions() {
        let dims = Dimensions::from_inches(120.0, 246.0);
        assert_eq!(dims.width, FeetInches::new(10, 0.0));
        assert_eq!(dims.height, FeetInches::new(20, 6.0));
        assert_eq!(dims.swapped().to_inches(), (246.0, 120.0));
    }

    #[test]
    fn test_parse_feet_inches() {
        assert_eq!(parse_feet_inches("10' 6\"").unwrap(), 126.0);
        assert_eq!(parse_feet_inches("10'6\"").unwrap(), 126.0);
        assert_eq!(parse_feet_inches("10'").unwrap(), 120.0);
        assert_eq!(parse_feet_inches("6\"").unwrap(), 6.0);
        assert_eq!(parse_feet_inches(" 126 ").unwrap(), 126.0);
    }

    #[test]
    fn test_parse_feet_inches_errors() {
        assert_eq!(parse_feet_inches("  "), Err(MeasurementError::Empty));
        assert!(matches!(
            parse_feet_inches("ten' 6\""),
            Err(MeasurementError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_feet_inches("-2'"),
            Err(MeasurementError::Negative { .. })
        ));
    }

    proptest! {
        #[test]
        fn snap_is_idempotent(value in -10_000.0f64..10_000.0, grid in 1u32..=48) {
            let grid = f64::from(grid);
            let once = snap_to_grid(value, grid);
            prop_assert_eq!(snap_to_grid(once, grid), once);
        }

        #[test]
        fn snap_lands_within_half_a_cell(value in -10_000.0f64..10_000.0, grid in 1u32..=48) {
            let grid = f64::from(grid);
            let snapped = snap_to_grid(value, grid);
            prop_assert!((snapped - value).abs() <= grid / 2.0 + 1e-9);
            prop_assert_eq!((snapped / grid).fract(), 0.0);
        }

        #[test]
        fn feet_inches_round_trip(total in -100_000.0f64..100_000.0) {
            let split = inches_to_feet_inches(total);
            prop_assert!((split.to_inches() - total).abs() < 1e-6);
            prop_assert!(split.inches >= 0.0 && split.inches < 12.0);
        }
    }
}
