//! Runway wind component calculator
//!
//! Projects a decoded wind onto a runway alignment using the standard
//! wind-triangle decomposition. The angular difference is folded into
//! [0, 180] degrees before projection, which avoids the sign ambiguity of
//! naive heading subtraction across north.

use crate::app::models::{Wind, WindComponents};

/// Compute headwind and crosswind components
///
/// Returns `None` when no decomposition exists: the wind direction is
/// variable, or no runway heading is set. Only the sustained speed is
/// projected; gusts are reported but never enter the component math. The
/// result is exact; display rounding is a serialization concern.
pub fn compute(wind: &Wind, runway_heading_deg: Option<u32>) -> Option<WindComponents> {
    let direction = f64::from(wind.direction_deg?);
    let heading = f64::from(runway_heading_deg?);

    let mut angle = (direction - heading).abs();
    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    let angle_rad = angle.to_radians();
    let speed = f64::from(wind.speed_kt);

    Some(WindComponents {
        headwind_kt: speed * angle_rad.cos(),
        crosswind_kt: speed * angle_rad.sin(),
    })
}
