use std::f64::consts::PI;

use chrono::{NaiveTime, Timelike};

/// Hand positions in radians, clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// Relative hand lengths, as a fraction of the face radius.
pub const HOUR_HAND: f64 = 0.5;
pub const MINUTE_HAND: f64 = 0.8;
pub const SECOND_HAND: f64 = 0.9;

impl HandAngles {
    pub fn at(time: NaiveTime) -> Self {
        let h = f64::from(time.hour() % 12);
        let m = f64::from(time.minute());
        let s = f64::from(time.second());

        Self {
            hour: h * PI / 6.0 + m * PI / (6.0 * 60.0) + s * PI / (360.0 * 60.0),
            minute: m * PI / 30.0 + s * PI / (30.0 * 60.0),
            second: s * PI / 30.0,
        }
    }
}

/// End point of a hand of `length` at `angle` on a face centred on the origin,
/// with y pointing up.
pub fn hand_tip(angle: f64, length: f64) -> (f64, f64) {
    (length * angle.sin(), length * angle.cos())
}
