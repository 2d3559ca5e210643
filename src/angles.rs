use std::f64::consts::PI;

pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_degrees_360(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Normalize an angle in degrees to [-180, 180).
pub fn normalize_degrees_180(angle: f64) -> f64 {
    let degrees = normalize_degrees_360(angle);
    if degrees >= 180.0 {
        degrees - 360.0
    } else {
        degrees
    }
}

/// Normalize an angle in radians to [0, 2π).
pub fn normalize_radians_2pi(angle: f64) -> f64 {
    angle.rem_euclid(2.0 * PI)
}

/// Normalize an angle in radians to [-π, π).
pub fn normalize_radians_pi(angle: f64) -> f64 {
    let radians = normalize_radians_2pi(angle);
    if radians >= PI {
        radians - 2.0 * PI
    } else {
        radians
    }
}
