//! Orbital elements of the Sun as functions of the Julian Century number,
//! using the NOAA low-precision solar position series. Arguments named `t`
//! are Julian centuries since J2000.0; results are degrees unless noted.

use crate::angles::{deg_to_rad, normalize_degrees_360};

const MEAN_RADIUS_VECTOR_CORRECTION: f64 = 1.000001018;

/// Eccentricity of Earth's orbit (dimensionless).
pub fn eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// The Sun's mean anomaly, normalized to [0, 360).
pub fn sun_mean_anomaly(t: f64) -> f64 {
    normalize_degrees_360(357.5291092 + t * (35999.05029 + 0.0001537 * t))
}

/// Equation of center: the correction turning the mean anomaly into the true
/// anomaly, accounting for the elliptical orbit.
pub fn equation_of_center(t: f64, mean_anomaly: f64) -> f64 {
    let m = deg_to_rad(mean_anomaly);
    (1.914602 - t * (0.004817 + 0.000014 * t)) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin()
}

pub fn sun_true_anomaly(t: f64) -> f64 {
    let mean_anomaly = sun_mean_anomaly(t);
    mean_anomaly + equation_of_center(t, mean_anomaly)
}

/// The Sun's mean longitude, normalized to [0, 360).
pub fn sun_mean_longitude(t: f64) -> f64 {
    normalize_degrees_360(280.46646 + t * (36000.76983 + 0.0003032 * t))
}

/// The Sun's true longitude. The equation of center is evaluated with the
/// mean anomaly, matching the standard derivation.
pub fn sun_true_longitude(t: f64) -> f64 {
    sun_mean_longitude(t) + equation_of_center(t, sun_mean_anomaly(t))
}

/// The Sun's apparent longitude, corrected for aberration and nutation in
/// longitude via the lunar-node term.
pub fn sun_apparent_longitude(true_longitude: f64, t: f64) -> f64 {
    true_longitude - 0.00569 - 0.00478 * deg_to_rad(omega(t)).sin()
}

/// Longitude of the ascending lunar node, normalized to [0, 360).
pub fn omega(t: f64) -> f64 {
    normalize_degrees_360(125.04 - 1934.136 * t)
}

/// Mean obliquity of the ecliptic.
pub fn mean_obliquity(t: f64) -> f64 {
    23.439292 - t * (0.013004167 + t * (0.00000016389 - 0.0000005036 * t))
}

/// Mean obliquity corrected for the lunar-node oscillation.
pub fn corrected_obliquity(t: f64) -> f64 {
    corrected_obliquity_from_components(mean_obliquity(t), omega(t))
}

/// Same correction from a precomputed obliquity and omega.
pub fn corrected_obliquity_from_components(obliquity: f64, omega: f64) -> f64 {
    obliquity + 0.00256 * deg_to_rad(omega).cos()
}

/// Nutation in longitude (Δψ) in degrees. Exposed as an independent quantity;
/// the declination/right-ascension chain does not consume it.
pub fn nutation(t: f64) -> f64 {
    let omega = deg_to_rad(omega(t));
    let l_moon = deg_to_rad(normalize_degrees_360(125.04 - 1934.136 * t));
    let l_sun = deg_to_rad(sun_mean_longitude(t));
    let delta_psi = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin()
        + 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    delta_psi / 3600.0
}

/// Earth-Sun distance in astronomical units.
pub fn sun_radius_vector(t: f64) -> f64 {
    sun_radius_vector_from_components(eccentricity(t), sun_true_anomaly(t))
}

/// Radius vector in AU from a precomputed eccentricity and true anomaly.
pub fn sun_radius_vector_from_components(eccentricity: f64, true_anomaly: f64) -> f64 {
    (MEAN_RADIUS_VECTOR_CORRECTION * (1.0 - eccentricity * eccentricity))
        / (1.0 + eccentricity * deg_to_rad(true_anomaly).cos())
}
