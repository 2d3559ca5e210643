//! Apparent solar position for an Earth observer, using the NOAA/Meeus
//! low-precision series: Julian time base, orbital elements, declination and
//! right ascension, hour angle, elevation/azimuth, equation of time,
//! sunrise/sunset and atmospheric refraction. Pure functions, no I/O.

pub mod angles;
pub mod observer;
pub mod orbit;
pub mod refraction;
pub mod time;
pub mod types;

pub use angles::{
    deg_to_rad, normalize_degrees_180, normalize_degrees_360, normalize_radians_2pi,
    normalize_radians_pi, rad_to_deg, DEGREES_PER_HOUR,
};

pub use time::{
    julian_century, julian_century_from_jd, julian_date, DAYS_PER_JULIAN_CENTURY, J2000_JD,
    MINUTES_PER_DAY, SECONDS_PER_DAY, UNIX_EPOCH_JD,
};

pub use orbit::{
    corrected_obliquity, corrected_obliquity_from_components, eccentricity, equation_of_center,
    mean_obliquity, nutation, omega, sun_apparent_longitude, sun_mean_anomaly,
    sun_mean_longitude, sun_radius_vector, sun_radius_vector_from_components, sun_true_anomaly,
    sun_true_longitude,
};

pub use observer::{
    corrected_solar_elevation, corrected_solar_elevation_with, daylight_minutes, declination,
    equation_of_time, hour_angle, local_solar_noon, local_solar_time, right_ascension,
    solar_azimuth, solar_elevation, solar_zenith_angle, sun_position, sun_position_at,
    sunrise_hour_angle, sunrise_sunset_time, sunset_hour_angle,
};

pub use refraction::approximate_refraction;

pub use types::{SunEvent, SunPosition};
