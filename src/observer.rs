use chrono::{DateTime, TimeZone, Utc};

use crate::angles::{deg_to_rad, normalize_degrees_180, rad_to_deg, DEGREES_PER_HOUR};
use crate::orbit;
use crate::refraction::approximate_refraction;
use crate::time::{julian_century, MINUTES_PER_DAY};
use crate::types::{SunEvent, SunPosition};

const MINUTES_PER_DEGREE_LONGITUDE: f64 = 4.0;
// Fixed horizon depression at sunrise/sunset: solar angular diameter plus
// standard refraction, applied directly in cosine space.
const SUNRISE_HORIZON_DEPRESSION: f64 = 0.0145380805;

/// Right ascension in degrees for an ecliptic longitude `lambda` and
/// obliquity `epsilon`, normalized to [-180, 180).
pub fn right_ascension(lambda: f64, epsilon: f64) -> f64 {
    let lambda = deg_to_rad(lambda);
    let alpha = (deg_to_rad(epsilon).cos() * lambda.sin()).atan2(lambda.cos());
    normalize_degrees_180(rad_to_deg(alpha))
}

/// The Sun's declination in degrees: apparent longitude projected through the
/// corrected obliquity.
pub fn declination(t: f64) -> f64 {
    let lambda = orbit::sun_apparent_longitude(orbit::sun_true_longitude(t), t);
    let epsilon = orbit::corrected_obliquity(t);
    rad_to_deg((deg_to_rad(epsilon).sin() * deg_to_rad(lambda).sin()).asin())
}

/// Equation of time in minutes: the offset between mean and apparent solar
/// time.
pub fn equation_of_time(t: f64) -> f64 {
    let l0 = deg_to_rad(orbit::sun_mean_longitude(t));
    let m = deg_to_rad(orbit::sun_mean_anomaly(t));
    let e = orbit::eccentricity(t);
    let y = deg_to_rad(orbit::corrected_obliquity(t) / 2.0).tan().powi(2);
    4.0 * rad_to_deg(
        y * (2.0 * l0).sin() - 2.0 * e * m.sin()
            + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
            - 0.5 * y * y * (4.0 * l0).sin()
            - 1.25 * e * e * (2.0 * m).sin(),
    )
}

/// Local solar time in hours for a UTC timestamp, longitude and equation of
/// time. Accumulated in minutes, normalized into [0, 1440), then converted to
/// hours, which is the unit `hour_angle` consumes.
pub fn local_solar_time(timestamp: i64, equation_of_time: f64, longitude: f64) -> f64 {
    let minutes_utc = timestamp.rem_euclid(86400) as f64 / 60.0;
    let solar_minutes = minutes_utc + longitude * MINUTES_PER_DEGREE_LONGITUDE + equation_of_time;
    solar_minutes.rem_euclid(MINUTES_PER_DAY) / 60.0
}

/// Local solar noon as a fraction of the local civil day.
pub fn local_solar_noon(timezone_offset: f64, equation_of_time: f64, longitude: f64) -> f64 {
    (720.0 - MINUTES_PER_DEGREE_LONGITUDE * longitude - equation_of_time
        + timezone_offset * 60.0)
        / MINUTES_PER_DAY
}

/// Hour angle in degrees from local solar time in hours: 15°/hour, zero at
/// solar noon, negative in the morning.
pub fn hour_angle(local_solar_time: f64) -> f64 {
    normalize_degrees_180((local_solar_time - 12.0) * DEGREES_PER_HOUR)
}

/// Hour angle of sunrise in degrees (always non-positive), clamped to -180
/// during polar day and 0 during polar night.
pub fn sunrise_hour_angle(declination: f64, latitude: f64) -> f64 {
    let lat = deg_to_rad(latitude);
    let dec = deg_to_rad(declination);
    let cos_h0 =
        (-SUNRISE_HORIZON_DEPRESSION - lat.sin() * dec.sin()) / (lat.cos() * dec.cos());
    if cos_h0 <= -1.0 {
        -180.0
    } else if cos_h0 >= 1.0 {
        0.0
    } else {
        -rad_to_deg(cos_h0.acos())
    }
}

pub fn sunset_hour_angle(declination: f64, latitude: f64) -> f64 {
    -sunrise_hour_angle(declination, latitude)
}

/// Sunrise or sunset time as a fraction of the local civil day, given solar
/// noon and the signed hour angle at the horizon crossing.
pub fn sunrise_sunset_time(solar_noon: f64, hour_angle_h0: f64) -> SunEvent {
    if hour_angle_h0.abs() >= 180.0 {
        SunEvent::PolarDay
    } else if hour_angle_h0 == 0.0 {
        SunEvent::PolarNight
    } else {
        SunEvent::At(solar_noon + hour_angle_h0 * MINUTES_PER_DEGREE_LONGITUDE / MINUTES_PER_DAY)
    }
}

/// Daylight duration in minutes from the sunrise/sunset hour angle: 1440
/// during polar day, 0 during polar night.
pub fn daylight_minutes(sunrise_sunset_hour_angle: f64) -> f64 {
    let angle = sunrise_sunset_hour_angle.abs();
    if angle >= 180.0 {
        MINUTES_PER_DAY
    } else if angle <= 0.0 {
        0.0
    } else {
        2.0 * 60.0 * angle / DEGREES_PER_HOUR
    }
}

/// Solar elevation above the horizon in degrees.
pub fn solar_elevation(hour_angle: f64, declination: f64, latitude: f64) -> f64 {
    let dec = deg_to_rad(declination);
    let lat = deg_to_rad(latitude);
    let ha = deg_to_rad(hour_angle);
    rad_to_deg((lat.sin() * dec.sin() + lat.cos() * dec.cos() * ha.cos()).asin())
}

/// Elevation adjusted for atmospheric refraction.
pub fn corrected_solar_elevation(elevation: f64) -> f64 {
    corrected_solar_elevation_with(elevation, approximate_refraction(elevation))
}

/// Elevation adjusted with an already known refraction.
pub fn corrected_solar_elevation_with(elevation: f64, refraction: f64) -> f64 {
    elevation + refraction
}

pub fn solar_zenith_angle(elevation: f64) -> f64 {
    90.0 - elevation
}

/// Solar azimuth in degrees clockwise from north, folded into [0, 360) by the
/// sign of the hour angle. At the poles the azimuth is 180° (north) or 0°
/// (south) while the Sun is up and undefined during polar night.
pub fn solar_azimuth(
    hour_angle: f64,
    declination: f64,
    elevation: f64,
    latitude: f64,
) -> Option<f64> {
    if latitude.abs() >= 90.0 {
        if elevation > 0.0 {
            return Some(if latitude > 0.0 { 180.0 } else { 0.0 });
        }
        return None;
    }
    let lat = deg_to_rad(latitude);
    let dec = deg_to_rad(declination);
    let zenith = deg_to_rad(solar_zenith_angle(elevation));
    let cos_azimuth =
        ((lat.sin() * zenith.cos() - dec.sin()) / (lat.cos() * zenith.sin())).clamp(-1.0, 1.0);
    let azimuth = rad_to_deg(cos_azimuth.acos());
    Some(if hour_angle > 0.0 {
        (azimuth + 180.0).rem_euclid(360.0)
    } else {
        (540.0 - azimuth).rem_euclid(360.0)
    })
}

/// Run the whole pipeline for one observer and UTC timestamp.
pub fn sun_position_at(
    latitude: f64,
    longitude: f64,
    timezone_offset: f64,
    timestamp: i64,
) -> SunPosition {
    let t = julian_century(timestamp);
    let dec = declination(t);
    let ra = right_ascension(
        orbit::sun_apparent_longitude(orbit::sun_true_longitude(t), t),
        orbit::corrected_obliquity(t),
    );
    let eot = equation_of_time(t);
    let lst = local_solar_time(timestamp, eot, longitude);
    let ha = hour_angle(lst);
    let noon = local_solar_noon(timezone_offset, eot, longitude);
    let elevation = solar_elevation(ha, dec, latitude);
    let refraction = approximate_refraction(elevation);
    let h0 = sunrise_hour_angle(dec, latitude);

    SunPosition {
        julian_century: t,
        declination: dec,
        right_ascension: ra,
        equation_of_time: eot,
        local_solar_time: lst,
        solar_noon: noon,
        hour_angle: ha,
        elevation,
        refraction,
        corrected_elevation: corrected_solar_elevation_with(elevation, refraction),
        zenith: solar_zenith_angle(elevation),
        azimuth: solar_azimuth(ha, dec, elevation, latitude),
        sunrise: sunrise_sunset_time(noon, h0),
        sunset: sunrise_sunset_time(noon, -h0),
        daylight_minutes: daylight_minutes(h0),
        radius_vector: orbit::sun_radius_vector(t),
    }
}

/// Convenience entry point taking a chrono datetime in any timezone.
pub fn sun_position<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    timezone_offset: f64,
    dt: &DateTime<Tz>,
) -> SunPosition {
    let utc = dt.with_timezone(&Utc);
    sun_position_at(latitude, longitude, timezone_offset, utc.timestamp())
}
