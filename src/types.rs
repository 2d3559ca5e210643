/// Time of a horizon crossing, or the polar condition that makes it
/// undefined. Day fractions are in [0, 1) of the local civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunEvent {
    At(f64),
    PolarDay,
    PolarNight,
}

impl SunEvent {
    pub fn day_fraction(&self) -> Option<f64> {
        match self {
            SunEvent::At(fraction) => Some(*fraction),
            SunEvent::PolarDay | SunEvent::PolarNight => None,
        }
    }

    pub fn is_polar_day(&self) -> bool {
        matches!(self, SunEvent::PolarDay)
    }

    pub fn is_polar_night(&self) -> bool {
        matches!(self, SunEvent::PolarNight)
    }
}

/// Every output of the solar-position pipeline for one observer and instant.
/// Angles are degrees, the radius vector is AU, local solar time is hours,
/// solar noon is a day fraction, daylight is minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub julian_century: f64,
    pub declination: f64,
    pub right_ascension: f64,
    pub equation_of_time: f64,
    pub local_solar_time: f64,
    pub solar_noon: f64,
    pub hour_angle: f64,
    pub elevation: f64,
    pub refraction: f64,
    pub corrected_elevation: f64,
    pub zenith: f64,
    /// `None` during polar night at the poles, where the azimuth is
    /// undefined.
    pub azimuth: Option<f64>,
    pub sunrise: SunEvent,
    pub sunset: SunEvent,
    pub daylight_minutes: f64,
    pub radius_vector: f64,
}
