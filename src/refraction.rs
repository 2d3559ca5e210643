use crate::angles::deg_to_rad;

/// Approximate atmospheric refraction in degrees for a true (uncorrected)
/// solar elevation in degrees. Piecewise by elevation range; refraction
/// shrinks with increasing elevation and is largest near the horizon.
pub fn approximate_refraction(elevation: f64) -> f64 {
    let tan_e = deg_to_rad(elevation).tan();
    let arcseconds = if elevation > 85.0 {
        0.0
    } else if elevation > 5.0 {
        58.1 / tan_e - 0.07 / tan_e.powi(3) + 0.000086 / tan_e.powi(5)
    } else if elevation > -0.575 {
        1735.0 + elevation * (-518.2 + elevation * (103.4 + elevation * (-12.79 + elevation * 0.711)))
    } else {
        -20.772 / tan_e
    };
    arcseconds / 3600.0
}
