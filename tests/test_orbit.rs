use sun_angles::orbit::*;
use sun_angles::time::julian_century;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Values at the J2000.0 epoch (t = 0) ──

#[test]
fn test_eccentricity_at_j2000() {
    assert_approx!(eccentricity(0.0), 0.016708634, 1e-12);
}

#[test]
fn test_mean_anomaly_at_j2000() {
    assert_approx!(sun_mean_anomaly(0.0), 357.5291092, 1e-9);
}

#[test]
fn test_mean_longitude_at_j2000() {
    assert_approx!(sun_mean_longitude(0.0), 280.46646, 1e-9);
}

#[test]
fn test_omega_at_j2000() {
    assert_approx!(omega(0.0), 125.04, 1e-9);
}

#[test]
fn test_mean_obliquity_at_j2000() {
    assert_approx!(mean_obliquity(0.0), 23.439292, 1e-9);
}

#[test]
fn test_corrected_obliquity_at_j2000() {
    // 23.439292 + 0.00256 * cos(125.04°)
    assert_approx!(corrected_obliquity(0.0), 23.43782, 1e-4);
}

#[test]
fn test_equation_of_center_at_j2000() {
    let m = sun_mean_anomaly(0.0);
    assert_approx!(equation_of_center(0.0, m), -0.08431, 1e-4);
}

#[test]
fn test_true_longitude_at_j2000() {
    assert_approx!(sun_true_longitude(0.0), 280.3822, 1e-3);
}

#[test]
fn test_apparent_longitude_at_j2000() {
    let lambda = sun_apparent_longitude(sun_true_longitude(0.0), 0.0);
    assert_approx!(lambda, 280.3726, 1e-3);
}

#[test]
fn test_nutation_at_j2000() {
    // ΔΨ ≈ -14.0" in early January 2000
    assert_approx!(nutation(0.0), -0.003896, 3e-4);
}

#[test]
fn test_radius_vector_near_perihelion() {
    // Early January: close to the perihelion distance of ~0.9833 AU
    assert_approx!(sun_radius_vector(0.0), 0.98332, 1e-3);
}

// ── Seasonal behavior ──

#[test]
fn test_radius_vector_near_aphelion() {
    // 2024-07-05T12:00:00Z, a couple of days from aphelion
    let t = julian_century(1_720_180_800);
    assert_approx!(sun_radius_vector(t), 1.01668, 1e-3);
}

#[test]
fn test_radius_vector_bounded_over_a_year() {
    let start = 1_704_067_200_i64; // 2024-01-01T00:00:00Z
    for day in 0..366 {
        let t = julian_century(start + day * 86_400);
        let r = sun_radius_vector(t);
        assert!((0.9830..=1.0170).contains(&r), "day {}: r={}", day, r);
    }
}

#[test]
fn test_eccentricity_slowly_decreasing() {
    assert!(eccentricity(1.0) < eccentricity(0.0));
    assert!(eccentricity(0.0) < eccentricity(-1.0));
}

#[test]
fn test_mean_obliquity_slowly_decreasing() {
    assert!(mean_obliquity(0.5) < mean_obliquity(0.0));
    assert!(mean_obliquity(0.0) < mean_obliquity(-0.5));
}

#[test]
fn test_corrected_obliquity_stays_close_to_mean() {
    for i in -10..=10 {
        let t = i as f64 * 0.05;
        assert_approx!(corrected_obliquity(t), mean_obliquity(t), 0.00256 + 1e-12);
    }
}

// ── Normalization of the fast angles ──

#[test]
fn test_fast_angles_normalized() {
    for i in -40..=40 {
        let t = i as f64 * 0.137;
        for angle in [sun_mean_anomaly(t), sun_mean_longitude(t), omega(t)] {
            assert!((0.0..360.0).contains(&angle), "t={}: {}", t, angle);
        }
    }
}

#[test]
fn test_equation_of_center_bounded() {
    // The correction can never exceed ~2 degrees for Earth's eccentricity
    for i in 0..720 {
        let m = i as f64 * 0.5;
        assert!(equation_of_center(0.0, m).abs() < 2.0, "m={}", m);
    }
}

#[test]
fn test_true_anomaly_tracks_mean_anomaly() {
    for i in -5..=5 {
        let t = i as f64 * 0.1;
        assert_approx!(sun_true_anomaly(t), sun_mean_anomaly(t), 2.0);
    }
}

// ── Decomposed variants ──

#[test]
fn test_corrected_obliquity_from_components_matches() {
    for i in -5..=5 {
        let t = i as f64 * 0.21;
        assert_approx!(
            corrected_obliquity_from_components(mean_obliquity(t), omega(t)),
            corrected_obliquity(t),
            1e-12
        );
    }
}

#[test]
fn test_radius_vector_from_components_matches() {
    for i in -5..=5 {
        let t = i as f64 * 0.21;
        assert_approx!(
            sun_radius_vector_from_components(eccentricity(t), sun_true_anomaly(t)),
            sun_radius_vector(t),
            1e-12
        );
    }
}
