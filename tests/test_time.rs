use sun_angles::time::*;

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

// 2000-01-01T12:00:00Z
const J2000_TIMESTAMP: i64 = 946_728_000;

// ── Julian Date ──

#[test]
fn test_julian_date_unix_epoch() {
    assert_approx!(julian_date(0), UNIX_EPOCH_JD, 1e-9);
}

#[test]
fn test_julian_date_j2000() {
    assert_approx!(julian_date(J2000_TIMESTAMP), J2000_JD, 1e-9);
}

#[test]
fn test_julian_date_half_day() {
    assert_approx!(julian_date(43_200), UNIX_EPOCH_JD + 0.5, 1e-9);
}

#[test]
fn test_julian_date_exact_day_increment() {
    for &ts in &[0_i64, 1, 946_728_000, 1_718_971_200, -86_400, 253_402_300_799] {
        assert_approx!(julian_date(ts + 86_400), julian_date(ts) + 1.0, 1e-7);
    }
}

#[test]
fn test_julian_date_negative_timestamp() {
    // 1969-12-31T00:00:00Z
    assert_approx!(julian_date(-86_400), UNIX_EPOCH_JD - 1.0, 1e-9);
}

// ── Julian Century ──

#[test]
fn test_julian_century_zero_at_j2000() {
    assert_approx!(julian_century(J2000_TIMESTAMP), 0.0, 1e-12);
}

#[test]
fn test_julian_century_one_century_later() {
    let one_century_secs = (DAYS_PER_JULIAN_CENTURY * SECONDS_PER_DAY) as i64;
    assert_approx!(julian_century(J2000_TIMESTAMP + one_century_secs), 1.0, 1e-10);
}

#[test]
fn test_julian_century_negative_before_j2000() {
    assert!(julian_century(0) < 0.0);
    assert_approx!(julian_century(0), -0.3, 0.001);
}

#[test]
fn test_julian_century_from_jd_matches_timestamp_path() {
    for &ts in &[0_i64, 946_728_000, 1_718_971_200] {
        assert_approx!(
            julian_century_from_jd(julian_date(ts)),
            julian_century(ts),
            1e-15
        );
    }
}
