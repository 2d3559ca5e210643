pub const SECONDS_PER_DAY: f64 = 86400.0;
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;
/// Julian Date of the J2000.0 epoch, 2000-01-01 12:00 TT.
pub const J2000_JD: f64 = 2451545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Julian Date for a Unix timestamp (uniform 86400-second days, no leap
/// seconds).
pub fn julian_date(timestamp: i64) -> f64 {
    timestamp as f64 / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian centuries since J2000.0 for a Julian Date.
pub fn julian_century_from_jd(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian centuries since J2000.0 for a Unix timestamp. This is the single
/// time variable every orbital-element formula takes.
pub fn julian_century(timestamp: i64) -> f64 {
    julian_century_from_jd(julian_date(timestamp))
}
