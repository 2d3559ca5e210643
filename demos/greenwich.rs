use chrono::TimeZone;
use chrono_tz::Europe::London;

use sun_angles::sun_position;

fn main() {
    let latitude = 51.5;
    let longitude = 0.0;
    let timezone_offset = 1.0; // BST

    let dt = London.with_ymd_and_hms(2024, 6, 21, 13, 0, 0).unwrap();

    let pos = sun_position(latitude, longitude, timezone_offset, &dt);

    println!("=== Solar Position: Greenwich, June solstice ===");
    println!("Location: {:.1}°N, {:.1}°E", latitude, longitude);
    println!("Date/Time: {}", dt);
    println!();
    println!("Declination: {:.2}°", pos.declination);
    println!("Right ascension: {:.2}°", pos.right_ascension);
    println!("Equation of time: {:.2} minutes", pos.equation_of_time);
    println!("Local solar time: {:.2} hours", pos.local_solar_time);
    println!("Hour angle: {:.2}°", pos.hour_angle);
    println!("Elevation: {:.2}°", pos.elevation);
    println!(
        "Refraction-corrected elevation: {:.2}°",
        pos.corrected_elevation
    );
    println!("Zenith angle: {:.2}°", pos.zenith);
    match pos.azimuth {
        Some(az) => println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", az),
        None => println!("Azimuth: undefined (polar night)"),
    }
    println!("Sun-Earth distance: {:.5} AU", pos.radius_vector);
    println!();
    println!("Solar noon: {}", format_day_fraction(pos.solar_noon));
    match pos.sunrise.day_fraction() {
        Some(f) => println!("Sunrise: {}", format_day_fraction(f)),
        None => println!("Sunrise: none (polar day or night)"),
    }
    match pos.sunset.day_fraction() {
        Some(f) => println!("Sunset: {}", format_day_fraction(f)),
        None => println!("Sunset: none (polar day or night)"),
    }
    println!(
        "Daylight: {:.0} minutes ({:.1} hours)",
        pos.daylight_minutes,
        pos.daylight_minutes / 60.0
    );
}

fn format_day_fraction(fraction: f64) -> String {
    let minutes = fraction * 1440.0;
    format!("{:02}:{:02}", (minutes / 60.0) as u32 % 24, (minutes % 60.0) as u32)
}
