//! Distance-based fare schedule.
//!
//! Fares follow a three-band piecewise-linear schedule: a flat base fare
//! for short trips, two linear bands, then a cap for long trips.

/// Distance up to which only the base fare is charged (km).
pub const BASE_DISTANCE_KM: f64 = 3.2;

/// End of the first linear band (km).
pub const MID_DISTANCE_KM: f64 = 8.2;

/// Distance at which the fare is capped (km).
pub const CAP_DISTANCE_KM: f64 = 40.0;

/// Fare charged for any trip up to [`BASE_DISTANCE_KM`].
pub const BASE_FARE: f64 = 0.99;

/// Fare at [`MID_DISTANCE_KM`].
pub const MID_FARE: f64 = 1.47;

/// Maximum fare, charged from [`CAP_DISTANCE_KM`] onwards.
pub const CAP_FARE: f64 = 2.24;

/// Fare for travelling `distance_km`.
///
/// Monotone non-decreasing and total. Negative and NaN distances are
/// treated as zero and so cost the base fare.
///
/// # Examples
///
/// ```
/// use route_server::domain::fare;
///
/// assert_eq!(fare(1.0), 0.99);
/// assert_eq!(fare(40.0), 2.24);
/// assert_eq!(fare(100.0), 2.24);
/// ```
pub fn fare(distance_km: f64) -> f64 {
    // `max` discards NaN in favour of 0.0
    let d = distance_km.max(0.0);

    if d <= BASE_DISTANCE_KM {
        BASE_FARE
    } else if d < MID_DISTANCE_KM {
        interpolate(d, BASE_DISTANCE_KM, MID_DISTANCE_KM, BASE_FARE, MID_FARE)
    } else if d < CAP_DISTANCE_KM {
        interpolate(d, MID_DISTANCE_KM, CAP_DISTANCE_KM, MID_FARE, CAP_FARE)
    } else {
        CAP_FARE
    }
}

// Bands are half-open at the top: a boundary distance is evaluated in the
// next band, where the interpolation term is exactly zero.
fn interpolate(d: f64, d0: f64, d1: f64, f0: f64, f1: f64) -> f64 {
    f0 + (d - d0) * (f1 - f0) / (d1 - d0)
}
