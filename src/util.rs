/// Rounds half away from zero to `places` decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}

pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    match whole {
        positive if positive > 0 => Some(part as f64 / whole as f64 * 100.0),
        _ => None,
    }
}
