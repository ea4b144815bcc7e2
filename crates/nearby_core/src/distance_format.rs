use crate::constants::DISTANCE_UNKNOWN_LABEL;

/// Formats a distance for display.
///
/// Under one kilometer the distance is shown in whole meters (`"500 m"`),
/// otherwise in kilometers with one decimal (`"1.0 km"`). An unknown distance
/// formats as the empty string.
pub fn format_distance(km: Option<f64>) -> String {
    match km {
        None => String::new(),
        Some(km) if km < 1.0 => format!("{} m", (km * 1000.0).round()),
        Some(km) => format!("{km:.1} km"),
    }
}

/// The label shown under a list entry.
pub fn distance_label(km: Option<f64>) -> String {
    match km {
        Some(_) => format!("{} away", format_distance(km)),
        None => DISTANCE_UNKNOWN_LABEL.to_string(),
    }
}
