/// Format a walking distance: whole meters below one kilometre, otherwise
/// kilometres with one decimal, exact halves rounding up.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round() as i64)
    } else {
        // `{:.1}` rounds ties to even, so round half up first.
        format!("{:.1}km", (meters / 100.0).round() / 10.0)
    }
}

/// Format a duration in minutes as `"{n} min"` or `"{h}h {m}m"` from one hour up.
pub fn format_duration(minutes: u64) -> String {
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}
