//! Human-readable durations

/// Render a minute count as `"<n> minutes"` below an hour, otherwise as
/// `"<h> hours and <m> minutes"`.
///
/// Units are always plural, `1 hours and 0 minutes` included.
///
/// ```
/// use flptime_probe::format_minutes;
///
/// assert_eq!(format_minutes(59), "59 minutes");
/// assert_eq!(format_minutes(125), "2 hours and 5 minutes");
/// ```
pub fn format_minutes(minutes: u64) -> String {
    if minutes < 60 {
        return format!("{} minutes", minutes);
    }
    let hours = minutes / 60;
    let leftover = minutes - hours * 60;
    format!("{} hours and {} minutes", hours, leftover)
}
