use log::warn;

/// Render an aggregate rating snapped to the nearest half star.
///
/// An unknown rating stays unknown; the output layer decides how to show it.
/// Halfway cases round to the even half-star count, so `4.25` becomes `4.0`.
pub fn format_rating(value: Option<f64>) -> Option<String> {
    value.map(|value| {
        let rounded = (value / 0.5).round_ties_even() * 0.5;
        format!("{rounded:.1} stars")
    })
}

/// Read a rating that came through as text, e.g. `"4.3"`.
pub fn parse_rating_value(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            warn!("Ignoring unparseable rating value: {raw:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(4.3)).as_deref(), Some("4.5 stars"));
        assert_eq!(format_rating(Some(4.2)).as_deref(), Some("4.0 stars"));
        assert_eq!(format_rating(Some(5.0)).as_deref(), Some("5.0 stars"));
        assert_eq!(format_rating(Some(0.0)).as_deref(), Some("0.0 stars"));
    }

    #[test]
    fn test_format_rating_ties() {
        assert_eq!(format_rating(Some(4.25)).as_deref(), Some("4.0 stars"));
        assert_eq!(format_rating(Some(4.75)).as_deref(), Some("5.0 stars"));
    }

    #[test]
    fn test_unknown_rating_passes_through() {
        assert_eq!(format_rating(None), None);
    }

    #[test]
    fn test_parse_rating_value() {
        assert_eq!(parse_rating_value("4.3"), Some(4.3));
        assert_eq!(parse_rating_value(" 3 "), Some(3.0));
        assert_eq!(parse_rating_value("four"), None);
        assert_eq!(parse_rating_value("NaN"), None);
    }
}
