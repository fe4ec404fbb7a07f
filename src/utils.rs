use chrono::{DateTime, Utc};

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Rounded percentage saved, `None` when there is no saving.
pub fn discount_percent(original: f64, price: f64) -> Option<u32> {
    if original <= 0.0 || price >= original {
        return None;
    }
    Some((((original - price) / original) * 100.0).round() as u32)
}

/// Number of filled stars out of five.
pub fn filled_stars(rating: f32) -> usize {
    if rating.is_nan() {
        return 0;
    }
    rating.clamp(0.0, 5.0).floor() as usize
}

pub fn star_row(rating: f32) -> String {
    let filled = filled_stars(rating);
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

pub fn relative_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = now.signed_duration_since(date).num_hours();
    if hours < 1 {
        return "Just now".to_owned();
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    date.format("%-m/%-d/%Y").to_string()
}

pub fn short_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn price_has_two_decimals() {
        assert_eq!(format_price(24.0), "$24.00");
        assert_eq!(format_price(9.5), "$9.50");
    }

    #[test]
    fn discount_rounds_to_whole_percent() {
        assert_eq!(discount_percent(45.0, 38.0), Some(16));
        assert_eq!(discount_percent(30.0, 24.0), Some(20));
        assert_eq!(discount_percent(20.0, 20.0), None);
        assert_eq!(discount_percent(0.0, 10.0), None);
    }

    #[test]
    fn stars_are_floored_and_clamped() {
        assert_eq!(filled_stars(4.8), 4);
        assert_eq!(filled_stars(7.0), 5);
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(star_row(3.2), "★★★☆☆");
    }

    #[test]
    fn relative_date_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_date(now - Duration::minutes(20), now), "Just now");
        assert_eq!(relative_date(now + Duration::hours(3), now), "Just now");
        assert_eq!(relative_date(now - Duration::hours(5), now), "5h ago");
        assert_eq!(relative_date(now - Duration::days(3), now), "3/7/2024");
    }
}
