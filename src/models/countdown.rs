//! Human-friendly countdown text
//!
//! Renders a delta as `W weeks, D days (T days)`. Singular units are padded
//! to the width of their plural form so consecutive lines stay aligned.

const SECONDS_PER_DAY: i64 = 86_400;

/// Width of the weeks column, e.g. `" 2 weeks,"`
const WEEKS_COLUMN: usize = 9;

/// Format seconds-until-anniversary as a countdown string
///
/// The day count is `floor(seconds / 86400) + 1`, so anything later today
/// counts as one day. Durations under a week leave the weeks column blank.
pub fn friendly_delta(delta_seconds: i64) -> String {
    let total_days = delta_seconds.div_euclid(SECONDS_PER_DAY) + 1;
    let weeks = total_days / 7;
    let days = total_days % 7;

    let weeks_part = if total_days >= 7 {
        format!("{:2} {}", weeks, unit(weeks, "week", ","))
    } else {
        " ".repeat(WEEKS_COLUMN)
    };

    format!(
        "{} {:2} {} ({:3} {}",
        weeks_part,
        days,
        unit(days, "day", ""),
        total_days,
        unit(total_days, "day", ")")
    )
}

/// `word` or its plural, followed by `suffix` and padded to the plural width
fn unit(count: i64, word: &str, suffix: &str) -> String {
    let plural = format!("{}s{}", word, suffix);
    if count == 1 {
        format!("{:<width$}", format!("{}{}", word, suffix), width = plural.len())
    } else {
        plural
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = SECONDS_PER_DAY;

    #[test]
    fn test_weeks_and_days() {
        // 16 full days plus some hours -> 17 days
        assert_eq!(friendly_delta(16 * DAY + 3600), " 2 weeks,  3 days ( 17 days)");
    }

    #[test]
    fn test_singular_units_are_padded() {
        assert_eq!(friendly_delta(7 * DAY), " 1 week,   1 day  (  8 days)");
        assert_eq!(friendly_delta(13 * DAY), " 2 weeks,  0 days ( 14 days)");
    }

    #[test]
    fn test_short_form() {
        assert_eq!(friendly_delta(2 * DAY + 60), "           3 days (  3 days)");
        assert_eq!(friendly_delta(3600), "           1 day  (  1 day) ");
    }

    #[test]
    fn test_columns_align() {
        let lengths: Vec<usize> = [0, DAY, 5 * DAY, 6 * DAY, 7 * DAY, 20 * DAY, 300 * DAY]
            .iter()
            .map(|&d| friendly_delta(d).len())
            .collect();
        assert!(lengths.windows(2).all(|w| w[0] == w[1]), "{lengths:?}");
    }

    #[test]
    fn test_full_year() {
        assert_eq!(friendly_delta(364 * DAY + 1), "52 weeks,  1 day  (365 days)");
    }
}
