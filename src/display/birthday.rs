//! Birthday display formatting

use crate::models::{Birthday, BirthdayList};

/// Width of the right-aligned name column
const NAME_WIDTH: usize = 20;

/// Format one birthday as a list line (without trailing newline)
///
/// ```text
///                Alice:  2 weeks,  3 days ( 17 days) until 15/Jun/2026 (36 yo)
/// ```
pub fn format_birthday(birthday: &Birthday) -> String {
    format!(
        "{:>width$}: {} until {} ({} yo)",
        birthday.name,
        birthday.countdown(),
        birthday.next_date_label(),
        birthday.upcoming_age(),
        width = NAME_WIDTH
    )
}

/// Format every birthday, one per line, soonest first
pub fn format_birthday_list(list: &BirthdayList) -> String {
    let mut output = String::new();
    for birthday in list {
        output.push_str(&format_birthday(birthday));
        output.push('\n');
    }
    output
}
