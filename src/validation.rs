use regex::Regex;
use std::sync::OnceLock;

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 110;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z ]+$").expect("name pattern compiles"))
}

/// Passenger names are letters and spaces only. This also keeps commas out
/// of the ticket file, which has no escaping.
pub fn valid_name(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && name_pattern().is_match(trimmed)
}

pub fn valid_age(age: u32) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}
