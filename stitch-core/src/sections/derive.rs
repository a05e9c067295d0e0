//! Presentation values derived from record fields.

use chrono::{Datelike, NaiveDate};
use log::warn;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// First letter of every word, upper-cased: `"ada lovelace"` -> `"AL"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Day of month and short month name shown on event cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    pub day: String,
    pub month: &'static str,
}

/// Splits a `YYYY-MM-DD` date into its display parts. Anything after the
/// date (a time, a zone) is ignored. An unreadable date yields empty parts.
pub fn date_parts(date: &str) -> DateParts {
    match NaiveDate::parse_and_remainder(date.trim(), "%Y-%m-%d") {
        Ok((date, _)) => DateParts {
            day: date.day().to_string(),
            month: MONTHS[date.month0() as usize],
        },
        Err(e) => {
            warn!("Unreadable date `{date}`: {e}");
            DateParts::default()
        }
    }
}

/// Display form of a category id: `"art-science"` -> `"art science"`.
pub fn category_label(id: &str) -> String {
    id.replace('-', " ")
}

/// Font Awesome class for a social platform.
pub fn social_icon(platform: &str) -> &'static str {
    match platform {
        "linkedin" => "fab fa-linkedin",
        "twitter" => "fab fa-twitter",
        "instagram" => "fab fa-instagram",
        "facebook" => "fab fa-facebook",
        "github" => "fab fa-github",
        _ => "fas fa-link",
    }
}

/// Display name for a social platform. Unknown platforms show their key.
pub fn platform_name(platform: &str) -> &str {
    match platform {
        "linkedin" => "LinkedIn",
        "twitter" => "Twitter",
        "instagram" => "Instagram",
        "facebook" => "Facebook",
        "github" => "GitHub",
        other => other,
    }
}

/// Display name for a member directory role. Unknown roles show their key.
pub fn role_label(role: &str) -> &str {
    match role {
        "practitioner" => "Practitioner",
        "scientist" => "Scientist",
        "donor" => "Donor",
        "artist" => "Artist",
        "creative-tech" => "Creative Tech",
        other => other,
    }
}
