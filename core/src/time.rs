use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::DateFormatError;

const STORAGE_FORMAT: &str = "%d-%m-%Y %H%M";
const DISPLAY_FORMAT: &str = "%d %b %y %H:%M";

struct DatePattern {
    label: &'static str,
    format: &'static str,
    // Date-only patterns default the time to 00:00.
    has_time: bool,
    // `yy` years always land in 2000-2099.
    two_digit_year: bool,
}

// Tried in order; the first pattern that parses wins.
static PATTERNS: [DatePattern; 5] = [
    DatePattern::full("dd-mm-yyyy HHmm", STORAGE_FORMAT, true),
    DatePattern::full("dd/mm/yyyy HHmm", "%d/%m/%Y %H%M", true),
    DatePattern::full("dd-mm-yyyy", "%d-%m-%Y", false),
    DatePattern::full("dd/mm/yyyy", "%d/%m/%Y", false),
    DatePattern {
        label: "dd MMM yy HH:mm",
        format: DISPLAY_FORMAT,
        has_time: true,
        two_digit_year: true,
    },
];

/// Human-readable names of the accepted input patterns, in priority order.
pub fn supported_patterns() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.label)
}

impl DatePattern {
    const fn full(label: &'static str, format: &'static str, has_time: bool) -> Self {
        Self { label, format, has_time, two_digit_year: false }
    }

    fn parse(&self, input: &str) -> Option<NaiveDateTime> {
        let parsed = if self.has_time {
            NaiveDateTime::parse_from_str(input, self.format).ok()
        } else {
            NaiveDate::parse_from_str(input, self.format)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        }?;
        if self.two_digit_year && parsed.year() < 2000 {
            // chrono reads 69-99 as 19xx.
            return parsed.with_year(parsed.year() + 100);
        }
        Some(parsed)
    }
}

pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, DateFormatError> {
    let input = input.trim();
    PATTERNS
        .iter()
        .find_map(|pattern| pattern.parse(input))
        .ok_or_else(|| DateFormatError {
            input: input.to_string(),
        })
}

/// Renders `dd-MM-yyyy HHmm`, the only format written to storage.
pub fn to_storage_text(instant: &NaiveDateTime) -> String {
    instant.format(STORAGE_FORMAT).to_string()
}

/// Renders `dd MMM yy HH:mm`, e.g. `02 May 25 13:00`.
pub fn to_display_text(instant: &NaiveDateTime) -> String {
    instant.format(DISPLAY_FORMAT).to_string()
}
