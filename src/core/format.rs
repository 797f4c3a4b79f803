//! Price and timestamp formatting for display and quotation text

use chrono::{DateTime, Local, TimeZone};

/// Format whole currency units with comma thousands separators.
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format a price with a leading dollar sign, e.g. `$3,000`
pub fn format_usd(amount: u32) -> String {
    format!("${}", format_price(amount))
}

/// Format a generation timestamp the way es-ES locales render it.
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-d/%-m/%Y, %-H:%M:%S").to_string()
}

/// Current local time, formatted for a quotation.
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(80), "80");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1000), "1,000");
        assert_eq!(format_price(3000), "3,000");
        assert_eq!(format_price(1234567), "1,234,567");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(720), "$720");
        assert_eq!(format_usd(1499), "$1,499");
    }

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 30).unwrap();
        assert_eq!(format_timestamp(&at), "7/3/2026, 9:05:30");

        let at = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 9).unwrap();
        assert_eq!(format_timestamp(&at), "31/12/2026, 23:59:09");
    }
}
