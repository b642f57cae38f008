use chrono::NaiveDate;

pub const PRESENT: &str = "Present";

/// `2022-06` → `Jun 2022`. Blank input renders empty; anything that is not
/// a `YYYY-MM` month renders verbatim.
pub fn format_month(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// `Jun 2022 - Present`, `Sep 2016 - May 2020`, or whichever half exists.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let start = format_month(start);
    let end = if current {
        PRESENT.to_string()
    } else {
        format_month(end)
    };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start,
        (true, false) => end,
        (false, false) => format!("{start} - {end}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2022-06"), "Jun 2022");
        assert_eq!(format_month("2016-09"), "Sep 2016");
        assert_eq!(format_month(" 2020-12 "), "Dec 2020");
    }

    #[test]
    fn test_blank_and_unparseable_months() {
        assert_eq!(format_month(""), "");
        assert_eq!(format_month("   "), "");
        assert_eq!(format_month("Summer 2019"), "Summer 2019");
        assert_eq!(format_month("2020-13"), "2020-13");
    }

    #[test]
    fn test_current_role_ends_present() {
        assert_eq!(date_range("2022-06", "", true), "Jun 2022 - Present");
        assert_eq!(date_range("2022-06", "2023-01", true), "Jun 2022 - Present");
    }

    #[test]
    fn test_partial_ranges() {
        assert_eq!(date_range("2016-09", "2020-05", false), "Sep 2016 - May 2020");
        assert_eq!(date_range("2016-09", "", false), "Sep 2016");
        assert_eq!(date_range("", "2020-05", false), "May 2020");
        assert_eq!(date_range("", "", false), "");
        assert_eq!(date_range("", "", true), "Present");
    }
}
