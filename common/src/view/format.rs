use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats a server-computed average with two decimals.
pub fn average(value: f64) -> String {
    format!("{:.2}", value)
}

/// Renders a first-registration timestamp as `dd.mm.yyyy`.
///
/// The service has emitted RFC 3339 timestamps, naive ISO timestamps and plain
/// SQL-style `YYYY-MM-DD HH:MM:SS` strings over time. Anything else is shown
/// verbatim.
pub fn registration_date(raw: &str) -> String {
    const DISPLAY: &str = "%d.%m.%Y";
    let raw = raw.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return date_time.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, pattern) {
            return date_time.format(DISPLAY).to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DISPLAY).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_have_two_decimals() {
        assert_eq!(average(31999.333333), "31999.33");
        assert_eq!(average(190.0), "190.00");
        assert_eq!(average(12345.678), "12345.68");
        assert_eq!(average(0.0), "0.00");
    }

    #[test]
    fn registration_date_formats() {
        assert_eq!(registration_date("2021-04-01T00:00:00"), "01.04.2021");
        assert_eq!(registration_date("2021-04-01T00:00:00.000"), "01.04.2021");
        assert_eq!(registration_date("2021-04-01T00:00:00Z"), "01.04.2021");
        assert_eq!(registration_date("2021-04-01T10:30:00+02:00"), "01.04.2021");
        assert_eq!(registration_date("2019-11-15 00:00:00"), "15.11.2019");
        assert_eq!(registration_date("2019-11-15"), "15.11.2019");
    }

    #[test]
    fn unparseable_date_is_kept() {
        assert_eq!(registration_date("11/2019"), "11/2019");
        assert_eq!(registration_date(""), "");
    }
}
