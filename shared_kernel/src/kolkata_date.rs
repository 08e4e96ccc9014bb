use chrono::{NaiveDate, Utc};
use chrono_tz::Asia::Kolkata;
use serde::Deserialize;
use std::str::FromStr;

/// How the slot API expects dates to be written in query strings.
/// Deployments of the API disagree on this, so it is configurable.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `DD-MM-YYYY`
    #[default]
    DayMonthYear,
    /// `YYYY-MM-DD`
    YearMonthDay,
}

impl DateFormat {
    fn pattern(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "%d-%m-%Y",
            DateFormat::YearMonthDay => "%Y-%m-%d",
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
/// A calendar date as seen in the Asia/Kolkata time zone
pub struct KolkataDate(NaiveDate);

impl KolkataDate {
    pub fn today() -> Self {
        KolkataDate(Utc::now().with_timezone(&Kolkata).date_naive())
    }

    pub fn format(&self, format: DateFormat) -> String {
        self.0.format(format.pattern()).to_string()
    }
}

impl From<NaiveDate> for KolkataDate {
    fn from(date: NaiveDate) -> Self {
        KolkataDate(date)
    }
}

impl FromStr for KolkataDate {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(value.trim(), DateFormat::YearMonthDay.pattern())
            .map(KolkataDate)
            .map_err(|err| format!("Invalid date {value}, expected YYYY-MM-DD: {err}"))
    }
}

impl std::fmt::Display for KolkataDate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::{DateFormat, KolkataDate};

    #[test]
    fn test_both_query_formats_are_rendered() {
        let date: KolkataDate = "2021-05-09".parse().unwrap();
        assert_eq!(date.format(DateFormat::DayMonthYear), "09-05-2021");
        assert_eq!(date.format(DateFormat::YearMonthDay), "2021-05-09");
    }

    #[test]
    fn test_day_first_dates_are_rejected_as_configuration() {
        assert!("09-05-2021".parse::<KolkataDate>().is_err());
        assert!("".parse::<KolkataDate>().is_err());
    }

    #[test]
    fn test_date_format_is_read_from_snake_case() {
        let format: DateFormat = serde_json::from_str("\"year_month_day\"").unwrap();
        assert_eq!(format, DateFormat::YearMonthDay);
        assert_eq!(DateFormat::default(), DateFormat::DayMonthYear);
    }
}
