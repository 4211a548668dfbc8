use chrono::{Local, NaiveDate, NaiveTime, TimeZone};

/// Hour of day at which survey dates are anchored before being turned into
/// a timestamp. Midday keeps the calendar day stable across UTC offsets.
pub const ANCHOR_HOUR: u32 = 12;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Seconds since epoch of `date` at the anchor hour, local time.
pub fn to_timestamp(date: NaiveDate) -> Option<i64> {
    let anchor = NaiveTime::from_hms_opt(ANCHOR_HOUR, 0, 0)?;
    date.and_time(anchor)
        .and_local_timezone(Local)
        .earliest()
        .map(|dt| dt.timestamp())
}

/// Local calendar date of a stored timestamp.
pub fn from_timestamp(secs: i64) -> Option<NaiveDate> {
    Local
        .timestamp_opt(secs, 0)
        .earliest()
        .map(|dt| dt.date_naive())
}

/// `dd/MM/yyyy`
pub fn format_display(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
