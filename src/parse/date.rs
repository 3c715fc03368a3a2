//! `YYYYMMDD` date tokens.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_YYYYMMDD: Regex =
        Regex::new(r"^([0-9]{4})([0-9]{2})([0-9]{2})$").expect("Invalid Regex?");
}

/// Convert an 8-digit registry date token to a calendar date.
///
/// Returns `None` for anything that is not exactly eight ASCII digits forming a
/// real date. RIR files use `00000000` or an empty field for unknown dates.
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    let caps = RE_YYYYMMDD.captures(token)?;
    let y: i32 = caps[1].parse().ok()?;
    // chrono accepts year 0; dates start at year 1
    if y < 1 {
        return None;
    }
    let m: u32 = caps[2].parse().ok()?;
    let d: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}
