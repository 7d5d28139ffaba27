//! Gregorian to Jalali (Solar Hijri) conversion for series date labels.

use chrono::{Datelike, Days, NaiveDate};

const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct JalaliDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

impl std::fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Arithmetic conversion based on the 33-year cycle; valid for the modern era.
pub fn gregorian_to_jalali(date: NaiveDate) -> JalaliDate {
    let gy = date.year() as i64;
    let gm = date.month() as usize;
    let gd = date.day() as i64;

    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100 + (gy2 + 399) / 400
        + gd
        + GREGORIAN_DAYS_BEFORE_MONTH[gm - 1];

    let mut year = -1595 + 33 * (days / 12_053);
    days %= 12_053;
    year += 4 * (days / 1461);
    days %= 1461;
    if days > 365 {
        year += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let (month, day) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    JalaliDate {
        year,
        month: month as u32,
        day: day as u32,
    }
}

/// The `days` calendar days ending at `today`, as Jalali `YYYY/MM/DD`, oldest first.
pub fn jalali_dates(today: NaiveDate, days: usize) -> Vec<String> {
    (0..days as u64)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|d| gregorian_to_jalali(d).to_string())
        .collect()
}
