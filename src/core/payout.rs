use crate::core::Record;
use crate::domain::model::{coerce_number, HOURLY_RATE, HOURS_WORKED};

/// Payout for one employee: hours worked times hourly rate.
///
/// A missing field contributes zero; a present field that cannot be read as
/// a number collapses the whole payout to 0.0. This never fails, so reports
/// always render even over dirty rows.
pub fn calculate_payout(record: &Record) -> f64 {
    let hours = match record.data.get(HOURS_WORKED) {
        Some(value) => match coerce_number(value) {
            Some(hours) => hours,
            None => return 0.0,
        },
        None => 0.0,
    };

    let rate = match record.data.get(HOURLY_RATE) {
        Some(value) => match coerce_number(value) {
            Some(rate) => rate,
            None => return 0.0,
        },
        None => 0.0,
    };

    hours * rate
}
