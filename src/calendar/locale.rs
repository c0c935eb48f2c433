//! Static strings for the bundled Thai locale.

use serde::Serialize;

use crate::calendar::grid::YearMonth;
use crate::database::models::LeaveType;

pub const HOLIDAY_LABEL: &str = "วันหยุด";

const MONTH_LABELS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

const WEEKDAY_LABELS: [&str; 7] = ["อา.", "จ.", "อ.", "พ.", "พฤ.", "ศ.", "ส."];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayHeader {
    pub label: &'static str,
    pub weekend: bool,
}

pub fn leave_type_label(leave_type: LeaveType) -> &'static str {
    match leave_type {
        LeaveType::Sick => "ลาป่วย",
        LeaveType::Vacation => "ลาพักร้อน",
        LeaveType::Personal => "ลากิจ",
    }
}

/// Label for a stored leave tag; unknown tags are shown as-is.
pub fn leave_label(tag: &str) -> String {
    match tag.parse::<LeaveType>() {
        Ok(leave_type) => leave_type_label(leave_type).to_string(),
        Err(_) => tag.to_string(),
    }
}

pub fn month_label(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_LABELS.get(index as usize))
        .copied()
        .unwrap_or_default()
}

pub fn month_header(year_month: YearMonth) -> String {
    format!("{} {}", month_label(year_month.month()), year_month.year())
}

pub fn holiday_tooltip(name: &str) -> String {
    format!("{}: {}", HOLIDAY_LABEL, name)
}

/// Sunday-first column headers; Sunday and Saturday are flagged as weekend.
pub fn weekday_headers() -> Vec<WeekdayHeader> {
    WEEKDAY_LABELS
        .into_iter()
        .enumerate()
        .map(|(index, label)| WeekdayHeader {
            label,
            weekend: index == 0 || index == WEEKDAY_LABELS.len() - 1,
        })
        .collect()
}
